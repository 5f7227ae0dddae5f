use linrec::ModInt;

cfg_if::cfg_if! {
    if #[cfg(feature = "i128")] {
        pub type Int = i128;
    } else if #[cfg(feature = "bigint")] {
        pub type Int = num_bigint::BigInt;
    } else {
        pub type Int = i64;
    }
}

pub type BigInt = num_bigint::BigInt;
pub type ModP = ModInt<1_000_000_007>;
pub type Mod998 = ModInt<998_244_353>;

macro_rules! dispatch_ring {
    ($app:ident, $args:expr) => {{
        use crate::app::utils::CType;
        use crate::app::utils::dispatch::*;

        log::info!("ring: {}", $args.c_type);

        match $args.c_type { 
            CType::Z      => $app::<Int>::new($args.clone()).run(),
            CType::BigInt => $app::<BigInt>::new($args.clone()).run(),
            CType::Mod    => $app::<ModP>::new($args.clone()).run(),
            CType::Mod998 => $app::<Mod998>::new($args.clone()).run(),
        }
    }};
}

pub(crate) use dispatch_ring;
