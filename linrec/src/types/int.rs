use num_bigint::BigInt;
use crate::{Elem, AddMonOps, AddGrpOps, MonOps, RingOps, AddMon, AddGrp, Mon, Ring};

macro_rules! impl_ops {
    ($trait:ident, $type:ty) => {
        impl $trait for $type {}
        impl<'a> $trait<$type> for &'a $type {}
    };
}

macro_rules! impl_integer {
    ($type:ident) => {
        impl_ops!(AddMonOps, $type);
        impl_ops!(AddGrpOps, $type);
        impl_ops!(MonOps, $type);
        impl_ops!(RingOps, $type);

        impl Elem for $type {
            fn math_symbol() -> String { 
                String::from("Z")
            }
        }
        
        impl AddMon for $type {}
        impl AddGrp for $type {}
        impl Mon for $type {}
        impl Ring for $type {}
    }
}

impl_integer!(i32);
impl_integer!(i64);
impl_integer!(i128);
impl_integer!(BigInt);

#[cfg(test)]
mod tests { 
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn math_symbol() { 
        assert_eq!(i64::math_symbol(), "Z");
        assert_eq!(BigInt::math_symbol(), "Z");
    }

    #[test]
    fn ring_ops_by_ref() { 
        fn f<R>(a: &R, b: &R) -> R
        where R: Ring, for<'x> &'x R: RingOps<R> { 
            a * b + a - b
        }
        assert_eq!(f(&3i64, &4i64), 11);
        assert_eq!(f(&BigInt::from(3), &BigInt::from(4)), BigInt::from(11));
    }

    #[test]
    fn from_i32() { 
        fn f<R: Ring>() -> R where for<'x> &'x R: RingOps<R> { 
            R::from(7)
        }
        assert_eq!(f::<i128>(), 7);
        assert_eq!(f::<BigInt>(), BigInt::from(7));
    }

    #[test]
    fn bigint_zero_one() { 
        assert!(BigInt::zero().is_zero());
        assert!(BigInt::one().is_one());
        assert!(!(-BigInt::one()).is_one());
    }
}
