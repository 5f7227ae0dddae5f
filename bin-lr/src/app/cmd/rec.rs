use std::marker::PhantomData;
use std::str::FromStr;
use itertools::Itertools;
use log::info;
use num_traits::ToPrimitive;
use linrec::{Binomial, Trinomial, Order2, Order3, Ring, RingOps};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch2(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App2, args)
}

pub fn dispatch3(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App3, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub n: String,

    /// Initial values a(0), a(1)[, a(2)], comma separated.
    pub init: String,

    /// Coefficients c0, c1[, c2], comma separated.
    pub coeffs: String,

    /// Print all terms a(0), ..., a(n).
    #[arg(short, long)]
    pub list: bool,

    #[arg(short = 't', long, default_value = "Z")]
    pub c_type: CType,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App2<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    args: Args,
    _ring: PhantomData<R>
}

impl<R> App2<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    pub fn new(args: Args) -> Self { 
        App2 { args, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> { 
        let n = parse_index(&self.args.n)?;
        let init = self.args.init.parse::<Binomial<R>>()?;
        let coeffs = self.args.coeffs.parse::<Binomial<R>>()?;

        info!("a(n) = {} a(n-1) + {} a(n-2), a(0) = {}, a(1) = {}", coeffs.m1, coeffs.m0, init.m0, init.m1);

        let rec = Order2::new(init.into_tuple(), coeffs.into_tuple());

        if self.args.list { 
            let Some(n) = n.to_usize() else { 
                return err!("index too large to list: {n}")
            };
            Ok(rec.iter().take(n + 1).join(", "))
        } else { 
            Ok(rec.nth(n).to_string())
        }
    }
}

pub struct App3<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    args: Args,
    _ring: PhantomData<R>
}

impl<R> App3<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    pub fn new(args: Args) -> Self { 
        App3 { args, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> { 
        let n = parse_index(&self.args.n)?;
        let init = self.args.init.parse::<Trinomial<R>>()?;
        let coeffs = self.args.coeffs.parse::<Trinomial<R>>()?;

        info!("a(n) = {} a(n-1) + {} a(n-2) + {} a(n-3), a(0) = {}, a(1) = {}, a(2) = {}", 
            coeffs.m2, coeffs.m1, coeffs.m0, init.m0, init.m1, init.m2);

        let rec = Order3::new(init.into_tuple(), coeffs.into_tuple());

        if self.args.list { 
            let Some(n) = n.to_usize() else { 
                return err!("index too large to list: {n}")
            };
            Ok(rec.iter().take(n + 1).join(", "))
        } else { 
            Ok(rec.nth(n).to_string())
        }
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn lucas() { 
        let args = Args { 
            n: "10".to_string(),
            init: "2,1".to_string(),
            coeffs: "1,1".to_string(),
            ..Default::default()
        };
        let res = dispatch2(&args);
        assert_eq!(res.unwrap(), "123");
    }

    #[test]
    fn zero_index() { 
        let args = Args { 
            n: "0".to_string(),
            init: "-4,1".to_string(),
            coeffs: "(3, 5)".to_string(),
            ..Default::default()
        };
        let res = dispatch2(&args);
        assert_eq!(res.unwrap(), "-4");
    }

    #[test]
    fn perrin() { 
        let args = Args { 
            n: "10".to_string(),
            init: "3,0,2".to_string(),
            coeffs: "1,1,0".to_string(),
            ..Default::default()
        };
        let res = dispatch3(&args);
        assert_eq!(res.unwrap(), "17");
    }

    #[test]
    fn list() { 
        let args = Args { 
            n: "7".to_string(),
            init: "0,0,1".to_string(),
            coeffs: "1,1,1".to_string(),
            list: true,
            ..Default::default()
        };
        let res = dispatch3(&args);
        assert_eq!(res.unwrap(), "0, 0, 1, 1, 2, 4, 7, 13");
    }

    #[test]
    fn modp() { 
        let args = Args { 
            n: "5".to_string(),
            init: "0,1".to_string(),
            coeffs: "-1,0".to_string(),
            c_type: CType::Mod,
            list: true,
            ..Default::default()
        };
        // a(n) = -a(n-2)
        let res = dispatch2(&args);
        assert_eq!(res.unwrap(), "0, 1, 0, 1000000006, 0, 1");
    }

    #[test]
    fn wrong_order() { 
        let args = Args { 
            n: "10".to_string(),
            init: "0,1".to_string(),
            coeffs: "1,1".to_string(),
            ..Default::default()
        };
        assert!(dispatch3(&args).is_err());
    }

    #[test]
    fn invalid_value() { 
        let args = Args { 
            n: "10".to_string(),
            init: "0,x".to_string(),
            coeffs: "1,1".to_string(),
            ..Default::default()
        };
        assert!(dispatch2(&args).is_err());
    }
}
