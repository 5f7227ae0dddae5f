use std::marker::PhantomData;
use std::str::FromStr;
use log::info;
use linrec::{BinOp, Binomial, Trinomial, ModularQuadraticMultiplies, ModularCubicMultiplies, Ring, RingOps};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub x: String,

    pub y: String,

    /// c0, c1 for X² = c1·X + c0, or c0, c1, c2 for X³ = c2·X² + c1·X + c0.
    pub coeffs: String,

    #[arg(short = 't', long, default_value = "Z")]
    pub c_type: CType,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    args: Args,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    pub fn new(args: Args) -> Self { 
        App { args, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> { 
        let order = self.args.coeffs.split(',').count();

        info!("multiply in degree-{order} quotient ring over {}", R::math_symbol());

        ensure!(order == 2 || order == 3, "expected 2 or 3 coefficients, found {order}: '{}'", self.args.coeffs);

        if order == 2 { 
            self.run_quad()
        } else { 
            self.run_cubic()
        }
    }

    fn run_quad(&self) -> Result<String, Box<dyn std::error::Error>> { 
        let x = self.args.x.parse::<Binomial<R>>()?;
        let y = self.args.y.parse::<Binomial<R>>()?;
        let c = self.args.coeffs.parse::<Binomial<R>>()?;

        let op = ModularQuadraticMultiplies::new(c.m0, c.m1);
        let z = op.apply(&x, &y);
        Ok(z.to_string())
    }

    fn run_cubic(&self) -> Result<String, Box<dyn std::error::Error>> { 
        let x = self.args.x.parse::<Trinomial<R>>()?;
        let y = self.args.y.parse::<Trinomial<R>>()?;
        let c = self.args.coeffs.parse::<Trinomial<R>>()?;

        let op = ModularCubicMultiplies::new(c.m0, c.m1, c.m2);
        let z = op.apply(&x, &y);
        Ok(z.to_string())
    }
}
