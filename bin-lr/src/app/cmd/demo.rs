use std::marker::PhantomData;
use clap::ValueEnum;
use linrec::{BinOp, Trinomial, ModularCubicMultiplies, Ring, RingOps};
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App, args)
}

#[derive(Clone, Debug, clap::Args)]
pub struct Args { 
    #[arg(default_value = "10")]
    pub n: String,

    #[arg(short = 't', long, default_value = "Z")]
    pub c_type: CType,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

impl Default for Args {
    fn default() -> Self {
        Self { n: "10".to_string(), c_type: CType::default(), log: 0 }
    }
}

pub struct App<R>
where
    R: Ring,
    for<'x> &'x R: RingOps<R>,
{
    args: Args,
    buff: String,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: Ring,
    for<'x> &'x R: RingOps<R>,
{
    pub fn new(args: Args) -> Self { 
        let buff = String::with_capacity(256);
        App { args, buff, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> { 
        let n = parse_index(&self.args.n)?;

        for s in SeqName::value_variants() { 
            let a: R = s.eval(n.clone());
            self.out(&a.to_string());
        }

        let op = ModularCubicMultiplies::new(R::from(1), R::from(1), R::from(1));
        let p = Trinomial::new(1, 2, 3).map(|a: i32| R::from(a));
        let q = Trinomial::new(3, 3, 4).map(|a: i32| R::from(a));
        let r = op.apply(&p, &q);
        self.out(&format!("{}, {}, {}", r.m0, r.m1, r.m2));

        Ok(self.flush())
    }

    fn out(&mut self, str: &str) { 
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String { 
        let res = std::mem::take(&mut self.buff);
        res.trim().to_string()
    }
}
