use clap::ValueEnum;
use derive_more::Display;
use num_integer::Integer;
use linrec::{Ring, RingOps};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="verbatim")]
pub enum CType { 
    #[default] Z, 
    BigInt, 
    Mod, 
    Mod998
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="snake_case")]
pub enum SeqName { 
    #[default] 
    Fibonacci, 
    Lucas, 
    Pell, 
    PellLucas, 
    Padovan, 
    Perrin, 
    Tribonacci, 
    TribonacciLucas, 
    Cordonnier
}

impl SeqName { 
    pub fn eval<N, R>(&self, n: N) -> R
    where N: Integer + Clone, R: Ring, for<'x> &'x R: RingOps<R> { 
        use SeqName::*;
        match self { 
            Fibonacci       => linrec::fibonacci(n),
            Lucas           => linrec::lucas(n),
            Pell            => linrec::pell(n),
            PellLucas       => linrec::pell_lucas(n),
            Padovan         => linrec::padovan(n),
            Perrin          => linrec::perrin(n),
            Tribonacci      => linrec::tribonacci(n),
            TribonacciLucas => linrec::tribonacci_lucas(n),
            Cordonnier      => linrec::cordonnier(n),
        }
    }
}
