#![allow(non_upper_case_globals)]

use std::ops::{Add, Neg, Sub, Mul, AddAssign, SubAssign, MulAssign};
use std::str::FromStr;
use derive_more::{Display, Debug};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;

use crate::{Elem, AddMonOps, AddGrpOps, MonOps, RingOps, AddMon, AddGrp, Mon, Ring};

type I = i64;

// The residue ring Z/pZ. `p` need not be prime.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Display, Debug)]
#[display("{}", _0)]
#[debug("{}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ModInt<const p: I>(I);

impl<const p: I> ModInt<p> {
    pub fn new(a: I) -> Self {
        assert!(p > 1);
        Self(a.rem_euclid(p))
    }

    pub fn rep(&self) -> &I {
        &self.0
    }

    pub fn modulus() -> I {
        p
    }

    // results of +, -, * on representatives, before reduction.
    fn reduce(a: i128) -> Self {
        Self(a.rem_euclid(p as i128) as I)
    }
}

impl<const p: I> From<i32> for ModInt<p> {
    fn from(a: i32) -> Self {
        Self::new(a as I)
    }
}

impl<const p: I> FromStr for ModInt<p> {
    type Err = <I as FromStr>::Err;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let a = s.trim().parse::<I>()?;
        Ok(Self::new(a))
    }
}

impl<const p: I> Zero for ModInt<p> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<const p: I> One for ModInt<p> {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl<const p: I> Neg for ModInt<p> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.0)
    }
}

impl<'a, const p: I> Neg for &'a ModInt<p> {
    type Output = ModInt<p>;
    fn neg(self) -> Self::Output {
        ModInt::new(-self.0)
    }
}

macro_rules! impl_additive_op {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<'a, 'b, const p: I> $trait<&'b ModInt<p>> for &'a ModInt<p> {
            type Output = ModInt<p>;
            fn $method(self, rhs: &'b ModInt<p>) -> Self::Output {
                ModInt::reduce((self.0 as i128).$method(rhs.0 as i128))
            }
        }
    }
}

impl_additive_op!(Add, add);
impl_additive_op!(Sub, sub);

#[auto_ops]
impl<'a, 'b, const p: I> Mul<&'b ModInt<p>> for &'a ModInt<p> {
    type Output = ModInt<p>;
    fn mul(self, rhs: &'b ModInt<p>) -> Self::Output {
        ModInt::reduce(self.0 as i128 * rhs.0 as i128)
    }
}

macro_rules! impl_alg_ops {
    ($trait:ident) => {
        impl<const p: I> $trait for ModInt<p> {}
        impl<'a, const p: I> $trait<ModInt<p>> for &'a ModInt<p> {}
    };
}

impl_alg_ops!(AddMonOps);
impl_alg_ops!(AddGrpOps);
impl_alg_ops!(MonOps);
impl_alg_ops!(RingOps);

impl<const p: I> Elem for ModInt<p> {
    fn math_symbol() -> String {
        format!("Z/{p}")
    }
}

impl<const p: I> AddMon for ModInt<p> {}
impl<const p: I> AddGrp for ModInt<p> {}
impl<const p: I> Mon for ModInt<p> {}
impl<const p: I> Ring for ModInt<p> {}

#[cfg(test)]
mod tests {
    use super::*;

    type Z5 = ModInt<5>;
    type Z6 = ModInt<6>;
    type Zp = ModInt<1_000_000_007>;

    #[test]
    fn init() {
        let a = Z5::new(-7);
        assert_eq!(a.rep(), &3);

        let a = Z6::new(13);
        assert_eq!(a.rep(), &1);
    }

    #[test]
    fn from_i32() {
        assert_eq!(Z5::from(-1), Z5::new(4));
    }

    #[test]
    fn from_str() {
        assert_eq!("12".parse::<Z5>(), Ok(Z5::new(2)));
        assert_eq!(" -1 ".parse::<Z5>(), Ok(Z5::new(4)));
        assert!("x".parse::<Z5>().is_err());
    }

    #[test]
    fn display() {
        let a = Z5::new(-7);
        assert_eq!(format!("{}", a), "3");
        assert_eq!(format!("{:?}", a), "3");
    }

    #[test]
    fn math_symbol() {
        assert_eq!(Z5::math_symbol(), "Z/5");
        assert_eq!(Zp::math_symbol(), "Z/1000000007");
    }

    #[test]
    fn add() {
        let a = Z5::new(3);
        let b = Z5::new(4);
        assert_eq!(a + b, Z5::new(2));
        assert_eq!(&a + &b, Z5::new(2));
    }

    #[test]
    fn add_assign() {
        let mut a = Z5::new(3);
        a += Z5::new(4);
        assert_eq!(a, Z5::new(2));
    }

    #[test]
    fn neg() {
        let a = Z5::new(3);
        assert_eq!(-a, Z5::new(2));
        assert_eq!(-&a, Z5::new(2));
    }

    #[test]
    fn sub() {
        let a = Z5::new(1);
        let b = Z5::new(4);
        assert_eq!(a - b, Z5::new(2));
    }

    #[test]
    fn mul() {
        let a = Z6::new(2);
        let b = Z6::new(3);
        assert_eq!(a * b, Z6::zero());
    }

    #[test]
    fn mul_large() {
        let a = Zp::new(1_000_000_006); // -1
        let b = Zp::new(1_000_000_005); // -2
        assert_eq!(a * b, Zp::new(2));
    }

    #[test]
    fn mul_assign() {
        let mut a = Z5::new(3);
        a *= &Z5::new(4);
        assert_eq!(a, Z5::new(2));
    }

    #[test]
    fn zero_one() {
        assert!(Z5::zero().is_zero());
        assert!(Z5::one().is_one());
        assert!(!Z5::new(6).is_one());
    }

    type Zmax = ModInt<{ i64::MAX }>;

    #[test]
    fn add_near_max_modulus() {
        let m = i64::MAX;
        let a = Zmax::new(m - 1);
        let b = Zmax::new(m - 2);
        assert_eq!(a + b, Zmax::new(m - 3));
        assert_eq!(&a + &b, Zmax::new(m - 3));

        let mut c = a;
        c += b;
        assert_eq!(c, Zmax::new(m - 3));
    }

    #[test]
    fn sub_near_max_modulus() {
        let m = i64::MAX;
        let a = Zmax::new(1);
        let b = Zmax::new(m - 1);
        assert_eq!(a - b, Zmax::new(2));
        assert_eq!(b - a, Zmax::new(m - 2));
        assert_eq!(-b, Zmax::new(1));
    }

    #[test]
    fn mul_near_max_modulus() {
        let m = i64::MAX;
        let a = Zmax::new(m - 1); // -1
        let b = Zmax::new(m - 2); // -2
        assert_eq!(a * b, Zmax::new(2));
    }
}
