use std::fmt::Display;
use std::str::FromStr;
use num_traits::{Zero, One};

// An element `m0 + m1·X` of a quadratic quotient ring T[X]/(X² - c1·X - c0).
// The reducing coefficients are not stored; see `ModularQuadraticMultiplies`.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Binomial<T> { 
    pub m0: T,
    pub m1: T,
}

impl<T> Binomial<T> { 
    pub const fn new(m0: T, m1: T) -> Self { 
        Self { m0, m1 }
    }

    pub fn map<U, F>(self, f: F) -> Binomial<U>
    where F: Fn(T) -> U { 
        Binomial::new(f(self.m0), f(self.m1))
    }

    pub fn into_tuple(self) -> (T, T) { 
        (self.m0, self.m1)
    }
}

impl<T> Binomial<T>
where T: Zero + One {
    // the shift operator X.
    pub fn x() -> Self { 
        Self::new(T::zero(), T::one())
    }
}

impl<T> From<(T, T)> for Binomial<T> {
    fn from(pair: (T, T)) -> Self {
        let (m0, m1) = pair;
        Self::new(m0, m1)
    }
}

impl<T> FromStr for Binomial<T>
where T: FromStr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut v = crate::util::parse::parse_tuple::<T>(s, 2)?.into_iter();
        match (v.next(), v.next()) { 
            (Some(m0), Some(m1)) => Ok(Self::new(m0, m1)),
            _ => Err(format!("cannot parse string: '{s}'"))
        }
    }
}

impl<T> Display for Binomial<T>
where T: Display + Zero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::util::format::lc;
        let terms = [("1", &self.m0), ("X", &self.m1)];
        let s = lc(terms.into_iter().filter(|(_, r)| !r.is_zero()));
        f.write_str(&s)
    }
}
