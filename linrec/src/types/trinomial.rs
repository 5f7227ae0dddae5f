use std::fmt::Display;
use std::str::FromStr;
use num_traits::{Zero, One};

// An element `m0 + m1·X + m2·X²` of a cubic quotient ring 
// T[X]/(X³ - c2·X² - c1·X - c0). See `ModularCubicMultiplies`.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Trinomial<T> { 
    pub m0: T,
    pub m1: T,
    pub m2: T,
}

impl<T> Trinomial<T> { 
    pub const fn new(m0: T, m1: T, m2: T) -> Self { 
        Self { m0, m1, m2 }
    }

    pub fn map<U, F>(self, f: F) -> Trinomial<U>
    where F: Fn(T) -> U { 
        Trinomial::new(f(self.m0), f(self.m1), f(self.m2))
    }

    pub fn into_tuple(self) -> (T, T, T) { 
        (self.m0, self.m1, self.m2)
    }
}

impl<T> Trinomial<T>
where T: Zero + One {
    // the shift operator X.
    pub fn x() -> Self { 
        Self::new(T::zero(), T::one(), T::zero())
    }
}

impl<T> From<(T, T, T)> for Trinomial<T> {
    fn from(triple: (T, T, T)) -> Self {
        let (m0, m1, m2) = triple;
        Self::new(m0, m1, m2)
    }
}

impl<T> FromStr for Trinomial<T>
where T: FromStr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut v = crate::util::parse::parse_tuple::<T>(s, 3)?.into_iter();
        match (v.next(), v.next(), v.next()) { 
            (Some(m0), Some(m1), Some(m2)) => Ok(Self::new(m0, m1, m2)),
            _ => Err(format!("cannot parse string: '{s}'"))
        }
    }
}

impl<T> Display for Trinomial<T>
where T: Display + Zero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::util::format::{lc, superscript};
        let x2 = format!("X{}", superscript(2));
        let terms = [("1", &self.m0), ("X", &self.m1), (x2.as_str(), &self.m2)];
        let s = lc(terms.into_iter().filter(|(_, r)| !r.is_zero()));
        f.write_str(&s)
    }
}
