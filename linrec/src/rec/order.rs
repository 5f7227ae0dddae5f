use num_integer::Integer;
use crate::{power, Binomial, Trinomial, ModularQuadraticMultiplies, ModularCubicMultiplies, Ring, RingOps};

// Advancing a recurrence by n steps is multiplication by X^n in the 
// quotient ring given by its characteristic polynomial. 

/// The `n`-th term of `a(k) = c1·a(k-1) + c0·a(k-2)` with 
/// `a(0) = a0`, `a(1) = a1`.
/// 
/// # Panics
/// 
/// Panics if `n` is negative.
pub fn order2<N, R>(n: N, a0: R, a1: R, c0: R, c1: R) -> R
where 
    N: Integer + Clone, 
    R: Ring, for<'x> &'x R: RingOps<R> 
{ 
    assert!(n >= N::zero(), "index must be non-negative.");

    if n.is_zero() { 
        return a0
    }

    let op = ModularQuadraticMultiplies::new(c0, c1);
    let t = power(Binomial::<R>::x(), n, op);

    log::trace!("X^n = {t} in {}[X]/(X² - c1·X - c0)", R::math_symbol());

    a0 * &t.m0 + a1 * &t.m1
}

/// The `n`-th term of `a(k) = c2·a(k-1) + c1·a(k-2) + c0·a(k-3)` with 
/// `a(0) = a0`, `a(1) = a1`, `a(2) = a2`.
/// 
/// # Panics
/// 
/// Panics if `n` is negative.
pub fn order3<N, R>(n: N, a0: R, a1: R, a2: R, c0: R, c1: R, c2: R) -> R
where 
    N: Integer + Clone, 
    R: Ring, for<'x> &'x R: RingOps<R> 
{ 
    assert!(n >= N::zero(), "index must be non-negative.");

    if n.is_zero() { 
        return a0
    }

    let op = ModularCubicMultiplies::new(c0, c1, c2);
    let t = power(Trinomial::<R>::x(), n, op);

    log::trace!("X^n = {t} in {}[X]/(X³ - c2·X² - c1·X - c0)", R::math_symbol());

    a0 * &t.m0 + a1 * &t.m1 + a2 * &t.m2
}

// A fixed order-2 recurrence: initial values and coefficients.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Order2<R> { 
    init: (R, R),
    coeffs: (R, R),
}

impl<R> Order2<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn new(init: (R, R), coeffs: (R, R)) -> Self { 
        Self { init, coeffs }
    }

    pub fn init(&self) -> &(R, R) { 
        &self.init
    }

    pub fn coeffs(&self) -> &(R, R) { 
        &self.coeffs
    }

    pub fn nth<N>(&self, n: N) -> R
    where N: Integer + Clone { 
        let (a0, a1) = self.init.clone();
        let (c0, c1) = self.coeffs.clone();
        order2(n, a0, a1, c0, c1)
    }

    // all terms from a(0), by stepping.
    pub fn iter(&self) -> impl Iterator<Item = R> + '_ { 
        let (c0, c1) = &self.coeffs;
        itertools::iterate(self.init.clone(), move |(a0, a1)| 
            (a1.clone(), c1 * a1 + c0 * a0)
        ).map(|(a0, _)| a0)
    }
}

// A fixed order-3 recurrence: initial values and coefficients.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Order3<R> { 
    init: (R, R, R),
    coeffs: (R, R, R),
}

impl<R> Order3<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn new(init: (R, R, R), coeffs: (R, R, R)) -> Self { 
        Self { init, coeffs }
    }

    pub fn init(&self) -> &(R, R, R) { 
        &self.init
    }

    pub fn coeffs(&self) -> &(R, R, R) { 
        &self.coeffs
    }

    pub fn nth<N>(&self, n: N) -> R
    where N: Integer + Clone { 
        let (a0, a1, a2) = self.init.clone();
        let (c0, c1, c2) = self.coeffs.clone();
        order3(n, a0, a1, a2, c0, c1, c2)
    }

    pub fn iter(&self) -> impl Iterator<Item = R> + '_ { 
        let (c0, c1, c2) = &self.coeffs;
        itertools::iterate(self.init.clone(), move |(a0, a1, a2)| 
            (a1.clone(), a2.clone(), c2 * a2 + c1 * a1 + c0 * a0)
        ).map(|(a0, _, _)| a0)
    }
}
