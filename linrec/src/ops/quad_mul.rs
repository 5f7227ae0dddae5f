use crate::{BinOp, Binomial, Ring, RingOps};

/// Multiplication in T[X]/(X² - c1·X - c0), acting on [`Binomial`]s.
/// 
/// The product of `x0 + x1·X` and `y0 + y1·X` is reduced with 
/// `X² = c1·X + c0`. Multiplication in a quotient ring is associative, 
/// so this can be passed to [`power`](crate::power).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ModularQuadraticMultiplies<R> { 
    c0: R,
    c1: R,
}

impl<R> ModularQuadraticMultiplies<R> { 
    pub fn new(c0: R, c1: R) -> Self { 
        Self { c0, c1 }
    }

    pub fn coeffs(&self) -> (&R, &R) { 
        (&self.c0, &self.c1)
    }
}

impl<R> BinOp<Binomial<R>> for ModularQuadraticMultiplies<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn apply(&self, x: &Binomial<R>, y: &Binomial<R>) -> Binomial<R> {
        let t0 = &x.m1 * &y.m1;
        Binomial::new(
            &x.m0 * &y.m0 + &self.c0 * &t0,
            &x.m0 * &y.m1 + &x.m1 * &y.m0 + &self.c1 * &t0
        )
    }
}
