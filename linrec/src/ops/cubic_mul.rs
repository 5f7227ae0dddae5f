use crate::{BinOp, Trinomial, Ring, RingOps};

/// Multiplication in T[X]/(X³ - c2·X² - c1·X - c0), acting on [`Trinomial`]s.
/// 
/// The degree-3 and degree-4 parts of the product are folded back with 
/// `X³ = c2·X² + c1·X + c0`. Associative, like any quotient ring product.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ModularCubicMultiplies<R> { 
    c0: R,
    c1: R,
    c2: R,
}

impl<R> ModularCubicMultiplies<R> { 
    pub fn new(c0: R, c1: R, c2: R) -> Self { 
        Self { c0, c1, c2 }
    }

    pub fn coeffs(&self) -> (&R, &R, &R) { 
        (&self.c0, &self.c1, &self.c2)
    }
}

impl<R> BinOp<Trinomial<R>> for ModularCubicMultiplies<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn apply(&self, x: &Trinomial<R>, y: &Trinomial<R>) -> Trinomial<R> {
        // t0: coeff of X⁴, t1: coeff of X³ after reducing X⁴.
        let t0 = &x.m2 * &y.m2;
        let t1 = &x.m1 * &y.m2 + &x.m2 * &y.m1 + &self.c2 * &t0;
        Trinomial::new(
            &x.m0 * &y.m0 + &self.c0 * &t1,
            &x.m0 * &y.m1 + &x.m1 * &y.m0 + &self.c0 * &t0 + &self.c1 * &t1,
            &x.m0 * &y.m2 + &x.m1 * &y.m1 + &x.m2 * &y.m0 + &self.c1 * &t0 + &self.c2 * &t1
        )
    }
}

#[cfg(test)]
mod tests { 
    use super::*;
    use num_bigint::BigInt;
    use rand::Rng;

    #[test]
    fn sample() { 
        let op = ModularCubicMultiplies::new(1, 1, 1);
        let p = Trinomial::new(1, 2, 3);
        let q = Trinomial::new(3, 3, 4);
        assert_eq!(op.apply(&p, &q), Trinomial::new(32, 50, 60));
    }

    #[test]
    fn x_cubed() { 
        // X·X² = c2·X² + c1·X + c0
        let op = ModularCubicMultiplies::new(2, 3, 5);
        let x = Trinomial::<i64>::x();
        let x2 = op.apply(&x, &x);
        assert_eq!(x2, Trinomial::new(0, 0, 1));
        assert_eq!(op.apply(&x2, &x), Trinomial::new(2, 3, 5));
    }

    #[test]
    fn x_fourth() { 
        // X⁴ = X·(c2·X² + c1·X + c0) = (c2² + c1)X² + (c1c2 + c0)X + c0c2
        let op = ModularCubicMultiplies::new(2, 3, 5);
        let x2 = Trinomial::<i64>::new(0, 0, 1);
        assert_eq!(op.apply(&x2, &x2), Trinomial::new(10, 17, 28));
    }

    #[test]
    fn bigint() { 
        let one = BigInt::from(1);
        let op = ModularCubicMultiplies::new(one.clone(), one.clone(), one);
        let p = Trinomial::new(1, 2, 3).map(BigInt::from);
        let q = Trinomial::new(3, 3, 4).map(BigInt::from);
        assert_eq!(op.apply(&p, &q), Trinomial::new(32, 50, 60).map(BigInt::from));
    }

    #[test]
    fn commutative() { 
        let op = ModularCubicMultiplies::new(-1, 4, 2);
        let a = Trinomial::new(1, -3, 2);
        let b = Trinomial::new(4, 5, -6);
        assert_eq!(op.apply(&a, &b), op.apply(&b, &a));
    }

    #[test]
    fn associative() { 
        let mut rng = rand::thread_rng();
        let mut r = || rng.gen_range(-20..=20);

        for _ in 0..100 { 
            let op = ModularCubicMultiplies::<i64>::new(r() % 5, r() % 5, r() % 5);
            let x = Trinomial::new(r(), r(), r());
            let y = Trinomial::new(r(), r(), r());
            let z = Trinomial::new(r(), r(), r());

            let xy_z = op.apply(&op.apply(&x, &y), &z);
            let x_yz = op.apply(&x, &op.apply(&y, &z));
            assert_eq!(xy_z, x_yz);
        }
    }

    #[test]
    fn coeffs() { 
        let op = ModularCubicMultiplies::new(1, 2, 3);
        assert_eq!(op.coeffs(), (&1, &2, &3));
    }
}
