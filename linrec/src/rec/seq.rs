use num_integer::Integer;
use crate::{order2, order3, Ring, RingOps};

// Named sequences. The index type `N` and the value type `R` are
// independent, e.g. `fibonacci::<u32, BigInt>(1000)`.

macro_rules! def_order2 {
    ($(#[$m:meta])* $name:ident, [$a0:expr, $a1:expr], [$c0:expr, $c1:expr]) => {
        $(#[$m])*
        pub fn $name<N, R>(n: N) -> R
        where
            N: Integer + Clone,
            R: Ring, for<'x> &'x R: RingOps<R>
        {
            order2(n, R::from($a0), R::from($a1), R::from($c0), R::from($c1))
        }
    };
}

macro_rules! def_order3 {
    ($(#[$m:meta])* $name:ident, [$a0:expr, $a1:expr, $a2:expr], [$c0:expr, $c1:expr, $c2:expr]) => {
        $(#[$m])*
        pub fn $name<N, R>(n: N) -> R
        where
            N: Integer + Clone,
            R: Ring, for<'x> &'x R: RingOps<R>
        {
            order3(n, R::from($a0), R::from($a1), R::from($a2), R::from($c0), R::from($c1), R::from($c2))
        }
    };
}

def_order2!(
    /// 0, 1, 1, 2, 3, 5, 8, ...
    fibonacci, [0, 1], [1, 1]
);

def_order2!(
    /// 2, 1, 3, 4, 7, 11, 18, ...
    lucas, [2, 1], [1, 1]
);

def_order2!(
    /// 0, 1, 2, 5, 12, 29, 70, ...
    pell, [0, 1], [1, 2]
);

def_order2!(
    /// 2, 2, 6, 14, 34, 82, 198, ...
    pell_lucas, [2, 2], [1, 2]
);

def_order3!(
    /// 1, 0, 0, 1, 0, 1, 1, 1, 2, ...
    padovan, [1, 0, 0], [1, 1, 0]
);

def_order3!(
    /// 3, 0, 2, 3, 2, 5, 5, 7, 10, ...
    perrin, [3, 0, 2], [1, 1, 0]
);

def_order3!(
    /// 0, 0, 1, 1, 2, 4, 7, 13, 24, ...
    tribonacci, [0, 0, 1], [1, 1, 1]
);

def_order3!(
    /// 3, 1, 3, 7, 11, 21, 39, 71, ...
    tribonacci_lucas, [3, 1, 3], [1, 1, 1]
);

def_order3!(
    /// 1, 1, 1, 2, 2, 3, 4, 5, 7, ...
    cordonnier, [1, 1, 1], [1, 1, 0]
);
