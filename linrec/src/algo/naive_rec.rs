use crate::{Ring, RingOps};

// O(n) evaluation by stepping the recurrence. 
// Reference values for `order2` / `order3`.

pub fn naive_order2<R>(n: usize, a0: R, a1: R, c0: R, c1: R) -> R
where R: Ring, for<'x> &'x R: RingOps<R> { 
    let (mut a0, mut a1) = (a0, a1);
    for _ in 0..n { 
        let a2 = &c1 * &a1 + &c0 * &a0;
        a0 = std::mem::replace(&mut a1, a2);
    }
    a0
}

pub fn naive_order3<R>(n: usize, a0: R, a1: R, a2: R, c0: R, c1: R, c2: R) -> R
where R: Ring, for<'x> &'x R: RingOps<R> { 
    let (mut a0, mut a1, mut a2) = (a0, a1, a2);
    for _ in 0..n { 
        let a3 = &c2 * &a2 + &c1 * &a1 + &c0 * &a0;
        a0 = std::mem::replace(&mut a1, std::mem::replace(&mut a2, a3));
    }
    a0
}
