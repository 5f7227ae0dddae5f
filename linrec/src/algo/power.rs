use num_integer::Integer;
use crate::BinOp;

/// Computes `a ∘ a ∘ ... ∘ a` (`n` times) for an associative `op`, 
/// using O(log n) applications of `op`.
/// 
/// `op` need not be commutative nor have an identity. 
/// 
/// # Panics
/// 
/// Panics if `n` is not positive.
/// 
/// ```
/// use linrec::power;
/// 
/// let mul = |x: &u64, y: &u64| x * y;
/// assert_eq!(power(3, 5, mul), 243);
/// 
/// let add = |x: &i64, y: &i64| x + y;
/// assert_eq!(power(7, 6, add), 42);
/// ```
pub fn power<T, N, Op>(a: T, n: N, op: Op) -> T
where N: Integer + Clone, Op: BinOp<T> { 
    assert!(n > N::zero(), "exponent must be positive.");

    let two = N::one() + N::one();
    let mut a = a;
    let mut n = n;

    // peel off factors of two before touching the accumulator.
    while n.is_even() { 
        a = op.apply(&a, &a);
        n = n / two.clone();
    }

    n = n / two;
    if n.is_zero() { 
        return a
    }

    let a2 = op.apply(&a, &a);
    power_accumulate_positive(a, a2, n, op)
}

/// Computes `r ∘ a^n` for an associative `op` and a positive `n`.
/// 
/// # Panics
/// 
/// Panics if `n` is not positive.
pub fn power_accumulate_positive<T, N, Op>(r: T, a: T, n: N, op: Op) -> T
where N: Integer + Clone, Op: BinOp<T> { 
    assert!(n > N::zero(), "exponent must be positive.");

    let two = N::one() + N::one();
    let mut r = r;
    let mut a = a;
    let mut n = n;

    loop { 
        if n.is_odd() { 
            r = op.apply(&r, &a);
            if n.is_one() { 
                return r
            }
        }
        a = op.apply(&a, &a);
        n = n / two.clone();
    }
}
