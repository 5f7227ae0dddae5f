// A binary operation on `T`, applied to borrowed operands. 
// `power` only requires it to be associative. 

pub trait BinOp<T> { 
    fn apply(&self, x: &T, y: &T) -> T;
}

impl<T, F> BinOp<T> for F
where F: Fn(&T, &T) -> T { 
    fn apply(&self, x: &T, y: &T) -> T {
        self(x, y)
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    fn apply_twice<T, Op>(op: Op, x: &T) -> T
    where Op: BinOp<T> { 
        let y = op.apply(x, x);
        op.apply(&y, x)
    }

    #[test]
    fn closure() { 
        let add = |x: &i32, y: &i32| x + y;
        assert_eq!(add.apply(&2, &3), 5);
        assert_eq!(apply_twice(add, &2), 6);
    }

    #[test]
    fn fn_item() { 
        fn max(x: &i64, y: &i64) -> i64 { 
            *x.max(y)
        }
        assert_eq!(max.apply(&2, &7), 7);
    }

    #[test]
    fn by_ref() { 
        let mul = |x: &i32, y: &i32| x * y;
        assert_eq!(apply_twice(&mul, &3), 27);
    }
}
