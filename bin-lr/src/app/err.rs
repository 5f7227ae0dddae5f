// Errors raised by the `lr` front end itself: bad indices, bad coefficient
// counts, caught panics. Parse errors from `linrec` pass through as strings.

#[derive(Debug, derive_more::Display)]
#[display("{msg}")]
pub struct LrError { 
    pub msg: String
}

impl std::error::Error for LrError {}

macro_rules! err {
    ($($arg:tt)*) => {{
        use crate::app::err::LrError;
        let e = LrError { msg: format!($($arg)*) };
        Err( e.into() )
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond { 
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};

#[cfg(test)]
mod tests { 
    use super::*;

    fn check_order(k: usize) -> Result<usize, Box<dyn std::error::Error>> { 
        ensure!(k == 2 || k == 3, "unsupported order: {k}");
        Ok(k)
    }

    #[test]
    fn ensure_passes() { 
        assert_eq!(check_order(3).unwrap(), 3);
    }

    #[test]
    fn ensure_fails() { 
        let e = check_order(4).unwrap_err();
        assert_eq!(e.to_string(), "unsupported order: 4");
        assert!(e.downcast_ref::<LrError>().is_some());
    }
}
