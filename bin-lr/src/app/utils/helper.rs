use num_bigint::BigUint;
use crate::app::err::*;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration) 
where F: FnOnce() -> Res { 
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

// indices may exceed u64, e.g. for the residue rings.
pub fn parse_index(s: &str) -> Result<BigUint, Box<dyn std::error::Error>> { 
    match s.trim().parse::<BigUint>() { 
        Ok(n) => Ok(n),
        Err(_) => err!("invalid index: '{s}', must be a non-negative integer.")
    }
}
