//! Fast evaluation of order-2 and order-3 linear recurrences.
//!
//! The `n`-th term is read off from `X^n` in the quotient ring defined by
//! the characteristic polynomial, computed by [`power`] in O(log n)
//! ring multiplications.
//!
//! ```
//! use linrec::{fibonacci, order3, Trinomial, ModularCubicMultiplies, BinOp};
//! use num_bigint::BigInt;
//!
//! let f: BigInt = fibonacci(100u32);
//! assert_eq!(f.to_string(), "354224848179261915075");
//!
//! // Padovan
//! assert_eq!(order3(10, 1, 0, 0, 1, 1, 0), 3);
//!
//! let op = ModularCubicMultiplies::new(1, 1, 1);
//! let r = op.apply(&Trinomial::new(1, 2, 3), &Trinomial::new(3, 3, 4));
//! assert_eq!(r, Trinomial::new(32, 50, 60));
//! ```

mod abst;
mod types;
mod ops;
mod rec;

pub use abst::*;
pub use types::*;
pub use ops::*;
pub use rec::*;
pub use algo::{power, power_accumulate_positive};

pub mod algo;
pub mod util;
