mod order;
mod seq;

pub use order::*;
pub use seq::*;
