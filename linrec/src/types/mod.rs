mod int;
mod mod_int;
mod binomial;
mod trinomial;

pub use mod_int::ModInt;
pub use binomial::Binomial;
pub use trinomial::Trinomial;
