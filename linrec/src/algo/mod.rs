mod power;
mod naive_rec;

pub use power::{power, power_accumulate_positive};
pub use naive_rec::{naive_order2, naive_order3};
