mod elem;
mod add_mon;
mod add_grp;
mod mon;
mod ring;
mod bin_op;

pub use elem::{Elem, ElemBase};
pub use add_mon::{AddMon, AddMonOps};
pub use add_grp::{AddGrp, AddGrpOps};
pub use mon::{Mon, MonOps};
pub use ring::{Ring, RingOps};
pub use bin_op::BinOp;
