use crate::{AddGrp, AddGrpOps, Mon, MonOps};

// Commutative rings. 
// `From<i32>` lets generic code build small constants such as initial values.

pub trait RingOps<T = Self>: 
    AddGrpOps<T> + 
    MonOps<T>
{}

pub trait Ring: 
    AddGrp + 
    Mon + 
    RingOps + 
    From<i32>
where
    for<'a> &'a Self: RingOps<Self>
{}
