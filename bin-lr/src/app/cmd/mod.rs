pub mod seq;
pub mod rec;
pub mod mul;
pub mod demo;
