pub mod format;
pub mod parse;
pub mod log;
