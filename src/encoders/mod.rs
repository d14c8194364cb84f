mod common;
pub mod jpeg;
pub mod png;
