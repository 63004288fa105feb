pub mod arith;
pub mod info;
pub mod length;
