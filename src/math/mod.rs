pub mod arith;
pub mod bignum;
#[cfg(test)]
mod interop;
pub mod limbs;
pub mod operation;
pub mod parsefmt;

pub use bignum::BigNum;
