//! Alternate decrypt backends.
//!
//! [`UnsupportedBackend`] is bound when the build declares an alternate
//! backend without supplying one. [`ArithBackend`] is a real alternate that
//! computes the inverse cipher without lookup tables.

mod arith;
mod stub;

pub use arith::ArithBackend;
pub use stub::UnsupportedBackend;
