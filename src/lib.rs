//! Arbitrary-precision decimal fixed-point arithmetic with POSIX `bc`
//! numeric semantics.
//!
//! Every value is a signed [`num_bigint::BigInt`] magnitude paired with a
//! non-negative decimal `scale`: the represented value is
//! `sign * digits * 10^(-scale)`. Unlike the fixed-width `Decimal` types this
//! crate's layout descends from, there is no upper bound on either the
//! number of significant digits or the scale; the trade-off is that every
//! operation must explicitly decide what *result* scale to settle on, since
//! there is no fixed-width container to fall back on. [`Number`] and its
//! `ops` submodules exist to make that decision once, correctly, in one
//! place, matching the rules `bc` itself uses: align operands of differing
//! scale by stepping the smaller one up by a power of ten, and truncate
//! (never round) toward zero whenever a result scale demands fewer digits
//! than the exact computation produced.
//!
//! ```
//! use bc_num::Number;
//!
//! let a = Number::parse("10", 0);
//! let b = Number::parse("3", 0);
//! let quotient = a.divide(&b, 5).unwrap();
//! assert_eq!(quotient.to_string(), "3.33333");
//! ```
#![forbid(unsafe_code)]
#![deny(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
extern crate alloc;

mod error;
mod number;
mod ops;
mod str;

#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "serde")]
mod serde;

pub use error::Error;
pub use number::Number;

/// A convenience module appropriate for glob imports (`use bc_num::prelude::*;`).
pub mod prelude {
    pub use crate::{Error, Number};
}

/// Shortcut for `core::result::Result<T, bc_num::Error>`. Useful to distinguish
/// between `bc_num` and `std` types.
pub type Result<T> = core::result::Result<T, Error>;
