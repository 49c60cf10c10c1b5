//! Text I/O for [`crate::Number`]: base-10 parsing and formatting (§4.10),
//! and base-`B` digit extraction for arbitrary output radixes (§4.11).

pub(crate) mod fmt;
pub(crate) mod parse;
pub(crate) mod radix;
