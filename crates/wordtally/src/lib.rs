//! Word frequency tally.
//!
//! Counts whitespace-delimited tokens and reports the most frequent one.
//! Counting and mode selection are pure; only [`tally_file`] touches IO.

pub mod counts;
pub mod source;

pub use counts::{WordCounts, count, mode};
pub use source::{TallyError, tally_file, tally_reader};
