//! Key structures: truth symbols, assignments, and truth vectors.
//!
//! # (Boolean) values
//!
//! A (boolean) value is one of two things, written `t` or `f`.
//! When read, other spellings are accepted (see [symbol]).
//!
//! # Functions
//!
//! A boolean function of *n* inputs is identified with its [truth vector](truth_vector), the list of its outputs at each [assignment](assignment) to its inputs.
//! No other representation of a function is used by the library.

pub mod assignment;
pub mod symbol;
pub mod truth_vector;
