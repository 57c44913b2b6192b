//! The procedures on truth vectors.
//!
//! [enumerate] and [evaluate] are simple, and included as the remaining procedures are defined in terms of them.
//! [compose] is the key procedure, and [reduce] applies it to a sequence of vectors.

pub mod compose;
pub mod enumerate;
pub mod evaluate;
pub mod reduce;
