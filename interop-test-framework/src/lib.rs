//! Test framework for the interop crates
//!
//! Behaviour scenarios (cucumber) for the list and the C surface, plus the
//! helpers their step definitions share.

pub mod helpers;

pub use helpers::{
    list_from_pushes, measure_c_str, measure_wrapper, parse_state, OwnedLengthString,
};
