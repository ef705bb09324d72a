//! Internal modules ported from external libraries.
//!
//! These modules contain code adapted from:
//! - scipy: rectangular minimum-cost assignment

pub mod scipy;
