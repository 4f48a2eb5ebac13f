//! Output formatting functions.

pub mod pretty;
