//! Report module - presenting conversion results

pub mod summary;

pub use summary::*;
