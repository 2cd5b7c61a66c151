//! Graph reformatting.
//!
//! - Builder: marker-driven grouping and transposition
//! - Pipeline: file handling around the builder

pub mod builder;
pub mod pipeline;

pub use builder::*;
pub use pipeline::*;
