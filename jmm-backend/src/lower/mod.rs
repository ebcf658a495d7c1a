//! Lowering Module - Class and method emission
//!
//! `class` assembles the complete assembly file for one class unit; `method`
//! turns a single IR method into a finished method block with its frame
//! limits.

pub mod class;
mod method;

pub use class::lower_class;
