//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by [MergePipeline] which goes from input files to an output file.
mod merge;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use merge::{MergeOptions, MergePipeline};
pub use pipeline::Pipeline;
