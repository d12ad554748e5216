pub mod error;
pub mod io;
pub mod lang;
pub mod merge;
pub mod pipelines;
pub mod records;
