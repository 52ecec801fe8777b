//! Core definitions (error and result types), relied upon by all runseq-* crates.

pub mod error;
pub mod result;

pub use result::Result;
