//! Whole-list passes over instruction graphs.
//!
//! Both passes read their input by shared reference and return new
//! instruction lists, so a graph that has been handed to interpreter
//! threads is never modified underneath them.

mod fold;
mod inline;


pub use fold::{ConstantFolder, FoldOptions, FoldOutcome};
pub use inline::Inliner;
