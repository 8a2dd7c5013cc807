//! Interpretation errors.
//!
//! None of these are visible to the guest program. An [`InterpretError`]
//! means an earlier compiler phase produced inconsistent IR; a
//! [`ResourceExceededError`] means the driver's configured limits were hit.
//! Out-of-bounds extraction is not an error: it yields `nil` or `[]`.

use thiserror::Error;

use crate::ir::{Label, Operand, Variable};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpretError {
    /// `GET_ARRAY` found something other than an array in its source.
    #[error("GET_ARRAY source `{operand}` is not an array (found {found})")]
    NotAnArray {
        operand: Operand,
        found: &'static str,
    },

    #[error("variable `{0}` read before it was assigned")]
    UnboundVariable(Variable),

    #[error("label `{0}` used as a value")]
    LabelAsValue(Label),

    #[error("jump to unknown label `{0}`")]
    UnknownLabel(Label),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceExceededError {
    #[error("step limit exceeded: executed {steps} instructions (limit: {max_steps})")]
    StepLimit { steps: usize, max_steps: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExecutionError {
    #[error(transparent)]
    Interpret(#[from] InterpretError),

    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceededError),
}
