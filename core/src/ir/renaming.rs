//! Renaming tables used when a callee is cloned into a caller.

use hashbrown::HashMap;
use thiserror::Error;

use crate::ir::{Label, Operand, Variable};

/// Inlining failures. All of them point at a defect in the inliner itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InlineError {
    #[error("no renaming recorded for variable `{0}`")]
    MissingVariable(Variable),

    #[error("no renaming recorded for label `{0}`")]
    MissingLabel(Label),

    #[error("call passes {found} argument(s) but the callee takes {expected}")]
    ArityMismatch { expected: usize, found: usize },
}

/// The renaming table for one inlining event.
///
/// Maps every variable and label of the callee to a fresh one in the caller,
/// and carries the call site's receiver (what `%self` means inside the
/// inlined body), the variable receiving the call's result and the label
/// that control reaches once the inlined body returns.
#[derive(Debug, Clone)]
pub struct InlinerInfo {
    variables: HashMap<Variable, Variable>,
    labels: HashMap<Label, Label>,
    receiver: Operand,
    call_result: Variable,
    exit_label: Label,
}

impl InlinerInfo {
    pub fn new(receiver: Operand, call_result: Variable, exit_label: Label) -> Self {
        Self {
            variables: HashMap::new(),
            labels: HashMap::new(),
            receiver,
            call_result,
            exit_label,
        }
    }

    pub fn contains_variable(&self, original: &Variable) -> bool {
        self.variables.contains_key(original)
    }

    pub fn contains_label(&self, original: &Label) -> bool {
        self.labels.contains_key(original)
    }

    pub fn add_variable(&mut self, original: Variable, renamed: Variable) {
        self.variables.insert(original, renamed);
    }

    pub fn add_label(&mut self, original: Label, renamed: Label) {
        self.labels.insert(original, renamed);
    }

    pub fn renamed_variable(&self, original: &Variable) -> Result<Variable, InlineError> {
        self.variables
            .get(original)
            .cloned()
            .ok_or_else(|| InlineError::MissingVariable(original.clone()))
    }

    pub fn renamed_label(&self, original: &Label) -> Result<Label, InlineError> {
        self.labels
            .get(original)
            .cloned()
            .ok_or_else(|| InlineError::MissingLabel(original.clone()))
    }

    /// The callee's receiver, expressed in the caller's scope.
    pub fn receiver(&self) -> &Operand {
        &self.receiver
    }

    pub fn call_result(&self) -> &Variable {
        &self.call_result
    }

    pub fn exit_label(&self) -> &Label {
        &self.exit_label
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}
