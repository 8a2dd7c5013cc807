use hashbrown::HashMap;

use crate::ir::{Operand, Variable};

/// Operands whose value is statically known at the current program point.
///
/// Lives for one constant-folding traversal and is never persisted.
#[derive(Debug, Default, Clone)]
pub struct ValueMap {
    values: HashMap<Variable, Operand>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: &Variable) -> Option<&Operand> {
        self.values.get(var)
    }

    pub fn insert(&mut self, var: Variable, value: Operand) {
        self.values.insert(var, value);
    }

    /// Forget everything known about `var`, including values that read it.
    ///
    /// Called whenever `var` is (re)defined.
    pub fn invalidate(&mut self, var: &Variable) {
        self.values.remove(var);
        self.values.retain(|_, value| !value.mentions(var));
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
