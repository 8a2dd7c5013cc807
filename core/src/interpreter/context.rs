use hashbrown::HashMap;

use crate::ir::Variable;
use crate::values::Value;

/// Storage an instruction reads operands from and writes results to.
///
/// Instructions only borrow the context for the duration of one `interpret`
/// call.
pub trait ExecutionContext {
    fn load(&self, var: &Variable) -> Option<&Value>;

    fn store(&mut self, var: &Variable, value: Value);

    /// Record the value the running scope returns.
    fn set_return(&mut self, value: Value);

    fn take_return(&mut self) -> Option<Value>;
}

/// A call frame backed by a hash map.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    locals: HashMap<Variable, Value>,
    returned: Option<Value>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, var: &Variable, value: Value) {
        self.locals.insert(var.clone(), value);
    }

    pub fn get(&self, var: &Variable) -> Option<&Value> {
        self.locals.get(var)
    }

    pub fn get_mut(&mut self, var: &Variable) -> Option<&mut Value> {
        self.locals.get_mut(var)
    }

    pub fn len(&self) -> usize {
        self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}

impl ExecutionContext for Frame {
    fn load(&self, var: &Variable) -> Option<&Value> {
        self.locals.get(var)
    }

    fn store(&mut self, var: &Variable, value: Value) {
        self.locals.insert(var.clone(), value);
    }

    fn set_return(&mut self, value: Value) {
        self.returned = Some(value);
    }

    fn take_return(&mut self) -> Option<Value> {
        self.returned.take()
    }
}
