//! Operands: the inputs an instruction consumes.

use core::fmt;

use ecow::{EcoString, EcoVec};
use thiserror::Error;

use crate::interpreter::{ExecutionContext, InterpretError};
use crate::ir::{InlineError, InlinerInfo, ValueMap};
use crate::values::{ArrayValue, Value};

/// A named storage slot, unique within its defining scope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable(EcoString);

impl Variable {
    pub fn new(name: impl Into<EcoString>) -> Self {
        Variable(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A jump target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label(EcoString);

impl Label {
    pub fn new(name: impl Into<EcoString>) -> Self {
        Label(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returned by [`Operand::try_evaluate_array_slice`] when the operand is not
/// an array whose contents are known at compile time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("operand is not a statically known array")]
pub struct NotStaticallyKnown;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Read from a storage slot at run time.
    Variable(Variable),
    /// A value known at compile time.
    Constant(Value),
    /// Array literal. Elements may themselves be variables.
    Array(EcoVec<Operand>),
    Label(Label),
    /// The receiver of the running invocation.
    SelfValue,
}

impl Operand {
    pub fn nil() -> Self {
        Operand::Constant(Value::Nil)
    }

    pub fn var(name: &str) -> Self {
        Operand::Variable(Variable::new(name))
    }

    pub fn fixnum(value: i64) -> Self {
        Operand::Constant(Value::Fixnum(value))
    }

    pub fn array(elements: impl IntoIterator<Item = Operand>) -> Self {
        Operand::Array(elements.into_iter().collect())
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Operand::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// Replace this operand with its known value, if `values` has one.
    ///
    /// Array literals resolve element-wise; everything other than a variable
    /// resolves to itself.
    pub fn resolve(&self, values: &ValueMap) -> Operand {
        match self {
            Operand::Variable(var) => values.get(var).cloned().unwrap_or_else(|| self.clone()),
            Operand::Array(elements) => {
                Operand::Array(elements.iter().map(|e| e.resolve(values)).collect())
            }
            Operand::Constant(_) | Operand::Label(_) | Operand::SelfValue => self.clone(),
        }
    }

    /// Compile-time counterpart of `GET_ARRAY`.
    ///
    /// With `take_rest` the result is an array of the elements from `index`
    /// on (empty past the end); otherwise it is the element at `index`, or
    /// `nil` past the end.
    pub fn try_evaluate_array_slice(
        &self,
        index: usize,
        take_rest: bool,
    ) -> Result<Operand, NotStaticallyKnown> {
        match self {
            Operand::Array(elements) if take_rest => Ok(Operand::Array(
                elements
                    .get(index..)
                    .map(EcoVec::from)
                    .unwrap_or_default(),
            )),
            Operand::Array(elements) => Ok(elements.get(index).cloned().unwrap_or_else(Operand::nil)),
            Operand::Constant(Value::Array(array)) if take_rest => {
                Ok(Operand::Constant(Value::Array(array.tail(index))))
            }
            Operand::Constant(Value::Array(array)) => Ok(Operand::Constant(array.entry(index))),
            _ => Err(NotStaticallyKnown),
        }
    }

    /// Whether `var` occurs anywhere in this operand.
    pub fn mentions(&self, var: &Variable) -> bool {
        match self {
            Operand::Variable(v) => v == var,
            Operand::Array(elements) => elements.iter().any(|e| e.mentions(var)),
            _ => false,
        }
    }

    /// Call `f` on every variable this operand reads, in order.
    pub fn for_each_variable<F: FnMut(&Variable)>(&self, f: &mut F) {
        match self {
            Operand::Variable(var) => f(var),
            Operand::Array(elements) => {
                for element in elements.iter() {
                    element.for_each_variable(f);
                }
            }
            _ => {}
        }
    }

    /// Call `f` on every label this operand refers to.
    pub fn for_each_label<F: FnMut(&Label)>(&self, f: &mut F) {
        match self {
            Operand::Label(label) => f(label),
            Operand::Array(elements) => {
                for element in elements.iter() {
                    element.for_each_label(f);
                }
            }
            _ => {}
        }
    }

    /// Copy this operand into an inlined scope, renaming variables and labels.
    ///
    /// `%self` becomes the call site's receiver.
    pub fn clone_for_inlining(&self, info: &InlinerInfo) -> Result<Operand, InlineError> {
        Ok(match self {
            Operand::Variable(var) => Operand::Variable(info.renamed_variable(var)?),
            Operand::Label(label) => Operand::Label(info.renamed_label(label)?),
            Operand::Array(elements) => Operand::Array(
                elements
                    .iter()
                    .map(|e| e.clone_for_inlining(info))
                    .collect::<Result<_, _>>()?,
            ),
            Operand::Constant(value) => Operand::Constant(value.clone()),
            Operand::SelfValue => info.receiver().clone(),
        })
    }

    /// Produce this operand's run-time value.
    ///
    /// Array literals build a fresh array on every call.
    pub fn retrieve<C: ExecutionContext + ?Sized>(
        &self,
        ctx: &C,
        receiver: &Value,
    ) -> Result<Value, InterpretError> {
        match self {
            Operand::Variable(var) => ctx
                .load(var)
                .cloned()
                .ok_or_else(|| InterpretError::UnboundVariable(var.clone())),
            Operand::Constant(value) => Ok(value.clone()),
            Operand::Array(elements) => elements
                .iter()
                .map(|e| e.retrieve(ctx, receiver))
                .collect::<Result<ArrayValue, _>>()
                .map(Value::Array),
            Operand::Label(label) => Err(InterpretError::LabelAsValue(label.clone())),
            Operand::SelfValue => Ok(receiver.clone()),
        }
    }
}

impl From<Variable> for Operand {
    fn from(var: Variable) -> Self {
        Operand::Variable(var)
    }
}

impl From<Label> for Operand {
    fn from(label: Label) -> Self {
        Operand::Label(label)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Constant(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Variable(var) => write!(f, "{}", var),
            Operand::Constant(value) => write!(f, "{}", value),
            Operand::Array(elements) => {
                write!(f, "Array:[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Operand::Label(label) => write!(f, "{}", label),
            Operand::SelfValue => write!(f, "%self"),
        }
    }
}
