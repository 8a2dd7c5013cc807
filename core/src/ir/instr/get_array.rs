//! `GET_ARRAY`: element or tail extraction for multiple assignment.
//!
//! Lowering `a, *rest = value` produces one `GET_ARRAY` per target, all
//! reading the same compiler-internal array:
//!
//! ```text
//! a    = %v_0[0] (GET_ARRAY)
//! rest = %v_0[1:END] (GET_ARRAY)
//! ```
//!
//! The instruction reads its source directly and never dispatches through
//! guest-level indexing methods, so user redefinitions of array indexing do
//! not change destructuring.

use core::fmt;

use smallvec::smallvec;

use super::{Instr, Instruction, Operands, Operation, Simplified};
use crate::interpreter::{ExecutionContext, InterpretError};
use crate::ir::{InlineError, InlinerInfo, Label, Operand, ValueMap, Variable};
use crate::values::Value;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GetArrayInstr {
    result: Variable,
    array: Operand,
    index: usize,
    /// Take everything from `index` to the end instead of a single element.
    take_rest: bool,
}

impl GetArrayInstr {
    pub fn new(result: Variable, array: Operand, index: usize, take_rest: bool) -> Self {
        Self {
            result,
            array,
            index,
            take_rest,
        }
    }

    pub fn array(&self) -> &Operand {
        &self.array
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn take_rest(&self) -> bool {
        self.take_rest
    }
}

impl Instr for GetArrayInstr {
    fn operation(&self) -> Operation {
        Operation::GetArray
    }

    fn result(&self) -> Option<&Variable> {
        Some(&self.result)
    }

    fn operands(&self) -> Operands<'_> {
        smallvec![&self.array]
    }

    fn simplify(&self, values: &ValueMap) -> Simplified {
        let array = self.array.resolve(values);
        let result = array
            .try_evaluate_array_slice(self.index, self.take_rest)
            .ok();
        Simplified {
            instruction: GetArrayInstr { array, ..self.clone() }.into(),
            result,
        }
    }

    fn clone_for_inlining(&self, info: &InlinerInfo) -> Result<Instruction, InlineError> {
        Ok(GetArrayInstr::new(
            info.renamed_variable(&self.result)?,
            self.array.clone_for_inlining(info)?,
            self.index,
            self.take_rest,
        )
        .into())
    }

    fn interpret<C: ExecutionContext + ?Sized>(
        &self,
        ctx: &mut C,
        receiver: &Value,
    ) -> Result<Option<Label>, InterpretError> {
        let source = self.array.retrieve(ctx, receiver)?;
        let Some(array) = source.as_array() else {
            return Err(InterpretError::NotAnArray {
                operand: self.array.clone(),
                found: source.type_name(),
            });
        };

        let value = if self.take_rest {
            // Shares storage with the source until one side is written.
            Value::Array(array.tail(self.index))
        } else {
            array.entry(self.index)
        };
        ctx.store(&self.result, value);
        Ok(None)
    }
}

impl fmt::Display for GetArrayInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}[{}", self.result, self.array, self.index)?;
        if self.take_rest {
            write!(f, ":END")?;
        }
        write!(f, "] ({})", self.operation())
    }
}
