use core::fmt;

use smallvec::smallvec;

use super::{Instr, Instruction, Operands, Operation, Simplified};
use crate::interpreter::{ExecutionContext, InterpretError};
use crate::ir::{InlineError, InlinerInfo, Label, Operand, ValueMap, Variable};
use crate::values::Value;

/// `result = source`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyInstr {
    result: Variable,
    source: Operand,
}

impl CopyInstr {
    pub fn new(result: Variable, source: Operand) -> Self {
        Self { result, source }
    }

    pub fn source(&self) -> &Operand {
        &self.source
    }
}

impl Instr for CopyInstr {
    fn operation(&self) -> Operation {
        Operation::Copy
    }

    fn result(&self) -> Option<&Variable> {
        Some(&self.result)
    }

    fn operands(&self) -> Operands<'_> {
        smallvec![&self.source]
    }

    fn simplify(&self, values: &ValueMap) -> Simplified {
        let source = self.source.resolve(values);
        Simplified {
            instruction: CopyInstr::new(self.result.clone(), source.clone()).into(),
            result: Some(source),
        }
    }

    fn clone_for_inlining(&self, info: &InlinerInfo) -> Result<Instruction, InlineError> {
        Ok(CopyInstr::new(
            info.renamed_variable(&self.result)?,
            self.source.clone_for_inlining(info)?,
        )
        .into())
    }

    fn interpret<C: ExecutionContext + ?Sized>(
        &self,
        ctx: &mut C,
        receiver: &Value,
    ) -> Result<Option<Label>, InterpretError> {
        let value = self.source.retrieve(ctx, receiver)?;
        ctx.store(&self.result, value);
        Ok(None)
    }
}

impl fmt::Display for CopyInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} ({})", self.result, self.source, self.operation())
    }
}
