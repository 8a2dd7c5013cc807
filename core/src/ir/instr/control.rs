//! Control-flow instructions: labels, jumps, conditional branches and returns.

use core::fmt;

use smallvec::{SmallVec, smallvec};

use super::{CopyInstr, Instr, Instruction, Operands, Operation, Simplified};
use crate::interpreter::{ExecutionContext, InterpretError};
use crate::ir::{InlineError, InlinerInfo, Label, Operand, ValueMap};
use crate::values::Value;

/// Marks a jump target. Executes as a no-op.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelInstr {
    label: Label,
}

impl LabelInstr {
    pub fn new(label: Label) -> Self {
        Self { label }
    }
}

impl Instr for LabelInstr {
    fn operation(&self) -> Operation {
        Operation::Label
    }

    fn operands(&self) -> Operands<'_> {
        SmallVec::new()
    }

    fn label(&self) -> Option<&Label> {
        Some(&self.label)
    }

    fn simplify(&self, _values: &ValueMap) -> Simplified {
        Simplified::unchanged(self.clone())
    }

    fn clone_for_inlining(&self, info: &InlinerInfo) -> Result<Instruction, InlineError> {
        Ok(LabelInstr::new(info.renamed_label(&self.label)?).into())
    }

    fn interpret<C: ExecutionContext + ?Sized>(
        &self,
        _ctx: &mut C,
        _receiver: &Value,
    ) -> Result<Option<Label>, InterpretError> {
        Ok(None)
    }
}

impl fmt::Display for LabelInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.label)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpInstr {
    target: Label,
}

impl JumpInstr {
    pub fn new(target: Label) -> Self {
        Self { target }
    }
}

impl Instr for JumpInstr {
    fn operation(&self) -> Operation {
        Operation::Jump
    }

    fn operands(&self) -> Operands<'_> {
        SmallVec::new()
    }

    fn label(&self) -> Option<&Label> {
        Some(&self.target)
    }

    fn simplify(&self, _values: &ValueMap) -> Simplified {
        Simplified::unchanged(self.clone())
    }

    fn clone_for_inlining(&self, info: &InlinerInfo) -> Result<Instruction, InlineError> {
        Ok(JumpInstr::new(info.renamed_label(&self.target)?).into())
    }

    fn interpret<C: ExecutionContext + ?Sized>(
        &self,
        _ctx: &mut C,
        _receiver: &Value,
    ) -> Result<Option<Label>, InterpretError> {
        Ok(Some(self.target.clone()))
    }
}

impl fmt::Display for JumpInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.operation(), self.target)
    }
}

/// Branch to `target` when both operands are equal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeqInstr {
    first: Operand,
    second: Operand,
    target: Label,
}

impl BeqInstr {
    pub fn new(first: Operand, second: Operand, target: Label) -> Self {
        Self {
            first,
            second,
            target,
        }
    }
}

impl Instr for BeqInstr {
    fn operation(&self) -> Operation {
        Operation::Beq
    }

    fn operands(&self) -> Operands<'_> {
        smallvec![&self.first, &self.second]
    }

    fn label(&self) -> Option<&Label> {
        Some(&self.target)
    }

    fn simplify(&self, values: &ValueMap) -> Simplified {
        Simplified::unchanged(BeqInstr::new(
            self.first.resolve(values),
            self.second.resolve(values),
            self.target.clone(),
        ))
    }

    fn clone_for_inlining(&self, info: &InlinerInfo) -> Result<Instruction, InlineError> {
        Ok(BeqInstr::new(
            self.first.clone_for_inlining(info)?,
            self.second.clone_for_inlining(info)?,
            info.renamed_label(&self.target)?,
        )
        .into())
    }

    fn interpret<C: ExecutionContext + ?Sized>(
        &self,
        ctx: &mut C,
        receiver: &Value,
    ) -> Result<Option<Label>, InterpretError> {
        let first = self.first.retrieve(ctx, receiver)?;
        let second = self.second.retrieve(ctx, receiver)?;
        Ok((first == second).then(|| self.target.clone()))
    }
}

impl fmt::Display for BeqInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.operation(),
            self.first,
            self.second,
            self.target
        )
    }
}

/// Leave the current scope with `value`.
///
/// When inlined this becomes a copy into the call's result variable; the
/// inliner adds the jump to the exit label.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnInstr {
    value: Operand,
}

impl ReturnInstr {
    pub fn new(value: Operand) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Operand {
        &self.value
    }
}

impl Instr for ReturnInstr {
    fn operation(&self) -> Operation {
        Operation::Return
    }

    fn operands(&self) -> Operands<'_> {
        smallvec![&self.value]
    }

    fn simplify(&self, values: &ValueMap) -> Simplified {
        Simplified::unchanged(ReturnInstr::new(self.value.resolve(values)))
    }

    fn clone_for_inlining(&self, info: &InlinerInfo) -> Result<Instruction, InlineError> {
        Ok(CopyInstr::new(
            info.call_result().clone(),
            self.value.clone_for_inlining(info)?,
        )
        .into())
    }

    fn interpret<C: ExecutionContext + ?Sized>(
        &self,
        ctx: &mut C,
        receiver: &Value,
    ) -> Result<Option<Label>, InterpretError> {
        let value = self.value.retrieve(ctx, receiver)?;
        ctx.set_return(value);
        Ok(None)
    }
}

impl fmt::Display for ReturnInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.operation(), self.value)
    }
}
