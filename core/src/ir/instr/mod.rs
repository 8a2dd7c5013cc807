//! The instruction contract and the closed set of instruction kinds.
//!
//! Every kind implements [`Instr`], which covers the three phases an
//! instruction takes part in:
//!
//! - **simplify**: resolve operands through a [`ValueMap`] and, when
//!   possible, compute the instruction's result at compile time
//! - **clone_for_inlining**: copy the instruction into another scope,
//!   renaming every variable and label
//! - **interpret**: run the instruction against a live frame
//!
//! [`Instruction`] is the tagged union the passes store and dispatch on.

mod control;
mod copy;
mod get_array;

#[cfg(test)]
mod get_array_test;

pub use control::{BeqInstr, JumpInstr, LabelInstr, ReturnInstr};
pub use copy::CopyInstr;
pub use get_array::GetArrayInstr;

use core::fmt;

use smallvec::SmallVec;

use crate::interpreter::{ExecutionContext, InterpretError};
use crate::ir::{InlineError, InlinerInfo, Label, Operand, ValueMap, Variable};
use crate::values::Value;

/// Operation tag of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Copy,
    GetArray,
    Label,
    Jump,
    Beq,
    Return,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Copy => "COPY",
            Operation::GetArray => "GET_ARRAY",
            Operation::Label => "LABEL",
            Operation::Jump => "JUMP",
            Operation::Beq => "BEQ",
            Operation::Return => "RETURN",
        }
    }

    /// Whether execution may continue somewhere other than the next instruction.
    pub fn transfers_control(self) -> bool {
        matches!(self, Operation::Jump | Operation::Beq | Operation::Return)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input operands of an instruction, in order.
pub type Operands<'a> = SmallVec<[&'a Operand; 2]>;

/// Output of [`Instr::simplify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Simplified {
    /// The instruction with its operands narrowed through the value map.
    pub instruction: Instruction,
    /// The statically computed result, if there is one.
    pub result: Option<Operand>,
}

impl Simplified {
    pub fn unchanged(instruction: impl Into<Instruction>) -> Self {
        Self {
            instruction: instruction.into(),
            result: None,
        }
    }
}

/// The contract every instruction kind implements.
pub trait Instr: fmt::Display {
    fn operation(&self) -> Operation;

    /// The variable this instruction writes, if any.
    fn result(&self) -> Option<&Variable> {
        None
    }

    fn operands(&self) -> Operands<'_>;

    /// The label this instruction defines or may jump to.
    fn label(&self) -> Option<&Label> {
        None
    }

    /// Resolve operands through `values`, returning the narrowed instruction
    /// and, when derivable, the value of its result.
    ///
    /// A `None` result means "evaluate at run time"; it is never an error.
    fn simplify(&self, values: &ValueMap) -> Simplified;

    /// Copy the instruction into the scope described by `info`.
    ///
    /// Every variable the instruction touches must have an entry in `info`.
    fn clone_for_inlining(&self, info: &InlinerInfo) -> Result<Instruction, InlineError>;

    /// Execute against `ctx`.
    ///
    /// Returns the label to continue at, or `None` to fall through.
    fn interpret<C: ExecutionContext + ?Sized>(
        &self,
        ctx: &mut C,
        receiver: &Value,
    ) -> Result<Option<Label>, InterpretError>;
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    Copy(CopyInstr),
    GetArray(GetArrayInstr),
    Label(LabelInstr),
    Jump(JumpInstr),
    Beq(BeqInstr),
    Return(ReturnInstr),
}

static_assertions::assert_impl_all!(Instruction: Send, Sync, Clone);
static_assertions::assert_impl_all!(Operand: Send, Sync);
static_assertions::assert_impl_all!(Value: Send, Sync);

macro_rules! dispatch {
    ($self:expr, $instr:ident => $body:expr) => {
        match $self {
            Instruction::Copy($instr) => $body,
            Instruction::GetArray($instr) => $body,
            Instruction::Label($instr) => $body,
            Instruction::Jump($instr) => $body,
            Instruction::Beq($instr) => $body,
            Instruction::Return($instr) => $body,
        }
    };
}

impl Instruction {
    pub fn transfers_control(&self) -> bool {
        self.operation().transfers_control()
    }

    /// Call `f` on every variable the instruction reads or writes.
    pub fn for_each_variable<F: FnMut(&Variable)>(&self, f: &mut F) {
        if let Some(result) = self.result() {
            f(result);
        }
        self.for_each_read(f);
    }

    /// Call `f` on the label the instruction defines or targets, then on
    /// every label used as an operand.
    pub fn for_each_label<F: FnMut(&Label)>(&self, f: &mut F) {
        if let Some(label) = self.label() {
            f(label);
        }
        for operand in self.operands() {
            operand.for_each_label(f);
        }
    }

    /// Call `f` on every variable the instruction reads.
    pub fn for_each_read<F: FnMut(&Variable)>(&self, f: &mut F) {
        for operand in self.operands() {
            operand.for_each_variable(f);
        }
    }
}

impl Instr for Instruction {
    fn operation(&self) -> Operation {
        dispatch!(self, i => i.operation())
    }

    fn result(&self) -> Option<&Variable> {
        dispatch!(self, i => i.result())
    }

    fn operands(&self) -> Operands<'_> {
        dispatch!(self, i => i.operands())
    }

    fn label(&self) -> Option<&Label> {
        dispatch!(self, i => i.label())
    }

    fn simplify(&self, values: &ValueMap) -> Simplified {
        dispatch!(self, i => i.simplify(values))
    }

    fn clone_for_inlining(&self, info: &InlinerInfo) -> Result<Instruction, InlineError> {
        dispatch!(self, i => i.clone_for_inlining(info))
    }

    fn interpret<C: ExecutionContext + ?Sized>(
        &self,
        ctx: &mut C,
        receiver: &Value,
    ) -> Result<Option<Label>, InterpretError> {
        dispatch!(self, i => i.interpret(ctx, receiver))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, i => fmt::Display::fmt(i, f))
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Instruction {
                fn from(instr: $ty) -> Self {
                    Instruction::$variant(instr)
                }
            }
        )*
    };
}

impl_from!(
    Copy(CopyInstr),
    GetArray(GetArrayInstr),
    Label(LabelInstr),
    Jump(JumpInstr),
    Beq(BeqInstr),
    Return(ReturnInstr),
);
