//! The intermediate representation: operands, instructions and scopes.

mod instr;
mod operand;
mod renaming;
mod scope;
mod value_map;


pub use instr::{
    BeqInstr, CopyInstr, GetArrayInstr, Instr, Instruction, JumpInstr, LabelInstr, Operands,
    Operation, ReturnInstr, Simplified,
};
pub use operand::{Label, NotStaticallyKnown, Operand, Variable};
pub use renaming::{InlineError, InlinerInfo};
pub use scope::IrScope;
pub use value_map::ValueMap;
