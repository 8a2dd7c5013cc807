//! Tessera - an instruction-level IR for dynamic languages
//!
//! # Overview
//!
//! Tessera models the instruction layer of a method-at-a-time execution
//! engine. Each instruction takes part in three phases:
//!
//! - **Constant folding**: `simplify` narrows operands against the values
//!   known so far and reports the value it computes, if any
//! - **Inlining**: `clone_for_inlining` copies an instruction into a caller
//!   scope with every variable and label renamed
//! - **Interpretation**: `interpret` executes it against a frame
//!
//! # Quick Start
//!
//! ```ignore
//! use tessera::{Frame, GetArrayInstr, Interpreter, IrScope, Operand, ReturnInstr, Value, Variable};
//!
//! // a, *rest = xs; return rest
//! let xs = Variable::new("xs");
//! let mut scope = IrScope::with_params("split", vec![xs.clone()]);
//! scope.push(GetArrayInstr::new(Variable::new("a"), xs.clone().into(), 0, false));
//! scope.push(GetArrayInstr::new(Variable::new("rest"), xs.clone().into(), 1, true));
//! scope.push(ReturnInstr::new(Operand::var("rest")));
//!
//! let mut frame = Frame::new();
//! frame.bind(&xs, Value::array([Value::fixnum(1), Value::fixnum(2), Value::fixnum(3)]));
//! let rest = Interpreter::default()
//!     .run(scope.instructions(), &mut frame, &Value::Nil)
//!     .unwrap();
//! assert_eq!(rest, Some(Value::array([Value::fixnum(2), Value::fixnum(3)])));
//! ```

// Re-export the module tree from tessera_core
pub use tessera_core::{interpreter, ir, passes, values};

// Re-export commonly used types
pub use tessera_core::interpreter::{
    ExecutionContext, Frame, Interpreter, InterpreterOptions,
};
pub use tessera_core::ir::{
    BeqInstr, CopyInstr, GetArrayInstr, Instr, Instruction, IrScope, JumpInstr, Label,
    LabelInstr, Operand, ReturnInstr, Variable,
};
pub use tessera_core::passes::{ConstantFolder, FoldOptions, FoldOutcome, Inliner};
pub use tessera_core::values::{ArrayValue, Value};

// Re-export errors
pub use tessera_core::interpreter::{ExecutionError, InterpretError, ResourceExceededError};
pub use tessera_core::ir::InlineError;
