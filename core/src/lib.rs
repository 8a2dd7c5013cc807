//! Tessera IR core.
//!
//! The instruction layer of a dynamic-language execution engine: operands,
//! instructions and the three phases every instruction takes part in
//! (constant folding, inlining and interpretation).
//!
//! ```ignore
//! use tessera_core::ir::{GetArrayInstr, Instruction, Operand, Variable};
//! use tessera_core::interpreter::{Frame, Interpreter, InterpreterOptions};
//! use tessera_core::values::Value;
//!
//! let source = Variable::new("source");
//! let rest = Variable::new("rest");
//! let code = [Instruction::from(GetArrayInstr::new(rest.clone(), source.clone().into(), 1, true))];
//!
//! let mut frame = Frame::new();
//! frame.bind(&source, Value::array([Value::fixnum(10), Value::fixnum(20), Value::fixnum(30)]));
//! Interpreter::new(InterpreterOptions::default())
//!     .run(&code, &mut frame, &Value::Nil)
//!     .unwrap();
//! assert_eq!(frame.get(&rest), Some(&Value::array([Value::fixnum(20), Value::fixnum(30)])));
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod interpreter;
pub mod ir;
pub mod passes;
pub mod values;
