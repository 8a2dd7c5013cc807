//! Running instructions against a call frame.
//!
//! The [`Interpreter`] is the minimal driver: it steps through an
//! instruction list, follows labels returned by control-transferring
//! instructions and stops at the end of the list or at a `RETURN`.
//! Frame push/pop and unwinding belong to the hosting engine.

mod context;
mod error;
mod driver;
mod options;


pub use context::{ExecutionContext, Frame};
pub use error::{ExecutionError, InterpretError, ResourceExceededError};
pub use driver::Interpreter;
pub use options::InterpreterOptions;
