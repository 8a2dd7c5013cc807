use hashbrown::HashMap;

use super::{
    ExecutionContext, ExecutionError, InterpretError, InterpreterOptions, ResourceExceededError,
};
use crate::ir::{Instr, Instruction, Label};
use crate::values::Value;

pub struct Interpreter {
    options: InterpreterOptions,
}

impl Interpreter {
    pub fn new(options: InterpreterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InterpreterOptions {
        &self.options
    }

    /// Execute `instructions` from the top against `ctx`.
    ///
    /// Returns the value of the `RETURN` that ended execution, or `None` when
    /// control ran off the end of the list.
    pub fn run<C: ExecutionContext + ?Sized>(
        &self,
        instructions: &[Instruction],
        ctx: &mut C,
        receiver: &Value,
    ) -> Result<Option<Value>, ExecutionError> {
        let labels = index_labels(instructions);
        let mut ip = 0;
        let mut steps = 0;

        while let Some(instruction) = instructions.get(ip) {
            if let Some(max_steps) = self.options.max_steps {
                if steps >= max_steps {
                    return Err(ResourceExceededError::StepLimit { steps, max_steps }.into());
                }
            }
            steps += 1;

            tracing::trace!(ip, %instruction, "interpret");
            match instruction.interpret(ctx, receiver)? {
                Some(target) => {
                    ip = *labels
                        .get(&target)
                        .ok_or_else(|| InterpretError::UnknownLabel(target.clone()))?;
                    tracing::debug!(%target, ip, "jump");
                }
                None if matches!(instruction, Instruction::Return(_)) => {
                    return Ok(ctx.take_return());
                }
                None => ip += 1,
            }
        }
        Ok(None)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(InterpreterOptions::default())
    }
}

/// Map each label to the index of the instruction that defines it.
fn index_labels(instructions: &[Instruction]) -> HashMap<&Label, usize> {
    instructions
        .iter()
        .enumerate()
        .filter_map(|(ip, instruction)| match instruction {
            Instruction::Label(_) => instruction.label().map(|label| (label, ip)),
            _ => None,
        })
        .collect()
}
