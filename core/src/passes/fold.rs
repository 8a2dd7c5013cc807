//! Constant folding over straight-line blocks.
//!
//! One forward traversal with one [`ValueMap`]. Each instruction is
//! simplified against the map; when it yields a result, the destination is
//! recorded so later instructions see the known value in its place.
//!
//! The map only describes the current block: it is reset at every label
//! (a join point) and after every instruction that may transfer control.

use hashbrown::HashSet;

use crate::Vec;
use crate::ir::{Instr, Instruction, Simplified, ValueMap, Variable};

#[derive(Debug, Clone)]
pub struct FoldOptions {
    /// Forget known values at labels.
    ///
    /// Only safe to turn off when every label is reached by fall-through
    /// alone.
    ///
    /// Default: true
    pub reset_at_labels: bool,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            reset_at_labels: true,
        }
    }
}

/// Result of a folding pass.
#[derive(Debug, Clone)]
pub struct FoldOutcome {
    /// The input instructions, in order, with operands narrowed.
    pub instructions: Vec<Instruction>,
    /// `removable[i]` is set when instruction `i` was folded and nothing
    /// left in `instructions` still reads its destination.
    pub removable: Vec<bool>,
}

impl FoldOutcome {
    pub fn removable_count(&self) -> usize {
        self.removable.iter().filter(|r| **r).count()
    }

    /// Drop removable instructions.
    pub fn into_live_instructions(self) -> Vec<Instruction> {
        self.instructions
            .into_iter()
            .zip(self.removable)
            .filter_map(|(instruction, removable)| (!removable).then_some(instruction))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct ConstantFolder {
    options: FoldOptions,
}

impl ConstantFolder {
    pub fn new(options: FoldOptions) -> Self {
        Self { options }
    }

    pub fn fold(&self, instructions: &[Instruction]) -> FoldOutcome {
        let mut values = ValueMap::new();
        let mut folded_instructions = Vec::with_capacity(instructions.len());
        let mut folded = Vec::with_capacity(instructions.len());

        for original in instructions {
            if self.options.reset_at_labels
                && matches!(original, Instruction::Label(_))
                && !values.is_empty()
            {
                tracing::trace!(label = %original, known = values.len(), "reset value map");
                values.clear();
            }

            let Simplified {
                instruction,
                result,
            } = original.simplify(&values);

            let mut was_folded = false;
            if let Some(dest) = instruction.result() {
                values.invalidate(dest);
                if let Some(value) = result {
                    // `x = x` style results would make the map self-referential.
                    if !value.mentions(dest) {
                        tracing::debug!(%instruction, %value, "folded");
                        values.insert(dest.clone(), value);
                        was_folded = true;
                    }
                }
            }

            if instruction.transfers_control() {
                values.clear();
            }
            folded_instructions.push(instruction);
            folded.push(was_folded);
        }

        let read = read_variables(&folded_instructions);
        let removable = folded_instructions
            .iter()
            .zip(folded)
            .map(|(instruction, was_folded)| {
                was_folded && instruction.result().is_some_and(|dest| !read.contains(dest))
            })
            .collect();

        FoldOutcome {
            instructions: folded_instructions,
            removable,
        }
    }
}

fn read_variables(instructions: &[Instruction]) -> HashSet<Variable> {
    let mut read = HashSet::new();
    for instruction in instructions {
        instruction.for_each_read(&mut |var: &Variable| {
            read.insert(var.clone());
        });
    }
    read
}
