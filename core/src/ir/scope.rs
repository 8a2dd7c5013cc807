use core::fmt;

use ecow::EcoString;

use crate::Vec;
use crate::ir::{Instruction, Label, Variable};

/// A method body or inlined fragment: the unit that owns an instruction list.
///
/// The scope hands out fresh temporaries (`%v_N`) and labels (`_LBL_N`).
/// Names starting with `%` or `_LBL_` are reserved for it.
#[derive(Debug, Clone)]
pub struct IrScope {
    name: EcoString,
    params: Vec<Variable>,
    instructions: Vec<Instruction>,
    next_temporary: usize,
    next_label: usize,
}

impl IrScope {
    pub fn new(name: &str) -> Self {
        Self::with_params(name, Vec::new())
    }

    pub fn with_params(name: &str, params: Vec<Variable>) -> Self {
        Self {
            name: EcoString::from(name),
            params,
            instructions: Vec::new(),
            next_temporary: 0,
            next_label: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Variable] {
        &self.params
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn instructions_mut(&mut self) -> &mut Vec<Instruction> {
        &mut self.instructions
    }

    pub fn push(&mut self, instruction: impl Into<Instruction>) {
        self.instructions.push(instruction.into());
    }

    pub fn set_instructions(&mut self, instructions: Vec<Instruction>) {
        self.instructions = instructions;
    }

    pub fn new_temporary(&mut self) -> Variable {
        let var = Variable::new(EcoString::from(crate::format!("%v_{}", self.next_temporary)));
        self.next_temporary += 1;
        var
    }

    pub fn new_label(&mut self) -> Label {
        let label = Label::new(EcoString::from(crate::format!("_LBL_{}", self.next_label)));
        self.next_label += 1;
        label
    }
}

impl fmt::Display for IrScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        writeln!(f, "):")?;
        for (i, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "  {:3}  {}", i, instruction)?;
        }
        Ok(())
    }
}
