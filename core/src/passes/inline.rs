//! Inlining: cloning a callee's instructions into a caller scope.

use crate::Vec;
use crate::ir::{
    CopyInstr, InlineError, InlinerInfo, Instr, Instruction, IrScope, JumpInstr, Label,
    LabelInstr, Operand, Variable,
};

/// Builds hygienic copies of callee bodies for splicing into a caller.
///
/// The produced fragment is:
///
/// ```text
/// %v_a = arg0 (COPY)          one per parameter
/// ...                         the cloned body; each RETURN(v) becomes
/// result = v' (COPY)          a copy into the call's result
/// JUMP(_LBL_exit)             followed by a jump to the exit label
/// _LBL_exit:
/// ```
///
/// Every callee variable and label, including labels only used as operands,
/// is renamed to a fresh name allocated from the caller, so inlining the same
/// callee twice yields fragments that share no names with each other or with
/// the callee. `%self` in the callee is replaced by the call's receiver.
pub struct Inliner;

impl Inliner {
    pub fn inline(
        caller: &mut IrScope,
        callee: &IrScope,
        receiver: Operand,
        args: &[Operand],
        result: Option<Variable>,
    ) -> Result<Vec<Instruction>, InlineError> {
        if args.len() != callee.params().len() {
            return Err(InlineError::ArityMismatch {
                expected: callee.params().len(),
                found: args.len(),
            });
        }

        let info = Self::renaming_table(caller, callee, receiver, result);
        tracing::debug!(
            callee = callee.name(),
            caller = caller.name(),
            variables = info.variable_count(),
            labels = info.label_count(),
            "inlining"
        );

        let mut fragment = Vec::with_capacity(callee.instructions().len() + args.len() + 1);
        for (param, arg) in callee.params().iter().zip(args) {
            fragment.push(CopyInstr::new(info.renamed_variable(param)?, arg.clone()).into());
        }
        for instruction in callee.instructions() {
            fragment.push(instruction.clone_for_inlining(&info)?);
            if matches!(instruction, Instruction::Return(_)) {
                fragment.push(JumpInstr::new(info.exit_label().clone()).into());
            }
        }
        fragment.push(LabelInstr::new(info.exit_label().clone()).into());
        Ok(fragment)
    }

    /// Allocate a fresh caller name for every variable and label in `callee`.
    pub fn renaming_table(
        caller: &mut IrScope,
        callee: &IrScope,
        receiver: Operand,
        result: Option<Variable>,
    ) -> InlinerInfo {
        let call_result = result.unwrap_or_else(|| caller.new_temporary());
        let exit_label = caller.new_label();
        let mut info = InlinerInfo::new(receiver, call_result, exit_label);

        for param in callee.params() {
            if !info.contains_variable(param) {
                info.add_variable(param.clone(), caller.new_temporary());
            }
        }
        for instruction in callee.instructions() {
            instruction.for_each_variable(&mut |var: &Variable| {
                if !info.contains_variable(var) {
                    info.add_variable(var.clone(), caller.new_temporary());
                }
            });
            instruction.for_each_label(&mut |label: &Label| {
                if !info.contains_label(label) {
                    info.add_label(label.clone(), caller.new_label());
                }
            });
        }
        info
    }
}
