//! Branches: sign-extended displacements from the post-operand PC, always
//! within the current program bank.

use crate::cpu::{Hook, CPU};
use crate::Bus;

impl<B: Bus, H: Hook> CPU<B, H> {
    pub(in crate::cpu) fn branch_if(&mut self, condition: bool) {
        let offset = self.fetch_and_incr_program_counter() as i8;
        if condition {
            // i8 to u16 sign-extends, so the wrapping add is the signed add.
            self.program_counter = self.program_counter.wrapping_add(offset as u16);
        }
    }

    pub(in crate::cpu) fn brl(&mut self) {
        let displacement = self.fetch_operand16();
        self.program_counter = self.program_counter.wrapping_add(displacement);
    }
}
