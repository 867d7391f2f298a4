//! Jumps, calls and returns.

use crate::cpu::addressing_modes::{
    CallAddressingMode, JumpAddressingMode, JumpLongAddressingMode,
};
use crate::cpu::{Hook, CPU};
use crate::Bus;

impl<B: Bus, H: Hook> CPU<B, H> {
    pub(in crate::cpu) fn jmp(&mut self, addressing_mode: JumpAddressingMode) {
        self.program_counter = addressing_mode.fetch_target(self);
    }

    pub(in crate::cpu) fn jml(&mut self, addressing_mode: JumpLongAddressingMode) {
        let target = addressing_mode.fetch_target(self);
        self.set_program_counter(target);
    }

    pub(in crate::cpu) fn jsr(&mut self, addressing_mode: CallAddressingMode) {
        let target = addressing_mode.fetch_target(self);

        // The return address pushed is the last byte of the JSR itself; RTS
        // compensates with its +1.
        let data = self.program_counter.wrapping_sub(1);
        self.push_stack16(data);

        self.program_counter = target;
    }

    pub(in crate::cpu) fn jsl(&mut self) {
        let target = self.fetch_long_operand();

        let bank = self.program_bank;
        self.push_stack(bank);
        let data = self.program_counter.wrapping_sub(1);
        self.push_stack16(data);

        self.set_program_counter(target);
    }

    pub(in crate::cpu) fn rts(&mut self) {
        self.program_counter = self.pull_stack16().wrapping_add(1);
    }

    pub(in crate::cpu) fn rtl(&mut self) {
        let offset = self.pull_stack16();
        let bank = self.pull_stack();
        self.program_counter = offset.wrapping_add(1);
        self.program_bank = bank;
    }
}
