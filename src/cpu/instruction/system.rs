//! Software interrupts, mode switches and the remaining system opcodes.

use crate::cpu::{
    Hook, Status, CPU, EMULATION_COP_VECTOR, EMULATION_IRQ_VECTOR, NATIVE_BRK_VECTOR,
    NATIVE_COP_VECTOR, STACK_PAGE,
};
use crate::Bus;

impl<B: Bus, H: Hook> CPU<B, H> {
    /// BRK is a 2-byte instruction: the signature byte is skipped so the
    /// stacked return address points past it.
    pub(in crate::cpu) fn brk(&mut self) {
        self.fetch_and_incr_program_counter();

        let vector = if self.emulation {
            // Shares the IRQ vector in emulation mode.
            EMULATION_IRQ_VECTOR
        } else {
            NATIVE_BRK_VECTOR
        };
        self.interrupt(vector);
    }

    pub(in crate::cpu) fn cop(&mut self) {
        self.fetch_and_incr_program_counter();

        let vector = if self.emulation {
            EMULATION_COP_VECTOR
        } else {
            NATIVE_COP_VECTOR
        };
        self.interrupt(vector);
    }

    pub(in crate::cpu) fn rti(&mut self) {
        let bits = self.pull_stack();
        self.set_status_bits(bits);

        self.program_counter = self.pull_stack16();

        if !self.emulation {
            self.program_bank = self.pull_stack();
        }
    }

    pub(in crate::cpu) fn rep(&mut self) {
        let operand = self.fetch_and_incr_program_counter();
        self.set_status_bits(self.status.bits() & !operand);
    }

    pub(in crate::cpu) fn sep(&mut self) {
        let operand = self.fetch_and_incr_program_counter();
        self.set_status_bits(self.status.bits() | operand);
    }

    /// Exchanges the carry and emulation flags. Entering emulation mode
    /// forces 8-bit registers and pins the stack to page 1.
    pub(in crate::cpu) fn xce(&mut self) {
        let carry = self.status.contains(Status::CARRY);
        self.status.set(Status::CARRY, self.emulation);
        self.emulation = carry;

        if self.emulation {
            self.stack_pointer = STACK_PAGE | (self.stack_pointer & 0xFF);
        }
        self.enforce_register_widths();
    }

    /// Reserved opcode; defined as a 2-byte no-op.
    pub(in crate::cpu) fn wdm(&mut self) {
        self.fetch_and_incr_program_counter();
    }
}
