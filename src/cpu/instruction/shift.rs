//! Shifts and rotates, on the accumulator or read-modify-write on memory.

use crate::cpu::addressing_modes::ShiftAddressingMode;
use crate::cpu::{Hook, Status, Width, CPU};
use crate::Bus;

impl<B: Bus, H: Hook> CPU<B, H> {
    pub(in crate::cpu) fn asl(&mut self, addressing_mode: ShiftAddressingMode) {
        self.shift(addressing_mode, Width::sign_bit, |value, _, _| value << 1)
    }

    pub(in crate::cpu) fn lsr(&mut self, addressing_mode: ShiftAddressingMode) {
        self.shift(addressing_mode, |_| 1, |value, _, _| value >> 1)
    }

    pub(in crate::cpu) fn rol(&mut self, addressing_mode: ShiftAddressingMode) {
        self.shift(addressing_mode, Width::sign_bit, |value, carry, _| {
            value << 1 | carry
        })
    }

    pub(in crate::cpu) fn ror(&mut self, addressing_mode: ShiftAddressingMode) {
        self.shift(addressing_mode, |_| 1, |value, carry, width| {
            value >> 1 | carry << width.sign_bit().trailing_zeros()
        })
    }

    /// Common read-shift-write skeleton. `carry_out_bit` names the bit that
    /// falls into the carry flag, `op` builds the new value from the old one
    /// and the carry-in bit.
    fn shift(
        &mut self,
        addressing_mode: ShiftAddressingMode,
        carry_out_bit: fn(Width) -> u16,
        op: fn(u16, u16, Width) -> u16,
    ) {
        let width = self.accumulator_width();
        let reference = self.fetch_ref(addressing_mode, width);

        let old_value = self.read_reference(reference, width);
        let carry_in = u16::from(self.status.contains(Status::CARRY));
        let new_value = op(old_value, carry_in, width) & width.mask();

        self.status.set(Status::CARRY, old_value & carry_out_bit(width) != 0);
        self.write_reference(reference, new_value, width);
        self.set_nz(new_value, width);
    }
}
