//! Logical operations and the bit tests.

use crate::cpu::addressing_modes::{
    BitAddressingMode, FlexibleAddressingMode, TestBitAddressingMode,
};
use crate::cpu::{Hook, Reference, Status, CPU};
use crate::Bus;

impl<B: Bus, H: Hook> CPU<B, H> {
    pub(in crate::cpu) fn and(&mut self, addressing_mode: FlexibleAddressingMode) {
        let width = self.accumulator_width();
        let value = self.fetch(addressing_mode, width);
        self.set_accumulator(self.accumulator & width.mask() & value);
    }

    pub(in crate::cpu) fn eor(&mut self, addressing_mode: FlexibleAddressingMode) {
        let width = self.accumulator_width();
        let value = self.fetch(addressing_mode, width);
        self.set_accumulator((self.accumulator ^ value) & width.mask());
    }

    pub(in crate::cpu) fn ora(&mut self, addressing_mode: FlexibleAddressingMode) {
        let width = self.accumulator_width();
        let value = self.fetch(addressing_mode, width);
        self.set_accumulator((self.accumulator | value) & width.mask());
    }

    /// BIT reflects the operand's top two bits into N and V, except for the
    /// immediate form, which only updates Z.
    pub(in crate::cpu) fn bit(&mut self, addressing_mode: BitAddressingMode) {
        let width = self.accumulator_width();
        let reference = self.fetch_ref(addressing_mode, width);
        let value = self.read_reference(reference, width);

        let masked = self.accumulator & value & width.mask();
        self.status.set(Status::ZERO, masked == 0);

        if !matches!(reference, Reference::Immediate(_)) {
            self.status.set(Status::NEGATIVE, value & width.sign_bit() != 0);
            self.status.set(Status::OVERFLOW, value & width.sign_bit() >> 1 != 0);
        }
    }

    pub(in crate::cpu) fn tsb(&mut self, addressing_mode: TestBitAddressingMode) {
        let width = self.accumulator_width();
        let reference = self.fetch_ref(addressing_mode, width);
        let value = self.read_reference(reference, width);
        let accumulator = self.accumulator & width.mask();

        self.status.set(Status::ZERO, value & accumulator == 0);
        self.write_reference(reference, value | accumulator, width);
    }

    pub(in crate::cpu) fn trb(&mut self, addressing_mode: TestBitAddressingMode) {
        let width = self.accumulator_width();
        let reference = self.fetch_ref(addressing_mode, width);
        let value = self.read_reference(reference, width);
        let accumulator = self.accumulator & width.mask();

        self.status.set(Status::ZERO, value & accumulator == 0);
        self.write_reference(reference, value & !accumulator, width);
    }
}
