//! Increments and decrements.

use crate::cpu::addressing_modes::IncDecAddressingMode;
use crate::cpu::{Hook, Reference, Width, CPU};
use crate::Bus;

impl<B: Bus, H: Hook> CPU<B, H> {
    pub(in crate::cpu) fn inc(&mut self, addressing_mode: IncDecAddressingMode) {
        let width = self.accumulator_width();
        let reference = self.fetch_ref(addressing_mode, width);
        self.step_reference(reference, width, 1);
    }

    pub(in crate::cpu) fn dec(&mut self, addressing_mode: IncDecAddressingMode) {
        let width = self.accumulator_width();
        let reference = self.fetch_ref(addressing_mode, width);
        self.step_reference(reference, width, 0xFFFF);
    }

    pub(in crate::cpu) fn ina(&mut self) {
        let width = self.accumulator_width();
        self.step_reference(Reference::Accumulator, width, 1);
    }

    pub(in crate::cpu) fn dea(&mut self) {
        let width = self.accumulator_width();
        self.step_reference(Reference::Accumulator, width, 0xFFFF);
    }

    pub(in crate::cpu) fn inx(&mut self) {
        let value = self.index_x().wrapping_add(1);
        self.set_x(value);
    }

    pub(in crate::cpu) fn iny(&mut self) {
        let value = self.index_y().wrapping_add(1);
        self.set_y(value);
    }

    pub(in crate::cpu) fn dex(&mut self) {
        let value = self.index_x().wrapping_sub(1);
        self.set_x(value);
    }

    pub(in crate::cpu) fn dey(&mut self) {
        let value = self.index_y().wrapping_sub(1);
        self.set_y(value);
    }

    /// Adds `delta` (1 or -1 as two's complement) to the referenced value.
    fn step_reference(&mut self, reference: Reference, width: Width, delta: u16) {
        let value = self.read_reference(reference, width);
        let new_value = value.wrapping_add(delta) & width.mask();
        self.write_reference(reference, new_value, width);
        self.set_nz(new_value, width);
    }
}
