//! Stack pushes, pulls and the effective-address pushes.

use crate::cpu::{Hook, Width, CPU};
use crate::Address;
use crate::Bus;

impl<B: Bus, H: Hook> CPU<B, H> {
    pub(in crate::cpu) fn pha(&mut self) {
        let width = self.accumulator_width();
        let value = self.accumulator & width.mask();
        self.push_value(value, width);
    }

    pub(in crate::cpu) fn pla(&mut self) {
        let width = self.accumulator_width();
        let value = self.pull_value(width);
        self.set_accumulator(value);
    }

    pub(in crate::cpu) fn phx(&mut self) {
        let width = self.index_width();
        let value = self.index_x();
        self.push_value(value, width);
    }

    pub(in crate::cpu) fn plx(&mut self) {
        let width = self.index_width();
        let value = self.pull_value(width);
        self.set_x(value);
    }

    pub(in crate::cpu) fn phy(&mut self) {
        let width = self.index_width();
        let value = self.index_y();
        self.push_value(value, width);
    }

    pub(in crate::cpu) fn ply(&mut self) {
        let width = self.index_width();
        let value = self.pull_value(width);
        self.set_y(value);
    }

    pub(in crate::cpu) fn php(&mut self) {
        let bits = self.status.bits();
        self.push_stack(bits);
    }

    pub(in crate::cpu) fn plp(&mut self) {
        let bits = self.pull_stack();
        self.set_status_bits(bits);
    }

    pub(in crate::cpu) fn phb(&mut self) {
        let bank = self.data_bank;
        self.push_stack(bank);
    }

    pub(in crate::cpu) fn plb(&mut self) {
        let bank = self.pull_stack();
        self.data_bank = bank;
        self.set_nz(u16::from(bank), Width::Eight);
    }

    pub(in crate::cpu) fn phd(&mut self) {
        let value = self.direct_page;
        self.push_stack16(value);
    }

    pub(in crate::cpu) fn pld(&mut self) {
        let value = self.pull_stack16();
        self.direct_page = value;
        self.set_nz(value, Width::Sixteen);
    }

    pub(in crate::cpu) fn phk(&mut self) {
        let bank = self.program_bank;
        self.push_stack(bank);
    }

    /// Pushes the 16-bit operand itself.
    pub(in crate::cpu) fn pea(&mut self) {
        let value = self.fetch_operand16();
        self.push_stack16(value);
    }

    /// Pushes the word read at the direct-page operand; the pointer read is
    /// a linear `D + dp` access.
    pub(in crate::cpu) fn pei(&mut self) {
        let operand = self.fetch_and_incr_program_counter();
        let base = self.direct_page.wrapping_add(u16::from(operand));

        let lower = self.read(Address::bank0(base));
        let higher = self.read(Address::bank0(base.wrapping_add(1)));
        self.push_stack16(u16::from_le_bytes([lower, higher]));
    }

    /// Pushes the program counter displaced by the 16-bit operand.
    pub(in crate::cpu) fn per(&mut self) {
        let displacement = self.fetch_operand16();
        let target = self.program_counter.wrapping_add(displacement);
        self.push_stack16(target);
    }
}
