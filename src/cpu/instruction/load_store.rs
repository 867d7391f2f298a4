//! Loads and stores.

use crate::cpu::addressing_modes::{
    FlexibleAddressingMode, LDXAddressingMode, LDYAddressingMode, STXAddressingMode,
    STYAddressingMode, STZAddressingMode, StoreAddressingMode,
};
use crate::cpu::{Hook, CPU};
use crate::Bus;

impl<B: Bus, H: Hook> CPU<B, H> {
    pub(in crate::cpu) fn lda(&mut self, addressing_mode: FlexibleAddressingMode) {
        let width = self.accumulator_width();
        let value = self.fetch(addressing_mode, width);
        self.set_accumulator(value);
    }

    pub(in crate::cpu) fn ldx(&mut self, addressing_mode: LDXAddressingMode) {
        let width = self.index_width();
        let value = self.fetch(addressing_mode, width);
        self.set_x(value);
    }

    pub(in crate::cpu) fn ldy(&mut self, addressing_mode: LDYAddressingMode) {
        let width = self.index_width();
        let value = self.fetch(addressing_mode, width);
        self.set_y(value);
    }

    pub(in crate::cpu) fn sta(&mut self, addressing_mode: StoreAddressingMode) {
        let width = self.accumulator_width();
        let reference = self.fetch_ref(addressing_mode, width);
        let value = self.accumulator & width.mask();
        self.write_reference(reference, value, width);
    }

    pub(in crate::cpu) fn stx(&mut self, addressing_mode: STXAddressingMode) {
        let width = self.index_width();
        let reference = self.fetch_ref(addressing_mode, width);
        let value = self.index_x();
        self.write_reference(reference, value, width);
    }

    pub(in crate::cpu) fn sty(&mut self, addressing_mode: STYAddressingMode) {
        let width = self.index_width();
        let reference = self.fetch_ref(addressing_mode, width);
        let value = self.index_y();
        self.write_reference(reference, value, width);
    }

    pub(in crate::cpu) fn stz(&mut self, addressing_mode: STZAddressingMode) {
        let width = self.accumulator_width();
        let reference = self.fetch_ref(addressing_mode, width);
        self.write_reference(reference, 0, width);
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::tests::{native_mode, run_instr};
    use crate::cpu::Status;
    use crate::instructions::{
        LDA_ABSOLUTE, LDA_IMMEDIATE, LDA_LONG, LDX_IMMEDIATE, LDY_IMMEDIATE, STA_ABSOLUTE,
        STA_LONG, STX_DIRECT, STY_DIRECT, STZ_DIRECT,
    };
    use crate::mem;
    use crate::Address;

    #[test]
    fn instr_lda_loads_into_the_accumulator() {
        let cpu = run_instr(mem!(LDA_IMMEDIATE, 0x42u8), |_| {});

        assert_eq!(cpu.accumulator, 0x42);
        assert!(!cpu.status.contains(Status::ZERO));
    }

    #[test]
    fn instr_lda_sets_zero_and_negative() {
        let cpu = run_instr(mem!(LDA_IMMEDIATE, 0u8), |_| {});
        assert!(cpu.status.contains(Status::ZERO));

        let cpu = run_instr(mem!(LDA_IMMEDIATE, 0x80u8), |_| {});
        assert!(cpu.status.contains(Status::NEGATIVE));
    }

    #[test]
    fn instr_lda_is_16_bit_wide_in_native_mode() {
        let cpu = run_instr(mem!(LDA_IMMEDIATE, 0x34, 0x12), |cpu| {
            native_mode(cpu);
        });

        assert_eq!(cpu.accumulator, 0x1234);
    }

    #[test]
    fn instr_lda_reads_through_the_data_bank() {
        let cpu = run_instr(
            mem!(
                0u32 => { LDA_ABSOLUTE, 0x34, 0x12 }
                0x401234u32 => { 0x42u8 }
            ),
            |cpu| {
                cpu.data_bank = 0x40;
            },
        );

        assert_eq!(cpu.accumulator, 0x42);
    }

    #[test]
    fn instr_lda_long_ignores_the_data_bank() {
        let cpu = run_instr(
            mem!(
                0u32 => { LDA_LONG, 0x34, 0x12, 0x7E }
                0x7E1234u32 => { 0x42u8 }
            ),
            |cpu| {
                cpu.data_bank = 0x40;
            },
        );

        assert_eq!(cpu.accumulator, 0x42);
    }

    #[test]
    fn instr_ldx_and_ldy_load_the_index_registers() {
        let cpu = run_instr(mem!(LDX_IMMEDIATE, 0x42u8), |_| {});
        assert_eq!(cpu.x, 0x42);

        let cpu = run_instr(mem!(LDY_IMMEDIATE, 0x43u8), |_| {});
        assert_eq!(cpu.y, 0x43);
    }

    #[test]
    fn instr_sta_stores_the_accumulator() {
        let mut cpu = run_instr(mem!(STA_ABSOLUTE, 100, 0), |cpu| {
            cpu.accumulator = 0x42;
        });

        assert_eq!(cpu.read(Address::bank0(100)), 0x42);
    }

    #[test]
    fn instr_sta_does_not_touch_flags() {
        let cpu = run_instr(mem!(STA_ABSOLUTE, 100, 0), |cpu| {
            cpu.accumulator = 0;
            cpu.status.remove(Status::ZERO);
        });

        assert!(!cpu.status.contains(Status::ZERO));
    }

    #[test]
    fn instr_sta_16_bit_store_wraps_within_the_data_bank() {
        let mut cpu = run_instr(mem!(STA_ABSOLUTE, 0xFF, 0xFF), |cpu| {
            native_mode(cpu);
            cpu.data_bank = 0x40;
            cpu.accumulator = 0x1234;
        });

        assert_eq!(cpu.read(Address::new(0x40, 0xFFFF)), 0x34);
        assert_eq!(cpu.read(Address::new(0x40, 0x0000)), 0x12);
        assert_eq!(cpu.read(Address::new(0x41, 0x0000)), 0x00);
    }

    #[test]
    fn instr_sta_long_16_bit_store_carries_into_the_next_bank() {
        let mut cpu = run_instr(mem!(STA_LONG, 0xFF, 0xFF, 0x40), |cpu| {
            native_mode(cpu);
            cpu.accumulator = 0x1234;
        });

        assert_eq!(cpu.read(Address::new(0x40, 0xFFFF)), 0x34);
        assert_eq!(cpu.read(Address::new(0x41, 0x0000)), 0x12);
        assert_eq!(cpu.read(Address::new(0x40, 0x0000)), 0x00);
    }

    #[test]
    fn instr_stx_and_sty_store_the_index_registers() {
        let mut cpu = run_instr(mem!(STX_DIRECT, 0x10), |cpu| {
            cpu.x = 0x42;
        });
        assert_eq!(cpu.read(Address::bank0(0x10)), 0x42);

        let mut cpu = run_instr(mem!(STY_DIRECT, 0x10), |cpu| {
            cpu.y = 0x43;
        });
        assert_eq!(cpu.read(Address::bank0(0x10)), 0x43);
    }

    #[test]
    fn instr_stz_clears_memory() {
        let mut cpu = run_instr(
            mem!(
                0u32 => { STZ_DIRECT, 0x10 }
                0x10u32 => { 0x99u8 }
            ),
            |_| {},
        );

        assert_eq!(cpu.read(Address::bank0(0x10)), 0);
    }
}
