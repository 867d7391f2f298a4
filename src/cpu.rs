//! Emulates the 65C816 (the SNES CPU).
//!
//! The 65C816 has:
//! - A 16-bit accumulator and 16-bit index registers whose effective widths
//!   are switched at runtime by the M and X status flags
//! - A 24-bit address space split into 64 KiB banks, with separate bank
//!   registers for code (PBR) and data (DBR)
//! - An emulation mode (E) in which it behaves like a 65C02: 8-bit
//!   registers and a stack pinned to page 1
//!
//! An instruction comprises a 1-byte opcode and 0-3 operand bytes; operand
//! length can depend on the current register widths.

use std::fmt;

use bitflags::bitflags;
use log::trace;
use thiserror::Error;

use crate::address::Address;
use crate::bus::Bus;

pub use self::instruction::instructions;
pub use self::instruction::Instruction;

use self::addressing_modes::ReferenceAddressingMode;

mod addressing_modes;
mod instruction;

const RESET_VECTOR: Address = Address::bank0(0xFFFC);

const EMULATION_COP_VECTOR: Address = Address::bank0(0xFFF4);
const EMULATION_NMI_VECTOR: Address = Address::bank0(0xFFFA);
/// BRK and IRQ share a vector in emulation mode.
const EMULATION_IRQ_VECTOR: Address = Address::bank0(0xFFFE);

const NATIVE_COP_VECTOR: Address = Address::bank0(0xFFE4);
const NATIVE_BRK_VECTOR: Address = Address::bank0(0xFFE6);
const NATIVE_NMI_VECTOR: Address = Address::bank0(0xFFEA);
const NATIVE_IRQ_VECTOR: Address = Address::bank0(0xFFEE);

const STACK_PAGE: u16 = 0x0100;

/// Raised when the dispatcher fetches a byte it has no implementation for.
/// Fatal to the step; the scheduler is expected to halt and report it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("unknown opcode {opcode:#04x} at {location} (P={status}, E={emulation})")]
pub struct UnknownOpcode {
    pub opcode: u8,
    pub location: Address,
    pub status: Status,
    pub emulation: bool,
}

/// Observer invoked at well-defined points of execution. The default
/// [`NoHook`] compiles to nothing; a tracer or debugger can be injected at
/// construction instead of relying on process-wide state.
pub trait Hook {
    fn pre_fetch(&mut self, location: Address) {
        let _ = location;
    }

    fn post_execute(&mut self, instruction: Instruction) {
        let _ = instruction;
    }

    fn memory_access(&mut self, address: Address, byte: u8, write: bool) {
        let _ = (address, byte, write);
    }
}

#[derive(Debug, Default)]
pub struct NoHook;

impl Hook for NoHook {}

/// Keeps the locations of the most recently executed instructions, oldest
/// first. Useful context next to an [`UnknownOpcode`] report.
#[derive(Debug)]
pub struct TraceRing {
    entries: Vec<Address>,
    cursor: usize,
    capacity: usize,
}

impl TraceRing {
    pub fn new(capacity: usize) -> Self {
        TraceRing {
            entries: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    pub fn recent(&self) -> Vec<Address> {
        let mut recent = Vec::with_capacity(self.entries.len());
        recent.extend_from_slice(&self.entries[self.cursor..]);
        recent.extend_from_slice(&self.entries[..self.cursor]);
        recent
    }
}

impl Hook for TraceRing {
    fn pre_fetch(&mut self, location: Address) {
        if self.entries.len() < self.capacity {
            self.entries.push(location);
        } else {
            self.entries[self.cursor] = location;
            self.cursor = (self.cursor + 1) % self.capacity;
        }
    }
}

/// Effective operand width selected by the M or X flag (or emulation mode).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Width {
    Eight,
    Sixteen,
}

impl Width {
    pub(crate) fn mask(self) -> u16 {
        match self {
            Width::Eight => 0x00FF,
            Width::Sixteen => 0xFFFF,
        }
    }

    pub(crate) fn sign_bit(self) -> u16 {
        match self {
            Width::Eight => 0x0080,
            Width::Sixteen => 0x8000,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum RunState {
    Running,
    /// Executed WAI; fetches nothing until an interrupt arrives.
    Waiting,
    /// Executed STP; only a reset recovers.
    Stopped,
}

#[derive(Debug)]
pub struct CPU<B, H = NoHook> {
    bus: B,
    hook: H,
    /// A - 16-bit accumulator. In 8-bit mode only the low byte is operated
    /// on; the high byte ("B") is preserved and reachable through XBA.
    accumulator: u16,
    /// X - index register. The high byte is forced to zero in 8-bit mode.
    x: u16,
    /// Y - index register.
    y: u16,
    /// S - 16-bit stack pointer. The high byte is pinned to 0x01 in
    /// emulation mode.
    stack_pointer: u16,
    /// D - direct page base register.
    direct_page: u16,
    /// DBR - bank for absolute and absolute-indexed data accesses.
    data_bank: u8,
    /// PBR - bank instructions are fetched from. PC wraps without
    /// carrying into it.
    program_bank: u8,
    /// PC - 16-bit program counter within [Self::program_bank].
    program_counter: u16,
    /// P - status register.
    status: Status,
    /// E - emulation mode flag. Not part of P; exchanged with carry by XCE.
    emulation: bool,
    run_state: RunState,
    // Counts bus accesses made by the current instruction.
    cycle_count: u32,
}

impl<B: Bus> CPU<B> {
    pub fn from_bus(bus: B) -> Self {
        CPU::with_hook(bus, NoHook)
    }
}

impl<B: Bus, H: Hook> CPU<B, H> {
    pub fn with_hook(bus: B, hook: H) -> Self {
        let mut cpu = CPU {
            bus,
            hook,
            accumulator: 0,
            x: 0,
            y: 0,
            stack_pointer: STACK_PAGE | 0xFF,
            direct_page: 0,
            data_bank: 0,
            program_bank: 0,
            program_counter: 0,
            status: Status::default(),
            emulation: true,
            run_state: RunState::Running,
            cycle_count: 0,
        };
        cpu.reset();
        cpu
    }

    /// Puts the CPU back into its power-on state: emulation mode, 8-bit
    /// registers, stack at $01FF, direct page and banks zeroed, and PC
    /// loaded from the reset vector.
    pub fn reset(&mut self) {
        self.emulation = true;
        self.status = Status::default();
        self.direct_page = 0;
        self.data_bank = 0;
        self.program_bank = 0;
        self.stack_pointer = STACK_PAGE | 0xFF;
        self.run_state = RunState::Running;
        self.program_counter = self.read_vector(RESET_VECTOR);
    }

    pub fn program_counter(&self) -> Address {
        Address::new(self.program_bank, self.program_counter)
    }

    pub fn set_program_counter(&mut self, address: Address) {
        self.program_bank = address.bank();
        self.program_counter = address.offset();
    }

    pub fn bus(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn stopped(&self) -> bool {
        self.run_state == RunState::Stopped
    }

    pub fn waiting(&self) -> bool {
        self.run_state == RunState::Waiting
    }

    pub fn read(&mut self, address: Address) -> u8 {
        self.cycle_count += 1;
        let byte = self.bus.read(address);
        self.hook.memory_access(address, byte, false);
        byte
    }

    pub fn write(&mut self, address: Address, byte: u8) {
        self.cycle_count += 1;
        self.hook.memory_access(address, byte, true);
        self.bus.write(address, byte);
    }

    /// Executes one instruction and returns the number of bus accesses it
    /// made. While waiting or stopped nothing happens and 0 is returned.
    pub fn step_instruction(&mut self) -> Result<u32, UnknownOpcode> {
        self.cycle_count = 0;

        if self.run_state != RunState::Running {
            return Ok(0);
        }

        let location = self.program_counter();
        self.hook.pre_fetch(location);

        let opcode = self.read(location);
        let instruction = Instruction::from_opcode(opcode).ok_or(UnknownOpcode {
            opcode,
            location,
            status: self.status,
            emulation: self.emulation,
        })?;
        trace!("{}  {:#04x}  {:?}", location, opcode, instruction);

        self.incr_program_counter();
        self.handle_instruction(instruction);
        self.hook.post_execute(instruction);

        Ok(self.cycle_count)
    }

    /// Delivers a non-maskable interrupt. Wakes a waiting CPU; ignored when
    /// stopped.
    pub fn nmi(&mut self) {
        if self.run_state == RunState::Stopped {
            return;
        }
        self.run_state = RunState::Running;

        let vector = if self.emulation {
            EMULATION_NMI_VECTOR
        } else {
            NATIVE_NMI_VECTOR
        };
        self.interrupt(vector);
    }

    /// Delivers a maskable interrupt. Wakes a waiting CPU even when masked;
    /// only vectors when the I flag is clear. Ignored when stopped.
    pub fn irq(&mut self) {
        if self.run_state == RunState::Stopped {
            return;
        }
        self.run_state = RunState::Running;

        if self.status.contains(Status::INTERRUPT_DISABLE) {
            return;
        }

        let vector = if self.emulation {
            EMULATION_IRQ_VECTOR
        } else {
            NATIVE_IRQ_VECTOR
        };
        self.interrupt(vector);
    }

    fn handle_instruction(&mut self, instruction: Instruction) {
        use self::instruction::Instruction::*;

        match instruction {
            // Load / Store Operations
            LDA(mode) => self.lda(mode),
            LDX(mode) => self.ldx(mode),
            LDY(mode) => self.ldy(mode),
            STA(mode) => self.sta(mode),
            STX(mode) => self.stx(mode),
            STY(mode) => self.sty(mode),
            STZ(mode) => self.stz(mode),

            // Register Transfers
            TAX => self.tax(),
            TAY => self.tay(),
            TXA => self.txa(),
            TYA => self.tya(),
            TSX => self.tsx(),
            TXS => self.txs(),
            TXY => self.txy(),
            TYX => self.tyx(),
            TCD => self.tcd(),
            TDC => self.tdc(),
            TCS => self.tcs(),
            TSC => self.tsc(),
            XBA => self.xba(),

            // Stack Operations
            PHA => self.pha(),
            PLA => self.pla(),
            PHX => self.phx(),
            PLX => self.plx(),
            PHY => self.phy(),
            PLY => self.ply(),
            PHP => self.php(),
            PLP => self.plp(),
            PHB => self.phb(),
            PLB => self.plb(),
            PHD => self.phd(),
            PLD => self.pld(),
            PHK => self.phk(),
            PEA => self.pea(),
            PEI => self.pei(),
            PER => self.per(),

            // Logical
            AND(mode) => self.and(mode),
            EOR(mode) => self.eor(mode),
            ORA(mode) => self.ora(mode),
            BIT(mode) => self.bit(mode),
            TSB(mode) => self.tsb(mode),
            TRB(mode) => self.trb(mode),

            // Arithmetic
            ADC(mode) => self.adc(mode),
            SBC(mode) => self.sbc(mode),
            CMP(mode) => self.cmp(mode),
            CPX(mode) => self.cpx(mode),
            CPY(mode) => self.cpy(mode),

            // Increments & Decrements
            INC(mode) => self.inc(mode),
            INA => self.ina(),
            INX => self.inx(),
            INY => self.iny(),
            DEC(mode) => self.dec(mode),
            DEA => self.dea(),
            DEX => self.dex(),
            DEY => self.dey(),

            // Shifts
            ASL(mode) => self.asl(mode),
            LSR(mode) => self.lsr(mode),
            ROL(mode) => self.rol(mode),
            ROR(mode) => self.ror(mode),

            // Jumps & Calls
            JMP(mode) => self.jmp(mode),
            JML(mode) => self.jml(mode),
            JSR(mode) => self.jsr(mode),
            JSL => self.jsl(),
            RTS => self.rts(),
            RTL => self.rtl(),

            // Branches
            BRA => self.branch_if(true),
            BRL => self.brl(),
            BCC => self.branch_if(!self.status.contains(Status::CARRY)),
            BCS => self.branch_if(self.status.contains(Status::CARRY)),
            BEQ => self.branch_if(self.status.contains(Status::ZERO)),
            BNE => self.branch_if(!self.status.contains(Status::ZERO)),
            BPL => self.branch_if(!self.status.contains(Status::NEGATIVE)),
            BMI => self.branch_if(self.status.contains(Status::NEGATIVE)),
            BVC => self.branch_if(!self.status.contains(Status::OVERFLOW)),
            BVS => self.branch_if(self.status.contains(Status::OVERFLOW)),

            // Status Flag Changes
            CLC => self.clc(),
            SEC => self.sec(),
            CLI => self.cli(),
            SEI => self.sei(),
            CLD => self.cld(),
            SED => self.sed(),
            CLV => self.clv(),
            REP => self.rep(),
            SEP => self.sep(),
            XCE => self.xce(),

            // System Functions
            BRK => self.brk(),
            COP => self.cop(),
            RTI => self.rti(),
            NOP => {}
            WDM => self.wdm(),
            WAI => self.run_state = RunState::Waiting,
            STP => self.run_state = RunState::Stopped,

            // Block Moves
            MVN => self.mvn(),
            MVP => self.mvp(),
        }
    }

    /// Interrupt entry: native mode stacks PBR as well; both modes stack the
    /// return address and P, then mask IRQs and jump through the vector. PBR
    /// itself is left alone.
    fn interrupt(&mut self, vector: Address) {
        if !self.emulation {
            self.push_stack(self.program_bank);
        }

        let (higher, lower) = self.program_counter().split();
        self.push_stack(higher);
        self.push_stack(lower);
        self.push_stack(self.status.bits());

        self.status.insert(Status::INTERRUPT_DISABLE);
        self.program_counter = self.read_vector(vector);
    }

    fn read_vector(&mut self, vector: Address) -> u16 {
        let lower = self.read(vector);
        let higher = self.read(vector + 1u16);
        u16::from_le_bytes([lower, higher])
    }

    // -- Widths ----------------------------------------------------------

    pub(crate) fn accumulator_width(&self) -> Width {
        if self.emulation || self.status.contains(Status::ACC_8_BIT) {
            Width::Eight
        } else {
            Width::Sixteen
        }
    }

    pub(crate) fn index_width(&self) -> Width {
        if self.emulation || self.status.contains(Status::INDEX_8_BIT) {
            Width::Eight
        } else {
            Width::Sixteen
        }
    }

    pub(crate) fn index_x(&self) -> u16 {
        self.x & self.index_width().mask()
    }

    pub(crate) fn index_y(&self) -> u16 {
        self.y & self.index_width().mask()
    }

    // -- Memory access through references --------------------------------

    /// Reads a 16-bit value whose second byte wraps within the bank.
    fn read16(&mut self, address: Address) -> u16 {
        let lower = self.read(address);
        let higher = self.read(address + 1u16);
        u16::from_le_bytes([lower, higher])
    }

    /// Reads a 16-bit value at a long address; the second byte may sit in
    /// the next bank.
    fn read16_long(&mut self, address: Address) -> u16 {
        let lower = self.read(address);
        let higher = self.read(address.long_add(1));
        u16::from_le_bytes([lower, higher])
    }

    fn fetch_ref<T: ReferenceAddressingMode>(&mut self, mode: T, width: Width) -> Reference {
        mode.fetch_ref(self, width)
    }

    fn fetch<T: ReferenceAddressingMode>(&mut self, mode: T, width: Width) -> u16 {
        let reference = self.fetch_ref(mode, width);
        self.read_reference(reference, width)
    }

    fn read_reference(&mut self, reference: Reference, width: Width) -> u16 {
        match reference {
            Reference::Immediate(value) => value,
            Reference::Address(address) => match width {
                Width::Eight => u16::from(self.read(address)),
                Width::Sixteen => self.read16(address),
            },
            Reference::LongAddress(address) => match width {
                Width::Eight => u16::from(self.read(address)),
                Width::Sixteen => self.read16_long(address),
            },
            Reference::Accumulator => self.accumulator & width.mask(),
        }
    }

    fn write_reference(&mut self, reference: Reference, value: u16, width: Width) {
        match reference {
            Reference::Immediate(_) => panic!("tried to write to an immediate operand"),
            Reference::Address(address) => {
                self.write(address, value as u8);
                if width == Width::Sixteen {
                    self.write(address + 1u16, (value >> 8) as u8);
                }
            }
            Reference::LongAddress(address) => {
                self.write(address, value as u8);
                if width == Width::Sixteen {
                    self.write(address.long_add(1), (value >> 8) as u8);
                }
            }
            Reference::Accumulator => match width {
                Width::Eight => {
                    self.accumulator = (self.accumulator & 0xFF00) | (value & 0x00FF);
                }
                Width::Sixteen => self.accumulator = value,
            },
        }
    }

    // -- Registers and flags ---------------------------------------------

    pub(crate) fn set_nz(&mut self, value: u16, width: Width) {
        self.status.set(Status::ZERO, value & width.mask() == 0);
        self.status.set(Status::NEGATIVE, value & width.sign_bit() != 0);
    }

    /// Replaces the accumulator at its current width and sets N and Z. In
    /// 8-bit mode the high byte survives.
    pub(crate) fn set_accumulator(&mut self, value: u16) {
        let width = self.accumulator_width();
        self.write_reference(Reference::Accumulator, value, width);
        self.set_nz(value, width);
    }

    /// Replaces X at the current index width and sets N and Z. In 8-bit
    /// mode the high byte is forced to zero.
    pub(crate) fn set_x(&mut self, value: u16) {
        let width = self.index_width();
        self.x = value & width.mask();
        self.set_nz(value, width);
    }

    pub(crate) fn set_y(&mut self, value: u16) {
        let width = self.index_width();
        self.y = value & width.mask();
        self.set_nz(value, width);
    }

    /// Rewrites P wholesale, as PLP, RTI, REP and SEP do, then re-applies
    /// the mode invariants: emulation forces M and X, and an 8-bit X flag
    /// truncates the index registers.
    pub(crate) fn set_status_bits(&mut self, bits: u8) {
        self.status = Status::from_bits_truncate(bits);
        self.enforce_register_widths();
    }

    pub(crate) fn enforce_register_widths(&mut self) {
        if self.emulation {
            self.status.insert(Status::ACC_8_BIT);
            self.status.insert(Status::INDEX_8_BIT);
        }
        if self.status.contains(Status::INDEX_8_BIT) {
            self.x &= 0xFF;
            self.y &= 0xFF;
        }
    }

    // -- Stack -----------------------------------------------------------

    pub(crate) fn push_stack(&mut self, byte: u8) {
        self.write(Address::bank0(self.stack_pointer), byte);
        self.stack_pointer = if self.emulation {
            // The stack never leaves page 1 in emulation mode.
            STACK_PAGE | u16::from((self.stack_pointer as u8).wrapping_sub(1))
        } else {
            self.stack_pointer.wrapping_sub(1)
        };
    }

    pub(crate) fn pull_stack(&mut self) -> u8 {
        self.stack_pointer = if self.emulation {
            STACK_PAGE | u16::from((self.stack_pointer as u8).wrapping_add(1))
        } else {
            self.stack_pointer.wrapping_add(1)
        };
        self.read(Address::bank0(self.stack_pointer))
    }

    pub(crate) fn push_stack16(&mut self, value: u16) {
        self.push_stack((value >> 8) as u8);
        self.push_stack(value as u8);
    }

    pub(crate) fn pull_stack16(&mut self) -> u16 {
        let lower = self.pull_stack();
        let higher = self.pull_stack();
        u16::from_le_bytes([lower, higher])
    }

    pub(crate) fn push_value(&mut self, value: u16, width: Width) {
        match width {
            Width::Eight => self.push_stack(value as u8),
            Width::Sixteen => self.push_stack16(value),
        }
    }

    pub(crate) fn pull_value(&mut self, width: Width) -> u16 {
        match width {
            Width::Eight => u16::from(self.pull_stack()),
            Width::Sixteen => self.pull_stack16(),
        }
    }

    // -- Program counter -------------------------------------------------

    pub(crate) fn fetch_and_incr_program_counter(&mut self) -> u8 {
        let data = self.read(self.program_counter());
        self.incr_program_counter();
        data
    }

    pub(crate) fn fetch_operand16(&mut self) -> u16 {
        let lower = self.fetch_and_incr_program_counter();
        let higher = self.fetch_and_incr_program_counter();
        u16::from_le_bytes([lower, higher])
    }

    pub(crate) fn fetch_long_operand(&mut self) -> Address {
        let offset = self.fetch_operand16();
        let bank = self.fetch_and_incr_program_counter();
        Address::new(bank, offset)
    }

    fn incr_program_counter(&mut self) {
        self.program_counter = self.program_counter.wrapping_add(1);
    }
}

/// What an addressing mode resolved to: an already-fetched immediate, a data
/// address (with in-bank or cross-bank 16-bit access), or the accumulator.
#[derive(Debug, Copy, Clone)]
pub(crate) enum Reference {
    Immediate(u16),
    Address(Address),
    LongAddress(Address),
    Accumulator,
}

bitflags! {
    /// P - the processor status register, NVMXDIZC.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct Status: u8 {
        const NEGATIVE          = 0b1000_0000;
        const OVERFLOW          = 0b0100_0000;
        /// M - 1 selects an 8-bit accumulator. Always set in emulation mode.
        const ACC_8_BIT         = 0b0010_0000;
        /// X - 1 selects 8-bit index registers. Always set in emulation mode.
        const INDEX_8_BIT       = 0b0001_0000;
        const DECIMAL           = 0b0000_1000;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const ZERO              = 0b0000_0010;
        const CARRY             = 0b0000_0001;
    }
}

impl Default for Status {
    /// The power-on state: 8-bit registers, IRQs masked.
    fn default() -> Self {
        Status::ACC_8_BIT | Status::INDEX_8_BIT | Status::INTERRUPT_DISABLE
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, letter) in [
            (Status::NEGATIVE, 'N'),
            (Status::OVERFLOW, 'V'),
            (Status::ACC_8_BIT, 'M'),
            (Status::INDEX_8_BIT, 'X'),
            (Status::DECIMAL, 'D'),
            (Status::INTERRUPT_DISABLE, 'I'),
            (Status::ZERO, 'Z'),
            (Status::CARRY, 'C'),
        ] {
            write!(f, "{}", if self.contains(flag) { letter } else { '-' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::ArrayBus;
    use crate::mem;

    use super::instructions::*;
    use super::*;

    pub(crate) fn run_instr<F: FnOnce(&mut CPU<ArrayBus>)>(
        bus: ArrayBus,
        cpu_setup: F,
    ) -> CPU<ArrayBus> {
        let mut cpu = CPU::from_bus(bus);

        cpu_setup(&mut cpu);

        cpu.step_instruction().expect("instruction failed to decode");

        cpu
    }

    /// Leaves emulation mode with 16-bit accumulator and index registers.
    pub(crate) fn native_mode(cpu: &mut CPU<ArrayBus>) {
        cpu.emulation = false;
        cpu.status.remove(Status::ACC_8_BIT);
        cpu.status.remove(Status::INDEX_8_BIT);
    }

    #[test]
    fn cpu_initialises_in_emulation_mode() {
        let cpu = CPU::from_bus(ArrayBus::default());

        assert_eq!(cpu.program_counter, 0);
        assert_eq!(cpu.accumulator, 0);
        assert_eq!(cpu.x, 0);
        assert_eq!(cpu.y, 0);
        assert_eq!(cpu.stack_pointer, 0x01FF);
        assert_eq!(cpu.program_bank, 0);
        assert_eq!(cpu.data_bank, 0);
        assert!(cpu.emulation);
        assert!(cpu.status.contains(Status::ACC_8_BIT));
        assert!(cpu.status.contains(Status::INDEX_8_BIT));
    }

    #[test]
    fn cpu_initialises_program_counter_from_reset_vector() {
        let bus = mem! {
            0xFFFCu32 => { 0x34, 0x12 }
        };

        let cpu = CPU::from_bus(bus);

        assert_eq!(cpu.program_counter(), Address::bank0(0x1234));
    }

    #[test]
    fn every_opcode_decodes() {
        for opcode in 0..=255u8 {
            assert!(
                Instruction::from_opcode(opcode).is_some(),
                "no table entry for {:#04x}",
                opcode
            );
        }
    }

    #[test]
    fn unknown_opcode_diagnostic_names_the_location() {
        let error = UnknownOpcode {
            opcode: 0x42,
            location: Address::new(0x12, 0x8000),
            status: Status::default(),
            emulation: true,
        };

        let message = error.to_string();
        assert!(message.contains("0x42"));
        assert!(message.contains("$12:8000"));
    }

    #[test]
    fn step_reports_bus_accesses() {
        let bus = mem!(LDA_IMMEDIATE, 10u8);
        let mut cpu = CPU::from_bus(bus);

        // Opcode fetch plus one operand byte.
        assert_eq!(cpu.step_instruction().unwrap(), 2);
    }

    #[test]
    fn nmi_vectors_through_fffa_in_emulation_mode() {
        let bus = mem! {
            0xFFFAu32 => { 0x00, 0x90 }
        };
        let mut cpu = CPU::from_bus(bus);
        cpu.program_counter = 0x8123;

        cpu.nmi();

        assert_eq!(cpu.program_counter(), Address::bank0(0x9000));
        assert!(cpu.status.contains(Status::INTERRUPT_DISABLE));
        // PCH, PCL, P pushed; no PBR in emulation mode.
        assert_eq!(cpu.stack_pointer, 0x01FC);
    }

    #[test]
    fn nmi_vectors_through_ffea_in_native_mode_and_stacks_pbr() {
        let bus = mem! {
            0xFFEAu32 => { 0x00, 0x90 }
        };
        let mut cpu = CPU::from_bus(bus);
        native_mode(&mut cpu);
        cpu.program_bank = 0x12;
        cpu.program_counter = 0x8123;

        cpu.nmi();

        assert_eq!(cpu.program_counter, 0x9000);
        // PBR is left alone on entry; only the vector PC is loaded.
        assert_eq!(cpu.program_bank, 0x12);
        assert_eq!(cpu.stack_pointer, 0x01FB);
        assert_eq!(cpu.bus.read(Address::bank0(0x01FF)), 0x12); // PBR
        assert_eq!(cpu.bus.read(Address::bank0(0x01FE)), 0x81); // PCH
        assert_eq!(cpu.bus.read(Address::bank0(0x01FD)), 0x23); // PCL
    }

    #[test]
    fn irq_is_masked_by_the_interrupt_disable_flag() {
        let mut cpu = CPU::from_bus(ArrayBus::default());
        cpu.program_counter = 0x8000;
        cpu.status.insert(Status::INTERRUPT_DISABLE);

        cpu.irq();

        assert_eq!(cpu.program_counter, 0x8000);
    }

    #[test]
    fn irq_vectors_when_unmasked() {
        let bus = mem! {
            0xFFFEu32 => { 0x00, 0x95 }
        };
        let mut cpu = CPU::from_bus(bus);
        cpu.program_counter = 0x8000;
        cpu.status.remove(Status::INTERRUPT_DISABLE);

        cpu.irq();

        assert_eq!(cpu.program_counter, 0x9500);
    }

    #[test]
    fn emulation_mode_keeps_the_stack_in_page_1() {
        let mut cpu = CPU::from_bus(ArrayBus::default());
        cpu.stack_pointer = 0x0100;

        cpu.push_stack(0x42);
        assert_eq!(cpu.stack_pointer, 0x01FF);

        assert_eq!(cpu.pull_stack(), 0x42);
        assert_eq!(cpu.stack_pointer, 0x0100);
    }

    #[test]
    fn native_mode_stack_uses_all_16_bits() {
        let mut cpu = CPU::from_bus(ArrayBus::default());
        native_mode(&mut cpu);
        cpu.stack_pointer = 0x0000;

        cpu.push_stack(0x42);
        assert_eq!(cpu.stack_pointer, 0xFFFF);
    }

    #[test]
    fn eight_bit_index_flag_truncates_x_and_y() {
        let mut cpu = CPU::from_bus(ArrayBus::default());
        native_mode(&mut cpu);
        cpu.x = 0x1234;
        cpu.y = 0x5678;

        cpu.set_status_bits(Status::INDEX_8_BIT.bits());

        assert_eq!(cpu.x, 0x34);
        assert_eq!(cpu.y, 0x78);
    }

    #[test]
    fn status_register_renders_set_flags() {
        let status = Status::NEGATIVE | Status::ZERO | Status::CARRY;
        assert_eq!(status.to_string(), "N-----ZC");
    }

    #[test]
    fn trace_ring_keeps_the_most_recent_locations() {
        // Four NOPs through a three-deep ring: the first location falls out.
        let bus = mem!(NOP, NOP, NOP, NOP);
        let mut cpu = CPU::with_hook(bus, TraceRing::new(3));

        for _ in 0..4 {
            cpu.step_instruction().unwrap();
        }

        assert_eq!(
            cpu.hook.recent(),
            vec![
                Address::bank0(1),
                Address::bank0(2),
                Address::bank0(3),
            ]
        );
    }
}
