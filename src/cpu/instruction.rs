use super::addressing_modes::BitAddressingMode;
use super::addressing_modes::CallAddressingMode;
use super::addressing_modes::CompareIndexAddressingMode;
use super::addressing_modes::FlexibleAddressingMode;
use super::addressing_modes::IncDecAddressingMode;
use super::addressing_modes::JumpAddressingMode;
use super::addressing_modes::JumpLongAddressingMode;
use super::addressing_modes::LDXAddressingMode;
use super::addressing_modes::LDYAddressingMode;
use super::addressing_modes::STXAddressingMode;
use super::addressing_modes::STYAddressingMode;
use super::addressing_modes::STZAddressingMode;
use super::addressing_modes::ShiftAddressingMode;
use super::addressing_modes::StoreAddressingMode;
use super::addressing_modes::TestBitAddressingMode;

pub mod arithmetic;
pub mod block_move;
pub mod branch;
pub mod inc_dec;
pub mod jump;
pub mod load_store;
pub mod logical;
pub mod shift;
pub mod stack;
pub mod status;
pub mod system;
pub mod transfer;

/// One decoded 65C816 instruction: an operation plus the addressing-mode
/// descriptor its opcode selected. Operand bytes are not part of the value;
/// they are fetched when the instruction executes, at whatever width the
/// current mode flags demand.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Instruction {
    // Load / Store Operations
    /// Load Accumulator
    ///
    /// A,Z,N = M
    ///
    /// Loads memory into the accumulator at the current accumulator width.
    LDA(FlexibleAddressingMode),

    /// Load X Register
    ///
    /// X,Z,N = M
    LDX(LDXAddressingMode),

    /// Load Y Register
    ///
    /// Y,Z,N = M
    LDY(LDYAddressingMode),

    /// Store Accumulator
    ///
    /// M = A
    STA(StoreAddressingMode),

    /// Store X Register
    ///
    /// M = X
    STX(STXAddressingMode),

    /// Store Y Register
    ///
    /// M = Y
    STY(STYAddressingMode),

    /// Store Zero
    ///
    /// M = 0
    ///
    /// Writes zero at the accumulator width without touching any flags.
    STZ(STZAddressingMode),

    // Register Transfers
    /// Transfer Accumulator to X; width follows the index flag.
    TAX,

    /// Transfer Accumulator to Y; width follows the index flag.
    TAY,

    /// Transfer X to Accumulator; width follows the accumulator flag.
    TXA,

    /// Transfer Y to Accumulator; width follows the accumulator flag.
    TYA,

    /// Transfer Stack Pointer to X; width follows the index flag.
    TSX,

    /// Transfer X to Stack Pointer. No flags. In emulation mode the stack
    /// high byte stays pinned to 0x01.
    TXS,

    /// Transfer X to Y; width follows the index flag.
    TXY,

    /// Transfer Y to X; width follows the index flag.
    TYX,

    /// Transfer 16-bit Accumulator to Direct Page Register
    ///
    /// D,Z,N = C
    ///
    /// Always moves all 16 bits, whatever the M flag says.
    TCD,

    /// Transfer Direct Page Register to 16-bit Accumulator
    ///
    /// C,Z,N = D
    TDC,

    /// Transfer 16-bit Accumulator to Stack Pointer. No flags.
    TCS,

    /// Transfer Stack Pointer to 16-bit Accumulator
    ///
    /// C,Z,N = S
    TSC,

    /// Exchange the accumulator's low and high bytes. Z and N reflect the
    /// new low byte.
    XBA,

    // Stack Operations
    /// Push Accumulator (at the accumulator width).
    PHA,

    /// Pull Accumulator (at the accumulator width); sets Z and N.
    PLA,

    /// Push X (at the index width).
    PHX,

    /// Pull X (at the index width); sets Z and N.
    PLX,

    /// Push Y (at the index width).
    PHY,

    /// Pull Y (at the index width); sets Z and N.
    PLY,

    /// Push Processor Status.
    PHP,

    /// Pull Processor Status. Width changes take effect immediately; moving
    /// to 8-bit index registers clears their high bytes.
    PLP,

    /// Push Data Bank Register.
    PHB,

    /// Pull Data Bank Register; sets Z and N.
    PLB,

    /// Push Direct Page Register (16-bit).
    PHD,

    /// Pull Direct Page Register (16-bit); sets Z and N.
    PLD,

    /// Push Program Bank Register.
    PHK,

    /// Push Effective Absolute Address: pushes the 16-bit operand itself.
    PEA,

    /// Push Effective Indirect Address: pushes the 16-bit word read at the
    /// direct-page operand (a linear D + dp read).
    PEI,

    /// Push Effective PC-Relative Address: pushes PC plus the 16-bit
    /// displacement.
    PER,

    // Logical
    /// Logical AND
    ///
    /// A,Z,N = A&M
    AND(FlexibleAddressingMode),

    /// Exclusive OR
    ///
    /// A,Z,N = A^M
    EOR(FlexibleAddressingMode),

    /// Logical Inclusive OR
    ///
    /// A,Z,N = A|M
    ORA(FlexibleAddressingMode),

    /// Bit Test
    ///
    /// Z = A&M, N = M top bit, V = M next-to-top bit
    ///
    /// The immediate form only touches Z.
    BIT(BitAddressingMode),

    /// Test and Set Bits
    ///
    /// Z = A&M, then M = M|A
    TSB(TestBitAddressingMode),

    /// Test and Reset Bits
    ///
    /// Z = A&M, then M = M&~A
    TRB(TestBitAddressingMode),

    // Arithmetic
    /// Add With Carry
    ///
    /// A,Z,C,N,V = A+M+C
    ///
    /// Binary when the D flag is clear, packed BCD (two or four nibbles
    /// depending on width) when set. V always comes from the pre-adjust
    /// binary sum.
    ADC(FlexibleAddressingMode),

    /// Subtract with Carry
    ///
    /// A,Z,C,N,V = A-M-(1-C)
    ///
    /// Decimal mode applies nibble-wise borrow fixups.
    SBC(FlexibleAddressingMode),

    /// Compare Accumulator
    ///
    /// Z,C,N = A-M
    CMP(FlexibleAddressingMode),

    /// Compare X Register
    ///
    /// Z,C,N = X-M
    CPX(CompareIndexAddressingMode),

    /// Compare Y Register
    ///
    /// Z,C,N = Y-M
    CPY(CompareIndexAddressingMode),

    // Increments & Decrements
    /// Increment Memory
    ///
    /// M,Z,N = M+1
    INC(IncDecAddressingMode),

    /// Increment Accumulator
    ///
    /// A,Z,N = A+1
    INA,

    /// Increment X Register
    ///
    /// X,Z,N = X+1
    INX,

    /// Increment Y Register
    ///
    /// Y,Z,N = Y+1
    INY,

    /// Decrement Memory
    ///
    /// M,Z,N = M-1
    DEC(IncDecAddressingMode),

    /// Decrement Accumulator
    ///
    /// A,Z,N = A-1
    DEA,

    /// Decrement X Register
    ///
    /// X,Z,N = X-1
    DEX,

    /// Decrement Y Register
    ///
    /// Y,Z,N = Y-1
    DEY,

    // Shifts
    /// Arithmetic Shift Left
    ///
    /// A,Z,C,N = M*2 or M,Z,C,N = M*2
    ///
    /// The top bit (7 or 15 by width) falls into the carry.
    ASL(ShiftAddressingMode),

    /// Logical Shift Right
    ///
    /// A,C,Z,N = A/2 or M,C,Z,N = M/2
    LSR(ShiftAddressingMode),

    /// Rotate Left through the carry flag.
    ROL(ShiftAddressingMode),

    /// Rotate Right through the carry flag.
    ROR(ShiftAddressingMode),

    // Jumps & Calls
    /// Jump within the current program bank.
    JMP(JumpAddressingMode),

    /// Jump Long: replaces both the program bank and the program counter.
    JML(JumpLongAddressingMode),

    /// Jump to Subroutine: pushes the address of its own last byte, then
    /// jumps within the current program bank.
    JSR(CallAddressingMode),

    /// Jump to Subroutine Long: pushes the program bank and the address of
    /// its own last byte, then jumps to the 24-bit target.
    JSL,

    /// Return from Subroutine: PC = pulled + 1.
    RTS,

    /// Return from Subroutine Long: restores the program bank too.
    RTL,

    // Branches
    /// Branch Always (8-bit signed displacement).
    BRA,

    /// Branch Always Long (16-bit signed displacement, still within the
    /// program bank).
    BRL,

    /// Branch if Carry Clear.
    BCC,

    /// Branch if Carry Set.
    BCS,

    /// Branch if Equal (Z set).
    BEQ,

    /// Branch if Not Equal (Z clear).
    BNE,

    /// Branch if Positive (N clear).
    BPL,

    /// Branch if Minus (N set).
    BMI,

    /// Branch if Overflow Clear.
    BVC,

    /// Branch if Overflow Set.
    BVS,

    // Status Flag Changes
    /// Clear Carry Flag.
    CLC,

    /// Set Carry Flag.
    SEC,

    /// Clear Interrupt Disable.
    CLI,

    /// Set Interrupt Disable.
    SEI,

    /// Clear Decimal Mode.
    CLD,

    /// Set Decimal Mode.
    SED,

    /// Clear Overflow Flag.
    CLV,

    /// Reset Processor Status Bits: clears every P bit set in the operand.
    /// Forced back to 8-bit registers in emulation mode.
    REP,

    /// Set Processor Status Bits: sets every P bit set in the operand.
    SEP,

    /// Exchange the Carry and Emulation flags. Entering emulation mode
    /// forces 8-bit registers and pins the stack to page 1.
    XCE,

    // System Functions
    /// Software Break: a 2-byte instruction that vectors like an interrupt,
    /// leaving the return address past its signature byte.
    BRK,

    /// Co-Processor Enable: like BRK through the COP vector.
    COP,

    /// Return from Interrupt: pulls P and the return address; native mode
    /// pulls the program bank as well.
    RTI,

    /// No Operation.
    NOP,

    /// Reserved 2-byte no-op; fetches and discards its operand byte.
    WDM,

    /// Wait for Interrupt: stops dispatching until an NMI or IRQ arrives.
    WAI,

    /// Stop the Processor: only a reset recovers.
    STP,

    // Block Moves
    /// Block Move Next: copies A+1 bytes from srcBank:X to dstBank:Y,
    /// incrementing the offsets as it goes.
    MVN,

    /// Block Move Previous: as MVN but the offsets decrement.
    MVP,
}

macro_rules! def_opcodes {
    ($($num:literal => $name:ident => $instr:ident$(($mode:path))?,)*) => {
        /// One named constant per opcode, usable both to build test programs
        /// and as patterns when mapping instructions back to opcodes.
        pub mod instructions {
            use super::*;

            $(
                pub const $name: Instruction = Instruction::$instr$(($mode))?;
            )*
        }

        impl Instruction {
            /// Decodes an opcode byte. `None` means the dispatcher has no
            /// implementation for the byte and must fail the step.
            pub fn from_opcode(opcode: u8) -> Option<Self> {
                use self::instructions::*;

                match opcode {
                    $(
                        $num => Some($name),
                    )*
                }
            }

            pub fn to_opcode(self) -> u8 {
                use self::instructions::*;

                match self {
                    $(
                        $name => $num,
                    )*
                }
            }
        }
    }
}

def_opcodes! {
    0x00 => BRK => BRK,
    0x01 => ORA_INDEXED_INDIRECT => ORA(FlexibleAddressingMode::IndexedIndirect),
    0x02 => COP => COP,
    0x03 => ORA_STACK_RELATIVE => ORA(FlexibleAddressingMode::StackRelative),
    0x04 => TSB_DIRECT => TSB(TestBitAddressingMode::Direct),
    0x05 => ORA_DIRECT => ORA(FlexibleAddressingMode::Direct),
    0x06 => ASL_DIRECT => ASL(ShiftAddressingMode::Direct),
    0x07 => ORA_INDIRECT_LONG => ORA(FlexibleAddressingMode::IndirectLong),
    0x08 => PHP => PHP,
    0x09 => ORA_IMMEDIATE => ORA(FlexibleAddressingMode::Immediate),
    0x0A => ASL_ACCUMULATOR => ASL(ShiftAddressingMode::Accumulator),
    0x0B => PHD => PHD,
    0x0C => TSB_ABSOLUTE => TSB(TestBitAddressingMode::Absolute),
    0x0D => ORA_ABSOLUTE => ORA(FlexibleAddressingMode::Absolute),
    0x0E => ASL_ABSOLUTE => ASL(ShiftAddressingMode::Absolute),
    0x0F => ORA_LONG => ORA(FlexibleAddressingMode::Long),
    0x10 => BPL => BPL,
    0x11 => ORA_INDIRECT_INDEXED => ORA(FlexibleAddressingMode::IndirectIndexed),
    0x12 => ORA_INDIRECT => ORA(FlexibleAddressingMode::Indirect),
    0x13 => ORA_STACK_INDIRECT_INDEXED => ORA(FlexibleAddressingMode::StackIndirectIndexed),
    0x14 => TRB_DIRECT => TRB(TestBitAddressingMode::Direct),
    0x15 => ORA_DIRECT_X => ORA(FlexibleAddressingMode::DirectX),
    0x16 => ASL_DIRECT_X => ASL(ShiftAddressingMode::DirectX),
    0x17 => ORA_INDIRECT_LONG_INDEXED => ORA(FlexibleAddressingMode::IndirectLongIndexed),
    0x18 => CLC => CLC,
    0x19 => ORA_ABSOLUTE_Y => ORA(FlexibleAddressingMode::AbsoluteY),
    0x1A => INA => INA,
    0x1B => TCS => TCS,
    0x1C => TRB_ABSOLUTE => TRB(TestBitAddressingMode::Absolute),
    0x1D => ORA_ABSOLUTE_X => ORA(FlexibleAddressingMode::AbsoluteX),
    0x1E => ASL_ABSOLUTE_X => ASL(ShiftAddressingMode::AbsoluteX),
    0x1F => ORA_LONG_X => ORA(FlexibleAddressingMode::LongX),
    0x20 => JSR_ABSOLUTE => JSR(CallAddressingMode::Absolute),
    0x21 => AND_INDEXED_INDIRECT => AND(FlexibleAddressingMode::IndexedIndirect),
    0x22 => JSL => JSL,
    0x23 => AND_STACK_RELATIVE => AND(FlexibleAddressingMode::StackRelative),
    0x24 => BIT_DIRECT => BIT(BitAddressingMode::Direct),
    0x25 => AND_DIRECT => AND(FlexibleAddressingMode::Direct),
    0x26 => ROL_DIRECT => ROL(ShiftAddressingMode::Direct),
    0x27 => AND_INDIRECT_LONG => AND(FlexibleAddressingMode::IndirectLong),
    0x28 => PLP => PLP,
    0x29 => AND_IMMEDIATE => AND(FlexibleAddressingMode::Immediate),
    0x2A => ROL_ACCUMULATOR => ROL(ShiftAddressingMode::Accumulator),
    0x2B => PLD => PLD,
    0x2C => BIT_ABSOLUTE => BIT(BitAddressingMode::Absolute),
    0x2D => AND_ABSOLUTE => AND(FlexibleAddressingMode::Absolute),
    0x2E => ROL_ABSOLUTE => ROL(ShiftAddressingMode::Absolute),
    0x2F => AND_LONG => AND(FlexibleAddressingMode::Long),
    0x30 => BMI => BMI,
    0x31 => AND_INDIRECT_INDEXED => AND(FlexibleAddressingMode::IndirectIndexed),
    0x32 => AND_INDIRECT => AND(FlexibleAddressingMode::Indirect),
    0x33 => AND_STACK_INDIRECT_INDEXED => AND(FlexibleAddressingMode::StackIndirectIndexed),
    0x34 => BIT_DIRECT_X => BIT(BitAddressingMode::DirectX),
    0x35 => AND_DIRECT_X => AND(FlexibleAddressingMode::DirectX),
    0x36 => ROL_DIRECT_X => ROL(ShiftAddressingMode::DirectX),
    0x37 => AND_INDIRECT_LONG_INDEXED => AND(FlexibleAddressingMode::IndirectLongIndexed),
    0x38 => SEC => SEC,
    0x39 => AND_ABSOLUTE_Y => AND(FlexibleAddressingMode::AbsoluteY),
    0x3A => DEA => DEA,
    0x3B => TSC => TSC,
    0x3C => BIT_ABSOLUTE_X => BIT(BitAddressingMode::AbsoluteX),
    0x3D => AND_ABSOLUTE_X => AND(FlexibleAddressingMode::AbsoluteX),
    0x3E => ROL_ABSOLUTE_X => ROL(ShiftAddressingMode::AbsoluteX),
    0x3F => AND_LONG_X => AND(FlexibleAddressingMode::LongX),
    0x40 => RTI => RTI,
    0x41 => EOR_INDEXED_INDIRECT => EOR(FlexibleAddressingMode::IndexedIndirect),
    0x42 => WDM => WDM,
    0x43 => EOR_STACK_RELATIVE => EOR(FlexibleAddressingMode::StackRelative),
    0x44 => MVP => MVP,
    0x45 => EOR_DIRECT => EOR(FlexibleAddressingMode::Direct),
    0x46 => LSR_DIRECT => LSR(ShiftAddressingMode::Direct),
    0x47 => EOR_INDIRECT_LONG => EOR(FlexibleAddressingMode::IndirectLong),
    0x48 => PHA => PHA,
    0x49 => EOR_IMMEDIATE => EOR(FlexibleAddressingMode::Immediate),
    0x4A => LSR_ACCUMULATOR => LSR(ShiftAddressingMode::Accumulator),
    0x4B => PHK => PHK,
    0x4C => JMP_ABSOLUTE => JMP(JumpAddressingMode::Absolute),
    0x4D => EOR_ABSOLUTE => EOR(FlexibleAddressingMode::Absolute),
    0x4E => LSR_ABSOLUTE => LSR(ShiftAddressingMode::Absolute),
    0x4F => EOR_LONG => EOR(FlexibleAddressingMode::Long),
    0x50 => BVC => BVC,
    0x51 => EOR_INDIRECT_INDEXED => EOR(FlexibleAddressingMode::IndirectIndexed),
    0x52 => EOR_INDIRECT => EOR(FlexibleAddressingMode::Indirect),
    0x53 => EOR_STACK_INDIRECT_INDEXED => EOR(FlexibleAddressingMode::StackIndirectIndexed),
    0x54 => MVN => MVN,
    0x55 => EOR_DIRECT_X => EOR(FlexibleAddressingMode::DirectX),
    0x56 => LSR_DIRECT_X => LSR(ShiftAddressingMode::DirectX),
    0x57 => EOR_INDIRECT_LONG_INDEXED => EOR(FlexibleAddressingMode::IndirectLongIndexed),
    0x58 => CLI => CLI,
    0x59 => EOR_ABSOLUTE_Y => EOR(FlexibleAddressingMode::AbsoluteY),
    0x5A => PHY => PHY,
    0x5B => TCD => TCD,
    0x5C => JML_LONG => JML(JumpLongAddressingMode::Long),
    0x5D => EOR_ABSOLUTE_X => EOR(FlexibleAddressingMode::AbsoluteX),
    0x5E => LSR_ABSOLUTE_X => LSR(ShiftAddressingMode::AbsoluteX),
    0x5F => EOR_LONG_X => EOR(FlexibleAddressingMode::LongX),
    0x60 => RTS => RTS,
    0x61 => ADC_INDEXED_INDIRECT => ADC(FlexibleAddressingMode::IndexedIndirect),
    0x62 => PER => PER,
    0x63 => ADC_STACK_RELATIVE => ADC(FlexibleAddressingMode::StackRelative),
    0x64 => STZ_DIRECT => STZ(STZAddressingMode::Direct),
    0x65 => ADC_DIRECT => ADC(FlexibleAddressingMode::Direct),
    0x66 => ROR_DIRECT => ROR(ShiftAddressingMode::Direct),
    0x67 => ADC_INDIRECT_LONG => ADC(FlexibleAddressingMode::IndirectLong),
    0x68 => PLA => PLA,
    0x69 => ADC_IMMEDIATE => ADC(FlexibleAddressingMode::Immediate),
    0x6A => ROR_ACCUMULATOR => ROR(ShiftAddressingMode::Accumulator),
    0x6B => RTL => RTL,
    0x6C => JMP_INDIRECT => JMP(JumpAddressingMode::Indirect),
    0x6D => ADC_ABSOLUTE => ADC(FlexibleAddressingMode::Absolute),
    0x6E => ROR_ABSOLUTE => ROR(ShiftAddressingMode::Absolute),
    0x6F => ADC_LONG => ADC(FlexibleAddressingMode::Long),
    0x70 => BVS => BVS,
    0x71 => ADC_INDIRECT_INDEXED => ADC(FlexibleAddressingMode::IndirectIndexed),
    0x72 => ADC_INDIRECT => ADC(FlexibleAddressingMode::Indirect),
    0x73 => ADC_STACK_INDIRECT_INDEXED => ADC(FlexibleAddressingMode::StackIndirectIndexed),
    0x74 => STZ_DIRECT_X => STZ(STZAddressingMode::DirectX),
    0x75 => ADC_DIRECT_X => ADC(FlexibleAddressingMode::DirectX),
    0x76 => ROR_DIRECT_X => ROR(ShiftAddressingMode::DirectX),
    0x77 => ADC_INDIRECT_LONG_INDEXED => ADC(FlexibleAddressingMode::IndirectLongIndexed),
    0x78 => SEI => SEI,
    0x79 => ADC_ABSOLUTE_Y => ADC(FlexibleAddressingMode::AbsoluteY),
    0x7A => PLY => PLY,
    0x7B => TDC => TDC,
    0x7C => JMP_INDEXED_INDIRECT => JMP(JumpAddressingMode::IndexedIndirect),
    0x7D => ADC_ABSOLUTE_X => ADC(FlexibleAddressingMode::AbsoluteX),
    0x7E => ROR_ABSOLUTE_X => ROR(ShiftAddressingMode::AbsoluteX),
    0x7F => ADC_LONG_X => ADC(FlexibleAddressingMode::LongX),
    0x80 => BRA => BRA,
    0x81 => STA_INDEXED_INDIRECT => STA(StoreAddressingMode::IndexedIndirect),
    0x82 => BRL => BRL,
    0x83 => STA_STACK_RELATIVE => STA(StoreAddressingMode::StackRelative),
    0x84 => STY_DIRECT => STY(STYAddressingMode::Direct),
    0x85 => STA_DIRECT => STA(StoreAddressingMode::Direct),
    0x86 => STX_DIRECT => STX(STXAddressingMode::Direct),
    0x87 => STA_INDIRECT_LONG => STA(StoreAddressingMode::IndirectLong),
    0x88 => DEY => DEY,
    0x89 => BIT_IMMEDIATE => BIT(BitAddressingMode::Immediate),
    0x8A => TXA => TXA,
    0x8B => PHB => PHB,
    0x8C => STY_ABSOLUTE => STY(STYAddressingMode::Absolute),
    0x8D => STA_ABSOLUTE => STA(StoreAddressingMode::Absolute),
    0x8E => STX_ABSOLUTE => STX(STXAddressingMode::Absolute),
    0x8F => STA_LONG => STA(StoreAddressingMode::Long),
    0x90 => BCC => BCC,
    0x91 => STA_INDIRECT_INDEXED => STA(StoreAddressingMode::IndirectIndexed),
    0x92 => STA_INDIRECT => STA(StoreAddressingMode::Indirect),
    0x93 => STA_STACK_INDIRECT_INDEXED => STA(StoreAddressingMode::StackIndirectIndexed),
    0x94 => STY_DIRECT_X => STY(STYAddressingMode::DirectX),
    0x95 => STA_DIRECT_X => STA(StoreAddressingMode::DirectX),
    0x96 => STX_DIRECT_Y => STX(STXAddressingMode::DirectY),
    0x97 => STA_INDIRECT_LONG_INDEXED => STA(StoreAddressingMode::IndirectLongIndexed),
    0x98 => TYA => TYA,
    0x99 => STA_ABSOLUTE_Y => STA(StoreAddressingMode::AbsoluteY),
    0x9A => TXS => TXS,
    0x9B => TXY => TXY,
    0x9C => STZ_ABSOLUTE => STZ(STZAddressingMode::Absolute),
    0x9D => STA_ABSOLUTE_X => STA(StoreAddressingMode::AbsoluteX),
    0x9E => STZ_ABSOLUTE_X => STZ(STZAddressingMode::AbsoluteX),
    0x9F => STA_LONG_X => STA(StoreAddressingMode::LongX),
    0xA0 => LDY_IMMEDIATE => LDY(LDYAddressingMode::Immediate),
    0xA1 => LDA_INDEXED_INDIRECT => LDA(FlexibleAddressingMode::IndexedIndirect),
    0xA2 => LDX_IMMEDIATE => LDX(LDXAddressingMode::Immediate),
    0xA3 => LDA_STACK_RELATIVE => LDA(FlexibleAddressingMode::StackRelative),
    0xA4 => LDY_DIRECT => LDY(LDYAddressingMode::Direct),
    0xA5 => LDA_DIRECT => LDA(FlexibleAddressingMode::Direct),
    0xA6 => LDX_DIRECT => LDX(LDXAddressingMode::Direct),
    0xA7 => LDA_INDIRECT_LONG => LDA(FlexibleAddressingMode::IndirectLong),
    0xA8 => TAY => TAY,
    0xA9 => LDA_IMMEDIATE => LDA(FlexibleAddressingMode::Immediate),
    0xAA => TAX => TAX,
    0xAB => PLB => PLB,
    0xAC => LDY_ABSOLUTE => LDY(LDYAddressingMode::Absolute),
    0xAD => LDA_ABSOLUTE => LDA(FlexibleAddressingMode::Absolute),
    0xAE => LDX_ABSOLUTE => LDX(LDXAddressingMode::Absolute),
    0xAF => LDA_LONG => LDA(FlexibleAddressingMode::Long),
    0xB0 => BCS => BCS,
    0xB1 => LDA_INDIRECT_INDEXED => LDA(FlexibleAddressingMode::IndirectIndexed),
    0xB2 => LDA_INDIRECT => LDA(FlexibleAddressingMode::Indirect),
    0xB3 => LDA_STACK_INDIRECT_INDEXED => LDA(FlexibleAddressingMode::StackIndirectIndexed),
    0xB4 => LDY_DIRECT_X => LDY(LDYAddressingMode::DirectX),
    0xB5 => LDA_DIRECT_X => LDA(FlexibleAddressingMode::DirectX),
    0xB6 => LDX_DIRECT_Y => LDX(LDXAddressingMode::DirectY),
    0xB7 => LDA_INDIRECT_LONG_INDEXED => LDA(FlexibleAddressingMode::IndirectLongIndexed),
    0xB8 => CLV => CLV,
    0xB9 => LDA_ABSOLUTE_Y => LDA(FlexibleAddressingMode::AbsoluteY),
    0xBA => TSX => TSX,
    0xBB => TYX => TYX,
    0xBC => LDY_ABSOLUTE_X => LDY(LDYAddressingMode::AbsoluteX),
    0xBD => LDA_ABSOLUTE_X => LDA(FlexibleAddressingMode::AbsoluteX),
    0xBE => LDX_ABSOLUTE_Y => LDX(LDXAddressingMode::AbsoluteY),
    0xBF => LDA_LONG_X => LDA(FlexibleAddressingMode::LongX),
    0xC0 => CPY_IMMEDIATE => CPY(CompareIndexAddressingMode::Immediate),
    0xC1 => CMP_INDEXED_INDIRECT => CMP(FlexibleAddressingMode::IndexedIndirect),
    0xC2 => REP => REP,
    0xC3 => CMP_STACK_RELATIVE => CMP(FlexibleAddressingMode::StackRelative),
    0xC4 => CPY_DIRECT => CPY(CompareIndexAddressingMode::Direct),
    0xC5 => CMP_DIRECT => CMP(FlexibleAddressingMode::Direct),
    0xC6 => DEC_DIRECT => DEC(IncDecAddressingMode::Direct),
    0xC7 => CMP_INDIRECT_LONG => CMP(FlexibleAddressingMode::IndirectLong),
    0xC8 => INY => INY,
    0xC9 => CMP_IMMEDIATE => CMP(FlexibleAddressingMode::Immediate),
    0xCA => DEX => DEX,
    0xCB => WAI => WAI,
    0xCC => CPY_ABSOLUTE => CPY(CompareIndexAddressingMode::Absolute),
    0xCD => CMP_ABSOLUTE => CMP(FlexibleAddressingMode::Absolute),
    0xCE => DEC_ABSOLUTE => DEC(IncDecAddressingMode::Absolute),
    0xCF => CMP_LONG => CMP(FlexibleAddressingMode::Long),
    0xD0 => BNE => BNE,
    0xD1 => CMP_INDIRECT_INDEXED => CMP(FlexibleAddressingMode::IndirectIndexed),
    0xD2 => CMP_INDIRECT => CMP(FlexibleAddressingMode::Indirect),
    0xD3 => CMP_STACK_INDIRECT_INDEXED => CMP(FlexibleAddressingMode::StackIndirectIndexed),
    0xD4 => PEI => PEI,
    0xD5 => CMP_DIRECT_X => CMP(FlexibleAddressingMode::DirectX),
    0xD6 => DEC_DIRECT_X => DEC(IncDecAddressingMode::DirectX),
    0xD7 => CMP_INDIRECT_LONG_INDEXED => CMP(FlexibleAddressingMode::IndirectLongIndexed),
    0xD8 => CLD => CLD,
    0xD9 => CMP_ABSOLUTE_Y => CMP(FlexibleAddressingMode::AbsoluteY),
    0xDA => PHX => PHX,
    0xDB => STP => STP,
    0xDC => JML_INDIRECT_LONG => JML(JumpLongAddressingMode::IndirectLong),
    0xDD => CMP_ABSOLUTE_X => CMP(FlexibleAddressingMode::AbsoluteX),
    0xDE => DEC_ABSOLUTE_X => DEC(IncDecAddressingMode::AbsoluteX),
    0xDF => CMP_LONG_X => CMP(FlexibleAddressingMode::LongX),
    0xE0 => CPX_IMMEDIATE => CPX(CompareIndexAddressingMode::Immediate),
    0xE1 => SBC_INDEXED_INDIRECT => SBC(FlexibleAddressingMode::IndexedIndirect),
    0xE2 => SEP => SEP,
    0xE3 => SBC_STACK_RELATIVE => SBC(FlexibleAddressingMode::StackRelative),
    0xE4 => CPX_DIRECT => CPX(CompareIndexAddressingMode::Direct),
    0xE5 => SBC_DIRECT => SBC(FlexibleAddressingMode::Direct),
    0xE6 => INC_DIRECT => INC(IncDecAddressingMode::Direct),
    0xE7 => SBC_INDIRECT_LONG => SBC(FlexibleAddressingMode::IndirectLong),
    0xE8 => INX => INX,
    0xE9 => SBC_IMMEDIATE => SBC(FlexibleAddressingMode::Immediate),
    0xEA => NOP => NOP,
    0xEB => XBA => XBA,
    0xEC => CPX_ABSOLUTE => CPX(CompareIndexAddressingMode::Absolute),
    0xED => SBC_ABSOLUTE => SBC(FlexibleAddressingMode::Absolute),
    0xEE => INC_ABSOLUTE => INC(IncDecAddressingMode::Absolute),
    0xEF => SBC_LONG => SBC(FlexibleAddressingMode::Long),
    0xF0 => BEQ => BEQ,
    0xF1 => SBC_INDIRECT_INDEXED => SBC(FlexibleAddressingMode::IndirectIndexed),
    0xF2 => SBC_INDIRECT => SBC(FlexibleAddressingMode::Indirect),
    0xF3 => SBC_STACK_INDIRECT_INDEXED => SBC(FlexibleAddressingMode::StackIndirectIndexed),
    0xF4 => PEA => PEA,
    0xF5 => SBC_DIRECT_X => SBC(FlexibleAddressingMode::DirectX),
    0xF6 => INC_DIRECT_X => INC(IncDecAddressingMode::DirectX),
    0xF7 => SBC_INDIRECT_LONG_INDEXED => SBC(FlexibleAddressingMode::IndirectLongIndexed),
    0xF8 => SED => SED,
    0xF9 => SBC_ABSOLUTE_Y => SBC(FlexibleAddressingMode::AbsoluteY),
    0xFA => PLX => PLX,
    0xFB => XCE => XCE,
    0xFC => JSR_INDEXED_INDIRECT => JSR(CallAddressingMode::IndexedIndirect),
    0xFD => SBC_ABSOLUTE_X => SBC(FlexibleAddressingMode::AbsoluteX),
    0xFE => INC_ABSOLUTE_X => INC(IncDecAddressingMode::AbsoluteX),
    0xFF => SBC_LONG_X => SBC(FlexibleAddressingMode::LongX),
}

#[cfg(test)]
mod tests {
    use super::instructions::*;
    use super::*;

    #[test]
    fn opcode_round_trips_through_decode() {
        for opcode in 0..=255u8 {
            let instruction = Instruction::from_opcode(opcode).unwrap();
            assert_eq!(instruction.to_opcode(), opcode, "{:?}", instruction);
        }
    }

    #[test]
    fn well_known_opcodes_decode_to_their_mnemonics() {
        assert_eq!(Instruction::from_opcode(0xA9), Some(LDA_IMMEDIATE));
        assert_eq!(Instruction::from_opcode(0xFB), Some(XCE));
        assert_eq!(Instruction::from_opcode(0x22), Some(JSL));
        assert_eq!(Instruction::from_opcode(0x54), Some(MVN));
        assert_eq!(
            Instruction::from_opcode(0x7C),
            Some(Instruction::JMP(JumpAddressingMode::IndexedIndirect))
        );
    }
}
