//! General-purpose DMA channel state.
//!
//! Eight channels live at $4300 + $10*n. The CPU programs them through
//! ordinary MMIO writes; writing a mask to $420B makes the bus run the armed
//! channels to completion (see the transfer loop on the bus itself, which
//! moves bytes through MMIO so side effects fire).

/// Register file of one DMA channel ($43n0-$43n6).
#[derive(Debug, Default, Copy, Clone)]
pub struct DmaChannel {
    /// DMAP: transfer mode (bits 0-2), fixed A address (bit 3), decrement A
    /// (bit 4), B-to-A direction (bit 7).
    control: u8,
    /// BBAD: low byte of the B-bus target, i.e. the xx of $21xx.
    b_bus_target: u8,
    /// A1T: A-bus address, wrapping within the bank.
    a_bus_address: u16,
    /// A1B: A-bus bank.
    a_bus_bank: u8,
    /// DAS: byte count; 0 means 65536.
    byte_count: u16,
}

impl DmaChannel {
    /// Handles a write to register `offset` (0-15 within the channel block).
    pub fn write_register(&mut self, offset: u16, byte: u8) {
        match offset {
            0x0 => self.control = byte,
            0x1 => self.b_bus_target = byte,
            0x2 => self.a_bus_address = (self.a_bus_address & 0xFF00) | u16::from(byte),
            0x3 => self.a_bus_address = (self.a_bus_address & 0x00FF) | u16::from(byte) << 8,
            0x4 => self.a_bus_bank = byte,
            0x5 => self.byte_count = (self.byte_count & 0xFF00) | u16::from(byte),
            0x6 => self.byte_count = (self.byte_count & 0x00FF) | u16::from(byte) << 8,
            _ => {}
        }
    }

    /// Reads register `offset` back; the channel registers are readable.
    pub fn read_register(&self, offset: u16) -> u8 {
        match offset {
            0x0 => self.control,
            0x1 => self.b_bus_target,
            0x2 => self.a_bus_address as u8,
            0x3 => (self.a_bus_address >> 8) as u8,
            0x4 => self.a_bus_bank,
            0x5 => self.byte_count as u8,
            0x6 => (self.byte_count >> 8) as u8,
            _ => 0,
        }
    }

    pub fn a_bus_bank(&self) -> u8 {
        self.a_bus_bank
    }

    pub fn a_bus_address(&self) -> u16 {
        self.a_bus_address
    }

    pub fn b_to_a(&self) -> bool {
        self.control & 0x80 != 0
    }

    /// Number of bytes to move; a programmed count of 0 means 65536.
    pub fn transfer_length(&self) -> u32 {
        if self.byte_count == 0 {
            0x1_0000
        } else {
            u32::from(self.byte_count)
        }
    }

    /// The B-bus register (low 16 bits, $21xx) for the `index`th byte of the
    /// transfer.
    ///
    /// Mode 0 holds the target still, mode 1 alternates between the target
    /// and its successor. The remaining modes fall back to holding still,
    /// except when the target is the VRAM data port, where word writes only
    /// land correctly when the bytes alternate.
    pub fn b_bus_register(&self, index: u32) -> u16 {
        let alternate = match self.control & 0x7 {
            0 => false,
            1 => true,
            _ => matches!(self.b_bus_target, 0x18 | 0x19),
        };

        let target = if alternate {
            self.b_bus_target.wrapping_add((index & 1) as u8)
        } else {
            self.b_bus_target
        };

        0x2100 | u16::from(target)
    }

    /// The A-bus address for the next byte, after one byte has moved.
    pub fn advance_a_bus(&self, address: u16) -> u16 {
        if self.control & 0x08 != 0 {
            address // fixed
        } else if self.control & 0x10 != 0 {
            address.wrapping_sub(1)
        } else {
            address.wrapping_add(1)
        }
    }

    /// Records the end-of-transfer state: the final A-bus address (unless
    /// fixed) and an exhausted byte count.
    pub fn finish_transfer(&mut self, a_bus_address: u16) {
        if self.control & 0x08 == 0 {
            self.a_bus_address = a_bus_address;
        }
        self.byte_count = 0;
    }
}
