use log::trace;

use crate::cartridge::Cartridge;
use crate::dma::DmaChannel;
use crate::input::Controller;
use crate::ppu::PpuRegisters;
use crate::Address;

/// The memory bus as the CPU sees it: a 24-bit address in, a byte out.
pub trait Bus {
    /// This method takes a mutable reference because reading can trigger
    /// state changes.
    ///
    /// e.g. reading $4210 clears the NMI latch, and reading the WRAM data
    /// port at $2180 advances its cursor.
    fn read(&mut self, address: Address) -> u8;
    fn write(&mut self, address: Address, byte: u8);
}

/// A flat 16 MiB memory image with no decoding at all. Only really useful
/// for tests, where programs and data can be placed anywhere.
pub struct ArrayBus(Box<[u8]>);

impl ArrayBus {
    pub fn slice(&self) -> &[u8] {
        &self.0
    }
}

impl Default for ArrayBus {
    fn default() -> Self {
        ArrayBus(vec![0; 0x100_0000].into_boxed_slice())
    }
}

impl Bus for ArrayBus {
    fn read(&mut self, address: Address) -> u8 {
        self.0[address.index()]
    }

    fn write(&mut self, address: Address, byte: u8) {
        self.0[address.index()] = byte;
    }
}

impl<'a, T: Bus> Bus for &'a mut T {
    fn read(&mut self, address: Address) -> u8 {
        T::read(self, address)
    }

    fn write(&mut self, address: Address, byte: u8) {
        T::write(self, address, byte)
    }
}

const WRAM_BANK: u8 = 0x7E;
const WRAM_MIRROR_SIZE: u16 = 0x2000;

const PPU_FIRST: u16 = 0x2100;
const PPU_LAST: u16 = 0x213F;

const APU_PORT_FIRST: u16 = 0x2140;
const APU_PORT_LAST: u16 = 0x2143;

const WRAM_DATA: u16 = 0x2180;
const WRAM_ADDRESS_LOW: u16 = 0x2181;
const WRAM_ADDRESS_MID: u16 = 0x2182;
const WRAM_ADDRESS_HIGH: u16 = 0x2183;

const CONTROLLER_PORT: u16 = 0x4016;

const NMITIMEN: u16 = 0x4200;
const WRMPYA: u16 = 0x4202;
const WRMPYB: u16 = 0x4203;
const WRDIVL: u16 = 0x4204;
const WRDIVH: u16 = 0x4205;
const WRDIVB: u16 = 0x4206;
const MDMAEN: u16 = 0x420B;
const RDNMI: u16 = 0x4210;
const HVBJOY: u16 = 0x4212;
const RDDIVL: u16 = 0x4214;
const RDDIVH: u16 = 0x4215;
const RDMPYL: u16 = 0x4216;
const RDMPYH: u16 = 0x4217;

const DMA_FIRST: u16 = 0x4300;
const DMA_LAST: u16 = 0x437F;

const OPEN_BUS: u8 = 0x00;

/// The SNES memory bus: 128 KiB of WRAM with its low-8KiB mirrors, the
/// cartridge ROM, and the MMIO regions (PPU pass-through, APU mailbox, WRAM
/// data port, controller port, CPU math registers, NMI latch and the DMA
/// channels, which it also executes).
pub struct SnesBus<P> {
    wram: Box<[u8]>,
    cartridge: Cartridge,
    ppu: P,
    controller: Controller,
    dma_channels: [DmaChannel; 8],
    /// NMITIMEN as written; bit 7 gates NMI delivery.
    interrupt_enable: u8,
    /// Set at v-blank by the scheduler, reported and cleared through $4210.
    nmi_occurred: bool,
    multiplicand: u8,
    dividend: u16,
    quotient: u16,
    /// RDMPY is one register on the real unit too: a multiply leaves the
    /// product here, a divide leaves the remainder.
    product_or_remainder: u16,
    cpu_to_apu: [u8; 4],
    apu_to_cpu: [u8; 4],
    /// 17-bit cursor of the $2180 data port.
    wram_cursor: u32,
}

impl<P: PpuRegisters> SnesBus<P> {
    pub fn new(cartridge: Cartridge, ppu: P) -> Self {
        SnesBus {
            wram: vec![0; 0x2_0000].into_boxed_slice(),
            cartridge,
            ppu,
            controller: Controller::default(),
            dma_channels: [DmaChannel::default(); 8],
            interrupt_enable: 0,
            nmi_occurred: false,
            multiplicand: 0,
            dividend: 0,
            quotient: 0,
            product_or_remainder: 0,
            cpu_to_apu: [0; 4],
            apu_to_cpu: [0; 4],
            wram_cursor: 0,
        }
    }

    pub fn ppu(&mut self) -> &mut P {
        &mut self.ppu
    }

    pub fn controller(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Latches an NMI; called by the scheduler when the PPU enters v-blank.
    pub fn pulse_nmi(&mut self) {
        self.nmi_occurred = true;
    }

    /// Whether the program asked for NMIs ($4200 bit 7).
    pub fn nmi_enabled(&self) -> bool {
        self.interrupt_enable & 0x80 != 0
    }

    /// The byte the CPU last wrote to mailbox port $2140+`port`. For the
    /// external APU.
    pub fn read_apu_port(&self, port: usize) -> u8 {
        self.cpu_to_apu[port & 3]
    }

    /// Sets the byte the CPU will read from mailbox port $2140+`port`. For
    /// the external APU.
    pub fn write_apu_port(&mut self, port: usize, byte: u8) {
        self.apu_to_cpu[port & 3] = byte;
    }

    fn wram_index(address: Address) -> usize {
        (address.index() - ((WRAM_BANK as usize) << 16)) & 0x1_FFFF
    }

    /// MMIO lives in the low quarter of banks $00-$3F and $80-$BF only.
    fn is_system_bank(bank: u8) -> bool {
        matches!(bank, 0x00..=0x3F | 0x80..=0xBF)
    }

    fn advance_wram_cursor(&mut self) {
        self.wram_cursor = (self.wram_cursor + 1) & 0x1_FFFF;
    }

    fn read_mmio(&mut self, offset: u16) -> Option<u8> {
        let byte = match offset {
            PPU_FIRST..=PPU_LAST => self.ppu.read(offset),
            APU_PORT_FIRST..=APU_PORT_LAST => {
                self.apu_to_cpu[usize::from(offset - APU_PORT_FIRST)]
            }
            WRAM_DATA => {
                let byte = self.wram[self.wram_cursor as usize];
                self.advance_wram_cursor();
                byte
            }
            CONTROLLER_PORT => self.controller.read(),
            RDNMI => {
                let occurred = self.nmi_occurred;
                self.nmi_occurred = false;
                u8::from(occurred) << 7
            }
            HVBJOY => u8::from(self.ppu.vblank()) << 7 | u8::from(self.ppu.hblank()) << 6,
            RDDIVL => self.quotient as u8,
            RDDIVH => (self.quotient >> 8) as u8,
            RDMPYL => self.product_or_remainder as u8,
            RDMPYH => (self.product_or_remainder >> 8) as u8,
            DMA_FIRST..=DMA_LAST => {
                self.dma_channels[usize::from(offset >> 4 & 0x7)].read_register(offset & 0xF)
            }
            _ => return None,
        };
        Some(byte)
    }

    fn write_mmio(&mut self, offset: u16, byte: u8) -> bool {
        match offset {
            PPU_FIRST..=PPU_LAST => self.ppu.write(offset, byte),
            APU_PORT_FIRST..=APU_PORT_LAST => {
                self.cpu_to_apu[usize::from(offset - APU_PORT_FIRST)] = byte;
            }
            WRAM_DATA => {
                self.wram[self.wram_cursor as usize] = byte;
                self.advance_wram_cursor();
            }
            WRAM_ADDRESS_LOW => {
                self.wram_cursor = (self.wram_cursor & 0x1_FF00) | u32::from(byte);
            }
            WRAM_ADDRESS_MID => {
                self.wram_cursor = (self.wram_cursor & 0x1_00FF) | u32::from(byte) << 8;
            }
            WRAM_ADDRESS_HIGH => {
                self.wram_cursor = (self.wram_cursor & 0x0_FFFF) | u32::from(byte & 1) << 16;
            }
            CONTROLLER_PORT => self.controller.write(byte),
            NMITIMEN => self.interrupt_enable = byte,
            WRMPYA => self.multiplicand = byte,
            WRMPYB => {
                self.product_or_remainder = u16::from(self.multiplicand) * u16::from(byte);
            }
            WRDIVL => self.dividend = (self.dividend & 0xFF00) | u16::from(byte),
            WRDIVH => self.dividend = (self.dividend & 0x00FF) | u16::from(byte) << 8,
            WRDIVB => self.divide(byte),
            MDMAEN => self.execute_dma(byte),
            DMA_FIRST..=DMA_LAST => {
                self.dma_channels[usize::from(offset >> 4 & 0x7)]
                    .write_register(offset & 0xF, byte);
            }
            _ => return false,
        }
        true
    }

    fn divide(&mut self, divisor: u8) {
        if divisor == 0 {
            // Hardware's answer to x/0.
            self.quotient = 0xFFFF;
            self.product_or_remainder = self.dividend;
        } else {
            self.quotient = self.dividend / u16::from(divisor);
            self.product_or_remainder = self.dividend % u16::from(divisor);
        }
    }

    /// Runs general-purpose DMA over every channel armed in `mask`, lowest
    /// bit first. Bytes move through the bus itself so B-side (and A-side)
    /// MMIO side effects fire exactly as if the CPU had done the accesses.
    fn execute_dma(&mut self, mask: u8) {
        for channel_index in 0..8 {
            if mask & (1 << channel_index) == 0 {
                continue;
            }

            let channel = self.dma_channels[channel_index];
            let length = channel.transfer_length();
            trace!(
                "DMA {}: {} bytes {} ${:02X}:{:04X}",
                channel_index,
                length,
                if channel.b_to_a() { "<-" } else { "->" },
                channel.a_bus_bank(),
                channel.a_bus_address(),
            );

            let mut a_bus_address = channel.a_bus_address();
            for index in 0..length {
                let a_side = Address::new(channel.a_bus_bank(), a_bus_address);
                let b_side = Address::bank0(channel.b_bus_register(index));

                if channel.b_to_a() {
                    let byte = self.read(b_side);
                    self.write(a_side, byte);
                } else {
                    let byte = self.read(a_side);
                    self.write(b_side, byte);
                }

                a_bus_address = channel.advance_a_bus(a_bus_address);
            }

            self.dma_channels[channel_index].finish_transfer(a_bus_address);
        }
    }
}

impl<P: PpuRegisters> Bus for SnesBus<P> {
    fn read(&mut self, address: Address) -> u8 {
        let bank = address.bank();
        let offset = address.offset();

        if bank & 0xFE == WRAM_BANK {
            return self.wram[Self::wram_index(address)];
        }

        if Self::is_system_bank(bank) {
            if offset < WRAM_MIRROR_SIZE {
                return self.wram[usize::from(offset)];
            }
            if let Some(byte) = self.read_mmio(offset) {
                return byte;
            }
        }

        self.cartridge.read(address).unwrap_or(OPEN_BUS)
    }

    fn write(&mut self, address: Address, byte: u8) {
        let bank = address.bank();
        let offset = address.offset();

        if bank & 0xFE == WRAM_BANK {
            self.wram[Self::wram_index(address)] = byte;
            return;
        }

        if Self::is_system_bank(bank) {
            if offset < WRAM_MIRROR_SIZE {
                self.wram[usize::from(offset)] = byte;
                return;
            }
            if self.write_mmio(offset, byte) {
                return;
            }
        }

        // ROM and unmapped space swallow writes.
    }
}
