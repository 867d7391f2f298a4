#![allow(clippy::upper_case_acronyms)] // Allow upper case acronyms like SNES, CPU because I think it's more readable!

pub use crate::address::Address;
pub use crate::bus::ArrayBus;
pub use crate::bus::Bus;
pub use crate::bus::SnesBus;
pub use crate::cartridge::Cartridge;
pub use crate::cartridge::MapMode;
pub use crate::cpu::instructions;
pub use crate::cpu::Hook;
pub use crate::cpu::Instruction;
pub use crate::cpu::NoHook;
pub use crate::cpu::Status;
pub use crate::cpu::TraceRing;
pub use crate::cpu::UnknownOpcode;
pub use crate::cpu::CPU;
pub use crate::input::Buttons;
pub use crate::input::Controller;
pub use crate::ppu::NullPpu;
pub use crate::ppu::PpuRegisters;
pub use crate::serialize::SerializeByte;

mod address;
mod bus;
mod cartridge;
mod cpu;
mod dma;
mod input;
mod ppu;
mod serialize;

/// NTSC master clocks per frame, divided by the fastest CPU cycle length.
/// Coarse, but good enough to pace a headless frame loop.
const CYCLES_PER_FRAME: u32 = 357_368 / 6;

/// The assembled machine: CPU plus SNES bus, with the thin scheduling glue
/// that drives frames. The PPU is whatever collaborator the caller provides.
pub struct Snes<P: PpuRegisters> {
    cpu: CPU<SnesBus<P>>,
}

impl<P: PpuRegisters> Snes<P> {
    pub fn new(cartridge: Cartridge, ppu: P) -> Self {
        let bus = SnesBus::new(cartridge, ppu);
        Snes {
            cpu: CPU::from_bus(bus),
        }
    }

    pub fn cpu(&mut self) -> &mut CPU<SnesBus<P>> {
        &mut self.cpu
    }

    pub fn bus(&mut self) -> &mut SnesBus<P> {
        self.cpu.bus()
    }

    pub fn controller(&mut self) -> &mut Controller {
        self.cpu.bus().controller()
    }

    /// Runs roughly one frame's worth of instructions, then signals the
    /// v-blank boundary: the bus latches the NMI and, if the program asked
    /// for it through $4200, the CPU vectors.
    pub fn run_frame(&mut self) -> Result<(), UnknownOpcode> {
        let mut cycles = 0;
        while cycles < CYCLES_PER_FRAME {
            let spent = self.cpu.step_instruction()?;
            if spent == 0 {
                // Waiting or stopped; only an interrupt gets us further.
                break;
            }
            cycles += spent;
        }

        self.cpu.bus().pulse_nmi();
        if self.cpu.bus().nmi_enabled() {
            self.cpu.nmi();
        }

        Ok(())
    }

    /// Delivers an externally raised IRQ between instructions.
    pub fn irq(&mut self) {
        self.cpu.irq();
    }
}

#[macro_export]
macro_rules! mem {
    ($( $data: expr ),* $(,)? ) => {
        mem!{0u32 => { $($data),* }}
    };
    ($( $offset: expr => { $( $data: expr ),* $(,)? } )*) => {
        {
            #[allow(unused_variables, unused_mut)]
            let mut memory = $crate::ArrayBus::default();
            $(
                #[allow(unused_variables, unused_mut)]
                let mut addr: $crate::Address = $crate::Address::from($offset);
                $(
                    let byte = $crate::SerializeByte::to_byte($data);
                    $crate::Bus::write(&mut memory, addr, byte);
                    addr += 1u16;
                )*
            )*
            memory
        }
    };
    ($offset: expr => $data: expr) => {
        mem!{$offset => { $data }}
    };
}
