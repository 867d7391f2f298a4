use std::io::Read;

use anyhow::Context;
use snes_rust::{Cartridge, MapMode, NullPpu, Snes};

/// Headless runner: feed a raw ROM image on stdin, watch the trace logs.
/// Copier headers are not handled; strip them first.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let hi_rom = std::env::args().any(|arg| arg == "--hirom");
    let map_mode = if hi_rom { MapMode::HiRom } else { MapMode::LoRom };

    let mut rom = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut rom)
        .context("reading ROM image from stdin")?;

    let cartridge = Cartridge::new(rom.into_boxed_slice(), map_mode);
    let mut snes = Snes::new(cartridge, NullPpu);

    loop {
        snes.run_frame().context("emulation halted")?;

        if snes.cpu().stopped() {
            log::info!("CPU stopped at {}", snes.cpu().program_counter());
            return Ok(());
        }
    }
}
