use crate::Address;

/// How the cartridge ROM is wired onto the address space.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MapMode {
    /// 32 KiB chunks in the upper half of banks $00-$7D and $80-$FF.
    LoRom,
    /// Full 64 KiB banks at $40-$7D and $C0-$FF.
    HiRom,
}

/// Cartridge ROM with LoROM/HiROM address decoding.
///
/// Header detection and copier-header stripping are the loader's problem;
/// the cartridge is handed raw ROM bytes and a map mode. Reads outside the
/// mapped regions return `None` so the bus can apply its open-bus rule, and
/// in-range reads wrap modulo the actual ROM size.
pub struct Cartridge {
    rom: Box<[u8]>,
    map_mode: MapMode,
}

impl Cartridge {
    pub fn new(rom: Box<[u8]>, map_mode: MapMode) -> Self {
        Cartridge { rom, map_mode }
    }

    pub fn map_mode(&self) -> MapMode {
        self.map_mode
    }

    pub fn read(&self, address: Address) -> Option<u8> {
        let index = match self.map_mode {
            MapMode::LoRom => self.lo_rom_index(address)?,
            MapMode::HiRom => self.hi_rom_index(address)?,
        };

        if self.rom.is_empty() {
            return None;
        }

        Some(self.rom[index % self.rom.len()])
    }

    fn lo_rom_index(&self, address: Address) -> Option<usize> {
        let bank = address.bank();
        let offset = address.offset();

        if matches!(bank, 0x7E | 0x7F) || offset < 0x8000 {
            return None;
        }

        Some((bank as usize & 0x7F) * 0x8000 + (offset as usize - 0x8000))
    }

    fn hi_rom_index(&self, address: Address) -> Option<usize> {
        let bank = address.bank();

        if !matches!(bank, 0x40..=0x7D | 0xC0..=0xFF) {
            return None;
        }

        Some((bank as usize & 0x7F) * 0x10000 + address.offset() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_rom(size: usize) -> Box<[u8]> {
        (0..size).map(|i| i as u8).collect()
    }

    #[test]
    fn lo_rom_maps_upper_bank_halves_to_32k_chunks() {
        let cartridge = Cartridge::new(numbered_rom(0x2_0000), MapMode::LoRom);

        assert_eq!(cartridge.read(Address::new(0x00, 0x8000)), Some(0x00));
        assert_eq!(cartridge.read(Address::new(0x00, 0x8001)), Some(0x01));
        // Bank 1 starts at ROM offset 0x8000; 0x8000 % 256 == 0.
        assert_eq!(cartridge.read(Address::new(0x01, 0x8000)), Some(0x00));
        assert_eq!(cartridge.read(Address::new(0x01, 0x8005)), Some(0x05));
    }

    #[test]
    fn lo_rom_mirrors_the_high_banks_onto_the_low_banks() {
        let cartridge = Cartridge::new(numbered_rom(0x2_0000), MapMode::LoRom);

        assert_eq!(
            cartridge.read(Address::new(0x80, 0x8123)),
            cartridge.read(Address::new(0x00, 0x8123))
        );
    }

    #[test]
    fn lo_rom_does_not_map_the_lower_bank_halves_or_wram_banks() {
        let cartridge = Cartridge::new(numbered_rom(0x2_0000), MapMode::LoRom);

        assert_eq!(cartridge.read(Address::new(0x00, 0x7FFF)), None);
        assert_eq!(cartridge.read(Address::new(0x7E, 0x8000)), None);
        assert_eq!(cartridge.read(Address::new(0x7F, 0xFFFF)), None);
    }

    #[test]
    fn hi_rom_maps_full_banks() {
        let cartridge = Cartridge::new(numbered_rom(0x2_0000), MapMode::HiRom);

        assert_eq!(cartridge.read(Address::new(0xC0, 0x0000)), Some(0x00));
        assert_eq!(cartridge.read(Address::new(0xC0, 0x0013)), Some(0x13));
        assert_eq!(cartridge.read(Address::new(0xC1, 0x0007)), Some(0x07));
        assert_eq!(
            cartridge.read(Address::new(0x40, 0x1234)),
            cartridge.read(Address::new(0xC0, 0x1234))
        );
    }

    #[test]
    fn hi_rom_does_not_map_the_system_banks() {
        let cartridge = Cartridge::new(numbered_rom(0x2_0000), MapMode::HiRom);

        assert_eq!(cartridge.read(Address::new(0x00, 0x8000)), None);
        assert_eq!(cartridge.read(Address::new(0x3F, 0xFFFF)), None);
        assert_eq!(cartridge.read(Address::new(0x7E, 0x0000)), None);
    }

    #[test]
    fn reads_wrap_modulo_rom_size() {
        let cartridge = Cartridge::new(numbered_rom(0x100), MapMode::LoRom);

        assert_eq!(cartridge.read(Address::new(0x00, 0x8000)), Some(0x00));
        assert_eq!(cartridge.read(Address::new(0x00, 0x8100)), Some(0x00));
        assert_eq!(cartridge.read(Address::new(0x04, 0x8042)), Some(0x42));
    }

    #[test]
    fn empty_rom_reads_nothing() {
        let cartridge = Cartridge::new(Box::new([]), MapMode::LoRom);

        assert_eq!(cartridge.read(Address::new(0x00, 0x8000)), None);
    }
}
