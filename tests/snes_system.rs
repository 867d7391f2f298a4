//! End-to-end scenarios on the assembled machine: programs in LoROM
//! exercising the MMIO surface through real instructions.

use snes_rust::{Address, Buttons, Bus, Cartridge, MapMode, NullPpu, Snes};

/// Builds a LoROM image whose reset vector points at $8000, with `code`
/// starting there.
fn lo_rom(code: &[u8]) -> Cartridge {
    let mut rom = vec![0u8; 0x8000];
    rom[..code.len()].copy_from_slice(code);
    rom[0x7FFC] = 0x00;
    rom[0x7FFD] = 0x80;
    Cartridge::new(rom.into_boxed_slice(), MapMode::LoRom)
}

fn run_until_stopped(snes: &mut Snes<NullPpu>) {
    for _ in 0..16 {
        snes.run_frame().expect("program hit an unknown opcode");
        if snes.cpu().stopped() {
            return;
        }
    }
    panic!("program never executed STP");
}

#[test]
fn multiply_runs_when_the_second_factor_is_written() {
    #[rustfmt::skip]
    let code = [
        0xA9, 200,        // LDA #200
        0x8D, 0x02, 0x42, // STA $4202
        0xA9, 100,        // LDA #100
        0x8D, 0x03, 0x42, // STA $4203
        0xAD, 0x16, 0x42, // LDA $4216
        0x8D, 0x00, 0x01, // STA $0100
        0xAD, 0x17, 0x42, // LDA $4217
        0x8D, 0x01, 0x01, // STA $0101
        0xDB,             // STP
    ];
    let mut snes = Snes::new(lo_rom(&code), NullPpu);

    run_until_stopped(&mut snes);

    // 200 * 100 = 20000 = $4E20, read back through the WRAM mirror.
    assert_eq!(snes.bus().read(Address::new(0x7E, 0x0100)), 0x20);
    assert_eq!(snes.bus().read(Address::new(0x7E, 0x0101)), 0x4E);
}

#[test]
fn division_by_zero_reads_back_the_defined_results() {
    #[rustfmt::skip]
    let code = [
        0xA9, 0x34,       // LDA #$34
        0x8D, 0x04, 0x42, // STA $4204
        0xA9, 0x12,       // LDA #$12
        0x8D, 0x05, 0x42, // STA $4205
        0xA9, 0x00,       // LDA #0
        0x8D, 0x06, 0x42, // STA $4206  (divide by zero)
        0xAD, 0x14, 0x42, // LDA $4214
        0x8D, 0x00, 0x01, // STA $0100
        0xAD, 0x16, 0x42, // LDA $4216
        0x8D, 0x01, 0x01, // STA $0101
        0xDB,             // STP
    ];
    let mut snes = Snes::new(lo_rom(&code), NullPpu);

    run_until_stopped(&mut snes);

    // Quotient is forced to $FFFF, remainder is the dividend.
    assert_eq!(snes.bus().read(Address::new(0x7E, 0x0100)), 0xFF);
    assert_eq!(snes.bus().read(Address::new(0x7E, 0x0101)), 0x34);
}

#[test]
fn dma_drains_the_apu_mailbox_into_wram() {
    // Channel 0, B to A, fixed B-bus register $2141, three bytes to
    // $7E:1000.
    #[rustfmt::skip]
    let code = [
        0xA9, 0x80,       // LDA #$80 (B to A, mode 0)
        0x8D, 0x00, 0x43, // STA $4300
        0xA9, 0x41,       // LDA #$41
        0x8D, 0x01, 0x43, // STA $4301
        0xA9, 0x00,       // LDA #$00
        0x8D, 0x02, 0x43, // STA $4302
        0xA9, 0x10,       // LDA #$10
        0x8D, 0x03, 0x43, // STA $4303
        0xA9, 0x7E,       // LDA #$7E
        0x8D, 0x04, 0x43, // STA $4304
        0xA9, 0x03,       // LDA #3
        0x8D, 0x05, 0x43, // STA $4305
        0xA9, 0x00,       // LDA #0
        0x8D, 0x06, 0x43, // STA $4306
        0xA9, 0x01,       // LDA #1
        0x8D, 0x0B, 0x42, // STA $420B  (fire)
        0xDB,             // STP
    ];
    let mut snes = Snes::new(lo_rom(&code), NullPpu);
    snes.bus().write_apu_port(1, 0x5A);

    run_until_stopped(&mut snes);

    assert_eq!(snes.bus().read(Address::new(0x7E, 0x1000)), 0x5A);
    assert_eq!(snes.bus().read(Address::new(0x7E, 0x1001)), 0x5A);
    assert_eq!(snes.bus().read(Address::new(0x7E, 0x1002)), 0x5A);
    // The channel advanced and exhausted itself.
    assert_eq!(snes.bus().read(Address::new(0x00, 0x4302)), 0x03);
    assert_eq!(snes.bus().read(Address::new(0x00, 0x4305)), 0x00);
}

#[test]
fn program_writes_reach_the_apu_mailbox() {
    #[rustfmt::skip]
    let code = [
        0xA9, 0xCC,       // LDA #$CC
        0x8D, 0x40, 0x21, // STA $2140
        0xDB,             // STP
    ];
    let mut snes = Snes::new(lo_rom(&code), NullPpu);

    run_until_stopped(&mut snes);

    assert_eq!(snes.bus().read_apu_port(0), 0xCC);
}

#[test]
fn controller_strobe_and_serial_reads_from_a_program() {
    // Strobe 1-then-0, then shift out the first four buttons into WRAM.
    #[rustfmt::skip]
    let code = [
        0xA9, 0x01,       // LDA #1
        0x8D, 0x16, 0x40, // STA $4016
        0xA9, 0x00,       // LDA #0
        0x8D, 0x16, 0x40, // STA $4016
        0xAD, 0x16, 0x40, // LDA $4016
        0x8D, 0x00, 0x01, // STA $0100
        0xAD, 0x16, 0x40, // LDA $4016
        0x8D, 0x01, 0x01, // STA $0101
        0xAD, 0x16, 0x40, // LDA $4016
        0x8D, 0x02, 0x01, // STA $0102
        0xAD, 0x16, 0x40, // LDA $4016
        0x8D, 0x03, 0x01, // STA $0103
        0xDB,             // STP
    ];
    let mut snes = Snes::new(lo_rom(&code), NullPpu);
    snes.controller().press(Buttons::B | Buttons::START);

    run_until_stopped(&mut snes);

    assert_eq!(snes.bus().read(Address::new(0x7E, 0x0100)), 1); // B
    assert_eq!(snes.bus().read(Address::new(0x7E, 0x0101)), 0); // Y
    assert_eq!(snes.bus().read(Address::new(0x7E, 0x0102)), 0); // Select
    assert_eq!(snes.bus().read(Address::new(0x7E, 0x0103)), 1); // Start
}

#[test]
fn wram_data_port_writes_land_in_high_wram() {
    #[rustfmt::skip]
    let code = [
        0xA9, 0x00,       // LDA #$00
        0x8D, 0x81, 0x21, // STA $2181
        0xA9, 0x30,       // LDA #$30
        0x8D, 0x82, 0x21, // STA $2182
        0xA9, 0x01,       // LDA #$01
        0x8D, 0x83, 0x21, // STA $2183
        0xA9, 0xAB,       // LDA #$AB
        0x8D, 0x80, 0x21, // STA $2180
        0xA9, 0xCD,       // LDA #$CD
        0x8D, 0x80, 0x21, // STA $2180
        0xDB,             // STP
    ];
    let mut snes = Snes::new(lo_rom(&code), NullPpu);

    run_until_stopped(&mut snes);

    assert_eq!(snes.bus().read(Address::new(0x7F, 0x3000)), 0xAB);
    assert_eq!(snes.bus().read(Address::new(0x7F, 0x3001)), 0xCD);
}
