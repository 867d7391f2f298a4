use bitflags::bitflags;

bitflags! {
    /// The twelve SNES buttons, in serial read order from bit 0 up.
    #[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
    pub struct Buttons: u16 {
        const B      = 1 << 0;
        const Y      = 1 << 1;
        const SELECT = 1 << 2;
        const START  = 1 << 3;
        const UP     = 1 << 4;
        const DOWN   = 1 << 5;
        const LEFT   = 1 << 6;
        const RIGHT  = 1 << 7;
        const A      = 1 << 8;
        const X      = 1 << 9;
        const L      = 1 << 10;
        const R      = 1 << 11;
    }
}

const BUTTON_COUNT: u8 = 12;

/// The controller serial shift register behind port $4016.
///
/// Strobing 1-then-0 latches the live button state and rewinds the shift
/// index; each read while the strobe is low returns one button bit and
/// advances. Reads past the twelfth button return 1, which is how programs
/// detect a standard controller.
#[derive(Debug, Default)]
pub struct Controller {
    buttons: Buttons,
    latched: Buttons,
    strobe: bool,
    read_cursor: u8,
}

impl Controller {
    pub fn press(&mut self, buttons: Buttons) {
        self.buttons.insert(buttons);
    }

    pub fn release(&mut self, buttons: Buttons) {
        self.buttons.remove(buttons);
    }

    pub fn read(&mut self) -> u8 {
        if self.strobe {
            self.read_cursor = 0;
        }

        let bit = if self.read_cursor >= BUTTON_COUNT {
            1
        } else {
            u8::from(self.latched.bits() & (1 << self.read_cursor) != 0)
        };

        if !self.strobe && self.read_cursor < BUTTON_COUNT {
            self.read_cursor += 1;
        }

        bit
    }

    pub fn write(&mut self, value: u8) {
        self.strobe = value & 0b1 != 0;

        // The state is latched while the strobe is held high, so that the
        // 1-then-0 sequence captures whatever was pressed at the strobe.
        if self.strobe {
            self.latched = self.buttons;
            self.read_cursor = 0;
        }
    }
}
