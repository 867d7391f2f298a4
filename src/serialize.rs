use crate::Instruction;

/// Anything that can stand for one byte in a `mem!` program listing: plain
/// bytes, or instructions via their opcode.
pub trait SerializeByte {
    fn to_byte(self) -> u8;
}

impl SerializeByte for u8 {
    fn to_byte(self) -> u8 {
        self
    }
}

impl SerializeByte for Instruction {
    fn to_byte(self) -> u8 {
        self.to_opcode()
    }
}
