/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// First address of program space; everything below it is reserved for the
/// interpreter (the font sheet lives there).
pub const PROGRAM_START: u16 = 0x200;

/// Largest ROM that fits between PROGRAM_START and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// The display is a 64x32 grid of monochrome pixels.
pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Maximum nesting depth of subroutine calls.
pub const STACK_DEPTH: usize = 16;

/// Where the font sheet is copied on power-up.
pub const FONT_START: u16 = 0x050;

/// Bytes per font glyph; each glyph is 8 pixels wide and 5 rows tall.
pub const FONT_HEIGHT: u16 = 5;

/// Nanoseconds per CPU cycle (~500Hz).
pub const CLOCK_SPEED: u64 = 2_000_000;

/// Nanoseconds between timer ticks (60Hz).
pub const TIMER_INTERVAL: u64 = 16_666_667;

/// Glyphs for the hex digits 0..F, one row per byte, leftmost pixel in the
/// high bit. Only the high nibble of each row carries pixels.
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
