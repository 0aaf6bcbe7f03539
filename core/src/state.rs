use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_SET, FONT_START, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START,
    STACK_DEPTH,
};
use crate::error::Error;

/// The framebuffer is indexed as `[y][x]`; each cell is 0 (off) or 1 (on).
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// All mutable interpreter state.
///
/// ## CPU
/// - (v) 16 8-bit registers V0..VF
///     - V0..VE are general purpose
///     - VF is the flag register, overwritten by arithmetic, shift and
///       draw instructions; correct programs never use it as an accumulator
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter
/// - (sp) the number of live call stack entries
///
/// ## Memory
/// - 4096 bytes of addressable memory; `0x000..0x200` is reserved and
///   holds the font sheet at `0x050`, programs load at `0x200`
/// - a 16-entry call stack of return addresses
/// - a 64x32 framebuffer, written exclusively by XOR draws
///
/// ## Timers
/// - two 8-bit countdown timers (delay & sound); instructions set and read
///   them, only the host's 60Hz tick decrements them
///
/// ## Input
/// - (waiting_key) when set, execution is held at a wait-for-key
///   instruction until the keypad reports a press for that register
#[derive(Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub waiting_key: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font = FONT_START as usize;
        memory[font..font + FONT_SET.len()].copy_from_slice(&FONT_SET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            waiting_key: None,
        }
    }

    /// Restores the complete power-on state: registers, index, stack,
    /// timers, framebuffer and the wait-for-key hold are cleared, memory is
    /// re-zeroed and the font copied back in. A loaded ROM does not survive
    /// a reset and has to be loaded again.
    pub fn reset(&mut self) {
        *self = State::new();
    }

    /// Copies a ROM into program space at `0x200`.
    ///
    /// Fails without touching memory if the ROM is larger than the
    /// `MAX_ROM_SIZE` bytes of program space.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Error> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.memory[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_state {
    use super::*;

    #[test]
    fn test_new_points_pc_at_program_space() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.sp, 0);
        assert_eq!(state.i, 0);
    }

    #[test]
    fn test_new_copies_the_font_sheet() {
        let state = State::new();
        assert_eq!(state.memory[0x050..0x0A0], FONT_SET[..]);
        // program space starts zeroed
        assert_eq!(state.memory[0x200..], [0; MAX_ROM_SIZE][..]);
    }

    #[test]
    fn test_load_rom_copies_to_program_space() {
        let mut state = State::new();
        state.load_rom(&[0xAA, 0xBB, 0xCC]).unwrap();
        assert_eq!(state.memory[0x200..0x203], [0xAA, 0xBB, 0xCC]);
        assert_eq!(state.memory[0x203], 0);
    }

    #[test]
    fn test_load_rom_fills_program_space_exactly() {
        let mut state = State::new();
        state.load_rom(&[0x11; MAX_ROM_SIZE]).unwrap();
        assert_eq!(state.memory[MEMORY_SIZE - 1], 0x11);
    }

    #[test]
    fn test_oversized_rom_is_rejected_and_memory_untouched() {
        let mut state = State::new();
        let err = state.load_rom(&[0x11; MAX_ROM_SIZE + 1]).unwrap_err();
        assert_eq!(
            err,
            Error::RomTooLarge {
                size: MAX_ROM_SIZE + 1,
                max: MAX_ROM_SIZE
            }
        );
        assert_eq!(state.memory[0x200..], [0; MAX_ROM_SIZE][..]);
    }

    #[test]
    fn test_reset_restores_power_on_state() {
        let mut state = State::new();
        state.load_rom(&[0xAA, 0xBB]).unwrap();
        state.v[0x3] = 0x42;
        state.pc = 0x300;
        state.frame_buffer[0][0] = 1;
        state.waiting_key = Some(0x1);

        state.reset();

        assert_eq!(state.pc, 0x200);
        assert_eq!(state.v, [0; 16]);
        assert_eq!(state.frame_buffer[0][0], 0);
        assert_eq!(state.waiting_key, None);
        // memory is re-zeroed, so the ROM is gone but the font is back
        assert_eq!(state.memory[0x200..0x202], [0, 0]);
        assert_eq!(state.memory[0x050..0x0A0], FONT_SET[..]);
    }
}
