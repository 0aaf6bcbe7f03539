use thiserror::Error;

/// Fatal conditions detectable inside `load_rom` or a single `step`.
///
/// An unrecognized instruction pattern is deliberately not represented
/// here; it executes as a no-op and the cycle completes normally.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The ROM does not fit in program space; memory was left untouched.
    #[error("ROM is {size} bytes but program space holds {max}")]
    RomTooLarge { size: usize, max: usize },

    /// An effective address fell outside the 4096-byte memory.
    #[error("memory access out of bounds at {address:#06X}")]
    MemoryOutOfBounds { address: usize },

    /// A subroutine call would exceed the maximum nesting depth.
    #[error("call stack overflow at {depth} nested calls")]
    StackOverflow { depth: usize },

    /// A return was executed with no call on the stack.
    #[error("return with an empty call stack")]
    StackUnderflow,
}
