//! Instruction-set emulator core for a 24-bit sign-magnitude guidance
//! computer — the class of flight computer flown on the Viking Mars
//! landers.
//!
//! This crate is the execution engine only: word algebra, memory and
//! instruction decode, and the per-opcode semantics of [`Machine::step`].
//! It does not read image files, format output, or drive a REPL — those
//! are external collaborators built on top of [`Machine::load_image`],
//! [`Machine::run`], and the register/memory inspection surface below.

pub mod cpu;
pub mod decode;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod word;

pub use cpu::Machine;
pub use registers::Registers;
pub use word::{from_signed, to_signed};
