pub mod classify;
pub mod hex;
pub mod instruction;
pub mod normalize;
pub mod render;

pub use classify::{classify, parse_line, ClassifyError, LineError};
pub use instruction::{AddressingMode, ParsedInstruction};
pub use normalize::{normalize, NormalizedLine};
