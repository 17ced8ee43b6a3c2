// Fundamental types of the membership engine
// Principle: minimal, auditable, deterministic

pub mod address;
pub mod primitives;

pub use address::*;
pub use primitives::*;
