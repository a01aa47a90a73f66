//! Platform abstraction layer
//!
//! Hand-off points between host threads and the simulation:
//! - Input (latest pointer/touch position)

pub mod input;

pub use input::PointerSlot;
