//! Shared data models spanning the engine layers.

pub mod bar;
pub mod signal;

pub use bar::{PriceBar, RawRecord};
pub use signal::{Direction, Signal, SignalWindow};
