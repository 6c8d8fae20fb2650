//! Rolling indicator computation.

pub mod sma;

pub use sma::rolling_windows;
