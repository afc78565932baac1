//! Shared infrastructure utilities

pub mod timing;

pub use timing::{TimedOperation, with_timeout};
