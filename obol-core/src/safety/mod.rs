//! Tilt monitoring and alarm logic

pub mod tilt;

pub use tilt::{TiltEdge, TiltMonitor, TILT_THRESHOLD};
