//! Board-agnostic core logic for the vending machine firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, outputs, tilt sensor)
//! - State machine for the vending cycle
//! - Balance tracking and greedy change calculation
//! - Tilt/alarm monitoring logic
//! - Timing configuration

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod menu;
pub mod money;
pub mod safety;
pub mod state;
pub mod traits;
pub mod vend;
