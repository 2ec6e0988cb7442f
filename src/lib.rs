//! # nexa433
//!
//! A portable, no_std Rust encoder and transmitter for the Nexa 433 MHz remote-socket
//! protocol, for use with cheap ASK/OOK transmitter modules like the FS1000A.
//!
//! A Nexa command (transmitter identity, group flag, on/off, channel, unit) is encoded
//! into a 32-symbol frame and sent as a train of precisely timed HIGH/LOW pulses on a
//! single output pin. Every command is repeated five times so receivers can lock on.
//!
//! This crate provides:
//! - `embedded-hal` traits for digital output and blocking delays
//! - a pure frame encoder with no hardware dependency
//! - a pulse-train iterator for hardware timer backends
//! - a small switch adapter with injected status reporting
//!
//! ## Crate features
//! | Feature                      | Description |
//! |------------------------------|-------------|
//! | `std`                        | Disables `#![no_std]` support |
//! | `critical-section` (default) | Uninterrupted sessions and a shared global transmitter |
//! | `defmt-0-3`                  | Derives `defmt::Format` on public types |
//! | `log`                        | Uses `log` logging |
//!
//! ## Wire format
//!
//! ```text
//! S HHHH HHHH HHHH HHHH HHHH HHHH HHGO CCUU P
//! ```
//!
//! - `S`: sync marker
//! - `H`: 26-bit transmitter identity, most significant bit first
//! - `G`: group bit (`0` = group command)
//! - `O`: on/off bit (`0` = on)
//! - `C`/`U`: channel and unit, `1 => 11`, `2 => 10`, `3 => 01`, `4 => 00`
//! - `P`: pause marker
//!
//! ## Usage
//!
//! ```rust
//! # use embedded_hal_mock::eh1::delay::NoopDelay;
//! # use embedded_hal_mock::eh1::digital::{Mock as Pin, State as PinState, Transaction as PinTransaction};
//! # use nexa433::consts::FRAME_LEN;
//! # let mut expected = vec![PinTransaction::set(PinState::Low)];
//! # for _ in 0..5 {
//! #     for _ in 0..(1 + 2 * FRAME_LEN + 1) {
//! #         expected.push(PinTransaction::set(PinState::High));
//! #         expected.push(PinTransaction::set(PinState::Low));
//! #     }
//! # }
//! # let tx_pin = Pin::new(&expected);
//! # let delay = NoopDelay::new();
//! use nexa433::config::NexaConfig;
//! use nexa433::driver::NexaTransmitter;
//!
//! let config = NexaConfig::new(2_848_576, false, 1, 1);
//! let mut transmitter = NexaTransmitter::new(tx_pin, delay);
//! transmitter.send(&config, true); // blocks for the whole session
//! # transmitter.tx.done();
//! ```
//!
//! ## Integration Notes
//!
//! - The base time unit is 250 µs; every pulse is an integer multiple of it
//! - Timing precision is critical; run sessions with interrupts masked
//!   (see [`timer::transmit_uninterrupted`]) or drive a hardware timer from
//!   [`driver::PulseTrain`]
//! - Only one transmitter should own a given output pin
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded environments.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "critical-section")]
pub use critical_section;

pub use heapless;

pub mod config;
pub mod consts;
pub mod driver;
pub mod encoding;
pub mod error;
pub mod frame;
pub mod switch;
pub mod timer;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::NexaConfig;
pub use driver::NexaTransmitter;
pub use error::NexaError;
pub use frame::Frame;
pub use switch::{CommandTarget, NexaSwitch, StatusSink};
