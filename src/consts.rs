//! Constants used across the Nexa protocol implementation.
//!
//! This module defines the frame layout and the pulse timing of the
//! Nexa self-learning protocol as spoken by 433 MHz remote sockets and dimmers.
//!
//! ## Key Concepts
//!
//! - **Base unit**: every pulse width is an integer multiple of `T`.
//! - **Frame**: 26 identity bits, group, on/off, two channel and two unit bits.
//! - **Markers**: SYNC opens a frame, PAUSE closes it.
//! - **Session**: a frame is sent several times in a row for every command.
//!
//! | T  | Duration (µs) |
//! |----|---------------|
//! |  1 |           250 |
//! |  5 |          1250 |
//! | 10 |          2500 |
//! | 40 |         10000 |

/// Base time unit `T` of the protocol, in microseconds.
pub const BASE_UNIT_US: u32 = 250;

/// Width of a short pulse, in base units.
pub const SHORT_UNITS: u8 = 1;

/// Width of the long LOW half of a data symbol, in base units.
pub const LONG_UNITS: u8 = 5;

/// Width of the LOW half of the SYNC marker, in base units.
pub const SYNC_LOW_UNITS: u8 = 10;

/// Width of the LOW half of the PAUSE marker, in base units.
pub const PAUSE_LOW_UNITS: u8 = 40;

/// Number of identity symbols at the start of every frame.
pub const IDENTITY_BITS: usize = 26;

/// Mask selecting the part of an identity that survives encoding.
pub const IDENTITY_MASK: u32 = (1 << IDENTITY_BITS) - 1;

/// Largest identity that encodes without truncation (67 108 863).
pub const MAX_IDENTITY: u32 = IDENTITY_MASK;

/// Number of symbols in a selector (channel or unit) field.
pub const SELECTOR_BITS: usize = 2;

/// Number of symbols in a complete frame.
///
/// Identity, group bit, on/off bit, channel and unit.
pub const FRAME_LEN: usize = IDENTITY_BITS + 1 + 1 + SELECTOR_BITS + SELECTOR_BITS;

/// Number of back-to-back frames sent for a single command.
///
/// Receivers need several identical frames before they act on one.
pub const SESSION_REPEATS: u8 = 5;

/// Largest base unit, in microseconds, for which every pulse width still fits
/// in a `u32` microsecond count.
pub const MAX_BASE_UNIT_US: u32 = u32::MAX / PAUSE_LOW_UNITS as u32;
