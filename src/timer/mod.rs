//! Timer and scheduling utilities for Nexa transmission.
//!
//! The blocking [`NexaTransmitter`](crate::driver::NexaTransmitter) is only as
//! accurate as its delay source and only as long as nothing preempts it. This
//! module helps with both:
//!
//! - `compute_ocr_value` / `const_ocr_value`: compare-register value for one
//!   base unit, for playing a [`PulseTrain`](crate::driver::PulseTrain) from a
//!   hardware timer in CTC mode
//! - `pulse_ticks`: timer ticks for a single pulse
//! - `transmit_uninterrupted`: a whole session inside a critical section
//!   (feature `critical-section`)
//! - `global_transmitter_*`: a transmitter shared between `main` and
//!   interrupt handlers (feature `critical-section`)
//! - `run_refresh_loop`: periodic refresh of a switch
//!
//! Common AVR settings at 16 MHz for `T = 250 µs`:
//!
//! | PRESCALER | Ticks per T | Longest pulse (40T) |
//! |-----------|-------------|---------------------|
//! |         8 |         500 |               20000 |
//! |        64 |        62.5 |                2500 |
//! |       256 |      15.625 |                 625 |

use libm::round;

use crate::driver::Pulse;

mod delay;
pub use delay::*;

#[cfg(feature = "critical-section")]
mod critical;
#[cfg_attr(feature = "critical-section", allow(unused_imports))]
#[cfg(feature = "critical-section")]
pub use critical::*;

/// 1,000,000 microseconds = 1 second
pub const MICROSECONDS_PER_SECOND: u32 = 1_000_000;

/// Computes the OCR value for one base unit on an AVR timer (CTC mode).
///
/// # Arguments
/// - `f_cpu`: CPU frequency in Hz
/// - `prescaler`: timer prescaler (e.g., 8, 64, 256)
/// - `unit_us`: base unit in microseconds (e.g., 250.0)
///
/// # Returns
/// - OCR value for OCRnA (rounds to nearest integer)
pub fn compute_ocr_value(f_cpu: u32, prescaler: u32, unit_us: f32) -> u16 {
    let ticks_per_second = f_cpu as f64 / prescaler as f64;
    let ticks_per_unit = ticks_per_second * (unit_us as f64 / MICROSECONDS_PER_SECOND as f64);
    round(ticks_per_unit) as u16
}

/// Compile-time OCR value calculator.
///
/// Integer arithmetic only; the result is truncated rather than rounded.
///
/// # Arguments
/// - `f_cpu`: CPU frequency in Hz
/// - `prescaler`: timer prescaler (e.g., 8, 64, 256)
/// - `unit_us`: base unit in whole microseconds (e.g., 250)
pub const fn const_ocr_value(f_cpu: u32, prescaler: u32, unit_us: u32) -> u16 {
    let ticks = (f_cpu / prescaler) as u64 * unit_us as u64 / MICROSECONDS_PER_SECOND as u64;
    ticks as u16
}

/// Timer ticks a pulse lasts, given the ticks of one base unit.
pub const fn pulse_ticks(unit_ticks: u16, pulse: Pulse) -> u32 {
    unit_ticks as u32 * pulse.units as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BASE_UNIT_US;
    use crate::driver::Marker;

    #[test]
    fn test_compute_ocr_value() {
        assert_eq!(compute_ocr_value(16_000_000, 8, 250.0), 500);
        assert_eq!(compute_ocr_value(16_000_000, 64, 250.0), 63);
        assert_eq!(compute_ocr_value(8_000_000, 64, 250.0), 31);
    }

    #[test]
    fn test_const_ocr_value() {
        const OCR: u16 = const_ocr_value(16_000_000, 8, BASE_UNIT_US);
        assert_eq!(OCR, 500);
        assert_eq!(const_ocr_value(16_000_000, 64, 250), 62);
    }

    #[test]
    fn test_pulse_ticks() {
        let pause_low = Marker::Pause.pulses()[1];
        assert_eq!(pulse_ticks(500, pause_low), 20_000);
        assert_eq!(pulse_ticks(500, Marker::Sync.pulses()[0]), 500);
    }
}
