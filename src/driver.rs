//! Pulse transmitter for Nexa 433 MHz receivers.
//!
//! This module provides the [`NexaTransmitter`] struct, which renders encoded
//! [`Frame`]s as On-Off Keyed pulses on a single output pin connected to a
//! 433 MHz ASK transmitter module, using a blocking delay for timing.
//!
//! ## Pulse shapes
//!
//! Every pulse is an integer multiple of the base unit `T` (250 µs):
//!
//! | Marker | Pulses                            |
//! |--------|-----------------------------------|
//! | SYNC   | HIGH T, LOW 10T                   |
//! | ONE    | HIGH T, LOW T, HIGH T, LOW 5T     |
//! | ZERO   | HIGH T, LOW 5T, HIGH T, LOW T     |
//! | PAUSE  | HIGH T, LOW 40T                   |
//!
//! A session is `SYNC, frame, PAUSE`, sent [`SESSION_REPEATS`] times back to back.
//!
//! ## Example
//!
//! ```rust
//! # use embedded_hal_mock::eh1::delay::NoopDelay;
//! # use embedded_hal_mock::eh1::digital::{Mock as Pin, State as PinState, Transaction as PinTransaction};
//! use nexa433::driver::{NexaTransmitter, PulseTrain};
//! use nexa433::frame::Frame;
//!
//! let frame = Frame::encode(5, false, true, 1, 2);
//! # let mut expected = vec![PinTransaction::set(PinState::Low)];
//! # for pulse in PulseTrain::new(&frame) {
//! #     expected.push(PinTransaction::set(if pulse.high { PinState::High } else { PinState::Low }));
//! # }
//! # let tx_pin = Pin::new(&expected);
//! let mut transmitter = NexaTransmitter::new(tx_pin, NoopDelay::new());
//! transmitter.transmit(&frame);
//! assert_eq!(transmitter.sessions_sent, 1);
//! # transmitter.tx.done();
//! ```
//!
//! ## Design Notes
//!
//! The whole session runs on the calling context and only returns once the
//! last PAUSE has elapsed. Receivers decode by pulse width, so anything that
//! stretches a pulse (preemption, interrupts) can corrupt the frame; see
//! [`crate::timer`] for uninterrupted sessions and hardware timer helpers.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::NexaConfig;
use crate::consts::{
    BASE_UNIT_US, LONG_UNITS, MAX_BASE_UNIT_US, PAUSE_LOW_UNITS, SESSION_REPEATS, SHORT_UNITS,
    SYNC_LOW_UNITS,
};
use crate::encoding::Symbol;
use crate::frame::Frame;

/// A single level held on the output pin for a whole number of base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct Pulse {
    /// `true` for carrier on (pin HIGH).
    pub high: bool,
    /// Duration in multiples of the base unit.
    pub units: u8,
}

impl Pulse {
    const fn high(units: u8) -> Self {
        Self { high: true, units }
    }

    const fn low(units: u8) -> Self {
        Self { high: false, units }
    }

    /// Duration of this pulse in microseconds for the given base unit.
    ///
    /// Saturates at `u32::MAX`.
    pub const fn duration_us(&self, base_unit_us: u32) -> u32 {
        (self.units as u32).saturating_mul(base_unit_us)
    }
}

/// A timing pattern on the wire: either a data symbol or a frame delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Marker {
    /// Opens a frame.
    Sync,
    /// Data symbol `1`.
    One,
    /// Data symbol `0`.
    Zero,
    /// Closes a frame.
    Pause,
}

impl Marker {
    const SYNC: [Pulse; 2] = [Pulse::high(SHORT_UNITS), Pulse::low(SYNC_LOW_UNITS)];
    const ONE: [Pulse; 4] = [
        Pulse::high(SHORT_UNITS),
        Pulse::low(SHORT_UNITS),
        Pulse::high(SHORT_UNITS),
        Pulse::low(LONG_UNITS),
    ];
    const ZERO: [Pulse; 4] = [
        Pulse::high(SHORT_UNITS),
        Pulse::low(LONG_UNITS),
        Pulse::high(SHORT_UNITS),
        Pulse::low(SHORT_UNITS),
    ];
    const PAUSE: [Pulse; 2] = [Pulse::high(SHORT_UNITS), Pulse::low(PAUSE_LOW_UNITS)];

    /// The pulses that make up this marker, in order.
    pub const fn pulses(self) -> &'static [Pulse] {
        match self {
            Marker::Sync => &Self::SYNC,
            Marker::One => &Self::ONE,
            Marker::Zero => &Self::ZERO,
            Marker::Pause => &Self::PAUSE,
        }
    }
}

impl From<Symbol> for Marker {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::One => Marker::One,
            Symbol::Zero => Marker::Zero,
        }
    }
}

/// Every pulse of one transmission session, in order.
///
/// Yields `SYNC`, the frame symbols and `PAUSE`, [`SESSION_REPEATS`] times.
/// This is the waveform [`NexaTransmitter::transmit`] plays back; a timer
/// interrupt can step through it just as well, one pulse per compare match.
///
/// The train borrows its frame; an interrupt handler can hold a
/// `PulseTrain<'static>` over a frame kept in a `static`.
#[derive(Debug, Clone)]
pub struct PulseTrain<'a> {
    frame: &'a Frame,
    /// Completed repetitions
    repeat: u8,
    /// 0 is SYNC, `1..=len` are symbols, `len + 1` is PAUSE
    position: usize,
    /// Index into the current marker's pulses
    pulse: usize,
}

impl<'a> PulseTrain<'a> {
    /// Starts a session for `frame`.
    pub fn new(frame: &'a Frame) -> Self {
        Self {
            frame,
            repeat: 0,
            position: 0,
            pulse: 0,
        }
    }

    /// The frame being sent.
    pub fn frame(&self) -> &'a Frame {
        self.frame
    }

    /// Whether every pulse has been yielded.
    pub fn is_finished(&self) -> bool {
        self.repeat >= SESSION_REPEATS
    }

    fn current_marker(&self) -> Option<Marker> {
        if self.is_finished() {
            return None;
        }
        let symbols = self.frame.as_symbols();
        Some(match self.position {
            0 => Marker::Sync,
            p if p <= symbols.len() => Marker::from(symbols[p - 1]),
            _ => Marker::Pause,
        })
    }
}

impl Iterator for PulseTrain<'_> {
    type Item = Pulse;

    fn next(&mut self) -> Option<Pulse> {
        let pulses = self.current_marker()?.pulses();
        let pulse = pulses[self.pulse];
        self.pulse += 1;
        if self.pulse >= pulses.len() {
            self.pulse = 0;
            self.position += 1;
            if self.position > self.frame.len() + 1 {
                self.position = 0;
                self.repeat += 1;
            }
        }
        Some(pulse)
    }
}

/// A blocking Nexa transmitter driving one output pin.
///
/// ## Type Parameters
///
/// - `TX`: A type implementing [`embedded_hal::digital::OutputPin`] wired to the RF module's data input
/// - `D`: A type implementing [`embedded_hal::delay::DelayNs`] with microsecond resolution
///
/// ## Notes
///
/// - The pin is driven `LOW` (carrier off) on construction and after every session.
/// - Pin errors are discarded: Nexa is one-way and there is nothing to retry against.
/// - The transmitter holds no command state; every call is encoded from scratch.
#[derive(Debug)]
pub struct NexaTransmitter<TX, D>
where
    TX: OutputPin,
    D: DelayNs,
{
    /// TX pin
    pub tx: TX,
    delay: D,
    base_unit_us: u32,

    /// Counter of completed transmission sessions.
    pub sessions_sent: u16,
}

impl<TX, D> NexaTransmitter<TX, D>
where
    TX: OutputPin,
    D: DelayNs,
{
    /// Creates a new transmitter on the given pin and delay source.
    ///
    /// # Notes
    /// TX is driven `LOW` initially (carrier off).
    pub fn new(tx: TX, delay: D) -> Self {
        let mut cls = Self {
            tx,
            delay,
            base_unit_us: BASE_UNIT_US,
            sessions_sent: 0,
        };
        cls.write_tx(false);
        cls
    }

    /// Overrides the base unit `T`.
    ///
    /// Real receivers expect [`BASE_UNIT_US`]; this exists to compensate for
    /// slow pin toggling or an imprecise delay source. Values above
    /// [`MAX_BASE_UNIT_US`] are clamped to it.
    pub fn with_base_unit(mut self, base_unit_us: u32) -> Self {
        self.base_unit_us = base_unit_us.min(MAX_BASE_UNIT_US);
        self
    }

    /// The base unit in microseconds.
    pub fn base_unit_us(&self) -> u32 {
        self.base_unit_us
    }

    /// Gives back the pin and delay source.
    pub fn release(self) -> (TX, D) {
        (self.tx, self.delay)
    }

    fn write_tx(&mut self, high: bool) {
        if high {
            let _ = self.tx.set_high();
        } else {
            let _ = self.tx.set_low();
        }
    }

    /// Holds the pin at the pulse's level for the pulse's duration.
    pub fn emit(&mut self, pulse: Pulse) {
        self.write_tx(pulse.high);
        self.delay.delay_us(pulse.duration_us(self.base_unit_us));
    }

    /// Emits every pulse of one marker.
    pub fn send_marker(&mut self, marker: Marker) {
        for &pulse in marker.pulses() {
            self.emit(pulse);
        }
    }

    /// Sends `frame` as a full session, blocking until the last PAUSE ends.
    pub fn transmit(&mut self, frame: &Frame) {
        #[cfg(feature = "log")]
        log::debug!(
            "nexa: transmitting {} ({} symbols x {})",
            frame,
            frame.len(),
            SESSION_REPEATS
        );
        for pulse in PulseTrain::new(frame) {
            self.emit(pulse);
        }
        self.sessions_sent = self.sessions_sent.wrapping_add(1);
    }

    /// Encodes and sends the on/off command for `config`.
    pub fn send(&mut self, config: &NexaConfig, on: bool) {
        self.transmit(&config.frame(on));
    }
}
