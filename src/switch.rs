//! On/off switch adapter around a [`NexaTransmitter`].
//!
//! [`NexaSwitch`] is the piece a home-automation host talks to. It remembers
//! the last commanded state of one receiver, turns `"<name> on"` /
//! `"<name> off"` commands into transmissions, and reports `"<name> on"` /
//! `"<name> off"` to an injected [`StatusSink`] after every action.
//!
//! The host drives it through the [`CommandTarget`] capability and never
//! needs to know about frames or pulses.
//!
//! ## Example
//!
//! ```rust
//! # use embedded_hal_mock::eh1::delay::NoopDelay;
//! # use embedded_hal_mock::eh1::digital::{Mock as Pin, State as PinState, Transaction as PinTransaction};
//! # use nexa433::consts::FRAME_LEN;
//! # let mut expected = vec![PinTransaction::set(PinState::Low)];
//! # for _ in 0..(2 * 5) {
//! #     for _ in 0..(1 + 2 * FRAME_LEN + 1) {
//! #         expected.push(PinTransaction::set(PinState::High));
//! #         expected.push(PinTransaction::set(PinState::Low));
//! #     }
//! # }
//! # let tx_pin = Pin::new(&expected);
//! use nexa433::config::NexaConfig;
//! use nexa433::driver::NexaTransmitter;
//! use nexa433::switch::{CommandTarget, NexaSwitch, Status, StatusSink};
//!
//! struct Hub;
//!
//! impl StatusSink for Hub {
//!     fn send_status(&mut self, status: &Status<'_>) {
//!         println!("{status}");
//!     }
//! }
//!
//! let transmitter = NexaTransmitter::new(tx_pin, NoopDelay::new());
//! let mut switch = NexaSwitch::new("lamp", transmitter, NexaConfig::new(2_848_576, false, 1, 1), Hub);
//! switch.init(); // sends "off", reports "lamp off"
//! switch.apply("lamp on"); // sends "on", reports "lamp on"
//! assert_eq!(switch.current_status().to_string(), "lamp on");
//! # switch.transmitter_mut().tx.done();
//! ```

use core::fmt;
use core::str::FromStr;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::NexaConfig;
use crate::driver::NexaTransmitter;
use crate::error::NexaError;
use crate::frame::Frame;

/// Remembered state of a receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum SwitchState {
    /// Receiver switched on.
    On,
    /// Receiver switched off.
    #[default]
    Off,
}

impl SwitchState {
    /// Whether this is [`SwitchState::On`].
    pub const fn is_on(self) -> bool {
        matches!(self, SwitchState::On)
    }

    /// The word used on the status channel.
    pub const fn as_str(self) -> &'static str {
        match self {
            SwitchState::On => "on",
            SwitchState::Off => "off",
        }
    }
}

impl From<bool> for SwitchState {
    fn from(on: bool) -> Self {
        if on { SwitchState::On } else { SwitchState::Off }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed on/off command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Directive {
    /// Switch on.
    On,
    /// Switch off.
    Off,
}

impl Directive {
    /// Parses a host command of the form `"<name> on"` or `"<name> off"`.
    ///
    /// Only the text after the first space is looked at; a command without a
    /// space is parsed whole, so a bare `"on"` works too.
    pub fn from_command(command: &str) -> Result<Self, NexaError> {
        let word = command.split_once(' ').map_or(command, |(_, rest)| rest);
        word.parse()
    }

    /// The state this directive leads to.
    pub const fn state(self) -> SwitchState {
        match self {
            Directive::On => SwitchState::On,
            Directive::Off => SwitchState::Off,
        }
    }
}

impl FromStr for Directive {
    type Err = NexaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Directive::On),
            "off" => Ok(Directive::Off),
            _ => Err(NexaError::UnknownDirective),
        }
    }
}

/// Status report for one device, rendered as `"<name> on"` or `"<name> off"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct Status<'a> {
    /// Device name.
    pub name: &'a str,
    /// Current state.
    pub state: SwitchState,
}

impl<'a> Status<'a> {
    /// Creates a status report.
    pub const fn new(name: &'a str, state: SwitchState) -> Self {
        Self { name, state }
    }
}

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.state)
    }
}

/// Where status reports go, typically a hub connection.
pub trait StatusSink {
    /// Publishes one status report.
    fn send_status(&mut self, status: &Status<'_>);
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn send_status(&mut self, status: &Status<'_>) {
        (**self).send_status(status);
    }
}

/// Discards every report.
impl StatusSink for () {
    fn send_status(&mut self, _status: &Status<'_>) {}
}

/// Capability a host uses to drive a device by text command.
pub trait CommandTarget {
    /// Handles a textual command such as `"lamp on"`.
    ///
    /// Unrecognised commands are not an error; they leave the state as it was.
    fn apply(&mut self, command: &str);

    /// The current status of the device.
    fn current_status(&self) -> Status<'_>;
}

/// A Nexa receiver controlled as a simple on/off switch.
///
/// ## Type Parameters
///
/// - `TX`: output pin of the transmitter
/// - `D`: delay source of the transmitter
/// - `S`: a [`StatusSink`] receiving a report after every action
///
/// ## Notes
///
/// - The switch starts out [`SwitchState::Off`]; call [`init`](NexaSwitch::init)
///   once the host is ready to put the receiver in that state.
/// - Every action re-encodes the frame from the current [`NexaConfig`] and
///   state, so repeated refreshes send identical frames.
#[derive(Debug)]
pub struct NexaSwitch<'a, TX, D, S>
where
    TX: OutputPin,
    D: DelayNs,
    S: StatusSink,
{
    name: &'a str,
    config: NexaConfig,
    state: SwitchState,
    strict: bool,
    transmitter: NexaTransmitter<TX, D>,
    sink: S,
}

impl<'a, TX, D, S> NexaSwitch<'a, TX, D, S>
where
    TX: OutputPin,
    D: DelayNs,
    S: StatusSink,
{
    /// Creates a switch. Nothing is transmitted or reported yet.
    ///
    /// # Arguments
    /// - `name`: device name used in status reports
    /// - `transmitter`: transmitter owning the RF output pin
    /// - `config`: address of the receiver
    /// - `sink`: destination of status reports
    pub fn new(
        name: &'a str,
        transmitter: NexaTransmitter<TX, D>,
        config: NexaConfig,
        sink: S,
    ) -> Self {
        Self {
            name,
            config,
            state: SwitchState::Off,
            strict: false,
            transmitter,
            sink,
        }
    }

    /// Refuses to transmit when the configuration does not validate, instead
    /// of sending truncated or short frames.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Device name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Current receiver address.
    pub fn config(&self) -> &NexaConfig {
        &self.config
    }

    /// Remembered state.
    pub fn state(&self) -> SwitchState {
        self.state
    }

    /// The underlying transmitter.
    pub fn transmitter(&self) -> &NexaTransmitter<TX, D> {
        &self.transmitter
    }

    /// The underlying transmitter, mutably.
    pub fn transmitter_mut(&mut self) -> &mut NexaTransmitter<TX, D> {
        &mut self.transmitter
    }

    /// The status sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Replaces the receiver address, returning the previous one.
    ///
    /// Takes effect from the next transmission.
    pub fn reconfigure(&mut self, config: NexaConfig) -> NexaConfig {
        core::mem::replace(&mut self.config, config)
    }

    /// Gives back the transmitter and the sink.
    pub fn release(self) -> (NexaTransmitter<TX, D>, S) {
        (self.transmitter, self.sink)
    }

    /// Puts the receiver in the remembered state and reports it.
    pub fn init(&mut self) {
        self.transmit_state();
        self.report();
    }

    /// Re-sends the remembered state and reports it.
    ///
    /// Meant to be called periodically so receivers that missed a command,
    /// and a hub that missed a report, catch up.
    pub fn refresh(&mut self) {
        self.transmit_state();
        self.report();
    }

    /// Transmits the remembered state without reporting.
    ///
    /// # Errors
    /// In strict mode, the [`NexaConfig::validate`] error; nothing is sent.
    pub fn write_state_to_pin(&mut self) -> Result<(), NexaError> {
        let frame = self.frame()?;
        self.transmitter.transmit(&frame);
        Ok(())
    }

    fn frame(&self) -> Result<Frame, NexaError> {
        let on = self.state.is_on();
        if self.strict {
            self.config.frame_strict(on)
        } else {
            Ok(self.config.frame(on))
        }
    }

    fn transmit_state(&mut self) {
        if let Err(_err) = self.write_state_to_pin() {
            #[cfg(feature = "log")]
            log::warn!("nexa: {}: not transmitting: {}", self.name, _err);
        }
    }

    fn report(&mut self) {
        let status = Status::new(self.name, self.state);
        self.sink.send_status(&status);
    }
}

impl<TX, D, S> CommandTarget for NexaSwitch<'_, TX, D, S>
where
    TX: OutputPin,
    D: DelayNs,
    S: StatusSink,
{
    fn apply(&mut self, command: &str) {
        match Directive::from_command(command) {
            Ok(directive) => self.state = directive.state(),
            Err(_err) => {
                #[cfg(feature = "log")]
                log::debug!("nexa: {}: ignoring {:?}: {}", self.name, command, _err);
            }
        }
        self.transmit_state();
        self.report();
    }

    fn current_status(&self) -> Status<'_> {
        Status::new(self.name, self.state)
    }
}
