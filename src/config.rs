//! Addressing configuration of a Nexa receiver.
//!
//! A [`NexaConfig`] names one receiver (or group) from the point of view of a
//! remote: which transmitter identity it learned, and which channel and unit
//! button it answers to. It is an immutable value; reconfiguring means
//! building a new one with the `with_*` methods and handing it over whole, so
//! a session in progress always sees a consistent address.

use crate::consts::MAX_IDENTITY;
use crate::encoding::selector_code;
use crate::error::NexaError;
use crate::frame::Frame;

/// Transmitter identity, group flag and channel/unit selectors.
///
/// # Example
/// ```rust
/// use nexa433::config::NexaConfig;
///
/// let kitchen = NexaConfig::new(2_848_576, false, 1, 1);
/// let hallway = kitchen.with_unit(2);
/// assert_eq!(kitchen.unit(), 1);
/// assert_eq!(hallway.unit(), 2);
/// assert!(hallway.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct NexaConfig {
    identity: u32,
    group: bool,
    channel: u8,
    unit: u8,
}

impl NexaConfig {
    /// Creates a configuration.
    ///
    /// # Arguments
    /// - `identity`: transmitter identity, `0..=67_108_863`
    /// - `group`: address every unit learned by this identity at once
    /// - `channel`: channel selector, `1..=4`
    /// - `unit`: unit selector, `1..=4`
    ///
    /// Nothing is checked here; see [`validate`](NexaConfig::validate).
    pub const fn new(identity: u32, group: bool, channel: u8, unit: u8) -> Self {
        Self {
            identity,
            group,
            channel,
            unit,
        }
    }

    /// Transmitter identity.
    pub const fn identity(&self) -> u32 {
        self.identity
    }

    /// Group flag.
    pub const fn group(&self) -> bool {
        self.group
    }

    /// Channel selector.
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Unit selector.
    pub const fn unit(&self) -> u8 {
        self.unit
    }

    /// Returns a copy with a different identity.
    pub const fn with_identity(self, identity: u32) -> Self {
        Self { identity, ..self }
    }

    /// Returns a copy with a different group flag.
    pub const fn with_group(self, group: bool) -> Self {
        Self { group, ..self }
    }

    /// Returns a copy with a different channel.
    pub const fn with_channel(self, channel: u8) -> Self {
        Self { channel, ..self }
    }

    /// Returns a copy with a different unit.
    pub const fn with_unit(self, unit: u8) -> Self {
        Self { unit, ..self }
    }

    /// Checks that every field fits the wire format without truncation or
    /// omission.
    pub fn validate(&self) -> Result<(), NexaError> {
        if self.identity > MAX_IDENTITY {
            return Err(NexaError::IdentityOutOfRange(self.identity));
        }
        if selector_code(self.channel).is_none() {
            return Err(NexaError::ChannelOutOfRange(self.channel));
        }
        if selector_code(self.unit).is_none() {
            return Err(NexaError::UnitOutOfRange(self.unit));
        }
        Ok(())
    }

    /// Encodes the frame that switches this receiver on or off.
    ///
    /// Out-of-range fields are truncated or dropped, see [`Frame::encode`].
    pub fn frame(&self, on: bool) -> Frame {
        Frame::encode(self.identity, self.group, on, self.channel, self.unit)
    }

    /// Encodes the frame that switches this receiver on or off, refusing an
    /// invalid configuration.
    pub fn frame_strict(&self, on: bool) -> Result<Frame, NexaError> {
        Frame::encode_strict(self.identity, self.group, on, self.channel, self.unit)
    }
}

impl Default for NexaConfig {
    /// Identity 0, no group, channel 1, unit 1.
    fn default() -> Self {
        Self::new(0, false, 1, 1)
    }
}
