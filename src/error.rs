//! Error type shared by the strict encoder, configuration and command parsing.

use thiserror::Error;

/// Everything that can be rejected on the way from a command to a frame.
///
/// None of these reach the radio: the lenient encoder never fails and the
/// transmitter itself has no failure channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum NexaError {
    /// The identity does not fit in the 26-bit identity field.
    #[error("transmitter identity {0} does not fit in 26 bits")]
    IdentityOutOfRange(u32),
    /// The channel selector is not one of 1, 2, 3 or 4.
    #[error("channel {0} is not in 1..=4")]
    ChannelOutOfRange(u8),
    /// The unit selector is not one of 1, 2, 3 or 4.
    #[error("unit {0} is not in 1..=4")]
    UnitOutOfRange(u8),
    /// Command text was neither `on` nor `off`.
    #[error("unrecognised directive")]
    UnknownDirective,
}
