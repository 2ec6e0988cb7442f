//! Frame assembly for a single Nexa command.
//!
//! A [`Frame`] is the ordered symbol payload sent between the SYNC and PAUSE
//! markers:
//!
//! ```text
//! HHHHHHHHHHHHHHHHHHHHHHHHHH G O CC UU
//! ```
//!
//! Encoding is pure: no timing, no hardware. The transmitter in
//! [`crate::driver`] only ever sees finished frames.
//!
//! ## Out-of-range selectors
//!
//! With [`Frame::encode`] a channel or unit outside `1..=4` contributes no
//! symbols, which leaves a short frame that receivers will ignore.
//! [`Frame::encode_strict`] refuses such input instead.

use core::fmt;

use heapless::Vec;

use crate::consts::{FRAME_LEN, MAX_IDENTITY};
use crate::encoding::{Symbol, encode_identity, selector_code};
use crate::error::NexaError;

/// The symbol payload of one command.
///
/// Holds at most [`FRAME_LEN`] symbols; exactly that many when both selectors
/// were in range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    symbols: Vec<Symbol, FRAME_LEN>,
}

impl Frame {
    /// Encodes a command, tolerating out-of-range input.
    ///
    /// # Arguments
    /// - `identity`: transmitter identity, truncated to its low 26 bits
    /// - `group`: group command, sent as `0` when set
    /// - `on`: on/off state, sent as `0` for on
    /// - `channel`: channel selector, `1..=4`
    /// - `unit`: unit selector, `1..=4`
    ///
    /// # Returns
    /// A 32-symbol frame, or a shorter one missing the field of every
    /// out-of-range selector.
    pub fn encode(identity: u32, group: bool, on: bool, channel: u8, unit: u8) -> Self {
        let mut symbols = Vec::new();
        let _ = symbols.extend_from_slice(&encode_identity(identity));
        let _ = symbols.push(Symbol::inverted(group));
        let _ = symbols.push(Symbol::inverted(on));
        if let Some(code) = selector_code(channel) {
            let _ = symbols.extend_from_slice(&code);
        }
        if let Some(code) = selector_code(unit) {
            let _ = symbols.extend_from_slice(&code);
        }
        Self { symbols }
    }

    /// Encodes a command, rejecting anything that would not produce a
    /// complete, untruncated frame.
    ///
    /// # Errors
    /// - [`NexaError::IdentityOutOfRange`] if `identity` exceeds 26 bits
    /// - [`NexaError::ChannelOutOfRange`] if `channel` is not in `1..=4`
    /// - [`NexaError::UnitOutOfRange`] if `unit` is not in `1..=4`
    pub fn encode_strict(
        identity: u32,
        group: bool,
        on: bool,
        channel: u8,
        unit: u8,
    ) -> Result<Self, NexaError> {
        if identity > MAX_IDENTITY {
            return Err(NexaError::IdentityOutOfRange(identity));
        }
        if selector_code(channel).is_none() {
            return Err(NexaError::ChannelOutOfRange(channel));
        }
        if selector_code(unit).is_none() {
            return Err(NexaError::UnitOutOfRange(unit));
        }
        Ok(Self::encode(identity, group, on, channel, unit))
    }

    /// The symbols in transmission order.
    pub fn as_symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Iterates over the symbols in transmission order.
    pub fn iter(&self) -> core::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// Number of symbols in the frame.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the frame has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether the frame carries every field.
    pub fn is_complete(&self) -> bool {
        self.symbols.len() == FRAME_LEN
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a Symbol;
    type IntoIter = core::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt-0-3")]
impl defmt::Format for Frame {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "Frame({=[?]})", self.symbols.as_slice());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::IDENTITY_BITS;

    #[test]
    fn test_identity_five_single_unit_on() {
        let frame = Frame::encode(5, false, true, 1, 2);
        let expected = format!("{}101{}{}{}{}", "0".repeat(23), "1", "0", "11", "10");
        assert_eq!(frame.len(), FRAME_LEN);
        assert!(frame.is_complete());
        assert_eq!(frame.to_string(), expected);
    }

    #[test]
    fn test_frame_is_thirty_two_symbols() {
        assert_eq!(FRAME_LEN, IDENTITY_BITS + 1 + 1 + 2 + 2);
        assert_eq!(FRAME_LEN, 32);
        assert_eq!(Frame::encode(0, false, false, 1, 1).to_string().len(), 32);
    }

    #[test]
    fn test_identity_zero_group_off() {
        let frame = Frame::encode(0, true, false, 4, 4);
        let text = frame.to_string();
        assert_eq!(&text[..IDENTITY_BITS], "0".repeat(26));
        assert_eq!(&text[26..27], "0");
        assert_eq!(&text[27..28], "1");
        assert_eq!(&text[28..30], "00");
        assert_eq!(&text[30..32], "00");
    }

    #[test]
    fn test_every_in_range_selector_gives_full_frame() {
        for channel in 1..=4 {
            for unit in 1..=4 {
                let frame = Frame::encode(2_848_576, false, true, channel, unit);
                assert_eq!(frame.len(), FRAME_LEN, "channel {channel} unit {unit}");
            }
        }
    }

    #[test]
    fn test_channel_and_unit_share_table() {
        for selector in 1..=4 {
            let text = Frame::encode(0, false, false, selector, selector).to_string();
            assert_eq!(&text[28..30], &text[30..32]);
        }
    }

    #[test]
    fn test_out_of_range_channel_drops_its_field() {
        let frame = Frame::encode(5, false, true, 0, 2);
        assert_eq!(frame.len(), FRAME_LEN - 2);
        assert!(!frame.is_complete());
        // unit code follows the on/off bit directly
        assert_eq!(&frame.to_string()[28..], "10");
    }

    #[test]
    fn test_out_of_range_unit_drops_its_field() {
        let frame = Frame::encode(5, false, true, 3, 9);
        assert_eq!(frame.len(), FRAME_LEN - 2);
        assert_eq!(&frame.to_string()[28..], "01");
    }

    #[test]
    fn test_both_selectors_out_of_range() {
        let frame = Frame::encode(5, false, true, 5, 0);
        assert_eq!(frame.len(), FRAME_LEN - 4);
    }

    #[test]
    fn test_wide_identity_matches_truncated() {
        let wide = Frame::encode((1 << 26) + 5, false, true, 1, 2);
        assert_eq!(wide, Frame::encode(5, false, true, 1, 2));
    }

    #[test]
    fn test_strict_accepts_valid_command() {
        let strict = Frame::encode_strict(5, false, true, 1, 2);
        assert_eq!(strict, Ok(Frame::encode(5, false, true, 1, 2)));
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        assert_eq!(
            Frame::encode_strict(1 << 26, false, true, 1, 1),
            Err(NexaError::IdentityOutOfRange(1 << 26))
        );
        assert_eq!(
            Frame::encode_strict(0, false, true, 0, 1),
            Err(NexaError::ChannelOutOfRange(0))
        );
        assert_eq!(
            Frame::encode_strict(0, false, true, 1, 5),
            Err(NexaError::UnitOutOfRange(5))
        );
    }
}
