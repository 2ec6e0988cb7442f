//! Symbol-level encoding for Nexa frames.
//!
//! This module turns the numeric parts of a command into protocol symbols:
//! the 26-bit transmitter identity and the 2-bit channel/unit selectors.
//!
//! ## Identity
//!
//! The identity is what a receiver "learns" when it is paired with a remote.
//! It is sent most significant bit first and zero-padded to exactly
//! [`IDENTITY_BITS`] symbols. Identities wider than that keep only their low
//! 26 bits, so `encode_identity(x) == encode_identity(x % 2^26)`.
//!
//! ## Selectors
//!
//! Channel and unit share one table:
//!
//! | Selector | Symbols |
//! |----------|---------|
//! |        1 |      11 |
//! |        2 |      10 |
//! |        3 |      01 |
//! |        4 |      00 |
//!
//! Any other selector has no code; see [`selector_code`].

use core::fmt;

use crate::consts::{IDENTITY_BITS, IDENTITY_MASK, SELECTOR_BITS};

/// One logical protocol bit.
///
/// Each symbol is rendered on air as its own four-pulse pattern, see
/// [`crate::driver::Marker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Symbol {
    /// Logical `0`.
    Zero,
    /// Logical `1`.
    One,
}

impl Symbol {
    /// Builds a symbol from a bit value.
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Symbol::One } else { Symbol::Zero }
    }

    /// Builds the wire symbol for a flag the protocol sends inverted.
    ///
    /// Both the group and the on/off bit are `0` when the flag is set.
    pub const fn inverted(flag: bool) -> Self {
        Self::from_bit(!flag)
    }

    /// The bit value of this symbol.
    pub const fn bit(self) -> bool {
        matches!(self, Symbol::One)
    }

    /// The symbol as an ASCII digit.
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

const SELECTOR_CODES: [[Symbol; SELECTOR_BITS]; 4] = [
    [Symbol::One, Symbol::One],
    [Symbol::One, Symbol::Zero],
    [Symbol::Zero, Symbol::One],
    [Symbol::Zero, Symbol::Zero],
];

/// Encodes a transmitter identity into its 26-symbol field.
///
/// Only the low 26 bits of `identity` are used; wider values are truncated
/// without error.
pub fn encode_identity(identity: u32) -> [Symbol; IDENTITY_BITS] {
    let identity = identity & IDENTITY_MASK;
    let mut field = [Symbol::Zero; IDENTITY_BITS];
    for (i, symbol) in field.iter_mut().enumerate() {
        let shift = IDENTITY_BITS - 1 - i;
        *symbol = Symbol::from_bit((identity >> shift) & 1 == 1);
    }
    field
}

/// Looks up the 2-symbol code of a channel or unit selector.
///
/// Returns `None` for anything outside `1..=4`.
pub fn selector_code(selector: u8) -> Option<[Symbol; SELECTOR_BITS]> {
    match selector {
        1..=4 => Some(SELECTOR_CODES[usize::from(selector - 1)]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_IDENTITY;

    fn digits(symbols: &[Symbol]) -> String {
        symbols.iter().map(|s| s.as_char()).collect()
    }

    /// Reads an identity field back, MSB first.
    fn decode_identity(field: &[Symbol]) -> Option<u32> {
        if field.len() != IDENTITY_BITS {
            return None;
        }
        Some(
            field
                .iter()
                .fold(0u32, |acc, symbol| (acc << 1) | u32::from(symbol.bit())),
        )
    }

    #[test]
    fn test_identity_is_msb_first_and_zero_padded() {
        let field = encode_identity(5);
        assert_eq!(field.len(), IDENTITY_BITS);
        assert_eq!(digits(&field), format!("{}101", "0".repeat(23)));
    }

    #[test]
    fn test_identity_zero_and_max() {
        assert_eq!(digits(&encode_identity(0)), "0".repeat(26));
        assert_eq!(digits(&encode_identity(MAX_IDENTITY)), "1".repeat(26));
    }

    #[test]
    fn test_identity_binary_value_matches() {
        for identity in [1, 2, 0x155_5555, 2_848_576, 12_345_678, MAX_IDENTITY - 1] {
            let field = encode_identity(identity);
            assert_eq!(decode_identity(&field), Some(identity));
            assert_eq!(digits(&field), format!("{:026b}", identity));
        }
    }

    #[test]
    fn test_identity_truncates_to_low_bits() {
        let wide = MAX_IDENTITY + 1 + 5;
        assert_eq!(encode_identity(wide), encode_identity(5));
        assert_eq!(encode_identity(u32::MAX), encode_identity(MAX_IDENTITY));
        assert_eq!(encode_identity(1 << 26), encode_identity(0));
    }

    #[test]
    fn test_decode_identity_rejects_wrong_length() {
        assert_eq!(decode_identity(&[Symbol::One; 25]), None);
        assert_eq!(decode_identity(&[]), None);
    }

    #[test]
    fn test_selector_table() {
        assert_eq!(digits(&selector_code(1).unwrap()), "11");
        assert_eq!(digits(&selector_code(2).unwrap()), "10");
        assert_eq!(digits(&selector_code(3).unwrap()), "01");
        assert_eq!(digits(&selector_code(4).unwrap()), "00");
    }

    #[test]
    fn test_selector_out_of_range_has_no_code() {
        assert_eq!(selector_code(0), None);
        assert_eq!(selector_code(5), None);
        assert_eq!(selector_code(u8::MAX), None);
    }

    #[test]
    fn test_inverted_flags() {
        assert_eq!(Symbol::inverted(true), Symbol::Zero);
        assert_eq!(Symbol::inverted(false), Symbol::One);
    }
}
