#![forbid(unsafe_code)]

// A product code is `<letter><digits>`, e.g. "A1" or " b05 ".
// Parsing trims surrounding whitespace, upper-cases the letter and reads the
// digits as a u32 volume. The stock key is derived from the parsed pair, so
// "a1", " A1 " and "A01" all land on the same key "A1".

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Product family, a single upper-case ASCII letter.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductType(char);

impl ProductType {
    /// Returns `None` unless `letter` is an ASCII letter. The stored value is
    /// always upper-case.
    pub fn new(letter: char) -> Option<Self> {
        letter
            .is_ascii_alphabetic()
            .then(|| Self(letter.to_ascii_uppercase()))
    }

    #[inline]
    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Volume of a product, the numeric suffix of the code
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Volume(pub u32);

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one inventory queue. Renders as the letter followed by the
/// volume in decimal, without leading zeros ("A1", "B5").
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StockKey {
    pub product_type: ProductType,
    pub volume: Volume,
}

impl StockKey {
    pub fn new(product_type: ProductType, volume: Volume) -> Self {
        Self {
            product_type,
            volume,
        }
    }
}

impl fmt::Display for StockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.product_type, self.volume)
    }
}

/// A parsed `<letter><digits>` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProductCode {
    pub product_type: ProductType,
    pub volume: Volume,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductCodeError {
    #[error("product code is empty")]
    Empty,

    #[error("malformed product code '{token}': {reason}")]
    Format { token: String, reason: FormatReason },
}

/// Why a non-empty token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatReason {
    #[error("expected a leading type letter")]
    MissingTypeLetter,

    #[error("missing volume after the type letter")]
    MissingVolume,

    #[error("volume must contain only digits")]
    NonDigitVolume,

    #[error("volume out of range")]
    VolumeOutOfRange(#[source] ParseIntError),
}

impl ProductCodeError {
    fn format(token: &str, reason: FormatReason) -> Self {
        ProductCodeError::Format {
            token: token.to_string(),
            reason,
        }
    }
}

impl ProductCode {
    /// Parses a raw token into its type letter and volume.
    ///
    /// Whitespace around the token is ignored and the letter is
    /// case-insensitive. The volume accepts ASCII digits only, so signs,
    /// separators and embedded spaces are rejected.
    pub fn parse(raw: &str) -> Result<Self, ProductCodeError> {
        let token = raw.trim();

        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return Err(ProductCodeError::Empty);
        };

        let product_type = ProductType::new(first)
            .ok_or_else(|| ProductCodeError::format(token, FormatReason::MissingTypeLetter))?;

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(ProductCodeError::format(token, FormatReason::MissingVolume));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProductCodeError::format(token, FormatReason::NonDigitVolume));
        }

        let volume = digits
            .parse::<u32>()
            .map_err(|e| ProductCodeError::format(token, FormatReason::VolumeOutOfRange(e)))?;

        Ok(ProductCode {
            product_type,
            volume: Volume(volume),
        })
    }

    #[inline]
    pub fn stock_key(&self) -> StockKey {
        StockKey::new(self.product_type, self.volume)
    }
}

impl FromStr for ProductCode {
    type Err = ProductCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCode::parse(s)
    }
}
