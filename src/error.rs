//! Error types for seed representation conversions.
//!
//! Every failure a conversion can hit is a variant here. Data errors
//! (bad mnemonic, malformed hex, wrong seed length) and configuration
//! errors (base out of range, inverted integer bounds) are both
//! recoverable: the caller fixes the input or the options and retries.
//! No operation ever leaves a partial seed behind.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The quantizer was asked for a base outside [2, 256].
    #[error("invalid base {0}: must be in [2, 256]")]
    InvalidBase(usize),

    /// Integer-list rendering with `low >= high`.
    #[error("invalid integer range [{low}, {high}]: low must be below high")]
    InvalidIntRange { low: u8, high: u8 },

    /// Odd-length hex or a non-hex digit. No partial bytes are returned.
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The word sequence is not a valid BIP39 mnemonic.
    #[error("invalid BIP39 word sequence")]
    InvalidMnemonic,

    /// Seed length outside what the output format accepts.
    #[error("invalid seed length {0} for {1}: must be in [12, 32] and even")]
    InvalidSeedLength(usize, &'static str),

    /// Bech32 decode failure (bad checksum, character, or HRP).
    #[error("invalid bech32 string: {0}")]
    InvalidBech32(String),

    /// A transport payload carried an unexpected type tag.
    #[error("unexpected UR type {found:?}, expected {expected:?}")]
    InvalidUrType {
        expected: &'static str,
        found: String,
    },

    /// The CBOR envelope could not be encoded or decoded.
    #[error("malformed envelope: {0}")]
    InvalidEnvelope(String),

    /// Registry lookup for a name no format claims.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// The format renders seeds but cannot recover them.
    #[error("format {0} is one-way and cannot recover a seed")]
    OneWayFormat(&'static str),

    /// No textual input or transport payload was supplied.
    #[error("no input provided")]
    MissingInput,
}
