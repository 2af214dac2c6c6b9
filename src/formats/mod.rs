//! Concrete format handlers.
//!
//! Each submodule implements the [`Format`](crate::format::Format) contract
//! for one representation: BIP39 mnemonic phrases, bech32 strings, hex, and
//! the one-way integer-list rendering.

mod bech32;
mod bip39;
mod hex;
mod ints;

pub use self::bech32::FormatBech32;
pub use self::bip39::FormatBip39;
pub use self::hex::FormatHex;
pub use self::ints::FormatInts;
