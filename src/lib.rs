//! seedcast - seed representation converter
//!
//! Converts a raw binary seed between textual and structured forms:
//! hexadecimal, BIP39 mnemonic phrases, bech32 strings, quantized integer
//! lists, and a CBOR-framed transport payload ("UR").
//!
//! This is a reshaping library, not a cryptographic one: it never generates
//! entropy or derives keys, it only moves an opaque byte buffer between
//! representations.
//!
//! ## Usage
//!
//! ```
//! use seedcast::{Params, Registry};
//!
//! # fn main() -> seedcast::Result<()> {
//! let registry = Registry::new();
//!
//! // seed -> mnemonic phrase
//! let mut params = Params::with_seed(vec![0u8; 16]);
//! registry.get_by_name("bip39")?.process_output(&mut params)?;
//! assert!(params.output.starts_with("abandon"));
//!
//! // mnemonic phrase -> seed
//! let mut back = Params::new();
//! back.inputs = params.output.split(' ').map(str::to_string).collect();
//! registry.get_by_name("bip39")?.process_input(&mut back)?;
//! assert_eq!(back.seed, vec![0u8; 16]);
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod envelope;
pub mod error;
pub mod format;
pub mod formats;
pub mod params;

pub use envelope::{Ur, WordDict};
pub use error::{Error, Result};
pub use format::{Format, FormatKey, Registry};
pub use params::Params;
