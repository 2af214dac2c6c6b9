//! BIP39 Mnemonic Format
//!
//! Converts between a raw seed and a BIP39 word phrase, treating the seed
//! bytes as the mnemonic's entropy. The phrase travels either as plain
//! space-joined text or wrapped in a CBOR transport payload tagged
//! `"crypto-bip39"`, whose body is the word list framed as a
//! [`WordDict`](crate::envelope::WordDict).

use bip39::{Language, Mnemonic};
use tracing::debug;

use crate::envelope::WordDict;
use crate::error::{Error, Result};
use crate::format::{Format, FormatKey};
use crate::params::Params;

/// Transport payload type tag for BIP39 word lists.
pub const UR_TYPE_BIP39: &str = "crypto-bip39";

pub struct FormatBip39;

impl FormatBip39 {
    /// A BIP39 seed must be 12 to 32 bytes long and even.
    ///
    /// The underlying mnemonic codec is stricter still (entropy must be a
    /// multiple of 4 bytes in [16, 32]); lengths that pass this gate but
    /// fail there surface as the same seed-length error.
    pub fn is_seed_length_valid(seed_len: usize) -> bool {
        (12..=32).contains(&seed_len) && seed_len % 2 == 0
    }
}

impl Format for FormatBip39 {
    fn key(&self) -> FormatKey {
        FormatKey::Bip39
    }

    fn process_input(&self, p: &mut Params) -> Result<()> {
        let input = if p.is_ur_in {
            let ur = p.ur_in.as_ref().ok_or(Error::MissingInput)?;
            if ur.ur_type != UR_TYPE_BIP39 {
                return Err(Error::InvalidUrType {
                    expected: UR_TYPE_BIP39,
                    found: ur.ur_type.clone(),
                });
            }
            let dict = WordDict::from_cbor(&ur.cbor)?;
            debug!(words = dict.words.len(), "recovered word list from envelope");
            dict.words.join(" ")
        } else {
            let combined = p.combined_arguments();
            if combined.is_empty() {
                return Err(Error::MissingInput);
            }
            combined
        };

        let mnemonic =
            Mnemonic::parse_in(Language::English, &input).map_err(|_| Error::InvalidMnemonic)?;
        p.seed = mnemonic.to_entropy();
        Ok(())
    }

    fn process_output(&self, p: &mut Params) -> Result<()> {
        if !Self::is_seed_length_valid(p.seed.len()) {
            return Err(Error::InvalidSeedLength(p.seed.len(), self.name()));
        }

        let mnemonic = Mnemonic::from_entropy_in(Language::English, &p.seed)
            .map_err(|_| Error::InvalidSeedLength(p.seed.len(), self.name()))?;
        let phrase = mnemonic.words().collect::<Vec<_>>().join(" ");

        if p.is_ur_out {
            let words = phrase.split(' ').map(str::to_string).collect();
            let dict = WordDict::new(words);
            p.set_ur_output(dict.to_cbor()?, UR_TYPE_BIP39);
        } else {
            p.output = phrase;
        }
        Ok(())
    }
}
