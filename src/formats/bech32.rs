//! Bech32 Format
//!
//! Mirrors the BIP39 handler's shape: the seed bytes are carried directly
//! in the data part of a checksummed bech32 string under the `seed` HRP.
//! Text only; this format has no transport-envelope mode.

use bech32::{Bech32, Hrp};

use crate::error::{Error, Result};
use crate::format::{Format, FormatKey};
use crate::params::Params;

const SEED_HRP: &str = "seed";

pub struct FormatBech32;

impl FormatBech32 {
    /// Same seed-length domain as BIP39: 12 to 32 bytes, even.
    pub fn is_seed_length_valid(seed_len: usize) -> bool {
        (12..=32).contains(&seed_len) && seed_len % 2 == 0
    }
}

impl Format for FormatBech32 {
    fn key(&self) -> FormatKey {
        FormatKey::Bech32
    }

    fn process_input(&self, p: &mut Params) -> Result<()> {
        let input = p.combined_arguments();
        if input.is_empty() {
            return Err(Error::MissingInput);
        }

        let (hrp, data) =
            bech32::decode(&input).map_err(|e| Error::InvalidBech32(e.to_string()))?;
        if hrp.to_lowercase() != SEED_HRP {
            return Err(Error::InvalidBech32(format!(
                "unexpected prefix {:?}, expected {SEED_HRP:?}",
                hrp.to_lowercase()
            )));
        }
        if !Self::is_seed_length_valid(data.len()) {
            return Err(Error::InvalidSeedLength(data.len(), self.name()));
        }
        p.seed = data;
        Ok(())
    }

    fn process_output(&self, p: &mut Params) -> Result<()> {
        if !Self::is_seed_length_valid(p.seed.len()) {
            return Err(Error::InvalidSeedLength(p.seed.len(), self.name()));
        }

        let hrp = Hrp::parse(SEED_HRP).map_err(|e| Error::InvalidBech32(e.to_string()))?;
        p.output =
            bech32::encode::<Bech32>(hrp, &p.seed).map_err(|e| Error::InvalidBech32(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for len in [12, 16, 20, 24, 28, 32] {
            let seed: Vec<u8> = (0..len).map(|i| (i * 11 + 3) as u8).collect();

            let mut out = Params::with_seed(seed.clone());
            FormatBech32.process_output(&mut out).unwrap();
            assert!(out.output.starts_with("seed1"));

            let mut back = Params::new();
            back.inputs = vec![out.output.clone()];
            FormatBech32.process_input(&mut back).unwrap();
            assert_eq!(back.seed, seed, "len {len}");
        }
    }

    #[test]
    fn test_output_rejects_invalid_lengths() {
        for len in [11, 13, 33] {
            let mut p = Params::with_seed(vec![0xab; len]);
            assert!(matches!(
                FormatBech32.process_output(&mut p),
                Err(Error::InvalidSeedLength(..))
            ));
        }
    }

    #[test]
    fn test_input_rejects_bad_checksum() {
        let mut out = Params::with_seed(vec![0x42; 16]);
        FormatBech32.process_output(&mut out).unwrap();
        let mut corrupted = out.output.clone();
        let last = corrupted.pop().unwrap();
        corrupted.push(if last == 'q' { 'p' } else { 'q' });

        let mut p = Params::new();
        p.inputs = vec![corrupted];
        assert!(matches!(
            FormatBech32.process_input(&mut p),
            Err(Error::InvalidBech32(_)) | Err(Error::InvalidSeedLength(..))
        ));
    }

    #[test]
    fn test_input_rejects_wrong_prefix() {
        let hrp = Hrp::parse("other").unwrap();
        let s = bech32::encode::<Bech32>(hrp, &[0x42; 16]).unwrap();
        let mut p = Params::new();
        p.inputs = vec![s];
        assert!(matches!(
            FormatBech32.process_input(&mut p),
            Err(Error::InvalidBech32(_))
        ));
    }
}
