//! Hex Format
//!
//! Lossless seed↔hex-string conversion. Any seed length is accepted and
//! there is no transport-envelope mode.

use crate::convert;
use crate::error::{Error, Result};
use crate::format::{Format, FormatKey};
use crate::params::Params;

pub struct FormatHex;

impl Format for FormatHex {
    fn key(&self) -> FormatKey {
        FormatKey::Hex
    }

    fn process_input(&self, p: &mut Params) -> Result<()> {
        let input = p.combined_arguments();
        if input.is_empty() {
            return Err(Error::MissingInput);
        }
        p.seed = convert::from_hex(&input)?;
        Ok(())
    }

    fn process_output(&self, p: &mut Params) -> Result<()> {
        p.output = convert::to_hex(&p.seed);
        Ok(())
    }
}
