//! Integer-List Format
//!
//! Renders a seed as decimal integers in a configurable `[low, high]`
//! range, one per seed byte, joined with a configurable separator. The
//! underlying quantization is a lossy per-byte rescaling, so this format
//! is display-only: the input direction always fails.

use crate::convert;
use crate::error::{Error, Result};
use crate::format::{Format, FormatKey};
use crate::params::Params;

pub struct FormatInts {
    low: u8,
    high: u8,
    separator: String,
}

impl FormatInts {
    pub fn new(low: u8, high: u8, separator: impl Into<String>) -> Self {
        Self {
            low,
            high,
            separator: separator.into(),
        }
    }
}

impl Default for FormatInts {
    fn default() -> Self {
        Self::new(1, 9, " ")
    }
}

impl Format for FormatInts {
    fn key(&self) -> FormatKey {
        FormatKey::Ints
    }

    fn process_input(&self, _p: &mut Params) -> Result<()> {
        Err(Error::OneWayFormat(self.name()))
    }

    fn process_output(&self, p: &mut Params) -> Result<()> {
        p.output = convert::to_ints(&p.seed, self.low, self.high, &self.separator)?;
        Ok(())
    }
}
