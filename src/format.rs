//! Format Abstraction and Registry
//!
//! A [`Format`] converts between a raw seed and one textual or structured
//! representation. Concrete formats are a closed set selected by
//! [`FormatKey`]; the [`Registry`] resolves keys and canonical names to
//! handler instances.

use tracing::debug;

use crate::error::{Error, Result};
use crate::formats::{FormatBech32, FormatBip39, FormatHex, FormatInts};
use crate::params::Params;

// ============================================================================
// Keys
// ============================================================================

/// Identifies one concrete representation format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKey {
    Bip39,
    Bech32,
    Hex,
    Ints,
}

impl FormatKey {
    /// The canonical name used on the CLI and in error messages.
    pub fn name(self) -> &'static str {
        match self {
            FormatKey::Bip39 => "bip39",
            FormatKey::Bech32 => "bech32",
            FormatKey::Hex => "hex",
            FormatKey::Ints => "ints",
        }
    }
}

// ============================================================================
// Conversion contract
// ============================================================================

/// The conversion contract every representation implements.
///
/// Both directions operate on a caller-owned [`Params`] context:
/// `process_input` must fully populate `seed` or fail without touching it;
/// `process_output` must fully populate `output` or `ur_out` or fail
/// without touching them.
pub trait Format {
    fn key(&self) -> FormatKey;

    fn name(&self) -> &'static str {
        self.key().name()
    }

    /// Consume textual input or a transport payload; populate the seed.
    fn process_input(&self, p: &mut Params) -> Result<()>;

    /// Consume the seed; populate textual output or a transport payload.
    fn process_output(&self, p: &mut Params) -> Result<()>;
}

// ============================================================================
// Registry
// ============================================================================

/// Maps keys and canonical names to format handlers.
pub struct Registry {
    formats: Vec<Box<dyn Format>>,
}

impl Registry {
    /// Build the registry with every known format at default settings.
    pub fn new() -> Self {
        Self {
            formats: vec![
                Box::new(FormatBip39),
                Box::new(FormatBech32),
                Box::new(FormatHex),
                Box::new(FormatInts::default()),
            ],
        }
    }

    pub fn get(&self, key: FormatKey) -> &dyn Format {
        // every key is registered in new(), so this lookup cannot miss
        self.formats
            .iter()
            .find(|f| f.key() == key)
            .map(|f| f.as_ref())
            .unwrap_or_else(|| unreachable!("format {key:?} not registered"))
    }

    /// Resolve a canonical name; unknown names fail immediately.
    pub fn get_by_name(&self, name: &str) -> Result<&dyn Format> {
        let format = self
            .formats
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.as_ref())
            .ok_or_else(|| Error::UnknownFormat(name.to_string()))?;
        debug!(format = format.name(), "resolved format");
        Ok(format)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
