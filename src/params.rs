//! Conversion Context
//!
//! One [`Params`] value carries the state of a single conversion: the seed,
//! the textual inputs or transport payload going in, and the text or payload
//! coming out. The caller owns it for the duration of one conversion; no
//! format retains any of it, and nothing is shared between conversions.

use zeroize::Zeroize;

use crate::envelope::Ur;

/// Per-invocation conversion state.
///
/// The seed is secret material; it is wiped from memory when the context
/// is dropped.
#[derive(Debug, Default)]
pub struct Params {
    /// The raw seed, populated by `process_input`, consumed by
    /// `process_output`.
    pub seed: Vec<u8>,
    /// Textual input arguments, joined with spaces when a format asks for
    /// the combined form.
    pub inputs: Vec<String>,
    /// Read the input from `ur_in` instead of `inputs`.
    pub is_ur_in: bool,
    /// Emit a transport payload into `ur_out` instead of `output`.
    pub is_ur_out: bool,
    /// Inbound transport payload.
    pub ur_in: Option<Ur>,
    /// Textual result of an output conversion.
    pub output: String,
    /// Transport-payload result of an output conversion.
    pub ur_out: Option<Ur>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context pre-loaded with a seed, ready for an output conversion.
    pub fn with_seed(seed: Vec<u8>) -> Self {
        let mut params = Self::default();
        params.seed = seed;
        params
    }

    /// All textual arguments joined with single spaces.
    pub fn combined_arguments(&self) -> String {
        self.inputs.join(" ")
    }

    /// Store a transport payload as the conversion result.
    pub fn set_ur_output(&mut self, cbor: Vec<u8>, ur_type: &'static str) {
        self.ur_out = Some(Ur::new(ur_type, cbor));
    }
}

impl Drop for Params {
    fn drop(&mut self) {
        self.seed.zeroize();
    }
}
