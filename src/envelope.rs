//! CBOR Transport Envelope
//!
//! A representation that travels between devices is framed as a typed CBOR
//! payload (a "uniform resource", [`Ur`]). Word-phrase representations are
//! carried inside it as a [`WordDict`]: an ordered word list plus an
//! optional birthdate marker, encoded as a CBOR map with integer keys.
//!
//! The envelope preserves word order exactly and does not validate word
//! content; that is the consuming format's job.

use minicbor::{Decode, Encode};

use crate::error::{Error, Result};

// ============================================================================
// Dictionary with birthdate
// ============================================================================

/// Ordered word list plus optional birthdate.
///
/// CBOR shape: a map with key 1 holding the word array and key 2, when a
/// birthdate is present, holding an unsigned integer (days since the Unix
/// epoch). The birthdate is omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
#[cbor(map)]
pub struct WordDict {
    #[n(1)]
    pub words: Vec<String>,
    #[n(2)]
    pub birthdate: Option<u64>,
}

impl WordDict {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            birthdate: None,
        }
    }

    pub fn with_birthdate(words: Vec<String>, birthdate: u64) -> Self {
        Self {
            words,
            birthdate: Some(birthdate),
        }
    }

    /// Encode into CBOR bytes suitable for a [`Ur`] payload.
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        minicbor::to_vec(self).map_err(|e| Error::InvalidEnvelope(e.to_string()))
    }

    /// Decode from the CBOR bytes of a [`Ur`] payload.
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        minicbor::decode(bytes).map_err(|e| Error::InvalidEnvelope(e.to_string()))
    }
}

// ============================================================================
// Uniform resource payload
// ============================================================================

/// A typed CBOR byte buffer, e.g. type `"crypto-bip39"` carrying a
/// [`WordDict`]. Produced by an output conversion, consumed by an input
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ur {
    pub ur_type: String,
    pub cbor: Vec<u8>,
}

impl Ur {
    pub fn new(ur_type: impl Into<String>, cbor: Vec<u8>) -> Self {
        Self {
            ur_type: ur_type.into(),
            cbor,
        }
    }

    /// Render as `ur:<type>/<hex-cbor>`.
    ///
    /// This is the CLI's simplified textual framing of the payload; the
    /// envelope content itself is the CBOR structure above.
    pub fn to_uri(&self) -> String {
        format!("ur:{}/{}", self.ur_type, hex::encode(&self.cbor))
    }

    /// Parse the `ur:<type>/<hex-cbor>` framing back into a payload.
    pub fn parse(s: &str) -> Result<Self> {
        let rest = s
            .strip_prefix("ur:")
            .ok_or_else(|| Error::InvalidEnvelope(format!("missing ur: prefix in {s:?}")))?;
        let (ur_type, payload) = rest
            .split_once('/')
            .ok_or_else(|| Error::InvalidEnvelope(format!("missing payload in {s:?}")))?;
        if ur_type.is_empty() {
            return Err(Error::InvalidEnvelope("empty ur type".into()));
        }
        let cbor = hex::decode(payload)
            .map_err(|e| Error::InvalidEnvelope(format!("bad payload hex: {e}")))?;
        Ok(Self::new(ur_type, cbor))
    }
}

// ============================================================================
// Tests
// ============================================================================
