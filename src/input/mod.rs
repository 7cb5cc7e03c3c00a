//! Input sources and the raw document buffer they produce

use crate::error::{JyError, JyResult};
use std::io::Read;
use std::path::PathBuf;

/// Where the bytes of a document come from.
///
/// The pipeline itself never decides which source is active; the CLI layer
/// picks one (piped stdin wins over a filename argument) and hands the
/// resulting bytes over.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Standard input stream (piped)
    Stdin,
    /// Named file on disk
    File(PathBuf),
}

impl InputSource {
    /// Human-readable description used in error messages
    pub fn description(&self) -> String {
        match self {
            InputSource::Stdin => "piped input".to_string(),
            InputSource::File(path) => format!("file {}", path.display()),
        }
    }

    /// Read the source fully into a [`RawDocument`].
    ///
    /// The source is acquired once, read to the end, and not revisited.
    pub fn read(&self) -> JyResult<RawDocument> {
        let bytes = match self {
            InputSource::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buffer)
                    .map_err(|e| JyError::input_unreadable(self.description(), e))?;
                buffer
            }
            InputSource::File(path) => std::fs::read(path)
                .map_err(|e| JyError::input_unreadable(self.description(), e))?,
        };

        Ok(RawDocument {
            bytes,
            source_desc: self.description(),
        })
    }
}

/// An immutable byte sequence loaded from some input source.
///
/// Origin is irrelevant to the pipeline once loaded; only the description
/// survives, for error messages.
#[derive(Debug, Clone)]
pub struct RawDocument {
    bytes: Vec<u8>,
    source_desc: String,
}

impl RawDocument {
    /// Build a document from in-memory bytes (tests, library callers)
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, source_desc: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            source_desc: source_desc.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn source_desc(&self) -> &str {
        &self.source_desc
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
