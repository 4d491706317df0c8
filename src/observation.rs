//! Observation identity: a name plus an opaque semantic query.

use serde::Serialize;

use crate::error::{KlabNifiError, Result};

/// A named observation with its semantic query string.
///
/// The semantics string goes to the k.LAB reasoner verbatim; no grammar
/// checking happens on this side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    name: String,
    semantics: String,
}

impl Observation {
    pub fn new(name: impl Into<String>, semantics: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let semantics = semantics.into();

        if name.is_empty() {
            return Err(KlabNifiError::MissingField("name"));
        }
        if semantics.is_empty() {
            return Err(KlabNifiError::MissingField("semantics"));
        }

        Ok(Self { name, semantics })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semantics(&self) -> &str {
        &self.semantics
    }
}
