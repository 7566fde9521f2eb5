//! Context sent to the guide generator.
//!
//! Only validation and body construction live here; transport is the
//! caller's business.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::decode_hex;
use crate::mood::KnowledgeBase;

/// Why a request cannot be sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// Required fields left blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// A primary color was given but is not `#rgb` / `#rrggbb`.
    #[error("invalid primary color: {0}")]
    InvalidPrimaryColor(String),
}

/// User choices that drive generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideRequest {
    /// What the service is for.
    pub service: String,
    /// Target platform / OS.
    pub platform: String,
    /// Mood keyword picked from the offered list.
    pub keyword: String,
    /// Optional brand color.
    pub primary_color: Option<String>,
}

/// What gets posted to the generator.
///
/// Serializes the knowledge base groups in their file order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RequestBody<'a> {
    /// The validated request.
    pub context: &'a GuideRequest,
    /// Reference data the generator draws from.
    #[serde(rename = "knowledgeBase")]
    pub knowledge_base: &'a KnowledgeBase,
}

impl GuideRequest {
    /// Check required fields and normalize the primary color.
    ///
    /// A blank primary color becomes `None`.
    ///
    /// # Errors
    ///
    /// [`RequestError::MissingFields`] if service, platform or keyword is
    /// blank; [`RequestError::InvalidPrimaryColor`] if the primary color does
    /// not decode.
    pub fn validate(mut self) -> Result<Self, RequestError> {
        let missing: Vec<&'static str> = [
            ("service", &self.service),
            ("platform", &self.platform),
            ("keyword", &self.keyword),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(RequestError::MissingFields(missing));
        }

        self.primary_color = self
            .primary_color
            .take()
            .filter(|c| !c.trim().is_empty());
        if let Some(color) = self
            .primary_color
            .as_ref()
            .filter(|c| decode_hex(c).is_none())
        {
            return Err(RequestError::InvalidPrimaryColor(color.clone()));
        }

        Ok(self)
    }

    /// JSON body for the generator: `{"context": ..., "knowledgeBase": ...}`.
    #[must_use]
    pub fn body<'a>(&'a self, kb: &'a KnowledgeBase) -> RequestBody<'a> {
        RequestBody {
            context: self,
            knowledge_base: kb,
        }
    }
}
