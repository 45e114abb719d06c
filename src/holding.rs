//! Holding identification via the Parqet holding URL.

use crate::error::{ConvertError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static HOLDING_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://app\.parqet\.com/p/\w+/h/(\w+)").expect("valid holding URL pattern")
});

/// The id of the target holding in Parqet.
///
/// Extracted once from the holding URL at startup and attached to every
/// output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HoldingId(String);

impl HoldingId {
    /// Extracts the holding id from a Parqet holding URL of the form
    /// `https://app.parqet.com/p/<portfolio>/h/<holding>`.
    pub fn from_url(url: &str) -> Result<Self> {
        HOLDING_URL_RE
            .captures(url)
            .map(|caps| HoldingId(caps[1].to_string()))
            .ok_or_else(|| ConvertError::InvalidHoldingUrl(url.to_string()))
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HoldingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
