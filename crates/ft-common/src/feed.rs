//! Feed data model.
//!
//! The remote document is shaped as
//! `{ "percent": { "forecasts": [Record...], "markets": [Record...] } }`.
//! Values are percentages; the 0-100 range is implied but not enforced.

use serde::{Deserialize, Serialize};

/// One forecaster or market quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display label.
    pub name: String,
    /// Percentage for the R outcome.
    pub rep: f64,
    /// Percentage for the D outcome.
    pub dem: f64,
    /// Optional link target for the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Record {
    /// Create a record without a link.
    pub fn new(name: impl Into<String>, rep: f64, dem: f64) -> Self {
        Self {
            name: name.into(),
            rep,
            dem,
            url: None,
        }
    }

    /// Attach a link target.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// The two record groups carried under `percent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentBlock {
    pub forecasts: Vec<Record>,
    pub markets: Vec<Record>,
}

/// The decoded remote document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub percent: PercentBlock,
}

impl Feed {
    /// Build a feed from its two sections.
    pub fn new(forecasts: Vec<Record>, markets: Vec<Record>) -> Self {
        Self {
            percent: PercentBlock { forecasts, markets },
        }
    }

    /// Decode a feed from raw JSON bytes.
    ///
    /// Missing `percent`, `forecasts` or `markets` keys are decode errors.
    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Records of one section, in display order.
    pub fn section(&self, kind: SectionKind) -> &[Record] {
        match kind {
            SectionKind::Forecasts => &self.percent.forecasts,
            SectionKind::Markets => &self.percent.markets,
        }
    }
}

/// Named record group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Forecasts,
    Markets,
}

impl SectionKind {
    /// Both sections in report order.
    pub const ALL: [SectionKind; 2] = [SectionKind::Forecasts, SectionKind::Markets];

    /// Title printed in the section header.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Forecasts => "Forecasts",
            SectionKind::Markets => "Markets",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Forecasts => write!(f, "forecasts"),
            SectionKind::Markets => write!(f, "markets"),
        }
    }
}
