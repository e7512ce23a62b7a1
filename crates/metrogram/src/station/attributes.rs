//! Attribute records for the shipped station types.
//!
//! Every record carries [`NameSet`]: ordered per-language name strings,
//! index 0 the local script and index 1 the Latin form, each possibly
//! containing embedded line breaks for manual multi-line input. Reads
//! beyond the populated range fall back to the type's default record; they
//! never error.

use metrogram_core::label::{LabelPlacement, NameOffsetX, NameOffsetY};
use serde::{Deserialize, Serialize};

use crate::{station::StationKind, theme::Theme};

/// Ordered per-language names of one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameSet {
    names: Vec<String>,
}

impl NameSet {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn from_pair(local: impl Into<String>, latin: impl Into<String>) -> Self {
        Self {
            names: vec![local.into(), latin.into()],
        }
    }

    /// Returns the name at `index`, if populated.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Returns the name at `index`, falling back to `defaults` and finally
    /// to the empty string.
    pub fn get_or<'a>(&'a self, index: usize, defaults: &'a NameSet) -> &'a str {
        self.get(index)
            .or_else(|| defaults.get(index))
            .unwrap_or("")
    }

    /// Writes the name at `index`, padding any gap with empty entries.
    pub fn set(&mut self, index: usize, name: impl Into<String>) {
        if index >= self.names.len() {
            self.names.resize(index + 1, String::new());
        }
        self.names[index] = name.into();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for NameSet {
    fn default() -> Self {
        Self::from_pair("中央", "Central")
    }
}

/// Attributes of the plain station type: names only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlainAttrs {
    #[serde(default)]
    pub names: NameSet,
}

/// Attributes of the classic station type: names, a theme for the marker
/// stroke, and the full label placement preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicAttrs {
    #[serde(default)]
    pub names: NameSet,
    #[serde(default)]
    pub color: Theme,
    #[serde(flatten)]
    pub placement: LabelPlacement,
}

impl Default for ClassicAttrs {
    fn default() -> Self {
        Self {
            names: NameSet::default(),
            color: Theme::default(),
            placement: LabelPlacement::new(NameOffsetX::Right, NameOffsetY::Top, false),
        }
    }
}

/// The attribute bag of one placed station, keyed by its type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StationAttrs {
    Plain(PlainAttrs),
    Classic(ClassicAttrs),
}

impl StationAttrs {
    /// The type tag this record belongs to.
    pub fn kind(&self) -> StationKind {
        match self {
            Self::Plain(_) => StationKind::Plain,
            Self::Classic(_) => StationKind::Classic,
        }
    }

    pub fn as_plain(&self) -> Option<&PlainAttrs> {
        match self {
            Self::Plain(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn as_classic(&self) -> Option<&ClassicAttrs> {
        match self {
            Self::Classic(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn as_plain_mut(&mut self) -> Option<&mut PlainAttrs> {
        match self {
            Self::Plain(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn as_classic_mut(&mut self) -> Option<&mut ClassicAttrs> {
        match self {
            Self::Classic(attrs) => Some(attrs),
            _ => None,
        }
    }

    /// Re-applies cross-field constraints after external construction,
    /// e.g. when a host deserializes attributes from a document.
    pub fn normalize(&mut self) {
        if let Self::Classic(attrs) = self {
            attrs.placement.normalize();
        }
    }
}
