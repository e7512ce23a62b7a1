//! The host's own station-document format.
//!
//! A document lists placed stations: id, position, and the attribute bag
//! keyed by station type. The core never persists stations itself; this
//! format belongs to the CLI host.

use metrogram::station::StationAttrs;
use serde::Deserialize;

/// A parsed station document.
#[derive(Debug, Deserialize)]
pub struct MapDocument {
    #[serde(default)]
    stations: Vec<StationRecord>,
}

impl MapDocument {
    /// Parses a document from its TOML source.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    /// Re-applies cross-field attribute constraints after deserialization.
    pub fn normalize(&mut self) {
        for station in &mut self.stations {
            station.attrs.normalize();
        }
    }
}

/// One placed station, owned by the document model.
#[derive(Debug, Deserialize)]
pub struct StationRecord {
    id: String,
    x: f32,
    y: f32,
    attrs: StationAttrs,
}

impl StationRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn attrs(&self) -> &StationAttrs {
        &self.attrs
    }
}
