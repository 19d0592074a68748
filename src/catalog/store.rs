use super::source::WaterSource;
use crate::{Error, Result};
use std::collections::HashSet;
use std::ops::Deref;
use std::path::Path;
use tracing::info;

/// An ordered, validated collection of water sources.
///
/// Ids are unique within a catalog and every distance is finite and
/// non-negative. The listing order is the display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    sources: Vec<WaterSource>,
}

impl Catalog {
    pub fn new(sources: Vec<WaterSource>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(sources.len());

        for source in &sources {
            if !seen.insert(source.id.as_str()) {
                return Err(Error::DuplicateId(source.id.clone()));
            }
            if !source.distance_km.is_finite() || source.distance_km < 0.0 {
                return Err(Error::InvalidDistance { id: source.id.clone(), distance_km: source.distance_km });
            }
        }

        Ok(Catalog { sources })
    }

    /// Parse a JSON array of sources.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let sources: Vec<WaterSource> = serde_json::from_str(json)?;
        Self::new(sources)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), sources = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn sources(&self) -> &[WaterSource] {
        &self.sources
    }

    pub fn into_sources(self) -> Vec<WaterSource> {
        self.sources
    }
}

impl Deref for Catalog {
    type Target = [WaterSource];

    fn deref(&self) -> &Self::Target {
        &self.sources
    }
}
