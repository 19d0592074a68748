use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of outlet a source is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Tanker,
    Atm,
}

impl SourceKind {
    /// Lowercase identifier, as used in JSON and CLI flags.
    pub fn slug(&self) -> &'static str {
        match self {
            SourceKind::Tanker => "tanker",
            SourceKind::Atm => "atm",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Tanker => "Water Tanker",
            SourceKind::Atm => "Water ATM",
        }
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tanker" => Ok(SourceKind::Tanker),
            "atm" => Ok(SourceKind::Atm),
            _ => Err(Error::UnknownFilter { kind: "source kind", value: s.to_string() }),
        }
    }
}

/// Current stock / operational status of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Limited,
    Unavailable,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Limited => "Limited Stock",
            Availability::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Availability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Availability::Available),
            "limited" => Ok(Availability::Limited),
            "unavailable" => Ok(Availability::Unavailable),
            _ => Err(Error::UnknownFilter { kind: "availability", value: s.to_string() }),
        }
    }
}

/// Map-view category of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Dam,
    Atm,
    Tanker,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Dam => "Dam",
            Category::Atm => "Water ATM",
            Category::Tanker => "Water Tanker",
        }
    }
}

impl From<SourceKind> for Category {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Tanker => Category::Tanker,
            SourceKind::Atm => Category::Atm,
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dam" => Ok(Category::Dam),
            "atm" => Ok(Category::Atm),
            "tanker" => Ok(Category::Tanker),
            _ => Err(Error::UnknownFilter { kind: "category", value: s.to_string() }),
        }
    }
}

/// A tanker supplier or water ATM listing.
///
/// `contact` and `price` are display strings and are never parsed.
/// `distance_km` is computed upstream; nothing here derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterSource {
    pub id: String,
    pub name: String,
    pub address: String,
    pub kind: SourceKind,
    pub contact: String,
    pub distance_km: f64,
    pub price: String,
    pub availability: Availability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

/// A pin on the map view: a water source or a reservoir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub id: String,
    pub name: String,
    pub address: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl From<&WaterSource> for MapPoint {
    fn from(source: &WaterSource) -> Self {
        MapPoint {
            id: format!("{}-{}", source.kind.slug(), source.id),
            name: source.name.clone(),
            address: source.address.clone(),
            category: source.kind.into(),
            distance_km: Some(source.distance_km),
        }
    }
}
