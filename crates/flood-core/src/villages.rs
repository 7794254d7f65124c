//! Village boundary store backed by a GeoJSON FeatureCollection.
//!
//! Village names are lowercased on load and the store keeps the source
//! feature order, which the affected-village selector depends on.

use crate::error::{FloodError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Property holding the village name in the boundary file.
pub const NAME_PROPERTY: &str = "village_na";

const GEOMETRY_TYPES: &[&str] = &[
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
];

// ---------------------------------------------------------------------------
// VillageRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct VillageRecord {
    /// Lowercase village name.
    pub name: String,
    /// GeoJSON geometry object, passed through untouched.
    pub geometry: Value,
    /// Source attributes, with `village_na` rewritten to `name`.
    pub properties: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// GeoJSON wire shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Value>,
}

/// Serialized view of the store, borrowed from it.
#[derive(Debug, Serialize)]
pub struct FeatureCollection<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature<'a>>,
}

#[derive(Debug, Serialize)]
struct Feature<'a> {
    id: String,
    #[serde(rename = "type")]
    kind: &'static str,
    properties: &'a Map<String, Value>,
    geometry: &'a Value,
}

// ---------------------------------------------------------------------------
// VillageStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct VillageStore {
    records: Vec<VillageRecord>,
    names: Vec<String>,
}

impl VillageStore {
    pub fn new(records: Vec<VillageRecord>) -> Self {
        let names = records.iter().map(|r| r.name.clone()).collect();
        Self { records, names }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FloodError::MissingFile(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let store = Self::from_geojson(&data)?;
        tracing::debug!(path = %path.display(), villages = store.len(), "loaded village boundaries");
        Ok(store)
    }

    pub fn from_geojson(data: &str) -> Result<Self> {
        let raw: RawCollection = serde_json::from_str(data)?;
        if raw.kind != "FeatureCollection" {
            return Err(FloodError::NotFeatureCollection(format!(
                "top-level type is '{}'",
                raw.kind
            )));
        }

        let records = raw
            .features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| village_from_feature(index, feature))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(records))
    }

    /// Lowercase names in store order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn records(&self) -> &[VillageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_feature_collection(&self) -> FeatureCollection<'_> {
        FeatureCollection {
            kind: "FeatureCollection",
            features: self
                .records
                .iter()
                .enumerate()
                .map(|(i, r)| Feature {
                    id: i.to_string(),
                    kind: "Feature",
                    properties: &r.properties,
                    geometry: &r.geometry,
                })
                .collect(),
        }
    }
}

fn village_from_feature(index: usize, feature: RawFeature) -> Result<VillageRecord> {
    let mut properties = feature.properties.unwrap_or_default();
    let name = properties
        .get(NAME_PROPERTY)
        .and_then(Value::as_str)
        .map(str::to_lowercase)
        .ok_or(FloodError::MissingVillageName { index })?;
    properties.insert(NAME_PROPERTY.to_string(), Value::String(name.clone()));

    let geometry = feature.geometry.ok_or_else(|| FloodError::InvalidGeometry {
        index,
        reason: "geometry is null".to_string(),
    })?;
    let kind = geometry
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| FloodError::InvalidGeometry {
            index,
            reason: "geometry has no 'type'".to_string(),
        })?;
    if !GEOMETRY_TYPES.contains(&kind) {
        return Err(FloodError::InvalidGeometry {
            index,
            reason: format!("unknown geometry type '{kind}'"),
        });
    }
    if kind != "Polygon" && kind != "MultiPolygon" {
        tracing::warn!(village = %name, geometry = kind, "village boundary is not polygonal");
    }

    Ok(VillageRecord {
        name,
        geometry,
        properties,
    })
}
