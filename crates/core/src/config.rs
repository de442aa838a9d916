//! Game definitions from GeoJSON.
//!
//! A game area is a FeatureCollection of named Point features, one per
//! target, in definition order. Collection-level settings ride in foreign
//! members:
//!
//! ```json
//! {
//!   "type": "FeatureCollection",
//!   "name": "quad sprint",
//!   "proximityThreshold": 20.0,
//!   "features": [
//!     {
//!       "type": "Feature",
//!       "properties": { "name": "Alma Mater" },
//!       "geometry": { "type": "Point", "coordinates": [-88.228199, 40.106659] }
//!     }
//!   ]
//! }
//! ```

use geo::Point;
use geojson::{FeatureCollection, GeoJson, Value};

use crate::target::{Target, TargetSet};

/// Capture radius in meters used when a game definition carries no
/// override. Comfortable against typical phone GPS accuracy without
/// letting a player claim a target from across the street.
pub const DEFAULT_PROXIMITY_THRESHOLD_M: f64 = 20.0;

#[derive(Debug, thiserror::Error)]
pub enum GameDefinitionError {
    #[error("invalid GeoJSON: {0}")]
    Geojson(#[from] geojson::Error),

    #[error("expected a FeatureCollection of targets")]
    NotAFeatureCollection,

    #[error("target feature {0} has no geometry")]
    MissingGeometry(usize),

    #[error("target feature {0} is not a Point")]
    NotAPoint(usize),

    #[error("target feature {0} has no name property")]
    MissingName(usize),

    #[error("proximity threshold must be a positive number of meters, got {0}")]
    InvalidThreshold(f64),
}

pub type Result<T> = std::result::Result<T, GameDefinitionError>;

/// A parsed game definition: the ordered target list plus scalar settings.
#[derive(Clone, Debug)]
pub struct GameDefinition {
    pub name: String,
    pub proximity_threshold_m: f64,
    pub targets: TargetSet,
}

impl GameDefinition {
    /// Parses a game definition from GeoJSON text.
    pub fn from_geojson(text: &str) -> Result<Self> {
        let geojson: GeoJson = text.parse()?;
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(GameDefinitionError::NotAFeatureCollection);
        };
        Self::from_feature_collection(collection)
    }

    fn from_feature_collection(collection: FeatureCollection) -> Result<Self> {
        let foreign = collection.foreign_members.as_ref();
        let name = foreign
            .and_then(|members| members.get("name"))
            .and_then(|value| value.as_str())
            .unwrap_or("unnamed game")
            .to_owned();
        let proximity_threshold_m = foreign
            .and_then(|members| members.get("proximityThreshold"))
            .and_then(|value| value.as_f64())
            .unwrap_or(DEFAULT_PROXIMITY_THRESHOLD_M);
        if !proximity_threshold_m.is_finite() || proximity_threshold_m <= 0.0 {
            return Err(GameDefinitionError::InvalidThreshold(proximity_threshold_m));
        }

        let mut targets = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.into_iter().enumerate() {
            let geometry = feature
                .geometry
                .ok_or(GameDefinitionError::MissingGeometry(index))?;
            let Value::Point(position) = geometry.value else {
                return Err(GameDefinitionError::NotAPoint(index));
            };
            if position.len() < 2 {
                return Err(GameDefinitionError::NotAPoint(index));
            }
            let target_name = feature
                .properties
                .as_ref()
                .and_then(|properties| properties.get("name"))
                .and_then(|value| value.as_str())
                .ok_or(GameDefinitionError::MissingName(index))?;
            // GeoJSON positions are [lng, lat], matching Point's x/y order.
            targets.push(Target::new(target_name, Point::new(position[0], position[1])));
        }

        Ok(Self {
            name,
            proximity_threshold_m,
            targets: TargetSet::new(targets),
        })
    }
}
