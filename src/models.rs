use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use thiserror::Error;

// Lenient mirror of the GeoJSON summary feed: individual fields may be null
// or absent without failing the whole document. Strictness lives in the
// conversion to `Quake` below.

#[derive(Deserialize, Debug)]
pub struct FeedResponse {
    pub features: Vec<Feature>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Feature {
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Properties {
    pub place: Option<String>,
    pub time: Option<i64>,
    pub mag: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Malformed {
    #[error("magnitude missing or not finite")]
    Magnitude,
    #[error("place missing or empty")]
    Place,
    #[error("event time missing or out of range")]
    Time,
    #[error("point geometry missing")]
    Geometry,
    #[error("coordinates missing or not finite")]
    Coordinates,
}

// A feature that survived validation. Coordinates arrive in GeoJSON order
// (lon, lat, depth); this swaps them into latitude/longitude and drops the
// depth component.
#[derive(Debug, Clone, PartialEq)]
pub struct Quake {
    pub place: String,
    pub time: DateTime<Utc>,
    pub mag: f64,
    pub lat: f64,
    pub lon: f64,
}

impl TryFrom<&Feature> for Quake {
    type Error = Malformed;

    fn try_from(feature: &Feature) -> Result<Self, Malformed> {
        let mag = feature
            .properties
            .mag
            .filter(|m| m.is_finite())
            .ok_or(Malformed::Magnitude)?;
        let place = feature
            .properties
            .place
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(Malformed::Place)?
            .to_string();
        let time_ms = feature.properties.time.ok_or(Malformed::Time)?;
        let time = Utc
            .timestamp_millis_opt(time_ms)
            .single()
            .ok_or(Malformed::Time)?;
        let geometry = feature.geometry.as_ref().ok_or(Malformed::Geometry)?;
        let (lon, lat) = match geometry.coordinates.as_slice() {
            [lon, lat, ..] if lon.is_finite() && lat.is_finite() => (*lon, *lat),
            _ => return Err(Malformed::Coordinates),
        };
        Ok(Quake {
            place,
            time,
            mag,
            lat,
            lon,
        })
    }
}
