//! Service-area matching: great-circle distance, radius filtering,
//! proximity ranking and distance labels.
//!
//! Everything here is pure and allocation-light. Callers bring their own
//! records (anything implementing [`Located`]) and their own service-area
//! policy; nothing is stored between calls.

use serde::Serialize;
use thiserror::Error;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidCoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Rejects non-finite values and anything outside the usual degree ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinateError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinateError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Calculate distance between two coordinates using Haversine formula.
/// Returns distance in kilometers.
///
/// Inputs are not range-checked: out-of-range degrees still produce a
/// number, and NaN or infinite inputs yield NaN. Use [`Coordinate::new`]
/// at the boundary when that matters.
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Anything that sits at a point on the map.
pub trait Located {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

impl<T: Located + ?Sized> Located for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

impl Located for Coordinate {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Wraps an arbitrary payload with the coordinate it sits at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocatedEntity<T> {
    pub coordinate: Coordinate,
    pub payload: T,
}

impl<T> LocatedEntity<T> {
    pub fn new(coordinate: Coordinate, payload: T) -> Self {
        Self {
            coordinate,
            payload,
        }
    }
}

impl<T> Located for LocatedEntity<T> {
    fn latitude(&self) -> f64 {
        self.coordinate.latitude
    }

    fn longitude(&self) -> f64 {
        self.coordinate.longitude
    }
}

/// An entity paired with its distance from the ranking center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntity<T> {
    pub distance_km: f64,
    pub entity: T,
}

/// Keep the entities within `radius_km` of the center, in input order.
///
/// The boundary is inclusive. A zero radius keeps only points that
/// coincide with the center and a negative radius keeps nothing.
pub fn filter_by_service_area<I>(
    entities: I,
    center_lat: f64,
    center_lng: f64,
    radius_km: f64,
) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Located,
{
    entities
        .into_iter()
        .filter(|e| distance_km(center_lat, center_lng, e.latitude(), e.longitude()) <= radius_km)
        .collect()
}

/// Pair every entity with its distance from the center and sort nearest
/// first. Entities at equal distance keep their input order.
///
/// NaN distances (from NaN coordinates) sort after every finite distance.
pub fn rank_by_distance<I>(
    entities: I,
    center_lat: f64,
    center_lng: f64,
) -> Vec<RankedEntity<I::Item>>
where
    I: IntoIterator,
    I::Item: Located,
{
    let mut ranked: Vec<_> = entities
        .into_iter()
        .map(|entity| RankedEntity {
            distance_km: distance_km(center_lat, center_lng, entity.latitude(), entity.longitude()),
            entity,
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

/// Human-readable distance: whole meters below one kilometer, otherwise
/// kilometers with one decimal.
///
/// Meters use `f64::round` (half away from zero). Kilometers use Rust's
/// `{:.1}` formatting, which rounds the exact binary value to nearest with
/// ties to even. Negative and NaN input format as `"0m"`.
pub fn format_distance(distance_km: f64) -> String {
    let distance_km = distance_km.max(0.0);
    if distance_km < 1.0 {
        return format!("{}m", (distance_km * 1000.0).round() as u64);
    }
    format!("{:.1}km", distance_km)
}

/// A disc on the map: the center a professional works from and how far
/// they are willing to travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ServiceArea {
    pub center: Coordinate,
    pub radius_km: f64,
}

impl ServiceArea {
    pub fn new(center: Coordinate, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    pub fn contains<L: Located + ?Sized>(&self, entity: &L) -> bool {
        distance_km(
            self.center.latitude,
            self.center.longitude,
            entity.latitude(),
            entity.longitude(),
        ) <= self.radius_km
    }

    pub fn filter<I>(&self, entities: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Located,
    {
        filter_by_service_area(
            entities,
            self.center.latitude,
            self.center.longitude,
            self.radius_km,
        )
    }

    pub fn rank<I>(&self, entities: I) -> Vec<RankedEntity<I::Item>>
    where
        I: IntoIterator,
        I::Item: Located,
    {
        rank_by_distance(entities, self.center.latitude, self.center.longitude)
    }

    /// Filter to the area, then rank what is left.
    pub fn matching<I>(&self, entities: I) -> Vec<RankedEntity<I::Item>>
    where
        I: IntoIterator,
        I::Item: Located,
    {
        self.rank(self.filter(entities))
    }
}
