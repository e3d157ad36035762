use std::fmt;

use schemars::JsonSchema;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use crate::util::next_week;

/// One polygon ring in drawing order.
pub type Path = Vec<Coordinate>;

/// The data package: everything a user has entered for one yard project.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Serialised as an RFC 3339 timestamp.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    #[schemars(with = "Option<String>")]
    pub desired_complete_date: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_center: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_zoom: Option<f64>,
    pub drawn_areas: Vec<Region>,
}

impl ProjectRecord {
    /// Record a fresh session starts with: completion one week out, nothing drawn.
    pub fn new_session(now: OffsetDateTime) -> Self {
        Self {
            name: None,
            email: None,
            phone: None,
            desired_complete_date: Some(next_week(now)),
            map_center: None,
            map_zoom: None,
            drawn_areas: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.drawn_areas.is_empty()
    }

    pub fn region(&self, id: i64) -> Option<&Region> {
        self.drawn_areas.iter().find(|region| region.id == id)
    }

    /// Total measured area of all sod regions.
    pub fn sod_area(&self) -> f64 {
        self.area_of(RegionKind::Sod)
    }

    /// Total measured area of all powerwash regions.
    pub fn powerwash_area(&self) -> f64 {
        self.area_of(RegionKind::Powerwash)
    }

    fn area_of(&self, kind: RegionKind) -> f64 {
        self.drawn_areas
            .iter()
            .filter(|region| region.kind == kind)
            .map(|region| region.area)
            .sum()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A drawn area on the map. A region may carry several disjoint rings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Integral; `1.0` and `1e3` are accepted on the wire, `1.5` is not.
    #[serde(deserialize_with = "integral_id")]
    #[schemars(with = "i64")]
    pub id: i64,
    pub paths: Vec<Path>,
    pub area: f64,
    #[serde(rename = "type")]
    pub kind: RegionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fenced_in_yard: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessible_from_street: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stairs_to_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<SodLocation>,
}

impl Region {
    pub fn new(id: i64, kind: RegionKind, area: f64, paths: Vec<Path>) -> Self {
        Self {
            id,
            paths,
            area,
            kind,
            comments: None,
            fenced_in_yard: None,
            accessible_from_street: None,
            stairs_to_access: None,
            location: Vec::new(),
        }
    }
}

fn integral_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegralId)
}

struct IntegralId;

impl Visitor<'_> for IntegralId {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integral region id")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Ok(value as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(value), &self))
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
pub enum RegionKind {
    Sod,
    Powerwash,
}

impl RegionKind {
    pub const ALL: [RegionKind; 2] = [RegionKind::Sod, RegionKind::Powerwash];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sod => "Sod",
            Self::Powerwash => "Powerwash",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
pub enum SodLocation {
    #[serde(rename = "Back Yard")]
    BackYard,
    #[serde(rename = "Front Yard")]
    FrontYard,
    #[serde(rename = "Side Yard")]
    SideYard,
    Other,
}

impl fmt::Display for SodLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BackYard => "Back Yard",
            Self::FrontYard => "Front Yard",
            Self::SideYard => "Side Yard",
            Self::Other => "Other",
        })
    }
}
