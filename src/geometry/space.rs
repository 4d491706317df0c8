//! Spatial dimension: shape parsing, validity checking, normalization.
//!
//! A `Space` always holds a geometrically valid shape, stored as the
//! canonical WKT rendering prefixed with the projection code.

use geo::{LineString, Point, Polygon, Validation};
use serde::Serialize;
use wkt::{ToWkt, TryFromWkt};

use crate::error::{KlabNifiError, Result};

/// Coordinate reference system for all k.LAB context geometries.
pub const KLAB_GEO_PROJ: &str = "EPSG:4326";

/// Grid resolution used when none is given.
pub const DEFAULT_GRID: &str = "1.km";

/// Shape input at the API boundary: WKT text or an ordered sequence of
/// 2-D coordinate pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeInput {
    Wkt(String),
    Coordinates(Vec<(f64, f64)>),
}

impl From<&str> for ShapeInput {
    fn from(text: &str) -> Self {
        ShapeInput::Wkt(text.to_string())
    }
}

impl From<String> for ShapeInput {
    fn from(text: String) -> Self {
        ShapeInput::Wkt(text)
    }
}

impl From<Vec<(f64, f64)>> for ShapeInput {
    fn from(coords: Vec<(f64, f64)>) -> Self {
        ShapeInput::Coordinates(coords)
    }
}

impl From<&[(f64, f64)]> for ShapeInput {
    fn from(coords: &[(f64, f64)]) -> Self {
        ShapeInput::Coordinates(coords.to_vec())
    }
}

/// Validated spatial dimension of an observation.
///
/// Immutable once constructed; the shape has already passed the
/// simple-features validity check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Space {
    shape: String,
    sgrid: String,
    proj: String,
}

impl Space {
    /// Build a `Space` with the default grid resolution.
    pub fn new(shape: impl Into<ShapeInput>) -> Result<Self> {
        Self::with_grid(shape, DEFAULT_GRID)
    }

    /// Build a `Space` with an explicit grid resolution descriptor.
    ///
    /// The descriptor (e.g. `"1.km"`) is carried through to the payload
    /// without further validation.
    pub fn with_grid(shape: impl Into<ShapeInput>, grid: impl Into<String>) -> Result<Self> {
        let geom = match shape.into() {
            ShapeInput::Wkt(text) => parse_wkt(&text)?,
            ShapeInput::Coordinates(coords) => from_coordinates(&coords)?,
        };

        if !geom.is_valid() {
            return Err(KlabNifiError::InvalidGeometry(
                "shape does not satisfy simple-features validity".to_string(),
            ));
        }
        tracing::debug!("shape validated");

        Ok(Self {
            shape: format!("{} {}", KLAB_GEO_PROJ, geom.wkt_string()),
            sgrid: grid.into(),
            proj: KLAB_GEO_PROJ.to_string(),
        })
    }

    /// Canonical shape: `"<proj> <WKT>"`.
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// Grid resolution descriptor.
    pub fn sgrid(&self) -> &str {
        &self.sgrid
    }

    /// Projection code.
    pub fn proj(&self) -> &str {
        &self.proj
    }
}

fn parse_wkt(text: &str) -> Result<geo::Geometry> {
    if text.trim().is_empty() {
        return Err(KlabNifiError::InvalidInput(
            "shape cannot be empty".to_string(),
        ));
    }
    geo::Geometry::try_from_wkt_str(text)
        .map_err(|e| KlabNifiError::InvalidGeometry(format!("WKT does not parse: {e}")))
}

/// Arity decides the geometry kind: 1 coordinate is a point, 2 a line,
/// 3 or more a polygon (exterior ring, closed automatically).
fn from_coordinates(coords: &[(f64, f64)]) -> Result<geo::Geometry> {
    let geom = match coords.len() {
        0 => {
            return Err(KlabNifiError::InvalidInput(
                "shape cannot be empty".to_string(),
            ))
        }
        1 => geo::Geometry::Point(Point::new(coords[0].0, coords[0].1)),
        2 => geo::Geometry::LineString(LineString::from(coords.to_vec())),
        _ => geo::Geometry::Polygon(Polygon::new(LineString::from(coords.to_vec()), vec![])),
    };
    Ok(geom)
}
