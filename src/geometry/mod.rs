//! Observation geometry: the spatial/temporal extent pair.
//!
//! `Space` and `Time` are validated independently; `Geometry` composes
//! exactly one of each. Partial geometries are rejected.

pub mod space;
pub mod time;

pub use space::{ShapeInput, Space, DEFAULT_GRID, KLAB_GEO_PROJ};
pub use time::{Time, TimeInput, TimeOptions, TimeScale};

use serde::Serialize;

use crate::error::{KlabNifiError, Result};

/// Spatial + temporal extent of an observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    space: Space,
    time: Time,
}

impl Geometry {
    /// Compose a geometry from its two dimensions. Both must be
    /// present; no further cross-validation is done between them.
    pub fn new(space: Option<Space>, time: Option<Time>) -> Result<Self> {
        match (space, time) {
            (Some(space), Some(time)) => Ok(Self { space, time }),
            (Some(_), None) => Err(KlabNifiError::MissingDimension(
                "temporal dimension is missing".to_string(),
            )),
            (None, Some(_)) => Err(KlabNifiError::MissingDimension(
                "spatial dimension is missing".to_string(),
            )),
            (None, None) => Err(KlabNifiError::MissingDimension(
                "both spatial and temporal dimensions are missing".to_string(),
            )),
        }
    }

    pub fn space(&self) -> &Space {
        &self.space
    }

    pub fn time(&self) -> &Time {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_space() -> Space {
        Space::new("POINT(33.796 -7.086)").unwrap()
    }

    fn sample_time() -> Time {
        Time::new(1325376000000_i64, 1356998400000_i64).unwrap()
    }

    #[test]
    fn both_dimensions_compose() {
        let geometry = Geometry::new(Some(sample_space()), Some(sample_time())).unwrap();
        assert!(geometry.space().shape().contains("POINT"));
        assert_eq!(geometry.time().tstart(), 1325376000000);
    }

    #[test]
    fn partial_geometries_are_rejected() {
        let err = Geometry::new(Some(sample_space()), None).unwrap_err();
        assert!(matches!(err, KlabNifiError::MissingDimension(_)));

        let err = Geometry::new(None, Some(sample_time())).unwrap_err();
        assert!(matches!(err, KlabNifiError::MissingDimension(_)));

        let err = Geometry::new(None, None).unwrap_err();
        assert!(matches!(err, KlabNifiError::MissingDimension(_)));
    }
}
