//! Payload assembly for the ListenHTTP endpoint.
//!
//! Two request variants exist, mirroring the two ways flows feed the
//! listener: a self-contained request carrying name and semantics
//! directly, and a request wrapping a prebuilt [`Observation`].

use serde::Serialize;
use url::Url;

use crate::error::{KlabNifiError, Result};
use crate::geometry::{Geometry, Space, Time};
use crate::observation::Observation;

/// Self-contained observation request.
///
/// Serializes to the flat mapping the listener expects: `name`,
/// `semantics`, optional `geometry`, optional `digitalTwin`. Absent
/// optionals are omitted rather than sent as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationRequest {
    name: String,
    semantics: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    geometry: Option<Geometry>,
    #[serde(rename = "digitalTwin", skip_serializing_if = "Option::is_none")]
    digital_twin: Option<String>,
}

impl ObservationRequest {
    pub fn builder() -> ObservationRequestBuilder {
        ObservationRequestBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semantics(&self) -> &str {
        &self.semantics
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn digital_twin(&self) -> Option<&str> {
        self.digital_twin.as_deref()
    }

    /// The payload as a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The payload as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builder for [`ObservationRequest`].
///
/// Space and time are set separately; the geometry is composed at
/// `build` time, where supplying only one of the two is an error.
#[derive(Debug, Default)]
pub struct ObservationRequestBuilder {
    name: Option<String>,
    semantics: Option<String>,
    space: Option<Space>,
    time: Option<Time>,
    digital_twin: Option<String>,
}

impl ObservationRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn semantics(mut self, semantics: impl Into<String>) -> Self {
        self.semantics = Some(semantics.into());
        self
    }

    pub fn space(mut self, space: Space) -> Self {
        self.space = Some(space);
        self
    }

    pub fn time(mut self, time: Time) -> Self {
        self.time = Some(time);
        self
    }

    /// Pointer to an externally resolvable digital-twin resource.
    pub fn digital_twin(mut self, url: impl Into<String>) -> Self {
        self.digital_twin = Some(url.into());
        self
    }

    /// Validate and assemble the request.
    pub fn build(self) -> Result<ObservationRequest> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or(KlabNifiError::MissingField("name"))?;
        let semantics = self
            .semantics
            .filter(|s| !s.is_empty())
            .ok_or(KlabNifiError::MissingField("semantics"))?;

        let geometry = match (self.space, self.time) {
            (None, None) => None,
            (space, time) => Some(Geometry::new(space, time)?),
        };

        let digital_twin = match self.digital_twin {
            Some(raw) => {
                Url::parse(&raw).map_err(|e| {
                    KlabNifiError::InvalidInput(format!(
                        "digital twin URL '{raw}' does not parse: {e}"
                    ))
                })?;
                Some(raw)
            }
            None => {
                tracing::warn!(
                    "digital twin URL not set; the listener-side controller service must \
                     resolve the observation"
                );
                None
            }
        };

        tracing::info!("observation payload validated");

        Ok(ObservationRequest {
            name,
            semantics,
            geometry,
            digital_twin,
        })
    }
}

/// Request wrapping a prebuilt [`Observation`].
///
/// Serializes as `{"geometry": …, "observation": {"name", "semantics"}}`;
/// the geometry stays optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrappedObservationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    geometry: Option<Geometry>,
    observation: Observation,
}

impl WrappedObservationRequest {
    pub fn new(observation: Observation, geometry: Option<Geometry>) -> Self {
        Self {
            geometry,
            observation,
        }
    }

    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// The payload as a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The payload as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TZ_POLYGON: &str =
        "POLYGON((33.796 -7.086, 35.946 -7.086, 35.946 -9.41, 33.796 -9.41, 33.796 -7.086))";

    fn sample_space() -> Space {
        Space::new(TZ_POLYGON).unwrap()
    }

    fn sample_time() -> Time {
        Time::new(1325376000000_i64, 1356998400000_i64).unwrap()
    }

    #[test]
    fn name_and_semantics_are_required() {
        let err = ObservationRequest::builder()
            .semantics("earth:Terrestrial earth:Region")
            .build()
            .unwrap_err();
        assert!(matches!(err, KlabNifiError::MissingField("name")));

        let err = ObservationRequest::builder()
            .name("AM1729")
            .semantics("")
            .build()
            .unwrap_err();
        assert!(matches!(err, KlabNifiError::MissingField("semantics")));
    }

    #[test]
    fn half_supplied_geometry_is_rejected() {
        let err = ObservationRequest::builder()
            .name("AM1729")
            .semantics("earth:Terrestrial earth:Region")
            .space(sample_space())
            .build()
            .unwrap_err();
        assert!(matches!(err, KlabNifiError::MissingDimension(_)));

        let err = ObservationRequest::builder()
            .name("AM1729")
            .semantics("earth:Terrestrial earth:Region")
            .time(sample_time())
            .build()
            .unwrap_err();
        assert!(matches!(err, KlabNifiError::MissingDimension(_)));
    }

    #[test]
    fn geometry_is_optional_as_a_whole() {
        let request = ObservationRequest::builder()
            .name("AM1729")
            .semantics("earth:Terrestrial earth:Region")
            .build()
            .unwrap();
        assert!(request.geometry().is_none());

        let value = request.to_value().unwrap();
        assert!(value.get("geometry").is_none());
        assert!(value.get("digitalTwin").is_none());
    }

    #[test]
    fn digital_twin_url_is_validated() {
        let request = ObservationRequest::builder()
            .name("AM1729")
            .semantics("earth:Terrestrial earth:Region")
            .digital_twin("https://services.integratedmodelling.org/runtime/main/dt/ESA_INSTITUTIONAL.40ipl26qekk")
            .build()
            .unwrap();
        assert!(request.digital_twin().unwrap().starts_with("https://"));

        let err = ObservationRequest::builder()
            .name("AM1729")
            .semantics("earth:Terrestrial earth:Region")
            .digital_twin("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, KlabNifiError::InvalidInput(_)));
    }

    #[test]
    fn full_request_serializes_to_the_flat_mapping() {
        let request = ObservationRequest::builder()
            .name("AM1729")
            .semantics("earth:Terrestrial earth:Region")
            .space(sample_space())
            .time(sample_time())
            .build()
            .unwrap();

        let value = request.to_value().unwrap();
        assert_eq!(value["name"], "AM1729");
        assert_eq!(value["semantics"], "earth:Terrestrial earth:Region");
        assert!(value["geometry"]["space"]["shape"]
            .as_str()
            .unwrap()
            .starts_with("EPSG:4326 POLYGON"));
        assert_eq!(value["geometry"]["time"]["tstart"], 1325376000000_i64);
        assert_eq!(value["geometry"]["time"]["tend"], 1356998400000_i64);
    }

    #[test]
    fn wrapped_request_nests_the_observation() {
        let observation = Observation::new("AM1729", "earth:Terrestrial earth:Region").unwrap();
        let geometry = Geometry::new(Some(sample_space()), Some(sample_time())).unwrap();

        let value = WrappedObservationRequest::new(observation, Some(geometry))
            .to_value()
            .unwrap();
        assert_eq!(value["observation"]["name"], "AM1729");
        assert_eq!(
            value["observation"]["semantics"],
            "earth:Terrestrial earth:Region"
        );
        assert_eq!(value["geometry"]["time"]["tunit"], "year");
    }
}
