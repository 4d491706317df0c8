//! Client library for the k.LAB / Apache NiFi observation workflow.
//!
//! Builds validated Observation payloads (spatial/temporal geometry
//! plus semantic labels) and submits them as JSON to a NiFi ListenHTTP
//! processor endpoint. Validation happens up front in the value-object
//! constructors; whatever reaches the wire is already well-formed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use klab_nifi::{ClientConfig, ListenHttpClient, ObservationRequest, Space, Time};
//!
//! # async fn demo() -> klab_nifi::Result<()> {
//! let space = Space::new(
//!     "POLYGON((33.796 -7.086, 35.946 -7.086, 35.946 -9.41, 33.796 -9.41, 33.796 -7.086))",
//! )?;
//! let time = Time::new(1325376000000_i64, 1356998400000_i64)?;
//!
//! let request = ObservationRequest::builder()
//!     .name("AM1729")
//!     .semantics("earth:Terrestrial earth:Region")
//!     .space(space)
//!     .time(time)
//!     .build()?;
//!
//! let client = ListenHttpClient::with_config(ClientConfig {
//!     port: "3306".to_string(),
//!     healthport: Some("3307".to_string()),
//!     ..ClientConfig::default()
//! })?;
//! client.submit_observation(&request).await?;
//! # Ok(())
//! # }
//! ```

// Typed validation and submission errors
pub mod error;

// Spatial/temporal geometry model
pub mod geometry;

// Observation identity (name + semantics)
pub mod observation;

// Payload assembly for the listener
pub mod request;

// HTTP submission client
pub mod client;

// Explicit logging setup
pub mod logging;

pub use client::{ClientConfig, ListenHttpClient};
pub use error::{KlabNifiError, Result, TimeEndpoint};
pub use geometry::{
    Geometry, ShapeInput, Space, Time, TimeInput, TimeOptions, TimeScale, DEFAULT_GRID,
    KLAB_GEO_PROJ,
};
pub use observation::Observation;
pub use request::{ObservationRequest, ObservationRequestBuilder, WrappedObservationRequest};
