//! Engine error type.
//!
//! Errors only surface while a scene is being built; once `Game::init`
//! succeeds, the per-tick systems skip anomalies instead of failing.

use thiserror::Error;

use crate::api::types::NodeId;

/// Result alias used across the engine.
pub type OrreryResult<T> = Result<T, OrreryError>;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("eccentricity {0} is outside [0, 1): orbit is not an ellipse")]
    InvalidEccentricity(f64),

    #[error("invalid ellipse axes: semi-major {semi_major}, semi-minor {semi_minor} (need semi-major >= semi-minor > 0)")]
    InvalidAxes { semi_major: f64, semi_minor: f64 },

    #[error("invalid circular orbit radius {0}")]
    InvalidRadius(f64),

    #[error("non-finite value for {0}")]
    NonFinite(&'static str),

    #[error("trail buffer needs at least one slot")]
    EmptyTrail,

    #[error("unknown scene node {0:?}")]
    UnknownNode(NodeId),

    #[error("cannot attach {child:?} under {parent:?}: would form a cycle")]
    InvalidParent { child: NodeId, parent: NodeId },

    #[error("catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("no catalog entry for {0}")]
    MissingCatalogEntry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_bad_value() {
        let err = OrreryError::InvalidEccentricity(1.2);
        assert!(err.to_string().contains("1.2"));

        let err = OrreryError::InvalidAxes { semi_major: 10.0, semi_minor: 20.0 };
        assert!(err.to_string().contains("semi-minor 20"));
    }

    #[test]
    fn serde_errors_convert() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{ not json");
        let err: OrreryError = parse.unwrap_err().into();
        assert!(matches!(err, OrreryError::Catalog(_)));
    }
}
