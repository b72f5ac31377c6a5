use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, SimError>;

/// Configuration and loading errors
///
/// Numerical degeneracies (coincident bodies) are never reported through this
/// type; the engine skips them.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid mass {mass} for body '{name}': mass must be finite and > 0")]
    InvalidMass { name: String, mass: f64 },

    #[error("body '{name}' has a non-finite position or velocity")]
    NonFiniteState { name: String },

    #[error("invalid gravitational constant {0}: G must be finite and > 0")]
    InvalidGravitationalConstant(f64),

    #[error("invalid softening length {0}: softening must be finite and >= 0")]
    InvalidSoftening(f64),

    #[error("invalid time step {0}: dt must be finite and > 0")]
    InvalidTimeStep(f64),

    #[error("scenario contains no bodies")]
    EmptyScenario,

    #[error("duplicate body name '{0}'")]
    DuplicateBody(String),

    #[error("scenario has {0} error(s)")]
    Rejected(usize),

    #[error("malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_error_names_body() {
        let e = SimError::InvalidMass {
            name: "Sun".to_string(),
            mass: -1.0,
        };
        let msg = e.to_string();
        assert!(msg.contains("Sun"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: SimError = serde_json::from_str::<Vec<f64>>("[1,").unwrap_err().into();
        assert!(matches!(err, SimError::Parse(_)));
    }
}
