use serde::{Deserialize, Serialize};
use triangle::triangle::report::{DEFAULT_CORRECT, DEFAULT_SAMPLE_SIZE};

fn default_size() -> u64 {
    DEFAULT_SAMPLE_SIZE
}

fn default_correct() -> u64 {
    DEFAULT_CORRECT
}

/// Form inputs for one calculation. Omitted fields take the form defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[derive(utoipa::ToSchema, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// Number of participants, at most `MAX_SAMPLE_SIZE`.
    #[serde(default = "default_size")]
    #[param(default = 20, minimum = 1, maximum = 10000)]
    #[schema(default = 20, minimum = 1, maximum = 10000)]
    pub size: u64,
    /// Number of participants who picked the odd sample.
    #[serde(default = "default_correct")]
    #[param(default = 10, minimum = 0)]
    #[schema(default = 10, minimum = 0)]
    pub correct: u64,
}

impl Default for CalculateRequest {
    fn default() -> Self {
        Self {
            size: DEFAULT_SAMPLE_SIZE,
            correct: DEFAULT_CORRECT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_form_defaults() {
        let req: CalculateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, CalculateRequest::default());
        assert_eq!(req.size, 20);
        assert_eq!(req.correct, 10);
    }

    #[test]
    fn partial_body_keeps_other_default() {
        let req: CalculateRequest = serde_json::from_str(r#"{"size": 3}"#).unwrap();
        assert_eq!(req.size, 3);
        assert_eq!(req.correct, 10);
    }

    #[test]
    fn negative_counts_do_not_deserialize() {
        assert!(serde_json::from_str::<CalculateRequest>(r#"{"size": -1}"#).is_err());
        assert!(serde_json::from_str::<CalculateRequest>(r#"{"correct": -2}"#).is_err());
    }

    #[test]
    fn fractional_counts_do_not_deserialize() {
        assert!(serde_json::from_str::<CalculateRequest>(r#"{"size": 2.5}"#).is_err());
    }
}
