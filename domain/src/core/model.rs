//! Model value object representing a hosted LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted models known to the arena (Value Object)
///
/// Each responder, the role moderator and the judge are backed by one of
/// these. Any other identifier accepted by the backend is carried as
/// [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Llama 3.1 8B (instant)
    Llama31Instant,
    /// Llama 4 Scout 17B (16 experts, instruct)
    Llama4Scout,
    /// Gemma 2 9B (instruct)
    Gemma2,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama31Instant => "llama-3.1-8b-instant",
            Model::Llama4Scout => "meta-llama/llama-4-scout-17b-16e-instruct",
            Model::Gemma2 => "gemma2-9b-it",
            Model::Custom(s) => s,
        }
    }

    /// Human-friendly name for display
    pub fn display_name(&self) -> &str {
        match self {
            Model::Llama31Instant => "Llama 3.1 (8B)",
            Model::Llama4Scout => "Llama 4 Scout (17B)",
            Model::Gemma2 => "Gemma 2 (9B)",
            Model::Custom(s) => s,
        }
    }

    /// Default model for responder A
    pub fn default_responder_a() -> Model {
        Model::Llama31Instant
    }

    /// Default model for responder B
    pub fn default_responder_b() -> Model {
        Model::Llama4Scout
    }

    /// Default model for the role-assignment moderator
    pub fn default_moderator() -> Model {
        Model::Llama31Instant
    }

    /// Default model for the judge
    pub fn default_judge() -> Model {
        Model::Gemma2
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Llama31Instant
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama-3.1-8b-instant" => Model::Llama31Instant,
            "meta-llama/llama-4-scout-17b-16e-instruct" => Model::Llama4Scout,
            "gemma2-9b-it" => Model::Gemma2,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        let models = [
            Model::default_responder_a(),
            Model::default_responder_b(),
            Model::default_judge(),
        ];
        for model in models {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "mixtral-8x7b-32768".parse().unwrap();
        assert_eq!(model, Model::Custom("mixtral-8x7b-32768".to_string()));
        assert_eq!(model.to_string(), "mixtral-8x7b-32768");
        assert_eq!(model.display_name(), "mixtral-8x7b-32768");
    }

    #[test]
    fn test_model_defaults_match_roles() {
        assert_eq!(Model::default_responder_a(), Model::Llama31Instant);
        assert_eq!(Model::default_responder_b(), Model::Llama4Scout);
        assert_eq!(Model::default_moderator(), Model::Llama31Instant);
        assert_eq!(Model::default_judge(), Model::Gemma2);
    }

    #[test]
    fn test_model_serde_as_string() {
        let json = serde_json::to_string(&Model::Gemma2).unwrap();
        assert_eq!(json, "\"gemma2-9b-it\"");
        let parsed: Model = serde_json::from_str("\"llama-3.1-8b-instant\"").unwrap();
        assert_eq!(parsed, Model::Llama31Instant);
    }
}
