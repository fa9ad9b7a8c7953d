//! Role assignment produced by the moderator model

use super::turn::Speaker;
use crate::extraction::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A required role field was absent, not a string, or blank.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing field in role assignment: {0}")]
pub struct MissingFieldError(pub String);

/// Refined proposition plus one stance per responder (Value Object)
///
/// Both roles come from the same parsed object; a partially usable object
/// is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub refined_goal: String,
    pub role_a: String,
    pub role_b: String,
}

impl RoleAssignment {
    /// Build from the moderator's JSON object.
    ///
    /// Expected shape:
    /// ```json
    /// {
    ///   "refined_goal": "...",
    ///   "debaters": { "llm_1": "...", "llm_2": "..." },
    ///   "roles": { "llm_1": "...", "llm_2": "..." }
    /// }
    /// ```
    ///
    /// A missing or blank `refined_goal` falls back to `topic`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_domain::RoleAssignment;
    ///
    /// let json = serde_json::json!({
    ///     "roles": { "llm_1": "Argue for", "llm_2": "Argue against" }
    /// });
    /// let assignment =
    ///     RoleAssignment::from_object(json.as_object().unwrap(), "Tabs or spaces?").unwrap();
    /// assert_eq!(assignment.refined_goal, "Tabs or spaces?");
    /// assert_eq!(assignment.role_b, "Argue against");
    /// ```
    pub fn from_object(object: &JsonObject, topic: &str) -> Result<Self, MissingFieldError> {
        let role_a = Self::role_for(object, Speaker::ResponderA)?;
        let role_b = Self::role_for(object, Speaker::ResponderB)?;

        let refined_goal = object
            .get("refined_goal")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(topic)
            .to_string();

        Ok(Self {
            refined_goal,
            role_a,
            role_b,
        })
    }

    /// Stance description for a responder (`None` for User/Judge).
    pub fn role_of(&self, speaker: Speaker) -> Option<&str> {
        match speaker {
            Speaker::ResponderA => Some(&self.role_a),
            Speaker::ResponderB => Some(&self.role_b),
            _ => None,
        }
    }

    fn role_for(object: &JsonObject, speaker: Speaker) -> Result<String, MissingFieldError> {
        object
            .get("roles")
            .and_then(|roles| roles.get(speaker.identity()))
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| MissingFieldError(format!("roles.{}", speaker.identity())))
    }
}
