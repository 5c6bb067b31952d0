//! AI recommendation payload models
//!
//! The AI advice service answers in several shapes: a flat `recommendation`
//! action, a nested `decision.recommendation` verdict, an `error` field, or
//! nothing at all when no advice was requested yet. The payload is read
//! leniently so that a malformed answer never blocks rendering.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat action values produced by the advice service
pub const ACTION_IRRIGATE_TODAY: &str = "irrigate_today";
pub const ACTION_IRRIGATE_TOMORROW: &str = "irrigate_tomorrow";
pub const ACTION_SKIP: &str = "skip";

/// Verdicts found under `decision.recommendation`
pub const DECISION_IRRIGATE: &str = "IRRIGARE";
pub const DECISION_SKIP: &str = "SKIP";

/// Nested decision block of a recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Decision {
    pub recommendation: Option<String>,
}

/// A recommendation as received from the AI advice service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecommendationResult {
    pub recommendation: Option<String>,
    pub decision: Option<Decision>,
    /// Upstream error message; only set when the payload carried a truthy `error`
    pub error: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "explanationLLM")]
    pub explanation_llm: Option<String>,
}

impl RecommendationResult {
    /// Read a payload of any shape; fields of the wrong type are ignored
    pub fn from_value(value: &Value) -> Self {
        let string_at = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        let decision = value.get("decision").filter(|d| d.is_object()).map(|d| Decision {
            recommendation: d
                .get("recommendation")
                .and_then(Value::as_str)
                .map(str::to_string),
        });

        let error = value.get("error").filter(|e| is_truthy(e)).map(|e| match e {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });

        Self {
            recommendation: string_at("recommendation"),
            decision,
            error,
            text: string_at("text"),
            explanation_llm: string_at("explanationLLM"),
        }
    }

    /// Verdict nested under `decision`, if any
    pub fn decision_verdict(&self) -> Option<&str> {
        self.decision.as_ref()?.recommendation.as_deref()
    }

    /// Free-text analysis: `text` first, then `explanationLLM`
    pub fn analysis_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.explanation_llm.as_deref())
    }
}

impl From<&Value> for RecommendationResult {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

/// JavaScript-style truthiness, used where the client treated values as flags
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Display state of the recommendation pill
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PillKind {
    IrrigateNow,
    DoNotIrrigate,
    Error,
    /// No recommendation requested yet, or an unreadable one
    Pending,
}

impl PillKind {
    pub fn label(&self) -> &'static str {
        match self {
            PillKind::IrrigateNow => "Irrigate now",
            PillKind::DoNotIrrigate => "Do not irrigate",
            PillKind::Error => "Error",
            PillKind::Pending => "Pending",
        }
    }

    pub fn style_tag(&self) -> &'static str {
        match self {
            PillKind::IrrigateNow => "info",
            PillKind::DoNotIrrigate => "success",
            PillKind::Error => "danger",
            PillKind::Pending => "muted",
        }
    }

    pub fn icon_tag(&self) -> &'static str {
        match self {
            PillKind::IrrigateNow => "droplets",
            PillKind::DoNotIrrigate => "check-circle",
            PillKind::Error => "alert-triangle",
            PillKind::Pending => "brain",
        }
    }
}

impl std::fmt::Display for PillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Recommendation pill ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pill {
    pub kind: PillKind,
    pub label: String,
    pub style_tag: String,
    pub icon_tag: String,
}

impl From<PillKind> for Pill {
    fn from(kind: PillKind) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            style_tag: kind.style_tag().to_string(),
            icon_tag: kind.icon_tag().to_string(),
        }
    }
}
