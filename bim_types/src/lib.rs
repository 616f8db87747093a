//! BIM Types - Level 1 Foundation Types
//!
//! This crate contains the pure data structures that flow through the
//! element-generation pipeline. Every other crate in the project depends on it,
//! and it depends on nothing in the project.
//!
//! ## Contents
//!
//! - Element kinds and roof shapes (closed enumerations)
//! - Parameter values and ordered parameter sets
//! - Generation metadata and the result envelope
//! - The generation error taxonomy
//!
//! ## Rules
//!
//! 1. **NO BUSINESS LOGIC** - pattern matching and rendering live upstream
//! 2. **VALUE TYPES** - everything is owned, cloneable and serializable
//! 3. **NO WORKSPACE DEPENDENCIES**

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// ELEMENT KINDS
// ============================================================================

/// The building-component categories the pipeline knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Beam,
    Column,
    Wall,
    Roof,
    Floor,
}

impl ElementKind {
    /// Every kind, in registration order
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Beam,
        ElementKind::Column,
        ElementKind::Wall,
        ElementKind::Roof,
        ElementKind::Floor,
    ];

    /// Tag used in metadata (`element_type`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Beam => "beam",
            ElementKind::Column => "column",
            ElementKind::Wall => "wall",
            ElementKind::Roof => "roof",
            ElementKind::Floor => "floor",
        }
    }

    /// Name of the generation unit responsible for this kind
    pub fn agent_name(&self) -> &'static str {
        match self {
            ElementKind::Beam => "beam_agent",
            ElementKind::Column => "column_agent",
            ElementKind::Wall => "wall_agent",
            ElementKind::Roof => "roof_agent",
            ElementKind::Floor => "floor_agent",
        }
    }

    /// Human-readable agent title, e.g. "Beam Agent"
    pub fn agent_title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{} Agent", first.to_ascii_uppercase(), chars.as_str()),
            None => "Agent".to_string(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ElementKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered || kind.agent_name() == lowered)
            .ok_or(GenerationError::UnknownKind { kind: lowered })
    }
}

/// Roof classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofShape {
    Flat,
    Sloped,
    Dome,
}

impl RoofShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoofShape::Flat => "flat",
            RoofShape::Sloped => "sloped",
            RoofShape::Dome => "dome",
        }
    }
}

impl fmt::Display for RoofShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PARAMETER VALUES
// ============================================================================

/// A normalized attribute value.
///
/// `Absent` is reserved for attributes that may legitimately be missing
/// (the beam axis); every other attribute resolves to a concrete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Shape(RoofShape),
    Text(String),
    Absent,
}

impl ParamValue {
    pub fn text(value: impl Into<String>) -> Self {
        ParamValue::Text(value.into())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view; integers widen to floats
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<RoofShape> {
        match self {
            ParamValue::Shape(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ParamValue::Absent)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            // Whole floats keep one decimal so "3.0" never reads as an integer
            ParamValue::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{:.1}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Shape(v) => write!(f, "{}", v),
            ParamValue::Text(v) => f.write_str(v),
            ParamValue::Absent => f.write_str("none"),
        }
    }
}

// ============================================================================
// PARAMETER SET
// ============================================================================

/// Attribute name → normalized value, kept in schema declaration order.
///
/// Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute, keeping the original position on replace
    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

// ============================================================================
// METADATA AND RESULT ENVELOPE
// ============================================================================

/// What was extracted for one command, tagged with its element kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub element_type: ElementKind,
    #[serde(flatten)]
    pub params: ParameterSet,
}

impl Metadata {
    pub fn new(element_type: ElementKind, params: ParameterSet) -> Self {
        Self {
            element_type,
            params,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }
}

/// Failures surfaced by the dispatch and delegation tiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("No known element kind mentioned in the command")]
    NoIntentMatched,

    #[error("Element kind '{kind}' has no registered generation unit")]
    UnknownKind { kind: String },

    #[error("Generation unit '{agent}' has no generation entry point")]
    MissingEntryPoint { agent: String },
}

/// Result envelope returned to every caller.
///
/// A successful result always carries a non-empty artifact and its metadata;
/// a failed one carries an error message and neither of the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub success: bool,
    pub error: Option<String>,
    pub artifact: Option<String>,
    pub metadata: Option<Metadata>,
    /// Structured cause of a failure, for callers that branch on it
    #[serde(skip)]
    pub failure: Option<GenerationError>,
}

impl GenerationResult {
    pub fn success(artifact: String, metadata: Metadata) -> Self {
        Self {
            success: true,
            error: None,
            artifact: Some(artifact),
            metadata: Some(metadata),
            failure: None,
        }
    }

    pub fn failure(error: GenerationError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            artifact: None,
            metadata: None,
            failure: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn artifact(&self) -> Option<&str> {
        self.artifact.as_deref()
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Convert the envelope into a `Result` for `?`-style callers
    pub fn into_result(self) -> Result<(String, Metadata), GenerationError> {
        match (self.artifact, self.metadata, self.failure) {
            (Some(artifact), Some(metadata), _) if self.success => Ok((artifact, metadata)),
            (_, _, Some(failure)) => Err(failure),
            _ => Err(GenerationError::NoIntentMatched),
        }
    }
}
