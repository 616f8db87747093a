//! Extraction Engine - Declarative Attribute Recognition
//!
//! Every element kind is described by an [`ElementSchema`]: an ordered list of
//! attributes, each with its own prioritized recognition rules and a typed
//! default. The engine is shared by all kinds; the per-kind agents only
//! declare their schema.
//!
//! # Matching Model
//!
//! ```text
//! Command ──lowercase──► rule 1 ──no──► rule 2 ──no──► ... ──► default
//!                          │yes           │yes
//!                          ▼              ▼
//!                      normalize      normalize
//! ```
//!
//! - Rules run against the lower-cased command, first match wins
//! - No combination of rules is ever attempted
//! - Extraction is total: an attribute always resolves to a value
//!
//! There is no grammar here. Matching is best-effort and order-sensitive.

mod levels;

pub use levels::{level_attribute, level_label, LevelPhrase, GROUND_LEVEL, GROUND_TERMS};

use bim_types::{ElementKind, ParamValue, ParameterSet};
use regex::{Captures, Regex};
use tracing::debug;

use crate::units;

// ============================================================================
// COMMAND TEXT
// ============================================================================

/// A command prepared for matching: the raw text plus its lower-cased form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandText {
    raw: String,
    lower: String,
}

impl CommandText {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lower: raw.to_lowercase(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Substring test against the lower-cased command
    pub fn mentions(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }
}

// ============================================================================
// RULES
// ============================================================================

/// How captured text becomes a normalized value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    /// One or two integer captures → section in mm (one capture = square)
    Section,
    /// Decimal capture → mm, centimeter heuristic applied
    Millimeters,
    /// Decimal capture in meters, unchanged
    Meters,
    /// Decimal capture in degrees, unchanged
    Degrees,
    /// Percentage capture → degrees
    PercentToDegrees,
    /// Level token → level label
    Level,
    /// Token → upper-case label
    Label,
}

impl Normalize {
    fn apply(&self, caps: &Captures<'_>, command: &CommandText) -> Option<Vec<ParamValue>> {
        let first = caps.get(1)?.as_str();
        let lower = command.lower();

        let values = match self {
            Normalize::Section => {
                let a = units::parse_integer(first)?;
                let b = match caps.get(2) {
                    Some(m) => units::parse_integer(m.as_str())?,
                    None => a,
                };
                let (w, d) = units::section_to_millimeters(a, b, lower)?;
                vec![ParamValue::Int(w), ParamValue::Int(d)]
            }
            Normalize::Millimeters => {
                let v = units::parse_decimal(first)?;
                vec![ParamValue::Float(units::to_millimeters(v, lower))]
            }
            Normalize::Meters => {
                let v = units::parse_decimal(first)?;
                // the artifact carries the height in feet, which must stay finite
                if !units::meters_to_feet(v).is_finite() {
                    return None;
                }
                vec![ParamValue::Float(v)]
            }
            Normalize::Degrees => vec![ParamValue::Float(units::parse_decimal(first)?)],
            Normalize::PercentToDegrees => {
                let v = units::parse_decimal(first)?;
                vec![ParamValue::Float(units::percent_to_degrees(v))]
            }
            Normalize::Level => vec![ParamValue::Text(level_label(first))],
            Normalize::Label => vec![ParamValue::Text(first.to_uppercase())],
        };

        Some(values)
    }
}

/// One recognition rule for an attribute
#[derive(Debug, Clone)]
pub enum Rule {
    /// Regular expression over the lower-cased command
    Pattern { regex: Regex, normalize: Normalize },
    /// Any keyword present as a substring yields a fixed value
    Keywords {
        words: &'static [&'static str],
        value: ParamValue,
    },
}

impl Rule {
    /// Build a pattern rule.
    ///
    /// Rule patterns are string literals declared in the schemas; an invalid
    /// one is a programming error caught by the schema tests.
    pub fn pattern(pattern: &str, normalize: Normalize) -> Self {
        let regex = Regex::new(pattern).expect("rule pattern must be a valid regex");
        Rule::Pattern { regex, normalize }
    }

    pub fn keywords(words: &'static [&'static str], value: ParamValue) -> Self {
        Rule::Keywords { words, value }
    }

    fn apply(&self, command: &CommandText) -> Option<Vec<ParamValue>> {
        match self {
            Rule::Pattern { regex, normalize } => {
                let caps = regex.captures(command.lower())?;
                normalize.apply(&caps, command)
            }
            Rule::Keywords { words, value } => words
                .iter()
                .any(|w| command.mentions(w))
                .then(|| vec![value.clone()]),
        }
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// Unit family of an attribute, used when rendering artifact slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Millimeters,
    Meters,
    Degrees,
    Plain,
}

/// One attribute (or a pair filled by the same match, like a section)
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    targets: &'static [&'static str],
    quantity: Quantity,
    rules: Vec<Rule>,
    defaults: Vec<ParamValue>,
}

impl AttributeSpec {
    pub fn new(targets: &'static [&'static str], quantity: Quantity) -> Self {
        Self {
            targets,
            quantity,
            rules: Vec::new(),
            defaults: vec![ParamValue::Absent; targets.len()],
        }
    }

    pub fn pattern(mut self, pattern: &str, normalize: Normalize) -> Self {
        self.rules.push(Rule::pattern(pattern, normalize));
        self
    }

    pub fn keywords(mut self, words: &'static [&'static str], value: ParamValue) -> Self {
        self.rules.push(Rule::keywords(words, value));
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Defaults, one per target, used when no rule matches
    pub fn defaults(mut self, defaults: impl IntoIterator<Item = ParamValue>) -> Self {
        self.defaults = defaults.into_iter().collect();
        self
    }

    pub fn default_to(self, value: ParamValue) -> Self {
        self.defaults([value])
    }

    pub fn targets(&self) -> &'static [&'static str] {
        self.targets
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Resolve the attribute against a command; always returns one value per target
    pub fn resolve(&self, command: &CommandText) -> Vec<ParamValue> {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(values) = rule.apply(command) {
                if values.len() == self.targets.len() {
                    debug!("{:?} matched rule {}: {:?}", self.targets, index, values);
                    return values;
                }
            }
        }

        debug!("{:?} fell back to defaults {:?}", self.targets, self.defaults);
        self.defaults.clone()
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// The full extraction schema for one element kind
#[derive(Debug, Clone)]
pub struct ElementSchema {
    kind: ElementKind,
    attributes: Vec<AttributeSpec>,
}

impl ElementSchema {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, attribute: AttributeSpec) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    /// Attribute names in declaration order
    pub fn attribute_names(&self) -> Vec<&'static str> {
        self.attributes
            .iter()
            .flat_map(|a| a.targets.iter().copied())
            .collect()
    }

    /// Unit family for a named attribute
    pub fn quantity_of(&self, name: &str) -> Quantity {
        self.attributes
            .iter()
            .find(|a| a.targets.contains(&name))
            .map(|a| a.quantity)
            .unwrap_or(Quantity::Plain)
    }

    /// Extract the total parameter set for a command
    pub fn extract(&self, command: &str) -> ParameterSet {
        self.extract_text(&CommandText::new(command))
    }

    pub fn extract_text(&self, command: &CommandText) -> ParameterSet {
        let mut params = ParameterSet::new();
        for attribute in &self.attributes {
            let values = attribute.resolve(command);
            for (name, value) in attribute.targets.iter().zip(values) {
                params.insert(*name, value);
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bim_types::RoofShape;

    fn thickness() -> AttributeSpec {
        AttributeSpec::new(&["thickness"], Quantity::Millimeters)
            .pattern(r"([0-9]+(?:[.,][0-9]+)?)\s*cm", Normalize::Millimeters)
            .pattern(r"([0-9]+)\s*mm", Normalize::Millimeters)
            .default_to(ParamValue::Float(200.0))
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let spec = thickness();
        let values = spec.resolve(&CommandText::new("25cm puis 300mm"));
        assert_eq!(values, vec![ParamValue::Float(250.0)]);
    }

    #[test]
    fn test_default_when_nothing_matches() {
        let spec = thickness();
        assert_eq!(
            spec.resolve(&CommandText::new("un mur")),
            vec![ParamValue::Float(200.0)]
        );
    }

    #[test]
    fn test_section_fills_both_targets() {
        let spec = AttributeSpec::new(&["width", "depth"], Quantity::Millimeters)
            .pattern(r"([0-9]+)\s*x\s*([0-9]+)", Normalize::Section)
            .pattern(r"([0-9]+)\s*cm", Normalize::Section)
            .defaults([ParamValue::Int(300), ParamValue::Int(300)]);

        assert_eq!(
            spec.resolve(&CommandText::new("40x60cm")),
            vec![ParamValue::Int(400), ParamValue::Int(600)]
        );
        assert_eq!(
            spec.resolve(&CommandText::new("carrée 45cm")),
            vec![ParamValue::Int(450), ParamValue::Int(450)]
        );
    }

    #[test]
    fn test_keyword_rules_in_order() {
        let spec = AttributeSpec::new(&["roof_type"], Quantity::Plain)
            .keywords(&["plat"], ParamValue::Shape(RoofShape::Flat))
            .keywords(&["dôme"], ParamValue::Shape(RoofShape::Dome))
            .default_to(ParamValue::Shape(RoofShape::Sloped));

        assert_eq!(
            spec.resolve(&CommandText::new("Toit PLAT en dôme")),
            vec![ParamValue::Shape(RoofShape::Flat)]
        );
    }

    #[test]
    fn test_schema_extracts_every_attribute() {
        let schema = ElementSchema::new(ElementKind::Wall)
            .attribute(thickness())
            .attribute(level_attribute("Niveau 1", &[]));

        let params = schema.extract("Crée un mur");
        assert_eq!(schema.attribute_names(), vec!["thickness", "level"]);
        assert_eq!(params.get("thickness"), Some(&ParamValue::Float(200.0)));
        assert_eq!(params.get("level"), Some(&ParamValue::text("Niveau 1")));
        assert_eq!(schema.quantity_of("thickness"), Quantity::Millimeters);
        assert_eq!(schema.quantity_of("level"), Quantity::Plain);
    }
}
