//! Floor agent: slab thickness, level and structural flag

use bim_types::{ElementKind, GenerationResult, ParamValue, ParameterSet};
use std::sync::LazyLock;

use super::ElementAgent;
use crate::extraction::{
    level_attribute, AttributeSpec, ElementSchema, LevelPhrase, Normalize, Quantity,
};
use crate::templates::FLOOR_TEMPLATE;

pub const DEFAULT_THICKNESS_MM: f64 = 200.0;
pub const DEFAULT_LEVEL: &str = "Niveau 1";

/// Any of these anywhere marks the slab as structural. Negation is not
/// detected: "non structurelle" still matches.
pub const STRUCTURAL_KEYWORDS: &[&str] = &[
    "structurelle",
    "structural",
    "porteur",
    "porteuse",
    "load-bearing",
];

pub static SCHEMA: LazyLock<ElementSchema> = LazyLock::new(|| {
    ElementSchema::new(ElementKind::Floor)
        .attribute(
            AttributeSpec::new(&["thickness"], Quantity::Millimeters)
                .pattern(r"([0-9]+(?:[.,][0-9]+)?)\s*cm", Normalize::Millimeters)
                .pattern(r"([0-9]+(?:[.,][0-9]+)?)\s*mm", Normalize::Millimeters)
                .pattern(
                    r"[ée]paisseur\s+(?:de\s+)?([0-9]+(?:[.,][0-9]+)?)",
                    Normalize::Millimeters,
                )
                .pattern(
                    r"\bde\s+([0-9]+(?:[.,][0-9]+)?)\s*(?:cm|mm)?",
                    Normalize::Millimeters,
                )
                .default_to(ParamValue::Float(DEFAULT_THICKNESS_MM)),
        )
        .attribute(level_attribute(DEFAULT_LEVEL, &[LevelPhrase::Sur]))
        .attribute(
            AttributeSpec::new(&["structural"], Quantity::Plain)
                .keywords(STRUCTURAL_KEYWORDS, ParamValue::Bool(true))
                .default_to(ParamValue::Bool(false)),
        )
});

pub static AGENT: ElementAgent = ElementAgent::new(&SCHEMA, FLOOR_TEMPLATE);

/// Generation entry point
pub fn generate_code(command: &str) -> GenerationResult {
    AGENT.generate(command)
}

pub fn extract(command: &str) -> ParameterSet {
    AGENT.extract(command)
}
