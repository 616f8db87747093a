//! Roof agent: shape, slope and level

use bim_types::{ElementKind, GenerationResult, ParamValue, ParameterSet, RoofShape};
use std::sync::LazyLock;

use super::ElementAgent;
use crate::extraction::{
    level_attribute, AttributeSpec, ElementSchema, LevelPhrase, Normalize, Quantity,
};
use crate::templates::ROOF_TEMPLATE;

pub const DEFAULT_SLOPE_DEG: f64 = 30.0;
/// Roofs sit on the level above by default
pub const DEFAULT_LEVEL: &str = "Niveau 2";

pub const FLAT_KEYWORDS: &[&str] = &["plat", "terrasse", "flat"];
pub const SLOPED_KEYWORDS: &[&str] = &["pente", "incliné", "2 pans", "4 pans", "gable", "hip"];
pub const DOME_KEYWORDS: &[&str] = &["dôme", "dome", "voûte", "vault"];

pub static SCHEMA: LazyLock<ElementSchema> = LazyLock::new(|| {
    ElementSchema::new(ElementKind::Roof)
        .attribute(
            AttributeSpec::new(&["roof_type"], Quantity::Plain)
                .keywords(FLAT_KEYWORDS, ParamValue::Shape(RoofShape::Flat))
                .keywords(SLOPED_KEYWORDS, ParamValue::Shape(RoofShape::Sloped))
                .keywords(DOME_KEYWORDS, ParamValue::Shape(RoofShape::Dome))
                .default_to(ParamValue::Shape(RoofShape::Sloped)),
        )
        .attribute(
            AttributeSpec::new(&["slope"], Quantity::Degrees)
                .pattern(r"([0-9]+(?:[.,][0-9]+)?)\s*°", Normalize::Degrees)
                .pattern(
                    r"([0-9]+(?:[.,][0-9]+)?)\s*(?:degrés?|degres?|degrees?|deg)\b",
                    Normalize::Degrees,
                )
                .pattern(
                    r"(?:pente|slope)\s+(?:de\s+|of\s+)?([0-9]+(?:[.,][0-9]+)?)\s*%",
                    Normalize::PercentToDegrees,
                )
                .default_to(ParamValue::Float(DEFAULT_SLOPE_DEG)),
        )
        .attribute(level_attribute(DEFAULT_LEVEL, &[LevelPhrase::Sur]))
});

pub static AGENT: ElementAgent = ElementAgent::new(&SCHEMA, ROOF_TEMPLATE);

/// Generation entry point
pub fn generate_code(command: &str) -> GenerationResult {
    AGENT.generate(command)
}

pub fn extract(command: &str) -> ParameterSet {
    AGENT.extract(command)
}
