//! Column agent: section, level and height

use bim_types::{ElementKind, GenerationResult, ParamValue, ParameterSet};
use std::sync::LazyLock;

use super::ElementAgent;
use crate::extraction::{
    level_attribute, AttributeSpec, ElementSchema, LevelPhrase, Normalize, Quantity,
};
use crate::templates::COLUMN_TEMPLATE;

pub const DEFAULT_SIDE_MM: i64 = 300;
pub const DEFAULT_HEIGHT_M: f64 = 3.0;
pub const DEFAULT_LEVEL: &str = "Niveau 1";

pub static SCHEMA: LazyLock<ElementSchema> = LazyLock::new(|| {
    ElementSchema::new(ElementKind::Column)
        .attribute(
            AttributeSpec::new(&["width", "depth"], Quantity::Millimeters)
                .pattern(r"([0-9]+)\s*[x×]\s*([0-9]+)\s*(?:cm)?", Normalize::Section)
                .pattern(r"([0-9]+)\s*[x×]\s*([0-9]+)\s*mm", Normalize::Section)
                .pattern(r"([0-9]+)\s*cm\s*[x×]\s*([0-9]+)\s*cm", Normalize::Section)
                // square section
                .pattern(r"([0-9]+)\s*cm", Normalize::Section)
                .defaults([
                    ParamValue::Int(DEFAULT_SIDE_MM),
                    ParamValue::Int(DEFAULT_SIDE_MM),
                ]),
        )
        .attribute(level_attribute(DEFAULT_LEVEL, &[LevelPhrase::Du]))
        .attribute(
            AttributeSpec::new(&["height"], Quantity::Meters)
                .pattern(r"([0-9]+(?:[.,][0-9]+)?)\s*m\b", Normalize::Meters)
                .pattern(r"([0-9]+(?:[.,][0-9]+)?)\s*mètres?", Normalize::Meters)
                .pattern(
                    r"hauteur\s+(?:de\s+)?([0-9]+(?:[.,][0-9]+)?)",
                    Normalize::Meters,
                )
                .default_to(ParamValue::Float(DEFAULT_HEIGHT_M)),
        )
});

pub static AGENT: ElementAgent = ElementAgent::new(&SCHEMA, COLUMN_TEMPLATE);

/// Generation entry point
pub fn generate_code(command: &str) -> GenerationResult {
    AGENT.generate(command)
}

pub fn extract(command: &str) -> ParameterSet {
    AGENT.extract(command)
}
