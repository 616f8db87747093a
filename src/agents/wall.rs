//! Wall agent: thickness, height and level

use bim_types::{ElementKind, GenerationResult, ParamValue, ParameterSet};
use std::sync::LazyLock;

use super::ElementAgent;
use crate::extraction::{level_attribute, AttributeSpec, ElementSchema, Normalize, Quantity};
use crate::templates::WALL_TEMPLATE;

pub const DEFAULT_THICKNESS_MM: f64 = 200.0;
pub const DEFAULT_HEIGHT_M: f64 = 3.0;
pub const DEFAULT_LEVEL: &str = "Niveau 1";

pub static SCHEMA: LazyLock<ElementSchema> = LazyLock::new(|| {
    ElementSchema::new(ElementKind::Wall)
        .attribute(
            AttributeSpec::new(&["thickness"], Quantity::Millimeters)
                .pattern(r"([0-9]+(?:[.,][0-9]+)?)\s*cm", Normalize::Millimeters)
                .pattern(r"([0-9]+(?:[.,][0-9]+)?)\s*mm", Normalize::Millimeters)
                .pattern(
                    r"[ée]paisseur\s+(?:de\s+)?([0-9]+(?:[.,][0-9]+)?)",
                    Normalize::Millimeters,
                )
                .default_to(ParamValue::Float(DEFAULT_THICKNESS_MM)),
        )
        .attribute(
            AttributeSpec::new(&["height"], Quantity::Meters)
                .pattern(r"([0-9]+(?:[.,][0-9]+)?)\s*m\b", Normalize::Meters)
                .pattern(
                    r"hauteur\s+(?:de\s+)?([0-9]+(?:[.,][0-9]+)?)",
                    Normalize::Meters,
                )
                .pattern(r"([0-9]+(?:[.,][0-9]+)?)\s*mètres?", Normalize::Meters)
                .default_to(ParamValue::Float(DEFAULT_HEIGHT_M)),
        )
        .attribute(level_attribute(DEFAULT_LEVEL, &[]))
});

pub static AGENT: ElementAgent = ElementAgent::new(&SCHEMA, WALL_TEMPLATE);

/// Generation entry point
pub fn generate_code(command: &str) -> GenerationResult {
    AGENT.generate(command)
}

pub fn extract(command: &str) -> ParameterSet {
    AGENT.extract(command)
}
