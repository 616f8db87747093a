//! Level vocabulary shared by every element kind

use bim_types::ParamValue;

use super::{AttributeSpec, Normalize, Quantity, Rule};

/// Canonical label for the ground level
pub const GROUND_LEVEL: &str = "Rez-de-chaussée";

/// Vernacular tokens that all mean the ground level
pub const GROUND_TERMS: &[&str] = &["rdc", "rez", "rez-de-chaussée", "ground"];

/// Element-specific ways of naming a level, on top of the common ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelPhrase {
    /// "floor 2"
    FloorNumber,
    /// "du 2", "du rdc"
    Du,
    /// "sur 3", "sur rdc"
    Sur,
}

/// Turn a captured level token into a level label.
///
/// Ground terms map to [`GROUND_LEVEL`], digits become "Niveau {n}", anything
/// else is capitalized as-is.
pub fn level_label(token: &str) -> String {
    let token = token.trim();
    if GROUND_TERMS.contains(&token) {
        return GROUND_LEVEL.to_string();
    }
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        return format!("Niveau {}", token);
    }

    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Build the level attribute for a kind.
///
/// Rule order: "niveau N", "level N", "étage N", then `FloorNumber` if asked,
/// then a ground term anywhere in the command, then "du"/"sur" phrasing.
pub fn level_attribute(default_level: &str, phrasing: &[LevelPhrase]) -> AttributeSpec {
    let mut rules = vec![
        Rule::pattern(r"\bniveau\s+(\w+)", Normalize::Level),
        Rule::pattern(r"\blevel\s+(\w+)", Normalize::Level),
        Rule::pattern(r"\b[ée]tage\s+(\w+)", Normalize::Level),
    ];
    if phrasing.contains(&LevelPhrase::FloorNumber) {
        rules.push(Rule::pattern(r"\bfloor\s+(\w+)", Normalize::Level));
    }
    rules.push(Rule::pattern(r"\b(rdc|rez|ground)\b", Normalize::Level));
    if phrasing.contains(&LevelPhrase::Du) {
        rules.push(Rule::pattern(r"\bdu\s+(\w+)", Normalize::Level));
    }
    if phrasing.contains(&LevelPhrase::Sur) {
        rules.push(Rule::pattern(r"\bsur\s+(\w+)", Normalize::Level));
    }

    AttributeSpec::new(&["level"], Quantity::Plain)
        .rules(rules)
        .default_to(ParamValue::text(default_level))
}
