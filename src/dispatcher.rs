//! Intent Dispatcher
//!
//! Maps a free-form command to an element kind through a static keyword table.
//!
//! # Matching
//!
//! - The command is lower-cased, then each keyword is searched as a plain
//!   substring in table order ("colonnettes" matches "colonne")
//! - The first keyword found wins; collisions are settled by table order,
//!   not by position in the command or keyword length
//! - The command is handed back untouched

use bim_types::ElementKind;
use tracing::{debug, info};

/// Keyword → kind, in priority order. French vocabulary comes before its
/// English synonym for every kind.
pub static DISPATCH_TABLE: &[(&str, ElementKind)] = &[
    ("poutre", ElementKind::Beam),
    ("poutres", ElementKind::Beam),
    ("beam", ElementKind::Beam),
    ("beams", ElementKind::Beam),
    ("colonne", ElementKind::Column),
    ("colonnes", ElementKind::Column),
    ("column", ElementKind::Column),
    ("columns", ElementKind::Column),
    ("mur", ElementKind::Wall),
    ("murs", ElementKind::Wall),
    ("wall", ElementKind::Wall),
    ("walls", ElementKind::Wall),
    ("toit", ElementKind::Roof),
    ("toits", ElementKind::Roof),
    ("roof", ElementKind::Roof),
    ("roofs", ElementKind::Roof),
    ("dalle", ElementKind::Floor),
    ("dalles", ElementKind::Floor),
    ("floor", ElementKind::Floor),
    ("floors", ElementKind::Floor),
    ("slab", ElementKind::Floor),
    ("slabs", ElementKind::Floor),
];

/// First table keyword found in the command, with its kind
pub fn detect_keyword(command: &str) -> Option<(&'static str, ElementKind)> {
    let lower = command.to_lowercase();
    DISPATCH_TABLE
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .copied()
}

/// Detect the element kind a command is about.
///
/// Returns `None` when no keyword is present. The command is always returned
/// as given.
pub fn detect(command: &str) -> (Option<ElementKind>, &str) {
    match detect_keyword(command) {
        Some((keyword, kind)) => {
            info!("Detected {} via keyword '{}'", kind, keyword);
            (Some(kind), command)
        }
        None => {
            debug!("No element keyword in command");
            (None, command)
        }
    }
}

/// Every keyword routing to a kind, in table order
pub fn keywords_for(kind: ElementKind) -> Vec<&'static str> {
    DISPATCH_TABLE
        .iter()
        .filter(|(_, k)| *k == kind)
        .map(|(keyword, _)| *keyword)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_kind() {
        assert_eq!(detect("Crée une poutre").0, Some(ElementKind::Beam));
        assert_eq!(detect("add a COLUMN").0, Some(ElementKind::Column));
        assert_eq!(detect("Crée un mur").0, Some(ElementKind::Wall));
        assert_eq!(detect("un toit terrasse").0, Some(ElementKind::Roof));
        assert_eq!(detect("Dalle de 20cm").0, Some(ElementKind::Floor));
        assert_eq!(detect("concrete slab").0, Some(ElementKind::Floor));
    }

    #[test]
    fn test_substring_not_whole_word() {
        assert_eq!(detect("trois colonnettes").0, Some(ElementKind::Column));
        // "murmure" contains "mur"
        assert_eq!(detect("un murmure").0, Some(ElementKind::Wall));
    }

    #[test]
    fn test_table_order_settles_collisions() {
        // The wall keyword appears first in the command, the beam keyword first in the table
        assert_eq!(detect("mur porteur sous la poutre").0, Some(ElementKind::Beam));
        assert_eq!(detect("roof over the floor").0, Some(ElementKind::Roof));
        // "floor" precedes "slab" but both route to the same kind
        assert_eq!(detect_keyword("slab floor"), Some(("floor", ElementKind::Floor)));
    }

    #[test]
    fn test_no_keyword() {
        let (kind, command) = detect("Bonjour, comment ça va ?");
        assert_eq!(kind, None);
        assert_eq!(command, "Bonjour, comment ça va ?");
        assert_eq!(detect("").0, None);
    }

    #[test]
    fn test_command_passes_through_unmodified() {
        let input = "  Crée une POUTRE 30x50cm  ";
        let (_, command) = detect(input);
        assert_eq!(command, input);
    }

    #[test]
    fn test_keywords_for_kind() {
        assert_eq!(keywords_for(ElementKind::Roof), vec!["toit", "toits", "roof", "roofs"]);
        for kind in ElementKind::ALL {
            assert!(!keywords_for(kind).is_empty());
        }
    }
}
