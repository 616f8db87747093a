//! Artifact Templates
//!
//! Fixed pyRevit script templates with `$slot` placeholders, and the expander
//! that fills them from an extracted parameter set.
//!
//! Template bodies are opaque payloads: nothing here parses or validates the
//! script, it only substitutes typed values into designated slots.
//!
//! # Slots
//!
//! - `$<attribute>` - the attribute as a Python literal (`300`, `3.0`, `"Niveau 2"`, `True`, `None`)
//! - `$<attribute>_ft` - millimeter and meter attributes converted to feet
//! - `$command` - the command as typed, escaped for a docstring
//! - `$agent` - the generating agent name

use bim_types::{ParamValue, ParameterSet};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::extraction::{CommandText, ElementSchema, Quantity};
use crate::units;

/// Any placeholder left in an expanded template
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([a-z_][a-z0-9_]*)").unwrap());

/// Slots carrying user text, substituted after every typed slot
const VERBATIM_SLOTS: &[&str] = &["command"];

/// A fixed artifact template for one element kind
#[derive(Debug, Clone, Copy)]
pub struct ArtifactTemplate {
    /// Template identifier, e.g. "pyrevit.beam"
    pub id: &'static str,
    /// Template body with `$slot` placeholders
    pub body: &'static str,
}

pub const BEAM_TEMPLATE: ArtifactTemplate = ArtifactTemplate {
    id: "pyrevit.beam",
    body: include_str!("pyrevit/beam.py"),
};

pub const COLUMN_TEMPLATE: ArtifactTemplate = ArtifactTemplate {
    id: "pyrevit.column",
    body: include_str!("pyrevit/column.py"),
};

pub const WALL_TEMPLATE: ArtifactTemplate = ArtifactTemplate {
    id: "pyrevit.wall",
    body: include_str!("pyrevit/wall.py"),
};

pub const ROOF_TEMPLATE: ArtifactTemplate = ArtifactTemplate {
    id: "pyrevit.roof",
    body: include_str!("pyrevit/roof.py"),
};

pub const FLOOR_TEMPLATE: ArtifactTemplate = ArtifactTemplate {
    id: "pyrevit.floor",
    body: include_str!("pyrevit/floor.py"),
};

// ============================================================================
// CONTEXT
// ============================================================================

/// Slot values for one expansion, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    slots: Vec<(String, String)>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.slots.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.slots.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Build the slots for an extracted parameter set
    pub fn for_params(
        schema: &ElementSchema,
        command: &CommandText,
        params: &ParameterSet,
    ) -> Self {
        let mut context = TemplateContext::new()
            .with("command", escape_docstring(command.raw()))
            .with("agent", schema.kind().agent_name());

        for (name, value) in params.iter() {
            context.set(name, python_literal(value));

            let feet = match (schema.quantity_of(name), value.as_float()) {
                (Quantity::Millimeters, Some(mm)) => Some(units::mm_to_feet(mm)),
                (Quantity::Meters, Some(m)) => Some(units::meters_to_feet(m)),
                _ => None,
            };
            if let Some(feet) = feet {
                context.set(format!("{}_ft", name), format!("{:.6}", feet));
            }
        }

        context
    }
}

/// Render a parameter value as a Python literal
pub fn python_literal(value: &ParamValue) -> String {
    match value {
        ParamValue::Int(v) => v.to_string(),
        ParamValue::Float(v) => {
            debug_assert!(v.is_finite(), "non-finite value reached the renderer");
            value.to_string()
        }
        ParamValue::Bool(true) => "True".to_string(),
        ParamValue::Bool(false) => "False".to_string(),
        ParamValue::Shape(shape) => format!("\"{}\"", shape),
        ParamValue::Text(text) => format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\"")),
        ParamValue::Absent => "None".to_string(),
    }
}

fn escape_docstring(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

// ============================================================================
// EXPANDER
// ============================================================================

/// Result of template expansion
#[derive(Debug, Clone)]
pub struct Expansion {
    /// The rendered artifact
    pub text: String,
    /// Slots that were substituted at least once
    pub filled: Vec<String>,
    /// Placeholders still present after substitution
    pub unfilled: Vec<String>,
    /// Template that was expanded
    pub template_id: &'static str,
}

/// Expands artifact templates by substituting `$slot` placeholders
pub struct TemplateExpander;

impl TemplateExpander {
    pub fn expand(template: &ArtifactTemplate, context: &TemplateContext) -> Expansion {
        let mut text = template.body.to_string();
        let mut filled = Vec::new();

        // Free text goes in last so a '$' typed by the user is never treated as a slot
        let (verbatim, mut slots): (Vec<_>, Vec<_>) = context
            .slots
            .iter()
            .partition(|(name, _)| VERBATIM_SLOTS.contains(&name.as_str()));
        // Longer names first so $height never eats the prefix of $height_ft
        slots.sort_by_key(|(name, _)| std::cmp::Reverse(name.len()));

        for (name, value) in slots {
            let (next, replaced) = Self::substitute_param(&text, name, value);
            if replaced {
                filled.push(name.clone());
            }
            text = next;
        }

        let unfilled: Vec<String> = PLACEHOLDER_RE
            .captures_iter(&text)
            .map(|c| c[1].to_string())
            .filter(|name| !VERBATIM_SLOTS.contains(&name.as_str()))
            .collect();

        for (name, value) in verbatim {
            let (next, replaced) = Self::substitute_param(&text, name, value);
            if replaced {
                filled.push(name.clone());
            }
            text = next;
        }
        if !unfilled.is_empty() {
            warn!(
                "Template {} left {} placeholder(s) unfilled: {:?}",
                template.id,
                unfilled.len(),
                unfilled
            );
        }

        debug!("Expanded template {} ({} slots)", template.id, filled.len());

        Expansion {
            text,
            filled,
            unfilled,
            template_id: template.id,
        }
    }

    /// Replace `$name` wherever it is a complete token
    fn substitute_param(text: &str, name: &str, value: &str) -> (String, bool) {
        let pattern = format!("${}", name);
        let mut result = String::with_capacity(text.len());
        let mut last_end = 0;
        let mut replaced = false;

        for (start, _) in text.match_indices(&pattern) {
            let after = start + pattern.len();
            let is_longer_name = text[after..]
                .chars()
                .next()
                .map(|c| c.is_alphanumeric() || c == '_')
                .unwrap_or(false);

            if !is_longer_name {
                result.push_str(&text[last_end..start]);
                result.push_str(value);
                last_end = after;
                replaced = true;
            }
        }
        result.push_str(&text[last_end..]);

        (result, replaced)
    }
}
