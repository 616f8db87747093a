//! Element Agents - One Generation Unit per Element Kind
//!
//! Each agent is a pair of declarations: an extraction schema (what to look
//! for in a command) and an artifact template (what to render). All agents
//! share the same engine:
//!
//! ```text
//! command → ElementSchema::extract → ParameterSet → TemplateExpander → GenerationResult
//! ```
//!
//! Adding a kind means adding a schema, a template and a registry entry;
//! nothing in the dispatcher or the engine changes.

pub mod beam;
pub mod column;
pub mod floor;
pub mod roof;
pub mod wall;

use bim_types::{ElementKind, GenerationResult, Metadata, ParameterSet};
use std::sync::LazyLock;
use tracing::info;

use crate::extraction::{CommandText, ElementSchema};
use crate::templates::{ArtifactTemplate, TemplateContext, TemplateExpander};

/// A schema + template pair for one element kind
pub struct ElementAgent {
    schema: &'static LazyLock<ElementSchema>,
    template: ArtifactTemplate,
}

impl ElementAgent {
    pub const fn new(schema: &'static LazyLock<ElementSchema>, template: ArtifactTemplate) -> Self {
        Self { schema, template }
    }

    pub fn kind(&self) -> ElementKind {
        self.schema.kind()
    }

    pub fn schema(&self) -> &ElementSchema {
        self.schema
    }

    pub fn template(&self) -> &ArtifactTemplate {
        &self.template
    }

    /// Extract the total parameter set for a command
    pub fn extract(&self, command: &str) -> ParameterSet {
        self.schema.extract(command)
    }

    /// Extract, render and wrap in the result envelope
    pub fn generate(&self, command: &str) -> GenerationResult {
        let text = CommandText::new(command);
        let params = self.schema.extract_text(&text);

        let context = TemplateContext::for_params(self.schema, &text, &params);
        let expansion = TemplateExpander::expand(&self.template, &context);

        info!(
            "{} generated {} ({} chars)",
            self.kind().agent_name(),
            expansion.template_id,
            expansion.text.len()
        );

        GenerationResult::success(expansion.text, Metadata::new(self.kind(), params))
    }
}

/// Look up the built-in agent for a kind
pub fn agent_for(kind: ElementKind) -> &'static ElementAgent {
    match kind {
        ElementKind::Beam => &beam::AGENT,
        ElementKind::Column => &column::AGENT,
        ElementKind::Wall => &wall::AGENT,
        ElementKind::Roof => &roof::AGENT,
        ElementKind::Floor => &floor::AGENT,
    }
}
