//! Generation Unit Registry
//!
//! Static map from agent name to generation entry point, built once on first
//! use. The delegation façade resolves a kind through this map and invokes
//! the unit it finds; it never reaches into the agents directly.
//!
//! ```text
//! ElementKind ──agent_name──► GenerationUnit ──entry──► GenerationResult
//!                 │                  │
//!                 ▼                  ▼
//!            UnknownKind     MissingEntryPoint
//! ```

use bim_types::{ElementKind, GenerationError, GenerationResult};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::agents::{beam, column, floor, roof, wall};

/// A generation entry point
pub type GenerateFn = fn(&str) -> GenerationResult;

/// One registered generation unit
#[derive(Debug, Clone, Copy)]
pub struct GenerationUnit {
    /// Agent name, e.g. "beam_agent"
    pub name: &'static str,
    pub kind: ElementKind,
    /// `None` marks a unit registered without an entry point
    pub entry: Option<GenerateFn>,
}

impl GenerationUnit {
    pub const fn new(kind: ElementKind, name: &'static str, entry: GenerateFn) -> Self {
        Self {
            name,
            kind,
            entry: Some(entry),
        }
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

static AGENT_REGISTRY: OnceLock<AgentRegistry> = OnceLock::new();

#[derive(Debug, Default)]
pub struct AgentRegistry {
    units: HashMap<&'static str, GenerationUnit>,
}

impl AgentRegistry {
    /// Get the global registry instance
    pub fn global() -> &'static AgentRegistry {
        AGENT_REGISTRY.get_or_init(Self::builtin)
    }

    /// A registry with no units
    pub fn empty() -> Self {
        Self::default()
    }

    /// The five built-in agents
    fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(GenerationUnit::new(
            ElementKind::Beam,
            "beam_agent",
            beam::generate_code,
        ));
        registry.register(GenerationUnit::new(
            ElementKind::Column,
            "column_agent",
            column::generate_code,
        ));
        registry.register(GenerationUnit::new(
            ElementKind::Wall,
            "wall_agent",
            wall::generate_code,
        ));
        registry.register(GenerationUnit::new(
            ElementKind::Roof,
            "roof_agent",
            roof::generate_code,
        ));
        registry.register(GenerationUnit::new(
            ElementKind::Floor,
            "floor_agent",
            floor::generate_code,
        ));
        debug!("Agent registry built with {} units", registry.len());
        registry
    }

    /// Register a unit, replacing any unit with the same name
    pub fn register(&mut self, unit: GenerationUnit) {
        self.units.insert(unit.name, unit);
    }

    /// Look up the unit responsible for a kind
    pub fn resolve(&self, kind: ElementKind) -> Option<&GenerationUnit> {
        self.units.get(kind.agent_name())
    }

    pub fn get(&self, name: &str) -> Option<&GenerationUnit> {
        self.units.get(name)
    }

    /// Registered agent names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.units.keys().copied().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Resolve a kind and invoke its unit; the unit's result is returned unchanged
    pub fn delegate(&self, kind: ElementKind, command: &str) -> GenerationResult {
        let Some(unit) = self.resolve(kind) else {
            warn!("No generation unit registered for {}", kind);
            return GenerationResult::failure(GenerationError::UnknownKind {
                kind: kind.to_string(),
            });
        };

        let Some(entry) = unit.entry else {
            warn!("Generation unit {} has no entry point", unit.name);
            return GenerationResult::failure(GenerationError::MissingEntryPoint {
                agent: unit.name.to_string(),
            });
        };

        debug!("Delegating {} command to {}", kind, unit.name);
        entry(command)
    }
}

/// Delegate through the global registry
pub fn delegate(kind: ElementKind, command: &str) -> GenerationResult {
    AgentRegistry::global().delegate(kind, command)
}
