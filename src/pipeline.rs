//! Full pipeline: detect the kind, then delegate to its generation unit.

use bim_types::{ElementKind, GenerationError, GenerationResult};
use tracing::{info, warn};

use crate::dispatcher;
use crate::registry::AgentRegistry;

/// Detection outcome plus the generation result
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub kind: Option<ElementKind>,
    pub result: GenerationResult,
}

/// Pipeline bound to a registry
pub struct Pipeline<'a> {
    registry: &'a AgentRegistry,
}

impl Default for Pipeline<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline<'static> {
    /// Pipeline over the global registry
    pub fn new() -> Self {
        Self {
            registry: AgentRegistry::global(),
        }
    }
}

impl<'a> Pipeline<'a> {
    pub fn with_registry(registry: &'a AgentRegistry) -> Self {
        Self { registry }
    }

    pub fn process(&self, command: &str) -> PipelineOutcome {
        let (kind, command) = dispatcher::detect(command);

        let result = match kind {
            Some(kind) => self.registry.delegate(kind, command),
            None => {
                warn!("No element kind detected");
                GenerationResult::failure(GenerationError::NoIntentMatched)
            }
        };

        if result.success {
            info!("Pipeline produced {} artifact", kind.map(|k| k.as_str()).unwrap_or("?"));
        }

        PipelineOutcome { kind, result }
    }
}

/// Detect and delegate through the global registry
pub fn run(command: &str) -> GenerationResult {
    Pipeline::new().process(command).result
}
