//! BIM Agents - Instruction to pyRevit Script Pipeline
//!
//! Turns a free-form building-element instruction (French or English) into a
//! normalized parameter set and a pyRevit script that creates the element.
//!
//! ## Architecture
//!
//! ```text
//! command ──► dispatcher::detect ──► registry::delegate ──► agent.generate
//!                 │                        │                    │
//!           keyword table           kind → unit          schema + template
//! ```
//!
//! Every call is a pure function of its input string. Nothing is cached
//! between calls apart from the compiled rule tables.
//!
//! ## Quick Start
//!
//! ```rust
//! use bim_agents::{run, ParamValue};
//!
//! let result = run("Crée une poutre de 30x50cm au niveau 2 sur l'axe A");
//! assert!(result.success);
//! let metadata = result.metadata.unwrap();
//! assert_eq!(metadata.get("width"), Some(&ParamValue::Int(300)));
//! assert_eq!(metadata.get("axis"), Some(&ParamValue::text("A")));
//! ```

// Core error handling
pub mod error;

// Configuration
pub mod config;

// Normalization and extraction engine
pub mod extraction;
pub mod units;

// Artifact templates
pub mod templates;

// Per-kind generation units
pub mod agents;

// Routing
pub mod dispatcher;
pub mod pipeline;
pub mod registry;

// Front-end helpers
pub mod demo;
pub mod output;
pub mod skill;

// Re-export the foundation types
pub use bim_types::{
    ElementKind, GenerationError, GenerationResult, Metadata, ParamValue, ParameterSet, RoofShape,
};

pub use config::{BimConfig, ConfigLoader, OutputFormat};
pub use dispatcher::detect;
pub use error::{BimError, BimResult};
pub use pipeline::{run, Pipeline, PipelineOutcome};
pub use registry::{delegate, AgentRegistry, GenerationUnit};
