//! Chat-skill response formatting
//!
//! Wraps the pipeline for a conversational front end: one command in, one
//! Markdown message out. Never fails; every outcome becomes text.

use bim_types::ElementKind;

use crate::pipeline::Pipeline;

/// Reply when no element kind is recognized
pub const HELP_TEXT: &str = "\
I could not tell which element you want to create.

Supported elements:
- Beams (poutre, beam)
- Columns (colonne, column)
- Walls (mur, wall)
- Roofs (toit, roof)
- Floors (dalle, floor, slab)

Example: \"Crée une poutre de 30x50cm au niveau 2\"";

const INSTRUCTIONS: &str = "\
**Instructions:**
1. Save this code to a `.py` file
2. Place it in a pushbutton folder of your pyRevit extension
3. Run it from Revit";

/// Turn a command into a chat reply
pub fn handle_command(command: &str) -> String {
    let outcome = Pipeline::new().process(command);

    let Some(kind) = outcome.kind else {
        return HELP_TEXT.to_string();
    };

    let result = outcome.result;
    match (result.artifact(), result.metadata()) {
        (Some(artifact), Some(metadata)) if result.success => {
            format_success(kind, artifact, metadata.params.iter())
        }
        _ => format!(
            "Generation failed: {}",
            result.error.as_deref().unwrap_or("unknown error")
        ),
    }
}

fn format_success<'a>(
    kind: ElementKind,
    artifact: &str,
    params: impl Iterator<Item = (&'a str, &'a bim_types::ParamValue)>,
) -> String {
    let parameters: String = params
        .map(|(name, value)| format!("- {}: {}\n", name, value))
        .collect();

    format!(
        "Code generated by **{}**\n\n**Detected parameters:**\n{}\n**pyRevit script:**\n\n```python\n{}\n```\n\n{}\n",
        kind.agent_title(),
        parameters,
        artifact.trim_end(),
        INSTRUCTIONS
    )
}
