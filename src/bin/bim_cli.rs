//! BIM Agents Command Line Interface
//!
//! Generates pyRevit scripts from building-element instructions.
//!
//! # Usage
//!
//! ```bash
//! # Generate and print a script
//! bim_cli generate "Crée une poutre de 30x50cm au niveau 2 sur l'axe A"
//!
//! # Generate and save to {output_dir}/{file_prefix}beam_agent.py
//! bim_cli generate --save "poutre 30x50cm"
//!
//! # Which element does a command route to?
//! bim_cli detect "Dalle de 20cm structurelle"
//!
//! # Chat-skill reply
//! bim_cli skill "Crée un mur"
//!
//! # Run the built-in demonstration
//! bim_cli demo
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use bim_agents::{
    agents::agent_for,
    demo::DEMO_COMMANDS,
    dispatcher::{detect_keyword, keywords_for},
    output::ArtifactWriter,
    skill, BimConfig, ConfigLoader, ElementKind, Metadata, OutputFormat, Pipeline,
};

#[derive(Parser)]
#[command(name = "bim_cli")]
#[command(author = "bim-agents")]
#[command(version = "0.1.0")]
#[command(about = "Generate pyRevit scripts from building-element instructions")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: json, text, or pretty (defaults to the config file)
    #[arg(long, short = 'o', global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the element kind and generate its script
    Generate {
        /// The instruction, e.g. "poutre 30x50cm niveau 2"
        #[arg(required = true)]
        command: Vec<String>,

        /// Write the script to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Save the script under the configured output directory
        #[arg(long)]
        save: bool,
    },

    /// Show which element kind a command routes to
    Detect {
        #[arg(required = true)]
        command: Vec<String>,
    },

    /// Print the chat-skill reply for a command
    Skill {
        #[arg(required = true)]
        command: Vec<String>,
    },

    /// Run the built-in demonstration commands
    Demo {
        /// Save the first generated script
        #[arg(long)]
        save: bool,
    },

    /// List element kinds, agents and keywords
    Kinds,
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match ConfigLoader::from_env().load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config, cli.quiet);

    let format = cli.format.unwrap_or(config.format);
    if format != OutputFormat::Pretty {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Generate {
            command,
            output,
            save,
        } => cmd_generate(&command.join(" "), output, save, &config, format, cli.quiet),
        Commands::Detect { command } => cmd_detect(&command.join(" "), format),
        Commands::Skill { command } => cmd_skill(&command.join(" "), format),
        Commands::Demo { save } => cmd_demo(save, &config, format, cli.quiet),
        Commands::Kinds => cmd_kinds(format),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "error": e }));
            } else {
                eprintln!("{}: {}", "error".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the script
fn init_tracing(config: &BimConfig, quiet: bool) {
    let fallback = if quiet { "warn" } else { config.log_filter.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

fn cmd_generate(
    command: &str,
    output: Option<PathBuf>,
    save: bool,
    config: &BimConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    let outcome = Pipeline::new().process(command);
    let (artifact, metadata) = outcome.result.into_result().map_err(|e| e.to_string())?;
    let kind = metadata.element_type;

    let saved = if output.is_some() || save {
        let writer = ArtifactWriter::from_config(config);
        let path = match output {
            Some(path) => writer.write_to(&path, &artifact),
            None => writer.write(kind, &artifact),
        }
        .map_err(|e| e.to_string())?;
        Some(path)
    } else {
        None
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "success": true,
                "agent": kind.agent_name(),
                "metadata": metadata,
                "artifact": artifact,
                "saved_to": saved,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| format!("JSON serialization failed: {}", e))?
            );
        }
        OutputFormat::Text | OutputFormat::Pretty => {
            if !quiet {
                print_summary(kind, &metadata);
                println!();
            }
            println!("{}", artifact.trim_end());
            if let Some(path) = saved {
                eprintln!("{} Saved to {}", "OK".green().bold(), path.display());
            }
        }
    }

    Ok(())
}

fn cmd_detect(command: &str, format: OutputFormat) -> Result<(), String> {
    let (keyword, kind) =
        detect_keyword(command).ok_or_else(|| "No element kind detected".to_string())?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "kind": kind,
                    "agent": kind.agent_name(),
                    "keyword": keyword,
                })
            );
        }
        OutputFormat::Text | OutputFormat::Pretty => {
            println!(
                "{} {} (keyword '{}')",
                kind.agent_name().cyan().bold(),
                kind,
                keyword
            );
        }
    }

    Ok(())
}

fn cmd_skill(command: &str, format: OutputFormat) -> Result<(), String> {
    let reply = skill::handle_command(command);
    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "reply": reply })),
        OutputFormat::Text | OutputFormat::Pretty => println!("{}", reply),
    }
    Ok(())
}

fn cmd_demo(
    save: bool,
    config: &BimConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    let pipeline = Pipeline::new();
    let mut failures = 0;
    let mut report = Vec::new();

    for (i, demo) in DEMO_COMMANDS.iter().enumerate() {
        let outcome = pipeline.process(demo.command);
        let result = &outcome.result;
        if !result.success {
            failures += 1;
        }

        if format == OutputFormat::Json {
            report.push(serde_json::json!({
                "command": demo.command,
                "description": demo.description,
                "kind": outcome.kind,
                "result": result,
            }));
            continue;
        }

        println!("{}", "─".repeat(70).dimmed());
        println!(
            "{} {}/{}",
            "Example".bold(),
            i + 1,
            DEMO_COMMANDS.len()
        );
        println!("  Command: \"{}\"", demo.command);
        if !quiet {
            println!("  {}", demo.description.dimmed());
        }

        match (result.artifact(), result.metadata()) {
            (Some(artifact), Some(metadata)) => {
                println!(
                    "  {} {} ({} chars)",
                    "OK".green().bold(),
                    metadata.element_type.agent_name(),
                    artifact.len()
                );
                let params: Vec<String> = metadata
                    .params
                    .iter()
                    .map(|(name, value)| format!("{}={}", name, value))
                    .collect();
                println!("  Parameters: {}", params.join(", "));

                if save && i == 0 {
                    let path = ArtifactWriter::from_config(config)
                        .write(metadata.element_type, artifact)
                        .map_err(|e| e.to_string())?;
                    println!("  Saved to {}", path.display());
                }
            }
            _ => println!(
                "  {} {}",
                "FAILED".red().bold(),
                result.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization failed: {}", e))?
        );
    } else {
        println!("{}", "─".repeat(70).dimmed());
        println!(
            "{} {}/{} commands generated",
            "Done:".bold(),
            DEMO_COMMANDS.len() - failures,
            DEMO_COMMANDS.len()
        );
    }

    if failures > 0 {
        Err(format!("{} demo command(s) failed", failures))
    } else {
        Ok(())
    }
}

fn cmd_kinds(format: OutputFormat) -> Result<(), String> {
    match format {
        OutputFormat::Json => {
            let kinds: Vec<_> = ElementKind::ALL
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "kind": kind,
                        "agent": kind.agent_name(),
                        "keywords": keywords_for(*kind),
                        "attributes": agent_for(*kind).schema().attribute_names(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&kinds)
                    .map_err(|e| format!("JSON serialization failed: {}", e))?
            );
        }
        OutputFormat::Text | OutputFormat::Pretty => {
            for kind in ElementKind::ALL {
                println!("{} ({})", kind.agent_title().bold(), kind.agent_name().cyan());
                println!("  Keywords:   {}", keywords_for(kind).join(", "));
                println!(
                    "  Attributes: {}",
                    agent_for(kind).schema().attribute_names().join(", ")
                );
            }
        }
    }
    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

fn print_summary(kind: ElementKind, metadata: &Metadata) {
    println!("{} {}", "Agent:".bold(), kind.agent_name().cyan());
    println!("{}", "Parameters:".bold());
    for (name, value) in metadata.params.iter() {
        println!("  {}: {}", name, value);
    }
}
