//! Command line front-end
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dgm languages` | List the linked languages |
//! | `dgm tokens <file>` | Print the visible tokens of a diagram |
//! | `dgm parse <file> [--json]` | Print the AST and diagnostics of a diagram |
//!
//! The language is chosen by file extension unless `--language` names one.

use clap::{Parser, Subcommand};
use dgm_application::ports::registry::list_languages;
use dgm_application::services::LanguageServices;
use dgm_domain::error::Result;
use dgm_domain::value_objects::{AstNode, ParseResult};
use dgm_infrastructure::config::{AppConfig, ConfigLoader};
use dgm_infrastructure::logging::init_logging;
use dgm_infrastructure::{ErrorContext, Services, ServicesContext, create_services_from_config};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

/// Command line interface for the diagram language services
#[derive(Parser, Debug)]
#[command(name = "dgm")]
#[command(about = "Diagram language services - tokenize and parse Mermaid diagrams")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Language to use instead of the one registered for the file extension
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the linked languages
    Languages,
    /// Print the visible tokens of a diagram
    Tokens {
        /// Diagram file
        file: PathBuf,
    },
    /// Print the AST and diagnostics of a diagram
    Parse {
        /// Diagram file
        file: PathBuf,
        /// Print the parse result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Load configuration, initialize logging and run the command
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<ExitCode> {
    let config = load_config(cli)?;
    init_logging(&config.logging)?;
    run_with_config(cli, &config, out)
}

/// Configuration from `--config` or the default locations
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Run the command against an already loaded configuration
///
/// Returns failure when the diagram has lexing or parsing errors.
pub fn run_with_config(cli: &Cli, config: &AppConfig, out: &mut dyn Write) -> Result<ExitCode> {
    match &cli.command {
        Command::Languages => {
            for (id, description) in list_languages() {
                writeln!(out, "{id}\t{description}").io_context("Failed to write output")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Tokens { file } => {
            let services = create_services_from_config(config, ServicesContext::default())?;
            let language = select_language(&services, cli.language.as_deref(), file)?;
            let text = read_diagram(file)?;
            let result = language.lexer()?.tokenize(&text);

            for token in &result.tokens {
                writeln!(
                    out,
                    "{}:{}\t{}\t{:?}",
                    token.line, token.column, token.token_type, token.image
                )
                .io_context("Failed to write output")?;
            }
            for error in &result.errors {
                writeln!(out, "{}:{}\terror: {}", error.line, error.column, error.message)
                    .io_context("Failed to write output")?;
            }
            Ok(exit_code(result.errors.is_empty()))
        }
        Command::Parse { file, json } => {
            let services = create_services_from_config(config, ServicesContext::default())?;
            let language = select_language(&services, cli.language.as_deref(), file)?;
            let text = read_diagram(file)?;
            let result = language.parser()?.parse(&text);

            if *json {
                let rendered = serde_json::to_string_pretty(&result)
                    .context("Failed to serialize parse result")?;
                writeln!(out, "{rendered}").io_context("Failed to write output")?;
            } else {
                write_parse_result(out, &result).io_context("Failed to write output")?;
            }
            Ok(exit_code(!result.has_errors()))
        }
    }
}

fn select_language(
    services: &Services,
    language: Option<&str>,
    file: &Path,
) -> Result<LanguageServices> {
    let registry = services.shared.service_registry()?;
    let selected = match language {
        Some(id) => registry.get_services(id)?,
        None => registry.get_services_for_uri(&file.to_string_lossy())?,
    };
    debug!(file = %file.display(), language = %selected.language_id()?, "Selected language");
    Ok(selected)
}

fn read_diagram(file: &Path) -> Result<String> {
    std::fs::read_to_string(file)
        .io_context(format!("Failed to read diagram: {}", file.display()))
}

fn exit_code(clean: bool) -> ExitCode {
    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn write_parse_result(out: &mut dyn Write, result: &ParseResult) -> std::io::Result<()> {
    write_node(out, &result.value, 0)?;
    for error in &result.lexer_errors {
        writeln!(out, "{}:{}\tlexer error: {}", error.line, error.column, error.message)?;
    }
    for error in &result.parser_errors {
        writeln!(out, "{}:{}\tparser error: {}", error.line, error.column, error.message)?;
    }
    Ok(())
}

fn write_node(out: &mut dyn Write, node: &AstNode, depth: usize) -> std::io::Result<()> {
    let indent = "  ".repeat(depth);
    writeln!(out, "{indent}{}", node.node_type)?;
    for (name, value) in &node.properties {
        writeln!(out, "{indent}  {name} = {value}")?;
    }
    for (feature, children) in &node.children {
        writeln!(out, "{indent}  {feature}:")?;
        for child in children {
            write_node(out, child, depth + 2)?;
        }
    }
    Ok(())
}
