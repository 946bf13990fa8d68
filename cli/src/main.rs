use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use recordgen::{generate, parse_definitions, parse_materialized, ServiceOptions};
use recordgen_compiler::error::CompileError;
use recordgen_compiler::{order, order_strict, verify_definitions};

#[derive(Parser)]
#[command(name = "recordgen-cli")]
#[command(about = "Order record-type definitions and generate the TypeScript data-access layer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the definitions of a batch in dependency order
    Order {
        /// Input JSON file with a `{ "apps": [...] }` envelope
        #[arg(short, long)]
        input: PathBuf,

        /// Fail instead of falling back when no valid order exists
        #[arg(long)]
        strict: bool,
    },

    /// Verify a definition batch (duplicate identifiers, dangling lookups)
    Check {
        /// Input JSON file with a `{ "apps": [...] }` envelope
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate the types and service documents from materialized metadata
    Generate {
        /// Input JSON file with the materialized `{ "apps": [...] }` envelope
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the types document
        #[arg(long, default_value = "src/types/records.ts")]
        types_out: PathBuf,

        /// Output path for the service document
        #[arg(long, default_value = "src/services/recordService.ts")]
        service_out: PathBuf,

        /// Base URL baked into the generated service
        #[arg(long)]
        base_url: Option<String>,

        /// Module path the service imports the generated types from
        #[arg(long)]
        types_module: Option<String>,
    },
}

fn main() -> Result<(), CompileError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Order { input, strict } => {
            let text = fs::read_to_string(input).map_err(CompileError::Io)?;
            let definitions = parse_definitions(&text)?;
            let ordered = if *strict {
                verify_definitions(&definitions)?;
                order_strict(&definitions)?
            } else {
                order(&definitions)
            };
            for def in &ordered {
                println!("{}", def.identifier);
            }
            Ok(())
        }

        Commands::Check { input } => {
            let text = fs::read_to_string(input).map_err(CompileError::Io)?;
            let definitions = parse_definitions(&text)?;
            verify_definitions(&definitions)?;
            println!("Verified {} definitions in {}", definitions.len(), input.display());
            Ok(())
        }

        Commands::Generate {
            input,
            types_out,
            service_out,
            base_url,
            types_module,
        } => {
            let text = fs::read_to_string(input).map_err(CompileError::Io)?;
            let batch = parse_materialized(&text)?;

            let mut options = ServiceOptions::default();
            if let Some(url) = base_url {
                options.base_url = url.clone();
            }
            if let Some(module) = types_module {
                options.types_module = module.clone();
            }

            // Compile both documents before touching the filesystem, so a
            // failure never leaves a half-written artifact pair behind.
            let artifact = generate(&batch, &options)?;

            write_document(types_out, &artifact.types)?;
            println!("Generated {}", types_out.display());
            write_document(service_out, &artifact.service)?;
            println!("Generated {}", service_out.display());
            println!("Covered: {}", artifact.covered.join(", "));
            Ok(())
        }
    }
}

fn write_document(path: &Path, contents: &str) -> Result<(), CompileError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(CompileError::Io)?;
        }
    }
    fs::write(path, contents).map_err(CompileError::Io)
}
