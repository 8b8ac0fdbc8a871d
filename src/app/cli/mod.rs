//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, GenerateOptions, GenerateOutcome, ValidateOptions};
use crate::app::config::DEFAULT_CONFIG_FILE;
use crate::domain::{AppError, VariantPolicy};

#[derive(Parser)]
#[command(name = "genconf")]
#[command(version)]
#[command(about = "Render cluster configuration templates into an output tree", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and write the rendered files
    #[clap(visible_alias = "g")]
    Generate {
        /// Deployment type to generate for (onprem)
        #[arg(short, long)]
        deployment_type: String,
        #[command(flatten)]
        source: SourceArgs,
        /// Output root (default: $HOME/dcos/serve)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Read templates from a directory instead of the built-in set
        #[arg(short, long)]
        templates: Option<PathBuf>,
        /// List the templates that would be rendered without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Check the configuration without rendering
    #[clap(visible_alias = "v")]
    Validate {
        /// Deployment type to check against
        #[arg(short, long, default_value = "onprem")]
        deployment_type: String,
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Path to the cluster configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Skip master discovery or storage backend values that are not recognized
    #[arg(long)]
    allow_unknown_variants: bool,
}

impl SourceArgs {
    fn policy(&self) -> VariantPolicy {
        if self.allow_unknown_variants { VariantPolicy::Permissive } else { VariantPolicy::Strict }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { deployment_type, source, output, templates, dry_run } => {
            run_generate(GenerateOptions {
                deployment_type,
                config_path: source.config.clone(),
                output_dir: output,
                templates_dir: templates,
                policy: source.policy(),
                dry_run,
            })
        }
        Commands::Validate { deployment_type, source } => run_validate(ValidateOptions {
            deployment_type,
            config_path: source.config.clone(),
            policy: source.policy(),
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_generate(options: GenerateOptions) -> Result<(), AppError> {
    match api::generate(&options)? {
        GenerateOutcome::Planned { deployment, templates, output_dir } => {
            println!(
                "✅ Dry run: {} template(s) for {} would render into {}",
                templates.len(),
                deployment,
                output_dir.display()
            );
            for template in &templates {
                println!("  • {}", template.path());
            }
        }
        GenerateOutcome::Generated { report, output_dir } => {
            println!(
                "✅ Generated {} file(s) from {} template(s) in {}",
                report.files().len(),
                report.committed.len(),
                output_dir.display()
            );
        }
    }
    Ok(())
}

fn run_validate(options: ValidateOptions) -> Result<(), AppError> {
    let outcome = api::validate(&options)?;
    println!(
        "✅ Configuration for {} is valid ({} master discovery, {} storage backend)",
        outcome.cluster_name, outcome.master_discovery, outcome.storage_backend
    );
    for template in &outcome.templates {
        println!("  • {}", template.path());
    }
    Ok(())
}
