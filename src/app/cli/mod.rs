//! CLI Adapter.

mod generate;
mod inspect;
mod releases;
mod wizard;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::api::ValuesFormat;
use crate::app::logging::{self, Verbosity};
use crate::domain::{AppError, DEFAULT_TOKEN_LENGTH, DeploymentType};

#[derive(Parser)]
#[command(name = "m3u-compose")]
#[command(version)]
#[command(
    about = "Render docker-compose.yml and .env files for M3U Editor deployments",
    long_about = None
)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Deployment type selection shared by the commands.
#[derive(Args, Clone, Copy)]
struct DeploymentArg {
    /// Deployment type: modular, aio, vpn, external-nginx, external-caddy
    #[arg(short = 'd', long = "deployment", default_value = "modular")]
    deployment: DeploymentType,
}

/// Value sources applied on top of the deployment type's defaults.
#[derive(Args, Clone)]
struct ValueArgs {
    /// Values file (.toml, .yaml, .yml or .json) with NAME = value entries
    #[arg(long = "values", value_name = "FILE")]
    values_file: Option<PathBuf>,
    /// Override one field, applied after the values file
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Toml,
    Yaml,
    Json,
}

impl From<FormatArg> for ValuesFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Toml => ValuesFormat::Toml,
            FormatArg::Yaml => ValuesFormat::Yaml,
            FormatArg::Json => ValuesFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List deployment types
    #[clap(visible_alias = "t")]
    Types {
        /// Show features and limitations
        #[arg(long)]
        detail: bool,
    },
    /// Show the sections and fields asked for a deployment type
    Schema {
        #[command(flatten)]
        deployment: DeploymentArg,
        #[command(flatten)]
        values: ValueArgs,
    },
    /// Print the default values of a deployment type
    Defaults {
        #[command(flatten)]
        deployment: DeploymentArg,
        /// Output format
        #[arg(long, value_enum, default_value = "toml")]
        format: FormatArg,
    },
    /// Generate docker-compose.yml and .env without prompting
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        deployment: DeploymentArg,
        #[command(flatten)]
        values: ValueArgs,
        /// Write the files into this directory instead of printing
        #[arg(short = 'o', long, value_name = "DIR", conflicts_with = "secrets")]
        output_dir: Option<PathBuf>,
        /// Print the .env secrets file instead of the manifest
        #[arg(long)]
        secrets: bool,
        /// Fail when required fields are empty
        #[arg(long)]
        strict: bool,
    },
    /// Walk through the configuration interactively
    #[clap(visible_alias = "w")]
    Wizard {
        /// Deployment type; asked for when omitted
        #[arg(short = 'd', long = "deployment")]
        deployment: Option<DeploymentType>,
        /// Write the files into this directory instead of printing
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
    /// Print a random alphanumeric token
    Token {
        /// Token length
        #[arg(long, default_value_t = DEFAULT_TOKEN_LENGTH as u16, value_parser = clap::value_parser!(u16).range(1..))]
        length: u16,
    },
    /// Show the latest version of each release channel
    Releases {
        /// Base URL of the raw branch files
        #[arg(long, env = "M3U_COMPOSE_RELEASE_BASE_URL")]
        base_url: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let result: Result<(), AppError> = match cli.command {
        Commands::Types { detail } => {
            inspect::run_types(detail);
            Ok(())
        }
        Commands::Schema { deployment, values } => {
            inspect::run_schema(deployment.deployment, values.values_file, &values.overrides)
        }
        Commands::Defaults { deployment, format } => {
            inspect::run_defaults(deployment.deployment, format.into())
        }
        Commands::Generate { deployment, values, output_dir, secrets, strict } => {
            generate::run_generate(generate::GenerateArgs {
                deployment: deployment.deployment,
                values_file: values.values_file,
                overrides: values.overrides,
                output_dir,
                secrets,
                strict,
            })
        }
        Commands::Wizard { deployment, output_dir } => wizard::run_wizard(deployment, output_dir),
        Commands::Token { length } => {
            inspect::run_token(usize::from(length));
            Ok(())
        }
        Commands::Releases { base_url } => releases::run_releases(base_url.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
