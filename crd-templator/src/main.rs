use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config_utils::setup_logging;
use crd_templator::{read_build_from_file, render_crd};
use log::{info, warn};

#[derive(Parser)]
#[command(
    name = "crdgen",
    version,
    about = "Render the builds.config.openshift.io CRD and check Build manifests"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CustomResourceDefinition as YAML
    Crd {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a Build manifest, e.g. cluster-build.yaml
    Validate { file: PathBuf },
    /// Print the proxy settings git operations would use for a Build manifest
    GitProxy { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging().expect("Failed to initialize logging.");

    let cli = Cli::parse();

    match cli.command {
        Commands::Crd { output } => {
            let crd = render_crd()?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, crd).await?;
                    info!("Wrote CRD to {}", path.display());
                }
                None => print!("{}", crd),
            }
        }
        Commands::Validate { file } => {
            read_build_from_file(&file).await?;
            println!("{} is valid", file.display());
        }
        Commands::GitProxy { file } => {
            let build = read_build_from_file(&file).await?;
            match build.spec.build_defaults.effective_git_proxy() {
                Some(proxy) => print!("{}", serde_yaml::to_string(&proxy)?),
                None => warn!("{} configures no proxy for git operations", file.display()),
            }
        }
    }

    Ok(())
}
