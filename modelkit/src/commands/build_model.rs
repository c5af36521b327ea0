use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use log::info;
use modelkit_codegen::DEFAULT_ENV;
use modelkit_manifest::ConfigFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildModelCommand {
    /// Path to modelkit.toml (defaults to ./modelkit.toml)
    #[arg(short, long, default_value = "modelkit.toml")]
    pub config: PathBuf,

    /// The application name
    #[arg(long)]
    pub application: Option<String>,

    /// The environment
    #[arg(long, default_value = DEFAULT_ENV)]
    pub env: String,
}

impl BuildModelCommand {
    pub fn run(&self) -> Result<()> {
        let config_file = ConfigFile::open(&self.config).unwrap_or_exit();
        info!(
            "Building models for application {} in {} environment",
            self.application.as_deref().unwrap_or("(none)"),
            self.env
        );

        let report = ops::build_model(
            &config_file,
            ops::build_model::BuildModelOptions {
                application: self.application.as_deref(),
                env: &self.env,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
