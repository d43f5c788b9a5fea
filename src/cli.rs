use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shader-controller-gen")]
#[command(about = "Generates material controller scripts from shader properties")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Generate {
        #[arg(long, default_value_os_t = default_config_path())]
        config: PathBuf,
        #[command(flatten)]
        settings: GeneratorArgs,
        #[arg(long)]
        dry_run: bool,
    },
    Inspect {
        #[arg(long)]
        source: PathBuf,
        #[arg(long)]
        target: Option<String>,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    Save {
        #[arg(long, default_value_os_t = default_config_path())]
        config: PathBuf,
        #[command(flatten)]
        settings: GeneratorArgs,
    },
    Show {
        #[arg(long, default_value_os_t = default_config_path())]
        config: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorArgs {
    #[arg(long)]
    pub source: Option<PathBuf>,
    #[arg(long)]
    pub template: Option<PathBuf>,
    #[arg(long)]
    pub target: Option<String>,
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    #[arg(long)]
    pub extension: Option<String>,
    #[arg(long, action = clap::ArgAction::Set)]
    pub make_rpcs: Option<bool>,
    #[arg(long, action = clap::ArgAction::Set)]
    pub on_value_changed: Option<bool>,
}

impl From<GeneratorArgs> for ConfigOverrides {
    fn from(args: GeneratorArgs) -> Self {
        Self {
            target: args.target,
            source: args.source,
            template: args.template,
            output_dir: args.output_dir,
            extension: args.extension,
            make_rpcs: args.make_rpcs,
            on_value_changed: args.on_value_changed,
        }
    }
}

fn default_config_path() -> PathBuf {
    PathBuf::from("shader-controller-gen.json")
}
