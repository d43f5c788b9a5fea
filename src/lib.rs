use anyhow::Result;

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod introspect;
pub mod method_block;
pub mod naming;
pub mod property_table;
pub mod template;
pub mod types;

use cli::{Cli, Commands, ConfigCommands};
use config::{GeneratorConfig, load_config, save_config};
use error::GenError;
use generator::{generate_controller, inspect_shader, preview_controller};
use introspect::ShaderCatalog;

fn open_source(cfg: &GeneratorConfig) -> Result<ShaderCatalog> {
    let path = cfg.source.as_deref().ok_or(GenError::MissingSetting("source"))?;
    ShaderCatalog::load(path)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            config,
            settings,
            dry_run,
        } => {
            let mut cfg = load_config(&config)?;
            cfg.apply(settings.into());
            let source = open_source(&cfg)?;
            if dry_run {
                let (report, text) = preview_controller(&cfg, &source)?;
                print!("{}", text);
                eprintln!("[dry-run] would write {}", report.output_path);
            } else {
                let report = generate_controller(&cfg, &source)?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(())
        }
        Commands::Inspect { source, target } => {
            let catalog = ShaderCatalog::load(&source)?;
            let info = inspect_shader(target.as_deref(), &catalog)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Save { config, settings } => {
                let mut cfg = load_config(&config)?;
                cfg.apply(settings.into());
                save_config(&config, &cfg)?;
                println!("[ok] saved {}", config.display());
                Ok(())
            }
            ConfigCommands::Show { config } => {
                let cfg = load_config(&config)?;
                println!("{}", serde_json::to_string_pretty(&cfg)?);
                Ok(())
            }
        },
    }
}
