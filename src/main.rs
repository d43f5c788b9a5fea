use clap::Parser;
use log::LevelFilter;
use shader_controller_gen::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_target(false)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    shader_controller_gen::run(cli)
}
