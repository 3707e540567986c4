use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use tempo::cli::args::{Cli, Commands};
use tempo::cli::commands::{self, Context};
use tempo::config::{Config, Paths};
use tempo::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("loading {}", paths.config_file.display()))?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let ctx = Context::new(config, paths, format);

    let output = match cli.command {
        Commands::Routine(args) => commands::routine(&ctx, args.command)?,
        Commands::Workout(args) => commands::workout(&ctx, args.command)?,
        Commands::Goals(args) => commands::goals(&ctx, args.command)?,
        Commands::Water(args) => commands::water(&ctx, args.command)?,
        Commands::Meal(args) => commands::meal(&ctx, args.command)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
