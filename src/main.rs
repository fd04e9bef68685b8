use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use markee::config::{Config, OutputFormat};
use markee::{Error, Result};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|e| Error::Io {
            path: p.clone(),
            source: e,
        }),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_all(path: Option<&PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| Error::Io {
            path: p.clone(),
            source: e,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        Ok(std::env::current_dir()?)
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = markee::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render { file, output, to } => {
            let mut cfg = load_config(cli.config.as_deref(), &file)?;
            if let Some(to) = to {
                cfg.format = to.parse::<OutputFormat>()?;
            }

            let input = read_all(file.as_ref())?;
            let rendered = markee::render(&input, Some(cfg));
            write_all(output.as_ref(), &rendered)
        }
        Commands::Parse { file } => {
            let mut cfg = load_config(cli.config.as_deref(), &file)?;
            cfg.format = OutputFormat::Tree;

            let input = read_all(file.as_ref())?;
            let dump = markee::render(&input, Some(cfg));
            write_all(None, &dump)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
