// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

mod ui;

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use songqr::config::{AppConfig, LogConfig, LOG_ENV};
use songqr::ports::DirectorySaver;
use songqr::{CollectionManager, PayloadEncoder, Session, SongId};
use ui::{App, Controller, StatusLine};

fn print_usage() {
    println!("SongQR - QR codes for the stories behind your songs");
    println!();
    println!("Usage: songqr [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <PATH>   Load settings from a YAML file");
    println!("  --origin <URL>    Origin the song pages are served from");
    println!("  --out-dir <DIR>   Directory for exported QR codes");
    println!("  --url <ID>        Print the lookup URL for a song id and exit");
    println!("  --help            Show this help message");
}

/// Command line options
#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    origin: Option<String>,
    out_dir: Option<PathBuf>,
    url_for: Option<String>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow!("{} requires a value", name))
        };

        match arg.as_str() {
            "--config" => options.config = Some(PathBuf::from(value("--config")?)),
            "--origin" => options.origin = Some(value("--origin")?),
            "--out-dir" => options.out_dir = Some(PathBuf::from(value("--out-dir")?)),
            "--url" => options.url_for = Some(value("--url")?),
            "--help" | "-h" => options.help = true,
            other => return Err(anyhow!("Unknown option: {}", other)),
        }
    }

    Ok(options)
}

/// Merge defaults, config file, environment and flags, in that order
fn load_config(options: &Options) -> Result<AppConfig> {
    let mut config = match &options.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    config.apply_env();
    config.override_origin(options.origin.clone());
    if let Some(dir) = &options.out_dir {
        config.export.directory = dir.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Send logs to the configured file; the terminal belongs to the UI
fn init_logging(log: &LogConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log.file)
        .with_context(|| format!("Failed to open log file: {:?}", log.file))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if options.help {
        print_usage();
        return Ok(());
    }

    let config = load_config(&options)?;
    let encoder = PayloadEncoder::new(config.origin.clone());

    if let Some(id) = &options.url_for {
        println!("{}", encoder.derive_lookup_url(&SongId::from(id.as_str())));
        return Ok(());
    }

    init_logging(&config.log)?;
    tracing::info!(origin = %config.origin, export_dir = ?config.export.directory, "starting songqr");

    let session = Session::new(
        CollectionManager::new(),
        encoder,
        StatusLine::new(),
        DirectorySaver::new(&config.export.directory),
    );
    let mut controller = Controller::new(session);

    let mut app = App::new().context("Failed to set up terminal")?;
    app.run(&mut controller).context("Terminal UI failed")?;

    tracing::info!(songs = controller.session().collection().len(), "exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("songqr")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["--origin", "https://example.com", "--out-dir", "qr"])).unwrap();
        assert_eq!(options.origin.as_deref(), Some("https://example.com"));
        assert_eq!(options.out_dir, Some(PathBuf::from("qr")));
        assert!(!options.help);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--origin"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let options = parse_args(&args(&["--origin", "https://flag.example", "--out-dir", "out"])).unwrap();
        let config = load_config(&options).unwrap();
        assert_eq!(config.origin, "https://flag.example");
        assert_eq!(config.export.directory, PathBuf::from("out"));
    }
}
