//! CLI entry point for themegen.

mod cli;

use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use themegen::build_info::startup_metadata_line;
use themegen::config::{apply_output_overrides, load_config_with_source};
use themegen::error::GenerateError;
use themegen::generate::{generate, GenerateOptions};
use themegen::render::Renderer;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();
    init_tracing(&args);
    let code = run(&args);
    std::process::exit(code);
}

fn init_tracing(args: &cli::Args) {
    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: &cli::Args) -> i32 {
    debug!(build = %startup_metadata_line(), "starting themegen");
    let renderer = Renderer::new(!args.no_color && io::stderr().is_terminal());

    // Load config.
    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            renderer.error(&GenerateError::from(e).to_string());
            return 1;
        }
    };
    match &loaded.source_path {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => debug!("no config file found; using defaults"),
    }
    let mut config = loaded.config;

    // Apply CLI overrides.
    if let Err(e) = apply_output_overrides(
        &mut config,
        args.constructor.as_deref(),
        args.theme_type.as_deref(),
        args.colors_type.as_deref(),
    ) {
        renderer.error(&GenerateError::from(e).to_string());
        return 1;
    }

    let input: PathBuf = args
        .input
        .clone()
        .unwrap_or_else(|| config.input.path.clone());
    let options = GenerateOptions {
        emit: config.emit_options(),
        invert: args.invert,
    };

    let result = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        generate(&input, &options, &mut out)
    };
    match result {
        Ok(theme) => {
            if args.preview {
                renderer.preview(&theme);
            }
            0
        }
        Err(e) => {
            renderer.error(&e.to_string());
            1
        }
    }
}
