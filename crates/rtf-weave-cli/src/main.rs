use anyhow::{Context, Result};
use rtf_weave_config::Config;
use rtf_weave_engine::{io, to_html};
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let (input, output) = match args.len() {
        2 => (PathBuf::from(&args[1]), None),
        3 => (PathBuf::from(&args[1]), Some(PathBuf::from(&args[2]))),
        _ => {
            eprintln!("Usage: {} <document.json> [output.html]", args[0]);
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::debug!(
                "no config file at {}; using defaults",
                Config::config_path().display()
            );
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let doc = io::read_document(&input)
        .with_context(|| format!("reading document {}", input.display()))?;
    let html = to_html(&doc, &config.render);

    let output = output.unwrap_or_else(|| config.output_path_for(&input));
    io::write_html(&output, &html).with_context(|| format!("writing {}", output.display()))?;
    log::info!("Wrote {} ({} bytes)", output.display(), html.len());

    Ok(())
}
