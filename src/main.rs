// src/main.rs

use std::env;
use std::process;

use log::{error, info};
use env_logger::Env;

use numutil::config::{NumUtilConfig, OutputFormat};
use numutil::demo;

fn main() {
    let loaded = NumUtilConfig::load();

    // Initialize the logger; NUMUTIL_LOG overrides the configured level
    let log_level = match &loaded {
        Ok(config) => config.log_level.clone(),
        Err(_) => "info".to_string(),
    };
    let log_env = Env::default()
        .filter_or("NUMUTIL_LOG", log_level)
        .write_style_or("NUMUTIL_LOG_STYLE", "auto");

    env_logger::Builder::from_env(log_env).init();

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    config.apply_args(&args);
    info!("Output: {:?}, strict: {}", config.output, config.strict);

    let report = demo::run(config.strict);
    match config.output {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                process::exit(1);
            }
        },
    }
}
