use cluster_subnet_config::output::render_summary;
use cluster_subnet_config::RawNetworkConfig;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::path::Path;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("Error initializing logging: {e}");
    }
    log::info!("#Start main()");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let raw = match std::env::args().nth(1) {
        Some(path) => RawNetworkConfig::from_file(path)?,
        None => {
            log::info!("No config file given, reading network config from environment");
            RawNetworkConfig::from_env()
        }
    };
    let config = raw.validate()?;

    print!("{}", render_summary(&config));
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}
