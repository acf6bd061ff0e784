use clap::Parser;
use std::error::Error;
use subnet_planner::cli::Cli;
use subnet_planner::config::Config;
use subnet_planner::run;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let mut config = Config::from_env();
    cli.apply(&mut config);

    log4rs::init_file(&config.log_config, Default::default()).map_err(|e| {
        format!(
            "Error initializing log4rs from {}: {e}",
            config.log_config.display()
        )
    })?;
    log::info!("#Start main()");

    run(&cli, &config)
}
