use clap::Parser;
use dotenv::dotenv;
use lightdiff::utils::init_logging;
use lightdiff::{run_comparison_process, Config, Params};
use log::error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // .env has to be loaded before clap reads env-backed flags
    dotenv().ok();
    let params = Params::parse();
    init_logging(params.verbose);

    let config = match Config::from_params(params) {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run_comparison_process(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
