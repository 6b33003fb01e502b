// examfeed - exam calendar feed cleaner
// Fetches the configured ICS feed, keeps exam-related events and prints
// the cleaned calendar to stdout

use examfeed::config::Config;
use examfeed::pipeline;
use examfeed::utils::logging;
use log::error;

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    match pipeline::run(&config).await {
        Ok(ics_output) => {
            println!("{}", ics_output);
        }
        Err(e) => {
            logging::log_error_with_context(&e, "feed cleanup");
            std::process::exit(1);
        }
    }
}
