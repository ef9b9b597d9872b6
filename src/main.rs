#[macro_use]
extern crate log;

use lorem_autotyper::{run, Config, RunOutcome};

#[async_std::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::default();

    // errors are already reported to the user; the process still exits cleanly
    match run(&config).await {
        RunOutcome::NothingToWrite => debug!("nothing was written"),
        RunOutcome::Finished { report, .. } => debug!(
            "wrote {} chunks ({} chars)",
            report.chunks_written, report.chars_written
        ),
        RunOutcome::Failed { error, .. } => {
            warn!("session stopped early: {:?}", error);
        }
    }
}
