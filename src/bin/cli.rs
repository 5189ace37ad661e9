// src/bin/cli.rs
use x86doc_scrape::{cli, error::ScrapeError, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let options = cli::parse_options();
    log::init(options.verbosity);

    match cli::run(&options) {
        Err(ScrapeError::SelfTest(missing)) => {
            eprintln!(
                "Tests do not pass ({} record(s) without a page). Not writing output. Aborting.",
                missing.len()
            );
            std::process::exit(3);
        }
        other => {
            other?;
            Ok(())
        }
    }
}
