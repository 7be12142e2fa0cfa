use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use invertrix_core::{discover_inputs, RunConfig};

mod app;
mod logging;
mod terminal;

use app::RunOutcome;
use logging::DeferredStderr;
use terminal::CrosstermTerminal;

#[derive(Parser, Debug)]
#[command(name = "invertrix")]
#[command(version, about = "Flip PNG images vertically, horizontally or both", long_about = None)]
struct Cli {
    /// Folder to read PNG images from
    #[arg(short, long, value_name = "DIR")]
    input: Option<PathBuf>,

    /// Folder to write flipped images to
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Number of parallel threads for the batch
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig::new(self.input.clone(), self.output.clone())
    }
}

fn main() -> Result<()> {
    let log_sink = DeferredStderr::default();
    log_sink.init_logger();

    let cli = Cli::parse();
    let config = cli.run_config();

    if let Some(num_threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let files = discover_inputs(&config.input_dir)?;
    log::info!(
        "Found {} image(s) in {}",
        files.len(),
        config.input_dir.display()
    );

    let outcome = {
        // Declared first so it drops last, after the screen is restored
        let _held_log = log_sink.hold();
        let mut terminal = CrosstermTerminal::enter().context("Failed to set up terminal")?;
        app::run(&config, &files, &mut terminal)?
        // terminal restored, then held log records flushed
    };

    match outcome {
        RunOutcome::Aborted => std::process::exit(0),
        RunOutcome::Completed(report) => {
            for failure in &report.failures {
                eprintln!("{}", failure.error);
            }
            app::finish(&report)
        }
    }
}
