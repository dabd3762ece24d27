use std::io::{stderr, stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use clap_verbosity_flag::{log::LevelFilter, Verbosity};
use deck::tour::{Section, Tour};
use tracing::debug;
use tracing_log::AsTrace;

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"), version, long_about = None)]
/// Show a double-ended queue at work as browser history, a stack of plates and a pancake stack
struct Command {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Section to show; repeat for more, default is all of them
    #[arg(short, long = "section", value_name = "SECTION")]
    sections: Vec<Section>,

    /// Page visited while browsing; repeat for more
    #[arg(long = "page", value_name = "URL")]
    pages: Vec<String>,

    /// Page ended up on after going back
    #[arg(long, value_name = "URL")]
    detour: Option<String>,

    /// Plate put on the stack; repeat for more
    #[arg(long = "plate", value_name = "NAME")]
    plates: Vec<String>,

    /// Number of pancakes in the pancake stack
    #[arg(long, value_name = "COUNT")]
    pancakes: Option<usize>,
}

impl Command {
    /// Build the tour, keeping the defaults for anything left unset.
    fn tour(&self) -> Tour {
        let mut tour = Tour::default().sections(self.sections.iter().copied());
        if !self.pages.is_empty() {
            tour = tour.pages(&self.pages);
        }
        if let Some(page) = &self.detour {
            tour = tour.detour(page);
        }
        if !self.plates.is_empty() {
            tour = tour.plates(&self.plates);
        }
        if let Some(count) = self.pancakes {
            tour = tour.pancakes(count);
        }
        tour
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Command::parse();

    let level = args.verbosity.log_level_filter();
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(level > LevelFilter::Info)
        .without_time()
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(level.as_trace())
        .with_writer(stderr)
        .init();

    let tour = args.tour();
    debug!(?tour, "starting tour");

    let mut out = stdout().lock();
    match tour.render(&mut out) {
        Ok(()) => {
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("deck-tour: error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
