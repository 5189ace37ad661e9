// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::consts::DEFAULT_INPUT_DIR;
use crate::config::{Curation, Emit, ScrapeOptions};
use crate::error::ScrapeError;
use crate::file::Corpus;
use crate::index;
use crate::instruction::Instruction;
use crate::progress::Progress;
use crate::scrape::{self, Assembly};

#[derive(Parser, Debug)]
#[command(name = "x86doc", version)]
#[command(about = "Docenizes the HTML version of the official Intel x86 reference")]
pub struct Args {
    /// Folder where the input .html pages reside (searched recursively)
    #[arg(short = 'i', long = "inputfolder", default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Index to print on stdout once the self-test passes (repeatable)
    #[arg(long, value_enum)]
    pub emit: Vec<Emit>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<Args> for ScrapeOptions {
    fn from(args: Args) -> Self {
        Self { input_dir: args.input, emit: args.emit, verbosity: args.verbose }
    }
}

pub fn parse_options() -> ScrapeOptions {
    Args::parse().into()
}

/// Progress sink that reports through the log.
#[derive(Default)]
struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }
    fn item_done(&mut self, id: &str) {
        self.done += 1;
        if self.done % 250 == 0 {
            logd!("{}/{} pages (last: {id})", self.done, self.total);
        }
    }
}

/// Scan, assemble, self-test, then hand each chosen index to the serializer.
///
/// The corpus is parsed once however many projections are requested.
/// A failing self-test returns [`ScrapeError::SelfTest`] and emits nothing.
pub fn run(options: &ScrapeOptions) -> Result<Assembly, ScrapeError> {
    logf!("Called with: {options:?}");
    let corpus = Corpus::scan(&options.input_dir)?;
    if corpus.is_empty() {
        logw!("No .html pages under {}", corpus.root().display());
    }
    let curation = Curation::builtin();

    let mut progress = LogProgress::default();
    let assembly = scrape::assemble(corpus.entries(), &curation, Some(&mut progress));
    if !assembly.is_clean() {
        logw!(
            "{} page(s) skipped, {} record(s) with overlapping variants",
            assembly.skipped.len(),
            assembly.collisions.len()
        );
    }

    scrape::self_test(&assembly.records, corpus.entries()).into_result()?;

    logf!("Writing {} instructions", assembly.records.len());
    let mut stdout = io::stdout().lock();
    for &what in &options.emit {
        emit(what, &assembly.records, &mut stdout)?;
    }
    Ok(assembly)
}

/// Serialize one projection as a line-terminated JSON document: compact
/// autocomplete, pretty full list.
pub fn emit<W: Write>(what: Emit, records: &[Instruction], out: &mut W) -> Result<(), ScrapeError> {
    match what {
        Emit::Autocomplete => serde_json::to_writer(&mut *out, &index::autocomplete(records))?,
        Emit::Full => serde_json::to_writer_pretty(&mut *out, &index::full(records))?,
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
