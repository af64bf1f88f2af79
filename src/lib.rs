//! dupesort - sort a folder by extension and set duplicates aside.
//!
//! Files directly inside a folder are moved into sub-folders named after
//! their extension. A file whose content (BLAKE3) matches one processed
//! earlier in the same run is moved to `Duplicates` instead.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod organizer;
pub mod output;
pub mod progress;
pub mod prompt;
pub mod scanner;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::ExitCode;
use crate::organizer::{validate_root, OrganizeStats, Organizer, Report};
use crate::output::{JsonOutput, TextOutput};
use crate::progress::Progress;
use crate::prompt::{PromptOutcome, PromptStream};

/// Run the application for parsed CLI arguments.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the folder is not a
/// directory, or organizing fails part way.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref())?.merge_cli(&cli);
    if !config.color {
        yansi::disable();
    }
    log::debug!("Effective configuration: {:?}", config);

    if cli.write_config {
        let path = cli
            .config
            .clone()
            .or_else(Config::default_path)
            .context("Could not determine a configuration path")?;
        config.save(&path)?;
        println!("Configuration written to {}", path.display());
        return Ok(ExitCode::Success);
    }

    let root = match resolve_root(&cli, config.output)? {
        Some(root) => root,
        None => return Ok(ExitCode::Success),
    };

    let mut organizer = Organizer::new(&root);
    if config.progress && !cli.quiet && config.output == OutputFormat::Text {
        organizer = organizer.with_progress_callback(Arc::new(Progress::new()));
    }

    let stats = organizer
        .organize()
        .with_context(|| format!("Failed to organize {}", root.display()))?;
    let report = organizer.report();

    let exit_code = if stats.processed_files == 0 {
        ExitCode::NothingToDo
    } else {
        ExitCode::Success
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &config, &root, &stats, &report, exit_code)?;
    out.flush()?;

    Ok(exit_code)
}

/// Folder to organize, from the CLI argument or the interactive prompt.
///
/// `None` means the user quit at the prompt. With JSON output the prompt
/// goes to stderr.
fn resolve_root(cli: &Cli, output: OutputFormat) -> Result<Option<PathBuf>> {
    match cli.path {
        Some(ref path) => {
            let root = prompt::expand_home(path);
            validate_root(&root)?;
            Ok(Some(root))
        }
        None => {
            let stdin = io::stdin();
            match prompt::read_folder(stdin.lock(), PromptStream::for_output(output).writer())
                .context("Failed to read folder from prompt")?
            {
                PromptOutcome::Folder(root) => Ok(Some(root)),
                PromptOutcome::Quit => Ok(None),
            }
        }
    }
}

fn write_report<W: Write>(
    out: &mut W,
    config: &Config,
    root: &std::path::Path,
    stats: &OrganizeStats,
    report: &Report,
    exit_code: ExitCode,
) -> Result<()> {
    match config.output {
        OutputFormat::Text => TextOutput::new(stats, report)
            .with_details(config.show_details)
            .write_to(out)
            .context("Failed to write report")?,
        OutputFormat::Json => JsonOutput::new(root, stats, report, exit_code)
            .write_to(out, true)
            .context("Failed to write JSON report")?,
    }
    Ok(())
}
