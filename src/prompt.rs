//! Interactive folder prompt and home-directory expansion.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use yansi::Paint;

use crate::cli::OutputFormat;

/// What the user answered at the folder prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// An existing directory, already expanded.
    Folder(PathBuf),
    /// The user typed `q`/`quit`, or input ended.
    Quit,
}

/// Stream the prompt is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStream {
    /// Standard output, next to the text report.
    Stdout,
    /// Standard error, away from a JSON report.
    Stderr,
}

impl PromptStream {
    /// Keep stdout clean when it carries a JSON report.
    #[must_use]
    pub fn for_output(output: OutputFormat) -> Self {
        match output {
            OutputFormat::Text => Self::Stdout,
            OutputFormat::Json => Self::Stderr,
        }
    }

    /// Open the selected stream.
    #[must_use]
    pub fn writer(self) -> Box<dyn Write> {
        match self {
            Self::Stdout => Box::new(io::stdout()),
            Self::Stderr => Box::new(io::stderr()),
        }
    }
}

/// Expand a leading `~` component to the user's home directory.
///
/// Paths without a leading `~`, and `~user` forms, are returned unchanged.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match BaseDirs::new() {
            Some(dirs) => dirs.home_dir().join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Ask for a folder until a valid directory is given or the user quits.
///
/// # Errors
///
/// Propagates read or write failures on the given streams.
pub fn read_folder<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<PromptOutcome> {
    let mut line = String::new();

    loop {
        write!(
            output,
            "\n{} (or 'q' to quit)\n",
            ">> Enter folder to organize:".blue().bold()
        )?;
        output.flush()?;

        String::clear(&mut line);
        if input.read_line(&mut line)? == 0 {
            return Ok(PromptOutcome::Quit);
        }

        let answer = line.trim();
        if matches!(answer.to_lowercase().as_str(), "q" | "quit") {
            writeln!(output, "\nGoodbye\n")?;
            return Ok(PromptOutcome::Quit);
        }

        let folder = expand_home(Path::new(answer));
        if !answer.is_empty() && folder.is_dir() {
            return Ok(PromptOutcome::Folder(folder));
        }

        writeln!(
            output,
            "\n{} {} {}",
            "Folder".red().bold(),
            answer.blue(),
            "is invalid, try again".red().bold()
        )?;
    }
}
