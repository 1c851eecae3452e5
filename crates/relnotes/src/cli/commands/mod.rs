//! CLI commands

mod generate;
mod init;
mod validate;
mod write;

pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use validate::ValidateCommand;
pub use write::WriteCommand;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use tracing::debug;

use relnotes_changelog::{ChangelogOutput, EntryCase};
use relnotes_core::ChangelogConfig;

use crate::cli::{output, Cli, OutputFormat};

/// Arguments shared by the commands that build release notes
#[derive(Debug, Args)]
pub struct LogArgs {
    /// File holding the commit messages (`-` reads stdin)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Comma separated prefixes to group in the changelog
    #[arg(
        short,
        long = "prefixes",
        value_name = "PREFIXES",
        value_delimiter = ',',
        env = "RELNOTES_PREFIXES"
    )]
    pub prefix_list: Option<Vec<String>>,

    /// Directory to write `<VERSION_CODE>.txt` into
    #[arg(long, value_name = "DIR", env = "RELNOTES_CHANGELOG_DIR")]
    pub changelog_dir: Option<PathBuf>,

    /// Version code used to name the file; nothing is written without it
    #[arg(long, value_name = "VERSION_CODE", env = "RELNOTES_VERSION_CODE")]
    pub version_code: Option<String>,

    /// Casing of entries
    #[arg(long, value_enum)]
    pub entry_case: Option<CaseArg>,
}

impl LogArgs {
    /// Prefixes given on the command line, trimmed, blanks dropped
    pub fn prefixes(&self) -> Option<Vec<String>> {
        self.prefix_list.as_ref().map(|list| {
            list.iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect()
        })
    }

    /// Command line prefixes, falling back to the config file
    pub fn resolve_prefixes(&self, config: &ChangelogConfig) -> Vec<String> {
        self.prefixes().unwrap_or_else(|| config.prefixes.clone())
    }

    /// Command line directory, falling back to the config file
    pub fn resolve_dir(&self, config: &ChangelogConfig) -> PathBuf {
        self.changelog_dir
            .clone()
            .unwrap_or_else(|| config.dir.clone())
    }

    /// Command line casing, falling back to the config file
    pub fn resolve_entry_case(&self, config: &ChangelogConfig) -> Option<EntryCase> {
        self.entry_case.map(EntryCase::from).or(config.entry_case)
    }
}

/// Entry casing as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseArg {
    /// Keep entries as written
    Preserve,
    /// Uppercase the first letter, lowercase the rest
    Capitalize,
}

impl From<CaseArg> for EntryCase {
    fn from(value: CaseArg) -> Self {
        match value {
            CaseArg::Preserve => EntryCase::Preserve,
            CaseArg::Capitalize => EntryCase::Capitalize,
        }
    }
}

/// Read the commit log from a file, or stdin for `-`
pub fn read_log(input: &Path) -> anyhow::Result<String> {
    let raw = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };
    debug!(input = %input.display(), len = raw.len(), "commit log read");
    Ok(raw)
}

/// Print a generate run in the requested format
pub fn emit(cli: &Cli, run: &ChangelogOutput) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(run)?);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                print!("{}", run.notes);
            }
            if let Some(path) = &run.written {
                if !cli.quiet {
                    output::success(&format!(
                        "Written release notes to {}",
                        output::path_style().apply_to(path.display())
                    ));
                }
            }
        }
    }
    Ok(())
}
