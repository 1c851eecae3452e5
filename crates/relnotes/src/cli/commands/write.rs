//! Write command

use std::path::Path;

use clap::Args;
use tracing::info;

use relnotes_changelog::{ChangelogGenerator, Classifier, ClassifierConfig, WriteTarget};
use relnotes_core::config::load_config_or_default;

use super::{emit, read_log, LogArgs};
use crate::cli::Cli;

/// Group commit lines by prefix with capitalized entries.
///
/// Lines matching no prefix go to the `--other` section, or are dropped
/// when no such section is configured.
#[derive(Debug, Args)]
pub struct WriteCommand {
    #[command(flatten)]
    pub log: LogArgs,

    /// Section collecting every other commit line
    #[arg(long, value_name = "TITLE", env = "RELNOTES_OTHER_SECTION")]
    pub other: Option<String>,

    /// Only print the release notes, never write the file
    #[arg(long, env = "RELNOTES_READ_ONLY")]
    pub read_only: bool,
}

impl WriteCommand {
    /// Execute the write command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            version = ?self.log.version_code,
            read_only = self.read_only,
            "executing write command"
        );
        let cwd = std::env::current_dir()?;
        // Rejects a run with neither prefixes nor an extra section before any input is read
        let (generator, target) = self.prepare(&cwd)?;

        let raw = read_log(&self.log.input)?;
        let run = generator.run(&raw, &target)?;

        emit(cli, &run)
    }

    /// Build the generator and write target from flags and the config found from `cwd`
    fn prepare(&self, cwd: &Path) -> anyhow::Result<(ChangelogGenerator, WriteTarget)> {
        let (config, _) = load_config_or_default(cwd)?;
        let changelog = &config.changelog;

        let catch_all = self.other.clone().or_else(|| changelog.catch_all.clone());
        let classifier_config =
            ClassifierConfig::sectioned(self.log.resolve_prefixes(changelog), catch_all)
                .with_entry_case(self.log.resolve_entry_case(changelog));
        let generator = ChangelogGenerator::new(Classifier::new(classifier_config)?);

        let target = WriteTarget::new(
            cwd.join(self.log.resolve_dir(changelog)),
            self.log.version_code.clone(),
        )
        .read_only(self.read_only);
        Ok((generator, target))
    }
}
