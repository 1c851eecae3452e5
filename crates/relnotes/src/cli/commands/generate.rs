//! Generate command

use std::path::Path;

use clap::Args;
use tracing::{info, warn};

use relnotes_changelog::{ChangelogGenerator, Classifier, ClassifierConfig, WriteTarget};
use relnotes_core::config::load_config_or_default;

use super::{emit, read_log, LogArgs};
use crate::cli::Cli;

/// Group commit lines by prefix; every other line lands under "Other"
#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub log: LogArgs,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = ?self.log.version_code, "executing generate command");
        let cwd = std::env::current_dir()?;
        let (generator, target) = self.prepare(&cwd)?;

        let raw = read_log(&self.log.input)?;
        let run = generator.run(&raw, &target)?;

        emit(cli, &run)
    }

    /// Build the generator and write target from flags and the config found from `cwd`
    fn prepare(&self, cwd: &Path) -> anyhow::Result<(ChangelogGenerator, WriteTarget)> {
        let (config, _) = load_config_or_default(cwd)?;
        let changelog = &config.changelog;

        if let Some(catch_all) = &changelog.catch_all {
            warn!(
                catch_all = %catch_all,
                "changelog.catch_all only applies to `write`; unmatched lines go under \"Other\""
            );
        }

        let classifier_config = ClassifierConfig::grouped(self.log.resolve_prefixes(changelog))
            .with_entry_case(self.log.resolve_entry_case(changelog));
        let generator = ChangelogGenerator::new(Classifier::new(classifier_config)?);

        let target = WriteTarget::new(
            cwd.join(self.log.resolve_dir(changelog)),
            self.log.version_code.clone(),
        );
        Ok((generator, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use clap::Parser;
    use tempfile::TempDir;

    fn generate_command(args: &[&str]) -> GenerateCommand {
        let argv = ["relnotes", "generate"].iter().chain(args).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Generate(cmd) => cmd,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    fn project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("relnotes.yaml"), config).unwrap();
        temp
    }

    #[test]
    fn test_config_prefixes_and_dir_used() {
        let temp = project("changelog:\n  prefixes: [fixed, added]\n  dir: notes\n");
        std::fs::create_dir(temp.path().join("notes")).unwrap();

        let (generator, target) = generate_command(&["--version-code", "7"])
            .prepare(temp.path())
            .unwrap();
        let run = generator
            .run("Fixed crash\nadded search\nbump deps\n", &target)
            .unwrap();

        assert_eq!(
            run.notes,
            "<u>Fixed</u>\ncrash\n\n<u>Added</u>\nsearch\n\n<u>Other</u>\nbump deps\n\n"
        );
        assert_eq!(run.written, Some(temp.path().join("notes").join("7.txt")));
    }

    #[test]
    fn test_config_catch_all_not_used() {
        let temp = project("changelog:\n  prefixes: [fixed]\n  catch_all: misc\n");

        let (generator, _) = generate_command(&[]).prepare(temp.path()).unwrap();
        let sections = generator.generate("Fixed crash\nbump deps\n").unwrap();

        assert_eq!(sections.titles(), vec!["Fixed", "Other"]);
        assert_eq!(sections.get("Other").unwrap(), &["bump deps".to_string()]);
    }

    #[test]
    fn test_other_prefix_from_command_line() {
        let temp = project("changelog:\n  prefixes: [fixed]\n");

        let (generator, _) = generate_command(&["--prefixes", "fixed,other"])
            .prepare(temp.path())
            .unwrap();
        let notes = generator
            .generate_formatted("other: cleanup\nmisc line\n")
            .unwrap();

        assert_eq!(notes, "<u>Other</u>\n: cleanup\nmisc line\n\n");
    }
}
