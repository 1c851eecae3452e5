//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::info;

use relnotes_core::config::defaults::{DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_YAML};
use relnotes_core::config::Config;

use crate::cli::{output, Cli};

/// Create a relnotes configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, "executing init command");
        let cwd = std::env::current_dir()?;
        let format = if self.yes {
            "yaml"
        } else {
            let formats = vec!["yaml", "toml"];
            let selection = Select::new()
                .with_prompt("Configuration format")
                .items(&formats)
                .default(0)
                .interact()?;
            formats[selection]
        };
        let config_path = resolve_path(self.output.clone(), &cwd, format);

        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let content = render_template(format)?;
        std::fs::write(&config_path, &content)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path_style().apply_to(config_path.display())
            ));
            println!();
            println!("Next steps:");
            println!("  1. Edit {} to list your commit prefixes", config_path.display());
            println!("  2. Run {} to verify your setup", style("relnotes validate").cyan());
            println!(
                "  3. Run {}",
                style("git log --format=%B <tag>..HEAD | relnotes write --version-code <code>")
                    .cyan()
            );
        }

        Ok(())
    }
}

/// File the template is written to; a `.yaml` name follows a toml choice
fn resolve_path(output: Option<PathBuf>, cwd: &Path, format: &str) -> PathBuf {
    let path = output.unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_YAML));
    if format == "toml" && path.extension().is_some_and(|e| e == "yaml") {
        path.with_extension("toml")
    } else {
        path
    }
}

/// Default configuration in the chosen format
fn render_template(format: &str) -> anyhow::Result<String> {
    if format == "toml" {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE)?;
        Ok(toml::to_string_pretty(&config)?)
    } else {
        Ok(DEFAULT_CONFIG_TEMPLATE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use relnotes_core::EntryCase;
    use tempfile::TempDir;

    #[test]
    fn test_toml_template_matches_yaml() {
        let yaml: Config = serde_yaml::from_str(&render_template("yaml").unwrap()).unwrap();
        let toml: Config = toml::from_str(&render_template("toml").unwrap()).unwrap();

        assert_eq!(yaml.changelog.prefixes, toml.changelog.prefixes);
        assert_eq!(yaml.changelog.catch_all, toml.changelog.catch_all);
        assert_eq!(toml.changelog.entry_case, Some(EntryCase::Capitalize));
    }

    #[test]
    fn test_existing_toml_is_checked_before_writing() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("relnotes.toml"), "[changelog]\n").unwrap();

        let path = resolve_path(None, temp.path(), "toml");
        assert_eq!(path, temp.path().join("relnotes.toml"));
        assert!(path.exists());

        let cmd = InitCommand {
            force: false,
            yes: true,
            output: Some(path.clone()),
        };
        let cli = Cli::try_parse_from(["relnotes", "--quiet", "init"]).unwrap();
        assert!(cmd.execute(&cli).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[changelog]\n");
    }

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/repo");
        assert_eq!(resolve_path(None, cwd, "yaml"), cwd.join("relnotes.yaml"));
        assert_eq!(resolve_path(None, cwd, "toml"), cwd.join("relnotes.toml"));
        assert_eq!(
            resolve_path(Some(PathBuf::from("conf/notes.yaml")), cwd, "toml"),
            PathBuf::from("conf/notes.toml")
        );
        assert_eq!(
            resolve_path(Some(PathBuf::from("notes.toml")), cwd, "yaml"),
            PathBuf::from("notes.toml")
        );
    }
}
