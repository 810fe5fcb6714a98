use crate::app::cli::Cli;
use crate::app::models::RawOptions;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults read from `config.toml`. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileDefaults {
    pub output: Option<String>,
    pub lib: Option<String>,
    pub inkscape: Option<String>,
    #[serde(default)]
    pub fix_fill_type: bool,
    #[serde(default)]
    pub no_update_check: bool,
}

fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("svg2vd").join("config.toml"))
}

/// Loads defaults from `explicit`, or from `~/.config/svg2vd/config.toml`.
/// Only the default location may be absent.
pub fn load_defaults(explicit: Option<&Path>) -> Result<FileDefaults> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file {:?} does not exist", path);
            }
            path.to_path_buf()
        }
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                log::debug!("No config file at {:?}, using built-in defaults", path);
                return Ok(FileDefaults::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    let defaults: FileDefaults = toml::from_str(&content)
        .context(format!("Failed to parse config at {:?}", config_path))?;

    log::debug!("Loaded defaults from {:?}: {:?}", config_path, defaults);
    Ok(defaults)
}

/// Command-line values win over file defaults; flags are enabled by either.
pub fn merge_options(cli: Cli, defaults: FileDefaults) -> RawOptions {
    RawOptions {
        input_file_mask: cli.input_file_mask,
        output_directory: cli.output_directory.or(defaults.output),
        library_name: cli.lib.or(defaults.lib),
        tool_path: cli.inkscape.or(defaults.inkscape),
        fix_fill_type: cli.fix_fill_type || defaults.fix_fill_type,
        skip_update_check: cli.no_update_check || defaults.no_update_check,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
output = "res/drawable"
lib = "android-support"
inkscape = "/opt/inkscape/bin/inkscape"
fix_fill_type = true
no_update_check = true
"#,
        );

        let defaults = load_defaults(Some(&path)).unwrap();

        assert_eq!(defaults.output.as_deref(), Some("res/drawable"));
        assert_eq!(defaults.lib.as_deref(), Some("android-support"));
        assert_eq!(
            defaults.inkscape.as_deref(),
            Some("/opt/inkscape/bin/inkscape")
        );
        assert!(defaults.fix_fill_type);
        assert!(defaults.no_update_check);
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");

        assert_eq!(load_defaults(Some(&path)).unwrap(), FileDefaults::default());
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_defaults(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "libs = \"android-support\"\n");

        assert!(load_defaults(Some(&path)).is_err());
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "lib = \n");

        let err = load_defaults(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli::parse_from([
            "svg2vd",
            "-i",
            "icons/*.svg",
            "-o",
            "cli-out",
            "--lib",
            "appcompat",
        ]);
        let defaults = FileDefaults {
            output: Some("file-out".to_string()),
            lib: Some("android-support".to_string()),
            inkscape: Some("/opt/inkscape".to_string()),
            fix_fill_type: true,
            no_update_check: false,
        };

        let raw = merge_options(cli, defaults);

        assert_eq!(raw.input_file_mask, "icons/*.svg");
        assert_eq!(raw.output_directory.as_deref(), Some("cli-out"));
        assert_eq!(raw.library_name.as_deref(), Some("appcompat"));
        assert_eq!(raw.tool_path.as_deref(), Some("/opt/inkscape"));
        assert!(raw.fix_fill_type);
        assert!(!raw.skip_update_check);
    }

    #[test]
    fn test_merge_without_file() {
        let cli = Cli::parse_from(["svg2vd", "-i", "*.svg", "--no-update-check"]);

        let raw = merge_options(cli, FileDefaults::default());

        assert_eq!(
            raw,
            RawOptions {
                input_file_mask: "*.svg".to_string(),
                skip_update_check: true,
                ..Default::default()
            }
        );
    }
}
