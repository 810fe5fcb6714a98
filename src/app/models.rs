use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Raw user input after merging CLI flags over config file defaults.
/// Never mutated once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub input_file_mask: String,
    pub output_directory: Option<String>,
    pub library_name: Option<String>,
    pub tool_path: Option<String>,
    pub fix_fill_type: bool,
    pub skip_update_check: bool,
}

/// Process-wide values the resolver reads instead of touching ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverContext {
    pub current_dir: PathBuf,
    /// Installation directory holding the template resources.
    pub app_dir: PathBuf,
}

impl ResolverContext {
    pub fn new(current_dir: impl Into<PathBuf>, app_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
            app_dir: app_dir.into(),
        }
    }

    /// Captures the working directory and the executable's directory.
    pub fn from_process() -> Result<Self> {
        let current_dir = env::current_dir().context("Failed to get current directory")?;
        let exe = env::current_exe().context("Failed to locate the running executable")?;
        let app_dir = exe
            .parent()
            .map(PathBuf::from)
            .context(format!("Executable path {:?} has no parent directory", exe))?;

        Ok(Self::new(current_dir, app_dir))
    }
}

/// Fully defaulted configuration handed to the conversion stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub input_directory: PathBuf,
    pub input_mask: String,
    pub input_pattern: String,
    pub output_directory: PathBuf,
    pub template_path: PathBuf,
    pub tool_path: Option<PathBuf>,
    pub fix_fill_type: bool,
    pub skip_update_check: bool,
}

impl ResolvedConfig {
    /// For the process-invocation stage, which cannot run without Inkscape.
    pub fn require_tool_path(&self) -> Result<&PathBuf> {
        self.tool_path
            .as_ref()
            .context("Inkscape not found. Install it or pass its location with --inkscape")
    }
}
