use crate::app::models::ResolvedConfig;
use pathdiff::diff_paths;
use std::path::{Component, Path};

pub struct ReportFormatter;

impl ReportFormatter {
    /// One `key: value` line per resolved setting.
    pub fn render(config: &ResolvedConfig, cwd: &Path) -> String {
        let tool = match &config.tool_path {
            Some(path) => path.display().to_string(),
            None => "<not found>".to_string(),
        };

        let lines = [
            ("input", Self::display_path(&config.input_directory, cwd)),
            ("mask", config.input_mask.clone()),
            ("pattern", config.input_pattern.clone()),
            ("output", Self::display_path(&config.output_directory, cwd)),
            ("template", config.template_path.display().to_string()),
            ("inkscape", tool),
            ("fix fill type", Self::yes_no(config.fix_fill_type)),
            ("update check", Self::yes_no(!config.skip_update_check)),
        ];

        let mut output = String::new();
        for (key, value) in lines {
            output.push_str(&format!("{:<16}{}\n", format!("{}:", key), value));
        }

        output.trim_end().to_string()
    }

    /// Appends the cwd-relative form for paths under `cwd`.
    fn display_path(path: &Path, cwd: &Path) -> String {
        let shown = path.display().to_string();
        if !path.is_absolute() {
            return shown;
        }

        match diff_paths(path, cwd) {
            Some(relative) if Self::is_below(&relative) => {
                format!("{} (./{})", shown, relative.display())
            }
            _ => shown,
        }
    }

    fn is_below(relative: &Path) -> bool {
        relative.components().next().is_some()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
    }

    fn yes_no(flag: bool) -> String {
        let word = if flag { "yes" } else { "no" };
        word.to_string()
    }
}
