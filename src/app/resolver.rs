use crate::app::locator::ToolLocator;
use crate::app::models::{RawOptions, ResolvedConfig, ResolverContext};
use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::path::{is_separator, Component, Path, PathBuf};

const TEMPLATE_BASE_NAME: &str = "BlankVectorDrawable";
const TEMPLATE_EXTENSION: &str = "xml";
const INPUT_EXTENSION: &str = "svg";

/// Derives the effective configuration from raw options.
///
/// Every accessor is computed from scratch on each call: no value is
/// cached, and the only side effects are the filesystem probes made by
/// the locator when no tool path was given.
pub struct ConfigResolver<'a, L> {
    raw: &'a RawOptions,
    context: &'a ResolverContext,
    locator: L,
}

impl<'a, L: ToolLocator> ConfigResolver<'a, L> {
    pub fn new(raw: &'a RawOptions, context: &'a ResolverContext, locator: L) -> Self {
        Self {
            raw,
            context,
            locator,
        }
    }

    /// Absolute directory part of the input mask, or the current directory.
    pub fn input_directory(&self) -> PathBuf {
        let (dir, _) = split_mask(&self.raw.input_file_mask);
        if dir.is_empty() {
            return self.context.current_dir.clone();
        }
        absolutize(&self.context.current_dir, Path::new(dir))
    }

    /// File name part of the input mask without its extension; `*` when empty.
    pub fn input_mask(&self) -> String {
        let (_, file_name) = split_mask(&self.raw.input_file_mask);
        match strip_extension(file_name) {
            "" => "*".to_string(),
            stem => stem.to_string(),
        }
    }

    /// Glob applied to file names inside `input_directory`.
    pub fn input_pattern(&self) -> String {
        format!("{}.{}", self.input_mask(), INPUT_EXTENSION)
    }

    /// Matcher for `input_pattern` where only `*` and `?` are wildcards.
    pub fn input_matcher(&self) -> Result<GlobMatcher> {
        let pattern = wildcard_glob(&self.input_pattern());
        let glob = GlobBuilder::new(&pattern)
            .backslash_escape(false)
            .build()
            .context(format!("Invalid input mask: {}", pattern))?;
        Ok(glob.compile_matcher())
    }

    pub fn output_directory(&self) -> PathBuf {
        match non_empty(&self.raw.output_directory) {
            Some(dir) => PathBuf::from(dir),
            None => {
                log::debug!("No output directory given, writing next to the inputs");
                self.input_directory()
            }
        }
    }

    /// `BlankVectorDrawable[.<lib>].xml` inside the installation directory.
    pub fn template_resource_path(&self) -> PathBuf {
        let file_name = match non_empty(&self.raw.library_name) {
            Some(lib) => format!("{}.{}.{}", TEMPLATE_BASE_NAME, lib, TEMPLATE_EXTENSION),
            None => format!("{}.{}", TEMPLATE_BASE_NAME, TEMPLATE_EXTENSION),
        };
        self.context.app_dir.join(file_name)
    }

    /// Configured Inkscape path, else whatever the locator finds right now.
    pub fn external_tool_path(&self) -> Option<PathBuf> {
        match non_empty(&self.raw.tool_path) {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                log::debug!("No Inkscape path configured, searching the host");
                self.locator.locate()
            }
        }
    }

    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            input_directory: self.input_directory(),
            input_mask: self.input_mask(),
            input_pattern: self.input_pattern(),
            output_directory: self.output_directory(),
            template_path: self.template_resource_path(),
            tool_path: self.external_tool_path(),
            fix_fill_type: self.raw.fix_fill_type,
            skip_update_check: self.raw.skip_update_check,
        }
    }
}

/// Empty strings count as unset.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Escapes every glob metacharacter except `*` and `?`.
fn wildcard_glob(mask: &str) -> String {
    let mut glob = String::new();
    let mut literal = String::new();
    for c in mask.chars() {
        if c == '*' || c == '?' {
            glob.push_str(&globset::escape(&literal));
            literal.clear();
            glob.push(c);
        } else {
            literal.push(c);
        }
    }
    glob.push_str(&globset::escape(&literal));
    glob
}

/// Splits a mask into directory and file name at the last separator.
/// A leading separator stays with the directory so `/icon.svg` keeps the root,
/// but a bare root has no directory part.
pub fn split_mask(mask: &str) -> (&str, &str) {
    match mask.rfind(is_separator) {
        Some(0) if mask.len() == 1 => ("", ""),
        Some(0) => (&mask[..1], &mask[1..]),
        Some(idx) => (&mask[..idx], &mask[idx + 1..]),
        None => ("", mask),
    }
}

pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

/// Joins `path` onto `base` when relative, then collapses `.` and `..`
/// without touching the filesystem. `..` never climbs above the root.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
