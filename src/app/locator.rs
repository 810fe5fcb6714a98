use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Finds the external converter application when no path was configured.
pub trait ToolLocator {
    fn locate(&self) -> Option<PathBuf>;
}

impl<F> ToolLocator for F
where
    F: Fn() -> Option<PathBuf>,
{
    fn locate(&self) -> Option<PathBuf> {
        self()
    }
}

/// Probes well-known Inkscape install locations, then `PATH`.
/// Nothing is cached, every `locate` call probes again.
#[derive(Debug, Clone)]
pub struct InkscapeLocator {
    candidates: Vec<PathBuf>,
    search_path: Option<OsString>,
    program: &'static str,
}

impl InkscapeLocator {
    pub fn new(
        candidates: Vec<PathBuf>,
        search_path: Option<OsString>,
        program: &'static str,
    ) -> Self {
        Self {
            candidates,
            search_path,
            program,
        }
    }

    pub fn for_host() -> Self {
        Self::new(host_candidates(), env::var_os("PATH"), host_program())
    }

    fn search_path_dirs(&self) -> Vec<PathBuf> {
        match &self.search_path {
            Some(paths) => env::split_paths(paths).collect(),
            None => Vec::new(),
        }
    }
}

impl ToolLocator for InkscapeLocator {
    fn locate(&self) -> Option<PathBuf> {
        for candidate in &self.candidates {
            log::debug!("Probing for Inkscape at {}", candidate.display());
            if candidate.is_file() {
                return Some(candidate.clone());
            }
        }

        for dir in self.search_path_dirs() {
            let candidate = dir.join(self.program);
            log::debug!("Probing PATH entry {}", candidate.display());
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        None
    }
}

#[cfg(windows)]
fn host_program() -> &'static str {
    "inkscape.exe"
}

#[cfg(not(windows))]
fn host_program() -> &'static str {
    "inkscape"
}

#[cfg(windows)]
fn host_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    for var in ["ProgramFiles", "ProgramW6432", "ProgramFiles(x86)"] {
        if let Some(root) = env::var_os(var) {
            let root = PathBuf::from(root).join("Inkscape");
            candidates.push(root.join("bin").join("inkscape.exe"));
            candidates.push(root.join("inkscape.exe"));
        }
    }
    // ProgramFiles and ProgramW6432 usually point at the same directory
    let mut seen = std::collections::HashSet::new();
    candidates.retain(|path| seen.insert(path.clone()));
    candidates
}

#[cfg(target_os = "macos")]
fn host_candidates() -> Vec<PathBuf> {
    let bundle_paths = ["Contents/MacOS/inkscape", "Contents/Resources/bin/inkscape"];

    let mut roots = vec![PathBuf::from("/Applications")];
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join("Applications"));
    }

    roots
        .iter()
        .flat_map(|root| {
            bundle_paths
                .iter()
                .map(move |inner| root.join("Inkscape.app").join(inner))
        })
        .collect()
}

#[cfg(all(unix, not(target_os = "macos")))]
fn host_candidates() -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = [
        "/usr/bin/inkscape",
        "/usr/local/bin/inkscape",
        "/snap/bin/inkscape",
        "/var/lib/flatpak/exports/bin/org.inkscape.Inkscape",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".local/share/flatpak/exports/bin/org.inkscape.Inkscape"));
    }
    candidates
}

#[cfg(not(any(windows, unix)))]
fn host_candidates() -> Vec<PathBuf> {
    Vec::new()
}
