// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod locator;
pub mod models;
pub mod resolver;

use anyhow::Result;
use clap::Parser;

use self::cli::Cli;
use self::config::{load_defaults, merge_options};
use self::formatter::ReportFormatter;
use self::locator::InkscapeLocator;
use self::models::ResolverContext;
use self::resolver::ConfigResolver;

/// Parses arguments, resolves the configuration and reports it.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Merge with config file defaults
    let defaults = load_defaults(args.config.as_deref())?;
    let raw = merge_options(args, defaults);

    // 3. Resolve
    let context = ResolverContext::from_process()?;
    let resolver = ConfigResolver::new(&raw, &context, InkscapeLocator::for_host());
    if let Err(err) = resolver.input_matcher() {
        log::warn!("{:#}", err);
    }
    let config = resolver.resolve();

    // Problems the later stages would fail on, surfaced early
    if !config.input_directory.is_dir() {
        log::warn!(
            "Input directory {} does not exist",
            config.input_directory.display()
        );
    }
    if !config.template_path.is_file() {
        log::warn!(
            "Template {} not found; check the --lib value",
            config.template_path.display()
        );
    }
    if let Err(err) = config.require_tool_path() {
        log::warn!("{}", err);
    }

    // 4. Print to Stdout
    println!("{}", ReportFormatter::render(&config, &context.current_dir));

    Ok(())
}
