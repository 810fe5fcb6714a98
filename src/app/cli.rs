use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "svg2vd",
    author,
    version,
    about = "Convert SVG files to Android VectorDrawable XML",
    after_help = "If a file does not convert correctly, please open an issue describing the steps \
                  to reproduce it and attach a link to the SVG file if you can."
)]
pub struct Cli {
    /// Input file mask with optional directory, e.g. 'icons/*.svg'.
    /// Without a directory the current directory is used.
    #[arg(short = 'i', long = "input", value_name = "MASK")]
    pub input_file_mask: String,

    /// Output directory. Defaults to the input directory
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output_directory: Option<String>,

    /// Library to generate drawables for. Omit to target Android 5.0+ natively
    #[arg(long, value_name = "NAME")]
    pub lib: Option<String>,

    /// Path to the Inkscape executable, when it is not in a standard location
    #[arg(long, value_name = "PATH")]
    pub inkscape: Option<String>,

    /// Experimental
    #[arg(long)]
    pub fix_fill_type: bool,

    /// Skip the daily check for a newer converter version
    #[arg(long)]
    pub no_update_check: bool,

    /// Read defaults from this TOML file instead of ~/.config/svg2vd/config.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
