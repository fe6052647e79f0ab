//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// Rename CSS classes to the shortest possible names and drop dead rules
/// across a set of HTML and CSS files.
#[derive(Debug, Parser)]
#[command(name = "classrip", version, about)]
pub struct Cli {
    /// HTML file to include in the build unit (repeatable)
    #[arg(long = "html", value_name = "FILE", required = true)]
    pub html: Vec<PathBuf>,

    /// CSS file to include in the build unit (repeatable, bundled in order)
    #[arg(long = "css", value_name = "FILE")]
    pub css: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, value_name = "DIR", default_value = "dist")]
    pub out: PathBuf,

    /// File name of the CSS bundle inside the output directory
    #[arg(long, value_name = "NAME", default_value = "bundle.css")]
    pub bundle_name: String,

    /// TOML configuration file
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minify the bundle with lightningcss
    #[arg(long)]
    pub minify_css: bool,

    /// Class that is never pruned or renamed (repeatable)
    #[arg(long, value_name = "CLASS")]
    pub keep: Vec<String>,

    /// Print the rename map after the report
    #[arg(long)]
    pub print_map: bool,
}
