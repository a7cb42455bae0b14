use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "c4docdrift",
    version,
    about = "Report C4Script functions and constants missing from lcdocs, and lcdocs entries missing from the engine"
)]
pub struct Args {
    /// Repository root; relative input paths resolve against it
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file [default: <root>/.c4docdrift.yml]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Core interpreter source registering the engine functions and constants
    #[arg(long, value_name = "FILE")]
    pub engine_source: Option<PathBuf>,

    /// Directory holding the helper scripts (e.g. System.c4g)
    #[arg(long, value_name = "DIR")]
    pub helper_dir: Option<PathBuf>,

    /// File extension of helper scripts
    #[arg(long, value_name = "EXT")]
    pub helper_ext: Option<String>,

    /// Documentation corpus made of `[Function]` stanzas with `Name=` keys
    #[arg(long, value_name = "FILE")]
    pub docs: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json", "github", "quiet"])]
    pub format: String,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    /// Print every extracted symbol with its origin, then exit
    #[arg(long)]
    pub list_symbols: bool,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            engine_source: self.engine_source.clone(),
            helper_dir: self.helper_dir.clone(),
            helper_extension: self.helper_ext.clone(),
            docs: self.docs.clone(),
        }
    }
}
