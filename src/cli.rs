use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "site-search")]
#[command(about = "Search teasers and result panels for a static documentation site", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "SITE_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the teaser of a document body for some query words
    Teaser {
        #[arg(short, long, value_delimiter = ' ')]
        terms: Vec<String>,
        /// File holding the document body, stdin when omitted
        file: Option<PathBuf>,
    },
    /// Render the results panel for a query from pre-computed hits
    Results {
        query: String,
        /// JSON array of ranked hits
        #[arg(long)]
        hits: PathBuf,
        /// JSON array of glossary entries
        #[arg(short, long)]
        glossary: Option<PathBuf>,
        #[arg(long)]
        html: bool,
    },
    /// Look up the glossary card for a term
    Glossary {
        term: String,
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long)]
        html: bool,
    },
}
