use clap::{Parser, Subcommand};

/// birdnote - eBird taxonomy search and species notes
#[derive(Parser, Debug)]
#[command(name = "birdnote")]
#[command(about = "Search the eBird taxonomy and create pre-filled species notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Custom base directory (default: ~/.birdnote)
    #[arg(long)]
    pub base_dir: Option<String>,
}

/// Heading for search output; notes truncation when more results came back
/// than will be printed
pub fn search_summary(total: usize, limit: usize) -> String {
    if total > limit {
        format!("Found {} species (showing first {}):", total, limit)
    } else {
        format!("Found {} species:", total)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize birdnote (create the config directory and default settings)
    Init,
    /// Search the eBird taxonomy
    Search {
        /// Search query (at least 3 characters)
        query: String,
        /// Maximum number of results to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Search and create a note for one of the matches
    Create {
        /// Search query (at least 3 characters)
        query: String,
        /// 1-based index of the result to create a note for
        #[arg(short, long, default_value_t = 1)]
        pick: usize,
    },
    /// Show or change settings (changes are saved immediately)
    Config {
        /// Folder the notes are created in
        #[arg(long)]
        folder: Option<String>,
        /// API key for the eBird search API
        #[arg(long)]
        api_key: Option<String>,
    },
}
