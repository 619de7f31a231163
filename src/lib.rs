// Core functionality
pub mod core {
    pub mod config;
    pub mod error;
}

// Note persistence
pub mod storage {
    pub mod vault;
}

// Taxonomy search
pub mod search {
    pub mod client;
    pub mod results;
}

// Note creation
pub mod note {
    pub mod template;
    pub mod workflow;
}

// User interfaces
pub mod ui {
    pub mod cli;
    pub mod tui;
}

// Re-export commonly used types
pub use crate::core::config::{Config, Settings};
pub use crate::core::error::{Error, Result};
pub use crate::note::template::generate_file_content;
pub use crate::note::workflow::{create_note, split_display_name, NoteDraft};
pub use crate::search::client::{meets_query_threshold, SearchResult, TaxonomyClient, MIN_QUERY_LEN};
pub use crate::search::results::ResultList;
pub use crate::storage::vault::{FsVault, Vault};
pub use crate::ui::cli::Cli;
pub use crate::ui::tui::SearchTui;
