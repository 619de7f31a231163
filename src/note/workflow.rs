use crate::core::config::Settings;
use crate::core::error::{Error, Result};
use crate::note::template::generate_file_content;
use crate::search::client::SearchResult;
use crate::storage::vault::Vault;
use std::path::PathBuf;

const EBIRD_SPECIES_URL: &str = "https://ebird.org/species";
const BIRDS_OF_THE_WORLD_URL: &str = "https://birdsoftheworld.org/bow/species";

/// The resolved field set used to render a new note's frontmatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub common_name: String,
    pub scientific_name: String,
    pub ebird_url: String,
    pub birds_of_the_world_url: String,
}

/// Split a display name into (common name, scientific name).
///
/// The name is expected to hold exactly one " - " separator; extra segments
/// beyond the second are ignored. A name without the separator is a
/// `MalformedRecord`.
pub fn split_display_name(name: &str) -> Result<(String, String)> {
    match name.split_once(" - ") {
        Some((common, rest)) => {
            let scientific = match rest.split_once(" - ") {
                Some((first, _)) => first,
                None => rest,
            };
            Ok((common.to_string(), scientific.to_string()))
        }
        None => Err(Error::MalformedRecord(format!(
            "Display name without \" - \" separator: {:?}",
            name
        ))),
    }
}

impl NoteDraft {
    /// Build the draft for a search result.
    ///
    /// A malformed display name degrades to an empty scientific name instead
    /// of rejecting the note.
    pub fn from_result(result: &SearchResult) -> Self {
        let (common_name, scientific_name) = match split_display_name(&result.name) {
            Ok(parts) => parts,
            Err(e) => {
                tracing::warn!("{}; creating note with an empty scientific name", e);
                (result.name.clone(), String::new())
            }
        };

        Self {
            common_name,
            scientific_name,
            ebird_url: format!("{}/{}", EBIRD_SPECIES_URL, result.code),
            birds_of_the_world_url: format!("{}/{}", BIRDS_OF_THE_WORLD_URL, result.code),
        }
    }
}

/// Create a pre-filled note for `result` and return the path written.
///
/// The candidate path is `{folder}/{commonName}.md`. If a file already exists
/// there, fall back once to `{folder}/{commonName}-Copy.md`; a second
/// collision fails in the vault. A `FileWrite` failure propagates with no
/// retry.
pub fn create_note(
    result: &SearchResult,
    settings: &Settings,
    vault: &impl Vault,
) -> Result<PathBuf> {
    let draft = NoteDraft::from_result(result);
    let folder = PathBuf::from(&settings.folder);

    let mut path = folder.join(format!("{}.md", draft.common_name));
    if vault.exists(&path) {
        path = folder.join(format!("{}-Copy.md", draft.common_name));
    }

    let content = generate_file_content(
        &draft.common_name,
        &draft.scientific_name,
        &draft.ebird_url,
        &draft.birds_of_the_world_url,
    );

    vault.create(&path, &content)?;
    tracing::info!("Created note {}", path.display());

    Ok(path)
}
