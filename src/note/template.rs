/// Frontmatter template every species note starts from.
///
/// The placeholder names (including the lowercase `birdsoftheworldUrl`) are
/// part of the note format and stay as-is.
const FILE_TEMPLATE: &str = "---
commonName: {{commonName}}
scientificName: {{scientificName}}
ebirdUrl: {{ebirdUrl}}
birdsOfTheWorldUrl: {{birdsoftheworldUrl}}
---

\n";

/// Fill the note template with the four species fields.
///
/// Pure global substitution with no escaping: a field that itself contains
/// placeholder syntax is undefined behavior.
pub fn generate_file_content(
    common_name: &str,
    scientific_name: &str,
    ebird_url: &str,
    birdsoftheworld_url: &str,
) -> String {
    FILE_TEMPLATE
        .replace("{{commonName}}", common_name)
        .replace("{{scientificName}}", scientific_name)
        .replace("{{ebirdUrl}}", ebird_url)
        .replace("{{birdsoftheworldUrl}}", birdsoftheworld_url)
}
