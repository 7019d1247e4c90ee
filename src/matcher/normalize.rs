/// Build the comparison key for a raw term.
///
/// Lower-cases with the Unicode default mapping (independent of the process locale) and
/// keeps only ASCII letters and digits. Everything else is dropped, not replaced, so
/// `"Gros-Mot!"` and `"grosmot"` share the key `"grosmot"`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
