use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_BOUNDARY:  Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
    static ref UNDERSCORE_RUN: Regex = Regex::new(r"_+").unwrap();
}

/// Converts a display string to the PascalCase name used for generated types
/// and methods, e.g. `"workout_logs"` → `"WorkoutLogs"`.
///
/// Umlauts and ß are folded to their digraphs first so that
/// `"müsli-bestand"` becomes `"MuesliBestand"`. Every non-alphanumeric run
/// acts as a word boundary; each word gets its first letter upper-cased and
/// the rest left untouched, which keeps the transform idempotent on input
/// that is already PascalCase.
pub fn type_name(text: &str) -> String {
    let text = text
        .replace('ä', "ae")
        .replace('ö', "oe")
        .replace('ü', "ue")
        .replace('ß', "ss");

    WORD_BOUNDARY
        .split(&text)
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect()
}

/// Converts an identifier to the SCREAMING_SNAKE key used in the generated
/// id lookup table: uppercase, `-`/`&`/space become `_`, underscore runs
/// collapse to one.
pub fn constant_name(text: &str) -> String {
    let upper = text.to_uppercase().replace(['-', '&', ' '], "_");
    UNDERSCORE_RUN.replace_all(&upper, "_").into_owned()
}

/// Derives the singular method-name stem from a plural type name: a trailing
/// `s` is stripped, anything else gets `Entry` appended. Lossy for irregular
/// plurals ("Categories" → "Categorie"), but the generated method names are
/// part of the committed artifact contract, so the rule stays as is.
pub fn singular_method_name(type_name: &str) -> String {
    match type_name.strip_suffix('s') {
        Some(stem) => stem.to_owned(),
        None => format!("{}Entry", type_name),
    }
}
