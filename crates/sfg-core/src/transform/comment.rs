use std::sync::LazyLock;

use regex::Regex;

// The connecting word inserted between the identifier and the rewritten
// description.
const CONNECTIVE: &str = "is";

static FETCH_RETURNS_FIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Fetch|Returns|Find\w*)\s(an|a|the)").unwrap());

static MUTATION_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(Creates|Updates|Adds|Removes|Completes|Associates|Disassociates|Applies|Appends|Sets|Activates|Sends|Resets\w*)\s(an|a|the)",
    )
    .unwrap()
});

static WHETHER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Whether\w*)\s(an|a|the)").unwrap());

static SPECIALS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(Stripped|Image\w*)").unwrap());

/// Rewrite a schema field description into a doc comment led by the
/// identifier. Each rule recognizes one phrasing convention; the first match
/// wins, and anything unrecognized falls through to the lowercased default.
pub fn synthesize(identifier: &str, description: &str) -> String {
    let s = description;

    if FETCH_RETURNS_FIND.is_match(s) {
        return format!(
            "{identifier} {CONNECTIVE} {}",
            FETCH_RETURNS_FIND.replace(s, "$2")
        );
    }
    if MUTATION_TERM.is_match(s) {
        return format!(
            "{identifier} {}",
            MUTATION_TERM.replace(s, |caps: &regex::Captures| caps[0].to_lowercase())
        );
    }
    if WHETHER.is_match(s) {
        return format!("{identifier} {CONNECTIVE} {}", WHETHER.replace(s, "whether $2"));
    }
    if SPECIALS.is_match(s) {
        return format!(
            "{identifier} {CONNECTIVE} {}",
            SPECIALS.replace(s, |caps: &regex::Captures| format!(
                "the {}",
                caps[0].to_lowercase()
            ))
        );
    }
    if s.starts_with("List of") {
        return format!(
            "{identifier} {CONNECTIVE} {}",
            s.replacen("List of", "a list of", 1)
        );
    }
    if s.starts_with("Indicates") {
        return format!("{identifier} {}", s.replacen("Indicates", "indicates", 1));
    }
    if s.starts_with("The") {
        return format!("{identifier} {CONNECTIVE} {}", s.replacen("The", "the", 1));
    }
    if s.starts_with('A') {
        return format!("{identifier} {CONNECTIVE} {}", s.replacen('A', "a", 1));
    }

    // Hopefully *technically* correct.
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => format!(
            "{identifier} {CONNECTIVE} the {}{}",
            first.to_lowercase(),
            chars.as_str()
        ),
        None => format!("{identifier} {CONNECTIVE} the"),
    }
}
