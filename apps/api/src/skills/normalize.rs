//! Skill normalization: folds spelling variants onto one canonical key.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Alias → canonical form. No canonical value is itself an alias key, which
/// keeps `normalize_skill` idempotent.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("react.js", "react"),
        ("reactjs", "react"),
        ("vue.js", "vue"),
        ("vuejs", "vue"),
        ("next.js", "nextjs"),
        ("express.js", "express"),
        ("node.js", "nodejs"),
        ("postgresql", "postgres"),
        ("mongodb", "mongo"),
        ("kubernetes", "k8s"),
        ("javascript", "js"),
        ("typescript", "ts"),
    ]
    .into_iter()
    .collect()
});

/// Lower-cases and trims `skill`, then maps known aliases to their canonical form.
/// Unknown skills come back lower-cased. Never fails.
pub fn normalize_skill(skill: &str) -> String {
    let lowered = skill.trim().to_lowercase();
    match ALIAS_TO_CANONICAL.get(lowered.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => lowered,
    }
}

/// Display casing for skill labels: a letter is upper-cased when it follows a
/// non-letter (or starts the string), lower-cased otherwise.
///
/// `"ci/cd"` → `"Ci/Cd"`, `"c++"` → `"C++"`, `"react.js"` → `"React.Js"`.
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut prev_is_letter = false;
    for ch in label.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}
