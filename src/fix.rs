//! The "Apply Fix" normalizer: turns messy stems such as `my-photo  - final_v2`
//! into tidy, title-cased names (`My Photo - Finalv2`).

use std::sync::LazyLock;

use regex::Regex;

use crate::rename_engine::title_case;

const PROTECTED_DASH: &str = " - ";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern compiles"));

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s\-]").expect("character class compiles"));

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel pattern compiles"));

/// Normalize a stem (no extension). Idempotent: `fix_name(&fix_name(s)) == fix_name(s)`.
///
/// Trimming can strip the space next to a surviving hyphen (`"_ -a"` ends up
/// as `"-A"`), which a second pass would then split. Passes repeat until the
/// output is stable; each repeat removes at least one hyphen, so this ends.
pub fn fix_name(name: &str) -> String {
    let mut current = fix_pass(name);
    loop {
        let next = fix_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn fix_pass(name: &str) -> String {
    let trimmed = name.trim();

    let placeholder = placeholder_for(trimmed);
    let protected = trimmed.replace(PROTECTED_DASH, &placeholder);
    let dehyphenated = split_joined_hyphens(&protected);
    let collapsed = WHITESPACE_RUN.replace_all(&dehyphenated, " ");
    let restored = collapsed.replace(&placeholder, PROTECTED_DASH);

    let stripped = DISALLOWED.replace_all(&restored, "");
    let split = CAMEL_BOUNDARY.replace_all(&stripped, "$1 $2");
    let collapsed = WHITESPACE_RUN.replace_all(&split, " ");

    title_case(collapsed.trim())
}

/// A single private-use character absent from `name`, so restoring it can
/// never touch text that was in the input.
fn placeholder_for(name: &str) -> String {
    ('\u{E000}'..='\u{F8FF}')
        .find(|c| !name.contains(*c))
        .unwrap_or('\u{F8FF}')
        .to_string()
}

/// `word-word` becomes `word word`; a hyphen touching whitespace on either
/// side stays. Neighbours are read from the input, not the partial output.
fn split_joined_hyphens(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if c != '-' {
                return c;
            }
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            let touches_space = before.is_some_and(char::is_whitespace)
                || after.is_some_and(char::is_whitespace);
            if touches_space { '-' } else { ' ' }
        })
        .collect()
}
