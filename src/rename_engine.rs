use regex::Regex;

use crate::config::{CaseOption, Configuration, NumberingPosition};
use crate::error::{RenameError, Result};
use crate::fix::fix_name;
use crate::models::{FileEntry, Selection};

/// Running number handed to each processed entry. Owned by the caller and
/// threaded through preview passes, never kept in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingCounter {
    value: i64,
    increment: i64,
}

impl NumberingCounter {
    pub fn new(start: i64, increment: i64) -> Self {
        Self {
            value: start,
            increment,
        }
    }

    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.numbering_start, config.numbering_increment)
    }

    pub fn current(&self) -> i64 {
        self.value
    }

    /// Saturates at the `i64` bounds; a preset may hold any start value.
    pub fn advance(&mut self) {
        self.value = self.value.saturating_add(self.increment);
    }
}

/// Compiled form of a [`Configuration`]: derives candidate names for one pass.
#[derive(Debug)]
pub struct RenameEngine {
    config: Configuration,
    pattern: Option<Regex>,
}

impl RenameEngine {
    pub fn new(config: Configuration) -> Result<Self> {
        let pattern = if config.use_regex && !config.replace_text.is_empty() {
            let compiled =
                Regex::new(&config.replace_text).map_err(|source| RenameError::InvalidPattern {
                    pattern: config.replace_text.clone(),
                    source,
                })?;
            Some(compiled)
        } else {
            None
        };

        Ok(Self { config, pattern })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Candidate for `original_name`, or `None` when the rules leave it unchanged.
    pub fn derive_name(&self, original_name: &str, number: i64) -> Option<String> {
        let (stem, extension) = split_extension(original_name);
        let new_stem = self.transform_stem(stem, number);
        let candidate = format!("{new_stem}{extension}");

        if candidate == original_name {
            None
        } else {
            Some(candidate)
        }
    }

    fn transform_stem(&self, stem: &str, number: i64) -> String {
        let config = &self.config;

        let mut name = if config.apply_fix {
            fix_name(stem)
        } else {
            stem.to_string()
        };

        if !config.replace_text.is_empty() {
            name = match &self.pattern {
                Some(pattern) => pattern
                    .replace_all(&name, config.with_text.as_str())
                    .into_owned(),
                None => name.replace(&config.replace_text, &config.with_text),
            };
        }

        name = apply_case(&name, config.case_option);

        if !config.prefix.is_empty()
            && !(config.skip_existing_prefix && name.starts_with(&config.prefix))
        {
            name = format!("{}{}", config.prefix, name);
        }

        if !config.suffix.is_empty()
            && !(config.skip_existing_suffix && name.ends_with(&config.suffix))
        {
            name.push_str(&config.suffix);
        }

        if config.add_numbering {
            let number = format!("{:0width$}", number, width = config.numbering_padding);
            name = match config.numbering_position {
                NumberingPosition::Prefix => format!("{number}{name}"),
                NumberingPosition::Suffix => format!("{name}{number}"),
            };
        }

        // Only the tail is trimmed; leading whitespace survives.
        name.trim_end().to_string()
    }

    /// Refresh `preview_name` on every entry.
    ///
    /// Entries outside a non-empty selection get their preview cleared and do
    /// not consume a number; every included entry advances `counter` once,
    /// in list order, whether or not its name changes.
    pub fn project_previews(
        &self,
        entries: &mut [FileEntry],
        selection: &Selection,
        counter: &mut NumberingCounter,
    ) {
        let mut changed = 0usize;
        for (index, entry) in entries.iter_mut().enumerate() {
            if !selection.includes(index) {
                entry.preview_name = None;
                continue;
            }

            entry.preview_name = self.derive_name(&entry.original_name, counter.current());
            if entry.preview_name.is_some() {
                changed += 1;
            }
            counter.advance();
        }
        tracing::debug!(entries = entries.len(), changed, "projected previews");
    }
}

/// One-shot form of [`RenameEngine::derive_name`].
pub fn derive_name(
    original_name: &str,
    config: &Configuration,
    counter: &NumberingCounter,
) -> Result<Option<String>> {
    let engine = RenameEngine::new(config.clone())?;
    Ok(engine.derive_name(original_name, counter.current()))
}

/// Full preview pass with a fresh counter starting at `numbering_start`.
///
/// An invalid pattern aborts the pass: every preview is cleared and the error
/// is returned for the caller to show.
pub fn project_previews(
    entries: &mut [FileEntry],
    config: &Configuration,
    selection: &Selection,
) -> Result<()> {
    let engine = match RenameEngine::new(config.clone()) {
        Ok(engine) => engine,
        Err(error) => {
            for entry in entries.iter_mut() {
                entry.preview_name = None;
            }
            return Err(error);
        }
    };

    let mut counter = NumberingCounter::from_config(config);
    engine.project_previews(entries, selection, &mut counter);
    Ok(())
}

/// Split `name` into stem and extension (with its dot). A leading run of
/// dots is part of the stem, so `.bashrc` has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => name.split_at(dot),
        _ => (name, ""),
    }
}

pub fn apply_case(name: &str, option: CaseOption) -> String {
    match option {
        CaseOption::None => name.to_string(),
        CaseOption::Lowercase => name.to_lowercase(),
        CaseOption::Uppercase => name.to_uppercase(),
        CaseOption::TitleCase => title_case(name),
        CaseOption::SentenceCase => sentence_case(name),
    }
}

/// Uppercase the first letter of every run of cased letters and lowercase
/// the rest of the run (`"v2x file"` -> `"V2X File"`).
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && in_word {
            result.extend(c.to_lowercase());
        } else if cased {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        in_word = cased;
    }
    result
}

/// Uppercase the first character only; the rest is left as written.
fn sentence_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(config: Configuration) -> RenameEngine {
        RenameEngine::new(config).unwrap()
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("photo.jpg"), ("photo", ".jpg"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("README"), ("README", ""));
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
        assert_eq!(split_extension("..hidden.txt"), ("..hidden", ".txt"));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello wORLD"), "Hello World");
        assert_eq!(title_case("photo-final"), "Photo-Final");
        assert_eq!(title_case("v2x"), "V2X");
    }

    #[test]
    fn sentence_case_leaves_the_rest_alone() {
        assert_eq!(apply_case("hello World", CaseOption::SentenceCase), "Hello World");
        assert_eq!(apply_case("", CaseOption::SentenceCase), "");
    }

    #[test]
    fn extension_is_never_touched() {
        let engine = engine(Configuration {
            case_option: CaseOption::Lowercase,
            ..Configuration::default()
        });
        assert_eq!(engine.derive_name("PHOTO.JPG", 1).as_deref(), Some("photo.JPG"));
    }

    #[test]
    fn prefix_not_duplicated_when_skipping_existing() {
        let engine = engine(Configuration {
            prefix: "IMG_".to_string(),
            skip_existing_prefix: true,
            ..Configuration::default()
        });
        assert_eq!(engine.derive_name("IMG_001.png", 1), None);
        assert_eq!(engine.derive_name("002.png", 1).as_deref(), Some("IMG_002.png"));
    }

    #[test]
    fn suffix_not_duplicated_when_skipping_existing() {
        let engine = engine(Configuration {
            suffix: "_final".to_string(),
            skip_existing_suffix: true,
            ..Configuration::default()
        });
        assert_eq!(engine.derive_name("draft_final.doc", 1), None);
        assert_eq!(engine.derive_name("draft.doc", 1).as_deref(), Some("draft_final.doc"));
    }

    #[test]
    fn replace_is_literal_without_regex() {
        let engine = engine(Configuration {
            replace_text: ".".to_string(),
            with_text: " ".to_string(),
            ..Configuration::default()
        });
        assert_eq!(
            engine.derive_name("Some.Show.S01.mkv", 1).as_deref(),
            Some("Some Show S01.mkv")
        );
    }

    #[test]
    fn replace_with_regex_supports_groups() {
        let engine = engine(Configuration {
            replace_text: r"(\d{4})-(\d{2})".to_string(),
            with_text: "${2}_$1".to_string(),
            use_regex: true,
            ..Configuration::default()
        });
        assert_eq!(
            engine.derive_name("report 2024-03.pdf", 1).as_deref(),
            Some("report 03_2024.pdf")
        );
    }

    #[test]
    fn invalid_regex_is_reported() {
        let error = RenameEngine::new(Configuration {
            replace_text: "([".to_string(),
            use_regex: true,
            ..Configuration::default()
        })
        .unwrap_err();
        assert!(matches!(error, RenameError::InvalidPattern { ref pattern, .. } if pattern == "(["));
    }

    #[test]
    fn invalid_text_is_fine_without_regex() {
        let engine = engine(Configuration {
            replace_text: "([".to_string(),
            with_text: "".to_string(),
            ..Configuration::default()
        });
        assert_eq!(engine.derive_name("a([b.txt", 1).as_deref(), Some("ab.txt"));
    }

    #[test]
    fn numbering_is_zero_padded() {
        let engine = engine(Configuration {
            add_numbering: true,
            numbering_padding: 3,
            numbering_position: NumberingPosition::Prefix,
            ..Configuration::default()
        });
        assert_eq!(engine.derive_name("song.mp3", 7).as_deref(), Some("007song.mp3"));
    }

    #[test]
    fn only_trailing_whitespace_is_stripped() {
        let engine = engine(Configuration {
            suffix: "  ".to_string(),
            prefix: " ".to_string(),
            ..Configuration::default()
        });
        assert_eq!(engine.derive_name("name.txt", 1).as_deref(), Some(" name.txt"));
    }

    #[test]
    fn rules_run_in_order() {
        let engine = engine(Configuration {
            apply_fix: true,
            replace_text: "Photo".to_string(),
            with_text: "pic".to_string(),
            case_option: CaseOption::Uppercase,
            prefix: "x_".to_string(),
            suffix: "_y".to_string(),
            add_numbering: true,
            numbering_padding: 2,
            numbering_position: NumberingPosition::Suffix,
            ..Configuration::default()
        });
        assert_eq!(
            engine.derive_name("my-photo.jpg", 4).as_deref(),
            Some("x_MY PIC_y04.jpg")
        );
    }

    #[test]
    fn counter_saturates_instead_of_overflowing() {
        let mut counter = NumberingCounter::new(i64::MAX - 1, 5);
        counter.advance();
        counter.advance();
        assert_eq!(counter.current(), i64::MAX);

        let mut counter = NumberingCounter::new(i64::MIN, -1);
        counter.advance();
        assert_eq!(counter.current(), i64::MIN);
    }

    #[test]
    fn counter_advances_by_increment() {
        let mut counter = NumberingCounter::new(10, 5);
        counter.advance();
        counter.advance();
        assert_eq!(counter.current(), 20);
    }

    #[test]
    fn deselected_entries_are_cleared_and_do_not_count() {
        let config = Configuration {
            add_numbering: true,
            numbering_position: NumberingPosition::Prefix,
            ..Configuration::default()
        };
        let mut entries = vec![
            FileEntry::new("a.txt"),
            FileEntry::new("b.txt"),
            FileEntry::new("c.txt"),
        ];
        entries[1].preview_name = Some("stale".to_string());

        project_previews(&mut entries, &config, &Selection::of([0, 2])).unwrap();

        assert_eq!(entries[0].preview_name.as_deref(), Some("1a.txt"));
        assert_eq!(entries[1].preview_name, None);
        assert_eq!(entries[2].preview_name.as_deref(), Some("2c.txt"));
    }

    #[test]
    fn invalid_pattern_clears_previews() {
        let config = Configuration {
            replace_text: "*".to_string(),
            use_regex: true,
            ..Configuration::default()
        };
        let mut entries = vec![FileEntry::new("a.txt")];
        entries[0].preview_name = Some("old.txt".to_string());

        let error = project_previews(&mut entries, &config, &Selection::all()).unwrap_err();
        assert_eq!(error.kind(), crate::error::ErrorKind::InvalidPattern);
        assert_eq!(entries[0].preview_name, None);
    }

    #[test]
    fn projecting_nothing_is_fine() {
        let mut entries: Vec<FileEntry> = Vec::new();
        project_previews(&mut entries, &Configuration::default(), &Selection::all()).unwrap();
        assert!(entries.is_empty());
    }
}
