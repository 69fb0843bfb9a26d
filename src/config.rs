use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RenameError, Result};

pub const DEFAULT_PRESET_FILE: &str = "preset.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseOption {
    #[default]
    None,
    #[serde(rename = "lowercase", alias = "Lowercase")]
    Lowercase,
    #[serde(rename = "UPPERCASE", alias = "Uppercase")]
    Uppercase,
    #[serde(rename = "Title Case", alias = "TitleCase")]
    TitleCase,
    #[serde(rename = "Sentence case", alias = "SentenceCase")]
    SentenceCase,
}

impl CaseOption {
    pub const ALL: [CaseOption; 5] = [
        CaseOption::None,
        CaseOption::Lowercase,
        CaseOption::Uppercase,
        CaseOption::TitleCase,
        CaseOption::SentenceCase,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CaseOption::None => "None",
            CaseOption::Lowercase => "lowercase",
            CaseOption::Uppercase => "UPPERCASE",
            CaseOption::TitleCase => "Title Case",
            CaseOption::SentenceCase => "Sentence case",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberingPosition {
    #[default]
    Prefix,
    Suffix,
}

impl NumberingPosition {
    pub const ALL: [NumberingPosition; 2] = [NumberingPosition::Prefix, NumberingPosition::Suffix];

    pub fn label(self) -> &'static str {
        match self {
            NumberingPosition::Prefix => "Prefix",
            NumberingPosition::Suffix => "Suffix",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictStrategy {
    #[default]
    Skip,
    Overwrite,
    Rename,
}

impl ConflictStrategy {
    pub const ALL: [ConflictStrategy; 3] = [
        ConflictStrategy::Skip,
        ConflictStrategy::Overwrite,
        ConflictStrategy::Rename,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConflictStrategy::Skip => "Skip",
            ConflictStrategy::Overwrite => "Overwrite",
            ConflictStrategy::Rename => "Rename",
        }
    }
}

/// Every rule parameter of one rename pass.
///
/// Serialized as the flat preset record: snake_case keys, with the camelCase
/// spellings accepted on load. Missing keys fall back to [`Configuration::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    #[serde(alias = "filterExtension")]
    pub filter_extension: String,
    pub prefix: String,
    pub suffix: String,
    #[serde(alias = "skipExistingPrefix")]
    pub skip_existing_prefix: bool,
    #[serde(alias = "skipExistingSuffix")]
    pub skip_existing_suffix: bool,
    #[serde(alias = "replaceText")]
    pub replace_text: String,
    #[serde(alias = "withText")]
    pub with_text: String,
    #[serde(alias = "useRegex")]
    pub use_regex: bool,
    #[serde(alias = "caseOption")]
    pub case_option: CaseOption,
    #[serde(alias = "addNumbering")]
    pub add_numbering: bool,
    #[serde(alias = "numberingStart")]
    pub numbering_start: i64,
    #[serde(alias = "numberingIncrement")]
    pub numbering_increment: i64,
    #[serde(alias = "numberingPadding")]
    pub numbering_padding: usize,
    #[serde(alias = "numberingPosition")]
    pub numbering_position: NumberingPosition,
    #[serde(alias = "conflictStrategy")]
    pub conflict_strategy: ConflictStrategy,
    #[serde(alias = "simulationMode")]
    pub simulation_mode: bool,
    #[serde(alias = "applyFix")]
    pub apply_fix: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            filter_extension: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            skip_existing_prefix: false,
            skip_existing_suffix: false,
            replace_text: String::new(),
            with_text: String::new(),
            use_regex: false,
            case_option: CaseOption::None,
            add_numbering: false,
            numbering_start: 1,
            numbering_increment: 1,
            numbering_padding: 1,
            numbering_position: NumberingPosition::Prefix,
            conflict_strategy: ConflictStrategy::Skip,
            simulation_mode: false,
            apply_fix: false,
        }
    }
}

pub fn load_preset(path: &Path) -> Result<Configuration> {
    let raw = fs::read_to_string(path).map_err(|source| RenameError::PresetIo {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&raw).map_err(|source| RenameError::PresetFormat {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loaded preset");
    Ok(config)
}

pub fn save_preset(path: &Path, config: &Configuration) -> Result<()> {
    let json = serde_json::to_string_pretty(config).map_err(|source| RenameError::PresetFormat {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| RenameError::PresetIo {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "saved preset");
    Ok(())
}
