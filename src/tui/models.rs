use crate::config::Configuration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Files,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Toggle,
    Number,
    Choice,
}

/// Editable rows of the configuration panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    FilterExtension,
    Prefix,
    SkipExistingPrefix,
    Suffix,
    SkipExistingSuffix,
    ReplaceText,
    WithText,
    UseRegex,
    CaseOption,
    AddNumbering,
    NumberingStart,
    NumberingIncrement,
    NumberingPadding,
    NumberingPosition,
    ConflictStrategy,
    SimulationMode,
    ApplyFix,
}

impl ConfigField {
    pub const ALL: [ConfigField; 17] = [
        ConfigField::FilterExtension,
        ConfigField::Prefix,
        ConfigField::SkipExistingPrefix,
        ConfigField::Suffix,
        ConfigField::SkipExistingSuffix,
        ConfigField::ReplaceText,
        ConfigField::WithText,
        ConfigField::UseRegex,
        ConfigField::CaseOption,
        ConfigField::AddNumbering,
        ConfigField::NumberingStart,
        ConfigField::NumberingIncrement,
        ConfigField::NumberingPadding,
        ConfigField::NumberingPosition,
        ConfigField::ConflictStrategy,
        ConfigField::SimulationMode,
        ConfigField::ApplyFix,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConfigField::FilterExtension => "Filter Extension",
            ConfigField::Prefix => "Add Prefix",
            ConfigField::SkipExistingPrefix => "Skip if Prefix Exists",
            ConfigField::Suffix => "Add Suffix",
            ConfigField::SkipExistingSuffix => "Skip if Suffix Exists",
            ConfigField::ReplaceText => "Replace Text",
            ConfigField::WithText => "With",
            ConfigField::UseRegex => "Use Regular Expressions",
            ConfigField::CaseOption => "Case Conversion",
            ConfigField::AddNumbering => "Add Numbering",
            ConfigField::NumberingStart => "  Start",
            ConfigField::NumberingIncrement => "  Increment",
            ConfigField::NumberingPadding => "  Padding",
            ConfigField::NumberingPosition => "  Position",
            ConfigField::ConflictStrategy => "On Conflict",
            ConfigField::SimulationMode => "Simulation Mode",
            ConfigField::ApplyFix => "Apply Fix",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ConfigField::FilterExtension
            | ConfigField::Prefix
            | ConfigField::Suffix
            | ConfigField::ReplaceText
            | ConfigField::WithText => FieldKind::Text,
            ConfigField::SkipExistingPrefix
            | ConfigField::SkipExistingSuffix
            | ConfigField::UseRegex
            | ConfigField::AddNumbering
            | ConfigField::SimulationMode
            | ConfigField::ApplyFix => FieldKind::Toggle,
            ConfigField::NumberingStart
            | ConfigField::NumberingIncrement
            | ConfigField::NumberingPadding => FieldKind::Number,
            ConfigField::CaseOption
            | ConfigField::NumberingPosition
            | ConfigField::ConflictStrategy => FieldKind::Choice,
        }
    }

    /// Numbering details are greyed out while numbering is off.
    pub fn is_enabled(self, config: &Configuration) -> bool {
        match self {
            ConfigField::NumberingStart
            | ConfigField::NumberingIncrement
            | ConfigField::NumberingPadding
            | ConfigField::NumberingPosition => config.add_numbering,
            _ => true,
        }
    }

    pub fn display_value(self, config: &Configuration) -> String {
        let flag = |on: bool| if on { "[x]" } else { "[ ]" }.to_string();
        match self {
            ConfigField::FilterExtension => config.filter_extension.clone(),
            ConfigField::Prefix => config.prefix.clone(),
            ConfigField::SkipExistingPrefix => flag(config.skip_existing_prefix),
            ConfigField::Suffix => config.suffix.clone(),
            ConfigField::SkipExistingSuffix => flag(config.skip_existing_suffix),
            ConfigField::ReplaceText => config.replace_text.clone(),
            ConfigField::WithText => config.with_text.clone(),
            ConfigField::UseRegex => flag(config.use_regex),
            ConfigField::CaseOption => config.case_option.label().to_string(),
            ConfigField::AddNumbering => flag(config.add_numbering),
            ConfigField::NumberingStart => config.numbering_start.to_string(),
            ConfigField::NumberingIncrement => config.numbering_increment.to_string(),
            ConfigField::NumberingPadding => config.numbering_padding.to_string(),
            ConfigField::NumberingPosition => config.numbering_position.label().to_string(),
            ConfigField::ConflictStrategy => config.conflict_strategy.label().to_string(),
            ConfigField::SimulationMode => flag(config.simulation_mode),
            ConfigField::ApplyFix => flag(config.apply_fix),
        }
    }
}

/// Modal message shown over the main screen until a key is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}
