use crossterm::event::KeyCode;

use crate::config::{CaseOption, ConflictStrategy, NumberingPosition};

use super::app::App;
use super::models::{ConfigField, FieldKind};

// Same bounds as the spin boxes of the desktop version.
const NUMBER_MAX: i64 = 99;

impl App {
    pub fn handle_config_navigation(&mut self, key: KeyCode) {
        let last = ConfigField::ALL.len() - 1;
        match key {
            KeyCode::Down => {
                self.config_index = if self.config_index >= last { 0 } else { self.config_index + 1 };
            }
            KeyCode::Up => {
                self.config_index = if self.config_index == 0 { last } else { self.config_index - 1 };
            }
            KeyCode::Left => self.adjust_field(false),
            KeyCode::Right => self.adjust_field(true),
            KeyCode::Enter => self.adjust_field(true),
            _ => {}
        }
    }

    /// Typed character on the focused field: text appends, digits build
    /// numbers, space flips toggles and cycles choices.
    pub fn handle_config_input(&mut self, c: char) {
        let field = self.focused_field();
        match field.kind() {
            FieldKind::Text => {
                if let Some(text) = self.text_field_mut(field) {
                    text.push(c);
                }
                self.after_config_change(field);
            }
            FieldKind::Number => {
                if let Some(digit) = c.to_digit(10) {
                    let value = self.number_value(field);
                    let digit = i64::from(digit);
                    let next = value
                        .checked_mul(10)
                        .and_then(|shifted| shifted.checked_add(digit))
                        .filter(|next| (0..=NUMBER_MAX).contains(next))
                        .unwrap_or(digit);
                    self.set_number_value(field, next);
                    self.after_config_change(field);
                }
            }
            FieldKind::Toggle | FieldKind::Choice => {
                if c == ' ' {
                    self.adjust_field(true);
                }
            }
        }
    }

    pub fn handle_config_backspace(&mut self) {
        let field = self.focused_field();
        match field.kind() {
            FieldKind::Text => {
                if let Some(text) = self.text_field_mut(field) {
                    text.pop();
                }
                self.after_config_change(field);
            }
            FieldKind::Number => {
                let value = self.number_value(field);
                self.set_number_value(field, value / 10);
                self.after_config_change(field);
            }
            FieldKind::Toggle | FieldKind::Choice => {}
        }
    }

    fn adjust_field(&mut self, forward: bool) {
        let field = self.focused_field();
        let config = &mut self.config;
        match field {
            ConfigField::SkipExistingPrefix => config.skip_existing_prefix ^= true,
            ConfigField::SkipExistingSuffix => config.skip_existing_suffix ^= true,
            ConfigField::UseRegex => config.use_regex ^= true,
            ConfigField::AddNumbering => config.add_numbering ^= true,
            ConfigField::SimulationMode => config.simulation_mode ^= true,
            ConfigField::ApplyFix => config.apply_fix ^= true,
            ConfigField::CaseOption => {
                config.case_option = cycle(&CaseOption::ALL, config.case_option, forward);
            }
            ConfigField::NumberingPosition => {
                config.numbering_position =
                    cycle(&NumberingPosition::ALL, config.numbering_position, forward);
            }
            ConfigField::ConflictStrategy => {
                config.conflict_strategy =
                    cycle(&ConflictStrategy::ALL, config.conflict_strategy, forward);
            }
            ConfigField::NumberingStart
            | ConfigField::NumberingIncrement
            | ConfigField::NumberingPadding => {
                let value = self.number_value(field);
                let next = if forward { value.saturating_add(1) } else { value.saturating_sub(1) };
                self.set_number_value(field, next);
            }
            ConfigField::FilterExtension
            | ConfigField::Prefix
            | ConfigField::Suffix
            | ConfigField::ReplaceText
            | ConfigField::WithText => return,
        }
        self.after_config_change(field);
    }

    fn text_field_mut(&mut self, field: ConfigField) -> Option<&mut String> {
        let config = &mut self.config;
        match field {
            ConfigField::FilterExtension => Some(&mut config.filter_extension),
            ConfigField::Prefix => Some(&mut config.prefix),
            ConfigField::Suffix => Some(&mut config.suffix),
            ConfigField::ReplaceText => Some(&mut config.replace_text),
            ConfigField::WithText => Some(&mut config.with_text),
            _ => None,
        }
    }

    fn number_value(&self, field: ConfigField) -> i64 {
        match field {
            ConfigField::NumberingStart => self.config.numbering_start,
            ConfigField::NumberingIncrement => self.config.numbering_increment,
            ConfigField::NumberingPadding => {
                i64::try_from(self.config.numbering_padding).unwrap_or(i64::MAX)
            }
            _ => 0,
        }
    }

    fn set_number_value(&mut self, field: ConfigField, value: i64) {
        let value = value.clamp(0, NUMBER_MAX);
        match field {
            ConfigField::NumberingStart => self.config.numbering_start = value,
            ConfigField::NumberingIncrement => self.config.numbering_increment = value,
            ConfigField::NumberingPadding => self.config.numbering_padding = value as usize,
            _ => {}
        }
    }

    /// The extension filter changes which files are listed; everything else
    /// only changes the previews.
    fn after_config_change(&mut self, field: ConfigField) {
        if field == ConfigField::FilterExtension {
            self.rescan();
        } else {
            self.refresh_previews();
        }
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
    options[next]
}
