// Copyright 2025 Lahja Contributors (https://github.com/lahja-chat/lahja)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Transform Options
//!
//! Plain configuration structs passed into the text transforms. Every
//! field has a safe default, so a partially-populated config (e.g. from a
//! TOML file) always yields a working value.

use crate::mode::{CodeSwitchMode, DialectPreset, Formality, NumeralMode};
use serde::{Deserialize, Serialize};

/// Well-known key under which the host application persists the user's
/// numeral preference. The library only ever reads the stored value (via
/// [`FormattingContext::from_preference`]); writes happen in the settings
/// surface of the host app.
pub const NUMERAL_PREFERENCE_KEY: &str = "numeral_mode";

/// Flags selecting which orthography rewrites to apply.
///
/// Each flag toggles one independent rewrite; the rewrite order is fixed
/// by the normalizer regardless of which flags are set. All flags default
/// to off, leaving text unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
    /// Remove tashkeel (short vowel and reading marks)
    pub strip_diacritics: bool,

    /// Remove tatweel (kashida) elongation characters
    pub strip_tatweel: bool,

    /// Collapse seated Hamza-on-Alef forms to bare Alef
    pub normalize_hamza: bool,

    /// Rewrite word-final Alef Maksura to Ya
    pub normalize_ya: bool,

    /// Rewrite word-final Ta Marbuta to Ha
    pub normalize_ta_marbuta: bool,

    /// Fix spacing around Arabic sentence punctuation
    pub fix_punctuation: bool,
}

impl NormalizationOptions {
    /// Full normalization, for search/comparison keys.
    pub fn search() -> Self {
        Self {
            strip_diacritics: true,
            strip_tatweel: true,
            normalize_hamza: true,
            normalize_ya: true,
            normalize_ta_marbuta: true,
            fix_punctuation: true,
        }
    }

    /// Display cleanup only: punctuation spacing, orthography preserved.
    pub fn display() -> Self {
        Self {
            fix_punctuation: true,
            ..Self::default()
        }
    }

    /// True when no rewrite is enabled.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Per-conversation dialect rendering preferences, assembled into an LLM
/// instruction block by the policy builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectOptions {
    /// Requested dialect; `None` falls back to MSA
    pub dialect: Option<DialectPreset>,

    /// Requested reply tone
    pub formality: Formality,

    /// Whether English loan phrases are allowed
    pub code_switch: CodeSwitchMode,

    /// Digit system for numbers in replies
    pub numeral_mode: NumeralMode,
}

impl DialectOptions {
    /// Effective dialect after the MSA fallback.
    pub fn effective_dialect(&self) -> DialectPreset {
        self.dialect.unwrap_or(DialectPreset::Msa)
    }
}

/// Explicit formatting context for number/currency/percent/date rendering.
///
/// Passed into every formatter call instead of being read from ambient
/// process state, so formatting is unit-testable without a settings stub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormattingContext {
    /// Digit system and locale-convention selector
    pub numeral_mode: NumeralMode,
}

impl FormattingContext {
    /// Context for a given numeral mode.
    pub fn new(numeral_mode: NumeralMode) -> Self {
        Self { numeral_mode }
    }

    /// Build a context from the persisted preference value, if any.
    ///
    /// An absent key or an unrecognized stored value falls back to
    /// western digits; a stale preference must never break rendering.
    pub fn from_preference(value: Option<&str>) -> Self {
        let numeral_mode = value
            .and_then(NumeralMode::from_str)
            .unwrap_or(NumeralMode::Western);
        Self { numeral_mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_defaults_off() {
        let opts = NormalizationOptions::default();
        assert!(opts.is_noop());
        assert!(!opts.normalize_hamza);
    }

    #[test]
    fn test_search_preset_enables_everything() {
        let opts = NormalizationOptions::search();
        assert!(opts.strip_diacritics);
        assert!(opts.strip_tatweel);
        assert!(opts.normalize_hamza);
        assert!(opts.normalize_ya);
        assert!(opts.normalize_ta_marbuta);
        assert!(opts.fix_punctuation);
    }

    #[test]
    fn test_display_preset() {
        let opts = NormalizationOptions::display();
        assert!(opts.fix_punctuation);
        assert!(!opts.normalize_hamza);
        assert!(!opts.strip_diacritics);
    }

    #[test]
    fn test_dialect_fallback() {
        let opts = DialectOptions::default();
        assert_eq!(opts.effective_dialect(), DialectPreset::Msa);

        let opts = DialectOptions {
            dialect: Some(DialectPreset::Gulf),
            ..Default::default()
        };
        assert_eq!(opts.effective_dialect(), DialectPreset::Gulf);
    }

    #[test]
    fn test_preference_key_is_stable() {
        // Host apps persist under this key; changing it orphans stored values.
        assert_eq!(NUMERAL_PREFERENCE_KEY, "numeral_mode");
    }

    #[test]
    fn test_formatting_context_from_preference() {
        assert_eq!(
            FormattingContext::from_preference(Some("arabic")).numeral_mode,
            NumeralMode::Arabic
        );
        assert_eq!(
            FormattingContext::from_preference(Some("garbage")).numeral_mode,
            NumeralMode::Western
        );
        assert_eq!(
            FormattingContext::from_preference(None).numeral_mode,
            NumeralMode::Western
        );
    }

    #[test]
    fn test_partial_config_deserialization() {
        let opts: DialectOptions = serde_json::from_str(r#"{"dialect":"levantine"}"#).unwrap();
        assert_eq!(opts.dialect, Some(DialectPreset::Levantine));
        assert_eq!(opts.formality, Formality::Casual);
        assert_eq!(opts.code_switch, CodeSwitchMode::Mixed);
    }
}
