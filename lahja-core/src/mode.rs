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

//! Script and Dialect Vocabulary
//!
//! Shared enums describing how a piece of chat text is written: which
//! script/register, which regional dialect, and the rendering preferences
//! (formality, code-switching, numeral system) attached to a conversation.

use crate::error::{LahjaError, Result};
use serde::{Deserialize, Serialize};

/// Writing mode of a text span, as produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArabicMode {
    /// Modern Standard Arabic
    Msa,
    /// Simplified Arabic register (user-selectable, never auto-detected)
    Simple,
    /// Regional dialect
    Dialect,
    /// Mixed Arabic/Latin script
    Mixed,
    /// Arabizi (Latin letters and digits standing in for Arabic)
    Arabizi,
    /// English (default)
    English,
}

impl Default for ArabicMode {
    fn default() -> Self {
        Self::English
    }
}

impl ArabicMode {
    /// Get the wire/code identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Msa => "msa",
            Self::Simple => "simple",
            Self::Dialect => "dialect",
            Self::Mixed => "mixed",
            Self::Arabizi => "arabizi",
            Self::English => "english",
        }
    }

    /// Get the native display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Msa => "فصحى",
            Self::Simple => "عربي مبسط",
            Self::Dialect => "لهجة",
            Self::Mixed => "مختلط",
            Self::Arabizi => "عربيزي",
            Self::English => "English",
        }
    }

    /// Parse from string (code or native name). Unknown input yields `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "msa" | "fusha" | "فصحى" => Some(Self::Msa),
            "simple" | "مبسط" => Some(Self::Simple),
            "dialect" | "لهجة" => Some(Self::Dialect),
            "mixed" | "مختلط" => Some(Self::Mixed),
            "arabizi" | "عربيزي" => Some(Self::Arabizi),
            "english" | "en" => Some(Self::English),
            _ => None,
        }
    }

    /// Get all modes.
    pub fn all() -> &'static [ArabicMode] {
        &[
            Self::Msa,
            Self::Simple,
            Self::Dialect,
            Self::Mixed,
            Self::Arabizi,
            Self::English,
        ]
    }
}

impl std::str::FromStr for ArabicMode {
    type Err = LahjaError;

    fn from_str(s: &str) -> Result<Self> {
        ArabicMode::from_str(s).ok_or_else(|| LahjaError::UnknownMode(s.to_string()))
    }
}

/// Regional dialect preset, supplied by project/user settings or inferred
/// by the dialect detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectPreset {
    /// Modern Standard Arabic (default, also the fallback)
    Msa,
    /// Egyptian
    Egyptian,
    /// Gulf (Khaleeji)
    Gulf,
    /// Levantine (Shami)
    Levantine,
    /// Maghrebi (North African)
    Maghrebi,
}

impl Default for DialectPreset {
    fn default() -> Self {
        Self::Msa
    }
}

impl DialectPreset {
    /// Get the wire/code identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Msa => "msa",
            Self::Egyptian => "egyptian",
            Self::Gulf => "gulf",
            Self::Levantine => "levantine",
            Self::Maghrebi => "maghrebi",
        }
    }

    /// Get the native display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Msa => "فصحى",
            Self::Egyptian => "مصري",
            Self::Gulf => "خليجي",
            Self::Levantine => "شامي",
            Self::Maghrebi => "مغاربي",
        }
    }

    /// Parse from string (code, common romanization, or native name).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "msa" | "fusha" | "فصحى" => Some(Self::Msa),
            "egyptian" | "masri" | "مصري" => Some(Self::Egyptian),
            "gulf" | "khaleeji" | "خليجي" => Some(Self::Gulf),
            "levantine" | "shami" | "شامي" => Some(Self::Levantine),
            "maghrebi" | "مغاربي" => Some(Self::Maghrebi),
            _ => None,
        }
    }

    /// Get all presets, in canonical detection order.
    pub fn all() -> &'static [DialectPreset] {
        &[
            Self::Msa,
            Self::Egyptian,
            Self::Gulf,
            Self::Levantine,
            Self::Maghrebi,
        ]
    }
}

impl std::str::FromStr for DialectPreset {
    type Err = LahjaError;

    fn from_str(s: &str) -> Result<Self> {
        DialectPreset::from_str(s).ok_or_else(|| LahjaError::UnknownDialect(s.to_string()))
    }
}

/// Tone requested for assistant replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    /// Formal register
    Formal,
    /// Casual register (default)
    Casual,
}

impl Default for Formality {
    fn default() -> Self {
        Self::Casual
    }
}

impl Formality {
    /// Get the wire/code identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "formal" => Some(Self::Formal),
            "casual" => Some(Self::Casual),
            _ => None,
        }
    }
}

impl std::str::FromStr for Formality {
    type Err = LahjaError;

    fn from_str(s: &str) -> Result<Self> {
        Formality::from_str(s).ok_or_else(|| LahjaError::UnknownFormality(s.to_string()))
    }
}

/// Whether assistant replies may mix English into Arabic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSwitchMode {
    /// Arabic only, no English loan phrases
    ArabicOnly,
    /// Mixing English terms is allowed (default)
    Mixed,
}

impl Default for CodeSwitchMode {
    fn default() -> Self {
        Self::Mixed
    }
}

impl CodeSwitchMode {
    /// Get the wire/code identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArabicOnly => "arabic_only",
            Self::Mixed => "mixed",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arabic_only" | "arabic-only" => Some(Self::ArabicOnly),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }
}

impl std::str::FromStr for CodeSwitchMode {
    type Err = LahjaError;

    fn from_str(s: &str) -> Result<Self> {
        CodeSwitchMode::from_str(s).ok_or_else(|| LahjaError::UnknownCodeSwitch(s.to_string()))
    }
}

/// Digit system used when rendering numbers to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralMode {
    /// ASCII digits 0-9 (default)
    Western,
    /// Eastern Arabic-Indic digits U+0660-0669
    Arabic,
}

impl Default for NumeralMode {
    fn default() -> Self {
        Self::Western
    }
}

impl NumeralMode {
    /// Get the wire/code identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Western => "western",
            Self::Arabic => "arabic",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "western" => Some(Self::Western),
            "arabic" => Some(Self::Arabic),
            _ => None,
        }
    }
}

impl std::str::FromStr for NumeralMode {
    type Err = LahjaError;

    fn from_str(s: &str) -> Result<Self> {
        NumeralMode::from_str(s).ok_or_else(|| LahjaError::UnknownNumeralMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_code() {
        assert_eq!(ArabicMode::Msa.code(), "msa");
        assert_eq!(ArabicMode::Arabizi.code(), "arabizi");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(ArabicMode::from_str("msa"), Some(ArabicMode::Msa));
        assert_eq!(ArabicMode::from_str("فصحى"), Some(ArabicMode::Msa));
        assert_eq!(ArabicMode::from_str("ARABIZI"), Some(ArabicMode::Arabizi));
        assert_eq!(ArabicMode::from_str("klingon"), None);
    }

    #[test]
    fn test_strict_parse_reports_input() {
        let err = "klingon".parse::<DialectPreset>().unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!(
            DialectPreset::from_str("egyptian"),
            Some(DialectPreset::Egyptian)
        );
        assert_eq!(
            DialectPreset::from_str("shami"),
            Some(DialectPreset::Levantine)
        );
        assert_eq!(DialectPreset::from_str("خليجي"), Some(DialectPreset::Gulf));
        assert_eq!(DialectPreset::from_str(""), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ArabicMode::default(), ArabicMode::English);
        assert_eq!(DialectPreset::default(), DialectPreset::Msa);
        assert_eq!(Formality::default(), Formality::Casual);
        assert_eq!(CodeSwitchMode::default(), CodeSwitchMode::Mixed);
        assert_eq!(NumeralMode::default(), NumeralMode::Western);
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&CodeSwitchMode::ArabicOnly).unwrap(),
            "\"arabic_only\""
        );
        assert_eq!(
            serde_json::from_str::<ArabicMode>("\"msa\"").unwrap(),
            ArabicMode::Msa
        );
        assert_eq!(
            serde_json::from_str::<NumeralMode>("\"arabic\"").unwrap(),
            NumeralMode::Arabic
        );
    }

    #[test]
    fn test_all_modes_round_trip_code() {
        for mode in ArabicMode::all() {
            assert_eq!(ArabicMode::from_str(mode.code()), Some(*mode));
        }
        for preset in DialectPreset::all() {
            assert_eq!(DialectPreset::from_str(preset.code()), Some(*preset));
        }
    }
}
