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

//! Script/Mode Classifier
//!
//! Decides how a message is written: MSA, regional dialect, mixed
//! Arabic/Latin, Arabizi, or English. Classification is a priority
//! ladder and the first matching rule wins:
//!
//! 1. Arabizi cues (letter-adjacent digits or whitelist words) — checked
//!    first because Arabizi is Latin-dominant and every later rule would
//!    call it English.
//! 2. No Arabic characters but Latin letters present: English.
//! 3. Latin count above 30% of the Arabic count: mixed.
//! 4. A dialect marker matches: dialect.
//! 5. Any Arabic characters: MSA.
//! 6. Fallback (empty or symbol-only input): English.
//!
//! Total and deterministic for every input string.

use crate::chars::{is_arabic_char, is_latin_letter};
use crate::dialect::DialectDetector;
use lahja_core::ArabicMode;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Latin-to-Arabic letter ratio above which text counts as mixed.
const MIXED_LATIN_RATIO: f64 = 0.3;

/// Per-script letter counts for a text span.
#[derive(Debug, Clone, Copy, Default)]
struct ScriptCounts {
    arabic: usize,
    latin: usize,
}

impl ScriptCounts {
    fn of(text: &str) -> Self {
        let mut counts = Self::default();
        for c in text.chars() {
            if is_arabic_char(c) {
                counts.arabic += 1;
            } else if is_latin_letter(c) {
                counts.latin += 1;
            }
        }
        counts
    }
}

/// Script/mode classifier with precompiled Arabizi patterns.
pub struct ModeClassifier {
    /// Digits 2,3,5,6,7,8,9 standing in for Arabic letters
    arabizi_digits: Regex,
    /// Common transliterated words carrying no digit cue
    arabizi_words: Regex,
    detector: DialectDetector,
}

impl ModeClassifier {
    /// Create a classifier with the built-in patterns.
    pub fn new() -> Self {
        Self {
            arabizi_digits: Regex::new(r"(?i)[a-z][2356789]|[2356789][a-z]").unwrap(),
            arabizi_words: Regex::new(r"(?i)\b(ma3|7abibi|3arabi|kif|shukran)\b").unwrap(),
            detector: DialectDetector::new(),
        }
    }

    /// Classify a text span. Never fails; empty and symbol-only input
    /// classify as English.
    pub fn classify(&self, text: &str) -> ArabicMode {
        let mode = self.classify_inner(text);
        debug!(mode = mode.code(), "classified message script");
        mode
    }

    fn classify_inner(&self, text: &str) -> ArabicMode {
        if self.arabizi_digits.is_match(text) || self.arabizi_words.is_match(text) {
            return ArabicMode::Arabizi;
        }

        let counts = ScriptCounts::of(text);
        if counts.arabic == 0 && counts.latin > 0 {
            return ArabicMode::English;
        }
        if counts.arabic > 0 && counts.latin as f64 > counts.arabic as f64 * MIXED_LATIN_RATIO {
            return ArabicMode::Mixed;
        }
        if self.detector.detect(text).is_some() {
            return ArabicMode::Dialect;
        }
        if counts.arabic > 0 {
            return ArabicMode::Msa;
        }
        ArabicMode::English
    }
}

impl Default for ModeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

static CLASSIFIER: Lazy<ModeClassifier> = Lazy::new(ModeClassifier::new);

/// Classify with the shared default classifier.
pub fn classify_mode(text: &str) -> ArabicMode {
    CLASSIFIER.classify(text)
}

/// Paragraph direction for a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    /// Right-to-left
    Rtl,
    /// Left-to-right
    Ltr,
    /// No letters either way; let the renderer decide
    Auto,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
            TextDirection::Auto => "auto",
        }
    }
}

/// Pick the paragraph direction for a message bubble.
pub fn text_direction(text: &str) -> TextDirection {
    let counts = ScriptCounts::of(text);
    if counts.arabic == 0 && counts.latin == 0 {
        TextDirection::Auto
    } else if counts.arabic >= counts.latin {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_english() {
        assert_eq!(classify_mode(""), ArabicMode::English);
    }

    #[test]
    fn test_symbols_only_is_english() {
        assert_eq!(classify_mode("!!! ... 123"), ArabicMode::English);
    }

    #[test]
    fn test_plain_english() {
        assert_eq!(classify_mode("hello, how are you?"), ArabicMode::English);
    }

    #[test]
    fn test_msa() {
        assert_eq!(classify_mode("كيف حالك اليوم؟"), ArabicMode::Msa);
        assert_eq!(
            classify_mode("أريد أن أتعلم البرمجة"),
            ArabicMode::Msa
        );
    }

    #[test]
    fn test_dialect() {
        assert_eq!(classify_mode("إيه الأخبار؟ عايز أروح"), ArabicMode::Dialect);
        assert_eq!(classify_mode("شو بدك تعمل؟"), ArabicMode::Dialect);
    }

    #[test]
    fn test_arabizi_by_digits() {
        assert_eq!(classify_mode("ana raye7 3al bet"), ArabicMode::Arabizi);
        assert_eq!(classify_mode("7abibi keefak"), ArabicMode::Arabizi);
    }

    #[test]
    fn test_arabizi_by_whitelist_word() {
        // No digits at all; the whitelist is what catches these.
        assert_eq!(classify_mode("shukran ktir"), ArabicMode::Arabizi);
        assert_eq!(classify_mode("kif halak"), ArabicMode::Arabizi);
    }

    #[test]
    fn test_arabizi_checked_before_english() {
        // Latin-dominant text that the ratio rules would call English.
        assert_eq!(classify_mode("ma3 salama"), ArabicMode::Arabizi);
    }

    #[test]
    fn test_mixed() {
        // 7 Arabic letters vs 4 Latin letters: 4 > 0.3 * 7.
        assert_eq!(classify_mode("هذا test كبير"), ArabicMode::Mixed);
    }

    #[test]
    fn test_mixed_beats_dialect() {
        // Contains the Egyptian marker "مش" but Latin dominates the ratio.
        assert_eq!(
            classify_mode("مش ok يعني literally خالص"),
            ArabicMode::Mixed
        );
    }

    #[test]
    fn test_small_latin_share_stays_arabic() {
        // One Latin letter against a long Arabic sentence stays MSA.
        assert_eq!(
            classify_mode("أريد أن أتعلم البرمجة بلغة c الآن"),
            ArabicMode::Msa
        );
    }

    #[test]
    fn test_direction() {
        assert_eq!(text_direction("مرحبا بالعالم"), TextDirection::Rtl);
        assert_eq!(text_direction("hello world"), TextDirection::Ltr);
        assert_eq!(text_direction("123 ..."), TextDirection::Auto);
        assert_eq!(text_direction(""), TextDirection::Auto);
    }
}
