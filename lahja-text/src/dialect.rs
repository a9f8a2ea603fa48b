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

//! Dialect Detector
//!
//! Scans text for high-frequency lexical markers of four regional Arabic
//! dialects. Detection is table-driven: marker lists are tested in
//! canonical order {egyptian, gulf, levantine, maghrebi} and the first
//! list with a hit wins. Text mixing markers from several dialects
//! therefore resolves to the earliest entry; callers that need a
//! different tie-break must score matches themselves.

use lahja_core::DialectPreset;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Regex-table dialect detector.
pub struct DialectDetector {
    markers: Vec<(DialectPreset, Regex)>,
}

impl DialectDetector {
    /// Create a detector with the built-in marker tables.
    pub fn new() -> Self {
        Self {
            markers: Self::build_markers(),
        }
    }

    fn build_markers() -> Vec<(DialectPreset, Regex)> {
        vec![
            // Function words and particles, word-bounded so substrings
            // inside longer words never fire (e.g. "مش" in "مشروع").
            (
                DialectPreset::Egyptian,
                Regex::new(r"\b(إيه|ايه|عايز|عاوز|إزاي|دلوقتي|مش|كده)\b").unwrap(),
            ),
            (
                DialectPreset::Gulf,
                Regex::new(r"\b(شلون|شلونك|وش|أبغى|ابغى|وايد|الحين|ترى)\b").unwrap(),
            ),
            (
                DialectPreset::Levantine,
                Regex::new(r"\b(شو|كيفك|هيك|بدي|هلق|هلأ|منيح|ليش)\b").unwrap(),
            ),
            (
                DialectPreset::Maghrebi,
                Regex::new(r"\b(واش|بزاف|كيفاش|دابا|شحال|مزيان|غادي)\b").unwrap(),
            ),
        ]
    }

    /// Detect the dialect of a text span, if any marker matches.
    pub fn detect(&self, text: &str) -> Option<DialectPreset> {
        for (preset, regex) in &self.markers {
            if regex.is_match(text) {
                trace!(dialect = preset.code(), "dialect marker matched");
                return Some(*preset);
            }
        }
        None
    }
}

impl Default for DialectDetector {
    fn default() -> Self {
        Self::new()
    }
}

static DETECTOR: Lazy<DialectDetector> = Lazy::new(DialectDetector::new);

/// Detect with the shared default detector.
pub fn detect_dialect(text: &str) -> Option<DialectPreset> {
    DETECTOR.detect(text)
}
