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

//! Arabizi Transliterator
//!
//! Rewrites Latin-keyboard Arabic ("chat alphabet") into Arabic script in
//! two phases. Phase one maps the conventional digit stand-ins to their
//! letters, globally and context-free; digits inside phone numbers get
//! rewritten too, which users of the chat alphabet accept as the cost of
//! the convention. Phase two replaces whole transliterated words from a
//! small dictionary, case-insensitively. Phase order is load-bearing:
//! "7abibi" only reaches the dictionary after the 7 has become a letter,
//! which is why the dictionary also carries the post-digit spelling of
//! that word.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Whole words the dictionary can rewrite, matched case-insensitively.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(marhaba|shukran|habibi|حabibi|yalla|kif|shu|ana|inta)\b").unwrap()
});

static WORD_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("kif", "كيف"),
        ("shu", "شو"),
        ("marhaba", "مرحبا"),
        ("shukran", "شكراً"),
        ("habibi", "حبيبي"),
        // "7abibi" after digit substitution
        ("حabibi", "حبيبي"),
        ("yalla", "يالله"),
        ("ana", "أنا"),
        ("inta", "أنت"),
    ])
});

/// Map the Arabizi digit stand-ins to Arabic letters. Context-free on
/// purpose: the convention uses bare digits, so there is nothing local
/// to disambiguate a phonetic 7 from a numeric one.
fn substitute_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '2' => 'ء',
            '3' => 'ع',
            '5' => 'خ',
            '6' => 'ط',
            '7' => 'ح',
            '8' => 'غ',
            '9' => 'ق',
            other => other,
        })
        .collect()
}

/// Convert Arabizi text to Arabic script. Digit substitution runs first,
/// then the word dictionary; unknown words keep their (digit-substituted)
/// spelling.
pub fn convert_arabizi(text: &str) -> String {
    let substituted = substitute_digits(text);
    WORD_PATTERN
        .replace_all(&substituted, |caps: &regex::Captures| {
            let lowered = caps[0].to_lowercase();
            match WORD_MAP.get(lowered.as_str()) {
                Some(arabic) => (*arabic).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
