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

//! Digit-system conversion between ASCII (0-9) and Eastern Arabic-Indic
//! (٠-٩) numerals. Both directions are character-for-character and leave
//! everything that is not a digit of the source system untouched, so the
//! pair round-trips losslessly.

use crate::chars::{eastern_digit_value, EASTERN_DIGITS};
use lahja_core::{FormattingContext, NumeralMode};

/// Rewrite ASCII digits as Eastern Arabic-Indic digits.
pub fn to_eastern_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                EASTERN_DIGITS[(c as usize) - ('0' as usize)]
            } else {
                c
            }
        })
        .collect()
}

/// Rewrite Eastern Arabic-Indic digits as ASCII digits.
pub fn to_western_digits(text: &str) -> String {
    text.chars()
        .map(|c| match eastern_digit_value(c) {
            Some(value) => (b'0' + value) as char,
            None => c,
        })
        .collect()
}

/// Rewrite digits to match the caller's numeral preference.
pub fn apply_numeral_policy(text: &str, context: &FormattingContext) -> String {
    match context.numeral_mode {
        NumeralMode::Arabic => to_eastern_digits(text),
        NumeralMode::Western => to_western_digits(text),
    }
}
