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

//! Arabic Character Classes
//!
//! Shared character tables and predicates used by the classifier, the
//! normalizer, and the digit transforms.

/// Eastern Arabic-Indic digits (U+0660..U+0669), indexed by value.
pub const EASTERN_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Arabic sentence punctuation that takes a trailing space.
pub const SENTENCE_PUNCTUATION: [char; 4] = ['،', '؛', '؟', '!'];

/// Tatweel (kashida), the elongation character U+0640.
pub const TATWEEL: char = '\u{0640}';

/// True for characters in the core Arabic Unicode blocks
/// (U+0600-06FF and the Supplement U+0750-077F).
pub fn is_arabic_char(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}')
}

/// True for ASCII Latin letters.
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// True for Eastern Arabic-Indic digits.
pub fn is_eastern_digit(c: char) -> bool {
    matches!(c, '\u{0660}'..='\u{0669}')
}

/// Numeric value of an Eastern Arabic-Indic digit.
pub fn eastern_digit_value(c: char) -> Option<u8> {
    if is_eastern_digit(c) {
        Some((c as u32 - 0x0660) as u8)
    } else {
        None
    }
}

/// True for tashkeel marks (short vowels, tanween, shadda, sukun, and
/// the dagger alef).
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

/// True for Arabic sentence punctuation.
pub fn is_sentence_punctuation(c: char) -> bool {
    SENTENCE_PUNCTUATION.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_block_ranges() {
        assert!(is_arabic_char('م'));
        assert!(is_arabic_char('ء'));
        assert!(is_arabic_char('\u{0750}'));
        assert!(!is_arabic_char('a'));
        assert!(!is_arabic_char('5'));
    }

    #[test]
    fn test_eastern_digits() {
        assert!(is_eastern_digit('٣'));
        assert!(!is_eastern_digit('3'));
        assert_eq!(eastern_digit_value('٠'), Some(0));
        assert_eq!(eastern_digit_value('٩'), Some(9));
        assert_eq!(eastern_digit_value('9'), None);
        for (value, digit) in EASTERN_DIGITS.iter().enumerate() {
            assert_eq!(eastern_digit_value(*digit), Some(value as u8));
        }
    }

    #[test]
    fn test_diacritics() {
        assert!(is_diacritic('\u{064B}')); // fathatan
        assert!(is_diacritic('\u{0651}')); // shadda
        assert!(is_diacritic('\u{0670}')); // dagger alef
        assert!(!is_diacritic('م'));
    }

    #[test]
    fn test_sentence_punctuation() {
        assert!(is_sentence_punctuation('؟'));
        assert!(is_sentence_punctuation('،'));
        assert!(is_sentence_punctuation('!'));
        assert!(!is_sentence_punctuation('.'));
        assert!(!is_sentence_punctuation('?'));
    }
}
