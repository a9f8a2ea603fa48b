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

//! Orthography Normalizer
//!
//! Canonicalizes Arabic spelling variants so that lookups and dedup keys
//! agree regardless of how the sender typed the word. Rewrites run in a
//! fixed order: diacritic strip, tatweel strip, Hamza folding, word-final
//! Alef-Maksura, word-final Ta-Marbuta, punctuation spacing. Every rewrite
//! is idempotent and the whole pipeline never fails; text with nothing to
//! rewrite passes through unchanged.

use crate::chars::{is_diacritic, is_sentence_punctuation, TATWEEL};
use lahja_core::NormalizationOptions;
use once_cell::sync::Lazy;
use regex::Regex;

// Word-final means followed by whitespace, sentence punctuation, or end of
// input. Sentence punctuation must count as a boundary here: the spacing
// fix below inserts spaces after it, so anchoring on whitespace alone would
// expose new matches on a second pass and break idempotence.
static WORD_FINAL_ALEF_MAKSURA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ى([\s،؛؟!]|$)").unwrap());
static WORD_FINAL_TA_MARBUTA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ة([\s،؛؟!]|$)").unwrap());

/// Normalize Arabic orthography according to `options`.
pub fn normalize(text: &str, options: &NormalizationOptions) -> String {
    if options.is_noop() {
        return text.to_string();
    }

    let mut out = text.to_string();
    if options.strip_diacritics {
        out.retain(|c| !is_diacritic(c));
    }
    if options.strip_tatweel {
        out.retain(|c| c != TATWEEL);
    }
    if options.normalize_hamza {
        out = fold_hamza(&out);
    }
    if options.normalize_ya {
        out = WORD_FINAL_ALEF_MAKSURA.replace_all(&out, "ي${1}").into_owned();
    }
    if options.normalize_ta_marbuta {
        out = WORD_FINAL_TA_MARBUTA.replace_all(&out, "ه${1}").into_owned();
    }
    if options.fix_punctuation {
        out = fix_punctuation_spacing(&out);
    }
    out
}

/// Fold the Alef-Hamza variants onto bare Alef.
fn fold_hamza(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'أ' | 'إ' | 'آ' => 'ا',
            other => other,
        })
        .collect()
}

/// Strip whitespace before Arabic sentence punctuation and guarantee a
/// space after it (unless already followed by whitespace or at the end).
fn fix_punctuation_spacing(text: &str) -> String {
    // Drop whitespace runs that sit directly before sentence punctuation.
    let mut stripped = String::with_capacity(text.len());
    let mut pending_ws = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            pending_ws.push(c);
        } else {
            if is_sentence_punctuation(c) {
                pending_ws.clear();
            }
            stripped.push_str(&pending_ws);
            pending_ws.clear();
            stripped.push(c);
        }
    }
    stripped.push_str(&pending_ws);

    // Insert a single space after punctuation glued to the next word.
    let mut out = String::with_capacity(stripped.len());
    let mut chars = stripped.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if is_sentence_punctuation(c) {
            if let Some(&next) = chars.peek() {
                if !next.is_whitespace() {
                    out.push(' ');
                }
            }
        }
    }
    out
}
