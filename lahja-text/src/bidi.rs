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

//! Bidi isolation for LTR fragments inside RTL paragraphs.
//!
//! Code spans, URLs, emails and technical identifiers render scrambled
//! when the Unicode bidi algorithm reorders them inside Arabic text.
//! Wrapping each fragment in an LRI/PDI isolate pair pins its internal
//! order without affecting the surrounding paragraph.
//!
//! Rules run as sequential passes over the whole string, broadest first:
//! code spans, then URLs, then emails, then kebab/snake identifiers, then
//! camelCase. A later pass never rewrites inside an isolate that an
//! earlier pass (or the caller) already placed, so "user-data" inside an
//! isolated URL stays a URL fragment instead of gaining a second wrapper.

use once_cell::sync::Lazy;
use regex::Regex;

/// Left-to-right isolate initiator (U+2066).
pub const LRI: char = '\u{2066}';
/// Pop directional isolate (U+2069).
pub const PDI: char = '\u{2069}';

/// Ordered isolation rules over precompiled patterns.
pub struct BidiIsolator {
    rules: Vec<Regex>,
}

impl BidiIsolator {
    pub fn new() -> Self {
        let rules = vec![
            // Inline code spans, backticks included
            Regex::new(r"`[^`]+`").unwrap(),
            // URLs; stop at whitespace or an isolate boundary
            Regex::new(r"https?://[^\s\x{2066}\x{2069}]+").unwrap(),
            // Email addresses
            Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap(),
            // kebab-case and snake_case identifiers. ASCII boundaries so
            // an identifier glued to Arabic text still matches.
            Regex::new(r"(?-u:\b)[A-Za-z][A-Za-z0-9]*(?:[-_][A-Za-z0-9]+)+(?-u:\b)").unwrap(),
            // camelCase identifiers
            Regex::new(r"(?-u:\b)[a-z]+[A-Z][A-Za-z0-9]*(?-u:\b)").unwrap(),
        ];
        Self { rules }
    }

    /// Wrap every LTR-foreign fragment in an LRI/PDI pair.
    pub fn isolate(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| wrap_rule(&acc, rule))
    }
}

impl Default for BidiIsolator {
    fn default() -> Self {
        Self::new()
    }
}

static ISOLATOR: Lazy<BidiIsolator> = Lazy::new(BidiIsolator::new);

/// Isolate with the shared default rule set.
pub fn apply_bidi_isolation(text: &str) -> String {
    ISOLATOR.isolate(text)
}

/// Apply one rule across the text, leaving matches that touch an
/// existing isolate untouched.
fn wrap_rule(text: &str, rule: &Regex) -> String {
    let protected = isolate_spans(text);
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in rule.find_iter(text) {
        let shielded = protected
            .iter()
            .any(|&(start, end)| m.start() < end && start < m.end());
        out.push_str(&text[last..m.start()]);
        if shielded {
            out.push_str(m.as_str());
        } else {
            out.push(LRI);
            out.push_str(m.as_str());
            out.push(PDI);
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Byte ranges of top-level LRI..PDI pairs, the markers themselves
/// included. Unbalanced markers protect nothing.
fn isolate_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    for (i, c) in text.char_indices() {
        if c == LRI {
            stack.push(i);
        } else if c == PDI {
            if let Some(start) = stack.pop() {
                if stack.is_empty() {
                    spans.push((start, i + c.len_utf8()));
                }
            }
        }
    }
    spans
}
