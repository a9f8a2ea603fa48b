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

//! Lahja Text
//!
//! Arabic text processing for the Lahja chat pipeline: script and mode
//! classification, dialect detection, orthography normalization, Arabizi
//! transliteration, digit-system conversion, bidi isolation of LTR
//! fragments, and locale-aware number and date formatting.
//!
//! Every transform in this crate is a total function over `&str`: no
//! panics, no I/O, no ambient state. Callers pass preferences explicitly
//! through [`lahja_core::FormattingContext`] and
//! [`lahja_core::NormalizationOptions`].

pub mod arabizi;
pub mod bidi;
pub mod chars;
pub mod classify;
pub mod dialect;
pub mod format;
pub mod normalize;
pub mod numerals;

pub use arabizi::convert_arabizi;
pub use bidi::{apply_bidi_isolation, BidiIsolator, LRI, PDI};
pub use classify::{classify_mode, text_direction, ModeClassifier, TextDirection};
pub use dialect::{detect_dialect, DialectDetector};
pub use format::{FormatterCache, Locale, MessageFormatter, DEFAULT_ENGINE_CAPACITY};
pub use normalize::normalize;
pub use numerals::{apply_numeral_policy, to_eastern_digits, to_western_digits};
