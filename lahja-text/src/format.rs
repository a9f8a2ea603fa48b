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

//! Locale-aware number, currency, percent and date formatting.
//!
//! A [`MessageFormatter`] renders values under the locale implied by the
//! caller's [`FormattingContext`]: en-US for Western numerals, ar-EG for
//! Eastern. Formatting engines are immutable once built, so the
//! formatter memoizes them in a bounded cache keyed by locale, style and
//! fraction-digit settings. Every render is total: non-finite input
//! falls back to plain fixed-decimal output instead of failing.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use lahja_core::{FormattingContext, NumeralMode};
use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::numerals::to_eastern_digits;

/// Engines alive per cache before eviction kicks in.
pub const DEFAULT_ENGINE_CAPACITY: u64 = 32;

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Rendering locale for numbers and dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "ar-EG")]
    ArEg,
}

impl Locale {
    /// BCP 47 tag for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::ArEg => "ar-EG",
        }
    }

    /// Locale implied by the caller's numeral preference.
    pub fn for_context(context: &FormattingContext) -> Self {
        match context.numeral_mode {
            NumeralMode::Western => Locale::EnUs,
            NumeralMode::Arabic => Locale::ArEg,
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Locale::EnUs => ',',
            Locale::ArEg => '\u{066C}',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs => '.',
            Locale::ArEg => '\u{066B}',
        }
    }

    fn percent_sign(&self) -> char {
        match self {
            Locale::EnUs => '%',
            Locale::ArEg => '\u{066A}',
        }
    }

    fn localize_digits(&self, text: &str) -> String {
        match self {
            Locale::EnUs => text.to_string(),
            Locale::ArEg => to_eastern_digits(text),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EnUs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FormatStyle {
    Decimal,
    Currency,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EngineKey {
    locale: Locale,
    style: FormatStyle,
    min_fraction: u8,
    max_fraction: u8,
}

/// One immutable number-rendering configuration.
struct NumberEngine {
    locale: Locale,
    style: FormatStyle,
    min_fraction: u8,
    max_fraction: u8,
}

impl NumberEngine {
    fn new(key: EngineKey) -> Self {
        Self {
            locale: key.locale,
            style: key.style,
            min_fraction: key.min_fraction,
            max_fraction: key.max_fraction,
        }
    }

    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            // Fixed-decimal fallback keeps rendering total.
            return format!("{:.*}", self.min_fraction as usize, value);
        }

        let negative = value < 0.0;
        let fixed = format!("{:.*}", self.max_fraction as usize, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (fixed.as_str(), ""),
        };

        let mut frac = frac_part.to_string();
        while frac.len() > self.min_fraction as usize && frac.ends_with('0') {
            frac.pop();
        }

        let mut body = group_thousands(int_part, self.locale.group_separator());
        if !frac.is_empty() {
            body.push(self.locale.decimal_separator());
            body.push_str(&frac);
        }
        let body = self.locale.localize_digits(&body);

        let adorned = match self.style {
            FormatStyle::Decimal => body,
            FormatStyle::Currency => match self.locale {
                Locale::EnUs => format!("${body}"),
                Locale::ArEg => format!("{body}\u{00A0}US$"),
            },
            FormatStyle::Percent => format!("{body}{}", self.locale.percent_sign()),
        };
        if negative {
            format!("-{adorned}")
        } else {
            adorned
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(*c);
    }
    out
}

struct DateEngine {
    locale: Locale,
}

impl DateEngine {
    fn format(&self, date: NaiveDate) -> String {
        let month = date.month0() as usize;
        match self.locale {
            Locale::EnUs => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
            Locale::ArEg => {
                to_eastern_digits(&format!("{} {} {}", date.day(), MONTHS_AR[month], date.year()))
            }
        }
    }
}

/// Bounded, caller-owned store of formatting engines.
pub struct FormatterCache {
    numbers: Cache<EngineKey, Arc<NumberEngine>>,
    dates: Cache<Locale, Arc<DateEngine>>,
}

impl FormatterCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            numbers: Cache::new(capacity),
            dates: Cache::new(capacity),
        }
    }

    fn number_engine(&self, key: EngineKey) -> Arc<NumberEngine> {
        if let Some(engine) = self.numbers.get(&key) {
            return engine;
        }
        trace!(locale = key.locale.code(), "building number format engine");
        let engine = Arc::new(NumberEngine::new(key));
        self.numbers.insert(key, engine.clone());
        engine
    }

    fn date_engine(&self, locale: Locale) -> Arc<DateEngine> {
        if let Some(engine) = self.dates.get(&locale) {
            return engine;
        }
        trace!(locale = locale.code(), "building date format engine");
        let engine = Arc::new(DateEngine { locale });
        self.dates.insert(locale, engine.clone());
        engine
    }

    /// Live engines across both stores.
    pub fn entry_count(&self) -> u64 {
        self.numbers.run_pending_tasks();
        self.dates.run_pending_tasks();
        self.numbers.entry_count() + self.dates.entry_count()
    }
}

/// Locale-aware formatter over a bounded engine cache.
pub struct MessageFormatter {
    cache: FormatterCache,
}

impl MessageFormatter {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ENGINE_CAPACITY)
    }

    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            cache: FormatterCache::new(capacity),
        }
    }

    /// Plain number, up to three fraction digits, trailing zeros trimmed.
    pub fn format_number(&self, value: f64, context: &FormattingContext) -> String {
        self.engine(FormatStyle::Decimal, 0, 3, context).format(value)
    }

    /// Plain number with explicit fraction-digit bounds.
    pub fn format_number_with(
        &self,
        value: f64,
        min_fraction: u8,
        max_fraction: u8,
        context: &FormattingContext,
    ) -> String {
        self.engine(FormatStyle::Decimal, min_fraction, max_fraction, context)
            .format(value)
    }

    /// USD amount, two to four fraction digits.
    pub fn format_currency(&self, value: f64, context: &FormattingContext) -> String {
        self.engine(FormatStyle::Currency, 2, 4, context).format(value)
    }

    /// Percentage value: `50.0` renders as `50%`. The percent style
    /// scales a ratio by 100, so the value is divided down first.
    pub fn format_percent(&self, value: f64, context: &FormattingContext) -> String {
        let ratio = value / 100.0;
        self.engine(FormatStyle::Percent, 0, 0, context)
            .format(ratio * 100.0)
    }

    /// Short date: "Aug 25, 2026" under en-US, "٢٥ أغسطس ٢٠٢٦" under ar-EG.
    pub fn format_date(&self, date: NaiveDate, context: &FormattingContext) -> String {
        self.cache
            .date_engine(Locale::for_context(context))
            .format(date)
    }

    /// Live engines held by the formatter's cache.
    pub fn engine_count(&self) -> u64 {
        self.cache.entry_count()
    }

    fn engine(
        &self,
        style: FormatStyle,
        min_fraction: u8,
        max_fraction: u8,
        context: &FormattingContext,
    ) -> Arc<NumberEngine> {
        let key = EngineKey {
            locale: Locale::for_context(context),
            style,
            min_fraction,
            max_fraction,
        };
        self.cache.number_engine(key)
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new()
    }
}
