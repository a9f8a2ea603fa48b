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

//! Property tests for the text transforms.

use lahja_core::NormalizationOptions;
use lahja_text::{
    apply_bidi_isolation, classify_mode, convert_arabizi, normalize, to_eastern_digits,
    to_western_digits, LRI, PDI,
};
use proptest::prelude::*;

/// Arabic-leaning text with Latin, digits, diacritics and punctuation
/// mixed in, so the rewrite rules actually fire.
fn arabic_ish() -> impl Strategy<Value = String> {
    proptest::string::string_regex(
        "[ابتثجحخدذرزسشصضطظعغفقكلمنهويىةءأإآـًٌٍَُِّْ0-9a-z،؛؟! .\n]{0,60}",
    )
    .unwrap()
}

fn any_options() -> impl Strategy<Value = NormalizationOptions> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(
                strip_diacritics,
                strip_tatweel,
                normalize_hamza,
                normalize_ya,
                normalize_ta_marbuta,
                fix_punctuation,
            )| NormalizationOptions {
                strip_diacritics,
                strip_tatweel,
                normalize_hamza,
                normalize_ya,
                normalize_ta_marbuta,
                fix_punctuation,
            },
        )
}

fn count(text: &str, marker: char) -> usize {
    text.chars().filter(|&c| c == marker).count()
}

proptest! {
    /// Normalizing twice equals normalizing once, whatever the options.
    #[test]
    fn normalize_is_idempotent(text in arabic_ish(), options in any_options()) {
        let once = normalize(&text, &options);
        let twice = normalize(&once, &options);
        prop_assert_eq!(once, twice);
    }

    /// Eastern conversion followed by Western restores the input.
    #[test]
    fn numerals_round_trip(text in "[0-9a-z ،؟]{0,40}") {
        let eastern = to_eastern_digits(&text);
        prop_assert_eq!(to_western_digits(&eastern), text);
    }

    /// Converting in one direction twice is the same as once.
    #[test]
    fn numeral_conversion_is_a_projection(text in "[0-9٠-٩ a-z]{0,40}") {
        let eastern = to_eastern_digits(&text);
        prop_assert_eq!(to_eastern_digits(&eastern), eastern.clone());
        let western = to_western_digits(&text);
        prop_assert_eq!(to_western_digits(&western), western.clone());
    }

    /// The classifier accepts any string and is deterministic.
    #[test]
    fn classifier_is_total(text: String) {
        prop_assert_eq!(classify_mode(&text), classify_mode(&text));
    }

    /// Isolation always inserts markers in matched pairs.
    #[test]
    fn bidi_markers_stay_balanced(text: String) {
        let out = apply_bidi_isolation(&text);
        let added_lri = count(&out, LRI) - count(&text, LRI);
        let added_pdi = count(&out, PDI) - count(&text, PDI);
        prop_assert_eq!(added_lri, added_pdi);
    }

    /// Arabizi conversion reaches a fixed point in one application.
    #[test]
    fn arabizi_conversion_is_idempotent(text in "[a-z0-9 !?]{0,40}") {
        let once = convert_arabizi(&text);
        let twice = convert_arabizi(&once);
        prop_assert_eq!(once, twice);
    }
}
