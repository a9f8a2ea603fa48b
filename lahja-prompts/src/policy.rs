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

//! Dialect Policy Prompts
//!
//! Turns a conversation's dialect configuration into the natural-language
//! style block spliced into the assistant system prompt. Pure string
//! assembly over [`DialectOptions`]; a missing or unknown dialect falls
//! back to Modern Standard Arabic rather than failing the prompt build.
//!
//! Fragments are appended in a fixed order: dialect paragraph, formality
//! clause, code-switch clause, then (only for Eastern-digit users) the
//! numeral clause.

use lahja_core::{CodeSwitchMode, DialectOptions, DialectPreset, Formality, NumeralMode};
use tracing::debug;

/// Build the Arabic style policy block for the system prompt.
pub fn build_policy_block(options: &DialectOptions) -> String {
    let dialect = options.effective_dialect();
    debug!(dialect = dialect.code(), "building dialect policy block");

    let mut block = format!(
        r#"## Arabic Style Policy

{dialect_paragraph}

{formality}

{code_switch}"#,
        dialect_paragraph = dialect_paragraph(dialect),
        formality = formality_clause(options.formality),
        code_switch = code_switch_clause(options.code_switch),
    );

    if options.numeral_mode == NumeralMode::Arabic {
        block.push_str("\n\n");
        block.push_str(NUMERAL_CLAUSE);
    }

    block
}

/// Canned style paragraph for one dialect preset.
fn dialect_paragraph(dialect: DialectPreset) -> &'static str {
    match dialect {
        DialectPreset::Msa => {
            "Respond in Modern Standard Arabic (الفصحى). Keep sentences clear and grammatical, \
             as in news writing or professional correspondence. \
             Examples: \"كيف يمكنني مساعدتك اليوم؟\"، \"بالتأكيد، سأشرح لك الخطوات\"."
        }
        DialectPreset::Egyptian => {
            "Respond in Egyptian Arabic (مصري), the everyday Cairo register. Use Egyptian \
             vocabulary and verb forms naturally. \
             Examples: \"إزيك؟ عامل إيه؟\"، \"تمام كده، هشرحلك حالاً\"، \"مش مشكلة خالص\"."
        }
        DialectPreset::Gulf => {
            "Respond in Gulf Arabic (خليجي) as spoken around the Arabian peninsula. \
             Examples: \"شلونك؟ شخبارك؟\"، \"أبشر، الحين أسويها لك\"، \"وايد زين\"."
        }
        DialectPreset::Levantine => {
            "Respond in Levantine Arabic (شامي) as spoken in the Levant. \
             Examples: \"كيفك؟ شو أخبارك؟\"، \"منيح كتير\"، \"هلق بشرحلك كل شي\"."
        }
        DialectPreset::Maghrebi => {
            "Respond in Maghrebi Arabic (مغاربي) as spoken across North Africa. \
             Examples: \"كيداير؟ لاباس؟\"، \"دابا نديرها ليك\"، \"مزيان بزاف\"."
        }
    }
}

fn formality_clause(formality: Formality) -> &'static str {
    match formality {
        Formality::Formal => {
            "Maintain a formal register throughout: address the user respectfully \
             (حضرتك where natural), avoid slang, and keep honorifics."
        }
        Formality::Casual => {
            "Keep the tone casual and warm, like texting a friend. Short sentences \
             are fine; drop honorifics unless the user uses them first."
        }
    }
}

fn code_switch_clause(mode: CodeSwitchMode) -> &'static str {
    match mode {
        CodeSwitchMode::ArabicOnly => {
            "Write Arabic exclusively. Translate technical terms into Arabic where an \
             accepted translation exists; leave code identifiers and commands untranslated."
        }
        CodeSwitchMode::Mixed => {
            "Arabic is the base language, but keep technical terms people say in English \
             (API, deployment, commit) in English. Do not force awkward translations."
        }
    }
}

const NUMERAL_CLAUSE: &str =
    "Write numbers with Eastern Arabic-Indic digits (٠١٢٣٤٥٦٧٨٩) in prose. Keep ASCII \
     digits inside code, URLs, and identifiers.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_order() {
        let options = DialectOptions {
            dialect: Some(DialectPreset::Levantine),
            formality: Formality::Formal,
            code_switch: CodeSwitchMode::ArabicOnly,
            numeral_mode: NumeralMode::Arabic,
        };
        let block = build_policy_block(&options);

        let dialect_at = block.find("Levantine").unwrap();
        let formality_at = block.find("formal register").unwrap();
        let code_switch_at = block.find("Arabic exclusively").unwrap();
        let numeral_at = block.find("Arabic-Indic").unwrap();

        assert!(dialect_at < formality_at);
        assert!(formality_at < code_switch_at);
        assert!(code_switch_at < numeral_at);
    }

    #[test]
    fn test_missing_dialect_falls_back_to_msa() {
        let options = DialectOptions::default();
        let block = build_policy_block(&options);
        assert!(block.contains("Modern Standard Arabic"));
    }

    #[test]
    fn test_numeral_clause_only_for_eastern_digits() {
        let western = DialectOptions::default();
        assert!(!build_policy_block(&western).contains("Arabic-Indic"));

        let arabic = DialectOptions {
            numeral_mode: NumeralMode::Arabic,
            ..Default::default()
        };
        assert!(build_policy_block(&arabic).contains("Arabic-Indic"));
    }

    #[test]
    fn test_every_dialect_carries_example_phrases() {
        let phrases = [
            (DialectPreset::Msa, "كيف يمكنني مساعدتك اليوم؟"),
            (DialectPreset::Egyptian, "إزيك؟ عامل إيه؟"),
            (DialectPreset::Gulf, "شلونك؟ شخبارك؟"),
            (DialectPreset::Levantine, "كيفك؟ شو أخبارك؟"),
            (DialectPreset::Maghrebi, "كيداير؟ لاباس؟"),
        ];
        for (preset, phrase) in phrases {
            let options = DialectOptions {
                dialect: Some(preset),
                ..Default::default()
            };
            let block = build_policy_block(&options);
            assert!(
                block.contains(phrase),
                "missing example for {}",
                preset.code()
            );
        }
    }

    #[test]
    fn test_casual_mixed_defaults() {
        let block = build_policy_block(&DialectOptions::default());
        assert!(block.contains("casual"));
        assert!(block.contains("base language"));
    }
}
