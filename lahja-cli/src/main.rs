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

//! Lahja CLI
//!
//! Command-line interface for the Arabic text transforms.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lahja_core::{DialectOptions, FormattingContext, NormalizationOptions};
use lahja_prompts::build_policy_block;
use lahja_text::{
    apply_bidi_isolation, apply_numeral_policy, classify_mode, convert_arabizi, detect_dialect,
    normalize, text_direction, Locale, MessageFormatter, LRI,
};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "lahja")]
#[command(about = "Lahja - Arabic dialect text processing", long_about = None)]
struct Cli {
    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Output as JSON (machine-readable)
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify how a message is written (MSA, dialect, Arabizi, ...)
    Classify {
        /// Text to classify
        text: String,
    },

    /// Detect the regional dialect of Arabic text
    Dialect {
        /// Text to inspect
        text: String,
    },

    /// Normalize Arabic orthography
    Normalize {
        /// Text to normalize
        text: String,

        /// Apply every rewrite rule
        #[arg(long)]
        all: bool,

        /// Strip tashkeel marks
        #[arg(long)]
        strip_diacritics: bool,

        /// Strip tatweel elongation
        #[arg(long)]
        strip_tatweel: bool,

        /// Fold Hamza-on-Alef variants to bare Alef
        #[arg(long)]
        hamza: bool,

        /// Rewrite word-final Alef Maksura to Ya
        #[arg(long)]
        ya: bool,

        /// Rewrite word-final Ta Marbuta to Ha
        #[arg(long)]
        ta: bool,

        /// Fix spacing around Arabic sentence punctuation
        #[arg(long)]
        punctuation: bool,
    },

    /// Convert Arabizi (chat alphabet) to Arabic script
    Arabizi {
        /// Text to convert
        text: String,
    },

    /// Rewrite digits for a numeral preference
    Digits {
        /// Text to rewrite
        text: String,

        /// Numeral mode: western or arabic
        #[arg(long, default_value = "arabic")]
        mode: String,
    },

    /// Wrap LTR fragments (code, URLs, identifiers) in bidi isolates
    Bidi {
        /// Text to isolate
        text: String,
    },

    /// Pick the paragraph direction for text
    Direction {
        /// Text to inspect
        text: String,
    },

    /// Format a number, amount, percentage, or date for a locale
    Format {
        /// Value to format: a number, or YYYY-MM-DD with --style date
        value: String,

        /// Format style: number, currency, percent, date
        #[arg(long, default_value = "number")]
        style: String,

        /// Numeral preference; unrecognized values fall back to western
        #[arg(long)]
        mode: Option<String>,
    },

    /// Build the dialect style policy block for a system prompt
    Policy {
        /// Dialect preset: msa, egyptian, gulf, levantine, maghrebi
        #[arg(long)]
        dialect: Option<String>,

        /// Formality: formal or casual
        #[arg(long, default_value = "casual")]
        formality: String,

        /// Code-switch mode: arabic_only or mixed
        #[arg(long, default_value = "mixed")]
        code_switch: String,

        /// Numeral mode: western or arabic
        #[arg(long, default_value = "western")]
        numerals: String,

        /// Read options from a TOML file (overrides the other flags)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Classify { text } => {
            let mode = classify_mode(&text);
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "mode": mode.code(), "name": mode.name() })
                );
            } else {
                println!("{} ({})", mode.code(), mode.name());
            }
        }

        Commands::Dialect { text } => match detect_dialect(&text) {
            Some(dialect) => {
                if cli.json {
                    println!(
                        "{}",
                        serde_json::json!({ "dialect": dialect.code(), "name": dialect.name() })
                    );
                } else {
                    println!("{} ({})", dialect.code(), dialect.name());
                }
            }
            None => {
                if cli.json {
                    println!("{}", serde_json::json!({ "dialect": null }));
                } else {
                    println!("✗ No dialect markers found");
                }
            }
        },

        Commands::Normalize {
            text,
            all,
            strip_diacritics,
            strip_tatweel,
            hamza,
            ya,
            ta,
            punctuation,
        } => {
            let options = if all {
                NormalizationOptions::search()
            } else {
                NormalizationOptions {
                    strip_diacritics,
                    strip_tatweel,
                    normalize_hamza: hamza,
                    normalize_ya: ya,
                    normalize_ta_marbuta: ta,
                    fix_punctuation: punctuation,
                }
            };

            let out = normalize(&text, &options);
            if cli.json {
                println!("{}", serde_json::json!({ "text": out }));
            } else {
                println!("{out}");
            }
        }

        Commands::Arabizi { text } => {
            let out = convert_arabizi(&text);
            if cli.json {
                println!("{}", serde_json::json!({ "text": out }));
            } else {
                println!("{out}");
            }
        }

        Commands::Digits { text, mode } => {
            let mode = mode.parse()?;
            let out = apply_numeral_policy(&text, &FormattingContext::new(mode));
            if cli.json {
                println!("{}", serde_json::json!({ "text": out, "mode": mode.code() }));
            } else {
                println!("{out}");
            }
        }

        Commands::Bidi { text } => {
            let out = apply_bidi_isolation(&text);
            if cli.json {
                let isolates = out.chars().filter(|&c| c == LRI).count();
                println!("{}", serde_json::json!({ "text": out, "isolates": isolates }));
            } else {
                println!("{out}");
            }
        }

        Commands::Direction { text } => {
            let direction = text_direction(&text);
            if cli.json {
                println!("{}", serde_json::json!({ "direction": direction.code() }));
            } else {
                println!("{}", direction.code());
            }
        }

        Commands::Format { value, style, mode } => {
            let context = FormattingContext::from_preference(mode.as_deref());
            let out = run_format(&value, &style, &context)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "formatted": out,
                        "locale": Locale::for_context(&context).code()
                    })
                );
            } else {
                println!("{out}");
            }
        }

        Commands::Policy {
            dialect,
            formality,
            code_switch,
            numerals,
            config,
        } => {
            let options = match config {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    toml::from_str::<DialectOptions>(&content).context("Invalid policy config")?
                }
                None => DialectOptions {
                    dialect: dialect
                        .as_deref()
                        .map(|d| d.parse())
                        .transpose()?,
                    formality: formality.parse()?,
                    code_switch: code_switch.parse()?,
                    numeral_mode: numerals.parse()?,
                },
            };

            let block = build_policy_block(&options);
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "dialect": options.effective_dialect().code(),
                        "policy": block
                    })
                );
            } else {
                println!("{block}");
            }
        }
    }

    Ok(())
}

fn run_format(value: &str, style: &str, context: &FormattingContext) -> Result<String> {
    let formatter = MessageFormatter::new();
    Ok(match style.to_lowercase().as_str() {
        "number" => formatter.format_number(parse_number(value)?, context),
        "currency" => formatter.format_currency(parse_number(value)?, context),
        "percent" => formatter.format_percent(parse_number(value)?, context),
        "date" => formatter.format_date(parse_date(value)?, context),
        _ => anyhow::bail!("Invalid format style: {}", style),
    })
}

fn parse_number(s: &str) -> Result<f64> {
    s.parse::<f64>().context("Invalid number")
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    s.parse::<NaiveDate>()
        .context("Invalid date, expected YYYY-MM-DD")
}
