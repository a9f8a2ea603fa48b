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

//! Error Types
//!
//! The text transforms themselves are total and never fail; errors only
//! arise when parsing user-facing configuration strings strictly (CLI
//! arguments, config files). The lenient `from_str` constructors on the
//! vocabulary enums return `Option` and are the right tool when a bad
//! value should silently fall back to a default instead.

use thiserror::Error;

/// Errors produced by strict parsing of configuration strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LahjaError {
    #[error("unknown arabic mode: {0}")]
    UnknownMode(String),

    #[error("unknown dialect preset: {0}")]
    UnknownDialect(String),

    #[error("unknown formality: {0}")]
    UnknownFormality(String),

    #[error("unknown code-switch mode: {0}")]
    UnknownCodeSwitch(String),

    #[error("unknown numeral mode: {0}")]
    UnknownNumeralMode(String),
}

/// Result type for lahja operations.
pub type Result<T> = std::result::Result<T, LahjaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LahjaError::UnknownDialect("nubian".to_string());
        assert_eq!(err.to_string(), "unknown dialect preset: nubian");
    }
}
