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

//! Lahja Core
//!
//! Shared vocabulary types for the Arabic dialect/script processing
//! layer: writing modes, dialect presets, rendering preferences, and the
//! configuration structs the transforms accept.

pub mod error;
pub mod mode;
pub mod options;

pub use error::{LahjaError, Result};
pub use mode::{ArabicMode, CodeSwitchMode, DialectPreset, Formality, NumeralMode};
pub use options::{
    DialectOptions, FormattingContext, NormalizationOptions, NUMERAL_PREFERENCE_KEY,
};
