//! Address normalization engine seam.
//!
//! # Responsibilities
//! - Define the `AddressEngine` trait the service is built against
//! - Define the engine-native option records and component bitmask
//! - Provide the deterministic rule-based reference backend
//!
//! # Design Decisions
//! - Methods are synchronous: the engine offers no concurrency guarantee,
//!   so callers treat every call as blocking
//! - The engine contract is total in practice; `EngineError` exists so a
//!   misbehaving backend fails the whole batch instead of panicking

pub mod rules;

use thiserror::Error;

pub use rules::RuleEngine;

/// Address component classes selectable for expansion.
///
/// Bit values match libpostal's `LIBPOSTAL_ADDRESS_*` constants so a native
/// backend can pass the mask through unchanged.
pub mod address_components {
    pub const NONE: u16 = 0;
    pub const ANY: u16 = 1 << 0;
    pub const NAME: u16 = 1 << 1;
    pub const HOUSE_NUMBER: u16 = 1 << 2;
    pub const STREET: u16 = 1 << 3;
    pub const UNIT: u16 = 1 << 4;
    pub const LEVEL: u16 = 1 << 5;
    pub const STAIRCASE: u16 = 1 << 6;
    pub const ENTRANCE: u16 = 1 << 7;
    pub const CATEGORY: u16 = 1 << 8;
    pub const NEAR: u16 = 1 << 9;
    pub const TOPONYM: u16 = 1 << 13;
    pub const POSTAL_CODE: u16 = 1 << 14;
    pub const PO_BOX: u16 = 1 << 15;
    pub const ALL: u16 = u16::MAX;
}

/// Engine-native expansion options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Language codes, in preference order. Empty means auto-detect.
    pub languages: Vec<String>,
    /// Bitmask of [`address_components`] classes to expand.
    pub address_components: u16,
    pub latin_ascii: bool,
    pub transliterate: bool,
    pub strip_accents: bool,
    pub decompose: bool,
    pub lowercase: bool,
    pub trim_string: bool,
    pub replace_word_hyphens: bool,
    pub delete_word_hyphens: bool,
    pub replace_numeric_hyphens: bool,
    pub delete_numeric_hyphens: bool,
    pub split_alpha_from_numeric: bool,
    pub delete_final_periods: bool,
    pub delete_acronym_periods: bool,
    pub drop_english_possessives: bool,
    pub delete_apostrophes: bool,
    pub expand_numex: bool,
    pub roman_numerals: bool,
}

impl Default for ExpandOptions {
    /// Mirrors libpostal's `libpostal_get_default_options`.
    fn default() -> Self {
        use address_components as ac;
        Self {
            languages: Vec::new(),
            address_components: ac::NAME
                | ac::HOUSE_NUMBER
                | ac::STREET
                | ac::PO_BOX
                | ac::UNIT
                | ac::LEVEL
                | ac::ENTRANCE
                | ac::STAIRCASE
                | ac::POSTAL_CODE,
            latin_ascii: true,
            transliterate: true,
            strip_accents: true,
            decompose: true,
            lowercase: true,
            trim_string: true,
            replace_word_hyphens: true,
            delete_word_hyphens: true,
            replace_numeric_hyphens: false,
            delete_numeric_hyphens: false,
            split_alpha_from_numeric: false,
            delete_final_periods: true,
            delete_acronym_periods: true,
            drop_english_possessives: true,
            delete_apostrophes: true,
            expand_numex: true,
            roman_numerals: true,
        }
    }
}

/// Engine-native parser options. Empty string means unspecified/auto.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParserOptions {
    pub language: String,
    pub country: String,
}

/// One labeled token span from the parser, in engine output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledComponent {
    pub label: String,
    pub value: String,
}

impl LabeledComponent {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Error type for engine backends.
///
/// The reference backend never returns these; a real backend that fails mid
/// batch fails the whole request.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine backend unavailable: {0}")]
    Unavailable(String),
    #[error("engine call failed: {0}")]
    Internal(String),
}

/// The address normalization capability this service wraps.
///
/// Implementations must be deterministic for a given input and option set.
pub trait AddressEngine: Send + Sync {
    /// Produce normalized textual variants of `address`.
    ///
    /// An empty result list is a normal outcome, not an error.
    fn expand(&self, address: &str, options: &ExpandOptions) -> Result<Vec<String>, EngineError>;

    /// Decompose `address` into labeled semantic components, in output order.
    fn parse(
        &self,
        address: &str,
        options: &ParserOptions,
    ) -> Result<Vec<LabeledComponent>, EngineError>;

    /// The engine's own default expansion options.
    fn default_expand_options(&self) -> ExpandOptions {
        ExpandOptions::default()
    }
}
