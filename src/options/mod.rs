//! Wire-format option records and the wire↔native translator.
//!
//! # Responsibilities
//! - Define the JSON option schemas for `/expand` and `/parse`
//! - Translate losslessly between wire and engine-native records
//!
//! # Design Decisions
//! - Both directions of each translation are generated from a single field
//!   list, so `export(import(x)) == x` holds by construction
//! - No validation: any value the wire schema's types accept passes through
//!   unchanged, bitmask included

use serde::{Deserialize, Serialize};

use crate::engine::{ExpandOptions as NativeExpandOptions, ParserOptions as NativeParserOptions};

/// Wire-format expansion options. Field names are the JSON keys.
///
/// Omitted fields deserialize to their zero values, matching the original
/// wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExpandOptions {
    pub languages: Vec<String>,
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

/// Wire-format parser options. Empty string means unspecified/auto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParserOptions {
    pub language: String,
    pub country: String,
}

/// Generates the import/export pair for one wire↔native record mapping from
/// a single field list. Total and pure aside from the debug log.
macro_rules! option_codec {
    (
        $import:ident, $export:ident, $wire:ident, $native:ident, $what:literal,
        { $($field:ident),+ $(,)? }
    ) => {
        #[doc = concat!("Translate wire-format ", $what, " into the engine-native record.")]
        pub fn $import(options: $wire) -> $native {
            let translated = $native {
                $($field: options.$field),+
            };
            tracing::debug!(what = $what, options = ?translated, "imported options");
            translated
        }

        #[doc = concat!("Translate engine-native ", $what, " into the wire-format record.")]
        pub fn $export(options: $native) -> $wire {
            let translated = $wire {
                $($field: options.$field),+
            };
            tracing::debug!(what = $what, options = ?translated, "exported options");
            translated
        }
    };
}

option_codec!(
    import_expand_options,
    export_expand_options,
    ExpandOptions,
    NativeExpandOptions,
    "expand options",
    {
        languages,
        address_components,
        latin_ascii,
        transliterate,
        strip_accents,
        decompose,
        lowercase,
        trim_string,
        replace_word_hyphens,
        delete_word_hyphens,
        replace_numeric_hyphens,
        delete_numeric_hyphens,
        split_alpha_from_numeric,
        delete_final_periods,
        delete_acronym_periods,
        drop_english_possessives,
        delete_apostrophes,
        expand_numex,
        roman_numerals,
    }
);

option_codec!(
    import_parse_options,
    export_parse_options,
    ParserOptions,
    NativeParserOptions,
    "parser options",
    { language, country }
);
