//! Deterministic rule-based reference backend.
//!
//! A small stand-in for a full normalization engine: enough behavior to run
//! the service end-to-end and to pin the test suite to fixed outputs. Not a
//! linguistic model; abbreviation handling is table-driven and parsing is
//! segment-based.

use super::{AddressEngine, EngineError, ExpandOptions, LabeledComponent, ParserOptions};

/// Street/directional abbreviations recognized during expansion.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("st", "street"),
    ("ave", "avenue"),
    ("rd", "road"),
    ("dr", "drive"),
    ("blvd", "boulevard"),
    ("ln", "lane"),
    ("hwy", "highway"),
    ("ct", "court"),
    ("pl", "place"),
    ("sq", "square"),
    ("ste", "suite"),
    ("apt", "apartment"),
    ("fl", "floor"),
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
];

/// Rule-based engine backend.
///
/// Deterministic for a given input and option set, which is what the batch
/// layer and the test suite rely on.
#[derive(Debug, Default, Clone)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Apply the character-level normalizations selected by `options`.
    fn normalize(&self, address: &str, options: &ExpandOptions) -> String {
        let mut text = if options.trim_string {
            address.trim().to_string()
        } else {
            address.to_string()
        };

        if options.lowercase {
            text = text.to_lowercase();
        }
        if options.replace_word_hyphens {
            text = text.replace('-', " ");
        }
        if options.drop_english_possessives {
            text = text.replace("'s", "s");
        }
        if options.delete_apostrophes {
            text = text.replace('\'', "");
        }
        if options.delete_final_periods || options.delete_acronym_periods {
            text = text
                .split_whitespace()
                .map(|tok| tok.trim_end_matches('.'))
                .collect::<Vec<_>>()
                .join(" ");
        }

        text
    }

    /// Expand known abbreviations token by token.
    fn expand_abbreviations(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|tok| {
                ABBREVIATIONS
                    .iter()
                    .find(|(abbr, _)| tok.eq_ignore_ascii_case(abbr))
                    .map_or(tok, |(_, full)| *full)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AddressEngine for RuleEngine {
    fn expand(&self, address: &str, options: &ExpandOptions) -> Result<Vec<String>, EngineError> {
        if address.trim().is_empty() {
            return Ok(Vec::new());
        }

        let normalized = self.normalize(address, options);
        let expanded = self.expand_abbreviations(&normalized);

        let mut variants = vec![expanded];
        if !variants.contains(&normalized) {
            variants.push(normalized);
        }
        Ok(variants)
    }

    fn parse(
        &self,
        address: &str,
        _options: &ParserOptions,
    ) -> Result<Vec<LabeledComponent>, EngineError> {
        let mut components = Vec::new();
        let segments: Vec<&str> = address
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        for (i, segment) in segments.iter().enumerate() {
            let lower = segment.to_lowercase();
            match i {
                0 => {
                    // Leading numeric token is the house number, remainder the road.
                    let mut tokens = lower.split_whitespace();
                    match tokens.next() {
                        Some(first) if first.chars().all(|c| c.is_ascii_digit()) => {
                            components.push(LabeledComponent::new("house_number", first));
                            let road: Vec<&str> = tokens.collect();
                            if !road.is_empty() {
                                components.push(LabeledComponent::new("road", road.join(" ")));
                            }
                        }
                        Some(_) => components.push(LabeledComponent::new("road", lower.clone())),
                        None => {}
                    }
                }
                1 => components.push(LabeledComponent::new("city", lower.clone())),
                2 => {
                    // "state 12345" style segment: trailing digits are the postcode.
                    let mut state_tokens = Vec::new();
                    for tok in lower.split_whitespace() {
                        if tok.chars().all(|c| c.is_ascii_digit()) {
                            components.push(LabeledComponent::new("postcode", tok));
                        } else {
                            state_tokens.push(tok);
                        }
                    }
                    if !state_tokens.is_empty() {
                        components.push(LabeledComponent::new("state", state_tokens.join(" ")));
                    }
                }
                _ => components.push(LabeledComponent::new("country", lower.clone())),
            }
        }

        Ok(components)
    }
}
