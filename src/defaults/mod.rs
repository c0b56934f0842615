//! Process-wide default engine options.
//!
//! # Design Decisions
//! - Resolved once at startup and shared read-only (`Arc` in app state);
//!   requests that omit options use these exact values, never a re-resolved
//!   or mutated copy
//! - Expansion defaults come from the engine's own accessor; the engine
//!   exposes no equivalent for parsing, so parse defaults are empty
//!   language/country (auto-detect)

use crate::engine::{AddressEngine, ExpandOptions, ParserOptions};

/// Immutable default options, resolved once per process.
#[derive(Debug, Clone)]
pub struct EngineDefaults {
    pub expand: ExpandOptions,
    pub parse: ParserOptions,
}

impl EngineDefaults {
    /// Resolve defaults from the engine. Called once during startup.
    pub fn resolve(engine: &dyn AddressEngine) -> Self {
        let defaults = Self {
            expand: engine.default_expand_options(),
            parse: ParserOptions::default(),
        };
        tracing::debug!(defaults = ?defaults, "resolved engine default options");
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RuleEngine;

    #[test]
    fn test_defaults_are_stable() {
        let engine = RuleEngine::new();
        let first = EngineDefaults::resolve(&engine);
        let second = EngineDefaults::resolve(&engine);
        assert_eq!(first.expand, second.expand);
        assert_eq!(first.parse, second.parse);
    }

    #[test]
    fn test_parse_defaults_are_unspecified() {
        let engine = RuleEngine::new();
        let defaults = EngineDefaults::resolve(&engine);
        assert_eq!(defaults.parse.language, "");
        assert_eq!(defaults.parse.country, "");
    }
}
