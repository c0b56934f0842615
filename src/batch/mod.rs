//! Sequential batch processing over an address list.
//!
//! # Responsibilities
//! - Apply one engine operation across a batch, in input order
//! - Pair every input address verbatim with its result
//!
//! # Design Decisions
//! - Strictly sequential: the engine documents no concurrency guarantee, so
//!   calls are issued one at a time per request
//! - No deduplication, trimming, or length cap; an empty batch is an empty
//!   result, not an error
//! - An engine error fails the whole batch: the response shape has no
//!   per-address partial-success representation

use serde::{Deserialize, Serialize};

use crate::components::{map_components, ComponentRecord};
use crate::engine::{AddressEngine, EngineError, ExpandOptions, ParserOptions};

/// One address paired with its normalized variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    pub address: String,
    pub expansions: Vec<String>,
}

/// One address paired with its structured decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parse {
    pub address: String,
    pub parse: ComponentRecord,
}

/// Expand every address in `addresses`, preserving order and count.
pub fn expand_batch(
    engine: &dyn AddressEngine,
    addresses: &[String],
    options: &ExpandOptions,
) -> Result<Vec<Expansion>, EngineError> {
    tracing::debug!(count = addresses.len(), options = ?options, "expanding addresses");

    let mut results = Vec::with_capacity(addresses.len());
    for address in addresses {
        let expansions = engine.expand(address, options)?;
        tracing::debug!(address = %address, expansions = ?expansions, "expanded");
        results.push(Expansion {
            address: address.clone(),
            expansions,
        });
    }
    Ok(results)
}

/// Parse every address in `addresses`, preserving order and count.
pub fn parse_batch(
    engine: &dyn AddressEngine,
    addresses: &[String],
    options: &ParserOptions,
) -> Result<Vec<Parse>, EngineError> {
    tracing::debug!(count = addresses.len(), options = ?options, "parsing addresses");

    let mut results = Vec::with_capacity(addresses.len());
    for address in addresses {
        let components = engine.parse(address, options)?;
        let parse = map_components(&components);
        tracing::debug!(address = %address, parse = ?parse, "parsed");
        results.push(Parse {
            address: address.clone(),
            parse,
        });
    }
    Ok(results)
}
