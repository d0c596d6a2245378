//! Main parse entry point that ties all components together.

use crate::definitions::extract_definitions;
use crate::router::{select_strategy, SourceFormat};
use crate::types::{ActIdentity, ParsedAct};

/// Parse a raw legislative text into a structured act.
///
/// Resolves the structural strategy once from the source format and the
/// document identity, recovers provisions in source order, then runs the
/// definition extractor over the provisions designated as definitional
/// under that strategy's convention.
///
/// This function never fails: input with no recognizable structure yields
/// an act with an empty provision sequence, and the caller decides whether
/// to fall back to a metadata-only record.
///
/// # Arguments
/// * `raw_text` - The already-retrieved source document
/// * `identity` - Identity record from the external registry
/// * `format` - Declared format of `raw_text`
#[must_use]
pub fn parse_act(raw_text: &str, identity: &ActIdentity, format: SourceFormat) -> ParsedAct {
    let strategy = select_strategy(format, &identity.id);
    tracing::debug!(
        act_id = %identity.id,
        strategy = strategy.as_str(),
        "Selected parse strategy"
    );

    let provisions = strategy.run(raw_text, identity);
    if provisions.is_empty() {
        tracing::warn!(act_id = %identity.id, "No recognizable structure, returning sparse result");
    }

    let definitional = strategy.definitional_sections();
    let mut act = ParsedAct::new(identity.clone());

    for provision in provisions {
        if definitional.contains(&provision.section.as_str()) {
            for definition in extract_definitions(&provision.content, &provision.section) {
                act.add_definition(definition);
            }
        }
        act.add_provision(provision);
    }

    tracing::debug!(
        act_id = %identity.id,
        provisions = act.provisions.len(),
        definitions = act.definitions.len(),
        "Parse complete"
    );
    act
}
