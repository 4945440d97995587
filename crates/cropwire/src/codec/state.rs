//! Binary codec for placed-object states.
//!
//! Wire format:
//!
//! ```text
//! [typeId: string][propertyCount: u32]([name: string][value: string])*N
//! ```
//!
//! Property vocabularies are open: new types and properties can be
//! registered at any time, and the two ends of the channel need not share
//! an identical catalog. Decoding therefore tolerates everything except
//! structural corruption — an unresolvable type id yields the registry's
//! empty type, unknown properties and unparsable values are logged and
//! skipped, and the state accumulated so far is preserved.

use tracing::warn;

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_STATE_PROPERTIES, MAX_STRING_LEN};
use crate::model::PlacedState;
use crate::registry::BlockTypeRegistry;

/// Encodes a state: type id, property count, then each name/value pair in
/// the state's insertion order.
pub fn encode_state(writer: &mut Writer, state: &PlacedState) -> Result<(), EncodeError> {
    if state.property_count() > MAX_STATE_PROPERTIES {
        return Err(EncodeError::LengthExceedsLimit {
            field: "state.properties",
            len: state.property_count(),
            max: MAX_STATE_PROPERTIES,
        });
    }
    for (name, value) in state.properties() {
        check_str_len(name, "state.property_name")?;
        check_str_len(value, "state.property_value")?;
    }

    writer.write_key(state.type_id());
    writer.write_u32(state.property_count() as u32);
    for (name, value) in state.properties() {
        writer.write_string(name);
        writer.write_string(value);
    }
    Ok(())
}

/// Decodes a state against the given registry.
///
/// Never fails on data-quality problems; the only errors are structural
/// (truncated buffer, bad UTF-8, hostile length fields). The returned
/// state is always usable: the resolved type's default state with zero or
/// more properties applied, or the empty type's default state when the
/// type id itself does not resolve.
pub fn decode_state(
    reader: &mut Reader<'_>,
    registry: &dyn BlockTypeRegistry,
) -> Result<PlacedState, DecodeError> {
    let type_id = reader.read_key("state.type_id")?;
    let count = reader.read_count(MAX_STATE_PROPERTIES, "state.properties")?;

    let Some(block) = registry.resolve(&type_id) else {
        // Drain the property pairs so the reader stays positioned at the
        // next field; one unresolvable type must not corrupt the stream.
        for _ in 0..count {
            reader.read_string(MAX_STRING_LEN, "state.property_name")?;
            reader.read_string(MAX_STRING_LEN, "state.property_value")?;
        }
        warn!(%type_id, "unresolvable block type in placed state, using empty state");
        return Ok(registry.empty_type().default_state());
    };

    let mut state = block.default_state();
    for _ in 0..count {
        let name = reader.read_string(MAX_STRING_LEN, "state.property_name")?;
        let raw = reader.read_string(MAX_STRING_LEN, "state.property_value")?;

        let Some(property) = block.property(&name) else {
            warn!(%type_id, property = %name, "unknown property in placed state, skipping");
            continue;
        };
        match property.parse(&raw) {
            Some(value) => state = state.with(property.name(), value),
            None => {
                warn!(
                    %type_id,
                    property = %name,
                    value = %raw,
                    "unparsable property value in placed state, skipping"
                );
            }
        }
    }
    Ok(state)
}

fn check_str_len(s: &str, field: &'static str) -> Result<(), EncodeError> {
    if s.len() > MAX_STRING_LEN {
        return Err(EncodeError::LengthExceedsLimit {
            field,
            len: s.len(),
            max: MAX_STRING_LEN,
        });
    }
    Ok(())
}
