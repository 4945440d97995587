//! Binary codec for harvest entries.
//!
//! Wire format per entry:
//!
//! ```text
//! [chance: f32][item: string][minRolls: i32][maxRolls: i32]
//! ```

use crate::codec::primitives::{Reader, Writer};
use crate::error::DecodeError;
use crate::model::HarvestEntry;

/// Encodes one harvest entry.
pub fn encode_harvest_entry(writer: &mut Writer, entry: &HarvestEntry) {
    writer.write_f32(entry.chance);
    writer.write_key(&entry.item);
    writer.write_i32(entry.min_rolls);
    writer.write_i32(entry.max_rolls);
}

/// Decodes one harvest entry.
pub fn decode_harvest_entry(reader: &mut Reader<'_>) -> Result<HarvestEntry, DecodeError> {
    let chance = reader.read_f32("harvest.chance")?;
    let item = reader.read_key("harvest.item")?;
    let min_rolls = reader.read_i32("harvest.min_rolls")?;
    let max_rolls = reader.read_i32("harvest.max_rolls")?;
    Ok(HarvestEntry {
        item,
        chance,
        min_rolls,
        max_rolls,
    })
}
