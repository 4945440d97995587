//! Binary codec for seed ingredients.
//!
//! Wire format:
//!
//! ```text
//! [kind: u8]                       0 = item list, 1 = tag
//! kind 0: [itemCount: u32][item: string]*N
//! kind 1: [tag: string]
//! ```

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_INGREDIENT_ITEMS;
use crate::model::Ingredient;

const KIND_ITEMS: u8 = 0;
const KIND_TAG: u8 = 1;

/// Encodes an ingredient.
pub fn encode_ingredient(writer: &mut Writer, ingredient: &Ingredient) -> Result<(), EncodeError> {
    match ingredient {
        Ingredient::Items(items) => {
            if items.len() > MAX_INGREDIENT_ITEMS {
                return Err(EncodeError::LengthExceedsLimit {
                    field: "ingredient.items",
                    len: items.len(),
                    max: MAX_INGREDIENT_ITEMS,
                });
            }
            writer.write_byte(KIND_ITEMS);
            writer.write_u32(items.len() as u32);
            for item in items {
                writer.write_key(item);
            }
        }
        Ingredient::Tag(tag) => {
            writer.write_byte(KIND_TAG);
            writer.write_key(tag);
        }
    }
    Ok(())
}

/// Decodes an ingredient.
pub fn decode_ingredient(reader: &mut Reader<'_>) -> Result<Ingredient, DecodeError> {
    match reader.read_byte("ingredient.kind")? {
        KIND_ITEMS => {
            let count = reader.read_count(MAX_INGREDIENT_ITEMS, "ingredient.items")?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(reader.read_key("ingredient.item")?);
            }
            Ok(Ingredient::Items(items))
        }
        KIND_TAG => Ok(Ingredient::Tag(reader.read_key("ingredient.tag")?)),
        kind => Err(DecodeError::InvalidIngredientKind { kind }),
    }
}
