//! Binary codec for crop recipes.
//!
//! Wire format, fields in fixed order:
//!
//! ```text
//! [seed: ingredient]
//! [soilCategoryCount: u32][soilCategory: string]*N
//! [growthTicks: i32]
//! [growthModifier: f32]
//! [harvestResultCount: u32][harvestEntry]*N
//! [display: state]
//! ```
//!
//! The boundary contract is all-or-nothing per recipe: any problem in any
//! sub-field surfaces as one [`RecipeError`] carrying the recipe id, and a
//! partially-decoded record is never produced. Soil categories are a set;
//! they encode in sorted order (so repeated encodes of one record are
//! byte-identical) and decode rebuilds membership, not order.

use std::collections::BTreeSet;

use crate::codec::harvest::{decode_harvest_entry, encode_harvest_entry};
use crate::codec::ingredient::{decode_ingredient, encode_ingredient};
use crate::codec::primitives::{Reader, Writer};
use crate::codec::state::{decode_state, encode_state};
use crate::error::{DecodeError, EncodeError, RecipeError};
use crate::limits::{MAX_HARVEST_ENTRIES, MAX_SOIL_CATEGORIES, MAX_STRING_LEN};
use crate::model::{CropRecipe, HarvestEntry, Ingredient, Key, PlacedState};
use crate::registry::BlockTypeRegistry;

/// Encodes a recipe to a fresh buffer.
pub fn encode_recipe(recipe: &CropRecipe) -> Result<Vec<u8>, RecipeError> {
    let mut writer = Writer::new();
    encode_recipe_into(&mut writer, recipe)?;
    Ok(writer.into_bytes())
}

/// Encodes a recipe into an existing writer.
pub fn encode_recipe_into(writer: &mut Writer, recipe: &CropRecipe) -> Result<(), RecipeError> {
    write_fields(writer, recipe).map_err(|source| RecipeError::Encode {
        id: recipe.id().clone(),
        source,
    })
}

fn write_fields(writer: &mut Writer, recipe: &CropRecipe) -> Result<(), EncodeError> {
    encode_ingredient(writer, recipe.seed())?;

    if recipe.soil_categories().len() > MAX_SOIL_CATEGORIES {
        return Err(EncodeError::LengthExceedsLimit {
            field: "recipe.soil_categories",
            len: recipe.soil_categories().len(),
            max: MAX_SOIL_CATEGORIES,
        });
    }
    writer.write_strings(recipe.soil_categories().iter().map(String::as_str));

    writer.write_i32(recipe.growth_ticks());
    writer.write_f32(recipe.growth_multiplier());

    if recipe.results().len() > MAX_HARVEST_ENTRIES {
        return Err(EncodeError::LengthExceedsLimit {
            field: "recipe.results",
            len: recipe.results().len(),
            max: MAX_HARVEST_ENTRIES,
        });
    }
    writer.write_u32(recipe.results().len() as u32);
    for entry in recipe.results() {
        encode_harvest_entry(writer, entry);
    }

    encode_state(writer, recipe.display())
}

/// Decodes a recipe received under the given id.
pub fn decode_recipe(
    id: Key,
    bytes: &[u8],
    registry: &dyn BlockTypeRegistry,
) -> Result<CropRecipe, RecipeError> {
    decode_recipe_from(&mut Reader::new(bytes), id, registry)
}

/// Decodes a recipe from an existing reader.
pub fn decode_recipe_from(
    reader: &mut Reader<'_>,
    id: Key,
    registry: &dyn BlockTypeRegistry,
) -> Result<CropRecipe, RecipeError> {
    let (seed, soil_categories, growth_ticks, growth_multiplier, results, display) =
        read_fields(reader, registry)
            .map_err(|source| RecipeError::Decode { id: id.clone(), source })?;

    CropRecipe::builder(id.clone())
        .seed(seed)
        .soil_categories(soil_categories)
        .growth_ticks(growth_ticks)
        .growth_multiplier(growth_multiplier)
        .results(results)
        .display(display)
        .build()
        .map_err(|source| RecipeError::Config { id, source })
}

type RecipeFields = (
    Ingredient,
    BTreeSet<String>,
    i32,
    f32,
    Vec<HarvestEntry>,
    PlacedState,
);

fn read_fields(
    reader: &mut Reader<'_>,
    registry: &dyn BlockTypeRegistry,
) -> Result<RecipeFields, DecodeError> {
    let seed = decode_ingredient(reader)?;
    let soil_categories =
        reader.read_string_set(MAX_SOIL_CATEGORIES, MAX_STRING_LEN, "recipe.soil_categories")?;
    let growth_ticks = reader.read_i32("recipe.growth_ticks")?;
    let growth_multiplier = reader.read_f32("recipe.growth_modifier")?;

    let result_count = reader.read_count(MAX_HARVEST_ENTRIES, "recipe.results")?;
    let mut results = Vec::with_capacity(result_count);
    for _ in 0..result_count {
        results.push(decode_harvest_entry(reader)?);
    }

    let display = decode_state(reader, registry)?;
    Ok((seed, soil_categories, growth_ticks, growth_multiplier, results, display))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::{HarvestEntry, Ingredient, PlacedState};
    use crate::registry::{BlockCatalog, BlockDefinition, BlockType, BoolProperty, IntProperty};

    fn key(s: &str) -> Key {
        Key::parse(s).unwrap()
    }

    fn catalog() -> BlockCatalog {
        let mut catalog = BlockCatalog::new();
        catalog.register(
            BlockDefinition::new(key("farmland:carrot_block"))
                .with_property(IntProperty::new("age", 0, 7, 0))
                .with_property(BoolProperty::new("watered", false)),
        );
        catalog
    }

    fn carrot_display(catalog: &BlockCatalog, age: i32) -> PlacedState {
        catalog
            .resolve(&key("farmland:carrot_block"))
            .unwrap()
            .default_state()
            .with("age", age.to_string())
    }

    fn carrot(catalog: &BlockCatalog) -> CropRecipe {
        CropRecipe::builder(key("farmland:carrot"))
            .seed(Ingredient::of(key("farmland:carrot")))
            .soil_categories(["dirt", "loam"])
            .growth_ticks(1200)
            .growth_multiplier(1.5)
            .result(HarvestEntry {
                item: key("farmland:carrot"),
                chance: 0.75,
                min_rolls: 1,
                max_rolls: 3,
            })
            .display(carrot_display(catalog, 3))
            .build()
            .unwrap()
    }

    #[test]
    fn test_roundtrip_every_field() {
        let catalog = catalog();
        let recipe = carrot(&catalog);

        let bytes = encode_recipe(&recipe).unwrap();
        let decoded = decode_recipe(recipe.id().clone(), &bytes, &catalog).unwrap();
        assert_eq!(decoded, recipe);
    }

    #[test]
    fn test_repeated_encodes_are_byte_identical() {
        let catalog = catalog();
        let recipe = carrot(&catalog);
        assert_eq!(encode_recipe(&recipe).unwrap(), encode_recipe(&recipe).unwrap());
    }

    #[test]
    fn test_soil_categories_roundtrip_as_set() {
        let catalog = catalog();
        // source order differs from sorted order; membership is what counts
        let recipe = CropRecipe::builder(key("farmland:carrot"))
            .seed(Ingredient::of(key("farmland:carrot")))
            .soil_categories(["loam", "dirt", "ash"])
            .display(carrot_display(&catalog, 0))
            .build()
            .unwrap();

        let bytes = encode_recipe(&recipe).unwrap();
        let decoded = decode_recipe(recipe.id().clone(), &bytes, &catalog).unwrap();
        assert_eq!(decoded.soil_categories(), recipe.soil_categories());
    }

    #[test]
    fn test_corrupt_payload_is_one_typed_failure() {
        let catalog = catalog();
        let recipe = carrot(&catalog);
        let mut bytes = encode_recipe(&recipe).unwrap();
        bytes.truncate(bytes.len() / 2);

        let err = decode_recipe(key("farmland:carrot"), &bytes, &catalog).unwrap_err();
        match err {
            RecipeError::Decode { ref id, .. } => assert_eq!(id, &key("farmland:carrot")),
            other => panic!("expected decode failure, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_bytes_never_panic() {
        let catalog = catalog();
        let garbage = [0x7Fu8; 64];
        let _ = decode_recipe(key("farmland:bad"), &garbage, &catalog);
    }

    #[test]
    fn test_display_with_unknown_type_still_decodes_recipe() {
        // receiver without the sender's block catalog still gets a usable
        // record; only the display falls back to the empty state
        let catalog = catalog();
        let recipe = CropRecipe::builder(key("farmland:carrot"))
            .seed(Ingredient::of(key("farmland:carrot")))
            .soil_category("dirt")
            .growth_ticks(100)
            .display(PlacedState::new(key("modpack:exotic_block")).with("age", "1"))
            .build()
            .unwrap();

        let bytes = encode_recipe(&recipe).unwrap();
        let decoded = decode_recipe(recipe.id().clone(), &bytes, &catalog).unwrap();
        assert_eq!(decoded.display(), &catalog.empty_type().default_state());
        assert_eq!(decoded.growth_ticks(), 100);
    }

    // =========================================================================
    // Property-based round-trips
    // =========================================================================

    fn arb_key() -> impl Strategy<Value = Key> {
        "[a-z0-9_]{1,12}".prop_map(|path| Key::new("farmland", &path).unwrap())
    }

    fn arb_ingredient() -> impl Strategy<Value = Ingredient> {
        prop_oneof![
            prop::collection::vec(arb_key(), 0..4).prop_map(Ingredient::Items),
            arb_key().prop_map(Ingredient::Tag),
        ]
    }

    fn arb_harvest_entry() -> impl Strategy<Value = HarvestEntry> {
        (arb_key(), 0.0f32..=1.0, 0i32..4, 0i32..4).prop_map(|(item, chance, a, b)| {
            HarvestEntry {
                item,
                chance,
                min_rolls: a.min(b),
                max_rolls: a.max(b),
            }
        })
    }

    proptest! {
        #[test]
        fn prop_recipe_roundtrip(
            seed in arb_ingredient(),
            categories in prop::collection::btree_set("[a-z]{1,8}", 0..5),
            ticks in 0i32..1_000_000,
            multiplier in 0.0f32..16.0,
            results in prop::collection::vec(arb_harvest_entry(), 0..5),
            age in 0i32..=7,
        ) {
            let catalog = catalog();
            let recipe = CropRecipe::builder(key("farmland:carrot"))
                .seed(seed)
                .soil_categories(categories)
                .growth_ticks(ticks)
                .growth_multiplier(multiplier)
                .results(results)
                .display(carrot_display(&catalog, age))
                .build()
                .unwrap();

            let bytes = encode_recipe(&recipe).unwrap();
            let decoded = decode_recipe(recipe.id().clone(), &bytes, &catalog).unwrap();
            prop_assert_eq!(decoded, recipe);
        }
    }
}
