//! Textual read path for recipe definitions.
//!
//! The config parser hands this module a generic JSON tree
//! ([`serde_json::Value`]); nothing here touches files or readers. One
//! recipe is one object:
//!
//! ```json
//! {
//!   "seed": { "item": "farmland:carrot" },
//!   "categories": ["dirt", "loam"],
//!   "growthTicks": 1200,
//!   "growthModifier": 1.0,
//!   "results": [
//!     { "chance": 0.75, "output": { "item": "farmland:carrot" },
//!       "minRolls": 1, "maxRolls": 3 }
//!   ],
//!   "display": { "block": "farmland:carrot_block",
//!                "properties": { "age": "0" } }
//! }
//! ```
//!
//! Required-field and wrong-shape problems fail the recipe; a malformed
//! entry inside `results` and property-level problems inside `display` are
//! logged and skipped so one sloppy data-pack line does not take the whole
//! recipe down with it.

use serde_json::Value;
use tracing::warn;

use crate::error::{ConfigError, RecipeError};
use crate::model::{CropRecipe, HarvestEntry, Ingredient, Key, PlacedState};
use crate::registry::BlockTypeRegistry;

/// Reads a recipe from its JSON definition.
pub fn recipe_from_json(
    id: Key,
    json: &Value,
    registry: &dyn BlockTypeRegistry,
) -> Result<CropRecipe, RecipeError> {
    read_recipe(&id, json, registry).map_err(|source| RecipeError::Config { id, source })
}

fn read_recipe(
    id: &Key,
    json: &Value,
    registry: &dyn BlockTypeRegistry,
) -> Result<CropRecipe, ConfigError> {
    let seed = ingredient_from_json(member(json, "seed")?)?;
    let categories = categories_from_json(member(json, "categories")?)?;
    let growth_ticks = require_i32(json, "growthTicks")?;
    let growth_multiplier = require_f32(json, "growthModifier")?;
    let results = results_from_json(id, member(json, "results")?)?;
    let display = state_from_json(member(json, "display")?, registry)?;

    CropRecipe::builder(id.clone())
        .seed(seed)
        .soil_categories(categories)
        .growth_ticks(growth_ticks)
        .growth_multiplier(growth_multiplier)
        .results(results)
        .display(display)
        .build()
}

/// Reads a seed matcher: `{"item": ..}`, `{"items": [..]}`, or `{"tag": ..}`.
pub fn ingredient_from_json(json: &Value) -> Result<Ingredient, ConfigError> {
    if !json.is_object() {
        return Err(ConfigError::WrongType { field: "seed", expected: "object" });
    }
    if let Some(tag) = json.get("tag") {
        return Ok(Ingredient::Tag(key_from_json(tag, "tag")?));
    }
    if let Some(item) = json.get("item") {
        return Ok(Ingredient::of(key_from_json(item, "item")?));
    }
    if let Some(items) = json.get("items") {
        let entries = items
            .as_array()
            .ok_or(ConfigError::WrongType { field: "items", expected: "array" })?;
        let mut keys = Vec::with_capacity(entries.len());
        for entry in entries {
            keys.push(key_from_json(entry, "items")?);
        }
        return Ok(Ingredient::Items(keys));
    }
    Err(ConfigError::InvalidValue {
        field: "seed",
        reason: "expected one of \"item\", \"items\", \"tag\"",
    })
}

/// Reads a display state: `{"block": .., "properties": {..}}`.
///
/// An unknown block key is an author mistake and fails the recipe.
/// Property-level problems (unknown name, unparsable value, non-scalar
/// JSON value) are logged and skipped, matching the binary decode path.
pub fn state_from_json(
    json: &Value,
    registry: &dyn BlockTypeRegistry,
) -> Result<PlacedState, ConfigError> {
    let type_id = key_from_json(member(json, "block")?, "block")?;
    let Some(block) = registry.resolve(&type_id) else {
        return Err(ConfigError::UnknownBlock { key: type_id });
    };

    let mut state = block.default_state();
    if let Some(properties) = json.get("properties") {
        let map = properties
            .as_object()
            .ok_or(ConfigError::WrongType { field: "properties", expected: "object" })?;
        for (name, value) in map {
            let Some(raw) = scalar_to_string(value) else {
                warn!(%type_id, property = %name, "display property is not a scalar, skipping");
                continue;
            };
            let Some(property) = block.property(name) else {
                warn!(%type_id, property = %name, "unknown display property, skipping");
                continue;
            };
            match property.parse(&raw) {
                Some(parsed) => state = state.with(property.name(), parsed),
                None => {
                    warn!(
                        %type_id,
                        property = %name,
                        value = %raw,
                        "unparsable display property value, skipping"
                    );
                }
            }
        }
    }
    Ok(state)
}

/// Reads one harvest entry object.
pub fn harvest_entry_from_json(json: &Value) -> Result<HarvestEntry, ConfigError> {
    let chance = require_f32(json, "chance")?;
    if !(0.0..=1.0).contains(&chance) {
        return Err(ConfigError::InvalidValue {
            field: "chance",
            reason: "must be within 0.0..=1.0",
        });
    }

    let output = member(json, "output")?;
    let item = key_from_json(member(output, "item")?, "item")?;

    let min_rolls = require_i32(json, "minRolls")?;
    let max_rolls = require_i32(json, "maxRolls")?;
    if min_rolls < 0 || min_rolls > max_rolls {
        return Err(ConfigError::InvalidValue {
            field: "minRolls",
            reason: "requires 0 <= minRolls <= maxRolls",
        });
    }

    Ok(HarvestEntry { item, chance, min_rolls, max_rolls })
}

fn results_from_json(id: &Key, json: &Value) -> Result<Vec<HarvestEntry>, ConfigError> {
    let entries = json
        .as_array()
        .ok_or(ConfigError::WrongType { field: "results", expected: "array" })?;
    let mut results = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.is_object() {
            warn!(recipe = %id, "results entry is not an object, skipping");
            continue;
        }
        results.push(harvest_entry_from_json(entry)?);
    }
    Ok(results)
}

fn categories_from_json(json: &Value) -> Result<Vec<String>, ConfigError> {
    let entries = json
        .as_array()
        .ok_or(ConfigError::WrongType { field: "categories", expected: "array" })?;
    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or(ConfigError::WrongType { field: "categories", expected: "string" })
        })
        .collect()
}

fn key_from_json(json: &Value, field: &'static str) -> Result<Key, ConfigError> {
    let raw = json
        .as_str()
        .ok_or(ConfigError::WrongType { field, expected: "string" })?;
    Key::parse(raw).map_err(|source| ConfigError::MalformedKey {
        field,
        key: raw.to_string(),
        source,
    })
}

fn member<'a>(json: &'a Value, field: &'static str) -> Result<&'a Value, ConfigError> {
    json.get(field).ok_or(ConfigError::MissingField { field })
}

fn require_i32(json: &Value, field: &'static str) -> Result<i32, ConfigError> {
    let value = member(json, field)?;
    value
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(ConfigError::WrongType { field, expected: "integer" })
}

fn require_f32(json: &Value, field: &'static str) -> Result<f32, ConfigError> {
    let value = member(json, field)?;
    value
        .as_f64()
        .map(|v| v as f32)
        .ok_or(ConfigError::WrongType { field, expected: "number" })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::registry::{BlockCatalog, BlockDefinition, BoolProperty, IntProperty};

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

    fn carrot_json() -> Value {
        json!({
            "seed": { "item": "farmland:carrot" },
            "categories": ["Dirt", "loam"],
            "growthTicks": 1200,
            "growthModifier": 1.5,
            "results": [
                { "chance": 0.75, "output": { "item": "farmland:carrot" },
                  "minRolls": 1, "maxRolls": 3 }
            ],
            "display": { "block": "farmland:carrot_block", "properties": { "age": "3" } }
        })
    }

    #[test]
    fn test_full_recipe_loads() {
        let catalog = catalog();
        let recipe = recipe_from_json(key("farmland:carrot"), &carrot_json(), &catalog).unwrap();

        assert_eq!(recipe.growth_ticks(), 1200);
        assert_eq!(recipe.growth_multiplier(), 1.5);
        assert!(recipe.soil_categories().contains("dirt"));
        assert_eq!(recipe.results().len(), 1);
        assert_eq!(recipe.display().get("age"), Some("3"));
        assert_eq!(recipe.display().get("watered"), Some("false"));
    }

    #[test]
    fn test_missing_growth_ticks() {
        let catalog = catalog();
        let mut json = carrot_json();
        json.as_object_mut().unwrap().remove("growthTicks");

        let err = recipe_from_json(key("farmland:carrot"), &json, &catalog).unwrap_err();
        assert_eq!(
            err,
            RecipeError::Config {
                id: key("farmland:carrot"),
                source: ConfigError::MissingField { field: "growthTicks" },
            }
        );
    }

    #[test]
    fn test_missing_growth_modifier() {
        let catalog = catalog();
        let mut json = carrot_json();
        json.as_object_mut().unwrap().remove("growthModifier");

        let err = recipe_from_json(key("farmland:carrot"), &json, &catalog).unwrap_err();
        assert!(matches!(
            err,
            RecipeError::Config {
                source: ConfigError::MissingField { field: "growthModifier" },
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_results_entry_skipped() {
        let catalog = catalog();
        let mut json = carrot_json();
        json["results"] = json!([
            { "chance": 1.0, "output": { "item": "farmland:carrot" },
              "minRolls": 1, "maxRolls": 1 },
            "not an object",
            { "chance": 0.1, "output": { "item": "farmland:carrot_top" },
              "minRolls": 1, "maxRolls": 2 }
        ]);

        let recipe = recipe_from_json(key("farmland:carrot"), &json, &catalog).unwrap();
        assert_eq!(recipe.results().len(), 2);
    }

    #[test]
    fn test_unknown_display_block_fails() {
        let catalog = catalog();
        let mut json = carrot_json();
        json["display"]["block"] = json!("farmland:missing_block");

        let err = recipe_from_json(key("farmland:carrot"), &json, &catalog).unwrap_err();
        assert!(matches!(
            err,
            RecipeError::Config { source: ConfigError::UnknownBlock { .. }, .. }
        ));
    }

    #[test]
    fn test_display_property_problems_skipped() {
        let catalog = catalog();
        let mut json = carrot_json();
        json["display"]["properties"] = json!({
            "age": "96",          // out of range
            "bogus": "1",         // not declared
            "watered": true       // non-string scalar is fine
        });

        let recipe = recipe_from_json(key("farmland:carrot"), &json, &catalog).unwrap();
        let display = recipe.display();
        assert_eq!(display.get("age"), Some("0"));
        assert_eq!(display.get("watered"), Some("true"));
        assert_eq!(display.get("bogus"), None);
    }

    #[test]
    fn test_ingredient_forms() {
        assert_eq!(
            ingredient_from_json(&json!({ "item": "farmland:carrot" })).unwrap(),
            Ingredient::of(key("farmland:carrot"))
        );
        assert_eq!(
            ingredient_from_json(&json!({ "items": ["a:b", "a:c"] })).unwrap(),
            Ingredient::Items(vec![key("a:b"), key("a:c")])
        );
        assert_eq!(
            ingredient_from_json(&json!({ "tag": "farmland:seeds" })).unwrap(),
            Ingredient::Tag(key("farmland:seeds"))
        );
        assert!(matches!(
            ingredient_from_json(&json!({})),
            Err(ConfigError::InvalidValue { field: "seed", .. })
        ));
    }

    #[test]
    fn test_harvest_entry_validation() {
        let bad_chance = json!({
            "chance": 1.5, "output": { "item": "a:b" }, "minRolls": 1, "maxRolls": 1
        });
        assert!(matches!(
            harvest_entry_from_json(&bad_chance),
            Err(ConfigError::InvalidValue { field: "chance", .. })
        ));

        let inverted_rolls = json!({
            "chance": 0.5, "output": { "item": "a:b" }, "minRolls": 3, "maxRolls": 1
        });
        assert!(matches!(
            harvest_entry_from_json(&inverted_rolls),
            Err(ConfigError::InvalidValue { field: "minRolls", .. })
        ));
    }

    #[test]
    fn test_non_string_category_fails() {
        let catalog = catalog();
        let mut json = carrot_json();
        json["categories"] = json!(["dirt", 7]);

        let err = recipe_from_json(key("farmland:carrot"), &json, &catalog).unwrap_err();
        assert!(matches!(
            err,
            RecipeError::Config {
                source: ConfigError::WrongType { field: "categories", .. },
                ..
            }
        ));
    }
}
