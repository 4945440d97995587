//! Growth duration model.
//!
//! Pure arithmetic over a recipe and a soil descriptor; the tick
//! simulation that consumes the result lives outside this crate.

use std::collections::BTreeSet;

use crate::model::CropRecipe;

/// The soil-side inputs to growth: a tick-rate modifier and the category
/// tags the soil advertises.
#[derive(Debug, Clone, PartialEq)]
pub struct SoilProfile {
    /// Multiplier the soil applies to growth duration. Expected > 0;
    /// zero or negative values are not rejected here and degenerately
    /// produce a result <= 0, which is the caller's concern to guard.
    pub tick_rate: f32,
    /// Lowercase category tags, matched against a recipe's soil set.
    pub categories: BTreeSet<String>,
}

impl SoilProfile {
    /// Creates a profile with the given tick rate and no categories.
    pub fn new(tick_rate: f32) -> SoilProfile {
        SoilProfile {
            tick_rate,
            categories: BTreeSet::new(),
        }
    }

    /// Creates a profile with tick rate and categories.
    pub fn with_categories(
        tick_rate: f32,
        categories: impl IntoIterator<Item = impl Into<String>>,
    ) -> SoilProfile {
        SoilProfile {
            tick_rate,
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this soil accepts the given recipe.
    pub fn accepts(&self, recipe: &CropRecipe) -> bool {
        recipe.grows_in(self.categories.iter().map(String::as_str))
    }
}

/// Total ticks for a crop to reach maturity on the given soil.
///
/// `floor(tick_rate * growth_multiplier * growth_ticks)`, computed in f64
/// and floored before truncation. No input validation: non-finite inputs
/// follow IEEE floor semantics and then Rust's saturating float-to-int
/// cast; degenerate tick rates are the caller's responsibility.
pub fn ticks_to_maturity(recipe: &CropRecipe, soil: &SoilProfile) -> i64 {
    let product = f64::from(soil.tick_rate)
        * f64::from(recipe.growth_multiplier())
        * f64::from(recipe.growth_ticks());
    product.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, Key, PlacedState};

    fn recipe(ticks: i32, multiplier: f32) -> CropRecipe {
        let id = Key::parse("farmland:carrot").unwrap();
        CropRecipe::builder(id.clone())
            .seed(Ingredient::of(id.clone()))
            .soil_categories(["dirt"])
            .growth_ticks(ticks)
            .growth_multiplier(multiplier)
            .display(PlacedState::new(id))
            .build()
            .unwrap()
    }

    #[test]
    fn test_identity_inputs() {
        assert_eq!(ticks_to_maturity(&recipe(100, 1.0), &SoilProfile::new(1.0)), 100);
    }

    #[test]
    fn test_multiplier_and_rate_cancel() {
        assert_eq!(ticks_to_maturity(&recipe(100, 0.5), &SoilProfile::new(2.0)), 100);
    }

    #[test]
    fn test_fractional_product_floors_down() {
        // 0.5 * 1.0 * 3 = 1.5 -> 1
        assert_eq!(ticks_to_maturity(&recipe(3, 1.0), &SoilProfile::new(0.5)), 1);
    }

    #[test]
    fn test_zero_tick_rate_degenerates_to_zero() {
        assert_eq!(ticks_to_maturity(&recipe(100, 1.0), &SoilProfile::new(0.0)), 0);
    }

    #[test]
    fn test_nonfinite_inputs_do_not_panic() {
        let _ = ticks_to_maturity(&recipe(100, f32::NAN), &SoilProfile::new(1.0));
        let _ = ticks_to_maturity(&recipe(100, 1.0), &SoilProfile::new(f32::INFINITY));
    }

    #[test]
    fn test_soil_accepts() {
        let r = recipe(100, 1.0);
        assert!(SoilProfile::with_categories(1.0, ["dirt", "sand"]).accepts(&r));
        assert!(!SoilProfile::with_categories(1.0, ["sand"]).accepts(&r));
    }
}
