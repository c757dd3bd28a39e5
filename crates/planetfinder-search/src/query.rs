//! Filter specification for planet queries

use std::collections::BTreeSet;

use planetfinder_core::{Error, MaterialId, Planet, Result};

pub use planetfinder_core::{TIER_MAX, TIER_MIN};

/// Query input for the search engine
///
/// Built GUI-side from checkboxes and text inputs; by the time it
/// reaches the engine the distance bound is a number or absent, never a
/// raw string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Tiers to include; must be non-empty
    pub tiers: BTreeSet<u8>,
    /// Every id listed here must occur on a matching planet
    pub required_material_ids: BTreeSet<MaterialId>,
    /// Upper bound on light-year distance, boundary inclusive
    pub max_light_years: Option<f64>,
}

impl FilterSpec {
    /// Create an empty filter (invalid until a tier is added)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter spanning every valid tier
    pub fn all_tiers() -> Self {
        Self::new().with_tiers(TIER_MIN..=TIER_MAX)
    }

    /// Add a tier to include
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tiers.insert(tier);
        self
    }

    /// Add several tiers to include
    pub fn with_tiers(mut self, tiers: impl IntoIterator<Item = u8>) -> Self {
        self.tiers.extend(tiers);
        self
    }

    /// Require a material to be present on matching planets
    pub fn with_material(mut self, id: MaterialId) -> Self {
        self.required_material_ids.insert(id);
        self
    }

    /// Require several materials
    pub fn with_materials(mut self, ids: impl IntoIterator<Item = MaterialId>) -> Self {
        self.required_material_ids.extend(ids);
        self
    }

    /// Bound results by light-year distance from the exchange
    pub fn with_max_light_years(mut self, light_years: f64) -> Self {
        self.max_light_years = Some(light_years);
        self
    }

    /// Check structural validity of the filter
    ///
    /// An empty tier set or a negative/non-finite distance bound is
    /// rejected before any planet is examined.
    pub fn validate(&self) -> Result<()> {
        if self.tiers.is_empty() {
            return Err(Error::EmptyTierFilter);
        }

        for &tier in &self.tiers {
            if !(TIER_MIN..=TIER_MAX).contains(&tier) {
                return Err(Error::TierOutOfRange {
                    tier,
                    min: TIER_MIN,
                    max: TIER_MAX,
                });
            }
        }

        if let Some(max) = self.max_light_years {
            if !max.is_finite() || max < 0.0 {
                return Err(Error::InvalidDistance { value: max });
            }
        }

        Ok(())
    }

    /// Tier and material predicate for a single planet
    ///
    /// The distance bound is applied by the engine, which knows the
    /// exchange point and the catalog's scale.
    pub fn matches(&self, planet: &Planet) -> bool {
        if !self.tiers.contains(&planet.tier) {
            return false;
        }

        // the required set must be a subset of the planet's materials;
        // extra materials on the planet are fine
        self.required_material_ids
            .iter()
            .all(|&id| planet.has_material(id))
    }
}
