//! Catalog data model shared across Planet Finder crates
//!
//! The types here mirror the catalog data file: a galaxy configuration,
//! a material table, and systems owning planets. The serde attributes
//! encode the wire field names (`sId`, `fert`, `mats`, `pxToLY`, ...),
//! so this module is the single source of truth for the data contract.
//! A catalog is loaded once and treated as read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest valid planet tier
pub const TIER_MIN: u8 = 1;
/// Highest valid planet tier
pub const TIER_MAX: u8 = 4;

/// Unique identifier for a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

impl MaterialId {
    /// Create a new material ID
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MaterialId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Unique identifier for a planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanetId(pub u32);

impl PlanetId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlanetId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Unique identifier for a star system
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SystemId(pub u32);

impl SystemId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SystemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A tradeable material from the catalog's material table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
}

/// A material occurrence on a planet, referencing the material table by id
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialAbundance {
    #[serde(rename = "id")]
    pub material_id: MaterialId,
    #[serde(rename = "ab")]
    pub abundance: f64,
}

/// A planet owned by exactly one system
///
/// Distances from the exchange point are query-scoped and never stored
/// here; see the search crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    #[serde(rename = "sId")]
    pub system_id: SystemId,
    pub name: String,
    /// Planet-type code, mapped to an icon symbol by the icons crate
    #[serde(rename = "type")]
    pub type_code: i32,
    #[serde(rename = "fert")]
    pub fertility: f64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Desirability rank, 1-4
    pub tier: u8,
    #[serde(rename = "mats", default)]
    pub materials: Vec<MaterialAbundance>,
}

impl Planet {
    /// Material ids present on this planet, in catalog order
    pub fn material_ids(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.materials.iter().map(|m| m.material_id)
    }

    /// Check whether a material occurs on this planet
    pub fn has_material(&self, id: MaterialId) -> bool {
        self.materials.iter().any(|m| m.material_id == id)
    }
}

/// A star system; `planets` may be absent or null in the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    #[serde(default)]
    pub id: Option<SystemId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub planets: Vec<Planet>,
}

/// Treat a JSON `null` the same as an absent sequence
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Galaxy-wide configuration scalars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalaxyConfig {
    /// Pixels per light-year; converts pixel distances to LY
    #[serde(rename = "pxToLY")]
    pub px_to_ly: f64,
}

/// The fixed reference coordinate all distances are measured from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub x: f64,
    pub y: f64,
}

impl Exchange {
    pub const DEFAULT_X: f64 = 3301.0;
    pub const DEFAULT_Y: f64 = 1409.0;

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean pixel distance from this point to `(x, y)`
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        ((x - self.x).powi(2) + (y - self.y).powi(2)).sqrt()
    }
}

impl Default for Exchange {
    fn default() -> Self {
        Self {
            x: Self::DEFAULT_X,
            y: Self::DEFAULT_Y,
        }
    }
}

/// Top-level catalog aggregate, read-only after load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "galaxyConfig")]
    pub galaxy_config: GalaxyConfig,
    pub materials: Vec<Material>,
    #[serde(default)]
    pub systems: Vec<System>,
}

impl Catalog {
    /// All planets across all systems, in catalog iteration order
    pub fn planets(&self) -> impl Iterator<Item = &Planet> {
        self.systems.iter().flat_map(|s| s.planets.iter())
    }

    /// Look up a material by id
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Look up a material's display name by id
    ///
    /// Dangling references yield `None`; callers render a placeholder.
    pub fn material_name(&self, id: MaterialId) -> Option<&str> {
        self.material(id).map(|m| m.name.as_str())
    }

    /// Material ids that occur on at least one planet
    pub fn available_material_ids(&self) -> BTreeSet<MaterialId> {
        self.planets()
            .flat_map(|p| p.material_ids())
            .collect()
    }

    /// Materials offered as filter options, in material-table order
    ///
    /// Materials catalogued but never placed on a planet are excluded
    /// here yet remain valid lookup targets for name resolution.
    pub fn filterable_materials(&self) -> Vec<&Material> {
        let available = self.available_material_ids();
        self.materials
            .iter()
            .filter(|m| available.contains(&m.id))
            .collect()
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    pub fn planet_count(&self) -> usize {
        self.planets().count()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Compute summary statistics over the whole catalog
    pub fn statistics(&self) -> CatalogStatistics {
        let mut planets_per_tier = BTreeMap::new();
        let mut planets_per_type = BTreeMap::new();
        for planet in self.planets() {
            *planets_per_tier.entry(planet.tier).or_insert(0usize) += 1;
            *planets_per_type.entry(planet.type_code).or_insert(0usize) += 1;
        }

        CatalogStatistics {
            system_count: self.system_count(),
            planet_count: self.planet_count(),
            material_count: self.material_count(),
            filterable_material_count: self.available_material_ids().len(),
            planets_per_tier,
            planets_per_type,
        }
    }
}

/// Summary statistics for a loaded catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStatistics {
    pub system_count: usize,
    pub planet_count: usize,
    pub material_count: usize,
    pub filterable_material_count: usize,
    pub planets_per_tier: BTreeMap<u8, usize>,
    pub planets_per_type: BTreeMap<i32, usize>,
}
