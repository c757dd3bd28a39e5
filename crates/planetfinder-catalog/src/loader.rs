//! Catalog loader and integrity scan
//!
//! The loader parses the JSON data file, checks the galaxy configuration,
//! and runs a non-fatal integrity scan over the loaded catalog. Integrity
//! findings are warnings only: a dangling material reference must never
//! abort a search, it just renders as an "unknown" placeholder downstream.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info, warn};

use planetfinder_core::{Catalog, Error, MaterialId, PlanetId, Result, TIER_MAX, TIER_MIN};

/// Non-fatal finding from the catalog integrity scan
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityWarning {
    /// A planet references a material id absent from the material table
    #[error("planet {planet} references unknown material {material}")]
    DanglingMaterial {
        planet: PlanetId,
        material: MaterialId,
    },

    /// The material table contains the same id twice
    #[error("duplicate material id {0}")]
    DuplicateMaterialId(MaterialId),

    /// Two planets share the same id
    #[error("duplicate planet id {0}")]
    DuplicatePlanetId(PlanetId),

    /// A planet's tier falls outside the valid range
    #[error("planet {planet} has tier {tier} outside 1-4")]
    TierOutOfRange { planet: PlanetId, tier: u8 },
}

/// A successfully loaded catalog together with its integrity findings
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub warnings: Vec<IntegrityWarning>,
}

/// Parses the catalog data file into a [`Catalog`]
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a catalog from a file path
    ///
    /// Missing or malformed files are fatal; no partial-catalog recovery
    /// is attempted.
    pub fn load_file(&self, path: &Path) -> Result<LoadedCatalog> {
        if !path.exists() {
            return Err(Error::CatalogNotFound(path.to_path_buf()));
        }

        info!(path = %path.display(), "Loading catalog");
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    /// Load a catalog from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<LoadedCatalog> {
        let catalog: Catalog = serde_json::from_reader(reader)
            .map_err(|e| Error::malformed(e.to_string()))?;
        self.finish(catalog)
    }

    /// Load a catalog from an in-memory JSON document
    pub fn load_str(&self, data: &str) -> Result<LoadedCatalog> {
        let catalog: Catalog = serde_json::from_str(data)
            .map_err(|e| Error::malformed(e.to_string()))?;
        self.finish(catalog)
    }

    fn finish(&self, catalog: Catalog) -> Result<LoadedCatalog> {
        let px_to_ly = catalog.galaxy_config.px_to_ly;
        if !px_to_ly.is_finite() || px_to_ly <= 0.0 {
            return Err(Error::invalid_config(format!(
                "pxToLY must be a positive number, got {px_to_ly}"
            )));
        }

        let warnings = integrity_scan(&catalog);
        for warning in &warnings {
            warn!(%warning, "Catalog integrity");
        }

        info!(
            systems = catalog.system_count(),
            planets = catalog.planet_count(),
            materials = catalog.material_count(),
            filterable = catalog.available_material_ids().len(),
            warnings = warnings.len(),
            "Catalog loaded"
        );

        Ok(LoadedCatalog { catalog, warnings })
    }
}

/// Scan a catalog for data-contract violations
///
/// Nothing found here is fatal; the catalog stays usable and callers
/// decide how loudly to surface the findings.
pub fn integrity_scan(catalog: &Catalog) -> Vec<IntegrityWarning> {
    let mut warnings = Vec::new();

    let mut material_ids = HashSet::new();
    for material in &catalog.materials {
        if !material_ids.insert(material.id) {
            warnings.push(IntegrityWarning::DuplicateMaterialId(material.id));
        }
    }

    let mut planet_ids = HashSet::new();
    for planet in catalog.planets() {
        if !planet_ids.insert(planet.id) {
            warnings.push(IntegrityWarning::DuplicatePlanetId(planet.id));
        }

        if !(TIER_MIN..=TIER_MAX).contains(&planet.tier) {
            warnings.push(IntegrityWarning::TierOutOfRange {
                planet: planet.id,
                tier: planet.tier,
            });
        }

        for material_id in planet.material_ids() {
            if !material_ids.contains(&material_id) {
                debug!(planet = %planet.id, material = %material_id, "dangling material reference");
                warnings.push(IntegrityWarning::DanglingMaterial {
                    planet: planet.id,
                    material: material_id,
                });
            }
        }
    }

    warnings
}
