//! Planet matching and distance ranking

use tracing::debug;

use planetfinder_core::{Catalog, Exchange, Planet, Result};

use crate::query::FilterSpec;

/// A matching planet annotated with query-scoped distance data
///
/// Distances are computed per query and never written back into the
/// catalog, so the same planet can participate in overlapping queries.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub planet: &'a Planet,
    /// Euclidean distance from the exchange point, in pixels
    pub distance: f64,
    /// `distance` converted via the catalog's pixels-per-light-year scale
    pub light_years: f64,
}

/// Stateless query engine over a read-only catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchEngine {
    exchange: Exchange,
}

impl SearchEngine {
    /// Create an engine measuring from the default exchange point
    pub fn new() -> Self {
        Self {
            exchange: Exchange::default(),
        }
    }

    /// Create an engine measuring from a custom exchange point
    pub fn with_exchange(exchange: Exchange) -> Self {
        Self { exchange }
    }

    /// The reference point distances are measured from
    pub fn exchange(&self) -> Exchange {
        self.exchange
    }

    /// Run a validated filter over the catalog
    ///
    /// Returns matching planets sorted ascending by pixel distance; the
    /// sort is stable, so equal-distance planets keep catalog order. An
    /// empty result is not an error.
    pub fn search<'a>(
        &self,
        catalog: &'a Catalog,
        filter: &FilterSpec,
    ) -> Result<Vec<SearchHit<'a>>> {
        filter.validate()?;

        let px_to_ly = catalog.galaxy_config.px_to_ly;
        let mut hits = Vec::new();

        for planet in catalog.planets() {
            // cheap tier/material checks first, distance last
            if !filter.matches(planet) {
                continue;
            }

            let distance = self.exchange.distance_to(planet.x, planet.y);
            let light_years = distance / px_to_ly;

            if let Some(max) = filter.max_light_years {
                // strict greater-than: a planet exactly at the bound matches
                if light_years > max {
                    continue;
                }
            }

            hits.push(SearchHit {
                planet,
                distance,
                light_years,
            });
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        debug!(hits = hits.len(), "search complete");
        Ok(hits)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
