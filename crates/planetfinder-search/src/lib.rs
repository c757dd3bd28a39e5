//! Planet Finder search engine
//!
//! A stateless query layer over a loaded catalog: validate a
//! [`FilterSpec`], match planets by tier, required materials, and
//! distance from the exchange point, and rank the matches by distance.
//! Queries never mutate the catalog; derived distances live only in the
//! returned hits, so concurrent queries against a shared catalog are
//! safe without locking.
//!
//! # Example
//! ```
//! use planetfinder_core::{Catalog, GalaxyConfig};
//! use planetfinder_search::{FilterSpec, SearchEngine};
//!
//! let catalog = Catalog {
//!     galaxy_config: GalaxyConfig { px_to_ly: 100.0 },
//!     materials: vec![],
//!     systems: vec![],
//! };
//!
//! let filter = FilterSpec::all_tiers().with_max_light_years(5.0);
//! let hits = SearchEngine::new().search(&catalog, &filter)?;
//! assert!(hits.is_empty());
//! # Ok::<(), planetfinder_core::Error>(())
//! ```

pub mod engine;
pub mod query;

pub use engine::{SearchEngine, SearchHit};
pub use query::{FilterSpec, TIER_MAX, TIER_MIN};
