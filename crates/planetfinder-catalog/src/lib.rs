//! Planet Finder catalog loading
//!
//! Parses the catalog data file into the shared
//! [`Catalog`](planetfinder_core::Catalog) model and
//! validates its data contract. Loading is a one-time startup step; the
//! resulting catalog is read-only for the lifetime of the process, so
//! concurrent queries over it need no locking.
//!
//! # Example
//! ```no_run
//! use planetfinder_catalog::CatalogLoader;
//!
//! let loaded = CatalogLoader::new().load_file("data.json".as_ref())?;
//! println!("{} planets", loaded.catalog.planet_count());
//! # Ok::<(), planetfinder_core::Error>(())
//! ```

pub mod loader;
pub mod logging;

pub use loader::{CatalogLoader, IntegrityWarning, LoadedCatalog, integrity_scan};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
