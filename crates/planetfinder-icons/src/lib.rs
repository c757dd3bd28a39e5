//! Planet Finder icon resolution
//!
//! Maps catalog entities to symbol names in the icon sprite sheet:
//! materials via a hand-curated override table plus a default naming
//! rule, planet-type codes via a fixed table. Only symbol *names* are
//! produced here; rendering the sprite sheet is someone else's problem.

pub mod materials;
pub mod planets;
pub mod sprite;

pub use materials::material_symbol;
pub use planets::{PlanetIcon, planet_symbol};
pub use sprite::{SpriteCoverage, symbol_ids};
