//! Material icon symbol resolution
//!
//! Most materials map to a sheet symbol by the default convention:
//! display name with the spaces stripped. The override table below
//! carries the hand-curated exceptions, keyed by material id. Entries
//! mapped to `None` are materials the sheet has no icon for at all.
//! The table values are a verified contract against the sprite sheet;
//! do not "correct" entries without re-checking the sheet.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use planetfinder_core::MaterialId;

/// Curated exceptions where the material name does not match the sheet
static MATERIAL_OVERRIDES: Lazy<HashMap<u32, Option<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (2, Some("IronBar")),                 // Iron
        (6, Some("CopperBar")),               // Copper
        (12, Some("BasicRations")),           // Rations
        (15, Some("BasicExosuit")),           // Exosuit
        (17, Some("BasicTools")),             // Tools
        (26, Some("BasicConstructionKit")),   // Construction Kit
        (37, Some("Cow")),                    // Cows
        (55, Some("Motor")),                  // Electric Motor
        (57, Some("Gasoline")),               // Ethanol
        (62, Some("CopperWiring")),           // Copper Wire
        (63, Some("Electronics")),            // Consumer Electronics
        (80, Some("Graphenium")),             // Graphenium Wire, shares the Graphenium symbol
        (88, Some("Chicken")),                // Chickens
        (92, Some("BasicPrefabKit")),         // Prefab Kit
        (93, Some("BasicAmenities")),         // Amenities
        (98, Some("CompositeTruss")),         // Truss; sheet also has ReinforcedTruss
        (100, Some("AdvancedDrill")),         // Titanium Carbide Drill
        (104, Some("BasicHullPlate")),        // Hull Plate
        (109, Some("BasicFTLEmitter")),       // Linear FTL Emitter
        (110, Some("HydrogenFuelCell")),      // Hydrogen Fuel
        (114, Some("Starglass")),             // Starglass Hull Plate, shares the Starglass symbol
        (118, Some("BasicShipBridge")),       // Shuttle Bridge
        (134, Some("SuperiorFTLEmitter")),    // Quantum FTL Emitter
        (139, Some("BasicShipBridge")),       // Hauler Bridge, same symbol as Shuttle Bridge
        (147, Some("AI")),                    // Artificial Intelligence
        (152, Some("HyperCoil")),             // Superconducting Coil
        (160, Some("SuperiorFTLEmitter")),    // Extra-dimensional FTL Emitter
        (163, Some("Nanobots")),              // Nanites
        (166, Some("T4ShipBridge")),          // Freighter Bridge
        (168, None),                          // TEMP, no icon in the sheet
        (169, Some("APU")),                   // Advanced Processing Unit
        (171, Some("T4ShipElements")),        // Starlifter Structural Elements
        (174, Some("FieldCooling")),          // Field Cooling System
        (175, Some("NutrientBlend")),         // Bio-Nutrient Blend
        (176, Some("Pack_Medicine")),         // Medicine Shipment
        (177, Some("Pack_Food")),             // Food Shipment
        (178, Some("Pack_ShipParts")),        // Ship Parts Shipment
        (179, Some("Pack_Defense")),          // Defense Systems Pack
        (180, Some("Pack_Habitats")),         // Habitats Shipment
        (181, Some("Pack_Scientific")),       // Scientific Instruments Shipment
    ])
});

/// Resolve the sprite-sheet symbol name for a material
///
/// Consults the override table first, then falls back to the display
/// name with spaces removed. Returns `None` for materials explicitly
/// marked as having no icon. Pure function of its inputs.
pub fn material_symbol(id: MaterialId, name: &str) -> Option<String> {
    match MATERIAL_OVERRIDES.get(&id.value()) {
        Some(Some(symbol)) => Some((*symbol).to_string()),
        Some(None) => None,
        None => Some(name.replace(' ', "")),
    }
}
