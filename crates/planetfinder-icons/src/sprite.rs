//! Sprite-sheet symbol inventory
//!
//! The sprite sheet is an SVG document whose `<symbol>` elements carry
//! the ids the resolvers produce. This module extracts those ids with a
//! plain text scan (no XML tree, no rendering) and cross-checks a
//! catalog's materials and planet types against the sheet.

use std::collections::BTreeSet;

use planetfinder_core::{Catalog, MaterialId};

use crate::materials::material_symbol;
use crate::planets::planet_symbol;

/// Extract the `id` attributes of all `<symbol>` elements, in document order
pub fn symbol_ids(svg: &str) -> Vec<String> {
    let mut ids = Vec::new();
    let mut rest = svg;
    while let Some(pos) = rest.find("<symbol") {
        rest = &rest[pos + "<symbol".len()..];
        let Some(end) = rest.find('>') else { break };
        if let Some(id) = attr_value(&rest[..end], "id") {
            ids.push(id.to_string());
        }
        rest = &rest[end..];
    }
    ids
}

/// Find a double-quoted attribute value inside an element tag body
fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{name}=\"");
    let mut from = 0;
    while let Some(rel) = tag[from..].find(&needle) {
        let at = from + rel;
        // guard against matching a suffix of another attribute name
        if tag[..at].ends_with(|c: char| c.is_whitespace()) {
            let start = at + needle.len();
            let len = tag[start..].find('"')?;
            return Some(&tag[start..start + len]);
        }
        from = at + needle.len();
    }
    None
}

/// Cross-check of a catalog against the sprite sheet's symbol inventory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteCoverage {
    /// Materials whose symbol exists in the sheet: (id, symbol)
    pub resolved: Vec<(MaterialId, String)>,
    /// Materials whose symbol is absent from the sheet: (id, symbol)
    pub missing: Vec<(MaterialId, String)>,
    /// Materials explicitly marked as having no icon
    pub iconless: Vec<MaterialId>,
    /// Planet-type codes whose symbol exists in the sheet: (code, symbol)
    pub planet_resolved: Vec<(i32, String)>,
    /// Planet-type codes whose symbol is absent from the sheet
    pub planet_missing: Vec<(i32, String)>,
    /// Sheet symbols no catalog material or planet type resolves to
    pub unused_symbols: Vec<String>,
}

impl SpriteCoverage {
    /// Compute coverage of `catalog` against the sprite sheet source
    pub fn of(catalog: &Catalog, svg: &str) -> Self {
        let sheet: BTreeSet<String> = symbol_ids(svg).into_iter().collect();
        let mut used: BTreeSet<String> = BTreeSet::new();
        let mut coverage = SpriteCoverage::default();

        for material in &catalog.materials {
            match material_symbol(material.id, &material.name) {
                None => coverage.iconless.push(material.id),
                Some(symbol) => {
                    if sheet.contains(&symbol) {
                        used.insert(symbol.clone());
                        coverage.resolved.push((material.id, symbol));
                    } else {
                        coverage.missing.push((material.id, symbol));
                    }
                }
            }
        }

        let type_codes: BTreeSet<i32> = catalog.planets().map(|p| p.type_code).collect();
        for code in type_codes {
            let symbol = planet_symbol(code).symbol();
            if sheet.contains(&symbol) {
                used.insert(symbol.clone());
                coverage.planet_resolved.push((code, symbol));
            } else {
                coverage.planet_missing.push((code, symbol));
            }
        }

        coverage.unused_symbols = sheet.difference(&used).cloned().collect();
        coverage
    }

    /// Number of catalog materials checked
    pub fn material_count(&self) -> usize {
        self.resolved.len() + self.missing.len() + self.iconless.len()
    }

    /// True when every material and planet type resolves into the sheet
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.planet_missing.is_empty()
    }
}
