//! Descriptive text shown on hover.
//!
//! Sun, planets and Moon come from an embedded JSON document; NEO and PHO
//! entries are generated from their table rows.

use orrery_engine::{HoverTarget, OrreryError, OrreryResult};
use serde::Deserialize;

use crate::bodies::SmallBodyDef;

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub details: Vec<(String, String)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    bodies: Vec<CatalogEntry>,
}

impl Catalog {
    /// The built-in catalog.
    pub fn embedded() -> OrreryResult<Self> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> OrreryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Hover metadata for a named body. Every body in the scene tables must
    /// have an entry, so a miss is a startup error.
    pub fn target(&self, name: &str) -> OrreryResult<HoverTarget> {
        let entry = self
            .bodies
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| OrreryError::MissingCatalogEntry(name.to_string()))?;
        Ok(HoverTarget {
            name: entry.name.clone(),
            details: entry.details.clone(),
        })
    }
}

/// Hover metadata for a near-Earth (`"NEO"`) or hazardous (`"PHO"`) object.
pub fn small_body_target(class: &str, def: &SmallBodyDef) -> HoverTarget {
    HoverTarget::new(def.name)
        .with_detail("Description", format!("{class}: {}", def.name))
        .with_detail("Diameter", format!("{} km", def.diameter))
        .with_detail("Orbit Eccentricity", def.eccentricity.to_string())
        .with_detail("Inclination", format!("{} degrees", def.inclination_deg))
}
