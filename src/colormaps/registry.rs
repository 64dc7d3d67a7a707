//! Colormap registry.
//!
//! Maps names to shared colormaps. Lookups are case-insensitive. The builtin
//! registry is built once on first use and never changes afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::colormap::{Colormap, ColormapKind};
use super::{listed, procedural, segmented};
use crate::error::{PaletteError, Result};

static BUILTIN: OnceCell<ColormapRegistry> = OnceCell::new();

/// The process-wide registry of builtin colormaps
pub fn builtin_registry() -> Result<&'static ColormapRegistry> {
    BUILTIN.get_or_try_init(ColormapRegistry::builtin)
}

/// A name → colormap table
#[derive(Default)]
pub struct ColormapRegistry {
    maps: HashMap<String, Arc<dyn Colormap>>,
}

impl ColormapRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every builtin listed, segmented and procedural map
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for map in listed::builtin()? {
            registry.register(Arc::new(map));
        }
        for map in segmented::builtin()? {
            registry.register(Arc::new(map));
        }
        for map in procedural::builtin() {
            registry.register(Arc::new(map));
        }
        Ok(registry)
    }

    /// Add a colormap under its own name, replacing any previous entry
    pub fn register(&mut self, map: Arc<dyn Colormap>) {
        self.maps.insert(map.name().to_lowercase(), map);
    }

    /// Whether a colormap with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.maps.contains_key(&name.to_lowercase())
    }

    /// Get a colormap by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Colormap>> {
        self.maps
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| PaletteError::InvalidParameter {
                param: "colormap".to_string(),
                message: format!("Unknown colormap: {}", name),
            })
    }

    /// Registered names with their kinds, sorted by name
    pub fn names(&self) -> Vec<(String, ColormapKind)> {
        let mut names: Vec<_> = self
            .maps
            .values()
            .map(|m| (m.name().to_string(), m.kind()))
            .collect();
        names.sort_by_key(|(name, _)| name.to_lowercase());
        names
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
