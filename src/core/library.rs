/// The asset library: registry + cache + resolution. Built via
/// `AssetLibrary::builder()`.
///
/// Resolution order per key: cache hit → stored image; registry miss →
/// warn + `None`, nothing cached; otherwise render, encode, store, return.
/// Keys are namespaced by family (`scene_`, `char_`, `element_`) so the same
/// id can exist in all three families without collision. The cache grows
/// monotonically for the life of the library — no TTL, no eviction — and is
/// emptied only by `clear_cache`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use thiserror::Error;

use crate::core::canvas::Canvas;
use crate::core::encode::{self, EncodedImage};
use crate::core::registry::{AssetRegistry, RegistryError};
use crate::core::{characters, elements, scenes};

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Cache diagnostics: entry count and the current keys, sorted.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CacheStats {
    pub total: usize,
    pub items: Vec<String>,
}

/// One cache slot. The `OnceLock` gives per-key single-flight: under
/// concurrent resolution of a cold key, exactly one caller runs the drawing
/// routine and the rest block for its result.
type Slot = Arc<OnceLock<Option<EncodedImage>>>;

pub struct AssetLibrary {
    registry: AssetRegistry,
    seed: u64,
    cache: Mutex<FxHashMap<String, Slot>>,
}

/// Builder for constructing an `AssetLibrary`.
pub struct AssetLibraryBuilder {
    seed: u64,
    /// Directly provided registry (replaces the builtin one).
    registry: Option<AssetRegistry>,
    /// RON manifests merged over the base registry, in call order.
    manifest_paths: Vec<PathBuf>,
}

impl AssetLibrary {
    pub fn builder() -> AssetLibraryBuilder {
        AssetLibraryBuilder {
            seed: 0,
            registry: None,
            manifest_paths: Vec::new(),
        }
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Resolve the background image for a scene id. `None` means the id is
    /// not in the registry; the miss is logged and never cached.
    pub fn scene_background(&self, id: &str) -> Option<EncodedImage> {
        let key = format!("scene_{id}");
        if let Some(img) = self.cached(&key) {
            return Some(img);
        }
        let Some(desc) = self.registry.scene(id) else {
            log::warn!("scene '{id}' not found in asset registry");
            return None;
        };
        let kind = desc.kind.clone();
        let (width, height) = (desc.width, desc.height);
        self.resolve(key, move |rng| scenes::render(&kind, width, height, rng))
    }

    /// Resolve the sprite for a character id.
    pub fn character_sprite(&self, id: &str) -> Option<EncodedImage> {
        let key = format!("char_{id}");
        if let Some(img) = self.cached(&key) {
            return Some(img);
        }
        let Some(desc) = self.registry.character(id) else {
            log::warn!("character '{id}' not found in asset registry");
            return None;
        };
        let kind = desc.kind.clone();
        let size = desc.size;
        self.resolve(key, move |_| characters::render(&kind, size))
    }

    /// Resolve the icon for an interactive-element id.
    pub fn interactive_element(&self, id: &str) -> Option<EncodedImage> {
        let key = format!("element_{id}");
        if let Some(img) = self.cached(&key) {
            return Some(img);
        }
        let Some(desc) = self.registry.element(id) else {
            log::warn!("element '{id}' not found in asset registry");
            return None;
        };
        let kind = desc.kind.clone();
        let size = desc.size;
        self.resolve(key, move |_| elements::render(&kind, size))
    }

    /// Eagerly resolve every id in all three registry tables.
    pub fn preload_all(&self) {
        let scene_ids: Vec<String> = self.registry.scene_ids().map(str::to_string).collect();
        for id in scene_ids {
            self.scene_background(&id);
        }
        let char_ids: Vec<String> = self.registry.character_ids().map(str::to_string).collect();
        for id in char_ids {
            self.character_sprite(&id);
        }
        let element_ids: Vec<String> = self.registry.element_ids().map(str::to_string).collect();
        for id in element_ids {
            self.interactive_element(&id);
        }
    }

    /// Empty the cache unconditionally. Subsequent resolutions regenerate.
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        let map = self.cache.lock().unwrap();
        let mut items: Vec<String> = map
            .iter()
            .filter(|(_, slot)| slot.get().is_some_and(|v| v.is_some()))
            .map(|(key, _)| key.clone())
            .collect();
        items.sort();
        CacheStats {
            total: items.len(),
            items,
        }
    }

    fn cached(&self, key: &str) -> Option<EncodedImage> {
        let map = self.cache.lock().unwrap();
        map.get(key).and_then(|slot| slot.get().cloned()).flatten()
    }

    /// Render-and-store for a key whose descriptor resolved. The slot map
    /// lock is released before the drawing routine runs; the slot's
    /// `OnceLock` serializes concurrent initializers per key.
    fn resolve<F>(&self, key: String, paint: F) -> Option<EncodedImage>
    where
        F: FnOnce(&mut StdRng) -> Canvas,
    {
        let slot = {
            let mut map = self.cache.lock().unwrap();
            map.entry(key.clone()).or_default().clone()
        };

        let result = slot
            .get_or_init(|| {
                let mut rng = StdRng::seed_from_u64(self.seed ^ hash_key(&key));
                let canvas = paint(&mut rng);
                match encode::to_data_uri(&canvas) {
                    Ok(img) => {
                        log::debug!("generated asset for cache key '{key}'");
                        Some(img)
                    }
                    Err(e) => {
                        log::warn!("failed to encode asset '{key}': {e}");
                        None
                    }
                }
            })
            .clone();

        // An encode failure must not stick as a negative entry; drop the
        // slot so a later attempt starts fresh.
        if result.is_none() {
            let mut map = self.cache.lock().unwrap();
            if map
                .get(&key)
                .is_some_and(|s| s.get().is_some_and(|v| v.is_none()))
            {
                map.remove(&key);
            }
        }

        result
    }
}

impl AssetLibraryBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Provide a registry directly, replacing the builtin one.
    pub fn with_registry(mut self, registry: AssetRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Merge a RON manifest file over the base registry. Later files win on
    /// id conflicts.
    pub fn manifest_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_paths.push(path.into());
        self
    }

    pub fn build(self) -> Result<AssetLibrary, LibraryError> {
        let mut registry = self.registry.unwrap_or_else(AssetRegistry::builtin);

        for path in &self.manifest_paths {
            if path.is_dir() {
                load_manifests_from_dir(path, &mut registry)?;
            } else {
                registry.merge(AssetRegistry::load_from_ron(path)?);
            }
        }

        Ok(AssetLibrary {
            registry,
            seed: self.seed,
            cache: Mutex::new(FxHashMap::default()),
        })
    }
}

fn load_manifests_from_dir(dir: &Path, registry: &mut AssetRegistry) -> Result<(), LibraryError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            registry.merge(AssetRegistry::load_from_ron(&path)?);
        }
    }
    Ok(())
}

fn hash_key(key: &str) -> u64 {
    let mut hasher = FxHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}
