/// Asset registry — read-only id → descriptor tables for the three asset
/// families, loaded from RON manifests.

use rustc_hash::FxHashMap;
use std::path::Path;
use thiserror::Error;

use crate::schema::asset::{AssetManifest, CharacterDescriptor, ElementDescriptor, SceneDescriptor};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Builtin manifests, one per story preset, embedded at compile time.
mod data {
    pub const FOREST_GUARDIAN: &str = include_str!("../../asset_data/forest_guardian.ron");
    pub const CITY_SECRETS: &str = include_str!("../../asset_data/city_secrets.ron");
    pub const SCHOOL_DAYS: &str = include_str!("../../asset_data/school_days.ron");
}

/// The three descriptor tables. Construction-time mutable (load/merge),
/// read-only once handed to an `AssetLibrary`. Lookup misses are a
/// recoverable condition — callers warn and carry on with no asset.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    scenes: FxHashMap<String, SceneDescriptor>,
    characters: FxHashMap<String, CharacterDescriptor>,
    elements: FxHashMap<String, ElementDescriptor>,
}

impl AssetRegistry {
    pub fn new() -> AssetRegistry {
        AssetRegistry::default()
    }

    /// The registry covering all three builtin story presets.
    pub fn builtin() -> AssetRegistry {
        let mut registry = AssetRegistry::new();
        for src in [data::FOREST_GUARDIAN, data::CITY_SECRETS, data::SCHOOL_DAYS] {
            // Embedded data is validated by tests; a parse failure here is a
            // build defect, not a runtime condition.
            let manifest: AssetManifest =
                ron::from_str(src).expect("builtin asset manifest is malformed");
            registry.absorb(manifest);
        }
        registry
    }

    /// Load a registry from a single RON manifest file.
    pub fn load_from_ron(path: &Path) -> Result<AssetRegistry, RegistryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a registry from a RON manifest string.
    pub fn parse_ron(input: &str) -> Result<AssetRegistry, RegistryError> {
        let manifest: AssetManifest = ron::from_str(input)?;
        let mut registry = AssetRegistry::new();
        registry.absorb(manifest);
        Ok(registry)
    }

    /// Merge another registry into this one. Entries from `other` override
    /// entries in `self` with the same id, per family.
    pub fn merge(&mut self, other: AssetRegistry) {
        self.scenes.extend(other.scenes);
        self.characters.extend(other.characters);
        self.elements.extend(other.elements);
    }

    fn absorb(&mut self, manifest: AssetManifest) {
        self.scenes.extend(manifest.scenes);
        self.characters.extend(manifest.characters);
        self.elements.extend(manifest.elements);
    }

    pub fn scene(&self, id: &str) -> Option<&SceneDescriptor> {
        self.scenes.get(id)
    }

    pub fn character(&self, id: &str) -> Option<&CharacterDescriptor> {
        self.characters.get(id)
    }

    pub fn element(&self, id: &str) -> Option<&ElementDescriptor> {
        self.elements.get(id)
    }

    pub fn scene_ids(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }

    pub fn character_ids(&self) -> impl Iterator<Item = &str> {
        self.characters.keys().map(String::as_str)
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn scenes(&self) -> impl Iterator<Item = (&str, &SceneDescriptor)> {
        self.scenes.iter().map(|(id, d)| (id.as_str(), d))
    }

    pub fn characters(&self) -> impl Iterator<Item = (&str, &CharacterDescriptor)> {
        self.characters.iter().map(|(id, d)| (id.as_str(), d))
    }

    pub fn elements(&self) -> impl Iterator<Item = (&str, &ElementDescriptor)> {
        self.elements.iter().map(|(id, d)| (id.as_str(), d))
    }

    /// Total entry count across all three families.
    pub fn len(&self) -> usize {
        self.scenes.len() + self.characters.len() + self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_all_three_presets() {
        let registry = AssetRegistry::builtin();
        assert_eq!(registry.scene_ids().count(), 13);
        assert_eq!(registry.character_ids().count(), 12);
        assert_eq!(registry.element_ids().count(), 9);
        assert_eq!(registry.len(), 34);
    }

    #[test]
    fn builtin_scene_descriptors_use_reference_dimensions() {
        let registry = AssetRegistry::builtin();
        for (id, desc) in registry.scenes() {
            assert_eq!((desc.width, desc.height), (800, 600), "scene {}", id);
        }
        for (id, desc) in registry.characters() {
            assert_eq!(desc.size, 64, "character {}", id);
        }
        for (id, desc) in registry.elements() {
            assert_eq!(desc.size, 32, "element {}", id);
        }
    }

    #[test]
    fn builtin_kinds_are_all_known() {
        use crate::core::{characters, elements, scenes};

        let registry = AssetRegistry::builtin();
        for (id, desc) in registry.scenes() {
            assert!(
                scenes::SceneKind::from_tag(&desc.kind).is_some(),
                "scene {} has unknown kind {}",
                id,
                desc.kind
            );
        }
        for (id, desc) in registry.characters() {
            assert!(
                characters::CharacterKind::from_tag(&desc.kind).is_some(),
                "character {} has unknown kind {}",
                id,
                desc.kind
            );
        }
        for (id, desc) in registry.elements() {
            assert!(
                elements::ElementKind::from_tag(&desc.kind).is_some(),
                "element {} has unknown kind {}",
                id,
                desc.kind
            );
        }
    }

    #[test]
    fn lookup_miss_returns_none() {
        let registry = AssetRegistry::builtin();
        assert!(registry.scene("does_not_exist").is_none());
        assert!(registry.character("does_not_exist").is_none());
        assert!(registry.element("does_not_exist").is_none());
    }

    #[test]
    fn merge_precedence() {
        let mut base = AssetRegistry::parse_ron(
            r#"AssetManifest(
                scenes: {
                    "shared": SceneDescriptor(kind: "forest_entrance", name: "Base", width: 800, height: 600),
                    "base_only": SceneDescriptor(kind: "library", name: "Only", width: 800, height: 600),
                },
            )"#,
        )
        .unwrap();

        let override_set = AssetRegistry::parse_ron(
            r#"AssetManifest(
                scenes: {
                    "shared": SceneDescriptor(kind: "dark_street", name: "Override", width: 640, height: 480),
                },
            )"#,
        )
        .unwrap();

        base.merge(override_set);
        assert_eq!(base.scene("shared").unwrap().kind, "dark_street");
        assert_eq!(base.scene("shared").unwrap().width, 640);
        assert!(base.scene("base_only").is_some());
    }

    #[test]
    fn same_id_across_families_does_not_collide() {
        let registry = AssetRegistry::parse_ron(
            r#"AssetManifest(
                scenes: {"1": SceneDescriptor(kind: "library", name: "Scene One", width: 800, height: 600)},
                characters: {"1": CharacterDescriptor(kind: "elf_female", name: "Char One", size: 64)},
                elements: {"1": ElementDescriptor(kind: "light", name: "Element One", size: 32)},
            )"#,
        )
        .unwrap();
        assert_eq!(registry.scene("1").unwrap().kind, "library");
        assert_eq!(registry.character("1").unwrap().kind, "elf_female");
        assert_eq!(registry.element("1").unwrap().kind, "light");
    }
}
