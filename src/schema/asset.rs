use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptor for a scene background: which routine to run and at what
/// dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneDescriptor {
    /// Symbolic type tag selecting the drawing routine.
    pub kind: String,
    /// Human-readable display name.
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Descriptor for a character sprite. Characters are square; `size` is the
/// edge length in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDescriptor {
    pub kind: String,
    pub name: String,
    pub size: u32,
}

/// Descriptor for an interactive-element icon. Square, like characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub kind: String,
    pub name: String,
    pub size: u32,
}

/// One registry data file: id → descriptor tables for the three asset
/// families. Families are independent namespaces, so the same id string may
/// appear in more than one table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub scenes: HashMap<String, SceneDescriptor>,
    #[serde(default)]
    pub characters: HashMap<String, CharacterDescriptor>,
    #[serde(default)]
    pub elements: HashMap<String, ElementDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_from_ron() {
        let src = r#"AssetManifest(
            scenes: {
                "scene_1": SceneDescriptor(
                    kind: "forest_entrance",
                    name: "Forest Entrance",
                    width: 800,
                    height: 600,
                ),
            },
            characters: {
                "char_1": CharacterDescriptor(
                    kind: "elf_female",
                    name: "Moonshadow",
                    size: 64,
                ),
            },
            elements: {
                "glowing_leaf": ElementDescriptor(
                    kind: "glowing_leaf",
                    name: "Glowing Leaf",
                    size: 32,
                ),
            },
        )"#;
        let manifest: AssetManifest = ron::from_str(src).unwrap();
        assert_eq!(manifest.scenes["scene_1"].kind, "forest_entrance");
        assert_eq!(manifest.scenes["scene_1"].width, 800);
        assert_eq!(manifest.characters["char_1"].size, 64);
        assert_eq!(manifest.elements["glowing_leaf"].name, "Glowing Leaf");
    }

    #[test]
    fn missing_tables_default_empty() {
        let manifest: AssetManifest = ron::from_str("AssetManifest()").unwrap();
        assert!(manifest.scenes.is_empty());
        assert!(manifest.characters.is_empty());
        assert!(manifest.elements.is_empty());
    }
}
