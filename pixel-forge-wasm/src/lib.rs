//! WASM bindings for pixel-forge — powers the interactive web demo.

use wasm_bindgen::prelude::*;

use pixel_forge::core::inject::inject_assets;
use pixel_forge::core::library::AssetLibrary;
use pixel_forge::core::registry::AssetRegistry;
use pixel_forge::core::{characters, elements, scenes};
use pixel_forge::schema::game::GameData;

// ---------------------------------------------------------------------------
// Embedded preset manifests — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const FOREST_GUARDIAN: &str = include_str!("../../asset_data/forest_guardian.ron");
    pub const CITY_SECRETS: &str = include_str!("../../asset_data/city_secrets.ron");
    pub const SCHOOL_DAYS: &str = include_str!("../../asset_data/school_days.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct AssetInfo {
    id: String,
    kind: String,
    name: String,
    width: u32,
    height: u32,
}

#[derive(serde::Serialize)]
struct CatalogInfo {
    preset: String,
    scenes: Vec<AssetInfo>,
    characters: Vec<AssetInfo>,
    elements: Vec<AssetInfo>,
}

fn preset_registry(preset: &str) -> Result<AssetRegistry, JsError> {
    let sources: &[&str] = match preset {
        "forest_guardian" => &[data::FOREST_GUARDIAN],
        "city_secrets" => &[data::CITY_SECRETS],
        "school_days" => &[data::SCHOOL_DAYS],
        "all" => &[data::FOREST_GUARDIAN, data::CITY_SECRETS, data::SCHOOL_DAYS],
        _ => return Err(JsError::new(&format!("Unknown preset: {preset}"))),
    };
    let mut registry = AssetRegistry::new();
    for src in sources {
        registry.merge(
            AssetRegistry::parse_ron(src)
                .map_err(|e| JsError::new(&format!("Manifest parse error: {e}")))?,
        );
    }
    Ok(registry)
}

// ---------------------------------------------------------------------------
// AssetDemo — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct AssetDemo {
    library: AssetLibrary,
    preset: String,
}

#[wasm_bindgen]
impl AssetDemo {
    /// Create a new demo instance for the given preset and seed.
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str, seed: u64) -> Result<AssetDemo, JsError> {
        let registry = preset_registry(preset)?;
        let library = AssetLibrary::builder()
            .seed(seed)
            .with_registry(registry)
            .build()
            .map_err(|e| JsError::new(&format!("Library build error: {e}")))?;
        Ok(AssetDemo {
            library,
            preset: preset.to_string(),
        })
    }

    /// Resolve a scene background as a PNG data URI. Returns `undefined`
    /// when the id is not in the registry.
    pub fn scene_background(&self, id: &str) -> Option<String> {
        self.library
            .scene_background(id)
            .map(|img| img.as_str().to_string())
    }

    /// Resolve a character sprite as a PNG data URI.
    pub fn character_sprite(&self, id: &str) -> Option<String> {
        self.library
            .character_sprite(id)
            .map(|img| img.as_str().to_string())
    }

    /// Resolve an interactive-element icon as a PNG data URI.
    pub fn interactive_element(&self, id: &str) -> Option<String> {
        self.library
            .interactive_element(id)
            .map(|img| img.as_str().to_string())
    }

    /// Enrich authored game-data JSON with generated assets. Returns the
    /// enriched JSON; the input string is left untouched.
    pub fn inject(&self, game_json: &str) -> Result<String, JsError> {
        let game: GameData = serde_json::from_str(game_json)
            .map_err(|e| JsError::new(&format!("Invalid game JSON: {e}")))?;
        let enriched = inject_assets(&self.library, &game);
        serde_json::to_string(&enriched)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Eagerly generate every asset in the preset.
    pub fn preload(&self) {
        self.library.preload_all();
    }

    /// Drop all cached images; subsequent lookups regenerate.
    pub fn clear_cache(&self) {
        self.library.clear_cache();
    }

    /// Return cache diagnostics as JSON: `{"total": n, "items": [...]}`.
    pub fn cache_stats(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.library.cache_stats())
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return a JSON description of the current preset's registry.
    pub fn catalog(&self) -> Result<String, JsError> {
        let registry = self.library.registry();

        let mut scenes: Vec<AssetInfo> = registry
            .scenes()
            .map(|(id, d)| AssetInfo {
                id: id.to_string(),
                kind: d.kind.clone(),
                name: d.name.clone(),
                width: d.width,
                height: d.height,
            })
            .collect();
        scenes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut characters: Vec<AssetInfo> = registry
            .characters()
            .map(|(id, d)| AssetInfo {
                id: id.to_string(),
                kind: d.kind.clone(),
                name: d.name.clone(),
                width: d.size,
                height: d.size,
            })
            .collect();
        characters.sort_by(|a, b| a.id.cmp(&b.id));

        let mut elements: Vec<AssetInfo> = registry
            .elements()
            .map(|(id, d)| AssetInfo {
                id: id.to_string(),
                kind: d.kind.clone(),
                name: d.name.clone(),
                width: d.size,
                height: d.size,
            })
            .collect();
        elements.sort_by(|a, b| a.id.cmp(&b.id));

        let info = CatalogInfo {
            preset: self.preset.clone(),
            scenes,
            characters,
            elements,
        };
        serde_json::to_string(&info)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return JSON array of available preset identifiers.
    pub fn available_presets() -> String {
        serde_json::to_string(&["forest_guardian", "city_secrets", "school_days", "all"])
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of scene kind tags.
    pub fn scene_kinds() -> String {
        let tags: Vec<&str> = scenes::SceneKind::ALL.iter().map(|k| k.tag()).collect();
        serde_json::to_string(&tags).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of character kind tags.
    pub fn character_kinds() -> String {
        let tags: Vec<&str> = characters::CharacterKind::ALL.iter().map(|k| k.tag()).collect();
        serde_json::to_string(&tags).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of interactive-element kind tags.
    pub fn element_kinds() -> String {
        let tags: Vec<&str> = elements::ElementKind::ALL.iter().map(|k| k.tag()).collect();
        serde_json::to_string(&tags).unwrap_or_else(|_| "[]".to_string())
    }

    /// Reset the library with a new seed (same preset). Cached images are
    /// discarded.
    pub fn reset(&mut self, seed: u64) -> Result<(), JsError> {
        let new_demo = AssetDemo::new(&self.preset.clone(), seed)?;
        self.library = new_demo.library;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_builds() {
        for preset in ["forest_guardian", "city_secrets", "school_days", "all"] {
            assert!(AssetDemo::new(preset, 7).is_ok(), "{preset}");
        }
        assert!(AssetDemo::new("space_opera", 7).is_err());
    }

    #[test]
    fn inject_round_trips_json() {
        let demo = AssetDemo::new("forest_guardian", 7).unwrap();
        let out = demo
            .inject(r#"{"title":"t","scenes":[{"id":"a"}],"characters":[{"id":"c"}]}"#)
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["title"], "t");
        assert!(v["scenes"][0]["backgroundImage"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }

    #[test]
    fn catalog_lists_the_preset_tables() {
        let demo = AssetDemo::new("city_secrets", 7).unwrap();
        let v: serde_json::Value = serde_json::from_str(&demo.catalog().unwrap()).unwrap();
        assert_eq!(v["preset"], "city_secrets");
        assert_eq!(v["scenes"].as_array().unwrap().len(), 4);
        assert_eq!(v["characters"].as_array().unwrap().len(), 4);
        assert_eq!(v["elements"].as_array().unwrap().len(), 3);
    }
}
