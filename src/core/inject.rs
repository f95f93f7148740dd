/// Game-data enrichment: attach resolved images to every scene, character,
/// and interactive element of an authored game.

use crate::core::library::AssetLibrary;
use crate::schema::game::GameData;

/// Return a copy of `game` with images attached. The input is never
/// mutated; callers keep their original untouched.
///
/// Scenes and characters are keyed by ordinal position — the first scene
/// resolves `scene_1`, the second `scene_2`, and so on, regardless of each
/// scene's own `id` field. Authored projects depend on this binding, so it
/// is preserved as-is; re-keying by declared id would re-bind generated
/// images to different scenes. Interactive elements are keyed by an id
/// derived from their display name (see [`derive_element_id`]).
///
/// Failed resolutions are written through as `None`; absent arrays are
/// skipped. No input shape makes this fail.
pub fn inject_assets(library: &AssetLibrary, game: &GameData) -> GameData {
    let mut enriched = game.clone();

    for (index, scene) in enriched.scenes.iter_mut().enumerate() {
        scene.background_image = library.scene_background(&format!("scene_{}", index + 1));

        for element in &mut scene.interactive_elements {
            let element_id = derive_element_id(element.name.as_deref());
            element.sprite = library.interactive_element(&element_id);
        }
    }

    for (index, character) in enriched.characters.iter_mut().enumerate() {
        character.sprite = library.character_sprite(&format!("char_{}", index + 1));
    }

    enriched
}

/// Derive an element registry id from a display name: lowercase, then every
/// character outside `[a-z0-9_]` becomes `_`. A missing or empty name maps
/// to the literal id `default`.
pub fn derive_element_id(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect(),
        _ => "default".to_string(),
    }
}
