/// Game-data model — the nested structure the injector enriches.
///
/// Uses camelCase on the wire to match authored project JSON, and preserves
/// any fields this library does not understand through flattened maps, so an
/// inject round-trip never drops authored content.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::encode::EncodedImage;

/// An interactive element placed inside a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractiveElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resolved icon; explicitly null when resolution failed, so downstream
    /// consumers can tell "not injected" from "no asset".
    pub sprite: Option<EncodedImage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A scene in the authored game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scene {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub background_image: Option<EncodedImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interactive_elements: Vec<InteractiveElement>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A character in the authored game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub sprite: Option<EncodedImage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The top-level game-data structure. Absent scene/character arrays
/// deserialize as empty and are skipped by the injector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scenes: Vec<Scene>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub characters: Vec<Character>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{
            "title": "Forest Guardian",
            "scenes": [
                {
                    "id": "scene_9",
                    "name": "Entrance",
                    "interactiveElements": [{"name": "Glowing Leaf", "hint": "shimmer"}]
                }
            ],
            "characters": [{"id": "c1", "name": "Moonshadow"}]
        }"#;
        let game: GameData = serde_json::from_str(json).unwrap();
        assert_eq!(game.scenes.len(), 1);
        assert_eq!(game.scenes[0].id.as_deref(), Some("scene_9"));
        assert_eq!(game.scenes[0].interactive_elements.len(), 1);
        assert_eq!(
            game.scenes[0].interactive_elements[0].name.as_deref(),
            Some("Glowing Leaf")
        );
        // Unknown fields land in extra
        assert_eq!(game.extra["title"], "Forest Guardian");
        assert_eq!(
            game.scenes[0].interactive_elements[0].extra["hint"],
            "shimmer"
        );
    }

    #[test]
    fn absent_arrays_deserialize_empty() {
        let game: GameData = serde_json::from_str(r#"{"title": "bare"}"#).unwrap();
        assert!(game.scenes.is_empty());
        assert!(game.characters.is_empty());
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let json = r#"{"scenes":[{"id":"s1","mood":"calm"}],"chapter":3}"#;
        let game: GameData = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&game).unwrap();
        assert_eq!(back["chapter"], 3);
        assert_eq!(back["scenes"][0]["mood"], "calm");
    }

    #[test]
    fn null_sprite_serializes_explicitly() {
        let element = InteractiveElement {
            name: Some("Mystery".to_string()),
            sprite: None,
            extra: Map::new(),
        };
        let v = serde_json::to_value(&element).unwrap();
        assert!(v.get("sprite").is_some());
        assert!(v["sprite"].is_null());
    }
}
