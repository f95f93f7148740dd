/// Enchanted Forest demo — enriches an authored woodland-fantasy project.
///
/// Builds a library over the builtin registry, authors a small game with
/// three scenes, two characters, and a handful of interactive elements, then
/// injects generated assets and reports what was resolved.
///
/// Run with: cargo run --example enchanted_forest

use pixel_forge::core::inject::inject_assets;
use pixel_forge::core::library::AssetLibrary;
use pixel_forge::schema::game::GameData;

fn main() {
    env_logger::init();

    let library = AssetLibrary::builder()
        .seed(1993)
        .build()
        .expect("Failed to build asset library");

    // --- Author a small project the way a frontend editor would ---
    let game: GameData = serde_json::from_str(
        r#"{
            "title": "The Enchanted Forest",
            "scenes": [
                {
                    "id": "entrance",
                    "name": "Emerald Forest Entrance",
                    "interactiveElements": [
                        {"name": "Glowing Leaf", "x": 120, "y": 400},
                        {"name": "Blue Crystal", "x": 560, "y": 340}
                    ]
                },
                {
                    "id": "grassland",
                    "name": "Spirit Grassland",
                    "interactiveElements": [
                        {"name": "Contract Fragment", "x": 300, "y": 450}
                    ]
                },
                {
                    "id": "spring",
                    "name": "Sacred Spring",
                    "interactiveElements": []
                }
            ],
            "characters": [
                {"id": "moonshadow", "name": "Moonshadow"},
                {"id": "ember", "name": "Ember Fox"}
            ]
        }"#,
    )
    .expect("Failed to parse authored game data");

    println!("========================================");
    println!("   THE ENCHANTED FOREST");
    println!("   Asset Injection Report");
    println!("========================================");
    println!();

    let enriched = inject_assets(&library, &game);

    for (index, scene) in enriched.scenes.iter().enumerate() {
        let name = scene
            .name
            .as_deref()
            .unwrap_or("(unnamed)");
        println!("--- Scene {}: {} ---", index + 1, name);
        println!(
            "  background: {}",
            describe(scene.background_image.as_ref().map(|i| i.as_str())),
        );
        for element in &scene.interactive_elements {
            println!(
                "  element '{}': {}",
                element.name.as_deref().unwrap_or("?"),
                describe(element.sprite.as_ref().map(|i| i.as_str())),
            );
        }
        println!();
    }

    for character in &enriched.characters {
        println!(
            "character '{}': {}",
            character.name.as_deref().unwrap_or("?"),
            describe(character.sprite.as_ref().map(|i| i.as_str())),
        );
    }
    println!();

    let stats = library.cache_stats();
    println!("--- Cache ({} entries) ---", stats.total);
    for key in &stats.items {
        println!("  {}", key);
    }

    // A second pass over the same project costs no new generation.
    let _again = inject_assets(&library, &game);
    assert_eq!(library.cache_stats().total, stats.total);
    println!();
    println!("Second injection pass: {} entries (no regeneration)", stats.total);
}

fn describe(uri: Option<&str>) -> String {
    match uri {
        Some(uri) => format!("{} bytes, {}...", uri.len(), &uri[..32.min(uri.len())]),
        None => "(not resolved)".to_string(),
    }
}
