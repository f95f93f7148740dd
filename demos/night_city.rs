/// Night City demo — direct lookups against the noir preset.
///
/// Where `enchanted_forest` goes through the injector, this demo drives the
/// library directly: resolve city scenes and characters by id, show that a
/// custom manifest can override a builtin entry, and dump cache diagnostics.
///
/// Run with: cargo run --example night_city

use pixel_forge::core::library::AssetLibrary;
use pixel_forge::core::registry::AssetRegistry;

fn main() {
    env_logger::init();

    let library = AssetLibrary::builder()
        .seed(2026)
        .build()
        .expect("Failed to build asset library");

    println!("========================================");
    println!("   NIGHT CITY");
    println!("   Direct Resolution Walkthrough");
    println!("========================================");
    println!();

    // --- Scenes: the noir investigation, in order ---
    let beats = [
        ("city_scene_1", "The reporter's office, late edition"),
        ("city_scene_2", "A dark street off the boulevard"),
        ("city_scene_3", "Underground parking, level B2"),
        ("city_scene_4", "The lab nobody talks about"),
    ];
    for (id, caption) in beats {
        match library.scene_background(id) {
            Some(img) => println!("[{}] {} ({} bytes)", id, caption, img.as_str().len()),
            None => println!("[{}] {} (UNRESOLVED)", id, caption),
        }
    }
    println!();

    // --- Cast ---
    for id in ["city_char_1", "city_char_2", "city_char_3", "city_char_4"] {
        let name = library
            .registry()
            .character(id)
            .map(|d| d.name.clone())
            .unwrap_or_default();
        match library.character_sprite(id) {
            Some(img) => println!("{} as '{}' ({} bytes)", id, name, img.as_str().len()),
            None => println!("{} (UNRESOLVED)", id),
        }
    }
    println!();

    // --- Props ---
    for id in ["mystery_letter", "pass_card", "evidence_file"] {
        match library.interactive_element(id) {
            Some(img) => println!("prop '{}' ({} bytes)", id, img.as_str().len()),
            None => println!("prop '{}' (UNRESOLVED)", id),
        }
    }
    println!();

    // An id outside the registry degrades quietly.
    assert!(library.scene_background("city_scene_9").is_none());
    println!("city_scene_9 is not in the registry; resolution returned nothing.");
    println!();

    // --- Override a builtin entry with an inline manifest ---
    let mut registry = AssetRegistry::builtin();
    registry.merge(
        AssetRegistry::parse_ron(
            r#"AssetManifest(
                scenes: {
                    "city_scene_2": SceneDescriptor(
                        kind: "moonlight_path",
                        name: "Moonlit Alley",
                        width: 800,
                        height: 600,
                    ),
                },
            )"#,
        )
        .expect("Failed to parse override manifest"),
    );
    let reskinned = AssetLibrary::builder()
        .seed(2026)
        .with_registry(registry)
        .build()
        .expect("Failed to build overridden library");

    let original = library.scene_background("city_scene_2").unwrap();
    let swapped = reskinned.scene_background("city_scene_2").unwrap();
    println!(
        "Override: city_scene_2 re-skinned as moonlight_path ({} -> {} bytes)",
        original.as_str().len(),
        swapped.as_str().len()
    );
    println!();

    let stats = library.cache_stats();
    println!("--- Cache ({} entries) ---", stats.total);
    for key in &stats.items {
        println!("  {}", key);
    }
}
