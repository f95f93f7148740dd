/// Registry Linter — validates asset manifests before they ship.
///
/// Usage: registry_linter <manifest.ron | dir> [--builtin]
///
/// Reports unknown kind tags (which would silently fall back to the default
/// routine at runtime), dimensions that stray from the family references,
/// element display names whose derived lookup id does not round-trip to the
/// entry's own id (the injector would never find them), and ids duplicated
/// across manifest files.

use std::collections::HashSet;
use std::path::Path;
use std::process;

use pixel_forge::core::inject::derive_element_id;
use pixel_forge::core::registry::AssetRegistry;
use pixel_forge::core::{characters, elements, scenes};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: registry_linter <manifest.ron | dir> [--builtin]");
        process::exit(0);
    }

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let mut registry = AssetRegistry::new();
    let mut seen = SeenIds::default();

    if args[1] == "--builtin" {
        registry = AssetRegistry::builtin();
    } else {
        let path = Path::new(&args[1]);
        if path.is_file() {
            load_file(path, &mut registry, &mut seen, &mut errors);
        } else if path.is_dir() {
            let mut paths: Vec<_> = match std::fs::read_dir(path) {
                Ok(entries) => entries
                    .flatten()
                    .map(|e| e.path())
                    .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("ron"))
                    .collect(),
                Err(e) => {
                    eprintln!("ERROR: Failed to read directory '{}': {}", args[1], e);
                    process::exit(1);
                }
            };
            paths.sort();
            for p in paths {
                load_file(&p, &mut registry, &mut seen, &mut errors);
            }
        } else {
            eprintln!("ERROR: Path '{}' does not exist", args[1]);
            process::exit(1);
        }
    }

    println!(
        "Loaded {} entries ({} scenes, {} characters, {} elements)",
        registry.len(),
        registry.scene_ids().count(),
        registry.character_ids().count(),
        registry.element_ids().count()
    );

    lint_registry(&registry, &mut errors, &mut warnings);

    println!("\n=== Registry Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

#[derive(Default)]
struct SeenIds {
    scenes: HashSet<String>,
    characters: HashSet<String>,
    elements: HashSet<String>,
}

fn load_file(path: &Path, registry: &mut AssetRegistry, seen: &mut SeenIds, errors: &mut Vec<String>) {
    match AssetRegistry::load_from_ron(path) {
        Ok(loaded) => {
            println!("  Loaded: {}", path.display());
            for (id, _) in loaded.scenes() {
                if !seen.scenes.insert(id.to_string()) {
                    errors.push(format!(
                        "Scene id '{}' redefined by {}",
                        id,
                        path.display()
                    ));
                }
            }
            for (id, _) in loaded.characters() {
                if !seen.characters.insert(id.to_string()) {
                    errors.push(format!(
                        "Character id '{}' redefined by {}",
                        id,
                        path.display()
                    ));
                }
            }
            for (id, _) in loaded.elements() {
                if !seen.elements.insert(id.to_string()) {
                    errors.push(format!(
                        "Element id '{}' redefined by {}",
                        id,
                        path.display()
                    ));
                }
            }
            registry.merge(loaded);
        }
        Err(e) => {
            errors.push(format!("Failed to load {}: {}", path.display(), e));
        }
    }
}

fn lint_registry(registry: &AssetRegistry, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    for (id, desc) in registry.scenes() {
        if scenes::SceneKind::from_tag(&desc.kind).is_none() {
            warnings.push(format!(
                "Scene '{}' has unknown kind '{}' (will render the default background)",
                id, desc.kind
            ));
        }
        if (desc.width, desc.height) != (scenes::REFERENCE_WIDTH, scenes::REFERENCE_HEIGHT) {
            warnings.push(format!(
                "Scene '{}' is {}x{} (reference is {}x{})",
                id,
                desc.width,
                desc.height,
                scenes::REFERENCE_WIDTH,
                scenes::REFERENCE_HEIGHT
            ));
        }
    }

    for (id, desc) in registry.characters() {
        if characters::CharacterKind::from_tag(&desc.kind).is_none() {
            warnings.push(format!(
                "Character '{}' has unknown kind '{}' (will render the default humanoid)",
                id, desc.kind
            ));
        }
        if desc.size != characters::REFERENCE_SIZE {
            warnings.push(format!(
                "Character '{}' is {}px (reference is {}px)",
                id,
                desc.size,
                characters::REFERENCE_SIZE
            ));
        }
    }

    for (id, desc) in registry.elements() {
        if elements::ElementKind::from_tag(&desc.kind).is_none() {
            warnings.push(format!(
                "Element '{}' has unknown kind '{}' (will render the default square)",
                id, desc.kind
            ));
        }
        if desc.size != elements::REFERENCE_SIZE {
            warnings.push(format!(
                "Element '{}' is {}px (reference is {}px)",
                id,
                desc.size,
                elements::REFERENCE_SIZE
            ));
        }
        // The injector looks elements up by the id derived from their
        // display name; a name that does not round-trip is unreachable.
        let derived = derive_element_id(Some(desc.name.as_str()));
        if derived != id {
            errors.push(format!(
                "Element '{}' display name '{}' derives to '{}' — the injector will never resolve it",
                id, desc.name, derived
            ));
        }
    }
}
