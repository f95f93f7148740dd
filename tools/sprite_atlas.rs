/// Sprite Atlas — renders every asset in a registry to PNG files.
///
/// Usage: sprite_atlas --out <dir> [--registry <file.ron>] [--seed <n>]
use std::env;
use std::path::Path;
use std::process;

use pixel_forge::core::encode;
use pixel_forge::core::registry::AssetRegistry;
use pixel_forge::core::{characters, elements, scenes};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut out = None;
    let mut registry_path = None;
    let mut seed = 0u64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                i += 1;
                out = Some(args[i].clone());
            }
            "--registry" => {
                i += 1;
                registry_path = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                seed = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be an unsigned integer");
                    process::exit(1);
                });
            }
            "--help" | "-h" => {
                println!("Usage: sprite_atlas --out <dir> [--registry <file.ron>] [--seed <n>]");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let out_dir = out.unwrap_or_else(|| {
        eprintln!("Error: --out is required");
        eprintln!("Usage: sprite_atlas --out <dir> [--registry <file.ron>] [--seed <n>]");
        process::exit(1);
    });

    let registry = match registry_path {
        Some(ref path) => match AssetRegistry::load_from_ron(Path::new(path)) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("ERROR: Failed to load registry '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => AssetRegistry::builtin(),
    };

    if let Err(e) = std::fs::create_dir_all(&out_dir) {
        eprintln!("ERROR: Failed to create output directory '{}': {}", out_dir, e);
        process::exit(1);
    }

    let mut written = 0usize;

    for (id, desc) in registry.scenes() {
        let mut rng = StdRng::seed_from_u64(seed);
        let canvas = scenes::render(&desc.kind, desc.width, desc.height, &mut rng);
        write_png(&out_dir, &format!("scene_{}.png", id), &canvas, &mut written);
    }

    for (id, desc) in registry.characters() {
        let canvas = characters::render(&desc.kind, desc.size);
        write_png(&out_dir, &format!("char_{}.png", id), &canvas, &mut written);
    }

    for (id, desc) in registry.elements() {
        let canvas = elements::render(&desc.kind, desc.size);
        write_png(&out_dir, &format!("element_{}.png", id), &canvas, &mut written);
    }

    println!(
        "Wrote {} PNG files to {} ({} scenes, {} characters, {} elements)",
        written,
        out_dir,
        registry.scene_ids().count(),
        registry.character_ids().count(),
        registry.element_ids().count()
    );
}

fn write_png(dir: &str, file_name: &str, canvas: &pixel_forge::core::canvas::Canvas, written: &mut usize) {
    let bytes = match encode::to_png_bytes(canvas) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("ERROR: Failed to encode {}: {}", file_name, e);
            return;
        }
    };
    let path = Path::new(dir).join(file_name);
    match std::fs::write(&path, bytes) {
        Ok(()) => {
            println!("  {}", path.display());
            *written += 1;
        }
        Err(e) => eprintln!("ERROR: Failed to write {}: {}", path.display(), e),
    }
}
