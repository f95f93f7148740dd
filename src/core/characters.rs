/// Character sprite routines — one painter per symbolic archetype.
///
/// Each routine lays its figure out on a 64-unit design grid and scales by
/// `size / 64`, so any square size renders the same proportions. All
/// character routines are fully deterministic.

use std::f32::consts::TAU;

use crate::core::canvas::{Canvas, Color};

/// Reference edge length for character sprites.
pub const REFERENCE_SIZE: u32 = 64;

const SKIN: Color = Color::rgb(0xFF, 0xD4, 0xA3);
const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

/// The closed set of known character archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterKind {
    ElfFemale,
    DwarfMale,
    FoxSpirit,
    RavenWise,
    YoungReporter,
    MysteriousWoman,
    OldWorker,
    MadDoctor,
    SchoolGirl,
    ShortHairFriend,
    SchoolPrincipal,
    TimeGuardian,
}

impl CharacterKind {
    pub const ALL: [CharacterKind; 12] = [
        CharacterKind::ElfFemale,
        CharacterKind::DwarfMale,
        CharacterKind::FoxSpirit,
        CharacterKind::RavenWise,
        CharacterKind::YoungReporter,
        CharacterKind::MysteriousWoman,
        CharacterKind::OldWorker,
        CharacterKind::MadDoctor,
        CharacterKind::SchoolGirl,
        CharacterKind::ShortHairFriend,
        CharacterKind::SchoolPrincipal,
        CharacterKind::TimeGuardian,
    ];

    pub fn from_tag(tag: &str) -> Option<CharacterKind> {
        Some(match tag {
            "elf_female" => CharacterKind::ElfFemale,
            "dwarf_male" => CharacterKind::DwarfMale,
            "fox_spirit" => CharacterKind::FoxSpirit,
            "raven_wise" => CharacterKind::RavenWise,
            "young_reporter" => CharacterKind::YoungReporter,
            "mysterious_woman" => CharacterKind::MysteriousWoman,
            "old_worker" => CharacterKind::OldWorker,
            "mad_doctor" => CharacterKind::MadDoctor,
            "school_girl" => CharacterKind::SchoolGirl,
            "short_hair_friend" => CharacterKind::ShortHairFriend,
            "school_principal" => CharacterKind::SchoolPrincipal,
            "time_guardian" => CharacterKind::TimeGuardian,
            _ => return None,
        })
    }

    pub fn tag(&self) -> &'static str {
        match self {
            CharacterKind::ElfFemale => "elf_female",
            CharacterKind::DwarfMale => "dwarf_male",
            CharacterKind::FoxSpirit => "fox_spirit",
            CharacterKind::RavenWise => "raven_wise",
            CharacterKind::YoungReporter => "young_reporter",
            CharacterKind::MysteriousWoman => "mysterious_woman",
            CharacterKind::OldWorker => "old_worker",
            CharacterKind::MadDoctor => "mad_doctor",
            CharacterKind::SchoolGirl => "school_girl",
            CharacterKind::ShortHairFriend => "short_hair_friend",
            CharacterKind::SchoolPrincipal => "school_principal",
            CharacterKind::TimeGuardian => "time_guardian",
        }
    }
}

/// Render a character sprite for the given symbolic type tag on a
/// `size`×`size` canvas. Unknown tags degrade to a plain two-rectangle
/// humanoid rather than failing.
pub fn render(tag: &str, size: u32) -> Canvas {
    let mut canvas = Canvas::new(size, size);
    let s = canvas.width() as f32 / REFERENCE_SIZE as f32;

    match CharacterKind::from_tag(tag) {
        Some(CharacterKind::ElfFemale) => elf_female(&mut canvas, s),
        Some(CharacterKind::DwarfMale) => dwarf_male(&mut canvas, s),
        Some(CharacterKind::FoxSpirit) => fox_spirit(&mut canvas, s),
        Some(CharacterKind::RavenWise) => raven_wise(&mut canvas, s),
        Some(CharacterKind::YoungReporter) => young_reporter(&mut canvas, s),
        Some(CharacterKind::MysteriousWoman) => mysterious_woman(&mut canvas, s),
        Some(CharacterKind::OldWorker) => old_worker(&mut canvas, s),
        Some(CharacterKind::MadDoctor) => mad_doctor(&mut canvas, s),
        Some(CharacterKind::SchoolGirl) => school_girl(&mut canvas, s),
        Some(CharacterKind::ShortHairFriend) => short_hair_friend(&mut canvas, s),
        Some(CharacterKind::SchoolPrincipal) => school_principal(&mut canvas, s),
        Some(CharacterKind::TimeGuardian) => time_guardian(&mut canvas, s),
        None => default_character(&mut canvas, s),
    }

    canvas
}

/// Silver-haired elf in lavender robes.
fn elf_female(c: &mut Canvas, s: f32) {
    c.fill_rect(18.0 * s, 8.0 * s, 28.0 * s, 28.0 * s, SKIN);
    c.fill_rect(16.0 * s, 6.0 * s, 32.0 * s, 8.0 * s, Color::rgb(0xC0, 0xC0, 0xC0));
    c.fill_rect(24.0 * s, 18.0 * s, 4.0 * s, 4.0 * s, BLACK);
    c.fill_rect(36.0 * s, 18.0 * s, 4.0 * s, 4.0 * s, BLACK);
    c.fill_rect(20.0 * s, 36.0 * s, 24.0 * s, 20.0 * s, Color::rgb(0xE6, 0xD4, 0xB8));
    c.fill_rect(18.0 * s, 38.0 * s, 28.0 * s, 16.0 * s, Color::rgb(0x8B, 0x7B, 0xA8));
    c.fill_rect(22.0 * s, 54.0 * s, 8.0 * s, 10.0 * s, SKIN);
    c.fill_rect(34.0 * s, 54.0 * s, 8.0 * s, 10.0 * s, SKIN);
}

/// Stocky bearded dwarf, short legs.
fn dwarf_male(c: &mut Canvas, s: f32) {
    c.fill_rect(20.0 * s, 12.0 * s, 24.0 * s, 20.0 * s, SKIN);
    c.fill_rect(18.0 * s, 28.0 * s, 28.0 * s, 6.0 * s, Color::rgb(0x8B, 0x73, 0x55));
    c.fill_rect(18.0 * s, 32.0 * s, 28.0 * s, 24.0 * s, Color::rgb(0x65, 0x43, 0x21));
    c.fill_rect(22.0 * s, 54.0 * s, 8.0 * s, 8.0 * s, Color::rgb(0x8B, 0x45, 0x13));
    c.fill_rect(34.0 * s, 54.0 * s, 8.0 * s, 8.0 * s, Color::rgb(0x8B, 0x45, 0x13));
}

/// Round-bodied fox with a bushy tail and upright ears.
fn fox_spirit(c: &mut Canvas, s: f32) {
    let orange = Color::rgb(0xFF, 0x8C, 0x00);
    c.fill_circle(32.0 * s, 40.0 * s, 18.0 * s, orange);
    c.fill_circle(48.0 * s, 38.0 * s, 12.0 * s, Color::rgb(0xFF, 0xB3, 0x47));
    c.fill_circle(32.0 * s, 24.0 * s, 14.0 * s, orange);
    c.fill_rect(20.0 * s, 8.0 * s, 8.0 * s, 12.0 * s, Color::rgb(0xFF, 0x63, 0x47));
    c.fill_rect(44.0 * s, 8.0 * s, 8.0 * s, 12.0 * s, Color::rgb(0xFF, 0x63, 0x47));
    c.fill_rect(28.0 * s, 22.0 * s, 4.0 * s, 4.0 * s, BLACK);
    c.fill_rect(36.0 * s, 22.0 * s, 4.0 * s, 4.0 * s, BLACK);
}

/// Dark raven with glowing eyes and folded wings.
fn raven_wise(c: &mut Canvas, s: f32) {
    let feathers = Color::rgb(0x2C, 0x3E, 0x50);
    c.fill_circle(32.0 * s, 40.0 * s, 16.0 * s, feathers);
    c.fill_circle(32.0 * s, 20.0 * s, 12.0 * s, feathers);
    c.fill_circle(28.0 * s, 18.0 * s, 3.0 * s, Color::rgb(0xFF, 0xFF, 0x00));
    c.fill_circle(36.0 * s, 18.0 * s, 3.0 * s, Color::rgb(0xFF, 0xFF, 0x00));
    c.fill_rect(30.0 * s, 24.0 * s, 4.0 * s, 6.0 * s, Color::rgb(0xFF, 0xD7, 0x00));
    c.fill_rect(16.0 * s, 38.0 * s, 8.0 * s, 12.0 * s, Color::rgb(0x1A, 0x1A, 0x1A));
    c.fill_rect(40.0 * s, 38.0 * s, 8.0 * s, 12.0 * s, Color::rgb(0x1A, 0x1A, 0x1A));
}

/// Long-haired reporter in a leather jacket.
fn young_reporter(c: &mut Canvas, s: f32) {
    c.fill_rect(20.0 * s, 10.0 * s, 24.0 * s, 22.0 * s, SKIN);
    c.fill_rect(16.0 * s, 8.0 * s, 32.0 * s, 16.0 * s, Color::rgb(0x2C, 0x2C, 0x54));
    c.fill_rect(16.0 * s, 32.0 * s, 32.0 * s, 24.0 * s, Color::rgb(0x65, 0x43, 0x21));
    c.fill_rect(20.0 * s, 54.0 * s, 8.0 * s, 10.0 * s, Color::rgb(0x2C, 0x2C, 0x54));
    c.fill_rect(36.0 * s, 54.0 * s, 8.0 * s, 10.0 * s, Color::rgb(0x2C, 0x2C, 0x54));
}

/// Figure in dark glasses and a deep-red outfit.
fn mysterious_woman(c: &mut Canvas, s: f32) {
    c.fill_rect(20.0 * s, 10.0 * s, 24.0 * s, 22.0 * s, SKIN);
    c.fill_rect(22.0 * s, 16.0 * s, 6.0 * s, 6.0 * s, BLACK);
    c.fill_rect(36.0 * s, 16.0 * s, 6.0 * s, 6.0 * s, BLACK);
    c.fill_rect(18.0 * s, 32.0 * s, 28.0 * s, 28.0 * s, Color::rgb(0x8B, 0x00, 0x00));
}

/// Grey-bearded worker in brown overalls.
fn old_worker(c: &mut Canvas, s: f32) {
    c.fill_rect(20.0 * s, 12.0 * s, 24.0 * s, 20.0 * s, SKIN);
    c.fill_rect(18.0 * s, 28.0 * s, 28.0 * s, 6.0 * s, Color::rgb(0xA9, 0xA9, 0xA9));
    c.fill_rect(16.0 * s, 34.0 * s, 32.0 * s, 28.0 * s, Color::rgb(0x8B, 0x45, 0x13));
}

/// Pale, white-haired doctor with cold blue eyes and a lab coat.
fn mad_doctor(c: &mut Canvas, s: f32) {
    c.fill_rect(20.0 * s, 10.0 * s, 24.0 * s, 24.0 * s, Color::rgb(0xF5, 0xF5, 0xF5));
    c.fill_rect(16.0 * s, 6.0 * s, 32.0 * s, 10.0 * s, Color::rgb(0xFF, 0xFF, 0xFF));
    c.fill_rect(24.0 * s, 18.0 * s, 5.0 * s, 5.0 * s, Color::rgb(0x00, 0x00, 0xFF));
    c.fill_rect(36.0 * s, 18.0 * s, 5.0 * s, 5.0 * s, Color::rgb(0x00, 0x00, 0xFF));
    c.fill_rect(14.0 * s, 34.0 * s, 36.0 * s, 28.0 * s, Color::rgb(0xFF, 0xFF, 0xFF));
}

/// Student in a blue uniform top and pink skirt.
fn school_girl(c: &mut Canvas, s: f32) {
    c.fill_rect(20.0 * s, 10.0 * s, 24.0 * s, 22.0 * s, SKIN);
    c.fill_rect(16.0 * s, 8.0 * s, 32.0 * s, 18.0 * s, Color::rgb(0x8B, 0x45, 0x13));
    c.fill_rect(18.0 * s, 32.0 * s, 28.0 * s, 20.0 * s, Color::rgb(0x41, 0x69, 0xE1));
    c.fill_rect(16.0 * s, 52.0 * s, 32.0 * s, 12.0 * s, Color::rgb(0xFF, 0x14, 0x93));
}

/// Crop-haired friend in a turquoise tracksuit.
fn short_hair_friend(c: &mut Canvas, s: f32) {
    c.fill_rect(22.0 * s, 10.0 * s, 20.0 * s, 20.0 * s, SKIN);
    c.fill_rect(18.0 * s, 8.0 * s, 28.0 * s, 12.0 * s, Color::rgb(0xDC, 0x14, 0x3C));
    c.fill_rect(18.0 * s, 32.0 * s, 28.0 * s, 24.0 * s, Color::rgb(0x00, 0xCE, 0xD1));
}

/// Robed principal with gold-lit eyes.
fn school_principal(c: &mut Canvas, s: f32) {
    c.fill_rect(20.0 * s, 12.0 * s, 24.0 * s, 20.0 * s, SKIN);
    c.fill_rect(14.0 * s, 34.0 * s, 36.0 * s, 28.0 * s, Color::rgb(0x1A, 0x1A, 0x2E));
    c.fill_circle(28.0 * s, 18.0 * s, 2.0 * s, Color::rgb(0xFF, 0xD7, 0x00));
    c.fill_circle(36.0 * s, 18.0 * s, 2.0 * s, Color::rgb(0xFF, 0xD7, 0x00));
}

/// Translucent violet orb ringed by twelve cyan sparks.
fn time_guardian(c: &mut Canvas, s: f32) {
    c.fill_circle(32.0 * s, 32.0 * s, 20.0 * s, Color::rgba(0x8A, 0x2B, 0xE2, 128));
    for i in 0..12 {
        let angle = i as f32 / 12.0 * TAU;
        let x = 32.0 * s + angle.cos() * 24.0 * s;
        let y = 32.0 * s + angle.sin() * 24.0 * s;
        c.fill_rect(x, y, 3.0 * s, 3.0 * s, Color::rgb(0x00, 0xFF, 0xFF));
    }
}

/// Fallback for unknown archetype tags: head block over a torso block.
fn default_character(c: &mut Canvas, s: f32) {
    c.fill_rect(16.0 * s, 10.0 * s, 32.0 * s, 30.0 * s, SKIN);
    c.fill_rect(18.0 * s, 40.0 * s, 28.0 * s, 24.0 * s, Color::rgb(0x8B, 0x45, 0x13));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tags_round_trip() {
        for kind in CharacterKind::ALL {
            assert_eq!(CharacterKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(CharacterKind::from_tag("paladin"), None);
    }

    #[test]
    fn render_honors_size() {
        let c = render("elf_female", 64);
        assert_eq!(c.width(), 64);
        assert_eq!(c.height(), 64);
    }

    #[test]
    fn unknown_tag_falls_back_to_humanoid() {
        let c = render("paladin", 64);
        // Head block
        assert_eq!(c.get(32, 20), Some(SKIN));
        // Torso block
        assert_eq!(c.get(32, 50), Some(Color::rgb(0x8B, 0x45, 0x13)));
    }

    #[test]
    fn routines_are_deterministic() {
        for kind in CharacterKind::ALL {
            let a = render(kind.tag(), 64);
            let b = render(kind.tag(), 64);
            assert_eq!(a.pixels(), b.pixels(), "{} not deterministic", kind.tag());
        }
    }

    #[test]
    fn scaling_preserves_proportions() {
        // The elf's hair band spans x 16..48 at y 7 on the 64 grid; doubled
        // it lands at (64, 14).
        let c = render("elf_female", 128);
        assert_eq!(c.get(64, 14), Some(Color::rgb(0xC0, 0xC0, 0xC0)));
    }

    #[test]
    fn every_kind_paints_something() {
        for kind in CharacterKind::ALL {
            let c = render(kind.tag(), 64);
            let painted = c.pixels().chunks(4).any(|p| p[3] != 0);
            assert!(painted, "{} painted nothing", kind.tag());
        }
    }
}
