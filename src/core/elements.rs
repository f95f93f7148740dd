/// Interactive-element icon routines — one painter per symbolic item type.
///
/// Icons are composed on a fixed 32-pixel grid; larger canvases leave the
/// extra area transparent rather than scaling the motif. All element
/// routines are fully deterministic.

use std::f32::consts::TAU;

use crate::core::canvas::{Canvas, Color};

/// Reference edge length for element icons.
pub const REFERENCE_SIZE: u32 = 32;

/// The closed set of known element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    GlowingLeaf,
    BlueCrystal,
    ContractFragment,
    Letter,
    Pass,
    EvidenceFile,
    CherryPetal,
    Diary,
    Light,
}

impl ElementKind {
    pub const ALL: [ElementKind; 9] = [
        ElementKind::GlowingLeaf,
        ElementKind::BlueCrystal,
        ElementKind::ContractFragment,
        ElementKind::Letter,
        ElementKind::Pass,
        ElementKind::EvidenceFile,
        ElementKind::CherryPetal,
        ElementKind::Diary,
        ElementKind::Light,
    ];

    pub fn from_tag(tag: &str) -> Option<ElementKind> {
        Some(match tag {
            "glowing_leaf" => ElementKind::GlowingLeaf,
            "blue_crystal" => ElementKind::BlueCrystal,
            "contract_fragment" => ElementKind::ContractFragment,
            "letter" => ElementKind::Letter,
            "pass" => ElementKind::Pass,
            "evidence_file" => ElementKind::EvidenceFile,
            "cherry_petal" => ElementKind::CherryPetal,
            "diary" => ElementKind::Diary,
            "light" => ElementKind::Light,
            _ => return None,
        })
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::GlowingLeaf => "glowing_leaf",
            ElementKind::BlueCrystal => "blue_crystal",
            ElementKind::ContractFragment => "contract_fragment",
            ElementKind::Letter => "letter",
            ElementKind::Pass => "pass",
            ElementKind::EvidenceFile => "evidence_file",
            ElementKind::CherryPetal => "cherry_petal",
            ElementKind::Diary => "diary",
            ElementKind::Light => "light",
        }
    }
}

/// Render an element icon for the given symbolic type tag on a `size`×`size`
/// canvas. Unknown tags degrade to a plain gold square rather than failing.
pub fn render(tag: &str, size: u32) -> Canvas {
    let mut canvas = Canvas::new(size, size);

    match ElementKind::from_tag(tag) {
        Some(ElementKind::GlowingLeaf) => glowing_leaf(&mut canvas),
        Some(ElementKind::BlueCrystal) => blue_crystal(&mut canvas),
        Some(ElementKind::ContractFragment) => contract_fragment(&mut canvas),
        Some(ElementKind::Letter) => letter(&mut canvas),
        Some(ElementKind::Pass) => pass(&mut canvas),
        Some(ElementKind::EvidenceFile) => evidence_file(&mut canvas),
        Some(ElementKind::CherryPetal) => cherry_petal(&mut canvas),
        Some(ElementKind::Diary) => diary(&mut canvas),
        Some(ElementKind::Light) => light(&mut canvas),
        None => default_element(&mut canvas),
    }

    canvas
}

fn glowing_leaf(c: &mut Canvas) {
    c.fill_rect(8.0, 6.0, 16.0, 20.0, Color::rgb(0x22, 0x8B, 0x22));
    c.fill_rect(12.0, 10.0, 8.0, 8.0, Color::rgb(0x7F, 0xFF, 0xD4));
    c.fill_rect(14.0, 12.0, 4.0, 4.0, Color::rgb(0x00, 0xFF, 0xFF));
}

fn blue_crystal(c: &mut Canvas) {
    c.fill_polygon(
        &[(16.0, 4.0), (28.0, 12.0), (24.0, 28.0), (8.0, 24.0), (4.0, 12.0)],
        Color::rgb(0x87, 0xCE, 0xEB),
    );
    c.fill_rect(12.0, 12.0, 8.0, 8.0, Color::rgb(0x00, 0xBF, 0xFF));
}

fn contract_fragment(c: &mut Canvas) {
    c.fill_rect(6.0, 6.0, 20.0, 20.0, Color::rgb(0xFF, 0xD7, 0x00));
    c.fill_rect(8.0, 8.0, 16.0, 16.0, Color::rgb(0xFF, 0xA5, 0x00));
    let script = Color::rgb(0xFF, 0x63, 0x47);
    c.fill_rect(12.0, 10.0, 8.0, 2.0, script);
    c.fill_rect(12.0, 14.0, 8.0, 2.0, script);
    c.fill_rect(12.0, 18.0, 8.0, 2.0, script);
}

fn letter(c: &mut Canvas) {
    c.fill_rect(6.0, 8.0, 20.0, 16.0, Color::rgb(0xF5, 0xF5, 0xF5));
    let ink = Color::rgb(0x00, 0x00, 0x00);
    c.fill_rect(8.0, 10.0, 16.0, 2.0, ink);
    c.fill_rect(8.0, 14.0, 16.0, 2.0, ink);
    c.fill_rect(8.0, 18.0, 12.0, 2.0, ink);
}

fn pass(c: &mut Canvas) {
    c.fill_rect(4.0, 4.0, 24.0, 24.0, Color::rgb(0xDA, 0xA5, 0x20));
    c.fill_rect(6.0, 6.0, 20.0, 20.0, Color::rgb(0x00, 0x00, 0x00));
    c.fill_rect(10.0, 10.0, 12.0, 12.0, Color::rgb(0xFF, 0xD7, 0x00));
}

fn evidence_file(c: &mut Canvas) {
    c.fill_rect(6.0, 4.0, 20.0, 24.0, Color::rgb(0x8B, 0x00, 0x00));
    c.fill_rect(8.0, 6.0, 16.0, 8.0, Color::rgb(0xFF, 0xD7, 0x00));
    c.fill_rect(8.0, 16.0, 16.0, 2.0, Color::rgb(0xFF, 0xFF, 0xFF));
    c.fill_rect(8.0, 20.0, 16.0, 2.0, Color::rgb(0xFF, 0xFF, 0xFF));
}

fn cherry_petal(c: &mut Canvas) {
    c.fill_circle(16.0, 16.0, 4.0, Color::rgb(0xFF, 0x69, 0xB4));
    for i in 0..4 {
        let angle = i as f32 / 4.0 * TAU;
        let x = 16.0 + angle.cos() * 8.0;
        let y = 16.0 + angle.sin() * 8.0;
        c.fill_circle(x, y, 3.0, Color::rgb(0xFF, 0xB6, 0xC1));
    }
}

fn diary(c: &mut Canvas) {
    c.fill_rect(6.0, 6.0, 20.0, 20.0, Color::rgb(0x8B, 0x45, 0x13));
    c.fill_rect(8.0, 8.0, 16.0, 16.0, Color::rgb(0xD2, 0xB4, 0x8C));
    c.fill_rect(10.0, 10.0, 12.0, 12.0, Color::rgb(0x00, 0x00, 0x00));
}

fn light(c: &mut Canvas) {
    c.fill_circle(16.0, 16.0, 6.0, Color::rgb(0xFF, 0xFF, 0x00));
    c.fill_circle(16.0, 16.0, 4.0, Color::rgb(0xFF, 0xED, 0x4E));
    c.fill_circle(16.0, 16.0, 2.0, Color::rgb(0xFF, 0xFF, 0xFF));
}

/// Fallback for unknown element tags: a plain gold square.
fn default_element(c: &mut Canvas) {
    c.fill_rect(6.0, 6.0, 20.0, 20.0, Color::rgb(0xFF, 0xD7, 0x00));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tags_round_trip() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ElementKind::from_tag("sword"), None);
    }

    #[test]
    fn render_honors_size() {
        let c = render("blue_crystal", 32);
        assert_eq!(c.width(), 32);
        assert_eq!(c.height(), 32);
    }

    #[test]
    fn unknown_tag_falls_back_to_gold_square() {
        let c = render("sword", 32);
        assert_eq!(c.get(16, 16), Some(Color::rgb(0xFF, 0xD7, 0x00)));
        assert_eq!(c.get(2, 2), Some(Color::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn crystal_has_faceted_body_and_core() {
        let c = render("blue_crystal", 32);
        assert_eq!(c.get(16, 16), Some(Color::rgb(0x00, 0xBF, 0xFF)));
        assert_eq!(c.get(16, 8), Some(Color::rgb(0x87, 0xCE, 0xEB)));
        assert_eq!(c.get(0, 0), Some(Color::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn routines_are_deterministic() {
        for kind in ElementKind::ALL {
            let a = render(kind.tag(), 32);
            let b = render(kind.tag(), 32);
            assert_eq!(a.pixels(), b.pixels(), "{} not deterministic", kind.tag());
        }
    }

    #[test]
    fn larger_canvas_keeps_fixed_motif() {
        let c = render("light", 64);
        assert_eq!(c.get(16, 16), Some(Color::rgb(0xFF, 0xFF, 0xFF)));
        assert_eq!(c.get(48, 48), Some(Color::rgba(0, 0, 0, 0)));
    }
}
