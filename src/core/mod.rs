pub mod canvas;
pub mod characters;
pub mod elements;
pub mod encode;
pub mod inject;
pub mod library;
pub mod motifs;
pub mod registry;
pub mod scenes;
