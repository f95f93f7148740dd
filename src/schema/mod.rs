pub mod asset;
pub mod game;
