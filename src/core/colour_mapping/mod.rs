//! Escape-time colour maps, selectable by [`kinds::ColourMapKinds`].

pub mod factory;
pub mod kinds;
pub mod map;
pub mod maps;
