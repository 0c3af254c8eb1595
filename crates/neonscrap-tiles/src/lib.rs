//! Tile kinds, their lookup tables, inventories and crafting recipes.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod color;
pub mod inventory;
pub mod kind;
pub mod recipes;

pub use catalog::TileInfo;
pub use color::Rgba;
pub use inventory::Inventory;
pub use kind::TileKind;
pub use recipes::{Recipe, STANDARD_RECIPES, WORKBENCH_RECIPES};
