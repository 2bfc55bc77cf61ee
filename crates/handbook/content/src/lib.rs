//! Static handbook content and its loaders.
//!
//! This crate houses the data-driven parts of the handbook:
//! - Animal entries (data-driven via JSON or RON)
//! - Pelt entries with their trapper, fence and camp recipes
//! - The [`Catalog`] of distinct craftable items derived from the pelts
//!
//! Content is loaded once at startup and never changes afterwards. Collection
//! progress lives in `handbook-runtime`, keyed by the item names defined here.

pub mod catalog;
pub mod model;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Catalog, SearchEntry};
pub use model::{Animal, CampItem, FenceItem, Pelt, TrapperItem, image_name, thumbnail_name};

#[cfg(feature = "loaders")]
pub use loaders::{AnimalLoader, ContentFactory, LoadResult, PeltLoader};
