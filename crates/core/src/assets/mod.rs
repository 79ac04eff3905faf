//! Assets module - the static registry of configured holdings.

mod assets_constants;
mod assets_model;
mod assets_registry;


// Re-export the public interface
pub use assets_constants::*;
pub use assets_model::AssetConfig;
pub use assets_registry::AssetRegistry;
