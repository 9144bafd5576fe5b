pub mod error;
pub mod schemas;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use schemas::{PlanetSchema, UserSchema};
pub use structs::{NewPlanet, NewUser, Planet, User};
