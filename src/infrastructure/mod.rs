//! Infrastructure layer: OS lookups behind a trait

pub mod traits;

pub use traits::{Environment, FixedEnvironment, SystemEnvironment};
