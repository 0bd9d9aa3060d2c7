pub mod path;
pub mod testing;

pub use path::{expand_tilde, normalize_path, resolve_path, resolve_path_with};
