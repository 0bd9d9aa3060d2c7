use std::ffi::OsStr;
use std::path::{is_separator, Component, Path, PathBuf};

use tracing::{debug, instrument, trace};

use crate::errors::{StatusError, StatusResult};
use crate::infrastructure::{Environment, SystemEnvironment};

/// Resolve `path` against the real process environment.
pub fn resolve_path(path: impl AsRef<OsStr>) -> StatusResult<PathBuf> {
    resolve_path_with(path, &SystemEnvironment)
}

/// Turn a raw path into a clean absolute path.
///
/// A leading `~` is replaced by the home directory of `env`. Anything still
/// relative afterwards is joined onto the working directory of `env`. The
/// result is normalized lexically; the target is never touched, so it does
/// not have to exist. The input is handled as an `OsStr`, so non-UTF-8
/// names come back byte for byte.
///
/// # Errors
///
/// * `InvalidArgument` if `path` is empty or the working directory cannot be read.
/// * `Io` if `path` starts with `~` and the home directory cannot be determined.
pub fn resolve_path_with(path: impl AsRef<OsStr>, env: &impl Environment) -> StatusResult<PathBuf> {
    resolve_os(path.as_ref(), env)
}

#[instrument(level = "debug", skip(env))]
fn resolve_os(path: &OsStr, env: &impl Environment) -> StatusResult<PathBuf> {
    if path.is_empty() {
        return Err(StatusError::invalid_argument("path cannot be empty"));
    }

    let expanded = if path.as_encoded_bytes().first() == Some(&b'~') {
        expand_tilde(path, env)?
    } else {
        PathBuf::from(path)
    };
    trace!("expanded: {:?}", expanded);

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env.current_dir().map_err(|e| {
            StatusError::invalid_argument(format!("failed to resolve absolute path: {}", e))
        })?;
        cwd.join(expanded)
    };

    let resolved = normalize_path(&absolute);
    debug!("resolved: {:?}", resolved);
    Ok(resolved)
}

/// Replace the leading `~` of `path` with the home directory.
///
/// `~` gives the home itself, `~/` the home with a trailing separator.
/// Everything else after the `~` (`/docs`, `name`) is a literal join under
/// the current user's home; no other account is looked up, and a separator
/// right after the `~` never turns the join into a replacement.
pub fn expand_tilde(path: impl AsRef<OsStr>, env: &impl Environment) -> StatusResult<PathBuf> {
    let path = path.as_ref();
    let bytes = path.as_encoded_bytes();
    if bytes.first() != Some(&b'~') {
        return Ok(PathBuf::from(path));
    }
    let home = env.home_dir().ok_or_else(|| {
        StatusError::io("failed to get home directory: no home directory found for the current user")
    })?;

    let mut rest = &bytes[1..];
    if rest.is_empty() {
        return Ok(home);
    }
    while let Some((&b, tail)) = rest.split_first() {
        if !b.is_ascii() || !is_separator(b as char) {
            break;
        }
        rest = tail;
    }
    // SAFETY: `rest` is `path` minus a prefix of ASCII bytes (`~` and
    // separators); splitting encoded bytes right after ASCII is valid.
    let rest = unsafe { OsStr::from_encoded_bytes_unchecked(rest) };
    Ok(home.join(rest))
}

/// Lexically clean a path: drop `.` and repeated separators, fold `..` into
/// the previous normal segment. `..` at the root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir | Component::Normal(_) => {
                components.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.into_iter().collect()
}
