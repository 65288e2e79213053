//! Resolution of the per-application config directory.
//!
//! The original shape of this convenience is "store config under
//! `$XDG_CONFIG_HOME/{app}`". [`BaseDir`] makes the base an explicit,
//! overridable option instead of a hidden environment read: the builder
//! resolves it once, when [`app_in()`](crate::Builder::app_in) runs, and the
//! built context never consults the environment again.

use std::path::PathBuf;

/// Environment variable consulted by [`BaseDir::Env`].
pub const CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Where the per-application config directory lives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BaseDir {
    /// The `XDG_CONFIG_HOME` environment variable, read when the builder
    /// method runs. Unset resolves to the empty string, so the directory
    /// degenerates to `/{app}` — kept caller-visible rather than silently
    /// corrected.
    #[default]
    Env,
    /// Platform config directory (XDG on Linux, ~/Library/Application Support on macOS).
    Platform,
    /// An explicit base directory.
    Path(PathBuf),
}

impl BaseDir {
    /// Resolve `<base>/<app_name>`.
    ///
    /// Returns `None` when the base cannot be determined (`Platform` with no
    /// home directory); the builder then leaves the directory as it was.
    pub(crate) fn resolve(&self, app_name: &str) -> Option<PathBuf> {
        match self {
            BaseDir::Env => {
                let base = std::env::var(CONFIG_HOME_VAR).unwrap_or_default();
                Some(env_join(&base, app_name))
            }
            BaseDir::Platform => {
                let proj = directories::ProjectDirs::from("", "", app_name)?;
                Some(proj.config_dir().to_path_buf())
            }
            BaseDir::Path(base) => Some(base.join(app_name)),
        }
    }
}

/// Join an environment-supplied base and app name by plain `/` concatenation,
/// preserving the leading slash (`"/{app}"`) when the base is empty.
fn env_join(base: &str, app_name: &str) -> PathBuf {
    PathBuf::from(format!("{base}/{app_name}"))
}
