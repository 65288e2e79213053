use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::base::BaseDir;
use crate::codec::{self, CodecError, DecodeFn, EncodeFn};
use crate::context::Context;

/// Entry point for building a config context.
pub struct Confile;

impl Confile {
    pub fn builder<T>() -> Builder<T> {
        Builder::new()
    }
}

/// Builder for a [`Context`].
///
/// Every configuration method takes and returns the builder, so calls chain;
/// for any one field the last call wins. The terminal [`create()`](Self::create)
/// consumes the builder and applies the final defaults (directory `.`, file
/// name `config`). None of the configuration methods can fail — no path
/// validation happens here.
pub struct Builder<T> {
    directory: Option<PathBuf>,
    file_name: Option<String>,
    encode: Option<EncodeFn<T>>,
    decode: Option<DecodeFn<T>>,
}

impl<T> Builder<T> {
    fn new() -> Self {
        Self {
            directory: None,
            file_name: None,
            encode: None,
            decode: None,
        }
    }

    /// Set the directory of the config file.
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    /// Set the name of the config file.
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Point the directory at the per-user config area for `app_name`,
    /// e.g. `$XDG_CONFIG_HOME/myapp`.
    ///
    /// Shorthand for [`app_in(app_name, BaseDir::Env)`](Self::app_in). Note
    /// the `Env` sharp edge: with the variable unset the directory resolves
    /// to `/myapp`.
    pub fn app(self, app_name: &str) -> Self {
        self.app_in(app_name, BaseDir::Env)
    }

    /// Like [`app()`](Self::app) with an explicit [`BaseDir`] instead of the
    /// environment default. The base is resolved here, once; the built
    /// context never re-reads the environment.
    ///
    /// If the base cannot be resolved (`Platform` with no home directory),
    /// the directory is left as it was.
    pub fn app_in(mut self, app_name: &str, base: BaseDir) -> Self {
        if let Some(dir) = base.resolve(app_name) {
            self.directory = Some(dir);
        }
        self
    }

    /// Install the encode half of the codec pair.
    ///
    /// Encode and decode are independent: a context built with only an
    /// encoder can [`write`](Context::write) but not [`read`](Context::read).
    pub fn encoder(
        mut self,
        encode: impl Fn(&T) -> Result<Vec<u8>, CodecError> + Send + Sync + 'static,
    ) -> Self {
        self.encode = Some(Box::new(encode));
        self
    }

    /// Install the decode half of the codec pair.
    pub fn decoder(
        mut self,
        decode: impl Fn(&[u8], &mut T) -> Result<(), CodecError> + Send + Sync + 'static,
    ) -> Self {
        self.decode = Some(Box::new(decode));
        self
    }

    /// Create the context, applying final defaults: directory `.` and file
    /// name `config` if still unset.
    pub fn create(self) -> Context<T> {
        Context::new(
            self.directory.unwrap_or_else(|| PathBuf::from(".")),
            self.file_name.unwrap_or_else(|| "config".to_string()),
            self.encode,
            self.decode,
        )
    }
}

impl<T: Serialize + DeserializeOwned + 'static> Builder<T> {
    /// Use the JSON format: defaults the file name to `config.json` (unless
    /// one was already set) and installs the canonical pair from
    /// [`codec`](crate::codec). Encoding pretty-prints with 4-space
    /// indentation.
    pub fn json(mut self) -> Self {
        self.file_name
            .get_or_insert_with(|| "config.json".to_string());
        self.encoder(codec::json_encode).decoder(codec::json_decode)
    }

    /// Use the TOML format: defaults the file name to `config.toml` (unless
    /// one was already set) and installs the canonical pair from
    /// [`codec`](crate::codec).
    #[cfg(feature = "toml")]
    pub fn toml(mut self) -> Self {
        self.file_name
            .get_or_insert_with(|| "config.toml".to_string());
        self.encoder(codec::toml_encode).decoder(codec::toml_decode)
    }
}
