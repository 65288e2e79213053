//! The built context: file I/O for one config file, with (de)serialization
//! delegated to the installed codec pair.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::codec::{DecodeFn, EncodeFn};
use crate::error::ConfileError;

/// Holds everything needed to access one config file: the resolved directory,
/// file name, and encode/decode pair.
///
/// Built by [`Builder::create`](crate::Builder::create) and immutable
/// afterward, so a single context can serve repeated reads and writes. All
/// I/O is synchronous and blocking, and no locking is performed — concurrent
/// access to the same path must be serialized by the caller.
pub struct Context<T> {
    directory: PathBuf,
    file_name: String,
    encode: Option<EncodeFn<T>>,
    decode: Option<DecodeFn<T>>,
}

impl<T> Context<T> {
    pub(crate) fn new(
        directory: PathBuf,
        file_name: String,
        encode: Option<EncodeFn<T>>,
        decode: Option<DecodeFn<T>>,
    ) -> Self {
        Self {
            directory,
            file_name,
            encode,
            decode,
        }
    }

    /// The directory the config file lives in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The config file's name within [`directory()`](Self::directory).
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The full path of the config file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Read the config file into the value behind `dest`.
    ///
    /// A file that does not exist yet is not an error: `dest` is left
    /// untouched and `Ok(())` is returned. Any other I/O failure, a missing
    /// decoder, or a decode failure is propagated. The file handle is
    /// released before decoding starts.
    pub fn read(&self, dest: &mut T) -> Result<(), ConfileError> {
        let path = self.path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => return Err(ConfileError::Io { path, source }),
        };
        let decode = self.decode.as_ref().ok_or(ConfileError::NoDecoder)?;
        decode(&bytes, dest).map_err(|source| ConfileError::Decode { path, source })
    }

    /// Encode `value` and persist it at [`path()`](Self::path), creating the
    /// directory (and any missing parents) first.
    ///
    /// The file is written create-or-truncate: afterward it contains exactly
    /// the newly encoded bytes, so a shorter write never leaves a stale tail
    /// behind a longer one. When the encoder is missing or fails, the file
    /// is not created or modified (the directory may already have been).
    pub fn write(&self, value: &T) -> Result<(), ConfileError> {
        fs::create_dir_all(&self.directory).map_err(|source| ConfileError::Io {
            path: self.directory.clone(),
            source,
        })?;
        let encode = self.encode.as_ref().ok_or(ConfileError::NoEncoder)?;
        let bytes = encode(value).map_err(|source| ConfileError::Encode { source })?;
        fs::write(self.path(), bytes).map_err(|source| ConfileError::Io {
            path: self.path(),
            source,
        })
    }
}
