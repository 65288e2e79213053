//! Read and write config files with pluggable encodings.
//!
//! Confile persists an arbitrary serializable value to a file in a
//! conventional location — the current directory, or a per-application
//! directory under the user's config root — and reads it back. A builder
//! assembles an immutable [`Context`]; the context performs the file I/O and
//! delegates the byte-level representation to an installed encode/decode
//! function pair.
//!
//! ```ignore
//! // A JSON file "config.json" in the current directory.
//! let cfg = Confile::builder::<MyConfig>().json().create();
//!
//! // A JSON file "$XDG_CONFIG_HOME/myapp/config.json".
//! let cfg = Confile::builder::<MyConfig>().app("myapp").json().create();
//!
//! let mut value = MyConfig::default();
//! cfg.write(&value)?;
//! cfg.read(&mut value)?;
//! ```
//!
//! # Codec boundary
//!
//! The core never interprets file bytes itself. [`json()`](Builder::json)
//! and [`toml()`](Builder::toml) install canonical pairs (JSON encoding uses
//! a fixed 4-space indentation), and any compatible pair can be substituted
//! through [`encoder()`](Builder::encoder) / [`decoder()`](Builder::decoder).
//! The two halves are independent: a context may carry only one of them, and
//! the operation that needs the missing half fails with [`ConfileError::NoEncoder`]
//! or [`ConfileError::NoDecoder`].
//!
//! # Defaults
//!
//! With nothing configured, [`create()`](Builder::create) resolves the
//! directory to `.` and the file name to `config`. A format convenience that
//! runs before any explicit file name supplies its own default
//! (`config.json`, `config.toml`).
//!
//! # Read and write policy
//!
//! A config file that does not exist yet is not an error: `read` returns
//! `Ok(())` and leaves the destination untouched. `write` creates the target
//! directory as needed and persists with create-or-truncate semantics, so
//! the file always contains exactly the last encoded payload. There is no
//! locking, no retry, and no atomic rename; callers needing safe concurrent
//! access serialize it themselves. The core performs no logging — failures
//! are surfaced to the caller as [`ConfileError`] values.

pub mod codec;
pub mod error;

mod base;
mod builder;
mod context;

#[cfg(test)]
mod fixtures;

pub use base::{BaseDir, CONFIG_HOME_VAR};
pub use builder::{Builder, Confile};
pub use codec::{CodecError, DecodeFn, EncodeFn};
pub use context::Context;
pub use error::ConfileError;
