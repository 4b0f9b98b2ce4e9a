//! Stateless helper functions shared across applications.
//!
//! Most modules are a handful of free functions plus an extension trait that
//! exposes the same functions as methods. Pull every trait in at once with
//! [`prelude`].
//!
//! Optional dependencies sit behind Cargo features, all enabled by default:
//!
//! | Feature        | Module           | Crate              |
//! |----------------|------------------|--------------------|
//! | `url_encoding` | [`url_encoding`] | `percent-encoding` |
//! | `ende`         | [`ende`]         | `base64`           |
//! | `html`         | [`html`]         | `html-escape`      |
//! | `datetime`     | [`datetime`]     | `chrono`           |

pub mod error;
pub mod random;
pub mod validation;
pub mod sanitize;
pub mod size;
pub mod convert;
pub mod conditional;
pub mod collections;
pub mod fs;
pub mod ignore;
pub mod prelude;

#[cfg(feature = "url_encoding")]
pub mod url_encoding;

#[cfg(feature = "ende")]
pub mod ende;

#[cfg(feature = "html")]
pub mod html;

#[cfg(feature = "datetime")]
pub mod datetime;

pub use error::{HelperError, Result};
pub use random::{shuffle, shuffle_except, shuffle_except_with, shuffle_with, Randomize};
pub use size::SizeUnit;
pub use fs::PathType;

#[cfg(feature = "datetime")]
pub use datetime::DateTimeKind;
