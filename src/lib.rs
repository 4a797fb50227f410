//! # Media Type
//!
//! A small value type for internet media types (aka. mime types) like
//! `text/plain` or `application/json; charset=utf-8`.
//!
//! ## Parsing
//!
//! ```
//! use media_type::MediaType;
//!
//! let mt: MediaType = "Text/HTML; charset=utf-8".parse().unwrap();
//! assert_eq!(mt.type_(), "text");
//! assert_eq!(mt.subtype(), "html");
//! assert_eq!(mt.to_string(), "text/html; charset=utf-8");
//! ```
//!
//! Type and subtype are lowercased, parameters are kept as they are. Parsing
//! is lenient, the only thing which is rejected is input without a
//! `type/subtype` pair:
//!
//! ```
//! use media_type::MediaType;
//!
//! assert!(MediaType::parse("html").is_err());
//! ```
//!
//! ## Comparing and matching
//!
//! Equality only looks at type and subtype, parameters are ignored.
//! `matches` additionally understands the `*` wildcard:
//!
//! ```
//! use media_type::{MediaType, JSON, STAR_STAR};
//!
//! assert_eq!(*JSON, MediaType::new("application", "json"));
//! assert!(STAR_STAR.matches(&JSON));
//! ```
//!
//! ## File extensions
//!
//! ```
//! use media_type::media_type_for_file_extension;
//!
//! let mt = media_type_for_file_extension("svg").unwrap();
//! assert_eq!(mt.to_string(), "image/svg+xml");
//! ```
//!
//! ## Features
//!
//! - `serde`: (de-)serializes `MediaType` as its string form

pub use self::constants::*;
pub use self::error::{ErrorKind, ParserError};
pub use self::extension::{media_type_for_file_extension, media_type_for_path};
pub use self::media_type::{MediaType, Params};

#[macro_use]
mod macros;
pub mod error;
pub mod names;
mod gen;
mod parse;
mod media_type;
mod constants;
mod extension;
