//! Common type, subtype and parameter names.
//!
//! They are plain `&str`s so they can be used in patterns:
//!
//! ```
//! use media_type::{names, MediaType};
//!
//! let mt = MediaType::parse("text/html").unwrap();
//! match (mt.type_(), mt.subtype()) {
//!     (names::TEXT, names::PLAIN) => println!("plain text!"),
//!     (names::TEXT, _) => println!("structured text"),
//!     _ => println!("not text"),
//! }
//! ```

/// the wildcard
pub const STAR: &str = "*";

// types
pub const APPLICATION: &str = "application";
pub const AUDIO: &str = "audio";
pub const IMAGE: &str = "image";
pub const MULTIPART: &str = "multipart";
pub const TEXT: &str = "text";
pub const VIDEO: &str = "video";

// subtypes
pub const FORM_DATA: &str = "form-data";
pub const HTML: &str = "html";
pub const JSON: &str = "json";
pub const OCTET_STREAM: &str = "octet-stream";
pub const PLAIN: &str = "plain";
pub const WWW_FORM_URLENCODED: &str = "x-www-form-urlencoded";
pub const XML: &str = "xml";

// params
pub const BOUNDARY: &str = "boundary";
pub const CHARSET: &str = "charset";

// values
pub const UTF_8: &str = "utf-8";
pub const UTF8: &str = "utf8";
