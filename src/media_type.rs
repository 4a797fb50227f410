use std::collections::{hash_map, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::str::FromStr;

use crate::error::ParserError;
use crate::gen::{repr_len, write_media_type};
use crate::names::{CHARSET, STAR, UTF8, UTF_8};
use crate::parse::{parse, validate, ParseResult};


/// An internet media type, e.g. `text/html; charset=utf-8`.
///
/// Two media types are equal (and hash equal) if their type and subtype are
/// equal, parameters are ignored. So `application/json` and
/// `application/json; charset=utf-8` compare equal.
///
/// # Example
///
/// ```
/// use media_type::MediaType;
///
/// let mt = MediaType::parse("Text/HTML; charset=utf-8").unwrap();
/// assert_eq!(mt.type_(), "text");
/// assert_eq!(mt.subtype(), "html");
/// assert_eq!(mt.get_param("charset"), Some("utf-8"));
/// assert_eq!(mt, MediaType::new("text", "html"));
/// ```
#[derive(Clone, Debug)]
pub struct MediaType {
    type_: String,
    subtype: String,
    params: HashMap<String, String>,
}

impl MediaType {

    /// creates a media type without parameters
    ///
    /// The parts are stored as they are, i.e. they are neither validated
    /// nor lowercased.
    pub fn new<T, ST>(type_: T, subtype: ST) -> Self
        where T: Into<String>,
              ST: Into<String>
    {
        MediaType {
            type_: type_.into(),
            subtype: subtype.into(),
            params: HashMap::new(),
        }
    }

    /// creates a media type with the given parameters
    ///
    /// Like `new` nothing is validated or lowercased. If a parameter name
    /// appears multiple times the last value is kept.
    pub fn with_params<T, ST, PI, IN, IV>(type_: T, subtype: ST, params: PI) -> Self
        where T: Into<String>,
              ST: Into<String>,
              PI: IntoIterator<Item=(IN, IV)>,
              IN: Into<String>,
              IV: Into<String>
    {
        let params = params.into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();

        MediaType {
            type_: type_.into(),
            subtype: subtype.into(),
            params,
        }
    }

    /// parses a media type from a string like `text/plain; charset=utf-8`
    ///
    /// Type and subtype are lowercased, parameter names and values are kept
    /// as they are. Parameters are separated by single spaces after the first
    /// `;`, tokens which are not exactly `name=value` are skipped. Text after a
    /// second `;` is ignored.
    ///
    /// # Error
    ///
    /// Fails if the input is empty or has no `type/subtype` pair.
    ///
    /// ```
    /// use media_type::MediaType;
    ///
    /// assert!(MediaType::parse("text/plain").is_ok());
    /// assert!(MediaType::parse("plain").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParserError> {
        let parse_result: ParseResult = parse(input)?;
        Ok(MediaType::from_parse_result(parse_result))
    }

    /// returns true if `parse` would succeed for the input
    pub fn validate(input: &str) -> bool {
        validate(input)
    }

    pub fn type_(&self) -> &str {
        &self.type_
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// the parameter value for `name` (compared case sensitive)
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// iterates over all parameters, the order is unspecified
    pub fn params(&self) -> Params {
        Params {
            iter: self.params.iter()
        }
    }

    /// `type/subtype` without any parameters
    pub fn essence(&self) -> String {
        let mut out = String::with_capacity(repr_len(&self.type_, &self.subtype, iter::empty()));
        out.push_str(&self.type_);
        out.push('/');
        out.push_str(&self.subtype);
        out
    }

    /// true if either type or subtype is `*`
    pub fn is_wildcard(&self) -> bool {
        self.type_ == STAR || self.subtype == STAR
    }

    /// true if the `charset` parameter is `utf-8` or `utf8` (ignoring ascii case)
    pub fn has_utf8_charset(&self) -> bool {
        self.get_param(CHARSET)
            .map(|charset| charset.eq_ignore_ascii_case(UTF_8) || charset.eq_ignore_ascii_case(UTF8))
            .unwrap_or(false)
    }

    /// wildcard aware compatibility check, e.g. to compare an `Accept` entry
    /// with the type of a response
    ///
    /// - if either type is `*` it matches, no matter the subtypes
    /// - if the types are equal and either subtype is `*` it matches
    /// - else it matches if both type and subtype are equal
    ///
    /// This is symmetric but _not_ transitive, `*/*` matches both `text/plain`
    /// and `image/png` but they do not match each other.
    ///
    /// ```
    /// use media_type::MediaType;
    ///
    /// let any = MediaType::new("*", "*");
    /// let text = MediaType::new("text", "*");
    /// let html = MediaType::new("text", "html");
    /// assert!(any.matches(&html));
    /// assert!(html.matches(&text));
    /// assert!(!html.matches(&MediaType::new("text", "css")));
    /// ```
    pub fn matches(&self, other: &MediaType) -> bool {
        if self.type_ == STAR || other.type_ == STAR {
            return true;
        }

        if self.type_ == other.type_ {
            if self.subtype == STAR || other.subtype == STAR {
                return true;
            }
            return self.subtype == other.subtype;
        }

        false
    }
}

impl PartialEq for MediaType {
    // parameters are not part of the identity
    fn eq(&self, other: &MediaType) -> bool {
        self.type_ == other.type_ && self.subtype == other.subtype
    }
}

impl Eq for MediaType {}

impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_.hash(state);
        self.subtype.hash(state);
    }
}

impl fmt::Display for MediaType {

    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        write_media_type(fter, &self.type_, &self.subtype, self.params())
    }
}

impl FromStr for MediaType {
    type Err = ParserError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        MediaType::parse(input)
    }
}

impl<'a> TryFrom<&'a str> for MediaType {
    type Error = ParserError;

    fn try_from(input: &'a str) -> Result<Self, Self::Error> {
        MediaType::parse(input)
    }
}

impl MediaType {

    fn from_parse_result(pres: ParseResult) -> Self {
        // later duplicates overwrite earlier ones
        let params = pres.params.into_iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();

        MediaType {
            type_: pres.type_.to_lowercase(),
            subtype: pres.subtype.to_lowercase(),
            params,
        }
    }
}


#[derive(Clone)]
pub struct Params<'a> {
    iter: hash_map::Iter<'a, String, String>
}

impl<'a> Iterator for Params<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> ExactSizeIterator for Params<'a> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a> fmt::Debug for Params<'a> {

    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        let metoo = self.clone();
        fter.debug_list()
            .entries(metoo)
            .finish()
    }
}


#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};

    use super::MediaType;

    impl Serialize for MediaType {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where S: Serializer
        {
            serializer.collect_str(self)
        }
    }

    struct MediaTypeVisitor;

    impl<'de> Visitor<'de> for MediaTypeVisitor {
        type Value = MediaType;

        fn expecting(&self, fter: &mut fmt::Formatter) -> fmt::Result {
            fter.write_str("a media type string like \"text/plain\"")
        }

        fn visit_str<E>(self, value: &str) -> Result<MediaType, E>
            where E: de::Error
        {
            MediaType::parse(value).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for MediaType {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where D: Deserializer<'de>
        {
            deserializer.deserialize_str(MediaTypeVisitor)
        }
    }
}
