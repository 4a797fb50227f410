use std::sync::LazyLock;

use crate::media_type::MediaType;
use crate::names;

macro_rules! media_types {
    ($($(#[$attr:meta])* $name:ident = $type_:expr, $subtype:expr $(, $pn:expr => $pv:expr)*;)*) => ($(
        $(#[$attr])*
        pub static $name: LazyLock<MediaType> = LazyLock::new(|| {
            let params: &[(&str, &str)] = &[$(($pn, $pv)),*];
            MediaType::with_params($type_, $subtype, params.iter().copied())
        });
    )*);
}

media_types! {
    /// `application/json; charset=utf-8`
    JSON = names::APPLICATION, names::JSON, names::CHARSET => names::UTF_8;
    /// `application/xml; charset=utf-8`
    XML = names::APPLICATION, names::XML, names::CHARSET => names::UTF_8;
    /// `application/x-www-form-urlencoded`
    URL_ENCODED_FORM = names::APPLICATION, names::WWW_FORM_URLENCODED;
    /// `multipart/form-data`
    MULTIPART_FORM = names::MULTIPART, names::FORM_DATA;
    /// `*/*`
    STAR_STAR = names::STAR, names::STAR;
    /// `text/plain`
    TEXT_PLAIN = names::TEXT, names::PLAIN;
    /// `text/html`
    TEXT_HTML = names::TEXT, names::HTML;
    /// `application/octet-stream`
    OCTET_STREAM = names::APPLICATION, names::OCTET_STREAM;
}
