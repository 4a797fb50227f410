use std::collections::{HashMap, HashSet};

use media_type::{
    media_type_for_file_extension, names, ErrorKind, MediaType,
    JSON, MULTIPART_FORM, STAR_STAR, URL_ENCODED_FORM, XML,
};

#[test]
fn see_if_everything_needed_is_exposed() {
    let mt: MediaType = "multipart/form-data; boundary=xyz".parse().unwrap();
    assert_eq!(mt, *MULTIPART_FORM);
    assert_eq!(mt.get_param(names::BOUNDARY), Some("xyz"));
    assert!(STAR_STAR.matches(&mt));

    match (mt.type_(), mt.subtype()) {
        (names::MULTIPART, names::FORM_DATA) => (),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn parsing_as_documented() {
    let mt = MediaType::parse("Application/JSON").unwrap();
    assert_eq!((mt.type_(), mt.subtype()), ("application", "json"));

    let mt = MediaType::parse("text/html; charset=utf-8 boundary=xyz").unwrap();
    let params = mt.params().collect::<HashMap<_, _>>();
    let expected: HashMap<_, _> = vec![("charset", "utf-8"), ("boundary", "xyz")].into_iter().collect();
    assert_eq!(params, expected);

    let mt = MediaType::parse("text/html; charset").unwrap();
    assert_eq!(mt.params().count(), 0);

    let err = MediaType::parse("notamediatype").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingSlash);
    assert_eq!(err.input(), "notamediatype");
}

#[test]
fn errors_are_std_errors() {
    fn check(err: Box<dyn std::error::Error + Send + Sync>) -> String {
        err.to_string()
    }
    let err = MediaType::parse("").unwrap_err();
    assert_eq!(check(Box::new(err)), "malformed media type string \"\": input is empty");
}

#[test]
fn usable_as_hash_key_regardless_of_params() {
    let mut handlers = HashMap::new();
    handlers.insert(JSON.clone(), "json");
    handlers.insert(XML.clone(), "xml");
    handlers.insert(URL_ENCODED_FORM.clone(), "form");

    let incoming = MediaType::parse("application/json").unwrap();
    assert_eq!(handlers.get(&incoming), Some(&"json"));

    let incoming = MediaType::parse("application/XML; charset=latin1").unwrap();
    assert_eq!(handlers.get(&incoming), Some(&"xml"));
}

#[test]
fn choose_first_accepted_of_available() {
    let accepted = ["text/*", "application/json"]
        .iter()
        .map(|raw| MediaType::parse(raw).unwrap())
        .collect::<Vec<_>>();
    let available = [MediaType::new("image", "png"), MediaType::new("text", "csv")];

    let chosen = accepted.iter()
        .find_map(|acc| available.iter().find(|av| acc.matches(av)));
    assert_eq!(chosen, Some(&MediaType::new("text", "csv")));
}

#[test]
fn extension_table_lookups() {
    assert_eq!(media_type_for_file_extension("json"), Some(&MediaType::new("application", "json")));
    assert_eq!(media_type_for_file_extension("unknownext"), None);

    let office = ["doc", "dot"]
        .iter()
        .filter_map(|ext| media_type_for_file_extension(ext))
        .collect::<HashSet<_>>();
    assert_eq!(office.len(), 1);
}

#[test]
fn shared_between_threads() {
    let mt = MediaType::parse("text/plain; charset=utf-8").unwrap();
    let handles = (0..4)
        .map(|_| {
            let mt = mt.clone();
            std::thread::spawn(move || {
                let found = media_type_for_file_extension("txt").unwrap();
                found == &mt && mt.has_utf8_charset()
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn dropped_params_are_only_traced() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mt = MediaType::parse("text/plain; charset=utf-8 broken; format=flowed").unwrap();
    assert_eq!(mt.get_param(names::CHARSET), Some("utf-8"));
    assert_eq!(mt.get_param("broken"), None);
    assert_eq!(mt.get_param("format"), None);
}
