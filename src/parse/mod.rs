use log::trace;

use crate::error::{ErrorKind, ParserError};

use self::utils::{split_non_empty, trim};

mod utils;

const PARAM_SEP: char = ';';
const PARAM_TOKEN_SEP: char = ' ';
const PARAM_KV_SEP: char = '=';
const TYPE_SEP: char = '/';

/// the borrowed pieces of a media type string, before any case normalization
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParseResult<'a> {
    pub(crate) type_: &'a str,
    pub(crate) subtype: &'a str,
    pub(crate) params: Vec<(&'a str, &'a str)>
}

pub(crate) fn validate(input: &str) -> bool {
    parse(input).is_ok()
}

pub(crate) fn parse(input: &str) -> Result<ParseResult, ParserError> {
    let mut segments = split_non_empty(input, PARAM_SEP);

    let head = segments.next()
        .ok_or_else(|| ErrorKind::EmptyInput.with_input(input))?;

    let params = match segments.next() {
        Some(block) => parse_params(block),
        None => Vec::new()
    };

    // only one parameter block is recognized
    for dropped in segments {
        trace!("dropping parameter segment {:?} of {:?}", dropped, input);
    }

    let (type_, subtype) = parse_head(head)
        .ok_or_else(|| ErrorKind::MissingSlash.with_input(input))?;

    Ok(ParseResult { type_, subtype, params })
}

fn parse_head(head: &str) -> Option<(&str, &str)> {
    let mut parts = split_non_empty(head, TYPE_SEP);
    let type_ = parts.next()?;
    let subtype = parts.next()?;
    Some((type_, subtype))
}

fn parse_params(block: &str) -> Vec<(&str, &str)> {
    let mut params = Vec::new();
    for token in split_non_empty(trim(block), PARAM_TOKEN_SEP) {
        match parse_param(token) {
            Some(param) => params.push(param),
            None => trace!("dropping parameter token {:?}", token)
        }
    }
    params
}

fn parse_param(token: &str) -> Option<(&str, &str)> {
    let mut parts = split_non_empty(token, PARAM_KV_SEP);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(value), None) => Some((name, value)),
        _ => None
    }
}
