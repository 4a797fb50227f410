use std::fmt::{self, Write};

const TYPE_SEP: char = '/';
const PARAMS_START: char = ';';
const PARAM_SEP: char = ' ';
const PARAM_KV_SEP: char = '=';

/// writes `type/subtype` followed by `; k1=v1 k2=v2` if there are any params
///
/// The output is accepted by the parser, which splits the parameter block on
/// single spaces.
pub(crate) fn write_media_type<'a, W, I>(
    out: &mut W, type_: &str, subtype: &str, params: I
) -> fmt::Result
    where W: Write,
          I: IntoIterator<Item=(&'a str, &'a str)>
{
    out.write_str(type_)?;
    out.write_char(TYPE_SEP)?;
    out.write_str(subtype)?;

    let mut params = params.into_iter().peekable();
    if params.peek().is_some() {
        out.write_char(PARAMS_START)?;
        for (name, value) in params {
            out.write_char(PARAM_SEP)?;
            out.write_str(name)?;
            out.write_char(PARAM_KV_SEP)?;
            out.write_str(value)?;
        }
    }
    Ok(())
}

/// the length of the output of `write_media_type` for the same arguments
pub(crate) fn repr_len<'a, I>(type_: &str, subtype: &str, params: I) -> usize
    where I: IntoIterator<Item=(&'a str, &'a str)>
{
    let mut len = type_.len() + 1 + subtype.len();
    let mut params = params.into_iter().peekable();
    if params.peek().is_some() {
        len += 1;
        for (name, value) in params {
            len += 1 + name.len() + 1 + value.len();
        }
    }
    len
}


#[cfg(test)]
mod test {
    use super::{repr_len, write_media_type};

    fn gen(type_: &str, subtype: &str, params: &[(&str, &str)]) -> String {
        let mut out = String::new();
        write_media_type(&mut out, type_, subtype, params.iter().cloned()).unwrap();
        assert_eq!(out.len(), repr_len(type_, subtype, params.iter().cloned()));
        out
    }

    #[test]
    fn without_params() {
        assert_eq!(gen("text", "plain", &[]), "text/plain");
    }

    #[test]
    fn single_param_gets_semicolon_and_space() {
        assert_eq!(gen("application", "json", &[("charset", "utf-8")]),
                   "application/json; charset=utf-8");
    }

    #[test]
    fn params_are_space_separated() {
        assert_eq!(gen("text", "html", &[("charset", "utf-8"), ("boundary", "xyz")]),
                   "text/html; charset=utf-8 boundary=xyz");
    }

    #[test]
    fn fields_are_written_verbatim() {
        assert_eq!(gen("Text", "HTML", &[("A", "B")]), "Text/HTML; A=B");
    }
}
