/// the whitespace stripped from the parameter block
const WS: &[char] = &[' ', '\t', '\r', '\n'];

#[inline]
pub(crate) fn is_ws(ch: char) -> bool {
    WS.contains(&ch)
}

/// strips leading and trailing space, tab, CR and LF
#[inline]
pub(crate) fn trim(input: &str) -> &str {
    input.trim_matches(is_ws)
}

/// splits on `sep`, skipping empty slices
///
/// `";a;;b;"` split on `';'` yields `"a"`, `"b"`.
#[inline]
pub(crate) fn split_non_empty(input: &str, sep: char) -> impl Iterator<Item=&str> {
    input.split(sep).filter(|part| !part.is_empty())
}


#[cfg(test)]
mod test {
    use super::{split_non_empty, trim};

    #[test]
    fn trim_strips_all_ws_kinds() {
        assert_eq!(trim(" \t\r\n a b \n\r\t "), "a b");
        assert_eq!(trim("ab"), "ab");
        assert_eq!(trim(" \t "), "");
    }

    #[test]
    fn trim_keeps_other_unicode_ws() {
        assert_eq!(trim("\u{a0}a\u{a0}"), "\u{a0}a\u{a0}");
    }

    #[test]
    fn split_skips_empty_slices() {
        let parts = split_non_empty(";a;;b;", ';').collect::<Vec<_>>();
        assert_eq!(parts, vec!["a", "b"]);
    }

    #[test]
    fn split_of_separators_only_is_empty() {
        assert_eq!(split_non_empty(";;;", ';').count(), 0);
        assert_eq!(split_non_empty("", ';').count(), 0);
    }
}
