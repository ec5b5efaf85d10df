use std::str;

use super::{Error, Id, Result};

/// Splits `s` around the first occurrence of `c`, or returns `None`
/// if `c` doesn't appear.
pub(crate) fn split_once<'a>(s: &'a [u8], c: u8) -> Option<(&'a [u8], &'a [u8])> {
    s.iter()
        .position(|b| *b == c)
        .map(|n| (&s[0..n], &s[n + 1..]))
}

pub(crate) fn utf8<'a>(s: &'a [u8], what: &str) -> Result<&'a str> {
    str::from_utf8(s).map_err(|_| Error::malformed(format!("{} is not valid UTF-8", what)))
}

pub(crate) fn hex_id(value: &[u8], what: &str) -> Result<Id> {
    Id::from_hex(value)
        .map_err(|err| Error::malformed(format!("{} is not an object ID: {}", what, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_once_fn() {
        assert_eq!(split_once(b"tagger abc", b' '), Some((&b"tagger"[..], &b"abc"[..])));
        assert_eq!(split_once(b"tagger ", b' '), Some((&b"tagger"[..], &b""[..])));
        assert_eq!(split_once(b"a b c", b' '), Some((&b"a"[..], &b"b c"[..])));
        assert_eq!(split_once(b"tagger", b' '), None);
    }

    #[test]
    fn hex_id_fn() {
        assert!(hex_id(b"be9bfa841874ccc9f2ef7c48d0c76226f89b7189", "tree").is_ok());

        let err = hex_id(b"be9bfa84", "tree").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed object: tree is not an object ID: value is less than 40 digits long"
        );
    }

    #[test]
    fn utf8_fn() {
        assert_eq!(utf8(b"abc", "name").unwrap(), "abc");
        assert_eq!(
            utf8(b"\xff", "name").unwrap_err(),
            Error::Malformed("name is not valid UTF-8".to_owned())
        );
    }
}
