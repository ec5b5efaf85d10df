use super::{parse_utils, Error, Result};

/// The ordered `key value` lines at the top of a commit or tag.
///
/// Keys may repeat (a merge commit has several `parent` lines), and order
/// is significant, so this is a list rather than a map. A value may span
/// several lines; on disk each continuation line starts with a single space.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Headers {
    entries: Vec<(String, Vec<u8>)>,
}

impl Headers {
    pub fn new() -> Headers {
        Headers::default()
    }

    /// Append a header.
    ///
    /// Keys must be non-empty and may not contain a space or a newline.
    pub fn push<V: Into<Vec<u8>>>(&mut self, key: &str, value: V) -> Result<()> {
        if key.is_empty() || key.contains(|c: char| c == ' ' || c == '\n') {
            return Err(Error::malformed(format!(
                "invalid header key `{}`",
                key.escape_debug()
            )));
        }

        self.entries.push((key.to_owned(), value.into()));
        Ok(())
    }

    /// Returns the value of the first header named `key`.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Returns the values of every header named `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Writes headers, the blank separator line, and the message.
pub(crate) fn write(headers: &Headers, message: &[u8], out: &mut Vec<u8>) {
    for (key, value) in &headers.entries {
        out.extend_from_slice(key.as_bytes());
        out.push(b' ');

        for &b in value {
            out.push(b);
            if b == b'\n' {
                out.push(b' ');
            }
        }

        out.push(b'\n');
    }

    out.push(b'\n');
    out.extend_from_slice(message);
}

/// Parses a header block and returns it along with the message that follows.
///
/// The header block must be terminated by a blank line; a payload that ends
/// before then is treated as truncated.
pub(crate) fn parse(payload: &[u8]) -> Result<(Headers, &[u8])> {
    let mut headers = Headers::new();
    let mut rest = payload;

    loop {
        match rest.first() {
            None => return Err(Error::malformed("header block has no terminating blank line")),
            Some(b'\n') => return Ok((headers, &rest[1..])),
            Some(_) => (),
        }

        let (key, after_key) = parse_utils::split_once(rest, b' ')
            .ok_or_else(|| Error::malformed("header line has no value"))?;

        if key.contains(&b'\n') {
            return Err(Error::malformed("header line has no value"));
        }

        let end = value_end(after_key)
            .ok_or_else(|| Error::malformed("header line is not terminated"))?;

        let key = parse_utils::utf8(key, "header key")?;
        headers.push(key, unfold(&after_key[..end]))?;

        rest = &after_key[end + 1..];
    }
}

// Finds the newline that ends a (possibly multi-line) value.
fn value_end(value: &[u8]) -> Option<usize> {
    let mut start = 0;

    loop {
        let newline = start + value[start..].iter().position(|b| *b == b'\n')?;
        if value.get(newline + 1) == Some(&b' ') {
            start = newline + 1;
        } else {
            return Some(newline);
        }
    }
}

// Drops the space that starts each continuation line.
fn unfold(raw: &[u8]) -> Vec<u8> {
    let mut value = Vec::with_capacity(raw.len());
    let mut after_newline = false;

    for &b in raw {
        if !(after_newline && b == b' ') {
            value.push(b);
        }
        after_newline = b == b'\n';
    }

    value
}
