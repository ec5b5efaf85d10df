//! The envelope is the canonical byte form of an object:
//! `<type> SP <decimal length> NUL <payload>`.
//!
//! This is what gets hashed to produce an object's ID and what gets
//! compressed into the object store. The payload alone is never hashed.

use sha1::{Digest, Sha1};

use super::{parse_utils, Error, Id, Kind, Result};

/// Wraps `payload` in the envelope for an object of type `kind`.
pub fn frame(kind: Kind, payload: &[u8]) -> Vec<u8> {
    let len = payload.len().to_string();

    let mut envelope = Vec::with_capacity(kind.as_str().len() + len.len() + 2 + payload.len());
    envelope.extend_from_slice(kind.as_str().as_bytes());
    envelope.push(b' ');
    envelope.extend_from_slice(len.as_bytes());
    envelope.push(0);
    envelope.extend_from_slice(payload);
    envelope
}

/// Computes the object ID for a complete envelope.
pub fn digest(envelope: &[u8]) -> Id {
    let mut hasher = Sha1::new();
    hasher.update(envelope);

    // A SHA-1 digest is always 20 bytes, so this can't fail.
    match Id::new(hasher.finalize().as_slice()) {
        Ok(id) => id,
        Err(_) => unreachable!(),
    }
}

/// Splits an envelope into its type and payload.
///
/// The declared length must match the payload exactly; anything else
/// suggests a truncated or corrupted object.
pub fn parse(envelope: &[u8]) -> Result<(Kind, &[u8])> {
    let (tag, rest) = parse_utils::split_once(envelope, b' ')
        .ok_or_else(|| Error::malformed("envelope has no type terminator"))?;

    let (len, payload) = parse_utils::split_once(rest, 0)
        .ok_or_else(|| Error::malformed("envelope has no length terminator"))?;

    let declared = parse_len(len)?;
    if declared != payload.len() {
        return Err(Error::malformed(format!(
            "bad length: header says {} bytes, payload has {}",
            declared,
            payload.len()
        )));
    }

    let kind = Kind::from_tag(tag)
        .ok_or_else(|| Error::UnknownKind(String::from_utf8_lossy(tag).into_owned()))?;

    Ok((kind, payload))
}

fn parse_len(len: &[u8]) -> Result<usize> {
    let canonical = !len.is_empty()
        && len.iter().all(u8::is_ascii_digit)
        && (len == b"0" || len[0] != b'0');

    if !canonical {
        return Err(Error::malformed(format!(
            "invalid length `{}`",
            String::from_utf8_lossy(len)
        )));
    }

    parse_utils::utf8(len, "length")?
        .parse()
        .map_err(|_| Error::malformed("length is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_blob() {
        assert_eq!(frame(Kind::Blob, b"hello"), b"blob 5\0hello".to_vec());
        assert_eq!(frame(Kind::Tree, b""), b"tree 0\0".to_vec());
    }

    #[test]
    fn digest_matches_git() {
        // $ printf hello | git hash-object --stdin
        let id = digest(&frame(Kind::Blob, b"hello"));
        assert_eq!(id.to_string(), "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0");

        // $ echo 'test content' | git hash-object --stdin
        let id = digest(&frame(Kind::Blob, b"test content\n"));
        assert_eq!(id.to_string(), "d670460b4b4aece5915caf5c68d12f560a9fe3e4");

        let id = digest(&frame(Kind::Tree, b""));
        assert_eq!(id.to_string(), "4b825dc642cb6eb9a060e54bf8d69288fbee4904");
    }

    #[test]
    fn digest_covers_header() {
        // SHA-1 of the bare payload is not an object ID.
        let bare = digest(b"hello");
        assert_eq!(bare.to_string(), "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
        assert_ne!(bare, digest(&frame(Kind::Blob, b"hello")));
    }

    #[test]
    fn digest_depends_on_kind() {
        assert_ne!(
            digest(&frame(Kind::Blob, b"")),
            digest(&frame(Kind::Tree, b""))
        );
    }

    #[test]
    fn parse_valid() {
        let envelope = frame(Kind::Commit, b"a \0 b");
        let (kind, payload) = parse(&envelope).unwrap();
        assert_eq!(kind, Kind::Commit);
        assert_eq!(payload, b"a \0 b");

        let (kind, payload) = parse(b"tag 0\0").unwrap();
        assert_eq!(kind, Kind::Tag);
        assert!(payload.is_empty());
    }

    #[test]
    fn parse_length_mismatch() {
        let err = parse(b"blob 6\0hello").unwrap_err();
        assert_eq!(
            err,
            Error::Malformed("bad length: header says 6 bytes, payload has 5".to_owned())
        );

        assert!(parse(b"blob 4\0hello").is_err());
    }

    #[test]
    fn parse_unknown_kind() {
        let err = parse(b"bolb 5\0hello").unwrap_err();
        assert_eq!(err, Error::UnknownKind("bolb".to_owned()));
    }

    #[test]
    fn parse_bad_header() {
        assert!(parse(b"").is_err());
        assert!(parse(b"blob").is_err());
        assert!(parse(b"blob 5hello").is_err());
        assert!(parse(b"blob \0").is_err());
        assert!(parse(b"blob 05\0hello").is_err());
        assert!(parse(b"blob +5\0hello").is_err());
        assert!(parse(b"blob 99999999999999999999999\0").is_err());
    }
}
