use super::{headers, parse_utils, Error, Headers, Id, Kind, Result};

/// An annotated tag. Same layout as a commit, but it points at an arbitrary
/// object via the required `object` and `type` headers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tag {
    headers: Headers,
    message: Vec<u8>,
    object: Id,
    target_kind: Kind,
}

impl Tag {
    pub fn new<M: Into<Vec<u8>>>(headers: Headers, message: M) -> Result<Tag> {
        let object = headers
            .get("object")
            .ok_or_else(|| Error::malformed("tag has no object header"))?;
        let object = parse_utils::hex_id(object, "tag object")?;

        let target_kind = headers
            .get("type")
            .ok_or_else(|| Error::malformed("tag has no type header"))?;
        let target_kind = parse_utils::utf8(target_kind, "tag type")?.parse::<Kind>()?;

        Ok(Tag {
            headers,
            message: message.into(),
            object,
            target_kind,
        })
    }

    /// Create a tag with the conventional header layout.
    pub fn for_object(
        object: &Id,
        target_kind: Kind,
        name: &str,
        tagger: &str,
        message: &str,
    ) -> Result<Tag> {
        let mut headers = Headers::new();
        headers.push("object", object.to_string())?;
        headers.push("type", target_kind.as_str())?;
        headers.push("tag", name)?;
        headers.push("tagger", tagger)?;

        Tag::new(headers, message)
    }

    /// The ID of the tagged object.
    pub fn object(&self) -> &Id {
        &self.object
    }

    /// The type of the tagged object, as recorded in the tag.
    pub fn target_kind(&self) -> Kind {
        self.target_kind
    }

    pub fn name(&self) -> Option<&[u8]> {
        self.headers.get("tag")
    }

    pub fn tagger(&self) -> Option<&[u8]> {
        self.headers.get("tagger")
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn message(&self) -> &[u8] {
        &self.message
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut payload = Vec::new();
        headers::write(&self.headers, &self.message, &mut payload);
        payload
    }

    pub fn deserialize(payload: &[u8]) -> Result<Tag> {
        let (headers, message) = headers::parse(payload)?;
        Tag::new(headers, message)
    }
}
