/// A blob is opaque content. Its payload is exactly its bytes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Blob {
    data: Vec<u8>,
}

impl Blob {
    pub fn new<D: Into<Vec<u8>>>(data: D) -> Blob {
        Blob { data: data.into() }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Any byte sequence is a valid blob.
    pub fn deserialize(payload: &[u8]) -> Blob {
        Blob::new(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let payloads: [&[u8]; 3] = [b"", b"hello", b"\0\xff\n binary \r\n"];
        for payload in payloads.iter() {
            let blob = Blob::deserialize(payload);
            assert_eq!(blob.data(), *payload);
            assert_eq!(blob.serialize(), payload.to_vec());
        }
    }

    #[test]
    fn into_data() {
        let blob = Blob::new("abc");
        assert_eq!(blob.into_data(), b"abc".to_vec());
    }
}
