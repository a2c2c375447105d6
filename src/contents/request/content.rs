use base64::{prelude::BASE64_STANDARD, Engine};
use serde::{Deserialize, Serialize, Serializer};

/// How the stored file content is put on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Raw text, base64-encoded when the body is serialized.
    #[default]
    Utf8,
    /// Already base64-encoded by the caller.
    Base64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FileContent {
    pub(super) text: String,
    pub(super) encoding: Encoding,
}

impl FileContent {
    pub(super) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            encoding: Encoding::default(),
        }
    }

    fn wire_value(&self) -> String {
        match self.encoding {
            Encoding::Utf8 => BASE64_STANDARD.encode(self.text.as_bytes()),
            Encoding::Base64 => self.text.to_owned(),
        }
    }
}

impl Serialize for FileContent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.wire_value())
    }
}
