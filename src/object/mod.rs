//! Represents the git concept of an "object" which is a tuple of
//! object type and binary data identified by the hash of the binary data.

mod frame;
pub use frame::MalformedFrame;

mod id;
pub use id::{Id, ParseIdError};

mod kind;
pub use kind::Kind;

/// Describes a single object stored (or about to be stored) in an object database.
///
/// An object is encoded into a frame of the form `<kind> <size>\0<content>`.
/// Its [`Id`] is the hash of that frame, so it is never stored alongside the
/// object and can always be recomputed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Object {
    kind: Kind,
    size: String,
    content: Vec<u8>,
}

impl Object {
    /// Create a new object from its kind and content.
    ///
    /// The recorded size is the exact length of `content` in bytes.
    pub fn new<C: Into<Vec<u8>>>(kind: Kind, content: C) -> Object {
        let content = content.into();
        Object {
            kind,
            size: content.len().to_string(),
            content,
        }
    }

    /// Parse an object from its uncompressed frame.
    ///
    /// The size field is kept exactly as it was written and isn't checked
    /// against the content length. Some older writers recorded one less than
    /// the true length; such objects still parse.
    pub fn from_frame(frame: &[u8]) -> Result<Object, MalformedFrame> {
        let parts = frame::decode(frame)?;

        Ok(Object {
            kind: Kind::from_bytes(parts.kind),
            size: String::from_utf8_lossy(parts.size).into_owned(),
            content: parts.content.to_vec(),
        })
    }

    /// Encode this object as an uncompressed frame.
    ///
    /// The size written to the frame is always the actual content length.
    pub fn to_frame(&self) -> Vec<u8> {
        frame::encode(self.kind.as_bytes(), &self.content)
    }

    /// Computes the object's ID from its kind and content.
    ///
    /// This is functionally equivalent to the
    /// [`git hash-object`](https://git-scm.com/docs/git-hash-object) command
    /// without the `-w` option that would write the object to the repo.
    pub fn id(&self) -> Id {
        Id::for_frame(&self.to_frame())
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Return the size field as recorded in the object's frame.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Parse the recorded size field.
    ///
    /// Returns `None` if it isn't a decimal number.
    pub fn declared_len(&self) -> Option<usize> {
        if self.size.bytes().all(|b| b.is_ascii_digit()) {
            self.size.parse().ok()
        } else {
            None
        }
    }

    /// Return the content of the object.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consume the object, returning its content.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// Return the length (in bytes) of the object's content.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the object's content is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
