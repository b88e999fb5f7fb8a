use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

/// Describes the fundamental object type (blob, tree, commit, or tag).
///
/// We use the word `kind` here to avoid conflict with the Rust reserved word `type`.
///
/// The object database doesn't enforce the closed set of kinds. Any other
/// name found in a frame is carried through as `Kind::Other` so that it
/// survives a read and re-write unchanged.
///
/// Kinds compare by name, so `Kind::Other(b"blob".to_vec())` is equal to
/// `Kind::Blob`.
#[derive(Clone, Debug)]
pub enum Kind {
    Blob,
    Tree,
    Commit,
    Tag,
    Other(Vec<u8>),
}

impl Kind {
    /// Interpret the kind name found in an object frame.
    pub fn from_bytes(name: &[u8]) -> Kind {
        match name {
            b"blob" => Kind::Blob,
            b"tree" => Kind::Tree,
            b"commit" => Kind::Commit,
            b"tag" => Kind::Tag,
            other => Kind::Other(other.to_vec()),
        }
    }

    /// Returns the name of this kind exactly as it appears in an object frame.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Kind::Blob => b"blob",
            Kind::Tree => b"tree",
            Kind::Commit => b"commit",
            Kind::Tag => b"tag",
            Kind::Other(name) => name.as_slice(),
        }
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Kind) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
