use std::fmt::{self, Write};
use std::str::FromStr;

use sha1::{Digest, Sha1};
use thiserror::Error;

/// An error which can be returned when parsing an object ID.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseIdError {
    /// Value being parsed is empty.
    #[error("cannot parse object ID from empty string")]
    Empty,

    /// Contains something other than a lowercase hex digit.
    #[error("value contains invalid digit `{0}`")]
    InvalidDigit(char),

    #[error("value is more than 40 digits long")]
    Overflow,

    #[error("value is less than 40 digits long")]
    Underflow,
}

const ID_LEN: usize = 20;

/// An object ID identifies an object by the SHA-1 hash of its frame.
///
/// It is stored as a 20-byte digest and rendered as 40 lowercase hex digits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Id {
    id: [u8; ID_LEN],
}

impl Id {
    /// Compute the ID of an encoded object frame.
    ///
    /// The hash function is fixed so that IDs are comparable between any
    /// writer and reader of the same store.
    pub fn for_frame(frame: &[u8]) -> Id {
        let mut hasher = Sha1::new();
        hasher.update(frame);

        let mut id = [0; ID_LEN];
        id.copy_from_slice(&hasher.finalize());
        Id { id }
    }

    /// Convert a 40-character hex ID to an object ID.
    ///
    /// It is an error if the ID contains anything other than 40 lowercase hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Id, ParseIdError> {
        let hex = hex.as_ref();

        match hex.len() {
            40 => {
                let mut id = [0; ID_LEN];
                for (byte, pair) in id.iter_mut().zip(hex.chunks(2)) {
                    *byte = digit_value(pair[0])? << 4 | digit_value(pair[1])?;
                }
                Ok(Id { id })
            }
            0 => Err(ParseIdError::Empty),
            n if n < 40 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Returns the raw 20-byte digest.
    pub fn as_bytes(&self) -> &[u8] {
        &self.id
    }

    /// Split the hex form of this ID into the fan-out directory name
    /// (first two digits) and the file name (remaining 38 digits).
    pub fn fan_out(&self) -> (String, String) {
        let mut hex = self.to_string();
        let file_name = hex.split_off(2);
        (hex, file_name)
    }
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::from_hex(s.as_bytes())
    }
}

static CHARS: &[u8] = b"0123456789abcdef";

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.id.iter() {
            f.write_char(CHARS[(byte >> 4) as usize].into())?;
            f.write_char(CHARS[(byte & 0xf) as usize].into())?;
        }

        Ok(())
    }
}

fn digit_value(c: u8) -> Result<u8, ParseIdError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(ParseIdError::InvalidDigit(c as char)),
    }
}
