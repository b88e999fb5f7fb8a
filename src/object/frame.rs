//! The canonical byte framing shared by every object kind:
//! `<kind> <size>\0<content>`.

use thiserror::Error;

/// Describes why a byte sequence couldn't be parsed as an object frame.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MalformedFrame {
    #[error("object frame has no space after the kind")]
    MissingSpace,

    #[error("object frame has no null byte after the size")]
    MissingNull,

    #[error("object frame has a null byte before the kind separator")]
    NullBeforeSpace,
}

/// The three fields of a frame, borrowed from the frame itself.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Parts<'a> {
    pub kind: &'a [u8],
    pub size: &'a [u8],
    pub content: &'a [u8],
}

/// Build the frame for an object of the given kind name and content.
///
/// The kind name must not contain a space or null byte. That isn't checked here.
pub(crate) fn encode(kind: &[u8], content: &[u8]) -> Vec<u8> {
    let size = content.len().to_string();

    let mut frame = Vec::with_capacity(kind.len() + size.len() + content.len() + 2);
    frame.extend_from_slice(kind);
    frame.push(b' ');
    frame.extend_from_slice(size.as_bytes());
    frame.push(0);
    frame.extend_from_slice(content);
    frame
}

/// Split a frame at its first space and first null byte.
///
/// Only the first occurrence of each separator counts, so the content may
/// itself contain spaces and null bytes.
pub(crate) fn decode(frame: &[u8]) -> Result<Parts<'_>, MalformedFrame> {
    let space = frame.iter().position(|b| *b == b' ');
    let null = frame.iter().position(|b| *b == 0);

    match (space, null) {
        (None, _) => Err(MalformedFrame::MissingSpace),
        (Some(_), None) => Err(MalformedFrame::MissingNull),
        (Some(space), Some(null)) if null < space => Err(MalformedFrame::NullBeforeSpace),
        (Some(space), Some(null)) => Ok(Parts {
            kind: &frame[..space],
            size: &frame[space + 1..null],
            content: &frame[null + 1..],
        }),
    }
}
