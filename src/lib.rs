//! A content-addressed object store using git's loose object format.
//!
//! Objects are framed as `<kind> <size>\0<content>`, identified by the SHA-1
//! hash of that frame, and stored zlib-compressed at
//! `<root>/objects/<first two hex digits>/<remaining 38 hex digits>`.
//!
//! The [`object`] module handles framing and identity. The [`repo`] module
//! handles storage, with [`repo::on_disk::OnDisk`] as the local file system
//! implementation.

#![deny(warnings)]

pub mod object;
pub mod repo;
