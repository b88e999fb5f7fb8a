//! An object database that stores content on the local file system.
//!
//! It intentionally uses the same loose object format as command-line git
//! (`objects/xx/yyyy...`, zlib-compressed) so that results may be compared
//! for similar operations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, trace};

use super::{Error, Repo, Result};
use crate::object::{Id, Object};

mod zlib;

/// Implementation of `Repo` that stores loose objects on the local file system.
///
/// The store root is the equivalent of a `.git` directory: objects are
/// written beneath `<root>/objects`. The root itself must already exist.
/// `OnDisk` holds no other state, so one instance may be shared freely
/// between threads.
#[derive(Clone, Debug)]
pub struct OnDisk {
    root: PathBuf,
}

impl OnDisk {
    /// Open an object store rooted at `root`.
    ///
    /// `root` must be an existing directory. The `objects` directory beneath
    /// it is created on demand as objects are written.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::RootDoesntExist(root));
        }

        Ok(OnDisk { root })
    }

    /// Return the store root.
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Return the path to the `objects` directory.
    pub fn objects_dir(&self) -> PathBuf {
        self.root.join("objects")
    }

    /// Return the path at which the loose object with the given ID is stored.
    pub fn object_path(&self, id: &Id) -> PathBuf {
        let (dir, file_name) = id.fan_out();
        let mut path = self.objects_dir();
        path.push(dir);
        path.push(file_name);
        path
    }

    /// Compress and store an object frame, returning its ID.
    ///
    /// The frame is written to a temporary file in the fan-out directory and
    /// then renamed into place, so a reader never sees a partially written
    /// object. Writing a frame that is already stored replaces the file with
    /// identical content.
    ///
    /// As with git, object files are read-only and readable by everyone.
    pub fn put(&self, frame: &[u8]) -> Result<Id> {
        let id = Id::for_frame(frame);
        let path = self.object_path(&id);

        // An object path always has a fan-out directory as its parent.
        let dir = path.parent().unwrap_or_else(|| self.root.as_path());

        // create_dir_all treats a directory created concurrently by
        // another writer as success.
        fs::create_dir_all(dir).map_err(Error::io(dir))?;

        let temp = NamedTempFile::new_in(dir).map_err(Error::io(dir))?;
        let temp = zlib::deflate_into(temp, frame).map_err(Error::io(&path))?;
        make_read_only(temp.as_file()).map_err(Error::io(&path))?;
        temp.persist(&path)
            .map_err(|e| Error::io(&path)(e.error))?;

        debug!("wrote {} ({} bytes) to {}", id, frame.len(), path.display());
        Ok(id)
    }

    /// Read and decompress the object file at `path`, returning its frame.
    ///
    /// `path` is normally obtained from `object_path`.
    pub fn get<P: AsRef<Path>>(&self, path: P) -> Result<Vec<u8>> {
        let path = path.as_ref();

        let compressed = fs::read(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::io(path)(err),
        })?;

        let frame = zlib::inflate(&compressed).map_err(|source| Error::CorruptObject {
            path: path.to_path_buf(),
            source,
        })?;

        trace!("read {} bytes from {}", frame.len(), path.display());
        Ok(frame)
    }

    /// Read and decode the object file at `path`.
    ///
    /// No partial object is returned: any failure to find, decompress, or
    /// parse the file is reported as an error.
    pub fn read_object_at<P: AsRef<Path>>(&self, path: P) -> Result<Object> {
        let frame = self.get(path)?;
        Ok(Object::from_frame(&frame)?)
    }
}

#[cfg(unix)]
fn make_read_only(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    // NamedTempFile creates files as 0600.
    file.set_permissions(fs::Permissions::from_mode(0o444))
}

#[cfg(not(unix))]
fn make_read_only(_file: &fs::File) -> io::Result<()> {
    Ok(())
}

impl Repo for OnDisk {
    fn put_frame(&self, frame: &[u8]) -> Result<Id> {
        self.put(frame)
    }

    fn get_frame(&self, id: &Id) -> Result<Vec<u8>> {
        self.get(self.object_path(id))
    }

    fn contains(&self, id: &Id) -> bool {
        self.object_path(id).is_file()
    }
}

#[cfg(test)]
mod tests;
