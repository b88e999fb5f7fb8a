use std::fs;
use std::sync::Arc;
use std::thread;

use super::super::*;
use super::{HELLO_FRAME, HELLO_ID};

use tempfile::tempdir;

#[test]
fn hello() {
    let root = tempdir().unwrap();
    let r = OnDisk::new(root.path()).unwrap();

    let id = r.put(HELLO_FRAME).unwrap();
    assert_eq!(id.to_string(), HELLO_ID);

    let path = root
        .path()
        .join("objects/b6/fc4c620b67d95f953a5c1c1230aaab5db5a1b0");
    assert!(path.is_file());
    assert_eq!(zlib::inflate(&fs::read(&path).unwrap()).unwrap(), HELLO_FRAME);
}

#[test]
fn only_the_object_is_left_behind() {
    let root = tempdir().unwrap();
    let r = OnDisk::new(root.path()).unwrap();
    r.put(HELLO_FRAME).unwrap();

    let objects: Vec<_> = fs::read_dir(r.objects_dir())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(objects, vec!["b6"]);

    let fan_out: Vec<_> = fs::read_dir(r.objects_dir().join("b6"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(fan_out, vec!["fc4c620b67d95f953a5c1c1230aaab5db5a1b0"]);
}

#[test]
fn same_frame_twice() {
    let root = tempdir().unwrap();
    let r = OnDisk::new(root.path()).unwrap();

    let id1 = r.put(HELLO_FRAME).unwrap();
    let path = r.object_path(&id1);
    let first = fs::read(&path).unwrap();

    let id2 = r.put(HELLO_FRAME).unwrap();
    assert_eq!(id1, id2);
    assert_eq!(fs::read(&path).unwrap(), first);
}

#[test]
fn overwrites_existing_file() {
    let root = tempdir().unwrap();
    let r = OnDisk::new(root.path()).unwrap();

    let mut object_path = root.path().join("objects/b6");
    fs::create_dir_all(&object_path).unwrap();

    object_path.push("fc4c620b67d95f953a5c1c1230aaab5db5a1b0");
    fs::write(&object_path, "sand in the gears").unwrap();

    r.put(HELLO_FRAME).unwrap();
    assert_eq!(r.get(&object_path).unwrap(), HELLO_FRAME);
}

#[cfg(unix)]
#[test]
fn object_files_are_read_only_for_everyone() {
    use std::os::unix::fs::PermissionsExt;

    let root = tempdir().unwrap();
    let r = OnDisk::new(root.path()).unwrap();

    let id = r.put(HELLO_FRAME).unwrap();
    let mode = fs::metadata(r.object_path(&id)).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o444);

    // Writing it again replaces the read-only file without error.
    r.put(HELLO_FRAME).unwrap();
    let mode = fs::metadata(r.object_path(&id)).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o444);
}

#[test]
fn concurrent_writers_converge() {
    let root = tempdir().unwrap();
    let r = Arc::new(OnDisk::new(root.path()).unwrap());

    let writers: Vec<_> = (0..8)
        .map(|_| {
            let r = Arc::clone(&r);
            thread::spawn(move || r.put(HELLO_FRAME).unwrap())
        })
        .collect();

    for w in writers {
        assert_eq!(w.join().unwrap().to_string(), HELLO_ID);
    }

    let fan_out: Vec<_> = fs::read_dir(r.objects_dir().join("b6"))
        .unwrap()
        .collect();
    assert_eq!(fan_out.len(), 1);

    let id: Id = HELLO_ID.parse().unwrap();
    assert_eq!(r.get(r.object_path(&id)).unwrap(), HELLO_FRAME);
}

#[test]
fn error_cant_create_fan_out_dir() {
    let root = tempdir().unwrap();
    let r = OnDisk::new(root.path()).unwrap();

    let objects_dir = root.path().join("objects");
    fs::create_dir(&objects_dir).unwrap();

    let fan_out_dir = objects_dir.join("b6");
    fs::write(&fan_out_dir, "sand in the gears").unwrap();

    let err = r.put(HELLO_FRAME).unwrap_err();

    match err {
        Error::IoError { path, source } => {
            assert_eq!(path, fan_out_dir);
            assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists);
        }
        _ => panic!("Unexpected error {:?}", err),
    }
}

#[test]
fn error_objects_path_is_a_file() {
    let root = tempdir().unwrap();
    let r = OnDisk::new(root.path()).unwrap();
    fs::write(root.path().join("objects"), "sand in the gears").unwrap();

    let err = r.put(HELLO_FRAME).unwrap_err();
    if let Error::IoError { path, .. } = err {
        assert_eq!(path, root.path().join("objects/b6"));
    } else {
        panic!("Unexpected error {:?}", err);
    }
}
