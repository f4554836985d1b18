//! Whole-file reads and writes. Contents are copied byte for byte, with no
//! header and no encoding transformation.

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::error::IoError;

pub fn save(contents: &[u8], path: &Path) -> Result<(), IoError> {
    if path.as_os_str().is_empty() {
        return Err(IoError::InvalidPath);
    }

    let mut file = File::create(path).map_err(|source| IoError::CreateFailed {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|source| IoError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), bytes = contents.len(), "saved buffer");
    Ok(())
}

pub fn load(path: &Path) -> Result<Vec<u8>, IoError> {
    if path.as_os_str().is_empty() {
        return Err(IoError::InvalidPath);
    }

    let mut file = File::open(path).map_err(|source| IoError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| IoError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = bytes.len(), "read file");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_round_trips_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        let original = b"first\n\xff\x00binary\nlast without newline";

        let mut buffer = Buffer::new(256).unwrap();
        buffer.append(original).unwrap();
        save(buffer.contents(), &path).unwrap();

        buffer.clear();
        buffer.replace(&load(&path).unwrap()).unwrap();
        assert_eq!(buffer.contents(), original);
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, b"a much longer previous content\n").unwrap();

        save(b"short\n", &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"short\n");
    }

    #[test]
    fn test_save_empty_path_is_invalid() {
        let err = save(b"data\n", Path::new("")).unwrap_err();
        assert!(matches!(err, IoError::InvalidPath));
    }

    #[test]
    fn test_save_into_missing_directory_fails_to_create() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = save(b"data\n", &path).unwrap_err();
        assert!(matches!(err, IoError::CreateFailed { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_empty_path_is_invalid() {
        assert!(matches!(load(Path::new("")), Err(IoError::InvalidPath)));
    }

    #[test]
    fn test_load_missing_file_fails_to_open() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("nope.txt")).unwrap_err();
        match err {
            IoError::OpenFailed { path, .. } => assert!(path.ends_with("nope.txt")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            IoError::OpenFailed { .. } | IoError::ReadFailed { .. }
        ));
    }
}
