use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CaptureError, Result};

/// Default capture directory, relative to the working directory.
pub const DEFAULT_DIR: &str = "dumps";

/// Writes and reads sequence-numbered payload files.
#[derive(Debug, Clone)]
pub struct CaptureStore {
    dir: PathBuf,
}

impl CaptureStore {
    /// Create a store rooted at `dir`. The directory is created on the
    /// first save, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The capture directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a sequence number: `<dir>/state_0001.bin`.
    pub fn path_for(&self, sequence: u32) -> PathBuf {
        self.dir.join(format!("state_{sequence:04}.bin"))
    }

    /// Persist one raw payload under the given sequence number.
    ///
    /// The write is verified (open, write, flush, close) before the path
    /// is reported back.
    pub fn save(&self, payload: &[u8], sequence: u32) -> Result<PathBuf> {
        self.ensure_dir()?;

        let path = self.path_for(sequence);
        let mut file = fs::File::create(&path).map_err(|source| CaptureError::Write {
            path: path.clone(),
            source,
        })?;
        file.write_all(payload)
            .and_then(|()| file.flush())
            .map_err(|source| CaptureError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), bytes = payload.len(), "capture saved");
        Ok(path)
    }

    /// Read one captured payload in full.
    pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| CaptureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if data.is_empty() {
            return Err(CaptureError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(data)
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| CaptureError::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }
}

impl Default for CaptureStore {
    fn default() -> Self {
        Self::new(DEFAULT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "telerx-capture-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn save_then_read_is_byte_identical() {
        let dir = make_temp_dir("roundtrip");
        let store = CaptureStore::new(&dir);

        let payload = vec![0x00, 0xFF, 0x7A, 0x01, 0x00];
        let path = store.save(&payload, 1).unwrap();
        assert_eq!(CaptureStore::read(&path).unwrap(), payload);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn sequence_numbers_are_zero_padded() {
        let store = CaptureStore::new("anywhere");
        assert_eq!(
            store.path_for(7),
            PathBuf::from("anywhere").join("state_0007.bin")
        );
        assert_eq!(
            store.path_for(1234),
            PathBuf::from("anywhere").join("state_1234.bin")
        );
    }

    #[test]
    fn directory_is_created_on_demand() {
        let dir = make_temp_dir("mkdir").join("nested");
        let store = CaptureStore::new(&dir);
        assert!(!dir.exists());

        store.save(b"payload", 1).unwrap();
        assert!(dir.is_dir());

        let _ = fs::remove_dir_all(dir.parent().unwrap());
    }

    #[test]
    fn each_file_holds_exactly_one_payload() {
        let dir = make_temp_dir("one-each");
        let store = CaptureStore::new(&dir);

        store.save(b"first", 1).unwrap();
        store.save(b"second", 2).unwrap();

        assert_eq!(CaptureStore::read(store.path_for(1)).unwrap(), b"first");
        assert_eq!(CaptureStore::read(store.path_for(2)).unwrap(), b"second");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = CaptureStore::read("/nonexistent/state_0001.bin");
        assert!(matches!(result, Err(CaptureError::Read { .. })));
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = make_temp_dir("empty");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("state_0001.bin");
        fs::write(&path, b"").unwrap();

        assert!(matches!(
            CaptureStore::read(&path),
            Err(CaptureError::Empty { .. })
        ));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn uncreatable_directory_is_a_create_error() {
        let dir = make_temp_dir("blocked");
        fs::create_dir_all(&dir).unwrap();
        // Occupy the target path with a file so create_dir_all fails.
        let blocked = dir.join("captures");
        fs::write(&blocked, b"x").unwrap();

        let store = CaptureStore::new(&blocked);
        assert!(matches!(
            store.save(b"payload", 1),
            Err(CaptureError::CreateDir { .. })
        ));

        let _ = fs::remove_dir_all(&dir);
    }
}
