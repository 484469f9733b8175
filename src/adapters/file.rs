use crate::core::InventorySource;
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    atomic_rewrite: bool,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic_rewrite: false,
        }
    }

    /// Rewrite through a temp file renamed over the original instead of
    /// truncating in place.
    pub fn with_atomic_rewrite(mut self, atomic: bool) -> Self {
        self.atomic_rewrite = atomic;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rewrite_in_place(&self, contents: &str) -> Result<()> {
        // Truncates first: an interrupted write leaves a partial file.
        let mut file = fs::File::create(&self.path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn rewrite_atomically(&self, contents: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        // Temp files start as 0600; keep whatever mode the original had.
        match fs::metadata(&self.path) {
            Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

impl InventorySource for FileSource {
    fn read_all(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn append(&mut self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        Ok(())
    }

    fn rewrite(&mut self, contents: &str) -> Result<()> {
        tracing::debug!(
            "Rewriting {} ({} bytes, atomic: {})",
            self.path.display(),
            contents.len(),
            self.atomic_rewrite
        );

        if self.atomic_rewrite {
            self.rewrite_atomically(contents)
        } else {
            self.rewrite_in_place(contents)
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path().join("inventory.txt"));
        assert!(source.read_all().unwrap().is_none());
    }

    #[test]
    fn test_append_creates_and_extends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("inventory.txt");
        let mut source = FileSource::new(&path);

        source.append("a\n").unwrap();
        source.append("b\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_rewrite_modes_replace_contents() {
        let dir = TempDir::new().unwrap();
        for atomic in [false, true] {
            let path = dir.path().join(format!("inventory-{}.txt", atomic));
            fs::write(&path, "old contents that are longer\n").unwrap();

            let mut source = FileSource::new(&path).with_atomic_rewrite(atomic);
            source.rewrite("new\n").unwrap();
            assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_rewrite_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.txt");
        fs::write(&path, "old\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let mut source = FileSource::new(&path).with_atomic_rewrite(true);
        source.rewrite("new\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }
}
