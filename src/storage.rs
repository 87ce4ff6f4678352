use crate::config::STORE_PREFIX;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const FACES_FILE: &str = "face_metadata.json";
pub const IMAGE_FILE: &str = "image.jpg";

/// Local cache of the last successfully fetched resources.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(STORE_PREFIX.as_path())
    }
}

impl Store {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn faces_path(&self) -> PathBuf {
        self.root.join(FACES_FILE)
    }

    pub fn image_path(&self) -> PathBuf {
        self.root.join(IMAGE_FILE)
    }

    pub fn save_faces(&self, data: &[u8]) -> Result<PathBuf> {
        let file = self.faces_path();
        self.write_atomic(&file, data)?;
        Ok(file)
    }

    pub fn save_image(&self, data: &[u8]) -> Result<PathBuf> {
        let file = self.image_path();
        self.write_atomic(&file, data)?;
        Ok(file)
    }

    pub fn load_faces(&self) -> Result<Option<Vec<u8>>> {
        read_if_exists(&self.faces_path())
    }

    pub fn load_image(&self) -> Result<Option<Vec<u8>>> {
        read_if_exists(&self.image_path())
    }

    pub fn purge(&self) -> Result<()> {
        if self.root.exists() {
            std::fs::remove_dir_all(&self.root)
                .with_context(|| format!("removing {}", self.root.display()))?;
        }
        Ok(())
    }

    fn write_atomic(&self, file: &Path, data: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("creating {}", self.root.display()))?;
        let tmp = file.with_extension("part");
        std::fs::write(&tmp, data).with_context(|| format!("writing {}", tmp.display()))?;
        std::fs::rename(&tmp, file).with_context(|| format!("replacing {}", file.display()))?;
        Ok(())
    }
}

fn read_if_exists(file: &Path) -> Result<Option<Vec<u8>>> {
    if !file.exists() {
        return Ok(None);
    }
    let data = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    Ok(Some(data))
}
