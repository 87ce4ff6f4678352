use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use faceselect_overlay::{OverlayScene, Size};
use image::ImageReader;
use log::{info, warn};

use crate::schema::{self, Face};
use crate::storage::Store;

/// Supplier of the two resources the overlay needs.
pub trait DetectionDataSource {
    fn faces(&self) -> Result<Vec<Face>>;
    fn image_size(&self) -> Result<Size>;
}

/// Reads the face list and photo from disk, caching each after a successful
/// load. When a source path cannot be read the cached copy is used instead.
#[derive(Debug, Clone)]
pub struct LocalSource {
    pub faces_path: PathBuf,
    pub image_path: PathBuf,
    pub store: Option<Store>,
}

impl LocalSource {
    pub fn new(faces_path: impl AsRef<Path>, image_path: impl AsRef<Path>) -> Self {
        Self {
            faces_path: faces_path.as_ref().to_path_buf(),
            image_path: image_path.as_ref().to_path_buf(),
            store: None,
        }
    }

    pub fn with_store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    fn read(
        &self,
        path: &Path,
        cached: impl Fn(&Store) -> Result<Option<Vec<u8>>>,
    ) -> Result<(Vec<u8>, bool)> {
        match std::fs::read(path) {
            Ok(data) => Ok((data, false)),
            Err(e) => {
                let Some(store) = &self.store else {
                    return Err(e).with_context(|| format!("reading {}", path.display()));
                };
                warn!("{}: {}, trying cache", path.display(), e);
                let data = cached(store)?
                    .with_context(|| format!("{} unreadable and not cached", path.display()))?;
                Ok((data, true))
            }
        }
    }
}

impl DetectionDataSource for LocalSource {
    fn faces(&self) -> Result<Vec<Face>> {
        let (data, from_cache) = self.read(&self.faces_path, Store::load_faces)?;
        let faces = schema::decode_faces(&data)
            .with_context(|| format!("parsing {}", self.faces_path.display()))?;
        info!("Loaded {} face(s)", faces.len());
        if let (Some(store), false) = (&self.store, from_cache) {
            match store.save_faces(&data) {
                Ok(path) => info!("Face data cached at {}", path.display()),
                Err(e) => warn!("Failed to cache face data: {:#}", e),
            }
        }
        Ok(faces)
    }

    fn image_size(&self) -> Result<Size> {
        let (data, from_cache) = self.read(&self.image_path, Store::load_image)?;
        let (width, height) = ImageReader::new(Cursor::new(&data))
            .with_guessed_format()?
            .into_dimensions()
            .with_context(|| format!("reading dimensions of {}", self.image_path.display()))?;
        info!("Loaded image {}x{}", width, height);
        if let (Some(store), false) = (&self.store, from_cache) {
            match store.save_image(&data) {
                Ok(path) => info!("Image cached at {}", path.display()),
                Err(e) => warn!("Failed to cache image: {:#}", e),
            }
        }
        Ok(Size::new(width as f64, height as f64))
    }
}

/// Hand both resources to the scene. Both are loaded before the scene is
/// touched, so a failed load leaves it as it was. Returns the decoded wire
/// records so callers can keep the attributes the scene does not track.
pub fn deliver(source: &dyn DetectionDataSource, scene: &mut OverlayScene) -> Result<Vec<Face>> {
    let faces = source.faces()?;
    let size = source.image_size()?;
    scene.set_image_size(size).context("placing image")?;
    scene.set_faces(schema::to_records(&faces));
    Ok(faces)
}
