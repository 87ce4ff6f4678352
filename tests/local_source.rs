use std::path::PathBuf;

use anyhow::Result;
use faceselect::source::{self, DetectionDataSource, LocalSource};
use faceselect::storage::{Store, FACES_FILE, IMAGE_FILE};
use faceselect::{OverlayScene, Point, Size};
use faceselect_overlay::Emotion;

const FIXTURE: &str = "tests/data/family_faces.json";

/// Scratch dir holding a blank 1600x1200 photo.
fn scratch(name: &str) -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("faceselect-{name}"));
    if dir.exists() {
        std::fs::remove_dir_all(&dir)?;
    }
    std::fs::create_dir_all(&dir)?;
    image::RgbImage::new(1600, 1200).save(dir.join("family.png"))?;
    Ok(dir)
}

#[test]
fn test_deliver_into_scene() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = scratch("deliver")?;
    let source = LocalSource::new(FIXTURE, dir.join("family.png"));

    assert_eq!(source.image_size()?, Size::new(1600.0, 1200.0));

    let mut scene = OverlayScene::with_viewport_width(400.0)?;
    let faces = source::deliver(&source, &mut scene)?;
    assert_eq!(faces.len(), 2);
    assert_eq!(scene.rendered_size(), Some(Size::new(400.0, 300.0)));

    let regions = scene.regions();
    assert_eq!(regions[0].region.x, 154.0);
    assert_eq!(regions[0].region.y, 155.25);
    assert_eq!(regions[0].region.width, 48.75);

    assert_eq!(scene.tap(Point::new(170.0, 170.0))?, Some(0));
    let summary = scene.summary()?.expect("face 0 selected");
    assert_eq!(summary.emotion, Emotion::Happiness);
    assert!((summary.confidence - 90.0).abs() < 1e-9);
    assert_eq!(summary.face_area, 1.98);
    println!("{summary}");

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_cache_written_and_used() -> Result<()> {
    let dir = scratch("cache")?;
    let store = Store::new(dir.join("store"));

    let fresh = LocalSource::new(FIXTURE, dir.join("family.png")).with_store(store.clone());
    let faces = fresh.faces()?;
    fresh.image_size()?;
    assert!(store.root().join(FACES_FILE).exists());
    assert!(store.root().join(IMAGE_FILE).exists());

    let offline =
        LocalSource::new(dir.join("gone.json"), dir.join("gone.png")).with_store(store.clone());
    assert_eq!(offline.faces()?, faces);
    assert_eq!(offline.image_size()?, Size::new(1600.0, 1200.0));

    store.purge()?;
    assert!(offline.faces().is_err());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_missing_source_without_cache() -> Result<()> {
    let dir = scratch("missing")?;
    let source = LocalSource::new(dir.join("nope.json"), dir.join("family.png"));
    let mut scene = OverlayScene::new();
    assert!(source::deliver(&source, &mut scene).is_err());
    assert!(!scene.is_ready());
    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_missing_image_leaves_scene_untouched() -> Result<()> {
    let dir = scratch("missing-image")?;
    let mut scene = OverlayScene::with_viewport_width(400.0)?;
    source::deliver(&LocalSource::new(FIXTURE, dir.join("family.png")), &mut scene)?;
    scene.select(1)?;
    let before = scene.regions();

    let broken = LocalSource::new(FIXTURE, dir.join("absent.png"));
    assert!(source::deliver(&broken, &mut scene).is_err());
    assert_eq!(scene.faces().len(), 2);
    assert_eq!(scene.selected(), Some(1));
    assert_eq!(scene.regions(), before);

    let mut empty = OverlayScene::new();
    assert!(source::deliver(&broken, &mut empty).is_err());
    assert!(empty.faces().is_empty());
    assert!(!empty.is_ready());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
