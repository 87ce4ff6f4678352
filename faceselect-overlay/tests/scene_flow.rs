use anyhow::Result;
use faceselect_overlay::scene::{Rgb, BORDER_WIDTH, SELECTED_BORDER_WIDTH};
use faceselect_overlay::{
    Emotion, EmotionScores, FaceRecord, FaceRectangle, Gender, Landmarks, OverlayError,
    OverlayScene, Point, Size,
};

fn face(id: &str, left: u32, top: u32, gender: &str) -> FaceRecord {
    let landmarks = Landmarks {
        pupil_left: Point::new(left as f64 + 40.0, top as f64 + 40.0),
        nose_tip: Point::new(left as f64 + 60.0, top as f64 + 80.0),
        ..Default::default()
    };
    FaceRecord {
        id: id.into(),
        rectangle: FaceRectangle {
            top,
            left,
            width: 120,
            height: 160,
        },
        landmarks,
        gender: Gender::from(gender),
        age: 30.0,
        emotion: Some(EmotionScores {
            happiness: 0.75,
            neutral: 0.25,
            ..Default::default()
        }),
    }
}

fn faces() -> Vec<FaceRecord> {
    vec![
        face("a", 100, 100, "male"),
        face("b", 400, 120, "female"),
        face("c", 160, 150, "other"),
    ]
}

#[test]
fn test_regions_wait_for_both_inputs() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut faces_first = OverlayScene::with_viewport_width(375.0)?;
    faces_first.set_faces(faces());
    assert!(faces_first.regions().is_empty());
    faces_first.set_image_size(Size::new(750.0, 500.0))?;

    let mut image_first = OverlayScene::with_viewport_width(375.0)?;
    image_first.set_image_size(Size::new(750.0, 500.0))?;
    assert!(image_first.regions().is_empty());
    image_first.set_faces(faces());

    assert!(faces_first.is_ready() && image_first.is_ready());
    assert_eq!(faces_first.regions(), image_first.regions());
    assert_eq!(faces_first.rendered_size(), Some(Size::new(375.0, 250.0)));

    let regions = faces_first.regions();
    assert_eq!(regions.len(), 3);
    assert_eq!(regions[0].region.x, 50.0);
    assert_eq!(regions[0].region.width, 60.0);
    assert_eq!(regions[0].style.color, Rgb::BLUE);
    assert_eq!(regions[1].style.color, Rgb::PINK);
    assert_eq!(regions[2].style.color, Rgb::PINK);
    Ok(())
}

#[test]
fn test_tap_select_and_deselect() -> Result<()> {
    let mut scene = OverlayScene::with_viewport_width(375.0)?;
    scene.set_image_size(Size::new(750.0, 500.0))?;
    scene.set_faces(faces());

    // inside face b only
    let on_b = Point::new(230.0, 80.0);
    assert_eq!(scene.tap(on_b)?, Some(1));
    let regions = scene.regions();
    assert_eq!(regions[1].style.border_width, SELECTED_BORDER_WIDTH);
    assert_eq!(regions[0].style.border_width, BORDER_WIDTH);
    assert_eq!(scene.landmarks().len(), 27);
    assert!(scene.landmarks().contains(&Point::new(220.0, 80.0)));

    let summary = scene.summary()?.expect("selected face has a summary");
    assert_eq!(summary.gender, Gender::Female);
    assert_eq!(summary.emotion, Emotion::Happiness);
    // 60x80 region over a 375x250 image
    assert_eq!(summary.face_area, 5.12);

    assert_eq!(scene.tap(on_b)?, None);
    assert!(scene.landmarks().is_empty());
    assert!(scene.summary()?.is_none());
    Ok(())
}

#[test]
fn test_tap_outside_clears() -> Result<()> {
    let mut scene = OverlayScene::new();
    scene.set_faces(faces());
    scene.set_image_size(Size::new(750.0, 500.0))?;

    assert_eq!(scene.select(0)?, Some(0));
    assert_eq!(scene.tap(Point::new(5.0, 5.0))?, None);
    assert_eq!(scene.selected(), None);
    assert!(scene.landmarks().is_empty());
    Ok(())
}

#[test]
fn test_overlap_picks_topmost() -> Result<()> {
    let mut scene = OverlayScene::new();
    scene.set_image_size(Size::new(750.0, 500.0))?;
    scene.set_faces(faces());

    // faces a (100..220, 100..260) and c (160..280, 150..310) overlap here
    assert_eq!(scene.hit_test(Point::new(200.0, 200.0)), Some(2));
    assert_eq!(scene.tap(Point::new(200.0, 200.0))?, Some(2));
    assert_eq!(scene.tap(Point::new(110.0, 110.0))?, Some(0));
    Ok(())
}

#[test]
fn test_errors_leave_state_untouched() -> Result<()> {
    let mut scene = OverlayScene::with_viewport_width(375.0)?;
    scene.set_image_size(Size::new(750.0, 500.0))?;
    scene.set_faces(faces());
    scene.select(1)?;
    let before = scene.regions();

    assert!(matches!(
        scene.select(3),
        Err(OverlayError::IndexOutOfRange { index: 3, count: 3 })
    ));
    assert!(scene.set_image_size(Size::new(0.0, 500.0)).is_err());
    assert!(scene.set_viewport_width(-1.0).is_err());

    assert_eq!(scene.selected(), Some(1));
    assert_eq!(scene.regions(), before);
    assert_eq!(scene.landmarks().len(), 27);
    Ok(())
}

#[test]
fn test_new_faces_reset_selection() -> Result<()> {
    let mut scene = OverlayScene::new();
    scene.set_image_size(Size::new(750.0, 500.0))?;
    scene.set_faces(faces());
    scene.select(2)?;

    scene.set_faces(vec![face("z", 0, 0, "male")]);
    assert_eq!(scene.selected(), None);
    assert!(scene.landmarks().is_empty());
    assert!(scene.select(2).is_err());
    Ok(())
}

#[test]
fn test_viewport_change_rescales_landmarks() -> Result<()> {
    let mut scene = OverlayScene::new();
    scene.set_image_size(Size::new(750.0, 500.0))?;
    scene.set_faces(faces());
    scene.select(0)?;
    assert!(scene.landmarks().contains(&Point::new(140.0, 140.0)));

    scene.set_viewport_width(375.0)?;
    assert_eq!(scene.selected(), Some(0));
    assert!(scene.landmarks().contains(&Point::new(70.0, 70.0)));
    Ok(())
}

#[test]
fn test_selection_before_image_arrives() -> Result<()> {
    let mut scene = OverlayScene::with_viewport_width(375.0)?;
    scene.set_faces(faces());

    assert_eq!(scene.select(0)?, Some(0));
    assert!(scene.summary()?.is_none());
    assert!(scene.summary_for(1)?.is_none());
    assert!(scene.landmarks().is_empty());
    assert!(matches!(
        scene.summary_for(3),
        Err(OverlayError::IndexOutOfRange { index: 3, count: 3 })
    ));

    scene.set_image_size(Size::new(750.0, 500.0))?;
    assert_eq!(scene.selected(), Some(0));
    assert_eq!(scene.landmarks().len(), 27);
    let summary = scene.summary()?.expect("image arrived");
    assert_eq!(summary.gender, Gender::Male);
    Ok(())
}
