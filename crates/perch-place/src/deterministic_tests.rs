use config::{AlignmentSetting, Nub, PlacementConfig, PositionSetting};
use perch_geom::{
    Alignment, Direction, ElementId, Layout, Offset, Placement, Position, Rect, Scene, Viewport,
};

use crate::{Error, Outcome, Positioner, Profile, Role};

const ANCHOR: ElementId = ElementId(1);
const FLOATING: ElementId = ElementId(2);
const BOX: ElementId = ElementId(3);

fn make_scene(width: f64, height: f64, anchor: Rect, floating: (f64, f64)) -> Scene {
    Scene::new(Viewport {
        width,
        height,
        ..Default::default()
    })
    .with_document_size(width, height * 4.0)
    .with_element(ANCHOR, ElementId::DOCUMENT, anchor)
    .unwrap()
    .with_element(FLOATING, ElementId::DOCUMENT, Rect::new(0.0, 0.0, floating.0, floating.1))
    .unwrap()
}

fn example_anchor() -> Rect {
    Rect::new(100.0, 500.0, 50.0, 20.0)
}

fn placement(position: Position, alignment: Alignment) -> Placement {
    Placement::new(position, alignment).unwrap()
}

fn dropdown(config: PlacementConfig) -> Positioner {
    Positioner::configure(&config, Profile::DROPDOWN).unwrap()
}

#[test]
fn fits_on_first_candidate() {
    let mut scene = make_scene(800.0, 600.0, example_anchor(), (200.0, 40.0));
    let mut pos = dropdown(PlacementConfig::default());

    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    match outcome {
        Outcome::Fit(placed) => {
            assert_eq!(placed.placement, placement(Position::Bottom, Alignment::Left));
            assert_eq!(
                placed.offset,
                Offset {
                    top: 520.0,
                    left: 100.0
                }
            );
            assert_eq!(placed.attempts, 1);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(scene.writes().len(), 1);
    assert_eq!(scene.rect(FLOATING), Some(Rect::new(100.0, 520.0, 200.0, 40.0)));
    assert_eq!(
        pos.class_names(),
        ("attached-bottom".to_string(), "aligned-left".to_string())
    );
}

#[test]
fn bottom_overflow_tolerated_by_default() {
    let mut scene = make_scene(800.0, 540.0, example_anchor(), (200.0, 40.0));
    let mut pos = dropdown(PlacementConfig::default());
    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    assert!(matches!(outcome, Outcome::Fit(p) if p.attempts == 1));
    assert_eq!(pos.position(), Position::Bottom);
}

#[test]
fn bottom_overflow_advances_to_first_fitting_candidate() {
    let mut scene = make_scene(800.0, 540.0, example_anchor(), (200.0, 40.0));
    let mut pos = dropdown(PlacementConfig {
        allow_bottom_overlap: false,
        ..Default::default()
    });

    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    // bottom x3 and left x3 overflow; right/top is the first that fits.
    match outcome {
        Outcome::Fit(placed) => {
            assert_eq!(placed.placement, placement(Position::Right, Alignment::Top));
            assert_eq!(placed.attempts, 7);
            assert_eq!(
                placed.offset,
                Offset {
                    top: 500.0,
                    left: 150.0
                }
            );
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(scene.writes().len(), 7);
}

#[test]
fn full_width_anchor_flips_to_top() {
    let mut scene = make_scene(800.0, 540.0, Rect::new(0.0, 500.0, 800.0, 20.0), (200.0, 40.0));
    let mut pos = dropdown(PlacementConfig {
        allow_bottom_overlap: false,
        ..Default::default()
    });

    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    let placed = *outcome.placed().unwrap();
    assert!(matches!(outcome, Outcome::Fit(_)));
    assert_eq!(placed.placement, placement(Position::Top, Alignment::Left));
    assert_eq!(placed.attempts, 10);
    assert_eq!(placed.offset.top, 460.0);
}

#[test]
fn nothing_fits_rolls_back_to_least_overlap() {
    let mut scene = make_scene(800.0, 600.0, Rect::new(300.0, 250.0, 100.0, 50.0), (1000.0, 700.0));
    let mut pos = dropdown(PlacementConfig {
        allow_bottom_overlap: false,
        ..Default::default()
    });

    let expected = pos
        .candidates(&scene, ANCHOR, FLOATING, None)
        .unwrap()
        .into_iter()
        .fold(None, |best: Option<crate::Candidate>, c| match best {
            Some(b) if b.overlap <= c.overlap => Some(b),
            _ => Some(c),
        })
        .unwrap();

    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    match outcome {
        Outcome::BestEffort { placed, overlap } => {
            assert!(overlap > 0.0);
            assert_eq!(overlap, expected.overlap);
            assert_eq!(placed.placement, expected.placement);
            assert_eq!(placed.offset, expected.offset);
            assert_eq!(placed.attempts, 12);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    // Twelve candidates plus the rollback write.
    assert_eq!(scene.writes().len(), 13);
    assert_eq!(scene.writes().last(), Some(&(FLOATING, expected.offset)));
    assert_eq!(pos.placement(), expected.placement);
}

#[test]
fn equal_overlaps_keep_first_seen() {
    // Top and bottom both overflow by 10; sides overflow by 200.
    let mut scene = make_scene(800.0, 100.0, Rect::new(0.0, 40.0, 800.0, 20.0), (200.0, 50.0));
    let mut pos = dropdown(PlacementConfig {
        position: PositionSetting::Top,
        alignment: AlignmentSetting::Center,
        allow_bottom_overlap: false,
        ..Default::default()
    });

    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    match outcome {
        Outcome::BestEffort { placed, overlap } => {
            assert_eq!(overlap, 10.0);
            assert_eq!(placed.placement, placement(Position::Top, Alignment::Center));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn repeated_calls_are_idempotent() {
    let mut scene = make_scene(800.0, 540.0, example_anchor(), (200.0, 40.0));
    let mut pos = dropdown(PlacementConfig {
        allow_bottom_overlap: false,
        ..Default::default()
    });

    let first = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    let rect = scene.rect(FLOATING);
    let second = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    assert_eq!(first, second);
    assert_eq!(scene.rect(FLOATING), rect);
    // The second call restarted from bottom/left rather than right/top.
    assert_eq!(
        scene.writes()[7].1,
        Offset {
            top: 520.0,
            left: 100.0
        }
    );
}

#[test]
fn collapsed_anchor_is_skipped() {
    let mut scene = make_scene(800.0, 600.0, example_anchor(), (200.0, 40.0));
    scene.set_expanded(ANCHOR, false).unwrap();
    let mut pos = dropdown(PlacementConfig::default());

    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    assert_eq!(outcome, Outcome::Skipped);
    assert!(outcome.placed().is_none());
    assert!(scene.writes().is_empty());
}

#[test]
fn allow_overlap_applies_configured_placement() {
    let mut scene = make_scene(800.0, 540.0, example_anchor(), (200.0, 40.0));
    let mut pos = dropdown(PlacementConfig {
        allow_overlap: true,
        allow_bottom_overlap: false,
        ..Default::default()
    });

    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    match outcome {
        Outcome::Fixed(placed) => {
            assert_eq!(placed.placement, placement(Position::Bottom, Alignment::Left));
            assert_eq!(placed.attempts, 0);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(scene.writes().len(), 1);
    assert_eq!(outcome.overlap(), None);
}

#[test]
fn bounding_container_replaces_viewport() {
    let mut scene = make_scene(800.0, 600.0, example_anchor(), (200.0, 40.0))
        .with_element(BOX, ElementId::DOCUMENT, Rect::new(0.0, 0.0, 400.0, 550.0))
        .unwrap();
    let mut pos = dropdown(PlacementConfig {
        allow_bottom_overlap: false,
        ..Default::default()
    });

    // Inside the viewport, but the box ends at 550.
    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, Some(BOX)).unwrap();
    assert_ne!(pos.position(), Position::Bottom);
    assert!(matches!(outcome, Outcome::Fit(_)));
}

#[test]
fn rtl_dropdown_aligns_right() {
    let pos = dropdown(PlacementConfig {
        direction: Direction::Rtl,
        ..Default::default()
    });
    assert_eq!(pos.original(), placement(Position::Bottom, Alignment::Right));

    let side = dropdown(PlacementConfig {
        position: PositionSetting::Left,
        ..Default::default()
    });
    assert_eq!(side.original(), placement(Position::Left, Alignment::Bottom));
}

#[test]
fn tooltip_adds_nub_to_attached_axis() {
    let mut scene = make_scene(800.0, 600.0, example_anchor(), (60.0, 30.0));
    let config = PlacementConfig {
        v_offset: 2.0,
        nub: Nub { w: 8.0, h: 10.0 },
        ..Default::default()
    };
    let mut pos = Positioner::configure(&config, Profile::TOOLTIP).unwrap();
    assert_eq!(pos.original(), placement(Position::Top, Alignment::Center));
    assert_eq!(pos.gaps(Position::Top).vertical, 12.0);
    assert_eq!(pos.gaps(Position::Top).horizontal, 0.0);
    assert_eq!(pos.gaps(Position::Left).horizontal, 8.0);
    assert_eq!(pos.gaps(Position::Left).vertical, 2.0);

    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    let placed = outcome.placed().unwrap();
    assert_eq!(
        placed.offset,
        Offset {
            top: 500.0 - 30.0 - 12.0,
            left: 125.0 - 30.0
        }
    );
}

#[test]
fn scrolled_viewport_moves_bounds() {
    let mut scene = make_scene(800.0, 600.0, Rect::new(100.0, 1500.0, 50.0, 20.0), (200.0, 40.0));
    scene.scroll_to(0.0, 1000.0);
    let mut pos = dropdown(PlacementConfig {
        allow_bottom_overlap: false,
        ..Default::default()
    });
    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    assert!(matches!(outcome, Outcome::Fit(p) if p.attempts == 1));
    assert_eq!(scene.rect(FLOATING), Some(Rect::new(100.0, 1520.0, 200.0, 40.0)));
}

#[test]
fn degenerate_elements_are_errors() {
    let mut scene = make_scene(800.0, 600.0, example_anchor(), (0.0, 40.0));
    let mut pos = dropdown(PlacementConfig::default());
    assert_eq!(
        pos.place(&mut scene, ANCHOR, FLOATING, None),
        Err(Error::Degenerate {
            element: FLOATING,
            role: Role::Floating
        })
    );

    let mut scene = make_scene(800.0, 600.0, Rect::new(10.0, 10.0, 50.0, 0.0), (20.0, 40.0));
    assert!(matches!(
        pos.place(&mut scene, ANCHOR, FLOATING, None),
        Err(Error::Degenerate {
            role: Role::Anchor,
            ..
        })
    ));
    assert!(scene.writes().is_empty());
}

#[test]
fn unknown_elements_surface_geometry_errors() {
    let mut scene = make_scene(800.0, 600.0, example_anchor(), (200.0, 40.0));
    let mut pos = dropdown(PlacementConfig::default());
    let err = pos
        .place(&mut scene, ANCHOR, ElementId(99), None)
        .unwrap_err();
    assert!(matches!(err, Error::Geometry(_)), "{:?}", err);
    assert!(scene.bounding_rect(ElementId(99)).is_err());
}

#[test]
fn explicit_illegal_alignment_is_rejected() {
    let config = PlacementConfig {
        position: PositionSetting::Left,
        alignment: AlignmentSetting::Left,
        ..Default::default()
    };
    assert!(matches!(
        Positioner::configure(&config, Profile::DROPDOWN),
        Err(Error::Config(_))
    ));

    // An explicit alignment that does not suit the profile's default position.
    let config = PlacementConfig {
        alignment: AlignmentSetting::Top,
        ..Default::default()
    };
    assert!(matches!(
        Positioner::configure(&config, Profile::DROPDOWN),
        Err(Error::Geometry(perch_geom::Error::IllegalAlignment { .. }))
    ));
}

#[test]
fn flush_candidate_fits_under_fractional_scroll() {
    let (fw, fh) = (120.628, 101.964);
    let mut scene = Scene::new(Viewport {
        width: 465.213,
        height: 370.731,
        scroll_x: 2.248_142_857_142_857,
        scroll_y: 202.158,
    })
    .with_document_size(1000.0, 1000.0);
    let vp = scene.viewport().rect();
    // Bottom/left puts the panel's bottom-right corner on the viewport's.
    let anchor = Rect::new(vp.right() - fw, vp.bottom() - fh - 20.0, 30.0, 20.0);
    scene.insert(ANCHOR, ElementId::DOCUMENT, anchor).unwrap();
    scene
        .insert(FLOATING, ElementId::DOCUMENT, Rect::new(0.0, 0.0, fw, fh))
        .unwrap();
    let mut pos = dropdown(PlacementConfig {
        allow_bottom_overlap: false,
        ..Default::default()
    });

    let dry = pos.candidates(&scene, ANCHOR, FLOATING, None).unwrap();
    let first_fit = dry.iter().position(|c| c.overlap == 0.0);
    let outcome = pos.place(&mut scene, ANCHOR, FLOATING, None).unwrap();
    match outcome {
        Outcome::Fit(placed) => {
            assert_eq!(first_fit, Some(placed.attempts as usize - 1));
            assert_eq!(placed.offset, dry[placed.attempts as usize - 1].offset);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}
