use std::{fs, path::PathBuf};

use perch_geom::Direction;

use crate::{
    AlignmentSetting, Error, Nub, PlacementConfig, PositionSetting, RawPlacement, from_ron,
    from_ron_str, load_from_path,
};

#[test]
fn empty_config_uses_defaults() {
    let cfg = from_ron_str("()").unwrap();
    assert_eq!(cfg, PlacementConfig::default());
    assert_eq!(cfg.position, PositionSetting::Auto);
    assert_eq!(cfg.alignment, AlignmentSetting::Auto);
    assert!(!cfg.allow_overlap);
    assert!(cfg.allow_bottom_overlap);
}

#[test]
fn parses_every_field() {
    let cfg = from_ron_str(
        "(position: left, alignment: center, allow_overlap: true, \
         allow_bottom_overlap: false, v_offset: 4.0, h_offset: 2.5, \
         direction: rtl, nub: (w: 12.0, h: 12.0))",
    )
    .unwrap();
    assert_eq!(
        cfg,
        PlacementConfig {
            position: PositionSetting::Left,
            alignment: AlignmentSetting::Center,
            allow_overlap: true,
            allow_bottom_overlap: false,
            v_offset: 4.0,
            h_offset: 2.5,
            direction: Direction::Rtl,
            nub: Nub { w: 12.0, h: 12.0 },
        }
    );
}

#[test]
fn rejects_unknown_fields() {
    let err = from_ron_str("(positon: top)").unwrap_err();
    match err {
        Error::Parse { line, .. } => assert_eq!(line, 1),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_illegal_alignment_for_explicit_position() {
    let err = from_ron_str("(position: top, alignment: bottom)").unwrap_err();
    assert!(matches!(err, Error::Validation { .. }), "{:?}", err);
    assert!(err.to_string().contains("not valid for position 'top'"));
}

#[test]
fn auto_position_defers_alignment_check() {
    // The default position is only known to the widget, so this cannot be
    // rejected here.
    let cfg = from_ron_str("(alignment: top)").unwrap();
    assert_eq!(cfg.alignment.explicit(), Some(perch_geom::Alignment::Top));
    assert_eq!(cfg.position.explicit(), None);
}

#[test]
fn rejects_negative_nub() {
    let err = from_ron_str("(nub: (w: -1.0, h: 0.0))").unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn merge_prefers_overlay() {
    let base: RawPlacement = from_ron("(position: bottom, v_offset: 1.0)").unwrap();
    let overlay: RawPlacement = from_ron("(v_offset: 8.0, direction: rtl)").unwrap();
    let cfg = overlay.merged_over(base).resolve().unwrap();
    assert_eq!(cfg.position, PositionSetting::Bottom);
    assert_eq!(cfg.v_offset, 8.0);
    assert_eq!(cfg.direction, Direction::Rtl);
}

#[test]
fn load_from_path_checks_extension_and_attaches_path() {
    let dir = std::env::temp_dir().join(format!("perch-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let txt = dir.join("placement.txt");
    fs::write(&txt, "()").unwrap();
    assert!(matches!(load_from_path(&txt), Err(Error::Read { .. })));

    let bad = dir.join("bad.ron");
    fs::write(&bad, "(position: top, alignment: top)").unwrap();
    match load_from_path(&bad) {
        Err(Error::Validation { path, .. }) => assert_eq!(path, Some(bad.clone())),
        other => panic!("unexpected: {:?}", other),
    }

    let good = dir.join("good.ron");
    fs::write(&good, "(position: right, h_offset: 6.0)").unwrap();
    let cfg = load_from_path(&good).unwrap();
    assert_eq!(cfg.position, PositionSetting::Right);
    assert_eq!(cfg.h_offset, 6.0);

    let missing: PathBuf = dir.join("missing.ron");
    assert!(matches!(load_from_path(&missing), Err(Error::Read { .. })));

    fs::remove_dir_all(&dir).ok();
}
