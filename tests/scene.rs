//! Scene parsing, validation and loading from disk.
use std::fs;
use std::path::PathBuf;

use collision::{EntityKind, Rect, Scene, SceneError, SpriteRect};
use glam::Vec2;
use rstest::rstest;

const TWO_ENTITIES: &str = r#"{
    "entities": [
        { "position": [10.0, 20.0] },
        { "position": [5.0, 10.0], "sprite": { "x": 0, "y": 0, "width": 20, "height": 10 } }
    ]
}"#;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("collision-scene-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write scratch scene");
    path
}

#[test]
fn kinds_survive_into_world() {
    let world = Scene::from_json_str(TWO_ENTITIES)
        .expect("valid scene")
        .into_world();
    let kinds: Vec<_> = world.iter().map(|(_, e)| *e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Dummy,
            EntityKind::Sprite(Rect::from_size(20, 10))
        ]
    );
    let centers: Vec<_> = world.iter().map(|(_, e)| e.center()).collect();
    assert_eq!(centers, vec![Vec2::new(10.0, 20.0), Vec2::new(15.0, 15.0)]);
}

#[test]
fn demo_scene_covers_both_kinds() {
    let world = Scene::demo().into_world();
    let sprites: Vec<_> = world.iter().map(|(_, e)| e.sprite_rect()).collect();
    assert!(sprites.iter().any(SpriteRect::is_unspecialized));
    assert!(sprites.iter().any(|s| !s.is_empty()));
}

#[rstest]
#[case::not_json("entities")]
#[case::missing_entities("{}")]
#[case::short_position(r#"{"entities":[{"position":[1.0]}]}"#)]
#[case::unknown_field(r#"{"entities":[{"position":[0.0,0.0],"velocity":[1.0,1.0]}]}"#)]
#[case::unknown_rect_field(
    r#"{"entities":[{"position":[0.0,0.0],"sprite":{"x":0,"y":0,"width":1,"height":1,"depth":1}}]}"#
)]
fn malformed_documents_fail_to_parse(#[case] text: &str) {
    let err = Scene::from_json_str(text).expect_err("document is invalid");
    assert!(matches!(err, SceneError::Parse(_)), "unexpected error: {err}");
}

#[test]
fn overflowing_position_is_rejected() {
    let text = r#"{"entities":[{"position":[0.0,0.0]},{"position":[1e39,0.0]}]}"#;
    let err = Scene::from_json_str(text).expect_err("position overflows f32");
    assert!(matches!(err, SceneError::NonFinitePosition { index: 1 }));
}

#[test]
fn load_reads_from_disk() {
    let path = scratch_file("two.json", TWO_ENTITIES);
    let loaded = Scene::load(&path);
    fs::remove_file(&path).expect("remove scratch scene");
    if let Some(dir) = path.parent() {
        fs::remove_dir(dir).expect("remove scratch dir");
    }
    assert!(!path.exists());
    let scene = loaded.expect("scene loads");
    assert_eq!(scene.entities.len(), 2);
}

#[test]
fn load_reports_missing_file() {
    let path = std::env::temp_dir().join("collision-scene-does-not-exist.json");
    let err = Scene::load(&path).expect_err("file is missing");
    match err {
        SceneError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
