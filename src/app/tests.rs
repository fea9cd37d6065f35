use super::*;
use crate::config::{DrawMode, Settings};
use crate::library::Track;
use std::path::PathBuf;

fn t(name: &str) -> Track {
    Track::new(name, format!("img/{name}.png"))
}

fn seeded(mode: DrawMode) -> Settings {
    let mut settings = Settings::default();
    settings.draw.seed = Some(17);
    settings.draw.mode = mode;
    // Fixture paths do not exist; keep the preview out of the way.
    settings.ui.show_image = false;
    settings
}

fn app_with(names: &[&str], mode: DrawMode) -> App {
    let tracks = names.iter().map(|n| t(n)).collect();
    App::new(tracks, PathBuf::from("img"), &seeded(mode))
}

#[test]
fn new_app_takes_toggles_from_settings() {
    let mut settings = seeded(DrawMode::Replace);
    settings.ui.show_used = true;
    settings.ui.show_all = true;

    let app = App::new(vec![t("A")], PathBuf::from("tracks"), &settings);
    assert_eq!(app.mode, DrawMode::Replace);
    assert!(app.show_used);
    assert!(app.show_all);
    assert_eq!(app.library_dir, PathBuf::from("tracks"));
    assert!(app.current().is_none());
    assert!(app.notice.is_none());
}

#[test]
fn draw_in_pool_mode_moves_tracks_to_used() {
    let mut app = app_with(&["A", "B", "C"], DrawMode::Pool);
    assert_eq!(app.status_line(), "Available: 3/3");

    app.draw();
    assert_eq!(app.status_line(), "Available: 2/3");
    assert_eq!(app.pool.used().len(), 1);
    assert_eq!(app.current(), app.pool.used().last());
    assert!(app.notice.is_none());
}

#[test]
fn exhausted_pool_sets_warning_and_reset_recovers() {
    let mut app = app_with(&["A", "B"], DrawMode::Pool);
    app.draw();
    app.draw();
    let last = app.current().cloned();

    app.draw();
    let notice = app.notice.clone().unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(notice.text.contains("reset"));
    assert_eq!(app.pool.used().len(), 2);
    assert_eq!(app.current().cloned(), last);

    app.reset();
    assert_eq!(app.status_line(), "Available: 2/2");
    assert!(app.pool.used().is_empty());
    // The last drawn track stays on screen after a reset.
    assert_eq!(app.current().cloned(), last);
    assert_eq!(app.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Info));
}

#[test]
fn replace_mode_never_exhausts() {
    let mut app = app_with(&["A", "B"], DrawMode::Replace);
    for _ in 0..10 {
        app.draw();
        assert!(app.current().is_some());
        assert!(app.notice.is_none());
    }
    assert!(app.pool.used().is_empty());
    assert_eq!(app.status_line(), "Tracks: 2");
}

#[test]
fn empty_library_disables_draw_and_reset() {
    let mut app = app_with(&[], DrawMode::Pool);
    assert!(!app.has_tracks());

    app.draw();
    assert!(app.current().is_none());
    assert_eq!(app.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Info));

    app.notice = None;
    app.reset();
    assert!(app.notice.is_some());
    assert_eq!(app.status_line(), "Available: 0/0");
}

#[test]
fn same_seed_gives_same_draw_order() {
    let names = ["A", "B", "C", "D", "E"];
    let mut first = app_with(&names, DrawMode::Pool);
    let mut second = app_with(&names, DrawMode::Pool);

    for _ in 0..names.len() {
        first.draw();
        second.draw();
    }
    assert_eq!(first.pool.used(), second.pool.used());
}

#[test]
fn toggles_flip_state() {
    let mut app = app_with(&["A"], DrawMode::Pool);

    app.toggle_used();
    app.toggle_all();
    assert!(app.show_used);
    assert!(app.show_all);

    app.toggle_mode();
    assert_eq!(app.mode, DrawMode::Replace);
    assert!(app.notice.as_ref().unwrap().text.contains("Repeats allowed"));
    app.toggle_mode();
    assert_eq!(app.mode, DrawMode::Pool);
}

#[test]
fn tracks_by_name_sorts_case_insensitive() {
    let app = app_with(&["delta", "Alpha", "charlie", "Bravo"], DrawMode::Pool);
    let names: Vec<&str> = app.tracks_by_name().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "charlie", "delta"]);
}

#[test]
fn draw_loads_preview_when_images_are_shown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Rainbow_Road.png");
    image::RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]))
        .save(&path)
        .unwrap();

    let mut settings = seeded(DrawMode::Pool);
    settings.ui.show_image = true;
    let mut app = App::new(
        vec![Track::new("Rainbow Road", &path)],
        dir.path().to_path_buf(),
        &settings,
    );

    app.draw();
    assert!(app.preview.is_loaded());
}

#[test]
fn toggle_image_clears_and_reloads_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Koopa_Cape.png");
    image::RgbImage::from_pixel(2, 2, image::Rgb([200, 100, 0]))
        .save(&path)
        .unwrap();

    let mut settings = seeded(DrawMode::Pool);
    settings.ui.show_image = true;
    let mut app = App::new(
        vec![Track::new("Koopa Cape", &path)],
        dir.path().to_path_buf(),
        &settings,
    );
    app.draw();
    assert!(app.preview.is_loaded());

    app.toggle_image();
    assert!(!app.show_image);
    assert!(!app.preview.is_loaded());

    app.toggle_image();
    assert!(app.show_image);
    assert!(app.preview.is_loaded());
}
