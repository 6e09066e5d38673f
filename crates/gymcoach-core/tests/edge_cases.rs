//! Edge case and boundary condition tests
//!
//! Unusual inputs across upload validation, sessions and configuration.

use gymcoach_core::scroll_stack::ScrollProgress;
use gymcoach_core::upload::{accept_drop, MediaFile, MediaKind};
use gymcoach_core::{Coach, CoachConfig, CoachError, StackConfig, StackLayout};
use tempfile::TempDir;

// ============================================================================
// Upload Validation
// ============================================================================

/// MIME checks ignore case and surrounding whitespace
#[test]
fn test_mime_case_insensitive() {
    assert!(MediaKind::Video.accepts_mime("VIDEO/MP4"));
    assert!(MediaKind::Video.accepts_mime(" video/quicktime "));
    assert!(MediaKind::Image.accepts_mime("Image/JPEG"));
}

/// A dropped file with no MIME type is refused
#[test]
fn test_drop_without_mime() {
    let files = vec![MediaFile::new("clip", "", vec![0u8; 4])];
    assert!(accept_drop(MediaKind::Video, files.clone()).is_none());
    assert!(accept_drop(MediaKind::Image, files).is_none());
}

/// Opening a path that does not exist is an I/O error
#[test]
fn test_open_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = MediaFile::open(dir.path().join("nope.mp4")).unwrap_err();
    assert!(matches!(err, CoachError::Io(_)));
}

/// Empty files are accepted locally; the server decides what to do with them
#[test]
fn test_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.mp4");
    std::fs::write(&path, b"").unwrap();

    let file = MediaFile::open_as(&path, MediaKind::Video).unwrap();
    assert!(file.is_empty());
    assert_eq!(file.display_size(), "0.0 MB");
}

/// Unknown extensions fall back to a generic type and are refused
#[test]
fn test_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clip.xyz");
    std::fs::write(&path, b"data").unwrap();

    let err = MediaFile::open_as(&path, MediaKind::Video).unwrap_err();
    assert!(matches!(err, CoachError::UnsupportedMedia { .. }));
}

// ============================================================================
// Scroll Progress
// ============================================================================

#[test]
fn test_degenerate_viewports() {
    assert_eq!(ScrollProgress::from_viewport(10.0, 0.0, 0.0), ScrollProgress::START);
    assert_eq!(ScrollProgress::from_viewport(10.0, 100.0, 400.0), ScrollProgress::START);
    assert_eq!(ScrollProgress::from_viewport(-50.0, 800.0, 200.0), ScrollProgress::START);
    assert_eq!(
        ScrollProgress::from_viewport(f64::INFINITY, 800.0, 200.0),
        ScrollProgress::END
    );
}

/// A zero step flattens the stack: nothing shrinks
#[test]
fn test_zero_step() {
    let layout = StackLayout::new(5, StackConfig::default().with_shrink_step(0.0));
    assert!(layout.scales(1.0).iter().all(|s| *s == 1.0));
}

// ============================================================================
// Coach Setup
// ============================================================================

/// Invalid configuration is rejected before storage is touched
#[test]
fn test_invalid_config_rejected() {
    let dir = TempDir::new().unwrap();
    let mut config = CoachConfig::default();
    config.stack = config.stack.with_shrink_step(-1.0);

    assert!(Coach::new(dir.path().join("data"), config).is_err());
    assert!(!dir.path().join("data").exists());
}

/// The data directory is created on first use
#[test]
fn test_nested_data_dir_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let coach = Coach::new(&nested, CoachConfig::default()).unwrap();
    assert!(nested.exists());
    assert!(coach.history().unwrap().is_empty());
}

/// Logging out when nobody is logged in is harmless
#[test]
fn test_logout_when_logged_out() {
    let dir = TempDir::new().unwrap();
    let coach = Coach::new(dir.path(), CoachConfig::default()).unwrap();
    coach.logout().unwrap();
    assert!(!coach.session().is_logged_in());
}
