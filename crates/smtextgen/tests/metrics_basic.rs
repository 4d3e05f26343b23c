use image::Rgba;
use pretty_assertions::assert_eq;
use smtextgen::{
    glyph_file_name,
    test_support::{write_glyph, GlyphDir},
    FontMetrics, GenError, GLYPH_COUNT,
};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[test]
fn file_names_are_zero_padded_decimal() {
    assert_eq!(glyph_file_name(b'A'), "glyph_065.png");
    assert_eq!(glyph_file_name(7), "glyph_007.png");
    assert_eq!(glyph_file_name(127), "glyph_127.png");
}

#[test]
fn table_matches_assets_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    GlyphDir::new(tmp.path())
        .glyph('A', 5, WHITE)
        .unwrap()
        .glyph('!', 2, WHITE)
        .unwrap()
        .glyph('W', 7, WHITE)
        .unwrap();

    let metrics = FontMetrics::load(tmp.path()).unwrap();
    for code in 0..GLYPH_COUNT as u8 {
        let expected = match code {
            b'A' => Some(5),
            b'!' => Some(2),
            b'W' => Some(7),
            _ => None,
        };
        assert_eq!(metrics.width(code), expected, "code {code}");
        assert_eq!(metrics.contains(code), expected.is_some(), "code {code}");
    }
    assert_eq!(metrics.len(), 3);
    assert_eq!(
        metrics.iter().collect::<Vec<_>>(),
        vec![(b'!', 2), (b'A', 5), (b'W', 7)]
    );
}

#[test]
fn unrelated_files_are_ignored() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("README.txt"), "not a glyph").unwrap();
    std::fs::write(tmp.path().join("glyph_65.png"), "wrong padding").unwrap();
    let metrics = FontMetrics::load(tmp.path()).unwrap();
    assert!(metrics.is_empty());
}

#[test]
fn missing_directory_has_no_glyphs() {
    let tmp = tempfile::tempdir().unwrap();
    let metrics = FontMetrics::load(tmp.path().join("nope")).unwrap();
    assert!(metrics.is_empty());
    assert!(!metrics.contains(b'A'));
}

#[test]
fn unreadable_directory_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("font.png");
    std::fs::write(&file, "not a directory").unwrap();
    assert!(matches!(
        FontMetrics::load(&file),
        Err(GenError::Io { .. })
    ));
}

#[test]
#[should_panic(expected = "non-ASCII")]
fn glyph_helper_rejects_non_ascii() {
    let tmp = tempfile::tempdir().unwrap();
    let _ = write_glyph(tmp.path(), 'Ł', 3, WHITE);
}

#[test]
fn glyph_deleted_after_build_fails_to_load() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = GlyphDir::new(tmp.path()).glyph('Z', 3, WHITE).unwrap();
    let metrics = FontMetrics::load(dir.path()).unwrap();
    std::fs::remove_file(metrics.glyph_path(b'Z')).unwrap();
    assert!(metrics.contains(b'Z'));
    assert!(metrics.load_glyph(b'Z').is_err());
}
