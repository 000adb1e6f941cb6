use jigsawkit::{generate, ExportFormat, GeneratorConfig, PieceStyle, PuzzleForm};
use tempfile::TempDir;

fn seeded() -> GeneratorConfig {
    let mut config = GeneratorConfig::new();
    config.puzzle.seed = Some(77);
    config
}

#[test]
fn test_generate_every_format() {
    let config = seeded();
    let (puzzle, svg) = generate(&config, None, ExportFormat::PrintSvg).unwrap();
    assert_eq!(puzzle.pieces.len(), 12);
    assert!(svg.contains("<svg"));

    let (_, cut) = generate(&config, None, ExportFormat::CutSvg).unwrap();
    assert!(cut.contains("#ff0000"));

    let (_, dxf) = generate(&config, None, ExportFormat::Dxf).unwrap();
    assert_eq!(dxf.matches("LWPOLYLINE").count(), 13);

    let (_, json) = generate(&config, None, ExportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["seed"], 77);
}

#[test]
fn test_same_seed_same_document() {
    let config = seeded();
    let (_, a) = generate(&config, None, ExportFormat::Dxf).unwrap();
    let (_, b) = generate(&config, None, ExportFormat::Dxf).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_aspect_reorients_grid() {
    let config = seeded();
    let (puzzle, _) = generate(&config, Some(0.5), ExportFormat::Json).unwrap();
    assert_eq!((puzzle.cols, puzzle.rows), (3, 4));
}

#[test]
fn test_invalid_parameters_reported() {
    let mut config = seeded();
    config.puzzle.columns = 0;
    let err = generate(&config, None, ExportFormat::PrintSvg).unwrap_err();
    assert_eq!(err.to_string(), "Invalid puzzle parameters");
}

#[test]
fn test_generate_from_saved_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = seeded();
    config.puzzle.form = PuzzleForm::Circular;
    config.puzzle.piece_style = PieceStyle::Classic;
    config.puzzle.columns = 6;
    config.puzzle.rows = 2;
    config.puzzle.width = 400.0;
    config.puzzle.height = 400.0;
    config.save_to_file(&path).unwrap();

    let loaded = GeneratorConfig::load_from_file(&path).unwrap();
    let (puzzle, svg) = generate(&loaded, None, ExportFormat::CutSvg).unwrap();
    assert_eq!(puzzle.pieces.len(), 12);
    assert_eq!(svg.matches("<path ").count(), 13);
}
