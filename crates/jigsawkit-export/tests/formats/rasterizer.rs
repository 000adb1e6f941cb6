use jigsawkit_camtools::{PieceStyle, PuzzleLayoutEngine, PuzzleParameters};
use jigsawkit_export::{rasterize_puzzle, ExportOptions, Rasterizer};
use std::cell::RefCell;
use std::fmt;

#[derive(Debug)]
struct RenderError;

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "renderer unavailable")
    }
}

impl std::error::Error for RenderError {}

/// Records its request and returns a blank RGBA buffer.
#[derive(Default)]
struct RecordingRasterizer {
    seen: RefCell<Option<(String, u32, u32, f64)>>,
    fail: bool,
}

impl Rasterizer for RecordingRasterizer {
    type Bitmap = Vec<u8>;
    type Error = RenderError;

    fn rasterize(
        &self,
        document: &str,
        pixel_width: u32,
        pixel_height: u32,
        scale: f64,
    ) -> Result<Vec<u8>, RenderError> {
        if self.fail {
            return Err(RenderError);
        }
        *self.seen.borrow_mut() = Some((document.to_string(), pixel_width, pixel_height, scale));
        Ok(vec![0; (pixel_width * pixel_height * 4) as usize])
    }
}

fn puzzle() -> jigsawkit_camtools::Puzzle {
    PuzzleLayoutEngine::new(PuzzleParameters {
        piece_style: PieceStyle::Grid,
        columns: 2,
        rows: 2,
        width: 200.0,
        height: 100.0,
        margin: 5.0,
        seed: Some(9),
        ..PuzzleParameters::default()
    })
    .unwrap()
    .layout()
}

#[test]
fn test_rasterizer_receives_print_document() {
    let rasterizer = RecordingRasterizer::default();
    let options = ExportOptions {
        fill: Some("photo.png".to_string()),
        ..ExportOptions::default()
    };
    let bitmap = rasterize_puzzle(&rasterizer, &puzzle(), &options, 0.5).unwrap();
    assert_eq!(bitmap.len(), 100 * 50 * 4);

    let seen = rasterizer.seen.borrow();
    let (document, w, h, scale) = seen.as_ref().unwrap();
    assert_eq!((*w, *h, *scale), (100, 50, 0.5));
    assert!(document.contains("photo.png"));
    assert!(document.starts_with("<?xml"));
}

#[test]
fn test_rasterizer_errors_pass_through() {
    let rasterizer = RecordingRasterizer {
        fail: true,
        ..RecordingRasterizer::default()
    };
    let err = rasterize_puzzle(&rasterizer, &puzzle(), &ExportOptions::default(), 1.0).unwrap_err();
    assert_eq!(err.to_string(), "renderer unavailable");
}
