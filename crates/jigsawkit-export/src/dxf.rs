//! DXF output for laser and CNC cutting.
//!
//! Writes the ASCII DXF subset a cutter needs: a header declaring
//! millimeters, a layer table with `CUT` and `BORDER`, and one closed
//! `LWPOLYLINE` per piece plus one for the border. Curves are flattened first.
//! DXF has its origin bottom-left, so Y is flipped against the page height.
//!
//! Tables, records and entities carry handles and subclass markers, with
//! `$HANDSEED` above the last handle, so strict AC1015 readers (ezdxf,
//! LibreCAD, QCAD) accept the file alongside LightBurn and Inkscape. There is
//! no BLOCKS or OBJECTS section.

use crate::options::ExportOptions;
use jigsawkit_camtools::Puzzle;
use jigsawkit_core::{flip_y_to_mm, format_fixed, px_to_mm, Point};
use jigsawkit_path::{Flattener, PathIR};
use tracing::{debug, info};

pub const CUT_LAYER: &str = "CUT";
pub const BORDER_LAYER: &str = "BORDER";

/// `$INSUNITS` value for millimeters.
const UNITS_MILLIMETERS: i32 = 4;
const COORD_DECIMALS: usize = 4;

/// Group-code/value pair writer.
struct DxfWriter {
    out: String,
    next_handle: u32,
}

impl DxfWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            next_handle: 1,
        }
    }

    fn pair(&mut self, code: i32, value: impl std::fmt::Display) -> &mut Self {
        self.out.push_str(&format!("{:>3}\n{}\n", code, value));
        self
    }

    fn coord(&mut self, code: i32, value: f64) -> &mut Self {
        self.pair(code, format_fixed(value, COORD_DECIMALS))
    }

    /// Group 5 with the next free handle, in hex.
    fn handle(&mut self) -> &mut Self {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.pair(5, format!("{:X}", handle))
    }

    /// Append another writer's output, keeping its handles reserved.
    fn append(&mut self, other: DxfWriter) {
        self.out.push_str(&other.out);
        self.next_handle = self.next_handle.max(other.next_handle);
    }

    fn begin_section(&mut self, name: &str) -> &mut Self {
        self.pair(0, "SECTION").pair(2, name)
    }

    fn end_section(&mut self) -> &mut Self {
        self.pair(0, "ENDSEC")
    }

    fn header(&mut self, handle_seed: u32) {
        self.begin_section("HEADER")
            .pair(9, "$ACADVER")
            .pair(1, "AC1015")
            .pair(9, "$HANDSEED")
            .pair(5, format!("{:X}", handle_seed))
            .pair(9, "$INSUNITS")
            .pair(70, UNITS_MILLIMETERS)
            .end_section();
    }

    fn begin_table(&mut self, name: &str, entries: usize) -> &mut Self {
        self.pair(0, "TABLE")
            .pair(2, name)
            .handle()
            .pair(100, "AcDbSymbolTable")
            .pair(70, entries)
    }

    fn begin_record(&mut self, kind: &str, subclass: &str) -> &mut Self {
        self.pair(0, kind)
            .handle()
            .pair(100, "AcDbSymbolTableRecord")
            .pair(100, subclass)
    }

    fn tables(&mut self) {
        self.begin_section("TABLES");

        self.begin_table("LTYPE", 1)
            .begin_record("LTYPE", "AcDbLinetypeTableRecord")
            .pair(2, "CONTINUOUS")
            .pair(70, 0)
            .pair(3, "Solid line")
            .pair(72, 65)
            .pair(73, 0)
            .coord(40, 0.0)
            .pair(0, "ENDTAB");

        self.begin_table("LAYER", 2);
        // Color 7 is white/black, color 1 is red.
        for (name, color) in [(CUT_LAYER, 7), (BORDER_LAYER, 1)] {
            self.begin_record("LAYER", "AcDbLayerTableRecord")
                .pair(2, name)
                .pair(70, 0)
                .pair(62, color)
                .pair(6, "CONTINUOUS");
        }
        self.pair(0, "ENDTAB");

        self.end_section();
    }

    fn lwpolyline(&mut self, layer: &str, vertices: &[Point], page_height_mm: f64) {
        self.pair(0, "LWPOLYLINE")
            .handle()
            .pair(100, "AcDbEntity")
            .pair(8, layer)
            .pair(100, "AcDbPolyline")
            .pair(90, vertices.len())
            .pair(70, 1);
        for p in vertices {
            self.coord(10, px_to_mm(p.x))
                .coord(20, flip_y_to_mm(p.y, page_height_mm));
        }
    }

    fn finish(mut self) -> String {
        self.pair(0, "EOF");
        self.out
    }
}

/// Serialize a puzzle as DXF in millimeters.
pub fn to_dxf(puzzle: &Puzzle, options: &ExportOptions) -> String {
    let flattener = Flattener::new(options.flatten_resolution);
    let page_height_mm = puzzle.page_height_mm();

    // The body is written first so the header can carry the handle seed.
    let mut body = DxfWriter::new();
    body.tables();
    body.begin_section("ENTITIES");

    let write_path = |w: &mut DxfWriter, layer: &str, path: &PathIR| {
        let polyline = flattener.flatten(path);
        let vertices = polyline.vertices();
        debug!(layer, vertices = vertices.len(), "Writing LWPOLYLINE");
        w.lwpolyline(layer, vertices, page_height_mm);
    };

    for piece in &puzzle.pieces {
        write_path(&mut body, CUT_LAYER, &piece.path);
    }
    write_path(&mut body, BORDER_LAYER, &puzzle.border_path);
    body.end_section();

    let mut w = DxfWriter::new();
    w.header(body.next_handle);
    w.append(body);
    let handle_seed = w.next_handle;

    let dxf = w.finish();
    info!(
        entities = puzzle.pieces.len() + 1,
        handle_seed,
        resolution = flattener.resolution(),
        page_height_mm,
        "DXF written"
    );
    dxf
}
