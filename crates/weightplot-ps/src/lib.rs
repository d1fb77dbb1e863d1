// File: crates/weightplot-ps/src/lib.rs
// Summary: PostScript drawing surface: writes DSC prologue/epilogue and
// renders the core drawing primitives as page-description text.

use std::io::{self, Write};

use weightplot_core::{DrawingSurface, Rgb};

/// Page width of the emitted document, in points.
const PAGE_WIDTH: u32 = 1224;
/// Page height of the emitted document, in points.
const PAGE_HEIGHT: u32 = 792;
/// Font used for value and date labels.
const LABEL_FONT: &str = "Helvetica";
/// Label font size, in points.
const LABEL_FONT_SIZE: u32 = 8;
/// Stroke width for trend and deviation segments.
const LINE_WIDTH: f64 = 0.5;

/// Drawing surface that emits a single-page PostScript document.
///
/// Creation writes the document prologue; [`PostScriptSurface::finish`]
/// writes `showpage` and the trailer and returns the writer. Dropping the
/// surface without finishing leaves the document unterminated, which is
/// what an aborted run should leave behind.
pub struct PostScriptSurface<W: Write> {
    out: W,
}

impl<W: Write> PostScriptSurface<W> {
    /// Create the surface and write the document prologue.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "%!PS-Adobe-3.0")?;
        writeln!(out, "%%Creator: weightplot")?;
        writeln!(out, "%%Pages: 1")?;
        writeln!(out, "%%BoundingBox: 0 0 {PAGE_WIDTH} {PAGE_HEIGHT}")?;
        writeln!(out, "%%EndComments")?;
        writeln!(out, "%%Page: 1 1")?;
        writeln!(out, "/{LABEL_FONT} findfont {LABEL_FONT_SIZE} scalefont setfont")?;
        writeln!(out, "{LINE_WIDTH} setlinewidth")?;
        Ok(Self { out })
    }

    /// Show the page, write the document trailer, flush, and return the
    /// writer. No drawing is permitted afterward.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "showpage")?;
        writeln!(self.out, "%%PageTrailer")?;
        writeln!(self.out, "%%Trailer")?;
        writeln!(self.out, "%%EOF")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> DrawingSurface for PostScriptSurface<W> {
    fn move_to(&mut self, x: f64, y: f64) -> io::Result<()> {
        writeln!(self.out, "newpath {x:.2} {y:.2} moveto")
    }

    fn line_to(&mut self, x: f64, y: f64) -> io::Result<()> {
        writeln!(self.out, "{x:.2} {y:.2} lineto")
    }

    fn close_path(&mut self) -> io::Result<()> {
        writeln!(self.out, "closepath")
    }

    fn set_color(&mut self, color: Rgb) -> io::Result<()> {
        writeln!(self.out, "{} {} {} setrgbcolor", color.r, color.g, color.b)
    }

    fn stroke(&mut self) -> io::Result<()> {
        writeln!(self.out, "stroke")
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)]) -> io::Result<()> {
        let mut points = points.iter();
        let Some((x, y)) = points.next() else {
            return Ok(());
        };
        writeln!(self.out, "newpath {x:.2} {y:.2} moveto")?;
        for (x, y) in points {
            writeln!(self.out, "{x:.2} {y:.2} lineto")?;
        }
        writeln!(self.out, "closepath fill")
    }

    fn draw_arc(&mut self, x: f64, y: f64, radius: f64) -> io::Result<()> {
        writeln!(self.out, "newpath {x:.2} {y:.2} {radius:.2} 0 360 arc closepath fill")
    }

    fn draw_text(&mut self, x: f64, y: f64, rotation: f64, text: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "gsave {x:.2} {y:.2} translate {rotation:.2} rotate 0 0 moveto ({}) show grestore",
            escape_text(text)
        )
    }
}

/// Escape a string for PostScript `(...)` literal syntax.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}
