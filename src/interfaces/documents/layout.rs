//! Page layout for exported documents.
//!
//! Documents are written as A4 portrait PDFs, one text line per layout line.
//! Content that does not fit on one page continues on the next.

use crate::error::{FeeError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};

/// A4 portrait, in millimetres.
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

const LAYER_NAME: &str = "Layer 1";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Applied on every side.
    pub margin_mm: f32,
    pub line_height_mm: f32,
    pub font_size_pt: f32,
}

impl PageLayout {
    pub fn a4_portrait() -> Self {
        Self {
            width_mm: A4_WIDTH_MM,
            height_mm: A4_HEIGHT_MM,
            margin_mm: 15.0,
            line_height_mm: 6.0,
            font_size_pt: 10.0,
        }
    }

    /// How many text lines fit between the margins. Never less than one.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.height_mm - 2.0 * self.margin_mm;
        ((usable / self.line_height_mm).floor() as usize).max(1)
    }

    /// Splits rendered lines into pages.
    pub fn paginate<'a>(&self, lines: &'a [String]) -> Vec<&'a [String]> {
        if lines.is_empty() {
            return vec![&[]];
        }
        lines.chunks(self.lines_per_page()).collect()
    }

    /// Lays `lines` out on as many pages as they need and returns the PDF bytes.
    pub fn render_pdf(&self, title: &str, lines: &[String]) -> Result<Vec<u8>> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(title, Mm(self.width_mm), Mm(self.height_mm), LAYER_NAME);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;

        for (index, page) in self.paginate(lines).into_iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(self.width_mm), Mm(self.height_mm), LAYER_NAME)
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            for (row, line) in page.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let y = self.height_mm - self.margin_mm - self.line_height_mm * (row as f32 + 1.0);
                layer.use_text(
                    pdf_text(line),
                    self.font_size_pt,
                    Mm(self.margin_mm),
                    Mm(y),
                    &font,
                );
            }
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4_portrait()
    }
}

/// The built-in PDF fonts have no rupee glyph.
fn pdf_text(line: &str) -> String {
    line.replace('₹', "Rs. ")
}

fn pdf_error(e: printpdf::Error) -> FeeError {
    FeeError::Document(e.to_string())
}
