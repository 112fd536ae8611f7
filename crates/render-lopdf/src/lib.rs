//! PDF output for condominium reports using lopdf.
//!
//! Layout code draws onto a [`PageCanvas`] in top-left-origin coordinates;
//! the [`PdfWriter`] turns finished canvases into pages of one document with
//! the built-in Helvetica faces, embedded images and URI link annotations.

mod canvas;
mod encoding;
mod error;
mod image_data;
mod writer;

pub use canvas::{LinkAnnotation, PageCanvas, TextAlign, TextStyle};
pub use encoding::{pdf_text_string, to_win_ansi};
pub use error::RenderError;
pub use image_data::{ImageData, ImageDecodeError};
pub use writer::{DocumentInfo, PdfWriter};
