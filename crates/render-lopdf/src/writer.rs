use crate::canvas::PageCanvas;
use crate::encoding::pdf_text_string;
use crate::error::RenderError;
use condo_layout::fonts::FontFace;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

/// Values written to the document Info dictionary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub producer: String,
}

/// An in-memory PDF writer using the `lopdf` library.
/// It builds the document's object graph page by page and serializes it at the end.
pub struct PdfWriter {
    document: Document,
    pages_id: ObjectId,
    fonts_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl PdfWriter {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut fonts = Dictionary::new();
        for face in FontFace::all() {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        let fonts_id = document.add_object(fonts);

        Self {
            document,
            pages_id,
            fonts_id,
            page_ids: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Turns a finished canvas into a page object appended to the document.
    pub fn add_page(&mut self, canvas: PageCanvas) -> Result<ObjectId, RenderError> {
        let (width, height) = (canvas.width(), canvas.height());
        let link_rects: Vec<_> = canvas
            .links()
            .iter()
            .map(|link| (canvas.pdf_rect(link.rect), link.uri.clone()))
            .collect();
        let (content, images, _) = canvas.into_parts();

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content.encode()?)?;
        let compressed_content = encoder.finish()?;
        let content_id = self.document.add_object(Stream::new(
            dictionary! {"Filter" => "FlateDecode"},
            compressed_content,
        ));

        let mut resources = dictionary! { "Font" => self.fonts_id };
        if !images.is_empty() {
            let mut xobjects = Dictionary::new();
            for placed in &images {
                let image = &placed.image;
                let stream = Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => image.width as i64,
                        "Height" => image.height as i64,
                        "ColorSpace" => "DeviceRGB",
                        "BitsPerComponent" => 8,
                        "Filter" => "FlateDecode",
                    },
                    image.compressed().to_vec(),
                );
                let image_id = self.document.add_object(stream);
                xobjects.set(placed.name.as_str(), image_id);
            }
            resources.set("XObject", xobjects);
        }

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => resources,
        };

        if !link_rects.is_empty() {
            let annotations = link_rects
                .into_iter()
                .map(|(rect, uri)| {
                    let id = self.document.add_object(dictionary! {
                        "Type" => "Annot",
                        "Subtype" => "Link",
                        "Rect" => rect,
                        "Border" => vec![0.into(), 0.into(), 0.into()],
                        "A" => dictionary! {
                            "S" => "URI",
                            "URI" => Object::string_literal(uri),
                        },
                    });
                    Object::Reference(id)
                })
                .collect::<Vec<_>>();
            page_dict.set("Annots", annotations);
        }

        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    /// Links the page tree, catalog and Info dictionary and serializes the document.
    pub fn finish(mut self, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
        if self.page_ids.is_empty() {
            return Err(RenderError::Other("Document has no pages".into()));
        }

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        let info_id = self.document.add_object(dictionary! {
            "Title" => pdf_text_string(&info.title),
            "Author" => pdf_text_string(&info.author),
            "Producer" => pdf_text_string(&info.producer),
        });
        self.document.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        self.document.save_to(&mut bytes)?;
        log::debug!(
            "Serialized PDF with {} pages ({} bytes)",
            self.page_ids.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
