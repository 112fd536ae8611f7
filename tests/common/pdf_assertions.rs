use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};

/// Strings shown with `Tj`, decoded as WinAnsi (Latin-1 for the accented
/// letters used in reports), one list per page.
pub fn page_texts(doc: &LopdfDocument) -> Vec<Vec<String>> {
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let Ok(data) = doc.get_page_content(page_id) else {
                return Vec::new();
            };
            let Ok(content) = Content::decode(&data) else {
                return Vec::new();
            };
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(bytes, _)) => Some(latin1(bytes)),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// A URI link annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct UriLink {
    pub page: usize,
    pub uri: String,
    pub rect: [f32; 4],
}

pub fn extract_uri_links(doc: &LopdfDocument) -> Vec<UriLink> {
    let mut links = Vec::new();
    for (page_num, page_id) in doc.get_pages() {
        let Ok(page) = doc.get_dictionary(page_id) else {
            continue;
        };
        let Ok(annots) = page.get(b"Annots").and_then(Object::as_array) else {
            continue;
        };
        for annot in annots {
            let dict = match annot.as_reference() {
                Ok(id) => doc.get_dictionary(id).ok(),
                Err(_) => annot.as_dict().ok(),
            };
            let Some(dict) = dict else { continue };
            let Ok(action) = dict.get(b"A").and_then(Object::as_dict) else {
                continue;
            };
            let Ok(uri) = action.get(b"URI").and_then(Object::as_str) else {
                continue;
            };
            let rect = dict
                .get(b"Rect")
                .and_then(Object::as_array)
                .map(|arr| {
                    let mut out = [0.0; 4];
                    for (slot, value) in out.iter_mut().zip(arr) {
                        *slot = value.as_float().unwrap_or(0.0);
                    }
                    out
                })
                .unwrap_or([0.0; 4]);
            links.push(UriLink {
                page: page_num as usize,
                uri: String::from_utf8_lossy(uri).into_owned(),
                rect,
            });
        }
    }
    links
}

/// Number of image XObjects in the whole document.
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(Object::as_name)
                .map(|name| name == b"Image")
                .unwrap_or(false)
        })
        .count()
}

/// Info dictionary entry as text. Handles literal and UTF-16BE strings.
pub fn info_entry(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    let bytes = info.get(key).ok()?.as_str().ok()?;
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks(2)
            .map(|pair| u16::from_be_bytes([pair[0], *pair.get(1).unwrap_or(&0)]))
            .collect();
        return String::from_utf16(&units).ok();
    }
    Some(latin1(bytes))
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that some shown string equals `text`.
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let texts = $pdf.all_texts();
        assert!(
            texts.iter().any(|t| t == $text),
            "PDF should contain '{}', but shown strings were:\n{:#?}",
            $text,
            texts
        );
    };
}

/// Assert that no shown string contains `text`.
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let texts = $pdf.all_texts();
        assert!(
            !texts.iter().any(|t| t.contains($text)),
            "PDF should NOT contain '{}', but it was found in:\n{:#?}",
            $text,
            texts
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert every page carries exactly one `Página N` footer with N its position.
#[macro_export]
macro_rules! assert_pdf_footers_sequential {
    ($pdf:expr) => {
        for (index, texts) in $pdf.page_texts().iter().enumerate() {
            let footers: Vec<&String> =
                texts.iter().filter(|t| t.starts_with("Página ")).collect();
            let expected = format!("Página {}", index + 1);
            assert_eq!(
                footers,
                vec![&expected],
                "page {} should have exactly one footer",
                index + 1
            );
        }
    };
}
