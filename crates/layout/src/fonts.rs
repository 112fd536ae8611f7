//! Metrics for the standard-14 Helvetica faces.
//!
//! Reports only use the built-in Type1 Helvetica family, so text measurement
//! does not need font files: advance widths come from the published AFM
//! tables (units of 1/1000 em). Accented Latin-1 letters share the width of
//! their base letter; anything else falls back to an average glyph.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
}

impl FontFace {
    pub fn postscript_name(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name used inside page content streams.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }

    pub fn all() -> [FontFace; 2] {
        [FontFace::Regular, FontFace::Bold]
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            FontFace::Regular => &HELVETICA_WIDTHS,
            FontFace::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

const FALLBACK_WIDTH: u16 = 556;

// ASCII 32..=126
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Maps accented Latin-1 letters onto the ASCII letter with the same advance.
fn base_letter(c: char) -> char {
    match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        '\u{2013}' => '-',
        '\u{2018}' | '\u{2019}' => '\'',
        '\u{00A0}' => ' ',
        other => other,
    }
}

/// Advance width of one character in 1/1000 em.
pub fn char_width(c: char, face: FontFace) -> u16 {
    let c = base_letter(c);
    match c as u32 {
        code @ 32..=126 => face.widths()[(code - 32) as usize],
        0x2014 => 1000,
        0x2022 => 350,
        0x2026 => 1000,
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` in points when set in `face` at `size` points.
pub fn measure_text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c, face) as u32).sum();
    units as f32 * size / 1000.0
}

/// Recommended distance between baselines for a given font size.
pub fn line_height(size: f32) -> f32 {
    size * 1.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_widths_match_afm() {
        assert_eq!(char_width(' ', FontFace::Regular), 278);
        assert_eq!(char_width('W', FontFace::Regular), 944);
        assert_eq!(char_width('i', FontFace::Regular), 222);
        assert_eq!(char_width('i', FontFace::Bold), 278);
        assert_eq!(char_width('~', FontFace::Bold), 584);
    }

    #[test]
    fn accented_letters_use_base_width() {
        assert_eq!(char_width('Ç', FontFace::Bold), char_width('C', FontFace::Bold));
        assert_eq!(char_width('õ', FontFace::Regular), char_width('o', FontFace::Regular));
    }

    #[test]
    fn measures_text_in_points() {
        // "ab" = 556 + 556 units at 10pt.
        assert!((measure_text_width("ab", FontFace::Regular, 10.0) - 11.12).abs() < 0.001);
        assert_eq!(measure_text_width("", FontFace::Bold, 12.0), 0.0);
    }

    #[test]
    fn bold_is_never_narrower() {
        let text = "Manutenções do bloco B";
        assert!(
            measure_text_width(text, FontFace::Bold, 10.0)
                >= measure_text_width(text, FontFace::Regular, 10.0)
        );
    }
}
