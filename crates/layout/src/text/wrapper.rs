use crate::fonts::{measure_text_width, FontFace};

/// Greedy word wrapping for single-face text.
///
/// Explicit newlines always start a new line; blank lines are preserved.
/// A word wider than `max_width` on its own is broken between characters.
pub fn wrap_text(text: &str, face: FontFace, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    if max_width <= 0.0 {
        return lines;
    }

    let space_width = measure_text_width(" ", face, size);
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = measure_text_width(word, face, size);

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut pieces = break_word(word, face, size, max_width);
                let last = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                current_width = measure_text_width(&last, face, size);
                current = last;
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space_width + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = word_width;
            }
        }
        lines.push(current);
    }

    // Drop trailing blank lines produced by a trailing newline.
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

fn break_word(word: &str, face: FontFace, size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        let mut candidate = current.clone();
        candidate.push(c);
        if !current.is_empty() && measure_text_width(&candidate, face, size) > max_width {
            pieces.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Shortens `text` to fit `max_width`, ending with an ellipsis when cut.
pub fn truncate_to_width(text: &str, face: FontFace, size: f32, max_width: f32) -> String {
    if measure_text_width(text, face, size) <= max_width {
        return text.to_string();
    }
    let ellipsis = "...";
    let budget = max_width - measure_text_width(ellipsis, face, size);
    let mut out = String::new();
    for c in text.chars() {
        out.push(c);
        if measure_text_width(&out, face, size) > budget {
            out.pop();
            break;
        }
    }
    format!("{}{}", out.trim_end(), ellipsis)
}
