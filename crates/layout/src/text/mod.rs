mod wrapper;

pub use wrapper::{truncate_to_width, wrap_text};
