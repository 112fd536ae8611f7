pub mod color;
pub mod geometry;
pub mod uri;

pub use color::Color;
pub use geometry::{Rect, Size};
pub use uri::ResourceUri;
