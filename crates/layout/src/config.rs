use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Paper size of the generated report, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions(&self) -> (f32, f32) {
        match *self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (width, height),
        }
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            other => Err(format!("Unknown page size '{}'", other)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Custom {
            width: f32,
            height: f32,
        }

        match *self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => Custom { width, height }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

/// Fixed page geometry shared by every page of a report.
///
/// All values are points in layout space (origin at the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    pub fn new(size: PageSize, margin: f32) -> Self {
        let (width, height) = size.dimensions();
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn content_left(&self) -> f32 {
        self.margin
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn content_top(&self) -> f32 {
        self.margin
    }

    /// The lowest y a block may reach before a page break is required.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin
    }

    pub fn content_height(&self) -> f32 {
        self.content_bottom() - self.content_top()
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new(PageSize::A4, 40.0)
    }
}
