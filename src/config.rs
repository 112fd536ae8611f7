use crate::error::ReportError;
use condo_layout::{PageGeometry, PageSize};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REPORT_NAME: &str = "Relatório";
pub const DEFAULT_ORGANIZATION_NAME: &str = "Condomínio";
pub const DEFAULT_MAP_URL_TEMPLATE: &str = "https://staticmap.openstreetmap.de/staticmap.php?center={lat},{lng}&zoom=16&size=520x260&markers={lat},{lng},red-pushpin";

/// Paper size and margin of every page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSettings {
    pub page_size: PageSize,
    pub margin: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin: 40.0,
        }
    }
}

impl LayoutSettings {
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.page_size, self.margin)
    }
}

/// Caller-supplied options for one report.
///
/// Missing values fall back to defaults instead of failing validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    pub report_name: Option<String>,
    pub logo_url: Option<String>,
    pub organization_name_override: Option<String>,
    pub preparer_name: Option<String>,
    pub footer_text: Option<String>,
    pub footer_contact: Option<String>,
    pub include_charts: bool,
    pub include_stats: bool,
    pub base_url: Option<String>,
    /// Static map snapshot URL with `{lat}` and `{lng}` placeholders.
    pub map_url_template: Option<String>,
    pub layout: LayoutSettings,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            report_name: None,
            logo_url: None,
            organization_name_override: None,
            preparer_name: None,
            footer_text: None,
            footer_contact: None,
            include_charts: true,
            include_stats: true,
            base_url: None,
            map_url_template: None,
            layout: LayoutSettings::default(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ReportConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects page settings that leave no room for content.
    pub fn validate(&self) -> Result<(), ReportError> {
        let geometry = self.layout.geometry();
        if self.layout.margin < 0.0 {
            return Err(ReportError::Config("margin must not be negative".into()));
        }
        if geometry.content_width() <= 100.0 || geometry.content_height() <= 100.0 {
            return Err(ReportError::Config(format!(
                "page {}x{} with margin {} leaves no usable content area",
                geometry.width, geometry.height, geometry.margin
            )));
        }
        Ok(())
    }

    pub fn report_title(&self) -> &str {
        non_blank(&self.report_name).unwrap_or(DEFAULT_REPORT_NAME)
    }

    /// Root of section links, without a trailing slash.
    pub fn base_url(&self) -> &str {
        non_blank(&self.base_url)
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn section_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub fn map_url(&self, latitude: f64, longitude: f64) -> String {
        non_blank(&self.map_url_template)
            .unwrap_or(DEFAULT_MAP_URL_TEMPLATE)
            .replace("{lat}", &latitude.to_string())
            .replace("{lng}", &longitude.to_string())
    }

    pub fn preparer(&self) -> Option<&str> {
        non_blank(&self.preparer_name)
    }

    pub fn organization_override(&self) -> Option<&str> {
        non_blank(&self.organization_name_override)
    }

    pub fn logo(&self) -> Option<&str> {
        non_blank(&self.logo_url)
    }

    /// Left footer line: footer text with the contact appended.
    pub fn footer_line(&self, fallback: &str) -> String {
        let text = non_blank(&self.footer_text).unwrap_or(fallback);
        match non_blank(&self.footer_contact) {
            Some(contact) if text.is_empty() => contact.to_string(),
            Some(contact) => format!("{} | {}", text, contact),
            None => text.to_string(),
        }
    }
}
