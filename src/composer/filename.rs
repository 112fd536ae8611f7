use chrono::NaiveDateTime;

/// Lowercase, accent-folded, underscore-separated report name.
pub fn slugify_report_name(name: &str) -> String {
    let slug = slug::slugify(name).replace('-', "_");
    if slug.is_empty() {
        "relatorio".to_string()
    } else {
        slug
    }
}

/// `{slug}_{YYYY-MM-DD}.pdf`, dated by the generation timestamp.
pub fn report_filename(report_name: &str, generated_at: &NaiveDateTime) -> String {
    format!(
        "{}_{}.pdf",
        slugify_report_name(report_name),
        generated_at.format("%Y-%m-%d")
    )
}
