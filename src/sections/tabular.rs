use super::columns::columns_for;
use super::table::{Table, TableRow};
use super::SectionRenderer;
use crate::context::{BlockKind, ReportContext};
use crate::error::ReportError;
use crate::model::{Category, RecordItem};
use crate::theme;
use condo_layout::line_height;

/// One table per category; each row's title cell links to the category's
/// dashboard page.
#[derive(Debug, Default)]
pub struct TableRenderer {
    caption: bool,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds "Clique no título para abrir a seção ..." under the table.
    pub fn with_caption() -> Self {
        Self { caption: true }
    }
}

pub fn caption_text(category: Category) -> String {
    format!("Clique no título para abrir a seção {}", category.label())
}

impl SectionRenderer for TableRenderer {
    fn render_records(
        &self,
        ctx: &mut ReportContext<'_>,
        category: Category,
        items: &[RecordItem],
    ) -> Result<(), ReportError> {
        let columns = columns_for(category);
        let url = ctx.config().section_url(category.path());
        let rows: Vec<TableRow> = items
            .iter()
            .map(|item| TableRow {
                cells: columns.iter().map(|c| c.field.value(item)).collect(),
                link: Some(url.clone()),
            })
            .collect();

        let table = Table {
            headers: columns.iter().map(|c| c.field.header()).collect(),
            widths: columns.iter().map(|c| c.width).collect(),
            accent: category.color(),
        };
        table.draw(ctx, &rows)?;

        if self.caption {
            let style = theme::small();
            ctx.gap(3.0);
            let y = ctx.place(BlockKind::Caption, line_height(style.size));
            let x = ctx.left();
            ctx.text_line(x, y, &caption_text(category), style);
        }
        ctx.gap(theme::SECTION_GAP);
        Ok(())
    }
}
