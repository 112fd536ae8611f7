//! Fixed column layouts of the tabular sections.

use crate::model::{dates, Category, RecordItem};
use crate::status::humanize_status;
use condo_layout::ColumnWidth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Name,
    Protocol,
    Status,
    Priority,
    Responsible,
    Location,
    Category,
    Author,
    Unit,
    Block,
    Role,
    Phone,
    Email,
    Url,
    Price,
    Origin,
    Destination,
    CreatedAt,
    DueDate,
    Description,
    Checklist,
    Votes,
}

/// Placeholder for empty cells.
pub const EMPTY_CELL: &str = "-";

impl Field {
    pub fn header(self) -> &'static str {
        match self {
            Field::Title => "Título",
            Field::Name => "Nome",
            Field::Protocol => "Protocolo",
            Field::Status => "Status",
            Field::Priority => "Prioridade",
            Field::Responsible => "Responsável",
            Field::Location => "Local",
            Field::Category => "Categoria",
            Field::Author => "Autor",
            Field::Unit => "Unidade",
            Field::Block => "Bloco",
            Field::Role => "Cargo",
            Field::Phone => "Telefone",
            Field::Email => "E-mail",
            Field::Url => "Endereço",
            Field::Price => "Valor",
            Field::Origin => "Origem",
            Field::Destination => "Destino",
            Field::CreatedAt => "Data",
            Field::DueDate => "Prazo",
            Field::Description => "Descrição",
            Field::Checklist => "Itens",
            Field::Votes => "Votos",
        }
    }

    pub fn value(self, item: &RecordItem) -> String {
        let text = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let value = match self {
            Field::Title | Field::Name => Some(item.display_title().to_string()),
            Field::Protocol => text(&item.protocol),
            Field::Status => text(&item.status).map(|s| humanize_status(&s)),
            Field::Priority => text(&item.priority).map(|s| humanize_status(&s)),
            Field::Responsible => text(&item.responsible),
            Field::Location => text(&item.location),
            Field::Category => text(&item.category),
            Field::Author => text(&item.author),
            Field::Unit => text(&item.unit),
            Field::Block => text(&item.block),
            Field::Role => text(&item.role),
            Field::Phone => text(&item.phone),
            Field::Email => text(&item.email),
            Field::Url => text(&item.url),
            Field::Price => item.price.map(format_currency),
            Field::Origin => text(&item.origin),
            Field::Destination => text(&item.destination),
            Field::CreatedAt => item.created_at.as_ref().map(dates::format_date),
            Field::DueDate => item.due_date.as_ref().map(dates::format_date),
            Field::Description => text(&item.description),
            Field::Checklist => match item.checklist_progress() {
                (_, 0) => None,
                (done, total) => Some(format!("{}/{}", done, total)),
            },
            Field::Votes => Some(item.vote_total().to_string()),
        };
        value.unwrap_or_else(|| EMPTY_CELL.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub field: Field,
    pub width: ColumnWidth,
}

const fn col(field: Field, weight: f32) -> ColumnSpec {
    ColumnSpec {
        field,
        width: ColumnWidth::Weight(weight),
    }
}

/// Columns of a category's table. The first column is the linked title cell.
pub fn columns_for(category: Category) -> Vec<ColumnSpec> {
    use Field as F;
    match category {
        Category::Manutencoes => vec![col(F::Title, 3.0), col(F::Protocol, 2.0), col(F::Status, 1.5), col(F::Priority, 1.2), col(F::Responsible, 1.8), col(F::CreatedAt, 1.2)],
        Category::Ocorrencias => vec![col(F::Title, 3.0), col(F::Protocol, 2.0), col(F::Status, 1.5), col(F::Location, 2.0), col(F::CreatedAt, 1.2)],
        Category::Vistorias => vec![col(F::Title, 3.0), col(F::Protocol, 2.0), col(F::Status, 1.5), col(F::Responsible, 1.8), col(F::CreatedAt, 1.2)],
        Category::Checklists => vec![col(F::Title, 3.5), col(F::Status, 1.5), col(F::Checklist, 1.0), col(F::Responsible, 1.8), col(F::CreatedAt, 1.2)],
        Category::AntesDepois => vec![col(F::Title, 3.5), col(F::Status, 1.5), col(F::Location, 2.0), col(F::CreatedAt, 1.2)],
        Category::Eventos => vec![col(F::Title, 3.5), col(F::Location, 2.0), col(F::DueDate, 1.2), col(F::Status, 1.5)],
        Category::Comunicados => vec![col(F::Title, 4.0), col(F::Author, 1.8), col(F::Category, 1.5), col(F::CreatedAt, 1.2)],
        Category::Votacoes => vec![col(F::Title, 4.0), col(F::Status, 1.5), col(F::Votes, 1.0), col(F::DueDate, 1.2)],
        Category::Moradores => vec![col(F::Name, 3.0), col(F::Unit, 1.0), col(F::Block, 1.0), col(F::Phone, 1.8), col(F::Email, 2.5)],
        Category::Funcionarios => vec![col(F::Name, 3.0), col(F::Role, 2.0), col(F::Phone, 1.8), col(F::Email, 2.5)],
        Category::Comunicacoes => vec![col(F::Title, 4.0), col(F::Author, 2.0), col(F::CreatedAt, 1.2)],
        Category::Conquistas | Category::Melhorias => vec![col(F::Title, 2.5), col(F::Description, 4.0), col(F::CreatedAt, 1.2)],
        Category::Aquisicoes => vec![col(F::Title, 3.5), col(F::Price, 1.5), col(F::Status, 1.5), col(F::CreatedAt, 1.2)],
        Category::TelefonesUteis => vec![col(F::Name, 3.0), col(F::Phone, 2.0), col(F::Category, 2.0)],
        Category::LinksUteis => vec![col(F::Title, 2.5), col(F::Url, 4.0), col(F::Category, 1.5)],
        Category::Classificados => vec![col(F::Title, 3.5), col(F::Price, 1.5), col(F::Author, 2.0), col(F::CreatedAt, 1.2)],
        Category::AchadosPerdidos => vec![col(F::Title, 3.5), col(F::Location, 2.0), col(F::Status, 1.5), col(F::CreatedAt, 1.2)],
        Category::Caronas => vec![col(F::Title, 2.5), col(F::Origin, 2.0), col(F::Destination, 2.0), col(F::DueDate, 1.2)],
    }
}

/// `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let (units, fraction) = (cents / 100, cents % 100);
    let digits = units.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, fraction)
}
