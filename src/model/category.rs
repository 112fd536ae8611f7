use condo_types::Color;
use std::fmt;

/// How a category is drawn in the full (narrative) report profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// One card per record with fields, description, map, gallery and timeline.
    Card,
    /// Cards followed by the record's checklist items.
    Checklist,
    /// Cards with side-by-side before/after photos.
    BeforeAfter,
    /// One block per vote with a bar per option.
    Votes,
    /// A single table for the whole category.
    Table,
}

/// Every record category the report knows how to render.
///
/// [`Category::ORDERED`] is the fixed section order of the report body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Manutencoes,
    Ocorrencias,
    Vistorias,
    Checklists,
    AntesDepois,
    Eventos,
    Comunicados,
    Votacoes,
    Moradores,
    Funcionarios,
    Comunicacoes,
    Conquistas,
    Melhorias,
    Aquisicoes,
    TelefonesUteis,
    LinksUteis,
    Classificados,
    AchadosPerdidos,
    Caronas,
}

struct CategoryInfo {
    key: &'static str,
    label: &'static str,
    path: &'static str,
    color: Color,
    kind: SectionKind,
}

const fn info(
    key: &'static str,
    label: &'static str,
    path: &'static str,
    color: Color,
    kind: SectionKind,
) -> CategoryInfo {
    CategoryInfo {
        key,
        label,
        path,
        color,
        kind,
    }
}

impl Category {
    pub const ORDERED: [Category; 19] = [
        Category::Manutencoes,
        Category::Ocorrencias,
        Category::Vistorias,
        Category::Checklists,
        Category::AntesDepois,
        Category::Eventos,
        Category::Comunicados,
        Category::Votacoes,
        Category::Moradores,
        Category::Funcionarios,
        Category::Comunicacoes,
        Category::Conquistas,
        Category::Melhorias,
        Category::Aquisicoes,
        Category::TelefonesUteis,
        Category::LinksUteis,
        Category::Classificados,
        Category::AchadosPerdidos,
        Category::Caronas,
    ];

    fn info(self) -> CategoryInfo {
        use SectionKind::*;
        match self {
            Category::Manutencoes => info("manutencoes", "Manutenções", "/dashboard/manutencoes", Color::rgb(37, 99, 235), Card),
            Category::Ocorrencias => info("ocorrencias", "Ocorrências", "/dashboard/ocorrencias", Color::rgb(220, 38, 38), Card),
            Category::Vistorias => info("vistorias", "Vistorias", "/dashboard/vistorias", Color::rgb(124, 58, 237), Card),
            Category::Checklists => info("checklists", "Checklists", "/dashboard/checklists", Color::rgb(13, 148, 136), Checklist),
            Category::AntesDepois => info("antes_depois", "Antes e Depois", "/dashboard/antes-depois", Color::rgb(234, 88, 12), BeforeAfter),
            Category::Eventos => info("eventos", "Eventos", "/dashboard/eventos", Color::rgb(219, 39, 119), Table),
            Category::Comunicados => info("comunicados", "Comunicados", "/dashboard/comunicados", Color::rgb(8, 145, 178), Table),
            Category::Votacoes => info("votacoes", "Votações", "/dashboard/votacoes", Color::rgb(79, 70, 229), Votes),
            Category::Moradores => info("moradores", "Moradores", "/dashboard/moradores", Color::rgb(22, 163, 74), Table),
            Category::Funcionarios => info("funcionarios", "Funcionários", "/dashboard/funcionarios", Color::rgb(71, 85, 105), Table),
            Category::Comunicacoes => info("comunicacoes", "Comunicações", "/dashboard/comunicacoes", Color::rgb(2, 132, 199), Table),
            Category::Conquistas => info("conquistas", "Conquistas", "/dashboard/conquistas", Color::rgb(202, 138, 4), Table),
            Category::Melhorias => info("melhorias", "Melhorias", "/dashboard/melhorias", Color::rgb(101, 163, 13), Table),
            Category::Aquisicoes => info("aquisicoes", "Aquisições", "/dashboard/aquisicoes", Color::rgb(147, 51, 234), Table),
            Category::TelefonesUteis => info("telefones_uteis", "Telefones Úteis", "/dashboard/telefones-uteis", Color::rgb(5, 150, 105), Table),
            Category::LinksUteis => info("links_uteis", "Links Úteis", "/dashboard/links-uteis", Color::rgb(14, 116, 144), Table),
            Category::Classificados => info("classificados", "Classificados", "/dashboard/classificados", Color::rgb(190, 18, 60), Table),
            Category::AchadosPerdidos => info("achados_perdidos", "Achados e Perdidos", "/dashboard/achados-perdidos", Color::rgb(161, 98, 7), Table),
            Category::Caronas => info("caronas", "Caronas", "/dashboard/caronas", Color::rgb(67, 56, 202), Table),
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Self::ORDERED.into_iter().find(|c| c.key() == key)
    }

    /// Key used in `sections` and `totals` of a request.
    pub fn key(self) -> &'static str {
        self.info().key
    }

    /// Human label, as shown on stat cards and captions.
    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Section title bar text, e.g. `MANUTENÇÕES (2)`.
    pub fn heading(self, count: usize) -> String {
        format!("{} ({})", self.label().to_uppercase(), count)
    }

    /// Dashboard path the section links point to.
    pub fn path(self) -> &'static str {
        self.info().path
    }

    pub fn color(self) -> Color {
        self.info().color
    }

    pub fn kind(self) -> SectionKind {
        self.info().kind
    }

    /// Resolves a label for any key, falling back to the raw key.
    pub fn label_for_key(key: &str) -> &str {
        Self::from_key(key).map(Category::label).unwrap_or(key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
