#[macro_use]
mod common;

use common::fixtures;
use common::pdf_assertions::extract_uri_links;
use common::{generate, generate_tabular, TestResult};
use condo_report::{BlockKind, InMemoryResourceProvider, SectionRenderingStrategy};
use serde_json::json;

#[test]
fn test_simplified_maintenance_report() -> TestResult {
    let pdf = generate_tabular(&fixtures::maintenance_request())?;

    assert_eq!(pdf.count_text("MANUTENÇÕES (2)"), 1);
    let rows = pdf
        .report
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::TableRow)
        .count();
    assert_eq!(rows, 2);
    assert_pdf_contains_text!(pdf, "Título");
    assert_pdf_contains_text!(pdf, "Vazamento no bloco 1");
    assert_pdf_contains_text!(pdf, "Vazamento no bloco 2");
    assert_pdf_contains_text!(pdf, "Clique no título para abrir a seção Manutenções");

    // Section-level links: both rows point at the list page.
    let links = extract_uri_links(&pdf.doc);
    assert_eq!(links.len(), 2);
    for link in &links {
        assert_eq!(link.uri, "http://localhost:3000/dashboard/manutencoes");
    }
    assert_ne!(links[0].rect, links[1].rect);

    // No narrative blocks in this profile.
    assert!(pdf.report.blocks.iter().all(|b| b.kind != BlockKind::CardHeader));
    assert_pdf_footers_sequential!(pdf);
    Ok(())
}

#[test]
fn test_links_follow_configured_base_url() -> TestResult {
    let pdf = generate(
        &fixtures::mixed_request(),
        json!({ "baseUrl": "https://app.condominio.com.br/" }),
        SectionRenderingStrategy::Tabular,
        InMemoryResourceProvider::new(),
    )?;

    let uris: Vec<String> = extract_uri_links(&pdf.doc).into_iter().map(|l| l.uri).collect();
    assert!(uris.contains(&"https://app.condominio.com.br/dashboard/manutencoes".to_string()));
    assert!(uris.contains(&"https://app.condominio.com.br/dashboard/antes-depois".to_string()));
    assert!(uris.contains(&"https://app.condominio.com.br/dashboard/telefones-uteis".to_string()));
    assert!(uris.iter().all(|u| u.starts_with("https://app.condominio.com.br/dashboard/")));
    Ok(())
}

#[test]
fn test_every_category_is_a_table() -> TestResult {
    let resources = InMemoryResourceProvider::new()
        .with("antes.png", fixtures::png(4, 4, [0, 0, 0]))?;
    let pdf = generate(
        &fixtures::mixed_request(),
        json!({}),
        SectionRenderingStrategy::Tabular,
        resources,
    )?;

    let kinds: Vec<BlockKind> = pdf.report.blocks.iter().map(|b| b.kind).collect();
    for narrative in [
        BlockKind::CardHeader,
        BlockKind::VoteOption,
        BlockKind::ChecklistItem,
        BlockKind::BeforeAfter,
    ] {
        assert!(!kinds.contains(&narrative), "{:?} in tabular profile", narrative);
    }
    // One caption per rendered category.
    let captions = kinds.iter().filter(|k| **k == BlockKind::Caption).count();
    assert_eq!(captions, 9);
    assert_pdf_contains_text!(pdf, "1/2");
    assert_pdf_contains_text!(pdf, "42");
    Ok(())
}

#[test]
fn test_long_table_repeats_header_on_each_page() -> TestResult {
    let pdf = generate_tabular(&fixtures::many_tickets(120))?;

    assert_pdf_min_pages!(pdf, 4);
    let blocks = &pdf.report.blocks;
    let rows = blocks.iter().filter(|b| b.kind == BlockKind::TableRow).count();
    assert_eq!(rows, 120);

    let row_pages: std::collections::BTreeSet<usize> = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::TableRow)
        .map(|b| b.page)
        .collect();
    for page in &row_pages {
        let headers = blocks
            .iter()
            .filter(|b| b.kind == BlockKind::TableHeader && b.page == *page)
            .count();
        assert_eq!(headers, 1, "page {} should repeat the header once", page);
    }
    assert_eq!(extract_uri_links(&pdf.doc).len(), 120);
    assert_pdf_footers_sequential!(pdf);
    Ok(())
}
