// src/table/extract.rs

use once_cell::sync::Lazy;
use scraper::{CaseSensitivity, ElementRef, Html, Node, Selector};
use tracing::{debug, trace};

use super::raw_table::RawTable;
use super::utils::clean_cell;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());

/// Parse every `<table>` of `html`, in document order.
pub fn extract_tables(html: &str) -> Vec<RawTable> {
    let doc = Html::parse_document(html);
    let tables: Vec<RawTable> = doc.select(&TABLE).map(extract_table).collect();
    debug!(count = tables.len(), "extracted tables");
    tables
}

/// A cell spanning further rows below the one it was declared in.
struct Carry {
    text: String,
    rows_left: usize,
}

fn extract_table(table: ElementRef<'_>) -> RawTable {
    let mut out = RawTable::default();
    let mut carry: Vec<Option<Carry>> = Vec::new();

    for tr in table.select(&ROW).filter(|tr| owning_table(*tr) == Some(table)) {
        let cells: Vec<ElementRef<'_>> = tr
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|c| matches!(c.value().name(), "td" | "th"))
            .collect();
        if cells.is_empty() {
            continue;
        }
        let all_header = cells.iter().all(|c| c.value().name() == "th");
        let row = expand_row(&cells, &mut carry);

        if out.headers.is_empty() && out.rows.is_empty() && all_header {
            out.headers = row;
            continue;
        }
        if all_header && row == out.headers {
            trace!("skipping repeated header row");
            continue;
        }
        out.rows.push(row);
    }

    if !out.headers.is_empty() {
        let width = out.headers.len();
        for row in &mut out.rows {
            row.resize(width, String::new());
        }
    }
    out
}

/// Lay out one `<tr>` on the column grid, honouring `rowspan` and `colspan`.
fn expand_row(cells: &[ElementRef<'_>], carry: &mut Vec<Option<Carry>>) -> Vec<String> {
    let mut row = Vec::new();
    let mut col = 0;

    for cell in cells {
        fill_carried(&mut row, &mut col, carry);
        let text = cell_text(*cell);
        let colspan = span(*cell, "colspan");
        let rowspan = span(*cell, "rowspan");
        for _ in 0..colspan {
            if carry.len() <= col {
                carry.resize_with(col + 1, || None);
            }
            if rowspan > 1 {
                carry[col] = Some(Carry {
                    text: text.clone(),
                    rows_left: rowspan - 1,
                });
            }
            row.push(text.clone());
            col += 1;
        }
    }
    fill_carried(&mut row, &mut col, carry);
    row
}

fn fill_carried(row: &mut Vec<String>, col: &mut usize, carry: &mut [Option<Carry>]) {
    while let Some(Some(c)) = carry.get_mut(*col) {
        row.push(c.text.clone());
        c.rows_left -= 1;
        if c.rows_left == 0 {
            carry[*col] = None;
        }
        *col += 1;
    }
}

fn span(cell: ElementRef<'_>, attr: &str) -> usize {
    cell.value()
        .attr(attr)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1)
        .min(1000)
}

/// Nearest enclosing `<table>`, so nested tables keep their own rows.
fn owning_table(tr: ElementRef<'_>) -> Option<ElementRef<'_>> {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let mut buf = String::new();
    collect_text(cell, &mut buf);
    clean_cell(&buf)
}

fn collect_text(el: ElementRef<'_>, buf: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => buf.push_str(t),
            Node::Element(e) => {
                if is_hidden(e) {
                    continue;
                }
                if e.name() == "br" {
                    buf.push(' ');
                    continue;
                }
                if let Some(inner) = ElementRef::wrap(child) {
                    collect_text(inner, buf);
                }
            }
            _ => {}
        }
    }
}

fn is_hidden(e: &scraper::node::Element) -> bool {
    if matches!(e.name(), "style" | "script") {
        return true;
    }
    if e.name() == "sup" && e.has_class("reference", CaseSensitivity::AsciiCaseInsensitive) {
        return true;
    }
    e.attr("style")
        .map(|s| s.replace(' ', "").contains("display:none"))
        .unwrap_or(false)
}
