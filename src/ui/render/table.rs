use crate::ui::list::ListModel;
use crate::ui::render::styles::{STYLE_CELL, STYLE_DESC, STYLE_HEADER, STYLE_LINENUM, STYLE_LINK};

fn compute_gutter_width(total: usize) -> usize {
    if total == 0 {
        return 1;
    }
    let gw = ((total as f64).log10().floor() as usize) + 1;
    usize::max(gw, 3)
}

fn format_num_str(num: usize, gutter_width: usize) -> String {
    format!("{:>1$} │ ", num, gutter_width)
}

// Column widths are recomputed from the page being shown; every render is a
// full rebuild of the region, so nothing is carried over between pages.
fn column_widths(m: &ListModel) -> Vec<usize> {
    m.config
        .columns
        .iter()
        .map(|c| {
            let mut w = c.header.chars().count();
            for rec in m.page_rows() {
                w = usize::max(w, rec.text(&c.field).chars().count());
            }
            w
        })
        .collect()
}

fn pad_cell(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = text.to_string();
    for _ in len..width {
        out.push(' ');
    }
    out
}

/// Renders the current page of the filtered view: a header line, one line per
/// record, and the record's action links underneath as plain URL paths.
pub fn render_rows(m: &ListModel) -> String {
    if m.filtered_len() == 0 {
        return STYLE_DESC.render("No matching records.");
    }

    let widths = column_widths(m);
    let gutter_width = compute_gutter_width(m.filtered_len());
    let mut b = String::new();

    let header_cells: Vec<String> = m
        .config
        .columns
        .iter()
        .zip(widths.iter())
        .map(|(c, w)| pad_cell(&c.header, *w))
        .collect();
    b.push_str(&" ".repeat(gutter_width + 3));
    b.push_str(&STYLE_HEADER.render(&header_cells.join("  ")));
    b.push('\n');

    let start = (m.page - 1) * m.config.page_size;
    for (i, rec) in m.page_rows().iter().enumerate() {
        let num_str = format_num_str(start + i + 1, gutter_width);
        let cells: Vec<String> = m
            .config
            .columns
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| pad_cell(&rec.text(&c.field), *w))
            .collect();
        b.push_str(&STYLE_LINENUM.render(&num_str));
        b.push_str(&STYLE_CELL.render(&cells.join("  ")));
        b.push('\n');

        let links: Vec<String> = m
            .config
            .actions
            .iter()
            .map(|a| {
                format!(
                    "{} {}",
                    STYLE_LINK.render(&a.label),
                    STYLE_DESC.render(&format!("→ {}", m.action_href(a, rec)))
                )
            })
            .collect();
        b.push_str(&" ".repeat(gutter_width + 3));
        b.push_str(&links.join(&STYLE_DESC.render("  |  ")));
        b.push('\n');
    }
    b
}
