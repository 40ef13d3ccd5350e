use crate::ui::list::ListModel;
use crate::ui::render::question::render_progress_bar;
use crate::ui::render::styles::{STYLE_HEADER_BOX, STYLE_QUERY, STYLE_TITLE};
use crate::ui::render::util::normalize_and_pad;
use crate::ui::wizard::WizardModel;
use crate::ui::{DEFAULT_HEIGHT, DEFAULT_WIDTH, HEADER_LINES, RESERVED_LINES};

// Bordered header region occupying exactly HEADER_LINES lines.
fn render_header_block(inner: &str, screen_width: usize) -> Vec<String> {
    let box_width = if screen_width >= 2 {
        screen_width - 2
    } else {
        DEFAULT_WIDTH
    };
    let w_i32: i32 = box_width.try_into().unwrap_or(i32::MAX);
    let block = STYLE_HEADER_BOX.clone().width(w_i32).render(inner);
    let mut out: Vec<String> = block.lines().map(|s| s.to_string()).collect();
    out.truncate(HEADER_LINES);
    while out.len() < HEADER_LINES {
        out.push(String::new());
    }
    out
}

fn dimensions(width: usize, height: usize) -> (usize, usize) {
    let w = if width > 0 { width } else { DEFAULT_WIDTH };
    let h = if height > 0 { height } else { DEFAULT_HEIGHT };
    (w, h.saturating_sub(RESERVED_LINES))
}

/// Full-screen render of a list page: search box, the current page of rows,
/// and the status line. A complete synchronous rebuild on every call.
pub fn render_list_full(m: &ListModel) -> String {
    let (total_width, region) = dimensions(m.screen_width, m.screen_height);
    let header_inner = format!(
        "{} {}",
        STYLE_TITLE.render(&format!("⌕ {}", m.config.title)),
        STYLE_QUERY.render(&m.typed)
    );
    let mut lines = render_header_block(&header_inner, total_width);
    let content: Vec<String> = m.render_rows().lines().map(str::to_string).collect();
    lines.extend(
        normalize_and_pad(content, total_width, region)
            .lines()
            .map(str::to_string),
    );
    let modeline = crate::ui::render::modeline::render_list_modeline(m)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    lines.push(modeline);
    lines.join("\n")
}

/// Full-screen render of the wizard: progress header, the current question,
/// and the status line.
pub fn render_wizard_full(m: &WizardModel) -> String {
    let (total_width, region) = dimensions(m.screen_width, m.screen_height);
    let mut lines = render_header_block(&render_progress_bar(m), total_width);
    let content: Vec<String> = m.render_question().lines().map(str::to_string).collect();
    lines.extend(
        normalize_and_pad(content, total_width, region)
            .lines()
            .map(str::to_string),
    );
    let modeline = crate::ui::render::modeline::render_wizard_modeline(m)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    lines.push(modeline);
    lines.join("\n")
}
