use crate::ui::render::styles::{
    STYLE_CELL, STYLE_DESC, STYLE_DISABLED, STYLE_HEADER, STYLE_PROGRESS, STYLE_SELECTED,
};
use crate::ui::wizard::WizardModel;

const PROGRESS_CELLS: usize = 24;

/// Proportional progress bar for the current question.
pub fn render_progress_bar(m: &WizardModel) -> String {
    let percent = m.progress_percent();
    let filled = percent * PROGRESS_CELLS / 100;
    let mut bar = String::with_capacity(PROGRESS_CELLS);
    for i in 0..PROGRESS_CELLS {
        bar.push(if i < filled { '█' } else { '░' });
    }
    format!(
        "{} {}",
        STYLE_PROGRESS.render(&bar),
        STYLE_DESC.render(&format!("{percent}%"))
    )
}

fn button(label: &str, enabled: bool) -> String {
    let text = format!("[ {label} ]");
    if enabled {
        STYLE_SELECTED.render(&text)
    } else {
        STYLE_DISABLED.render(&text)
    }
}

/// Renders the current question from scratch: prompt, the full option list
/// with the recorded answer pre-selected, and the navigation buttons with
/// their enablement state. Nothing from other questions survives the rebuild.
pub fn render_question(m: &WizardModel) -> String {
    let Some(q) = m.current() else {
        return STYLE_DESC.render("No questions loaded.");
    };

    let mut b = String::new();
    b.push_str(&STYLE_HEADER.render(&format!("{}. {}", m.cursor + 1, q.prompt)));
    b.push('\n');
    b.push('\n');

    let recorded = m.answers.get(m.cursor);
    for (i, opt) in q.options.iter().enumerate() {
        let pointer = if i == m.highlight { ">" } else { " " };
        let mark = if recorded == Some(opt.value.as_str()) {
            "(●)"
        } else {
            "( )"
        };
        let line = format!("{pointer} {mark} {}. {}", i + 1, opt.label);
        if recorded == Some(opt.value.as_str()) {
            b.push_str(&STYLE_SELECTED.render(&line));
        } else {
            b.push_str(&STYLE_CELL.render(&line));
        }
        b.push('\n');
    }

    b.push('\n');
    let buttons = [
        button("Previous", m.prev_enabled()),
        button("Next", m.next_enabled()),
        button("Submit", m.can_submit()),
    ];
    b.push_str(&buttons.join("  "));
    b.push('\n');
    b
}
