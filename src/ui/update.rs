use crate::ui::list::ListModel;
use crate::ui::wizard::WizardModel;
use crate::ui::{Msg, RESERVED_LINES};
use bubbletea_widgets::Viewport;

pub fn handle_list_update(m: &mut ListModel, msg: Msg) {
    match msg {
        Msg::WindowSize { width, height } => handle_list_window_size(m, width, height),
        Msg::Rune(r) => handle_list_rune(m, r),
        Msg::KeyBackspace => handle_list_backspace(m),
        Msg::KeyUp | Msg::KeyLeft => {
            m.prev_page();
            refresh_list_view(m);
        }
        Msg::KeyDown | Msg::KeyRight => {
            m.next_page();
            refresh_list_view(m);
        }
        // no terminal action in a list page; Esc quits at the adapter level
        Msg::KeyEnter | Msg::KeyEsc | Msg::KeySpace => {}
    }
}

fn handle_list_window_size(m: &mut ListModel, width: usize, height: usize) {
    m.screen_width = width;
    m.screen_height = height;
    let region = height.saturating_sub(RESERVED_LINES);
    m.vp = Viewport::new(region, width);
    refresh_list_view(m);
}

fn handle_list_rune(m: &mut ListModel, r: char) {
    if r.is_control() {
        return;
    }
    m.typed.push(r);
    let typed = m.typed.clone();
    m.set_filter(&typed);
    refresh_list_view(m);
}

fn handle_list_backspace(m: &mut ListModel) {
    if m.typed.pop().is_none() {
        return;
    }
    let typed = m.typed.clone();
    m.set_filter(&typed);
    refresh_list_view(m);
}

// Full replacement of the displayed row region; idempotent for a given
// (view, page).
fn refresh_list_view(m: &mut ListModel) {
    let content = m.render_rows();
    m.vp.set_content(&content);
}

pub fn handle_wizard_update(m: &mut WizardModel, msg: Msg) {
    match msg {
        Msg::WindowSize { width, height } => {
            m.screen_width = width;
            m.screen_height = height;
        }
        Msg::KeyUp => m.highlight_up(),
        Msg::KeyDown => m.highlight_down(),
        Msg::KeySpace => {
            m.select_highlighted();
        }
        Msg::Rune(r) => handle_wizard_rune(m, r),
        Msg::KeyRight => {
            m.next();
        }
        Msg::KeyLeft | Msg::KeyBackspace => {
            m.previous();
        }
        Msg::KeyEnter => {
            // completeness-gated; a partial quiz never submits
            m.submit();
        }
        Msg::KeyEsc => {}
    }
}

fn handle_wizard_rune(m: &mut WizardModel, r: char) {
    if let Some(d) = r.to_digit(10) {
        if d >= 1 {
            let idx = (d - 1) as usize;
            let Some(value) = m
                .current()
                .and_then(|q| q.options.get(idx))
                .map(|o| o.value.clone())
            else {
                return;
            };
            m.select_option(m.cursor, &value);
        }
    }
}
