use crate::ui::list::ListModel;
use crate::ui::render::styles::STYLE_MODELINE;
use crate::ui::wizard::WizardModel;
use crate::ui::DEFAULT_WIDTH;
use lipgloss::Color;

// Compose a full-width status line: mode block on the left, key/description
// hint pairs in the middle, a position indicator on the right. Hint pairs are
// dropped from the right when the terminal is too narrow.
fn compose(mode: &str, pairs_def: &[(&str, &str)], position: &str, total_width: usize) -> String {
    let inner_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let key_style = STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
        .padding(0, 0, 0, 0);
    let desc_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let pos_style = STYLE_MODELINE.clone().faint(true).padding(0, 0, 0, 0);

    // Build rendered pairs and their plain widths in one pass
    let pairs: Vec<(String, usize)> = pairs_def
        .iter()
        .map(|(k, d)| {
            let plain_len = d.chars().count() + 1 + k.chars().count();
            let rendered = format!(
                "{}{}{}",
                desc_style.render(d),
                inner_style.render(":"),
                key_style.render(k)
            );
            (rendered, plain_len)
        })
        .collect();
    let pair_sep_rendered = inner_style.render("  ");
    let pair_sep_width = 2usize;

    let pos_width = position.chars().count();
    let pos_rendered = pos_style.render(position);

    let mode_w = mode.chars().count() + 2; // mode block padding
    let sep_w = " | ".chars().count();
    let inner_max = total_width.saturating_sub(3);
    let avail = inner_max.saturating_sub(mode_w + sep_w);

    let mut pairs_count = pairs.len();
    let joined = |n: usize| -> (String, usize) {
        if n == 0 {
            return (String::new(), 0);
        }
        let rendered = pairs
            .iter()
            .take(n)
            .map(|(r, _)| r.clone())
            .collect::<Vec<_>>()
            .join(&pair_sep_rendered);
        let width =
            pairs.iter().take(n).map(|(_, w)| *w).sum::<usize>() + pair_sep_width * (n - 1);
        (rendered, width)
    };
    let (mut left_rendered, mut left_width) = joined(pairs_count);
    while pairs_count > 0 && left_width + pos_width > avail {
        pairs_count -= 1;
        let (r, w) = joined(pairs_count);
        left_rendered = r;
        left_width = w;
    }

    let pad = avail.saturating_sub(left_width + pos_width + 2);
    let filler = if pad > 0 {
        STYLE_MODELINE.clone().width(pad as i32).render("")
    } else {
        String::new()
    };

    let mode_style = STYLE_MODELINE
        .clone()
        .background(Color::from_rgb(101, 101, 101))
        .padding(0, 1, 0, 1)
        .bold(true);
    let sep_styled = inner_style.render(" | ");
    let line = format!(
        "{}{sep_styled}{left_rendered}{filler}{pos_rendered}",
        mode_style.render(mode)
    );
    let single = line.replace('\n', " ");
    STYLE_MODELINE
        .clone()
        .width(usize::max(total_width, 1) as i32)
        .render(&single)
}

pub fn render_list_modeline(m: &ListModel) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let mode = if m.query.is_empty() {
        m.config.title.clone()
    } else {
        format!("{}: {}", m.config.title, m.query)
    };
    // the disabled-control contract: only show arrows for reachable pages
    let arrows = match (m.prev_enabled(), m.next_enabled()) {
        (true, true) => " ↑/↓",
        (true, false) => " ↑",
        (false, true) => " ↓",
        (false, false) => "",
    };
    let position = format!("Page {}/{}{arrows}", m.page, m.page_count());
    let pairs: Vec<(&str, &str)> = vec![("type", "search"), ("⌫", "erase"), ("⎋", "quit")];
    compose(&mode, &pairs, &position, total_width)
}

pub fn render_wizard_modeline(m: &WizardModel) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let position = if m.is_empty() {
        "Question 0/0".to_string()
    } else {
        format!("Question {}/{}", m.cursor + 1, m.len())
    };
    let pairs: Vec<(&str, &str)> = vec![
        ("␣", "choose"),
        ("→", "next"),
        ("←", "back"),
        ("⏎", "submit"),
        ("⎋", "quit"),
    ];
    compose("Skin Quiz", &pairs, &position, total_width)
}

#[cfg(test)]
mod tests {
    use crate::quiz::{Question, QuizOption};
    use crate::record::Record;
    use crate::ui::list::{ListConfig, ListModel};
    use crate::ui::wizard::WizardModel;
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn client(name: &str, id: usize) -> Record {
        match serde_json::json!({ "patient_id": id, "full_name": name, "birth_date": "1990-01-01" }) {
            serde_json::Value::Object(map) => Record::new(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_list_modeline_shows_page_and_arrows() {
        let records = (1..=12).map(|i| client(&format!("C{i}"), i)).collect();
        let mut m = ListModel::new(ListConfig::clients_admin(), records);
        m.update(crate::ui::Msg::WindowSize {
            width: 80,
            height: 24,
        });
        let stripped = strip_ansi(&super::render_list_modeline(&m));
        assert!(stripped.contains("Page 1/3"));
        assert!(stripped.contains('↓'));
        assert!(!stripped.contains('↑'), "previous disabled on page 1");
        m.update(crate::ui::Msg::KeyDown);
        m.update(crate::ui::Msg::KeyDown);
        let stripped = strip_ansi(&super::render_list_modeline(&m));
        assert!(stripped.contains("Page 3/3"));
        assert!(stripped.contains('↑'));
    }

    #[test]
    fn test_list_modeline_reflects_query() {
        let mut m = ListModel::new(ListConfig::clients_admin(), vec![client("Ahmed", 1)]);
        m.set_filter("ah");
        let stripped = strip_ansi(&super::render_list_modeline(&m));
        assert!(stripped.contains("Clients: ah"));
    }

    #[test]
    fn test_wizard_modeline_shows_position() {
        let qs = vec![Question {
            prompt: "P".to_string(),
            options: vec![QuizOption {
                value: "1".to_string(),
                label: "L".to_string(),
            }],
        }];
        let mut w = WizardModel::new(qs);
        w.screen_width = 80;
        let stripped = strip_ansi(&super::render_wizard_modeline(&w));
        assert!(stripped.contains("Question 1/1"));
        assert!(stripped.contains("Skin Quiz"));
    }

    #[test]
    fn test_modeline_fits_narrow_terminals() {
        let mut m = ListModel::new(ListConfig::clients_admin(), vec![client("Ahmed", 1)]);
        m.screen_width = 30;
        let stripped = strip_ansi(&super::render_list_modeline(&m));
        let first = stripped.lines().next().unwrap_or("");
        assert!(first.chars().count() <= 30, "got `{first}`");
    }
}
