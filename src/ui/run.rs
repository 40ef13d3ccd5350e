use crate::ui::list::ListModel;
use crate::ui::wizard::WizardModel;
use bubbletea_rs::{
    Program, command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel,
    window_size,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The screen being driven: one of the record lists or the quiz wizard.
/// Dispatches update and view to the wrapped controller.
pub enum App {
    List(ListModel),
    Wizard(WizardModel),
}

impl App {
    pub fn update(&mut self, msg: crate::ui::Msg) {
        match self {
            App::List(m) => m.update(msg),
            App::Wizard(m) => m.update(msg),
        }
    }

    pub fn render_full(&self) -> String {
        match self {
            App::List(m) => m.render_full(),
            App::Wizard(m) => m.render_full(),
        }
    }

    /// Serialized answer fields after a successful wizard submit, if any.
    pub fn submission(&self) -> Option<&[(String, String)]> {
        match self {
            App::Wizard(m) => m.submitted.as_deref(),
            App::List(_) => None,
        }
    }
}

// bubbletea-rs constructs the model through `init()`, which takes no
// arguments, so the prepared App is handed over through this slot.
static PENDING: Lazy<Mutex<Option<App>>> = Lazy::new(|| Mutex::new(None));

struct TeaAdapter {
    inner: App,
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let pending = PENDING.lock().ok().and_then(|mut slot| slot.take());
        let inner = pending.unwrap_or_else(|| App::Wizard(WizardModel::new(Vec::new())));
        let mut adapter = TeaAdapter { inner };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(crate::ui::Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        (adapter, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        // Map bubbletea-rs Msg types to our ui::Msg and call update
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            match &km.key {
                KeyCode::Esc => {
                    return Some(bubbletea_rs::quit());
                }
                KeyCode::Enter => {
                    self.inner.update(crate::ui::Msg::KeyEnter);
                    if self.inner.submission().is_some() {
                        return Some(bubbletea_rs::quit());
                    }
                }
                KeyCode::Backspace => {
                    self.inner.update(crate::ui::Msg::KeyBackspace);
                }
                KeyCode::Up => {
                    self.inner.update(crate::ui::Msg::KeyUp);
                }
                KeyCode::Down => {
                    self.inner.update(crate::ui::Msg::KeyDown);
                }
                KeyCode::Left => {
                    self.inner.update(crate::ui::Msg::KeyLeft);
                }
                KeyCode::Right => {
                    self.inner.update(crate::ui::Msg::KeyRight);
                }
                KeyCode::Char(ch) => {
                    if *ch == '\u{03}' {
                        // Ctrl-C delivered as ETX
                        return Some(bubbletea_rs::quit());
                    }
                    if km.modifiers.contains(KeyModifiers::CONTROL) {
                        match ch {
                            'n' | 'N' => {
                                self.inner.update(crate::ui::Msg::KeyDown);
                            }
                            'p' | 'P' => {
                                self.inner.update(crate::ui::Msg::KeyUp);
                            }
                            'c' | 'C' => {
                                return Some(bubbletea_rs::quit());
                            }
                            _ => {}
                        }
                    } else if *ch == ' ' {
                        self.inner.update(crate::ui::Msg::KeySpace);
                    } else {
                        self.inner.update(crate::ui::Msg::Rune(*ch));
                    }
                }
                _ => { /* ignore other keys */ }
            }
            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(crate::ui::Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
            return None;
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Runs the interactive program for `app` and returns the final state
/// once the user quits or submits.
pub async fn run(app: App) -> Result<App, String> {
    if let Ok(mut slot) = PENDING.lock() {
        *slot = Some(app);
    } else {
        return Err("app slot poisoned".to_string());
    }

    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = match builder.build() {
        Ok(p) => p,
        Err(e) => return Err(format!("failed to build program: {e:?}")),
    };
    match program.run().await {
        Ok(final_adapter) => Ok(final_adapter.inner),
        Err(e) => Err(format!("program error: {e:?}")),
    }
}
