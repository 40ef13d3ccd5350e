use crate::quiz::{AnswerVector, Question};

/// Linear multi-step quiz: one question visible at a time, one answer per
/// question, submission gated on cross-question completeness. The cursor is
/// 0-based; `highlight` is the option the terminal cursor sits on and is
/// reseeded from the recorded answer whenever a question is (re)entered.
#[derive(Clone, Debug, Default)]
pub struct WizardModel {
    questions: Vec<Question>,
    pub answers: AnswerVector,
    pub cursor: usize,
    pub highlight: usize,
    /// Set by a successful submit: the flattened `q<i>` form fields handed to
    /// the enclosing form for a normal (non-intercepted) submission.
    pub submitted: Option<Vec<(String, String)>>,
    pub screen_width: usize,
    pub screen_height: usize,
}

impl WizardModel {
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = AnswerVector::new(questions.len());
        WizardModel {
            questions,
            answers,
            cursor: 0,
            highlight: 0,
            submitted: None,
            screen_width: 0,
            screen_height: 0,
        }
    }

    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_wizard_update(self, msg);
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// Records an answer. Valid only for the question currently being
    /// answered and only for one of its declared option values; anything
    /// else is a no-op. Never advances the cursor.
    pub fn select_option(&mut self, question: usize, value: &str) -> bool {
        if question != self.cursor {
            return false;
        }
        let Some(q) = self.questions.get(question) else {
            return false;
        };
        if !q.has_value(value) {
            return false;
        }
        self.answers.set(question, value);
        self.highlight = q.option_index(value).unwrap_or(0);
        true
    }

    /// Records the option the terminal cursor sits on.
    pub fn select_highlighted(&mut self) -> bool {
        let Some(value) = self
            .current()
            .and_then(|q| q.options.get(self.highlight))
            .map(|o| o.value.clone())
        else {
            return false;
        };
        self.select_option(self.cursor, &value)
    }

    pub fn highlight_up(&mut self) {
        if self.highlight > 0 {
            self.highlight -= 1;
        }
    }

    pub fn highlight_down(&mut self) {
        let count = self.current().map(|q| q.options.len()).unwrap_or(0);
        if self.highlight + 1 < count {
            self.highlight += 1;
        }
    }

    /// Gated on the current slot being answered; clamped at the last question.
    pub fn next(&mut self) -> bool {
        if !self.next_enabled() {
            return false;
        }
        self.cursor += 1;
        self.reseed_highlight();
        true
    }

    /// Ungated; clamped at question 0. Revisiting restores the recorded
    /// answer as pre-selected via the render path.
    pub fn previous(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.reseed_highlight();
        true
    }

    pub fn prev_enabled(&self) -> bool {
        self.cursor > 0
    }

    pub fn next_enabled(&self) -> bool {
        self.cursor + 1 < self.questions.len() && self.answers.get(self.cursor).is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.answers.is_complete()
    }

    /// Terminal action: only permitted once every slot is set, independent of
    /// cursor position. Partial answers are never serialized.
    pub fn submit(&mut self) -> bool {
        match self.answers.to_form_fields() {
            Some(fields) => {
                self.submitted = Some(fields);
                true
            }
            None => false,
        }
    }

    /// Progress indicator for the current question, in whole percent.
    pub fn progress_percent(&self) -> usize {
        if self.questions.is_empty() {
            0
        } else {
            (self.cursor + 1) * 100 / self.questions.len()
        }
    }

    fn reseed_highlight(&mut self) {
        self.highlight = self
            .answers
            .get(self.cursor)
            .and_then(|v| self.current().and_then(|q| q.option_index(v)))
            .unwrap_or(0);
    }

    // Render helper wrappers that forward to the render module.
    pub fn render_question(&self) -> String {
        crate::ui::render::question::render_question(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_wizard_full(self)
    }
}
