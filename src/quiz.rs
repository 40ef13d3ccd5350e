/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub value: String,
    pub label: String,
}

/// An ordered question with a fixed, ordered option set.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn has_value(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Position of a recorded value within the option list, if any.
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }
}

/// Per-question answer storage: exactly one slot per question, filled
/// incrementally. Length is fixed at wizard start and never changes.
#[derive(Debug, Clone, Default)]
pub struct AnswerVector {
    slots: Vec<Option<String>>,
}

impl AnswerVector {
    pub fn new(len: usize) -> Self {
        AnswerVector {
            slots: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    /// Records a value into a slot. Out-of-range indices are ignored so the
    /// vector can never grow past the question count.
    pub fn set(&mut self, index: usize, value: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(value.to_string());
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|s| s.is_some())
    }

    pub fn unanswered(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Flattens the vector into one named form field per question (`q0`,
    /// `q1`, ...). Returns None while any slot is unset: partial answers are
    /// never serialized.
    pub fn to_form_fields(&self) -> Option<Vec<(String, String)>> {
        if !self.is_complete() {
            return None;
        }
        Some(
            self.slots
                .iter()
                .enumerate()
                .map(|(i, s)| (format!("q{i}"), s.clone().unwrap_or_default()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str, values: &[&str]) -> Question {
        Question {
            prompt: prompt.to_string(),
            options: values
                .iter()
                .map(|v| QuizOption {
                    value: v.to_string(),
                    label: format!("label {v}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_question_value_lookup() {
        let q = question("Skin feel?", &["-1", "0", "1"]);
        assert!(q.has_value("0"));
        assert!(!q.has_value("2"));
        assert_eq!(q.option_index("1"), Some(2));
        assert_eq!(q.option_index("2"), None);
    }

    #[test]
    fn test_answer_vector_fixed_length() {
        let mut a = AnswerVector::new(3);
        assert_eq!(a.len(), 3);
        a.set(5, "x");
        assert_eq!(a.len(), 3);
        assert_eq!(a.get(5), None);
    }

    #[test]
    fn test_completeness_and_overwrite() {
        let mut a = AnswerVector::new(3);
        assert!(!a.is_complete());
        a.set(1, "yes");
        a.set(0, "no");
        assert_eq!(a.unanswered(), 1);
        assert!(!a.is_complete());
        a.set(2, "maybe");
        assert!(a.is_complete());
        // re-answering replaces without invalidating the rest
        a.set(1, "no");
        assert!(a.is_complete());
        assert_eq!(a.get(1), Some("no"));
    }

    #[test]
    fn test_form_fields_only_when_complete() {
        let mut a = AnswerVector::new(2);
        a.set(0, "-1");
        assert!(a.to_form_fields().is_none());
        a.set(1, "1");
        let fields = a.to_form_fields().unwrap();
        assert_eq!(
            fields,
            vec![
                ("q0".to_string(), "-1".to_string()),
                ("q1".to_string(), "1".to_string())
            ]
        );
    }

    #[test]
    fn test_empty_vector_never_complete() {
        let a = AnswerVector::new(0);
        assert!(!a.is_complete());
        assert!(a.to_form_fields().is_none());
    }
}
