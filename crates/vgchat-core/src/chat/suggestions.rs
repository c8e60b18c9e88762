//! Suggested questions offered on an empty conversation.

/// Numbered list of canned questions, addressed 1-based as shown to the user.
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    questions: Vec<String>,
}

impl Suggestions {
    /// Build the list, dropping blank entries.
    pub fn new(questions: Vec<String>) -> Self {
        Self {
            questions: questions
                .into_iter()
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// `(number, question)` pairs, numbered from 1.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| (i + 1, q.as_str()))
    }

    /// Look up suggestion `number` (1-based).
    pub fn pick(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.questions.get(i))
            .map(String::as_str)
    }
}
