use serde::{Deserialize, Serialize};

/// A selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// User-facing text.
    pub label: String,
    /// Opaque token consumed by the recommendation engine.
    pub value: String,
}

/// A quiz question with its fixed options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

/// The user's response to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub question_text: String,
    pub value: String,
    pub label: String,
}

/// Ordered answers of one quiz run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<Answer>);

impl QuizOption {
    /// Create an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Question {
    /// Create a question.
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    /// Find the option carrying `value`.
    pub fn option(&self, value: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Build the answer for the option carrying `value`.
    pub fn answer(&self, value: &str) -> Option<Answer> {
        self.option(value)
            .map(|o| Answer::new(&self.id, &self.prompt, &o.value, &o.label))
    }
}

impl Answer {
    /// Create an answer.
    pub fn new(
        question_id: impl Into<String>,
        question_text: impl Into<String>,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            question_text: question_text.into(),
            value: value.into(),
            label: label.into(),
        }
    }
}

impl AnswerSet {
    /// Empty answer set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, answer: Answer) {
        self.0.push(answer);
    }

    /// Answer recorded for a question, if any.
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.0.iter().find(|a| a.question_id == question_id)
    }

    /// Chosen value token for a question, if any.
    pub fn value_of(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).map(|a| a.value.as_str())
    }

    /// Answers in question order.
    pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
        self.0.iter()
    }

    /// Number of recorded answers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        Self(answers)
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
