//! Question model.
//!
//! A question is a discriminated union keyed by its `type` tag, so every
//! consumer gets compile-time exhaustiveness over the supported kinds
//! instead of one open settings map. The wire format stays what form
//! builder clients send:
//!
//! ```json
//! {
//!   "id": "q1",
//!   "type": "multiple_choice",
//!   "title": "Pick one",
//!   "settings": { "options": [{ "text": "A", "correct": true }] },
//!   "required": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One prompt within a form.
///
/// `id` is creator-assigned and must be unique within its form; if the
/// client omits it, a UUID string is generated at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default = "generated_question_id")]
    pub id: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Currently not enforced at submission time.
    #[serde(default)]
    pub required: bool,
}

fn generated_question_id() -> String {
    Uuid::new_v4().to_string()
}

/// Question kind plus its type-specific settings.
///
/// Unknown `type` tags are rejected at deserialization; adding a kind means
/// adding a variant here and letting the compiler point at every match that
/// needs updating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Categorize {
        #[serde(default)]
        settings: CategorizeSettings,
    },
    MultipleChoice {
        #[serde(default)]
        settings: MultipleChoiceSettings,
    },
    Text {
        #[serde(default)]
        settings: TextSettings,
    },
    TrueFalse {
        #[serde(default)]
        settings: TrueFalseSettings,
    },
    Cloze {
        #[serde(default)]
        settings: ClozeSettings,
    },
    Comprehension {
        #[serde(default)]
        settings: ComprehensionSettings,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizeSettings {
    /// Category labels the respondent sorts items into.
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoiceSettings {
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSettings {
    pub expected_answer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrueFalseSettings {
    /// The correct answer.
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClozeSettings {
    /// Sentence with blanks for the respondent to fill.
    #[serde(default)]
    pub placeholder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComprehensionSettings {
    /// Reading passage the respondent answers about.
    #[serde(default)]
    pub passage: String,
}
