//! Validation rules shared by the create, update, and submit paths.

use std::collections::HashSet;

use crate::answer::Answer;
use crate::error::CoreError;
use crate::question::Question;

/// A form title must be non-empty after trimming.
pub fn validate_form_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".into()));
    }
    Ok(())
}

/// Question ids must be unique within a form.
pub fn validate_question_ids(questions: &[Question]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(questions.len());
    for question in questions {
        if !seen.insert(question.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate question id: {}",
                question.id
            )));
        }
    }
    Ok(())
}

/// Every submitted answer must reference a question that exists on the form
/// at submission time. The first unmatched id fails the whole submission;
/// nothing is persisted partially.
pub fn validate_answers(questions: &[Question], answers: &[Answer]) -> Result<(), CoreError> {
    let known: HashSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
    for answer in answers {
        if answer.question_id.is_empty() || !known.contains(answer.question_id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Invalid questionId in answers: {}",
                answer.question_id
            )));
        }
    }
    Ok(())
}
