//! Flattens accumulated answers into the outgoing submission record.

use std::collections::HashMap;

use canvass_types::{AnswerValue, Answers, Catalog, OTHER_OPTION, Question, QuestionKey};

use crate::Record;

/// Check whether a question is visible given the answers so far.
///
/// A question without a condition is always visible. A conditioned question
/// is visible iff the referenced answer is a single value equal to the
/// condition's value. Multi-choice answers never satisfy a condition; this
/// scalar-only comparison is deliberate (see the catalog docs).
pub(crate) fn is_visible(question: &Question, answers: &Answers) -> bool {
    match question.condition() {
        None => true,
        Some(condition) => matches!(
            answers.get(&condition.key),
            Some(AnswerValue::Single(answer)) if *answer == condition.value
        ),
    }
}

/// Assemble the flat submission record for a catalog.
///
/// The record covers the full catalog key set in catalog order, whatever the
/// session state:
///
/// - visible, answered questions: multi-choice selections joined with `", "`
///   in selection order, single choices passed through unchanged;
/// - visible, unanswered text questions: the recorded free text, or `""`;
/// - everything else (invisible, or unanswered choice questions): `""`.
///
/// A second pass then overwrites any field that is still empty or holds the
/// literal [`OTHER_OPTION`] label with the free text recorded for that key,
/// so "Other" elaborations replace the raw option label on the wire.
pub fn assemble(
    catalog: &Catalog,
    answers: &Answers,
    free_text: &HashMap<QuestionKey, String>,
) -> Record {
    let mut record = Record::new();

    for question in catalog.questions() {
        let key = question.key();
        let value = if !is_visible(question, answers) {
            String::new()
        } else if let Some(answer) = answers.get(key) {
            answer.to_wire_string()
        } else if question.is_text_input() {
            free_text.get(key).cloned().unwrap_or_default()
        } else {
            String::new()
        };
        record.insert(key.clone(), value);
    }

    // Free text attached to an "Other (Please specify)" selection replaces
    // the raw label; free text for keys outside the catalog is dropped.
    for (key, text) in free_text {
        if let Some(field) = record.get_mut(key)
            && (field.is_empty() || field == OTHER_OPTION)
        {
            *field = text.clone();
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass_types::{Catalog, Question, Section};

    fn catalog() -> Catalog {
        Catalog::new(
            "Test",
            vec![
                Section::new(
                    "Demographics",
                    vec![
                        Question::single("AgeGroup", "Age Group:", ["Under 18", "18–24", "25–34"]),
                        Question::text("StateOrUT", "State/Union Territory:"),
                        Question::single(
                            "Gender",
                            "Gender:",
                            ["Female", "Male", OTHER_OPTION],
                        ),
                    ],
                ),
                Section::new(
                    "Safety",
                    vec![
                        Question::multi(
                            "UnsafePlaces",
                            "Where do you feel unsafe?",
                            ["At home", "In public spaces", "At work"],
                        ),
                        Question::text("SafetyDetail", "Please elaborate:")
                            .when("UnsafePlaces", "At work"),
                    ],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn full_key_set_in_catalog_order_even_when_unanswered() {
        let record = assemble(&catalog(), &Answers::new(), &HashMap::new());
        let keys: Vec<_> = record.keys().map(QuestionKey::as_str).collect();
        assert_eq!(
            keys,
            vec!["AgeGroup", "StateOrUT", "Gender", "UnsafePlaces", "SafetyDetail"]
        );
        assert!(record.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn multi_choice_joined_in_selection_order() {
        let mut answers = Answers::new();
        answers.insert("UnsafePlaces", vec!["In public spaces", "At home"]);
        let record = assemble(&catalog(), &answers, &HashMap::new());
        assert_eq!(
            record.get(&"UnsafePlaces".into()),
            Some("In public spaces, At home")
        );
    }

    #[test]
    fn text_question_uses_free_text() {
        let mut free_text = HashMap::new();
        free_text.insert(QuestionKey::new("StateOrUT"), "Gujarat".to_string());
        let record = assemble(&catalog(), &Answers::new(), &free_text);
        assert_eq!(record.get(&"StateOrUT".into()), Some("Gujarat"));
    }

    #[test]
    fn other_label_replaced_by_elaboration() {
        let mut answers = Answers::new();
        answers.insert("Gender", OTHER_OPTION);
        let mut free_text = HashMap::new();
        free_text.insert(QuestionKey::new("Gender"), "Non-binary".to_string());
        let record = assemble(&catalog(), &answers, &free_text);
        assert_eq!(record.get(&"Gender".into()), Some("Non-binary"));
    }

    #[test]
    fn non_sentinel_answer_not_replaced() {
        let mut answers = Answers::new();
        answers.insert("Gender", "Female");
        let mut free_text = HashMap::new();
        free_text.insert(QuestionKey::new("Gender"), "ignored".to_string());
        let record = assemble(&catalog(), &answers, &free_text);
        assert_eq!(record.get(&"Gender".into()), Some("Female"));
    }

    #[test]
    fn free_text_outside_catalog_dropped() {
        let mut free_text = HashMap::new();
        free_text.insert(QuestionKey::new("NotAQuestion"), "stray".to_string());
        let record = assemble(&catalog(), &Answers::new(), &free_text);
        assert_eq!(record.len(), 5);
        assert_eq!(record.get(&"NotAQuestion".into()), None);
    }

    #[test]
    fn invisible_question_emits_empty_even_if_answered() {
        let mut answers = Answers::new();
        // Condition references a multi-choice parent: never satisfied.
        answers.insert("UnsafePlaces", vec!["At work"]);
        answers.insert("SafetyDetail", "should not leak");
        let record = assemble(&catalog(), &answers, &HashMap::new());
        assert_eq!(record.get(&"SafetyDetail".into()), Some(""));
    }
}
