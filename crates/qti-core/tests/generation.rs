//! Strict batch generation.

use qti_core::{
    GenerationOptions, check_generation_eligibility, generate_batch, generate_question,
};
use qti_model::{
    GenerationErrorCode, GenerationStatus, Question, QuestionKind, ValidationStatus,
};

fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn capital_question() -> Question {
    Question::mcq(
        "q1",
        "CAP-001",
        "What is the capital of France?",
        options(&["Paris", "London", "Berlin"]),
        "A",
    )
}

#[test]
fn valid_question_is_generated() {
    let outcome = generate_question(&capital_question(), &GenerationOptions::default());
    assert!(outcome.is_success());
    let xml = outcome.question.generated_output.as_deref().expect("output");
    assert!(xml.contains("identifier=\"CAP-001\""));
    assert!(xml.contains("<value>A</value>"));
    assert_eq!(outcome.question.generation_status, Some(GenerationStatus::Success));
    assert!(outcome.question.generation_errors.is_empty());
}

#[test]
fn input_question_is_left_untouched() {
    let question = capital_question();
    let _ = generate_question(&question, &GenerationOptions::default());
    assert_eq!(question.generated_output, None);
    assert_eq!(question.generation_status, None);
}

#[test]
fn numeric_answer_resolves_to_letter() {
    let question = Question::mcq("q2", "NUM", "Pick the second option", options(&["x1", "x2"]), "2");
    let outcome = generate_question(&question, &GenerationOptions::default());
    let xml = outcome.question.generated_output.expect("output");
    assert!(xml.contains("<value>B</value>"));
}

#[test]
fn status_gate_runs_first() {
    let question = capital_question()
        .with_status(ValidationStatus::Rejected)
        .with_kind(QuestionKind::Msq);
    let outcome = generate_question(&question, &GenerationOptions::default());
    let error = outcome.error.expect("error");
    assert_eq!(error.code, GenerationErrorCode::InvalidStatus);
    assert_eq!(error.message, "Question validation status is 'Rejected', not 'Valid'");
    assert_eq!(outcome.question.generation_status, Some(GenerationStatus::Failed));
    assert_eq!(outcome.question.generation_errors, vec![error]);
}

#[test]
fn caution_needs_lenient_options() {
    let question = capital_question().with_status(ValidationStatus::Caution);

    let strict = generate_question(&question, &GenerationOptions::default());
    assert_eq!(
        strict.error.map(|e| e.code),
        Some(GenerationErrorCode::InvalidStatus)
    );

    let lenient = generate_question(&question, &GenerationOptions::lenient());
    assert!(lenient.is_success());
}

#[test]
fn only_mcq_is_supported() {
    let question = capital_question().with_kind(QuestionKind::ShortAnswer);
    let error = generate_question(&question, &GenerationOptions::default())
        .error
        .expect("error");
    assert_eq!(error.code, GenerationErrorCode::UnsupportedType);
    assert_eq!(
        error.message,
        "Question type 'ShortAnswer' is not supported in this version (only MCQ)"
    );
}

#[test]
fn builder_refusals_carry_the_builder_message() {
    let question = Question::mcq("q3", "OOR", "Which one is right?", options(&["a", "b", "c"]), "E");
    let error = generate_question(&question, &GenerationOptions::default())
        .error
        .expect("error");
    assert_eq!(error.code, GenerationErrorCode::McqGenerationError);
    assert_eq!(error.message, "Correct answer \"E\" exceeds number of options (3)");
}

#[test]
fn batch_continues_past_failures() {
    let questions = vec![
        capital_question(),
        Question::mcq("q2", "ZED", "Which letter is last?", options(&["Y", "Z"]), "Z"),
        Question::mcq("q3", "TWO", "Two plus two equals?", options(&["3", "4"]), "B"),
    ];

    let run = generate_batch(&questions, &GenerationOptions::default());
    assert_eq!(run.summary.total, 3);
    assert_eq!(run.summary.success, 2);
    assert_eq!(run.summary.failed, 1);
    assert_eq!(run.questions.len(), 3);

    let failure = &run.summary.errors[0];
    assert_eq!(failure.question_id, "q2");
    assert_eq!(failure.error.code, GenerationErrorCode::McqGenerationError);
    assert_eq!(
        failure.error.message,
        "Correct answer \"Z\" exceeds number of options (2)"
    );

    let statuses: Vec<_> = run.questions.iter().map(|q| q.generation_status).collect();
    assert_eq!(
        statuses,
        vec![
            Some(GenerationStatus::Success),
            Some(GenerationStatus::Failed),
            Some(GenerationStatus::Success),
        ]
    );
}

#[test]
fn single_option_is_refused() {
    let question = Question::mcq("q4", "ONE", "Only one option here", options(&["lonely"]), "A");
    let error = generate_question(&question, &GenerationOptions::default())
        .error
        .expect("error");
    assert_eq!(error.code, GenerationErrorCode::McqGenerationError);
    assert_eq!(error.message, "Question must have at least 2 options");
}

#[test]
fn empty_batch_has_empty_summary() {
    let run = generate_batch(&[], &GenerationOptions::default());
    assert_eq!(run.summary.total, 0);
    assert_eq!(run.summary.success_rate(), 0.0);
    assert!(!run.summary.has_failures());
}

#[test]
fn eligibility_lists_every_problem() {
    let questions = vec![
        capital_question(),
        Question::mcq("q2", "BAD", "Broken question", options(&["only"]), "A")
            .with_status(ValidationStatus::Caution)
            .with_kind(QuestionKind::Msq),
    ];

    let report = check_generation_eligibility(&questions, &GenerationOptions::default());
    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec![
            "Question BAD: Invalid validation status 'Caution'",
            "Question BAD: Unsupported type 'MSQ' (only MCQ supported)",
            "Question BAD: Insufficient options (need at least 2)",
        ]
    );

    let ok = check_generation_eligibility(&questions[..1], &GenerationOptions::default());
    assert!(ok.valid);
    assert!(ok.errors.is_empty());
}
