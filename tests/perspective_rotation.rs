//! Integration tests for perspective rotation.

use std::sync::Arc;

use inquiry_mind::PerspectiveRotationEngine;
use inquiry_mind::history::{MemoryHistory, NullHistory};
use inquiry_mind::types::LearningContext;

fn engine() -> PerspectiveRotationEngine {
    PerspectiveRotationEngine::new(Arc::new(NullHistory))
}

#[test]
fn test_organizational_catalog_caps_at_eight_unique_identities() {
    let result = engine()
        .rotate(
            "remote work culture transformation",
            10,
            LearningContext::Organizational,
        )
        .unwrap();
    assert_eq!(result.perspectives.len(), 8);

    let mut names: Vec<&str> = result
        .perspectives
        .iter()
        .map(|p| p.stakeholder.as_str())
        .collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 8);
}

#[test]
fn test_perspectives_carry_full_record_shape() {
    let result = engine()
        .rotate("city transit", 4, LearningContext::Social)
        .unwrap();
    assert_eq!(result.perspectives.len(), 4);
    for perspective in &result.perspectives {
        assert!(perspective.viewpoint.contains("city transit"));
        assert!(perspective.viewpoint.contains(&perspective.stakeholder));
        assert_eq!(perspective.concerns.len(), 3);
        assert_eq!(perspective.opportunities.len(), 3);
        assert_eq!(perspective.questions.len(), 3);
        assert!(perspective.questions[0].contains(&perspective.stakeholder));
    }
}

#[test]
fn test_derived_lists_keep_fixed_counts() {
    let small = engine()
        .rotate("city transit", 1, LearningContext::Personal)
        .unwrap();
    let large = engine()
        .rotate("city transit", 8, LearningContext::Personal)
        .unwrap();
    for result in [&small, &large] {
        assert_eq!(result.synthesis_insights.len(), 5);
        assert_eq!(result.collaborative_opportunities.len(), 5);
        assert_eq!(result.potential_conflicts.len(), 5);
        assert_eq!(result.bridging_questions.len(), 2);
    }
    // The derived lists do not vary with the selected stakeholder set.
    assert_eq!(small.synthesis_insights, large.synthesis_insights);
    assert_eq!(small.potential_conflicts, large.potential_conflicts);
}

#[test]
fn test_unknown_context_uses_personal_stakeholders() {
    let fallback = engine()
        .rotate("city transit", 3, LearningContext::from_str("municipal"))
        .unwrap();
    let personal = engine()
        .rotate("city transit", 3, LearningContext::Personal)
        .unwrap();
    assert_eq!(fallback.perspectives, personal.perspectives);
}

#[test]
fn test_repeated_calls_are_identical() {
    let engine = engine();
    let first = engine
        .rotate("city transit", 6, LearningContext::Research)
        .unwrap();
    let second = engine
        .rotate("city transit", 6, LearningContext::Research)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invocation_appends_history_with_result_payload() {
    let history = Arc::new(MemoryHistory::new());
    let engine = PerspectiveRotationEngine::new(history.clone());
    engine
        .rotate("city transit", 2, LearningContext::Organizational)
        .unwrap();

    let entries = history.snapshot();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].context, "organizational");
    assert_eq!(
        entries[0].result["perspectives"].as_array().unwrap().len(),
        2
    );
}

#[test]
fn test_blank_topic_is_rejected() {
    assert!(engine().rotate("", 3, LearningContext::Personal).is_err());
}
