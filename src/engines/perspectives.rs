//! Perspective rotation: systematic enumeration of stakeholder viewpoints
//! for a topic within a context, with synthesis and bridging derivations.

use std::sync::Arc;

use super::{clamp_count, validated_topic};
use crate::catalog;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::history::{HistoryEntry, HistorySink};
use crate::types::{
    InquiryDepth, LearningContext, Perspective, PerspectiveRotationResult, Question, QuestionType,
};

/// Insights from cross-perspective synthesis. Topic-interpolated; content
/// does not vary with the selected stakeholder set.
const SYNTHESIS_INSIGHTS: &[&str] = &[
    "Multiple stakeholders share common concerns about transparency and fairness in {topic}",
    "Different perspectives reveal complementary rather than competing interests in {topic}",
    "Successful implementation of {topic} requires addressing diverse stakeholder needs simultaneously",
    "The complexity of {topic} becomes clearer when viewed through multiple lenses",
    "Creative solutions emerge when we consider how {topic} can serve multiple stakeholder groups",
];

const COLLABORATIVE_OPPORTUNITIES: &[&str] = &[
    "Shared learning initiatives where stakeholders educate each other",
    "Joint problem-solving sessions focused on common challenges",
    "Collaborative pilot projects that test solutions together",
    "Cross-stakeholder advisory groups for ongoing dialogue",
    "Resource sharing arrangements that benefit multiple groups",
];

const POTENTIAL_CONFLICTS: &[&str] = &[
    "Resource allocation priorities may differ significantly between groups",
    "Timeline preferences may conflict between stakeholders with different urgencies",
    "Risk tolerance levels vary substantially across stakeholder groups",
    "Cultural values and approaches to change may clash",
    "Information sharing preferences may create transparency tensions",
];

/// Enumerates stakeholder perspectives and derives synthesis material.
pub struct PerspectiveRotationEngine {
    config: EngineConfig,
    history: Arc<dyn HistorySink>,
}

impl PerspectiveRotationEngine {
    pub fn new(history: Arc<dyn HistorySink>) -> Self {
        Self::with_config(EngineConfig::default(), history)
    }

    pub fn with_config(config: EngineConfig, history: Arc<dyn HistorySink>) -> Self {
        Self { config, history }
    }

    /// Rotate with the configured default stakeholder count and context.
    pub fn rotate_default(&self, topic: &str) -> Result<PerspectiveRotationResult> {
        self.rotate(
            topic,
            self.config.default_stakeholders,
            self.config.default_context,
        )
    }

    /// Systematically explore stakeholder perspectives on a topic. The count
    /// is clamped to the context's catalog; identities are taken in catalog
    /// order with no repeats and none invented.
    pub fn rotate(
        &self,
        topic: &str,
        stakeholders: i32,
        context: LearningContext,
    ) -> Result<PerspectiveRotationResult> {
        let topic = validated_topic(topic)?;
        tracing::info!(
            "rotate_perspectives called (topic_len={}, stakeholders={}, context={})",
            topic.len(),
            stakeholders,
            context.as_str()
        );

        let perspectives = stakeholder_perspectives(topic, stakeholders, context);
        tracing::debug!("rotated {} perspectives", perspectives.len());

        let result = PerspectiveRotationResult {
            topic: topic.to_string(),
            perspectives,
            synthesis_insights: SYNTHESIS_INSIGHTS
                .iter()
                .map(|template| catalog::interpolate(template, topic))
                .collect(),
            bridging_questions: bridging_questions(topic),
            collaborative_opportunities: COLLABORATIVE_OPPORTUNITIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            potential_conflicts: POTENTIAL_CONFLICTS.iter().map(|s| s.to_string()).collect(),
        };

        self.history
            .append(HistoryEntry::new(context, serde_json::to_value(&result)?));
        Ok(result)
    }
}

fn stakeholder_perspectives(
    topic: &str,
    count: i32,
    context: LearningContext,
) -> Vec<Perspective> {
    let identities = catalog::stakeholders_for(context);
    let take = clamp_count(count, identities.len());
    identities[..take]
        .iter()
        .map(|stakeholder| Perspective {
            stakeholder: stakeholder.to_string(),
            viewpoint: format!(
                "From a {} perspective, {} represents both opportunities and challenges for our interests and values.",
                stakeholder, topic
            ),
            concerns: vec![
                format!("How will {} affect our core interests?", topic),
                format!("What risks does {} pose to our wellbeing?", topic),
                format!("How can we have a voice in decisions about {}?", topic),
            ],
            opportunities: vec![
                format!("How can {} advance our goals?", topic),
                format!("What new possibilities does {} create?", topic),
                format!("How can we contribute positively to {}?", topic),
            ],
            questions: vec![
                format!("What would {} most want to know about {}?", stakeholder, topic),
                format!("What would {} most fear about {}?", stakeholder, topic),
                format!("What would {} most hope for regarding {}?", stakeholder, topic),
            ],
        })
        .collect()
}

/// Always exactly two questions, whatever the stakeholder count.
fn bridging_questions(topic: &str) -> Vec<Question> {
    vec![
        Question {
            text: format!(
                "What shared values can unite different stakeholders around {}?",
                topic
            ),
            question_type: QuestionType::Synthetic,
            depth_level: InquiryDepth::Transformative,
            context: "bridging".to_string(),
            follow_ups: vec![
                "Where do stakeholder interests naturally align?".to_string(),
                "What would win-win solutions look like?".to_string(),
                "How can we build on common ground?".to_string(),
            ],
            reasoning: "Question designed to find shared values across perspectives".to_string(),
        },
        Question {
            text: format!(
                "How can we address the legitimate concerns of each stakeholder group regarding {}?",
                topic
            ),
            question_type: QuestionType::Practical,
            depth_level: InquiryDepth::Analytical,
            context: "problem-solving".to_string(),
            follow_ups: vec![
                "What would each group need to feel heard and respected?".to_string(),
                "Where are the non-negotiable boundaries for each group?".to_string(),
                "What creative compromises might be possible?".to_string(),
            ],
            reasoning: "Question focused on inclusive problem-solving".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::NullHistory;

    fn engine() -> PerspectiveRotationEngine {
        PerspectiveRotationEngine::new(Arc::new(NullHistory))
    }

    #[test]
    fn test_identities_follow_catalog_order() {
        let result = engine()
            .rotate("supply chains", 3, LearningContext::Organizational)
            .unwrap();
        let names: Vec<&str> = result
            .perspectives
            .iter()
            .map(|p| p.stakeholder.as_str())
            .collect();
        assert_eq!(names, ["employees", "managers", "customers"]);
    }

    #[test]
    fn test_count_clamps_to_catalog_without_repeats() {
        let result = engine()
            .rotate("supply chains", 10, LearningContext::Organizational)
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
    fn test_zero_count_yields_no_perspectives() {
        let result = engine()
            .rotate("supply chains", 0, LearningContext::Personal)
            .unwrap();
        assert!(result.perspectives.is_empty());
        // Derived lists keep their fixed counts.
        assert_eq!(result.synthesis_insights.len(), 5);
        assert_eq!(result.collaborative_opportunities.len(), 5);
        assert_eq!(result.potential_conflicts.len(), 5);
        assert_eq!(result.bridging_questions.len(), 2);
    }

    #[test]
    fn test_insights_interpolate_topic() {
        let result = engine()
            .rotate("supply chains", 2, LearningContext::Social)
            .unwrap();
        assert!(result.synthesis_insights[0].contains("supply chains"));
        assert!(!result.synthesis_insights[0].contains("{topic}"));
    }

    #[test]
    fn test_bridging_question_types() {
        let result = engine()
            .rotate("supply chains", 1, LearningContext::Research)
            .unwrap();
        assert_eq!(
            result.bridging_questions[0].question_type,
            QuestionType::Synthetic
        );
        assert_eq!(
            result.bridging_questions[1].question_type,
            QuestionType::Practical
        );
    }
}
