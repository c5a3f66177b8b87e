//! Inquiry sequence composition: essential questions, dialectical pairs,
//! synthesis, practical applications, the fixed learning pathway, and the
//! depth progression for one topic.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{clamp_count, validated_topic};
use crate::catalog::{self, TemplateCategory};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::history::{HistoryEntry, HistorySink};
use crate::types::{
    InquiryDepth, InquirySequenceResult, LearningContext, Question, QuestionType,
};

/// Thesis/antithesis theme pairs for dialectical questioning, in emission
/// order.
const DIALECTICAL_THEMES: &[(&str, &str)] = &[
    ("individual", "collective"),
    ("tradition", "innovation"),
    ("efficiency", "equity"),
    ("freedom", "responsibility"),
    ("local", "global"),
];

/// Fixed eight-step learning pathway, identical for every call.
const LEARNING_PATHWAY: &[&str] = &[
    "Begin with personal reflection on essential questions",
    "Explore multiple perspectives through dialectical inquiry",
    "Engage in dialogue with others holding different viewpoints",
    "Seek synthesis and integration of diverse perspectives",
    "Apply insights through practical experimentation",
    "Reflect on learning and identify next questions",
    "Share insights with learning community",
    "Iterate and deepen understanding",
];

const PRACTICAL_FOLLOW_UPS: &[&str] = &[
    "What would be the first step?",
    "What resources and support would be needed?",
    "How would we know if we're making progress?",
];

/// Builds structured question progressions for one topic.
pub struct InquirySequenceComposer {
    config: EngineConfig,
    history: Arc<dyn HistorySink>,
}

impl InquirySequenceComposer {
    pub fn new(history: Arc<dyn HistorySink>) -> Self {
        Self::with_config(EngineConfig::default(), history)
    }

    pub fn with_config(config: EngineConfig, history: Arc<dyn HistorySink>) -> Self {
        Self { config, history }
    }

    /// Generate with the configured default context and depth.
    pub fn generate_default(&self, topic: &str) -> Result<InquirySequenceResult> {
        self.generate(
            topic,
            self.config.default_context,
            self.config.default_depth,
        )
    }

    /// Generate a full inquiry sequence. `depth` slices the essential,
    /// dialectical, and practical catalogs; synthesis and the depth
    /// progression keep their fixed counts regardless.
    pub fn generate(
        &self,
        topic: &str,
        context: LearningContext,
        depth: i32,
    ) -> Result<InquirySequenceResult> {
        let topic = validated_topic(topic)?;
        tracing::info!(
            "generate_inquiry_sequence called (topic_len={}, context={}, depth={})",
            topic.len(),
            context.as_str(),
            depth
        );

        let essential_questions = essential_questions(topic, context, depth);
        let dialectical_pairs = dialectical_pairs(topic, context, depth);
        let synthesis_questions = synthesis_questions(topic);
        let practical_applications = practical_applications(topic, context, depth);
        let learning_pathway: Vec<String> =
            LEARNING_PATHWAY.iter().map(|s| s.to_string()).collect();
        let depth_progression = depth_progression(topic, context);

        tracing::debug!(
            "composed inquiry sequence (essential={}, pairs={}, practical={})",
            essential_questions.len(),
            dialectical_pairs.len(),
            practical_applications.len()
        );

        let result = InquirySequenceResult {
            topic: topic.to_string(),
            essential_questions,
            dialectical_pairs,
            synthesis_questions,
            practical_applications,
            learning_pathway,
            depth_progression,
        };

        self.history
            .append(HistoryEntry::new(context, serde_json::to_value(&result)?));
        Ok(result)
    }
}

fn essential_questions(topic: &str, context: LearningContext, depth: i32) -> Vec<Question> {
    let templates = catalog::lookup(TemplateCategory::Essential, context);
    let take = clamp_count(depth, templates.len());
    templates[..take]
        .iter()
        .enumerate()
        .map(|(i, template)| Question {
            text: catalog::interpolate(template, topic),
            question_type: QuestionType::Essential,
            depth_level: InquiryDepth::Analytical,
            context: context.as_str().to_string(),
            follow_ups: catalog::ESSENTIAL_FOLLOW_UPS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            reasoning: format!(
                "Essential question {} designed to explore fundamental aspects of {}",
                i + 1,
                topic
            ),
        })
        .collect()
}

fn dialectical_pairs(
    topic: &str,
    context: LearningContext,
    depth: i32,
) -> Vec<(Question, Question)> {
    let take = clamp_count(depth, DIALECTICAL_THEMES.len());
    DIALECTICAL_THEMES[..take]
        .iter()
        .map(|(thesis_theme, antithesis_theme)| {
            (
                dialectical_question(topic, context, thesis_theme, "thesis"),
                dialectical_question(topic, context, antithesis_theme, "antithesis"),
            )
        })
        .collect()
}

fn dialectical_question(
    topic: &str,
    context: LearningContext,
    theme: &str,
    role: &str,
) -> Question {
    Question {
        text: format!("How does {} serve {} interests and values?", topic, theme),
        question_type: QuestionType::Dialectical,
        depth_level: InquiryDepth::Analytical,
        context: context.as_str().to_string(),
        follow_ups: vec![
            format!("What evidence supports this {} perspective?", theme),
            format!("Who benefits most from this {} approach?", theme),
            format!(
                "What are the limitations of focusing solely on {} aspects?",
                theme
            ),
        ],
        reasoning: format!(
            "Dialectical {} exploring {} dimension of {}",
            role, theme, topic
        ),
    }
}

/// Always exactly three questions; the depth knob does not apply here.
fn synthesis_questions(topic: &str) -> Vec<Question> {
    vec![
        Question {
            text: format!(
                "How can we integrate multiple perspectives on {} into a coherent understanding?",
                topic
            ),
            question_type: QuestionType::Synthetic,
            depth_level: InquiryDepth::Transformative,
            context: "synthesis".to_string(),
            follow_ups: vec![
                "What common ground exists across different viewpoints?".to_string(),
                "Where are the irreconcilable differences, and how do we navigate them?"
                    .to_string(),
                "What new possibilities emerge from this integration?".to_string(),
            ],
            reasoning: "Synthesis question for integrating multiple perspectives".to_string(),
        },
        Question {
            text: format!("What would a truly innovative approach to {} look like?", topic),
            question_type: QuestionType::Emergent,
            depth_level: InquiryDepth::Emergent,
            context: "innovation".to_string(),
            follow_ups: vec![
                "What assumptions would we need to let go of?".to_string(),
                "What would success look like in this new approach?".to_string(),
                "How would we know if we're moving in the right direction?".to_string(),
            ],
            reasoning: "Emergent question for innovative thinking".to_string(),
        },
        Question {
            text: format!(
                "How does our understanding of {} change our responsibility to act?",
                topic
            ),
            question_type: QuestionType::Practical,
            depth_level: InquiryDepth::Transformative,
            context: "action".to_string(),
            follow_ups: vec![
                "What are the ethical implications of what we've learned?".to_string(),
                "What would we do differently based on this understanding?".to_string(),
                "How do we maintain accountability to these insights?".to_string(),
            ],
            reasoning: "Action-oriented synthesis question".to_string(),
        },
    ]
}

fn practical_applications(topic: &str, context: LearningContext, depth: i32) -> Vec<Question> {
    let templates = catalog::lookup(TemplateCategory::Practical, context);
    let take = clamp_count(depth, templates.len());
    templates[..take]
        .iter()
        .map(|template| Question {
            text: catalog::interpolate(template, topic),
            question_type: QuestionType::Practical,
            depth_level: InquiryDepth::Analytical,
            context: context.as_str().to_string(),
            follow_ups: PRACTICAL_FOLLOW_UPS.iter().map(|s| s.to_string()).collect(),
            reasoning: format!(
                "Practical application question for {} context",
                context.as_str()
            ),
        })
        .collect()
}

/// One fixed question per depth level; always four entries, whatever the
/// requested depth.
fn depth_progression(
    topic: &str,
    context: LearningContext,
) -> BTreeMap<InquiryDepth, Vec<Question>> {
    let context_tag = context.as_str().to_string();
    let mut progression = BTreeMap::new();
    progression.insert(
        InquiryDepth::Surface,
        vec![Question {
            text: format!("What do I already know about {}?", topic),
            question_type: QuestionType::Essential,
            depth_level: InquiryDepth::Surface,
            context: context_tag.clone(),
            follow_ups: vec!["Where did this knowledge come from?".to_string()],
            reasoning: "Surface level exploration".to_string(),
        }],
    );
    progression.insert(
        InquiryDepth::Analytical,
        vec![Question {
            text: format!("How do different experts or authorities view {}?", topic),
            question_type: QuestionType::Perspective,
            depth_level: InquiryDepth::Analytical,
            context: context_tag.clone(),
            follow_ups: vec!["What are the underlying assumptions in each view?".to_string()],
            reasoning: "Analytical comparison of perspectives".to_string(),
        }],
    );
    progression.insert(
        InquiryDepth::Transformative,
        vec![Question {
            text: format!(
                "How does deep understanding of {} change how I see the world?",
                topic
            ),
            question_type: QuestionType::Synthetic,
            depth_level: InquiryDepth::Transformative,
            context: context_tag.clone(),
            follow_ups: vec!["What beliefs or assumptions am I now questioning?".to_string()],
            reasoning: "Transformative reflection on worldview changes".to_string(),
        }],
    );
    progression.insert(
        InquiryDepth::Emergent,
        vec![Question {
            text: format!(
                "What new questions about {} are emerging that nobody has asked before?",
                topic
            ),
            question_type: QuestionType::Emergent,
            depth_level: InquiryDepth::Emergent,
            context: context_tag,
            follow_ups: vec!["How might these questions reshape our understanding?".to_string()],
            reasoning: "Emergent inquiry generation".to_string(),
        }],
    );
    progression
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::NullHistory;

    fn composer() -> InquirySequenceComposer {
        InquirySequenceComposer::new(Arc::new(NullHistory))
    }

    #[test]
    fn test_depth_slices_essential_and_dialectical() {
        let result = composer()
            .generate("climate adaptation", LearningContext::Educational, 2)
            .unwrap();
        assert_eq!(result.essential_questions.len(), 2);
        assert_eq!(result.dialectical_pairs.len(), 2);
        assert_eq!(result.practical_applications.len(), 2);
    }

    #[test]
    fn test_zero_depth_yields_empty_sliced_channels() {
        let result = composer()
            .generate("climate adaptation", LearningContext::Personal, 0)
            .unwrap();
        assert!(result.essential_questions.is_empty());
        assert!(result.dialectical_pairs.is_empty());
        assert!(result.practical_applications.is_empty());
        // Fixed channels keep their counts.
        assert_eq!(result.synthesis_questions.len(), 3);
        assert_eq!(result.learning_pathway.len(), 8);
        assert_eq!(result.depth_progression.len(), 4);
    }

    #[test]
    fn test_oversized_depth_caps_at_catalog() {
        let result = composer()
            .generate("climate adaptation", LearningContext::Personal, 40)
            .unwrap();
        assert_eq!(result.essential_questions.len(), 5);
        assert_eq!(result.dialectical_pairs.len(), 5);
        assert_eq!(result.practical_applications.len(), 3);
    }

    #[test]
    fn test_dialectical_pair_themes_oppose() {
        let result = composer()
            .generate("urban planning", LearningContext::Social, 1)
            .unwrap();
        let (thesis, antithesis) = &result.dialectical_pairs[0];
        assert!(thesis.text.contains("individual"));
        assert!(antithesis.text.contains("collective"));
        assert_eq!(thesis.question_type, QuestionType::Dialectical);
        assert_eq!(antithesis.question_type, QuestionType::Dialectical);
    }

    #[test]
    fn test_essential_reasoning_is_indexed() {
        let result = composer()
            .generate("urban planning", LearningContext::Personal, 3)
            .unwrap();
        assert!(result.essential_questions[0].reasoning.starts_with("Essential question 1"));
        assert!(result.essential_questions[2].reasoning.starts_with("Essential question 3"));
    }

    #[test]
    fn test_blank_topic_is_rejected() {
        assert!(composer()
            .generate("  ", LearningContext::Personal, 3)
            .is_err());
    }
}
