//! Core types: context/type/depth/readiness tags and the record structs
//! produced by the engines.

use serde::Serialize;
use std::collections::BTreeMap;

/// Contexts for inquiry-based learning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningContext {
    Personal,
    Educational,
    Organizational,
    Social,
    Research,
}

#[allow(clippy::should_implement_trait)]
impl LearningContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningContext::Personal => "personal",
            LearningContext::Educational => "educational",
            LearningContext::Organizational => "organizational",
            LearningContext::Social => "social",
            LearningContext::Research => "research",
        }
    }

    /// Unknown values normalize to Personal.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "educational" => LearningContext::Educational,
            "organizational" => LearningContext::Organizational,
            "social" => LearningContext::Social,
            "research" => LearningContext::Research,
            _ => LearningContext::Personal,
        }
    }
}

/// Types of transformative questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Essential,
    Dialectical,
    Perspective,
    Emergent,
    Synthetic,
    Practical,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Essential => "essential",
            QuestionType::Dialectical => "dialectical",
            QuestionType::Perspective => "perspective",
            QuestionType::Emergent => "emergent",
            QuestionType::Synthetic => "synthetic",
            QuestionType::Practical => "practical",
        }
    }
}

/// Levels of inquiry depth, ordered surface -> emergent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryDepth {
    Surface,
    Analytical,
    Transformative,
    Emergent,
}

impl InquiryDepth {
    pub const ALL: [InquiryDepth; 4] = [
        InquiryDepth::Surface,
        InquiryDepth::Analytical,
        InquiryDepth::Transformative,
        InquiryDepth::Emergent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryDepth::Surface => "surface",
            InquiryDepth::Analytical => "analytical",
            InquiryDepth::Transformative => "transformative",
            InquiryDepth::Emergent => "emergent",
        }
    }
}

/// Learner readiness tiers derived from a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ReadinessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessLevel::Beginner => "beginner",
            ReadinessLevel::Intermediate => "intermediate",
            ReadinessLevel::Advanced => "advanced",
        }
    }
}

/// A single transformative question with its follow-ups and provenance note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub text: String,
    pub question_type: QuestionType,
    pub depth_level: InquiryDepth,
    pub context: String,
    pub follow_ups: Vec<String>,
    pub reasoning: String,
}

/// A stakeholder perspective on a topic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Perspective {
    pub stakeholder: String,
    pub viewpoint: String,
    pub concerns: Vec<String>,
    pub opportunities: Vec<String>,
    pub questions: Vec<String>,
}

/// Result of inquiry sequence generation for one topic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InquirySequenceResult {
    pub topic: String,
    pub essential_questions: Vec<Question>,
    pub dialectical_pairs: Vec<(Question, Question)>,
    pub synthesis_questions: Vec<Question>,
    pub practical_applications: Vec<Question>,
    pub learning_pathway: Vec<String>,
    pub depth_progression: BTreeMap<InquiryDepth, Vec<Question>>,
}

/// Result of perspective rotation analysis for one topic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerspectiveRotationResult {
    pub topic: String,
    pub perspectives: Vec<Perspective>,
    pub synthesis_insights: Vec<String>,
    pub bridging_questions: Vec<Question>,
    pub collaborative_opportunities: Vec<String>,
    pub potential_conflicts: Vec<String>,
}

/// One stage of a learning pathway. The optional fields are the additive
/// readiness overlay; base fields are never replaced by it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningStage {
    pub name: String,
    pub focus: String,
    pub activities: Vec<String>,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaffolding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub independence: Option<String>,
}

/// An assessment strategy attached to a pathway
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub frequency: String,
}

/// A recommended resource category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub recommendations: String,
    pub purpose: String,
}

/// Reflection questions for one cadence of the pathway
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectionProtocol {
    pub stage: String,
    pub questions: Vec<String>,
}

/// A designed learning pathway for one topic and learner profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPathway {
    pub topic: String,
    pub learner_profile: BTreeMap<String, String>,
    pub readiness_level: ReadinessLevel,
    pub learning_stages: Vec<LearningStage>,
    pub assessments: Vec<Assessment>,
    pub resources: Vec<Resource>,
    pub reflection_protocols: Vec<ReflectionProtocol>,
    pub estimated_duration: String,
    pub success_indicators: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_str_known_values() {
        assert_eq!(
            LearningContext::from_str("educational"),
            LearningContext::Educational
        );
        assert_eq!(
            LearningContext::from_str("ORGANIZATIONAL"),
            LearningContext::Organizational
        );
        assert_eq!(LearningContext::from_str("social"), LearningContext::Social);
        assert_eq!(
            LearningContext::from_str("research"),
            LearningContext::Research
        );
    }

    #[test]
    fn test_context_from_str_unknown_falls_back_to_personal() {
        assert_eq!(LearningContext::from_str(""), LearningContext::Personal);
        assert_eq!(
            LearningContext::from_str("corporate"),
            LearningContext::Personal
        );
    }

    #[test]
    fn test_depth_order_matches_progression() {
        assert!(InquiryDepth::Surface < InquiryDepth::Analytical);
        assert!(InquiryDepth::Analytical < InquiryDepth::Transformative);
        assert!(InquiryDepth::Transformative < InquiryDepth::Emergent);
    }

    #[test]
    fn test_enum_tags_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&QuestionType::Dialectical).unwrap(),
            "\"dialectical\""
        );
        assert_eq!(
            serde_json::to_string(&InquiryDepth::Transformative).unwrap(),
            "\"transformative\""
        );
        assert_eq!(
            serde_json::to_string(&ReadinessLevel::Beginner).unwrap(),
            "\"beginner\""
        );
    }
}
