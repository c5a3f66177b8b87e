//! Learning pathway design: readiness classification from a learner
//! profile, the fixed five-stage progression with its readiness overlay,
//! and the attached assessment/resource/reflection catalogs.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::validated_topic;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::history::{HistoryEntry, HistorySink};
use crate::types::{
    Assessment, LearningContext, LearningPathway, LearningStage, ReadinessLevel,
    ReflectionProtocol, Resource,
};

struct StageTemplate {
    name: &'static str,
    focus: &'static str,
    activities: [&'static str; 3],
    duration: &'static str,
}

const STAGE_TEMPLATES: &[StageTemplate] = &[
    StageTemplate {
        name: "Exploration and Orientation",
        focus: "Understanding the landscape and developing initial questions",
        activities: [
            "Personal reflection on existing knowledge and experiences",
            "Exploration of diverse perspectives and approaches",
            "Generation of initial questions and learning goals",
        ],
        duration: "1-2 weeks",
    },
    StageTemplate {
        name: "Deep Inquiry and Analysis",
        focus: "Systematic investigation through structured questioning",
        activities: [
            "Dialectical exploration of different viewpoints",
            "Research and evidence gathering",
            "Dialogue with experts and peers",
        ],
        duration: "2-3 weeks",
    },
    StageTemplate {
        name: "Synthesis and Integration",
        focus: "Connecting insights and developing understanding",
        activities: [
            "Pattern recognition and connection making",
            "Integration of multiple perspectives",
            "Development of personal frameworks and models",
        ],
        duration: "1-2 weeks",
    },
    StageTemplate {
        name: "Application and Experimentation",
        focus: "Testing understanding through practical application",
        activities: [
            "Design and implementation of practical experiments",
            "Real-world application of insights",
            "Collaboration on meaningful projects",
        ],
        duration: "2-3 weeks",
    },
    StageTemplate {
        name: "Reflection and Evolution",
        focus: "Learning from experience and planning next steps",
        activities: [
            "Comprehensive reflection on learning journey",
            "Assessment of growth and change",
            "Identification of new questions and directions",
        ],
        duration: "1 week",
    },
];

const SUCCESS_INDICATORS: &[&str] = &[
    "Ability to ask increasingly sophisticated questions about the topic",
    "Demonstration of multi-perspective understanding",
    "Evidence of personal transformation or growth",
    "Application of insights in real-world contexts",
    "Continued curiosity and motivation for further learning",
    "Contribution to others' learning and understanding",
];

/// Designs readiness-adjusted learning pathways for one topic and profile.
pub struct PathwayScheduler {
    config: EngineConfig,
    history: Arc<dyn HistorySink>,
}

impl PathwayScheduler {
    pub fn new(history: Arc<dyn HistorySink>) -> Self {
        Self::with_config(EngineConfig::default(), history)
    }

    pub fn with_config(config: EngineConfig, history: Arc<dyn HistorySink>) -> Self {
        Self { config, history }
    }

    /// Design with the configured default context.
    pub fn design_default(
        &self,
        topic: &str,
        profile: &BTreeMap<String, String>,
    ) -> Result<LearningPathway> {
        self.design(topic, profile, self.config.default_context)
    }

    /// Design a learning pathway. Missing profile fields take their
    /// documented defaults; nothing in the profile is ever rejected.
    pub fn design(
        &self,
        topic: &str,
        profile: &BTreeMap<String, String>,
        context: LearningContext,
    ) -> Result<LearningPathway> {
        let topic = validated_topic(topic)?;
        tracing::info!(
            "design_learning_pathway called (topic_len={}, profile_fields={}, context={})",
            topic.len(),
            profile.len(),
            context.as_str()
        );

        let readiness_level = classify_readiness(profile);
        let learning_stages: Vec<LearningStage> = STAGE_TEMPLATES
            .iter()
            .map(|template| overlay(base_stage(template), readiness_level))
            .collect();
        let estimated_duration = format!("{} weeks", learning_stages.len() * 2);

        tracing::debug!(
            "designed pathway (readiness={}, stages={})",
            readiness_level.as_str(),
            learning_stages.len()
        );

        let result = LearningPathway {
            topic: topic.to_string(),
            learner_profile: profile.clone(),
            readiness_level,
            learning_stages,
            assessments: assessments(),
            resources: resources(),
            reflection_protocols: reflection_protocols(),
            estimated_duration,
            success_indicators: SUCCESS_INDICATORS.iter().map(|s| s.to_string()).collect(),
        };

        self.history
            .append(HistoryEntry::new(context, serde_json::to_value(&result)?));
        Ok(result)
    }
}

fn profile_field<'a>(
    profile: &'a BTreeMap<String, String>,
    key: &str,
    default: &'a str,
) -> &'a str {
    profile.get(key).map(|v| v.as_str()).unwrap_or(default)
}

/// Deterministic readiness truth table over the profile fields.
pub fn classify_readiness(profile: &BTreeMap<String, String>) -> ReadinessLevel {
    let experience = profile_field(profile, "experience_level", "beginner");
    let motivation = profile_field(profile, "motivation_level", "medium");
    // time_available is normalized to "limited" but does not affect the tier.
    let _time_available = profile_field(profile, "time_available", "limited");

    if experience == "advanced" && motivation == "high" {
        ReadinessLevel::Advanced
    } else if experience == "intermediate" || motivation == "high" {
        ReadinessLevel::Intermediate
    } else {
        ReadinessLevel::Beginner
    }
}

fn base_stage(template: &StageTemplate) -> LearningStage {
    LearningStage {
        name: template.name.to_string(),
        focus: template.focus.to_string(),
        activities: template.activities.iter().map(|s| s.to_string()).collect(),
        duration: template.duration.to_string(),
        support_level: None,
        scaffolding: None,
        complexity: None,
        independence: None,
    }
}

/// Additive merge of readiness metadata onto a base stage. Base fields are
/// never replaced; intermediate adds nothing.
pub fn overlay(stage: LearningStage, readiness: ReadinessLevel) -> LearningStage {
    match readiness {
        ReadinessLevel::Beginner => LearningStage {
            support_level: Some("high".to_string()),
            scaffolding: Some("extensive".to_string()),
            ..stage
        },
        ReadinessLevel::Intermediate => stage,
        ReadinessLevel::Advanced => LearningStage {
            complexity: Some("high".to_string()),
            independence: Some("maximum".to_string()),
            ..stage
        },
    }
}

fn assessments() -> Vec<Assessment> {
    vec![
        Assessment {
            name: "Inquiry Portfolio".to_string(),
            description: "Collection of questions, explorations, and reflections".to_string(),
            kind: "formative".to_string(),
            frequency: "ongoing".to_string(),
        },
        Assessment {
            name: "Perspective Analysis".to_string(),
            description: "Demonstration of multi-perspective understanding".to_string(),
            kind: "formative".to_string(),
            frequency: "mid-pathway".to_string(),
        },
        Assessment {
            name: "Synthesis Project".to_string(),
            description: "Creative integration of learning into meaningful output".to_string(),
            kind: "summative".to_string(),
            frequency: "end of pathway".to_string(),
        },
        Assessment {
            name: "Learning Reflection".to_string(),
            description: "Deep reflection on transformation and growth".to_string(),
            kind: "reflective".to_string(),
            frequency: "end of pathway".to_string(),
        },
    ]
}

fn resources() -> Vec<Resource> {
    vec![
        Resource {
            kind: "books".to_string(),
            recommendations: "Foundational texts and diverse perspectives on the topic"
                .to_string(),
            purpose: "Building knowledge base and exposure to different viewpoints".to_string(),
        },
        Resource {
            kind: "experts".to_string(),
            recommendations: "Practitioners, researchers, and thought leaders in the field"
                .to_string(),
            purpose: "Learning from experience and current thinking".to_string(),
        },
        Resource {
            kind: "communities".to_string(),
            recommendations: "Learning communities and discussion groups".to_string(),
            purpose: "Dialogue and collaborative exploration".to_string(),
        },
        Resource {
            kind: "experiences".to_string(),
            recommendations: "Direct experiences and immersive opportunities".to_string(),
            purpose: "Embodied learning and practical understanding".to_string(),
        },
    ]
}

fn reflection_protocols() -> Vec<ReflectionProtocol> {
    vec![
        ReflectionProtocol {
            stage: "weekly".to_string(),
            questions: vec![
                "What new questions emerged this week?".to_string(),
                "How has my understanding shifted?".to_string(),
                "What challenged my assumptions?".to_string(),
                "What do I want to explore next?".to_string(),
            ],
        },
        ReflectionProtocol {
            stage: "milestone".to_string(),
            questions: vec![
                "How has my relationship to this topic evolved?".to_string(),
                "What patterns am I beginning to see?".to_string(),
                "Where am I feeling stuck, and what might help?".to_string(),
                "How is this learning connecting to other areas of my life?".to_string(),
            ],
        },
        ReflectionProtocol {
            stage: "completion".to_string(),
            questions: vec![
                "What are the most significant insights from this learning journey?".to_string(),
                "How have I changed as a result of this exploration?".to_string(),
                "What questions will I continue to carry forward?".to_string(),
                "How will I apply what I've learned?".to_string(),
            ],
        },
    ]
}
