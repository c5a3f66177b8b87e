//! Static template catalog: per-category template tables with topic
//! interpolation and a single PERSONAL fallback for context lookups.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::types::LearningContext;

/// Template categories served by [`lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    Essential,
    Practical,
}

/// Essential question templates. Context-independent.
const ESSENTIAL_TEMPLATES: &[&str] = &[
    "What is the fundamental nature of {topic}?",
    "Why does {topic} matter in our current context?",
    "How does {topic} challenge our existing assumptions?",
    "What would change if we fully understood {topic}?",
    "What questions does {topic} raise that we haven't considered?",
];

/// Follow-ups attached to every essential question. Static phrasing.
pub const ESSENTIAL_FOLLOW_UPS: &[&str] = &[
    "How does this connect to your personal experience?",
    "What evidence supports or challenges this perspective?",
    "What would someone from a different background think?",
];

const PERSONAL_PRACTICAL: &[&str] = &[
    "How can I apply insights about {topic} in my daily life?",
    "What changes would I need to make to align with my understanding of {topic}?",
    "How can I continue learning about {topic} in meaningful ways?",
];

const EDUCATIONAL_PRACTICAL: &[&str] = &[
    "How can we design learning experiences that help others understand {topic}?",
    "What assessment methods would capture deep understanding of {topic}?",
    "How can we make {topic} relevant and engaging for diverse learners?",
];

const ORGANIZATIONAL_PRACTICAL: &[&str] = &[
    "How can our organization implement insights about {topic}?",
    "What systems and structures need to change to support {topic}?",
    "How can we measure progress and impact related to {topic}?",
];

const SOCIAL_PRACTICAL: &[&str] = &[
    "How can communities work together to address {topic}?",
    "What policies and practices would support positive change around {topic}?",
    "How can we engage diverse stakeholders in conversations about {topic}?",
];

const RESEARCH_PRACTICAL: &[&str] = &[
    "What research questions about {topic} remain unexplored?",
    "How can we study {topic} in ways that honor its complexity?",
    "What methodologies would best capture the nuances of {topic}?",
];

static PRACTICAL_TEMPLATES: Lazy<HashMap<LearningContext, &'static [&'static str]>> =
    Lazy::new(|| {
        HashMap::from([
            (LearningContext::Personal, PERSONAL_PRACTICAL),
            (LearningContext::Educational, EDUCATIONAL_PRACTICAL),
            (LearningContext::Organizational, ORGANIZATIONAL_PRACTICAL),
            (LearningContext::Social, SOCIAL_PRACTICAL),
            (LearningContext::Research, RESEARCH_PRACTICAL),
        ])
    });

const PERSONAL_STAKEHOLDERS: &[&str] = &[
    "current self",
    "future self",
    "family",
    "friends",
    "mentors",
    "critics",
    "strangers",
    "cultural background",
];

const EDUCATIONAL_STAKEHOLDERS: &[&str] = &[
    "students",
    "teachers",
    "administrators",
    "parents",
    "community members",
    "policymakers",
    "researchers",
    "industry partners",
];

const ORGANIZATIONAL_STAKEHOLDERS: &[&str] = &[
    "employees",
    "managers",
    "customers",
    "shareholders",
    "competitors",
    "regulators",
    "communities",
    "suppliers",
];

const SOCIAL_STAKEHOLDERS: &[&str] = &[
    "citizens",
    "government",
    "activists",
    "businesses",
    "media",
    "researchers",
    "international observers",
    "future generations",
];

const RESEARCH_STAKEHOLDERS: &[&str] = &[
    "researchers",
    "participants",
    "funders",
    "peer reviewers",
    "practitioners",
    "policymakers",
    "affected communities",
    "skeptics",
];

static STAKEHOLDER_SETS: Lazy<HashMap<LearningContext, &'static [&'static str]>> =
    Lazy::new(|| {
        HashMap::from([
            (LearningContext::Personal, PERSONAL_STAKEHOLDERS),
            (LearningContext::Educational, EDUCATIONAL_STAKEHOLDERS),
            (LearningContext::Organizational, ORGANIZATIONAL_STAKEHOLDERS),
            (LearningContext::Social, SOCIAL_STAKEHOLDERS),
            (LearningContext::Research, RESEARCH_STAKEHOLDERS),
        ])
    });

fn context_entry(
    table: &HashMap<LearningContext, &'static [&'static str]>,
    context: LearningContext,
    fallback: &'static [&'static str],
) -> &'static [&'static str] {
    table.get(&context).copied().unwrap_or(fallback)
}

/// Ordered template sequence for a category and context. Contexts without an
/// entry fall back to the PERSONAL set; total for every context value.
pub fn lookup(category: TemplateCategory, context: LearningContext) -> &'static [&'static str] {
    match category {
        TemplateCategory::Essential => ESSENTIAL_TEMPLATES,
        TemplateCategory::Practical => {
            context_entry(&PRACTICAL_TEMPLATES, context, PERSONAL_PRACTICAL)
        }
    }
}

/// Stakeholder identity list for a context, PERSONAL fallback.
pub fn stakeholders_for(context: LearningContext) -> &'static [&'static str] {
    context_entry(&STAKEHOLDER_SETS, context, PERSONAL_STAKEHOLDERS)
}

/// Substitute the topic into a template's single `{topic}` hole, verbatim.
pub fn interpolate(template: &str, topic: &str) -> String {
    template.replace("{topic}", topic)
}
