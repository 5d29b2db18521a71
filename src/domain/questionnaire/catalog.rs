//! Static question catalog, fixed at compile time.

use serde::Serialize;

use crate::domain::foundation::Dimension;

/// Number of questions asked per dimension.
pub const QUESTIONS_PER_DIMENSION: usize = 5;

/// Total number of questions in the assessment.
pub const TOTAL_QUESTIONS: usize = QUESTIONS_PER_DIMENSION * Dimension::COUNT;

/// A single prompt belonging to exactly one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub dimension: Dimension,
    pub prompt: &'static str,
}

impl Question {
    const fn new(dimension: Dimension, prompt: &'static str) -> Self {
        Self { dimension, prompt }
    }
}

const PHYSICALITY: [Question; QUESTIONS_PER_DIMENSION] = [
    Question::new(Dimension::Physicality, "I find that physical rituals (e.g., prayer, fasting) make me feel connected to my beliefs."),
    Question::new(Dimension::Physicality, "Attending religious or spiritual gatherings in person is essential to my practice."),
    Question::new(Dimension::Physicality, "Physical symbols (e.g., icons, sacred objects) hold deep significance for me."),
    Question::new(Dimension::Physicality, "I feel most connected to my beliefs when I engage in physical expressions like dancing or singing."),
    Question::new(Dimension::Physicality, "My spiritual experiences are most meaningful when they are physically grounded."),
];

const PSYCHOLOGICAL: [Question; QUESTIONS_PER_DIMENSION] = [
    Question::new(Dimension::Psychological, "I rely on self-reflection or introspection to navigate emotions and actions."),
    Question::new(Dimension::Psychological, "My beliefs are closely tied to understanding my mind and emotions."),
    Question::new(Dimension::Psychological, "I align my beliefs with my emotional and mental well-being."),
    Question::new(Dimension::Psychological, "I often look for meaning within my thoughts and experiences."),
    Question::new(Dimension::Psychological, "My beliefs help me process my psychological states."),
];

const SCIENTIFIC: [Question; QUESTIONS_PER_DIMENSION] = [
    Question::new(Dimension::Scientific, "I seek scientific explanations for phenomena in my spiritual beliefs."),
    Question::new(Dimension::Scientific, "I value scientific advancements that challenge or align with my faith."),
    Question::new(Dimension::Scientific, "Empirical evidence is important in shaping my worldview."),
    Question::new(Dimension::Scientific, "I think science and religion should coexist harmoniously."),
    Question::new(Dimension::Scientific, "I question religious teachings that conflict with scientific understanding."),
];

const SPIRITUAL: [Question; QUESTIONS_PER_DIMENSION] = [
    Question::new(Dimension::Spiritual, "I often feel connected to something greater than myself."),
    Question::new(Dimension::Spiritual, "I value mystical experiences and a deep spiritual connection."),
    Question::new(Dimension::Spiritual, "Spirituality for me is about surrendering to the unknown."),
    Question::new(Dimension::Spiritual, "I feel drawn inward, exploring depths beyond conscious understanding."),
    Question::new(Dimension::Spiritual, "I embrace spiritual experiences that challenge my understanding."),
];

/// Returns the questions for one dimension, in display order.
pub fn questions_for(dimension: Dimension) -> &'static [Question; QUESTIONS_PER_DIMENSION] {
    match dimension {
        Dimension::Physicality => &PHYSICALITY,
        Dimension::Psychological => &PSYCHOLOGICAL,
        Dimension::Scientific => &SCIENTIFIC,
        Dimension::Spiritual => &SPIRITUAL,
    }
}

/// Iterates over every question, grouped by dimension in canonical order.
pub fn all_questions() -> impl Iterator<Item = &'static Question> {
    Dimension::ALL
        .into_iter()
        .flat_map(|d| questions_for(d).iter())
}
