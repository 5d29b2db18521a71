//! Questionnaire module - static prompts and the user's answers.

mod answer_sheet;
mod catalog;

pub use answer_sheet::{AnswerSheet, DimensionAnswers};
pub use catalog::{
    all_questions, questions_for, Question, QUESTIONS_PER_DIMENSION, TOTAL_QUESTIONS,
};
