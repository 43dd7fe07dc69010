//! Onboarding questionnaire analysis: section tallies, a first-match
//! condition rule list, percentage risk and answer-coverage confidence.

use crate::domain::models::RiskLevel;
use crate::domain::questionnaire::{
    find_question, total_questions, Condition, QuestionnaireAnswers, SectionId, TestRecommendation,
    QUESTIONNAIRE_SECTIONS,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub const SCREENING_KIND: &str = "symptom_track";

const CONFIDENCE_FLOOR: usize = 55;
const CONFIDENCE_SPAN: usize = 40;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SectionBreakdown {
    pub section: SectionId,
    pub title: &'static str,
    pub score: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScreeningResult {
    pub condition: Condition,
    pub risk: RiskLevel,
    pub confidence: u8,
    pub tests: Vec<TestRecommendation>,
    pub sections: Vec<SectionBreakdown>,
}

impl ScreeningResult {
    pub fn explanation(&self) -> &'static str {
        self.condition.explanation()
    }
}

/// A stored screening, as returned by the screening endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub kind: String,
    pub condition: Condition,
    pub risk: RiskLevel,
    pub confidence: u8,
    pub tests: Vec<TestRecommendation>,
    pub answers: QuestionnaireAnswers,
    pub timestamp: DateTime<Utc>,
}

impl ScreeningRecord {
    pub fn new(result: ScreeningResult, answers: QuestionnaireAnswers, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: SCREENING_KIND.to_string(),
            condition: result.condition,
            risk: result.risk,
            confidence: result.confidence,
            tests: result.tests,
            answers,
            timestamp: now,
        }
    }

    /// Plain-text summary for the share sheet.
    pub fn share_message(&self) -> String {
        let tests: Vec<String> = self.tests.iter().map(|t| format!("• {}", t.name)).collect();
        format!(
            "NaariSetu Health Screening\n\nCondition: {}\nRisk Level: {}\nConfidence: {}%\n\nRecommended Tests:\n{}\n\n⚠️ This is not a medical diagnosis.",
            self.condition.label(),
            self.risk.as_str(),
            self.confidence,
            tests.join("\n")
        )
    }
}

struct ScreeningSignals<'a> {
    totals: HashMap<SectionId, u32>,
    answers: &'a QuestionnaireAnswers,
}

impl ScreeningSignals<'_> {
    fn total(&self, section: SectionId) -> u32 {
        self.totals.get(&section).copied().unwrap_or(0)
    }

    fn answered(&self, question: &str, value: &str) -> bool {
        self.answers.get(question).map(String::as_str) == Some(value)
    }
}

fn thyroid_indicators(s: &ScreeningSignals) -> bool {
    s.answered("q_chronic", "thyroid")
        || (s.answered("q_hairfall", "severe") && s.total(SectionId::Fatigue) >= 3)
}

fn irregular_bleeding(s: &ScreeningSignals) -> bool {
    s.total(SectionId::Menstrual) >= 4 && s.answered("q_bleeding_between", "frequently")
}

fn low_hemoglobin_history(s: &ScreeningSignals) -> bool {
    s.answered("q_hemoglobin", "moderate_low")
        || s.answered("q_hemoglobin", "severe_low")
        || s.answered("q_anemia_before", "yes")
}

fn iron_deficiency_signs(s: &ScreeningSignals) -> bool {
    s.total(SectionId::Fatigue) >= 3
        || s.total(SectionId::Dizziness) >= 3
        || (s.total(SectionId::Diet) >= 3 && s.total(SectionId::Appearance) >= 2)
}

fn heart_symptoms(s: &ScreeningSignals) -> bool {
    s.total(SectionId::Heart) >= 3
}

/// Evaluated in order; the first match names the condition.
const CONDITION_RULES: &[(fn(&ScreeningSignals) -> bool, Condition)] = &[
    (thyroid_indicators, Condition::ThyroidDisorder),
    (irregular_bleeding, Condition::Pcos),
    (low_hemoglobin_history, Condition::Anemia),
    (iron_deficiency_signs, Condition::IronDeficiency),
    (heart_symptoms, Condition::Anemia),
];

fn section_breakdown(answers: &QuestionnaireAnswers) -> Vec<SectionBreakdown> {
    QUESTIONNAIRE_SECTIONS
        .iter()
        .map(|section| {
            let score = section
                .questions
                .iter()
                .filter_map(|q| answers.get(q.id).and_then(|value| q.option(value)))
                .map(|option| option.score)
                .sum();
            let max = section.questions.iter().map(|q| q.max_score()).sum();
            SectionBreakdown {
                section: section.id,
                title: section.title,
                score,
                max,
            }
        })
        .collect()
}

fn classify_condition(signals: &ScreeningSignals) -> Condition {
    CONDITION_RULES
        .iter()
        .find(|(applies, _)| applies(signals))
        .map(|(_, condition)| *condition)
        .unwrap_or(Condition::IronDeficiency)
}

fn screening_risk(score: u32, max: u32) -> RiskLevel {
    let pct = if max == 0 {
        0.0
    } else {
        score as f64 / max as f64 * 100.0
    };
    if pct > 50.0 {
        RiskLevel::High
    } else if pct > 25.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// 55 with nothing answered, rising to 95 with the whole bank answered.
fn screening_confidence(answers: &QuestionnaireAnswers) -> u8 {
    let answered = answers
        .iter()
        .filter(|(id, value)| !value.is_empty() && find_question(id).is_some())
        .count();
    let total = total_questions().max(1);
    (CONFIDENCE_FLOOR + CONFIDENCE_SPAN * answered / total) as u8
}

pub fn analyze_answers(answers: &QuestionnaireAnswers) -> ScreeningResult {
    let sections = section_breakdown(answers);
    let signals = ScreeningSignals {
        totals: sections.iter().map(|s| (s.section, s.score)).collect(),
        answers,
    };

    let condition = classify_condition(&signals);
    let score: u32 = sections.iter().map(|s| s.score).sum();
    let max: u32 = sections.iter().map(|s| s.max).sum();

    ScreeningResult {
        condition,
        risk: screening_risk(score, max),
        confidence: screening_confidence(answers),
        tests: condition.recommended_tests(),
        sections,
    }
}
