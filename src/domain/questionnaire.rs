//! Onboarding symptom questionnaire: fixed bank of seven sections and
//! seventeen multiple-choice questions. Option scores run from 0 (healthy)
//! upwards; higher is more concerning.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// question id -> selected option value
pub type QuestionnaireAnswers = HashMap<String, String>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Fatigue,
    Dizziness,
    Heart,
    Appearance,
    Diet,
    Menstrual,
    Medical,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionOption {
    pub label: &'static str,
    pub value: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn max_score(&self) -> u32 {
        self.options.iter().map(|o| o.score).max().unwrap_or(0)
    }

    pub fn option(&self, value: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireSection {
    pub id: SectionId,
    pub title: &'static str,
    pub emoji: &'static str,
    pub questions: &'static [Question],
}

const fn opt(label: &'static str, value: &'static str, score: u32) -> QuestionOption {
    QuestionOption {
        label,
        value,
        score,
    }
}

pub static QUESTIONNAIRE_SECTIONS: &[QuestionnaireSection] = &[
    QuestionnaireSection {
        id: SectionId::Fatigue,
        title: "Fatigue & Energy",
        emoji: "😴",
        questions: &[
            Question {
                id: "q_tired",
                text: "How often do you feel tired or weak?",
                options: &[
                    opt("Never", "never", 0),
                    opt("Sometimes", "sometimes", 1),
                    opt("Often", "often", 2),
                    opt("Almost always", "always", 3),
                ],
            },
            Question {
                id: "q_exhausted_sleep",
                text: "Do you feel exhausted even after adequate sleep?",
                options: &[
                    opt("No", "no", 0),
                    opt("Occasionally", "occasionally", 1),
                    opt("Frequently", "frequently", 3),
                ],
            },
        ],
    },
    QuestionnaireSection {
        id: SectionId::Dizziness,
        title: "Dizziness & Head Symptoms",
        emoji: "🧠",
        questions: &[
            Question {
                id: "q_dizzy",
                text: "Do you experience dizziness or lightheadedness?",
                options: &[
                    opt("No", "no", 0),
                    opt("Rarely", "rarely", 1),
                    opt("Sometimes", "sometimes", 2),
                    opt("Frequently", "frequently", 3),
                ],
            },
            Question {
                id: "q_headaches",
                text: "Do you get headaches often?",
                options: &[
                    opt("No", "no", 0),
                    opt("Occasionally", "occasionally", 1),
                    opt("Frequently", "frequently", 3),
                ],
            },
        ],
    },
    QuestionnaireSection {
        id: SectionId::Heart,
        title: "Heart & Breathing",
        emoji: "❤️",
        questions: &[
            Question {
                id: "q_breath",
                text: "Do you feel shortness of breath during normal activity?",
                options: &[
                    opt("No", "no", 0),
                    opt("Mild", "mild", 1),
                    opt("Moderate", "moderate", 2),
                    opt("Severe", "severe", 3),
                ],
            },
            Question {
                id: "q_palpitations",
                text: "Do you notice rapid heartbeat or palpitations?",
                options: &[
                    opt("No", "no", 0),
                    opt("Sometimes", "sometimes", 1),
                    opt("Frequently", "frequently", 3),
                ],
            },
        ],
    },
    QuestionnaireSection {
        id: SectionId::Appearance,
        title: "Skin, Nails & Appearance",
        emoji: "👁️",
        questions: &[
            Question {
                id: "q_pale",
                text: "Have you noticed pale skin, lips, or inner eyelids?",
                options: &[
                    opt("No", "no", 0),
                    opt("Slightly", "slightly", 1),
                    opt("Very pale", "very_pale", 3),
                ],
            },
            Question {
                id: "q_nails",
                text: "Are your nails brittle or spoon-shaped?",
                options: &[
                    opt("No", "no", 0),
                    opt("Yes", "yes", 3),
                    opt("Not sure", "not_sure", 1),
                ],
            },
            Question {
                id: "q_hairfall",
                text: "Do you experience hair fall?",
                options: &[
                    opt("No", "no", 0),
                    opt("Mild", "mild", 1),
                    opt("Severe", "severe", 3),
                ],
            },
        ],
    },
    QuestionnaireSection {
        id: SectionId::Diet,
        title: "Diet & Nutrition",
        emoji: "🍽️",
        questions: &[
            Question {
                id: "q_iron_foods",
                text: "How often do you eat iron-rich foods (green vegetables, beans, meat, jaggery)?",
                options: &[
                    opt("Daily", "daily", 0),
                    opt("3–4 times/week", "moderate", 1),
                    opt("Rarely", "rarely", 2),
                    opt("Never", "never", 3),
                ],
            },
            Question {
                id: "q_diet_type",
                text: "Are you vegetarian or vegan?",
                options: &[
                    opt("Non-vegetarian", "non_veg", 0),
                    opt("Vegetarian", "vegetarian", 1),
                    opt("Vegan", "vegan", 2),
                ],
            },
            Question {
                id: "q_supplements",
                text: "Do you take iron supplements?",
                options: &[
                    opt("Yes, regularly", "regularly", 0),
                    opt("Sometimes", "sometimes", 1),
                    opt("No", "no", 2),
                ],
            },
        ],
    },
    QuestionnaireSection {
        id: SectionId::Menstrual,
        title: "Menstrual & Bleeding History",
        emoji: "🩸",
        questions: &[
            Question {
                id: "q_flow",
                text: "How would you describe your menstrual flow?",
                options: &[
                    opt("Light", "light", 0),
                    opt("Normal", "normal", 0),
                    opt("Heavy", "heavy", 2),
                    opt("Very heavy", "very_heavy", 3),
                ],
            },
            Question {
                id: "q_period_duration",
                text: "How long does your period usually last?",
                options: &[
                    opt("< 3 days", "short", 0),
                    opt("3–5 days", "normal", 0),
                    opt("6–7 days", "long", 1),
                    opt("More than 7 days", "very_long", 3),
                ],
            },
            Question {
                id: "q_bleeding_between",
                text: "Do you experience bleeding between periods?",
                options: &[
                    opt("No", "no", 0),
                    opt("Occasionally", "occasionally", 1),
                    opt("Frequently", "frequently", 3),
                ],
            },
        ],
    },
    QuestionnaireSection {
        id: SectionId::Medical,
        title: "Medical History & Lab",
        emoji: "🏥",
        questions: &[
            Question {
                id: "q_anemia_before",
                text: "Have you been diagnosed with anemia before?",
                options: &[
                    opt("No", "no", 0),
                    opt("Yes", "yes", 2),
                    opt("Not sure", "not_sure", 1),
                ],
            },
            Question {
                id: "q_chronic",
                text: "Do you have any chronic diseases?",
                options: &[
                    opt("None", "none", 0),
                    opt("Kidney disease", "kidney", 3),
                    opt("Thyroid disorder", "thyroid", 2),
                    opt("Diabetes", "diabetes", 2),
                    opt("Other", "other", 1),
                ],
            },
            Question {
                id: "q_surgery",
                text: "Have you recently had surgery or major blood loss?",
                options: &[opt("No", "no", 0), opt("Yes", "yes", 3)],
            },
            Question {
                id: "q_hemoglobin",
                text: "Do you know your recent Hemoglobin (Hb) level?",
                options: &[
                    opt("Above 12 g/dL", "normal", 0),
                    opt("10–12 g/dL", "mild_low", 1),
                    opt("7–10 g/dL", "moderate_low", 2),
                    opt("Below 7 g/dL", "severe_low", 3),
                    opt("Don't know", "unknown", 0),
                ],
            },
        ],
    },
];

pub fn total_questions() -> usize {
    QUESTIONNAIRE_SECTIONS
        .iter()
        .map(|section| section.questions.len())
        .sum()
}

static QUESTION_INDEX: Lazy<HashMap<&'static str, &'static Question>> = Lazy::new(|| {
    QUESTIONNAIRE_SECTIONS
        .iter()
        .flat_map(|section| section.questions.iter())
        .map(|question| (question.id, question))
        .collect()
});

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTION_INDEX.get(id).copied()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Condition {
    Anemia,
    #[serde(rename = "Iron Deficiency")]
    IronDeficiency,
    #[serde(rename = "PCOS")]
    Pcos,
    #[serde(rename = "Thyroid Disorder")]
    ThyroidDisorder,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestRecommendation {
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl TestRecommendation {
    fn new(name: &str, description: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Anemia => "Anemia",
            Condition::IronDeficiency => "Iron Deficiency",
            Condition::Pcos => "PCOS",
            Condition::ThyroidDisorder => "Thyroid Disorder",
        }
    }

    pub fn recommended_tests(&self) -> Vec<TestRecommendation> {
        match self {
            Condition::Anemia => vec![
                TestRecommendation::new(
                    "Complete Blood Count (CBC)",
                    "A complete blood count will confirm hemoglobin and ferritin levels.",
                    "biotech",
                ),
                TestRecommendation::new(
                    "Hemoglobin Test",
                    "Measures hemoglobin levels to detect iron deficiency.",
                    "science",
                ),
            ],
            Condition::IronDeficiency => vec![
                TestRecommendation::new(
                    "Blood Test (CBC)",
                    "A complete blood count will confirm hemoglobin and ferritin levels.",
                    "biotech",
                ),
                TestRecommendation::new(
                    "Consult Physician",
                    "Discuss these results with your GP to develop a personalized care plan.",
                    "medical-services",
                ),
            ],
            Condition::Pcos => vec![
                TestRecommendation::new(
                    "Pelvic Ultrasound",
                    "Ultrasound imaging to check for ovarian cysts.",
                    "monitor-heart",
                ),
                TestRecommendation::new(
                    "LH & FSH Levels",
                    "Hormone tests to assess luteinizing and follicle-stimulating hormones.",
                    "biotech",
                ),
            ],
            Condition::ThyroidDisorder => vec![
                TestRecommendation::new(
                    "TSH Test",
                    "Thyroid-stimulating hormone test to evaluate thyroid function.",
                    "biotech",
                ),
                TestRecommendation::new(
                    "T3 & T4 Levels",
                    "Measures active thyroid hormones in the blood.",
                    "science",
                ),
            ],
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Condition::IronDeficiency | Condition::Anemia => {
                "Based on your reported symptoms of persistent fatigue and paleness, the analysis has identified patterns consistent with low iron levels."
            }
            Condition::Pcos => {
                "Based on your reported symptoms including irregular periods and hormonal indicators, the analysis has identified patterns that may be associated with polycystic ovary syndrome."
            }
            Condition::ThyroidDisorder => {
                "Based on your symptoms of fatigue, hair changes and related history, the analysis has identified patterns that may suggest thyroid function imbalance."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_shape() {
        assert_eq!(QUESTIONNAIRE_SECTIONS.len(), 7);
        assert_eq!(total_questions(), 19);
        for question in QUESTIONNAIRE_SECTIONS.iter().flat_map(|s| s.questions) {
            assert!((2..=5).contains(&question.options.len()), "{}", question.id);
        }
    }

    #[test]
    fn test_question_max_scores() {
        assert_eq!(find_question("q_tired").unwrap().max_score(), 3);
        assert_eq!(find_question("q_diet_type").unwrap().max_score(), 2);
        assert_eq!(find_question("q_anemia_before").unwrap().max_score(), 2);
        assert!(find_question("q_unknown").is_none());
    }

    #[test]
    fn test_condition_labels_serialize() {
        for condition in [
            Condition::Anemia,
            Condition::IronDeficiency,
            Condition::Pcos,
            Condition::ThyroidDisorder,
        ] {
            let json = serde_json::to_string(&condition).unwrap();
            assert_eq!(json, format!("\"{}\"", condition.label()));
        }
    }

    #[test]
    fn test_every_condition_recommends_two_tests() {
        for condition in [
            Condition::Anemia,
            Condition::IronDeficiency,
            Condition::Pcos,
            Condition::ThyroidDisorder,
        ] {
            assert_eq!(condition.recommended_tests().len(), 2);
            assert!(!condition.explanation().is_empty());
        }
        assert_eq!(Condition::Pcos.recommended_tests()[0].name, "Pelvic Ultrasound");
    }
}
