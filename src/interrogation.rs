//! # Interrogation Answer Resolver
//!
//! Answers free-text questions about a [`Scenario`] with terse, in-universe database
//! responses. Classification is plain substring matching against an ordered table of
//! keyword groups; the first group that matches wins:
//!
//! 1. culprit questions ("who", "killer", "katil", ...) are always refused;
//! 2. scene / medical keywords return the crime-scene report;
//! 3. motive keywords return a generic redirect, or the named suspect's file;
//! 4. a suspect's full name returns their alibi (with alibi / location keywords) or
//!    their motive;
//! 5. anything else gets the keyword help line.
//!
//! Matching is by substring, not by word, so "who" also catches "whose" and "whom":
//! "Whose alibi is weakest, Eva Frost?" is refused like any culprit question.
//!
//! Keywords of both languages are always active; `language` only selects the phrasing.
//! The resolver holds no state and uses no randomness, so the same input always
//! yields the same answer. Question quotas belong to the caller (see
//! [`CaseFile`](crate::casefile::CaseFile)).

use log::{debug, error};

use crate::logutil::escape_log;
use crate::model::{Category, Language, Scenario, Suspect};
use crate::template::render;

/// What a question was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Culprit,
    Scene,
    Motive,
    Alibi,
    Profile,
    Unclear,
}

struct KeywordGroup {
    intent: Intent,
    keywords: &'static [&'static str],
}

/// Checked in order; earlier groups shadow later ones.
const RULES: [KeywordGroup; 3] = [
    KeywordGroup {
        intent: Intent::Culprit,
        keywords: &[
            "killer", "who", "guilty", "culprit", "katil", "suçlu", "kimdir", "kim yaptı",
        ],
    },
    KeywordGroup {
        intent: Intent::Scene,
        keywords: &[
            "autopsy",
            "body",
            "corpse",
            "cause of death",
            "crime scene",
            "otopsi",
            "ceset",
            "ölüm sebebi",
            "olay yeri",
        ],
    },
    KeywordGroup {
        intent: Intent::Motive,
        keywords: &["motive", "why", "motif", "neden"],
    },
];

const ALIBI_KEYWORDS: &[&str] = &["alibi", "where", "nerede", "mazeret"];

struct Phrases {
    denied: &'static str,
    scene: &'static str,
    /// Report title and cause label, by category (homicide, cyber, theft).
    reports: [(&'static str, &'static str); 3],
    motive: &'static str,
    statement: &'static str,
    profile: &'static str,
    unclear: &'static str,
}

const TURKISH: Phrases = Phrases {
    denied: "BU BİLGİYE ERİŞİM YETKİNİZ YOK (5. SEVİYE GÜVENLİK). Lütfen şüphelileri fiziksel kanıtlarla karşılaştırın.",
    scene: "{report}: {description} {label}: {cause}.",
    reports: [
        ("OTOPSİ RAPORU", "Ölüm Sebebi"),
        ("OLAY RAPORU", "Saldırı Yöntemi"),
        ("OLAY YERİ RAPORU", "Çalınan Eser"),
    ],
    motive: "VERİTABANI: Tüm şüphelilerin yeterli motifi bulunuyor. Alibileri zaman damgalarıyla karşılaştırın.",
    statement: "İFADE TUTANAĞI ({name}): \"{alibi}\"",
    profile: "İSTİHBARAT DOSYASI ({name}): Motif: {motive}",
    unclear: "SORGU ANLAŞILAMADI. Anahtar kelimeler kullanın: 'Otopsi', 'Alibi', 'Şüpheli Adı', 'Motif'.",
};

const ENGLISH: Phrases = Phrases {
    denied: "ACCESS DENIED (LEVEL 5 SECURITY). Please verify suspects against physical evidence.",
    scene: "{report}: {description} {label}: {cause}.",
    reports: [
        ("AUTOPSY REPORT", "Cause of Death"),
        ("INCIDENT REPORT", "Attack Vector"),
        ("SCENE REPORT", "Stolen Item"),
    ],
    motive: "DATABASE: All suspects had sufficient motive. Cross-reference alibis with timestamps.",
    statement: "STATEMENT ({name}): \"{alibi}\"",
    profile: "INTELLIGENCE FILE ({name}): Motive: {motive}",
    unclear: "QUERY UNCLEAR. Use specific keywords: 'Autopsy', 'Alibi', 'Suspect Name', 'Motive'.",
};

fn phrases(language: Language) -> &'static Phrases {
    match language {
        Language::Tr => &TURKISH,
        Language::En => &ENGLISH,
    }
}

/// Lower-case for matching. Drops the combining dot that `İ` leaves behind so
/// "KATİL" still matches "katil".
fn normalize(s: &str) -> String {
    s.to_lowercase().replace('\u{307}', "")
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// First suspect whose full name appears in the (normalized) question.
fn mentioned_suspect<'a>(scenario: &'a Scenario, question: &str) -> Option<&'a Suspect> {
    scenario
        .suspects
        .iter()
        .find(|s| question.contains(&normalize(&s.name)))
}

/// Classify a question without answering it.
pub fn classify(scenario: &Scenario, question: &str) -> Intent {
    let q = normalize(question);
    if let Some(rule) = RULES.iter().find(|r| contains_any(&q, r.keywords)) {
        if rule.intent == Intent::Motive && mentioned_suspect(scenario, &q).is_some() {
            return Intent::Profile;
        }
        return rule.intent;
    }
    match mentioned_suspect(scenario, &q) {
        Some(_) if contains_any(&q, ALIBI_KEYWORDS) => Intent::Alibi,
        Some(_) => Intent::Profile,
        None => Intent::Unclear,
    }
}

/// Answer `question` about `scenario`, phrased in `language`. Never fails.
pub fn resolve(scenario: &Scenario, question: &str, language: Language) -> String {
    let p = phrases(language);
    let intent = classify(scenario, question);
    debug!(
        "interrogation [{}] {:?}: {}",
        language,
        intent,
        escape_log(question)
    );

    let q = normalize(question);
    let rendered = match intent {
        Intent::Culprit => return p.denied.to_string(),
        Intent::Motive => return p.motive.to_string(),
        Intent::Unclear => return p.unclear.to_string(),
        Intent::Scene => {
            let (report, label) = p.reports[report_slot(scenario.category())];
            render(
                p.scene,
                &[
                    ("report", report),
                    ("description", scenario.crime_scene.description.as_str()),
                    ("label", label),
                    ("cause", scenario.crime_scene.cause.as_str()),
                ],
            )
        }
        Intent::Alibi | Intent::Profile => match mentioned_suspect(scenario, &q) {
            Some(s) if intent == Intent::Alibi => render(
                p.statement,
                &[("name", s.name.as_str()), ("alibi", s.alibi.as_str())],
            ),
            Some(s) => render(
                p.profile,
                &[("name", s.name.as_str()), ("motive", s.motive.as_str())],
            ),
            None => return p.unclear.to_string(),
        },
    };

    rendered.unwrap_or_else(|e| {
        error!("interrogation phrase failed to render: {}", e);
        p.unclear.to_string()
    })
}

fn report_slot(category: Category) -> usize {
    match category {
        Category::Homicide => 0,
        Category::Cyber => 1,
        Category::Theft => 2,
    }
}
