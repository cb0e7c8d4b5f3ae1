//! Case records.
//!
//! The engine itself is stateless. A [`CaseFile`] is the thin record a host keeps
//! around one generated [`Scenario`]: identity, creation time, status, the question
//! quota and the interrogation transcript. The quota lives here, not in the
//! resolver.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::InterrogationConfig;
use crate::interrogation;
use crate::model::{Category, Language, Scenario};
use crate::random::RandomSource;

/// Characters of the intro used for the case title.
pub const TITLE_CHARS: usize = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Active,
    SolvedWin,
    SolvedLose,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseFileError {
    #[error("case is closed ({0:?})")]
    Closed(CaseStatus),

    #[error("question quota used up ({0} of {0})")]
    QuotaExhausted(u32),

    #[error("no suspect with id {0}")]
    UnknownSuspect(u8),
}

/// One question and the answer it got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub id: Uuid,
    pub category: Category,
    pub language: Language,
    pub title: String,
    pub scenario: Scenario,
    pub status: CaseStatus,
    pub created_at: DateTime<Utc>,
    pub questions_used: u32,
    pub max_questions: u32,
    /// High-value case flag, rolled once when the case is opened.
    pub red_notice: bool,
    #[serde(default)]
    pub transcript: Vec<Exchange>,
}

impl CaseFile {
    /// Open a new active case around `scenario`.
    pub fn open<R>(scenario: Scenario, language: Language, cfg: &InterrogationConfig, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let red_notice = rng.next_float() < cfg.red_notice_chance;
        let case = CaseFile {
            id: Uuid::new_v4(),
            category: scenario.category(),
            language,
            title: title_for(&scenario.intro),
            status: CaseStatus::Active,
            created_at: Utc::now(),
            questions_used: 0,
            max_questions: cfg.max_questions,
            red_notice,
            transcript: Vec::new(),
            scenario,
        };
        info!(
            "opened {} case {} ({}){}",
            case.category,
            case.id,
            case.language,
            if case.red_notice { " [red notice]" } else { "" }
        );
        case
    }

    pub fn is_active(&self) -> bool {
        self.status == CaseStatus::Active
    }

    pub fn questions_remaining(&self) -> u32 {
        self.max_questions.saturating_sub(self.questions_used)
    }

    /// Ask one question, spending one unit of the quota.
    pub fn ask(&mut self, question: &str) -> Result<String, CaseFileError> {
        if !self.is_active() {
            return Err(CaseFileError::Closed(self.status));
        }
        if self.questions_remaining() == 0 {
            return Err(CaseFileError::QuotaExhausted(self.max_questions));
        }
        self.questions_used += 1;
        let answer = interrogation::resolve(&self.scenario, question, self.language);
        self.transcript.push(Exchange {
            question: question.to_string(),
            answer: answer.clone(),
            asked_at: Utc::now(),
        });
        Ok(answer)
    }

    /// Accuse a suspect by id and close the case.
    pub fn accuse(&mut self, suspect_id: u8) -> Result<CaseStatus, CaseFileError> {
        if !self.is_active() {
            return Err(CaseFileError::Closed(self.status));
        }
        let suspect = self
            .scenario
            .suspect(suspect_id)
            .ok_or(CaseFileError::UnknownSuspect(suspect_id))?;
        self.status = if suspect.guilty {
            CaseStatus::SolvedWin
        } else {
            CaseStatus::SolvedLose
        };
        info!("case {} closed: {:?}", self.id, self.status);
        Ok(self.status)
    }
}

fn title_for(intro: &str) -> String {
    let mut title: String = intro.chars().take(TITLE_CHARS).collect();
    title.push_str("...");
    title
}
