//! # Lexicon Store
//!
//! Language-partitioned, read-only word and phrase pools the assembler draws from.
//!
//! A [`Lexicon`] is an explicit value handed to the assembler rather than a global, so
//! tests can build one with tiny, controlled pools. Construction through
//! [`Lexicon::new`] (or the file loaders) validates every pack up front: an empty
//! pool is a [`CaseError::Configuration`] before any case is generated, never a
//! silent fallback to another language.
//!
//! The built-in packs live in [`english`] and [`turkish`] and are exposed through
//! [`Lexicon::builtin`].
//!
//! ## File format
//!
//! Custom lexicons are keyed by language code at the top level:
//!
//! ```toml
//! [en]
//! cities = ["London", "Rome"]
//! # ... every pool of LanguagePack ...
//!
//! [en.homicide]
//! locations = ["Dusty Archives of the Old Public Library"]
//! ```
//!
//! `dossier lexicon --out lexicon.json` dumps the built-in lexicon as a starting point.

pub mod english;
pub mod turkish;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::CaseError;
use crate::model::{Category, Language, LogStatus};
use crate::template;

/// Placeholders an evidence-link template may use to point at the guilty suspect.
pub const LINK_KEYS: [&str; 3] = ["initial", "family", "suspect"];

/// Placeholders an intro template may use.
pub const INTRO_KEYS: [&str; 3] = ["city", "location", "victim"];

/// Placeholders a motive template may use.
pub const MOTIVE_KEYS: [&str; 1] = ["victim"];

/// Pools that differ per case category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPack {
    pub locations: Vec<String>,
    /// Intro paragraphs with `{city}`, `{location}` and `{victim}` placeholders.
    pub intros: Vec<String>,
    /// Flavor clues; plain strings.
    pub clues: Vec<String>,
    /// Cause of death, attack vector or stolen item.
    pub causes: Vec<String>,
    pub scene_descriptions: Vec<String>,
    /// Primary map marker (body, compromised server, emptied vault).
    pub scene_label: String,
    pub scene_marker: String,
    /// Blood or trace map marker.
    pub trace_label: String,
    pub trace_marker: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutopsyText {
    /// Appended to the crime time, e.g. `±45 min`.
    pub margin: String,
    pub toxicology: String,
    pub wounds: String,
    pub notes: String,
}

/// One server log line, placed relative to the crime time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerLogTemplate {
    pub offset_seconds: i64,
    pub ip: String,
    pub action: String,
    pub status: LogStatus,
}

/// One camera observation, placed relative to the crime time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveillanceTemplate {
    pub offset_minutes: i64,
    pub camera: String,
    pub observation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagePack {
    pub cities: Vec<String>,
    /// Given names are split by gender only for variety; both halves are pooled.
    pub given_names_male: Vec<String>,
    pub given_names_female: Vec<String>,
    pub family_names: Vec<String>,
    pub jobs: Vec<String>,
    pub personalities: Vec<String>,
    pub relations: Vec<String>,
    /// Motive templates; may use `{victim}`.
    pub motives: Vec<String>,
    /// Alibis that check out. Used for innocent suspects.
    pub corroborated_alibis: Vec<String>,
    /// Alibis nobody can confirm. Used only for the guilty suspect.
    pub suspicious_alibis: Vec<String>,
    /// Decisive evidence descriptions; each must use one of [`LINK_KEYS`].
    pub evidence_links: Vec<String>,
    pub evidence_label: String,
    pub entry_label: String,
    pub entry_marker: String,
    pub autopsy: AutopsyText,
    pub server_log: Vec<ServerLogTemplate>,
    pub surveillance: Vec<SurveillanceTemplate>,
    pub homicide: CategoryPack,
    pub cyber: CategoryPack,
    pub theft: CategoryPack,
}

impl LanguagePack {
    pub fn category(&self, category: Category) -> &CategoryPack {
        match category {
            Category::Homicide => &self.homicide,
            Category::Cyber => &self.cyber,
            Category::Theft => &self.theft,
        }
    }

    /// Check every required pool of this pack.
    ///
    /// Besides emptiness, every text is checked against the placeholders the
    /// assembler binds for it: plain pools and labels take none, motives only
    /// `{victim}`, intros [`INTRO_KEYS`], evidence links [`LINK_KEYS`].
    pub fn validate(&self, language: Language) -> Result<(), CaseError> {
        let pools: [(&str, &Vec<String>); 11] = [
            ("cities", &self.cities),
            ("male given names", &self.given_names_male),
            ("female given names", &self.given_names_female),
            ("family names", &self.family_names),
            ("jobs", &self.jobs),
            ("personalities", &self.personalities),
            ("relations", &self.relations),
            ("motives", &self.motives),
            ("corroborated alibis", &self.corroborated_alibis),
            ("suspicious alibis", &self.suspicious_alibis),
            ("evidence links", &self.evidence_links),
        ];
        for (name, pool) in pools {
            require(language, name, pool)?;
            let allowed: &[&str] = match name {
                "motives" => &MOTIVE_KEYS,
                "evidence links" => &LINK_KEYS,
                _ => &[],
            };
            for text in pool.iter() {
                allow_keys(language, name, text, allowed)?;
            }
        }
        let labels = [
            ("evidence label", &self.evidence_label),
            ("entry label", &self.entry_label),
            ("entry marker", &self.entry_marker),
            ("autopsy margin", &self.autopsy.margin),
            ("autopsy toxicology", &self.autopsy.toxicology),
            ("autopsy wounds", &self.autopsy.wounds),
            ("autopsy notes", &self.autopsy.notes),
        ];
        for (name, text) in labels {
            require_text(language, name, text)?;
            allow_keys(language, name, text, &[])?;
        }
        if self.server_log.is_empty() {
            return Err(CaseError::config(language, "server log timeline is empty"));
        }
        if self.surveillance.is_empty() {
            return Err(CaseError::config(language, "surveillance timeline is empty"));
        }
        for entry in &self.server_log {
            allow_keys(language, "server log ip", &entry.ip, &[])?;
            allow_keys(language, "server log action", &entry.action, &[])?;
        }
        for entry in &self.surveillance {
            allow_keys(language, "surveillance camera", &entry.camera, &[])?;
            allow_keys(language, "surveillance observation", &entry.observation, &[])?;
        }
        if let Some(overlap) = self
            .suspicious_alibis
            .iter()
            .find(|a| self.corroborated_alibis.contains(a))
        {
            return Err(CaseError::config(
                language,
                format!("alibi appears in both pools: {}", overlap),
            ));
        }
        for link in &self.evidence_links {
            if !template::placeholders(link).any(|k| LINK_KEYS.contains(&k)) {
                return Err(CaseError::config(
                    language,
                    format!("evidence link does not name the culprit: {}", link),
                ));
            }
        }
        // Full names are unique per case; a {suspect} link always renders decisively.
        if !self
            .evidence_links
            .iter()
            .any(|link| template::placeholders(link).any(|k| k == "suspect"))
        {
            return Err(CaseError::config(
                language,
                "no evidence link uses {suspect}",
            ));
        }
        for category in Category::ALL {
            let pack = self.category(category);
            let pools: [(&str, &Vec<String>); 5] = [
                ("locations", &pack.locations),
                ("intros", &pack.intros),
                ("clues", &pack.clues),
                ("causes", &pack.causes),
                ("scene descriptions", &pack.scene_descriptions),
            ];
            for (name, pool) in pools {
                let label = format!("{} {}", category, name);
                require(language, &label, pool)?;
                let allowed: &[&str] = if name == "intros" { &INTRO_KEYS } else { &[] };
                for text in pool.iter() {
                    allow_keys(language, &label, text, allowed)?;
                }
            }
            let labels = [
                ("scene label", &pack.scene_label),
                ("scene marker", &pack.scene_marker),
                ("trace label", &pack.trace_label),
                ("trace marker", &pack.trace_marker),
            ];
            for (name, text) in labels {
                let label = format!("{} {}", category, name);
                require_text(language, &label, text)?;
                allow_keys(language, &label, text, &[])?;
            }
        }
        Ok(())
    }
}

fn require(language: Language, name: &str, pool: &[String]) -> Result<(), CaseError> {
    if pool.is_empty() {
        return Err(CaseError::config(language, format!("{} pool is empty", name)));
    }
    if pool.iter().any(|s| s.trim().is_empty()) {
        return Err(CaseError::config(
            language,
            format!("{} pool has a blank entry", name),
        ));
    }
    Ok(())
}

fn require_text(language: Language, name: &str, text: &str) -> Result<(), CaseError> {
    if text.trim().is_empty() {
        return Err(CaseError::config(language, format!("{} is blank", name)));
    }
    Ok(())
}

/// Reject placeholders the assembler will not bind for this text.
fn allow_keys(language: Language, name: &str, text: &str, allowed: &[&str]) -> Result<(), CaseError> {
    match template::placeholders(text).find(|k| !allowed.contains(k)) {
        Some(key) => Err(CaseError::config(
            language,
            format!("{} entry uses unbound placeholder {{{}}}: {}", name, key, text),
        )),
        None => Ok(()),
    }
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Validated, immutable set of language packs.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    packs: BTreeMap<Language, LanguagePack>,
}

impl Lexicon {
    /// Build a lexicon, validating every pack.
    pub fn new(packs: impl IntoIterator<Item = (Language, LanguagePack)>) -> Result<Self, CaseError> {
        let packs: BTreeMap<Language, LanguagePack> = packs.into_iter().collect();
        for (language, pack) in &packs {
            pack.validate(*language)?;
        }
        Ok(Lexicon { packs })
    }

    /// The lexicon shipped with the crate (Turkish and English).
    ///
    /// Built once and validated like any other lexicon; an invalid built-in pack is
    /// reported on every call instead of being used.
    pub fn builtin() -> Result<&'static Lexicon, CaseError> {
        static BUILTIN: OnceLock<Result<Lexicon, CaseError>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                Lexicon::new([
                    (Language::Tr, turkish::pack()),
                    (Language::En, english::pack()),
                ])
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CaseError> {
        let packs: BTreeMap<Language, LanguagePack> =
            toml::from_str(s).map_err(|e| CaseError::Lexicon(e.to_string()))?;
        Self::new(packs)
    }

    pub fn from_json_str(s: &str) -> Result<Self, CaseError> {
        let packs: BTreeMap<Language, LanguagePack> =
            serde_json::from_str(s).map_err(|e| CaseError::Lexicon(e.to_string()))?;
        Self::new(packs)
    }

    pub fn to_json_pretty(&self) -> Result<String, CaseError> {
        serde_json::to_string_pretty(&self.packs).map_err(|e| CaseError::Lexicon(e.to_string()))
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.packs.keys().copied()
    }

    pub fn pack(&self, language: Language) -> Result<&LanguagePack, CaseError> {
        self.packs
            .get(&language)
            .ok_or_else(|| CaseError::config(language, "no language pack configured"))
    }

    /// Resolve the pools used for one (language, category) assembly.
    pub fn view(&self, language: Language, category: Category) -> Result<LexiconView<'_>, CaseError> {
        let pack = self.pack(language)?;
        Ok(LexiconView {
            language,
            category,
            pack,
            category_pack: pack.category(category),
        })
    }
}

/// The pools for a single language and category.
#[derive(Debug, Clone, Copy)]
pub struct LexiconView<'a> {
    pub language: Language,
    pub category: Category,
    pub pack: &'a LanguagePack,
    pub category_pack: &'a CategoryPack,
}

impl<'a> LexiconView<'a> {
    /// Male and female given names pooled together.
    pub fn given_names(&self) -> Vec<&'a str> {
        self.pack
            .given_names_male
            .iter()
            .chain(self.pack.given_names_female.iter())
            .map(String::as_str)
            .collect()
    }
}
