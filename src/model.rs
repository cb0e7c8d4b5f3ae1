//! Case data model.
//!
//! A [`Scenario`] is the only thing the engine produces. It is a plain value: the
//! assembler builds it in one go and nothing in this crate mutates it afterwards.
//! Field names serialize in camelCase so the JSON shape matches what the game's UI
//! consumes (`locationName`, `crimeScene`, `mapPoints`, and one of `autopsy`,
//! `serverLogs` or `surveillance`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CaseError;

/// Case category, chosen by the player when opening a new case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Homicide,
    Cyber,
    Theft,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Homicide, Category::Cyber, Category::Theft];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Homicide => "homicide",
            Category::Cyber => "cyber",
            Category::Theft => "theft",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homicide" => Ok(Category::Homicide),
            "cyber" => Ok(Category::Cyber),
            "theft" => Ok(Category::Theft),
            _ => Err(CaseError::UnknownCategory(s.to_string())),
        }
    }
}

/// Supported locales. Turkish is the primary locale, English the secondary one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tr" | "turkish" => Ok(Language::Tr),
            "en" | "english" => Ok(Language::En),
            _ => Err(CaseError::UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victim {
    pub name: String,
    pub age: u8,
    pub job: String,
    pub personality: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    /// 1-based, equal to the suspect's position in [`Scenario::suspects`] plus one.
    pub id: u8,
    pub name: String,
    pub relation: String,
    pub motive: String,
    pub alibi: String,
    pub guilty: bool,
}

impl Suspect {
    /// First whitespace-separated part of the name.
    pub fn given_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Last whitespace-separated part of the name.
    pub fn family_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }

    pub fn initial(&self) -> String {
        self.name.chars().take(1).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeScene {
    pub description: String,
    /// Time of the incident, `HH:MM`.
    pub time: String,
    /// Cause of death, attack vector, or stolen item depending on the category.
    #[serde(rename = "deathCause")]
    pub cause: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutopsyReport {
    pub time_of_death: String,
    pub toxicology: String,
    pub wounds: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogStatus {
    Success,
    Failed,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerLog {
    /// `HH:MM:SS`
    pub timestamp: String,
    pub ip: String,
    pub action: String,
    pub status: LogStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveillanceLog {
    /// `HH:MM`
    pub time: String,
    pub camera: String,
    pub observation: String,
}

/// Category-specific payload. Exactly one variant exists per scenario and it always
/// matches the scenario's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Findings {
    Autopsy(AutopsyReport),
    ServerLogs(Vec<ServerLog>),
    Surveillance(Vec<SurveillanceLog>),
}

impl Findings {
    pub fn category(&self) -> Category {
        match self {
            Findings::Autopsy(_) => Category::Homicide,
            Findings::ServerLogs(_) => Category::Cyber,
            Findings::Surveillance(_) => Category::Theft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapPointKind {
    Body,
    Evidence,
    Blood,
    Entry,
    Other,
}

/// Interactive marker on the crime-scene map. Coordinates are percentages (0-100)
/// of the map's width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: MapPointKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub city: String,
    pub location_name: String,
    pub victim: Victim,
    pub crime_scene: CrimeScene,
    pub suspects: Vec<Suspect>,
    pub clues: Vec<String>,
    pub intro: String,
    pub map_points: Vec<MapPoint>,
    #[serde(flatten)]
    pub findings: Findings,
}

impl Scenario {
    pub fn category(&self) -> Category {
        self.findings.category()
    }

    pub fn guilty_suspect(&self) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.guilty)
    }

    pub fn suspect(&self, id: u8) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.id == id)
    }

    /// The decisive map marker (type `evidence`).
    pub fn evidence_point(&self) -> Option<&MapPoint> {
        self.map_points
            .iter()
            .find(|p| p.kind == MapPointKind::Evidence)
    }

    pub fn autopsy(&self) -> Option<&AutopsyReport> {
        match &self.findings {
            Findings::Autopsy(report) => Some(report),
            _ => None,
        }
    }

    pub fn server_logs(&self) -> Option<&[ServerLog]> {
        match &self.findings {
            Findings::ServerLogs(logs) => Some(logs),
            _ => None,
        }
    }

    pub fn surveillance(&self) -> Option<&[SurveillanceLog]> {
        match &self.findings {
            Findings::Surveillance(logs) => Some(logs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_and_language_parse() {
        assert_eq!("Homicide".parse::<Category>().unwrap(), Category::Homicide);
        assert_eq!(" cyber ".parse::<Category>().unwrap(), Category::Cyber);
        assert!("arson".parse::<Category>().is_err());
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("turkish".parse::<Language>().unwrap(), Language::Tr);
        assert!(matches!(
            "de".parse::<Language>(),
            Err(CaseError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn suspect_name_parts() {
        let s = Suspect {
            id: 1,
            name: "Clara Holmes".into(),
            relation: "Lawyer".into(),
            motive: String::new(),
            alibi: String::new(),
            guilty: false,
        };
        assert_eq!(s.given_name(), "Clara");
        assert_eq!(s.family_name(), "Holmes");
        assert_eq!(s.initial(), "C");
    }

    #[test]
    fn findings_serialize_under_their_own_key() {
        let logs = Findings::ServerLogs(vec![ServerLog {
            timestamp: "23:55:00".into(),
            ip: "INTERNAL_NET".into(),
            action: "Door Unlock".into(),
            status: LogStatus::Success,
        }]);
        let v = serde_json::to_value(&logs).unwrap();
        assert_eq!(v["serverLogs"][0]["status"], "SUCCESS");
        assert_eq!(logs.category(), Category::Cyber);
    }
}
