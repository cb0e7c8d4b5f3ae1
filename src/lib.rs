//! # Dossier - Procedural Crime Case Generator
//!
//! Dossier builds self-contained crime cases for a detective game and answers the
//! player's interrogation questions about them. It is a pure, in-process library:
//! no network, no storage, no shared state between calls.
//!
//! ## Features
//!
//! - **Three Case Categories**: homicide (autopsy report), cyber intrusion (server logs)
//!   and art theft (surveillance logs).
//! - **Bilingual Content**: Turkish and English language packs with parallel pools.
//! - **Guaranteed Solvability**: exactly one guilty suspect, the only one with a
//!   suspicious alibi, and one evidence marker that points at them.
//! - **Deterministic Runs**: every draw goes through a [`RandomSource`], so a seed
//!   reproduces a case exactly.
//! - **Keyword Interrogation**: a rule-based resolver that never reveals the culprit.
//! - **Replaceable Lexicon**: word pools load from TOML or JSON and are validated up front.
//!
//! ## Quick Start
//!
//! ```rust
//! use dossier::{answer_question, generate_scenario_seeded, Category, Language};
//!
//! let case = generate_scenario_seeded(Category::Homicide, Language::En, 42).unwrap();
//! assert_eq!(case.suspects.len(), 4);
//!
//! let reply = answer_question(&case, "Who is the killer?", Language::En);
//! assert!(reply.starts_with("ACCESS DENIED"));
//! ```
//!
//! ## Module Organization
//!
//! - [`lexicon`] - language packs and their validation
//! - [`random`] - the injectable random source and pool pickers
//! - [`template`] - `{placeholder}` rendering
//! - [`assembler`] - builds a [`Scenario`]
//! - [`interrogation`] - answers questions about a scenario
//! - [`casefile`] - per-case record with question quota and accusation
//! - [`config`] - configuration for the `dossier` binary and embedding hosts
//! - [`model`] - the scenario data types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Lexicon      │ ← Validated word pools per language
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Assembler     │ ← RandomSource + templates → Scenario
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ Interrogation   │ ← Scenario + question → answer
//! └─────────────────┘
//! ```

pub mod assembler;
pub mod casefile;
pub mod config;
pub mod error;
pub mod interrogation;
pub mod lexicon;
pub mod logutil;
pub mod model;
pub mod random;
pub mod template;

pub use casefile::{CaseFile, CaseFileError, CaseStatus};
pub use error::CaseError;
pub use lexicon::Lexicon;
pub use model::{Category, Findings, Language, Scenario};
pub use random::RandomSource;

/// Generate a case from the built-in lexicon with a fresh entropy seed.
pub fn generate_scenario(category: Category, language: Language) -> Result<Scenario, CaseError> {
    generate_with(Lexicon::builtin()?, category, language, &mut random::entropy())
}

/// Generate a reproducible case from the built-in lexicon.
pub fn generate_scenario_seeded(
    category: Category,
    language: Language,
    seed: u64,
) -> Result<Scenario, CaseError> {
    generate_with(Lexicon::builtin()?, category, language, &mut random::seeded(seed))
}

/// Generate a case from any lexicon and random source.
pub fn generate_with<R>(
    lexicon: &Lexicon,
    category: Category,
    language: Language,
    rng: &mut R,
) -> Result<Scenario, CaseError>
where
    R: RandomSource + ?Sized,
{
    assembler::assemble(lexicon, category, language, rng)
}

/// Answer one interrogation question. Never fails.
pub fn answer_question(scenario: &Scenario, question: &str, language: Language) -> String {
    interrogation::resolve(scenario, question, language)
}
