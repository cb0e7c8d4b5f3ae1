//! Test utilities & fixtures shared by the integration tests.
#![allow(dead_code)]

use dossier::lexicon::{english, LanguagePack};
use dossier::model::{Category, Language, Scenario};
use dossier::{Lexicon, RandomSource};

/// Seeds swept by the property-style tests.
pub const SEEDS: std::ops::Range<u64> = 0..64;

/// Replays a fixed list of raw values, reduced modulo the requested bound.
pub struct Scripted {
    values: Vec<usize>,
    pos: usize,
}

impl Scripted {
    pub fn new(values: &[usize]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn next_index(&mut self, bound: usize) -> usize {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % bound
    }
}

/// Every (category, language) pair the built-in lexicon supports.
pub fn all_combinations() -> Vec<(Category, Language)> {
    Category::ALL
        .iter()
        .flat_map(|c| Language::ALL.iter().map(move |l| (*c, *l)))
        .collect()
}

/// A single-language lexicon built from the English pack after `edit`.
pub fn english_lexicon_with(edit: impl FnOnce(&mut LanguagePack)) -> Lexicon {
    let mut pack = english::pack();
    edit(&mut pack);
    Lexicon::new([(Language::En, pack)]).unwrap()
}

pub fn seeded_case(category: Category, language: Language, seed: u64) -> Scenario {
    dossier::generate_scenario_seeded(category, language, seed).unwrap()
}
