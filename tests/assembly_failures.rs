//! Assembly failure paths: small or broken lexicons.
mod common;

use common::english_lexicon_with;
use dossier::lexicon::{english, LanguagePack, Lexicon};
use dossier::model::{Category, Language};
use dossier::random::seeded;
use dossier::template::render;
use dossier::{generate_with, CaseError};

#[test]
fn test_three_clue_templates_exhaust_the_pool() {
    let lexicon = english_lexicon_with(|pack| {
        pack.homicide.clues.truncate(3);
    });
    let err = generate_with(&lexicon, Category::Homicide, Language::En, &mut seeded(1)).unwrap_err();
    assert_eq!(
        err,
        CaseError::PoolExhausted {
            pool: "homicide clue templates".into(),
            requested: 4,
            available: 3
        }
    );
    // Other categories still draw from full pools.
    assert!(generate_with(&lexicon, Category::Cyber, Language::En, &mut seeded(1)).is_ok());
}

#[test]
fn test_unbound_intro_placeholder_rejected_before_assembly() {
    let mut pack = english::pack();
    pack.theft.intros = vec!["In {city}, {victim} lost everything to {accomplice}.".into()];
    let err = Lexicon::new([(Language::En, pack)]).unwrap_err();
    match err {
        CaseError::Configuration { pool, .. } => {
            assert!(pool.starts_with("theft intros entry uses unbound placeholder {accomplice}"), "{}", pool);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_render_reports_missing_location() {
    let err = render(
        "A body was found at {location} in {city}.",
        &[("city", "Rome")],
    )
    .unwrap_err();
    assert_eq!(err, CaseError::MissingSubstitution { key: "location".into() });
}

#[test]
fn test_missing_language_pack_is_configuration_error() {
    let lexicon = Lexicon::new([(Language::En, english::pack())]).unwrap();
    let err = generate_with(&lexicon, Category::Homicide, Language::Tr, &mut seeded(0)).unwrap_err();
    assert!(matches!(err, CaseError::Configuration { ref language, .. } if language == "tr"));
}

#[test]
fn test_empty_pool_rejected_at_lexicon_build() {
    let mut pack = english::pack();
    pack.cyber.causes.clear();
    let err = Lexicon::new([(Language::En, pack)]).unwrap_err();
    match err {
        CaseError::Configuration { language, pool } => {
            assert_eq!(language, "en");
            assert!(pool.contains("cyber causes"), "{}", pool);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_placeholders_in_copied_pools_fail_at_build_time() {
    let edits: [fn(&mut LanguagePack); 4] = [
        |pack| pack.homicide.clues.push("{victim}'s phone".into()),
        |pack| pack.cyber.clues.push("{location} map".into()),
        |pack| pack.corroborated_alibis.push("I was in {city} all night.".into()),
        |pack| pack.entry_marker = "Forced by {suspect}".into(),
    ];
    for edit in edits {
        let mut pack = english::pack();
        edit(&mut pack);
        let err = Lexicon::new([(Language::En, pack)]).unwrap_err();
        assert!(
            matches!(err, CaseError::Configuration { ref pool, .. } if pool.contains("unbound placeholder")),
            "{:?}",
            err
        );
    }
}

#[test]
fn test_no_placeholder_reaches_a_scenario() {
    let lexicon = english_lexicon_with(|_| {});
    for category in Category::ALL {
        for seed in 0..32 {
            let s = generate_with(&lexicon, category, Language::En, &mut seeded(seed)).unwrap();
            let json = serde_json::to_string(&s).unwrap();
            for key in ["{victim}", "{city}", "{location}", "{suspect}", "{family}", "{initial}"] {
                assert!(!json.contains(key), "{} leaked in {}", key, json);
            }
        }
    }
}

#[test]
fn test_single_entry_pools_still_assemble() {
    let lexicon = english_lexicon_with(|pack| {
        pack.cities.truncate(1);
        pack.jobs.truncate(1);
        pack.motives.truncate(1);
        pack.suspicious_alibis.truncate(1);
        pack.evidence_links.retain(|link| link.contains("{suspect}"));
        pack.evidence_links.truncate(1);
    });
    for seed in 0..8 {
        let s = generate_with(&lexicon, Category::Homicide, Language::En, &mut seeded(seed)).unwrap();
        assert_eq!(s.city, "London");
        let culprit = s.guilty_suspect().unwrap();
        assert_eq!(culprit.alibi, english::pack().suspicious_alibis[0]);
    }
}

#[test]
fn test_custom_toml_lexicon_assembles() {
    let toml_text = toml::to_string(&std::collections::BTreeMap::from([(
        "en",
        english::pack(),
    )]))
    .unwrap();
    let lexicon = Lexicon::from_toml_str(&toml_text).unwrap();
    let s = generate_with(&lexicon, Category::Cyber, Language::En, &mut seeded(4)).unwrap();
    assert_eq!(s.suspects.len(), 4);
}
