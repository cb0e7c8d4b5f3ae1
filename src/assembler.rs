//! # Case Assembler
//!
//! Builds one complete [`Scenario`] from a [`Lexicon`] and a [`RandomSource`].
//!
//! The assembly either succeeds with every field populated (4 suspects, 4 clues,
//! 4 map points, one category payload) or fails with a [`CaseError`]; there is no
//! partial result. Invariants held by every returned scenario:
//!
//! - exactly one suspect is guilty, and only that suspect's alibi comes from the
//!   suspicious pool;
//! - exactly one map point has kind `evidence`, and its description names the guilty
//!   suspect (initial, family name or full name) and renders differently for every
//!   innocent suspect, so it singles out exactly one person;
//! - no other map point description contains a suspect's name;
//! - the victim and the four suspects have distinct names, and no name is contained
//!   in another, so name lookups in the interrogation resolver are unambiguous.

use log::debug;

use crate::error::CaseError;
use crate::lexicon::{Lexicon, LexiconView};
use crate::model::{
    AutopsyReport, Category, CrimeScene, Findings, Language, MapPoint, MapPointKind, Scenario,
    ServerLog, Suspect, SurveillanceLog, Victim,
};
use crate::random::{pick_many, pick_one, RandomSource};
use crate::template::render;

pub const SUSPECT_COUNT: usize = 4;
pub const CLUE_COUNT: usize = 4;
pub const MIN_VICTIM_AGE: u8 = 25;
pub const VICTIM_AGE_SPAN: u8 = 45;

const MINUTES_PER_DAY: i64 = 24 * 60;
const SECONDS_PER_DAY: i64 = MINUTES_PER_DAY * 60;

/// Assemble a case for `category` in `language`.
pub fn assemble<R>(
    lexicon: &Lexicon,
    category: Category,
    language: Language,
    rng: &mut R,
) -> Result<Scenario, CaseError>
where
    R: RandomSource + ?Sized,
{
    let view = lexicon.view(language, category)?;
    let pack = view.pack;
    let cat = view.category_pack;

    let city = pick_one(rng, &pack.cities, "cities")?.clone();
    let location = pick_one(rng, &cat.locations, &format!("{} locations", category))?.clone();

    let mut names = draw_names(&view, rng, SUSPECT_COUNT + 1)?.into_iter();
    let victim_name = names.next().unwrap_or_default();
    let victim = Victim {
        age: MIN_VICTIM_AGE + rng.next_index(VICTIM_AGE_SPAN as usize) as u8,
        job: pick_one(rng, &pack.jobs, "jobs")?.clone(),
        personality: pick_one(rng, &pack.personalities, "personalities")?.clone(),
        name: victim_name,
    };

    let guilty_slot = rng.next_index(SUSPECT_COUNT);
    let mut suspects = Vec::with_capacity(SUSPECT_COUNT);
    for (slot, name) in names.enumerate() {
        let guilty = slot == guilty_slot;
        let motive = pick_one(rng, &pack.motives, "motives")?;
        let alibi = if guilty {
            pick_one(rng, &pack.suspicious_alibis, "suspicious alibis")?
        } else {
            pick_one(rng, &pack.corroborated_alibis, "corroborated alibis")?
        };
        suspects.push(Suspect {
            id: slot as u8 + 1,
            relation: pick_one(rng, &pack.relations, "relations")?.clone(),
            motive: render(motive, &[("victim", victim.name.as_str())])?,
            alibi: alibi.clone(),
            guilty,
            name,
        });
    }

    let minute_of_day = (rng.next_index(24) * 60 + rng.next_index(60)) as i64;
    let crime_scene = CrimeScene {
        description: pick_one(rng, &cat.scene_descriptions, "scene descriptions")?.clone(),
        time: clock(minute_of_day),
        cause: pick_one(rng, &cat.causes, &format!("{} causes", category))?.clone(),
    };
    let findings = build_findings(&view, category, minute_of_day, &crime_scene.time);

    let clues = pick_many(rng, &cat.clues, CLUE_COUNT, &format!("{} clue templates", category))?
        .into_iter()
        .cloned()
        .collect();

    let evidence = decisive_evidence(&pack.evidence_links, &suspects, guilty_slot, rng)?;
    let map_points = vec![
        map_point(1, 50.0, 50.0, &cat.scene_label, MapPointKind::Body, &cat.scene_marker),
        map_point(2, 20.0, 80.0, &pack.entry_label, MapPointKind::Entry, &pack.entry_marker),
        map_point(3, 75.0, 35.0, &pack.evidence_label, MapPointKind::Evidence, &evidence),
        map_point(4, 30.0, 20.0, &cat.trace_label, MapPointKind::Blood, &cat.trace_marker),
    ];

    let intro_template = pick_one(rng, &cat.intros, &format!("{} intros", category))?;
    let intro = render(
        intro_template,
        &[
            ("city", city.as_str()),
            ("location", location.as_str()),
            ("victim", victim.name.as_str()),
        ],
    )?;

    debug!(
        "assembled {} case ({}) in {}: victim {}, {} suspects, {} clues",
        category,
        language,
        city,
        victim.name,
        suspects.len(),
        CLUE_COUNT
    );

    Ok(Scenario {
        city,
        location_name: location,
        victim,
        crime_scene,
        suspects,
        clues,
        intro,
        map_points,
        findings,
    })
}

/// Draw `count` full names ("given family") such that no name equals or contains
/// another, case-insensitively. Walks a lazily shuffled list of all combinations.
fn draw_names<R>(view: &LexiconView<'_>, rng: &mut R, count: usize) -> Result<Vec<String>, CaseError>
where
    R: RandomSource + ?Sized,
{
    let given = view.given_names();
    let family = &view.pack.family_names;
    let total = given.len() * family.len();
    let mut order: Vec<usize> = (0..total).collect();
    let mut names: Vec<String> = Vec::with_capacity(count);
    let mut lowered: Vec<String> = Vec::with_capacity(count);

    for i in 0..total {
        if names.len() == count {
            break;
        }
        let j = i + rng.next_index(total - i);
        order.swap(i, j);
        let combo = order[i];
        let name = format!("{} {}", given[combo / family.len()], family[combo % family.len()]);
        let low = name.to_lowercase();
        if lowered.iter().any(|n| n.contains(&low) || low.contains(n.as_str())) {
            continue;
        }
        lowered.push(low);
        names.push(name);
    }

    if names.len() < count {
        return Err(CaseError::PoolExhausted {
            pool: "person names".to_string(),
            requested: count,
            available: names.len(),
        });
    }
    Ok(names)
}

/// Render an evidence-link template for `suspect`.
pub fn evidence_text(link: &str, suspect: &Suspect) -> Result<String, CaseError> {
    let initial = suspect.initial();
    render(
        link,
        &[
            ("initial", initial.as_str()),
            ("family", suspect.family_name()),
            ("suspect", suspect.name.as_str()),
        ],
    )
}

/// Pick an evidence text that fits the culprit and no other suspect. Links whose
/// initial or family name is shared with an innocent are skipped for this case.
fn decisive_evidence<R>(
    links: &[String],
    suspects: &[Suspect],
    culprit: usize,
    rng: &mut R,
) -> Result<String, CaseError>
where
    R: RandomSource + ?Sized,
{
    let mut decisive = Vec::with_capacity(links.len());
    for link in links {
        let text = evidence_text(link, &suspects[culprit])?;
        let mut shared = false;
        for (slot, other) in suspects.iter().enumerate() {
            if slot != culprit && evidence_text(link, other)? == text {
                shared = true;
                break;
            }
        }
        if !shared {
            decisive.push(text);
        }
    }
    debug!(
        "{} of {} evidence links single out the culprit",
        decisive.len(),
        links.len()
    );
    pick_one(rng, &decisive, "decisive evidence links").cloned()
}

fn build_findings(view: &LexiconView<'_>, category: Category, minute_of_day: i64, time: &str) -> Findings {
    let pack = view.pack;
    match category {
        Category::Homicide => Findings::Autopsy(AutopsyReport {
            time_of_death: format!("{} ({})", time, pack.autopsy.margin),
            toxicology: pack.autopsy.toxicology.clone(),
            wounds: pack.autopsy.wounds.clone(),
            notes: pack.autopsy.notes.clone(),
        }),
        Category::Cyber => Findings::ServerLogs(
            pack.server_log
                .iter()
                .map(|t| ServerLog {
                    timestamp: clock_seconds(minute_of_day * 60 + t.offset_seconds),
                    ip: t.ip.clone(),
                    action: t.action.clone(),
                    status: t.status,
                })
                .collect(),
        ),
        Category::Theft => Findings::Surveillance(
            pack.surveillance
                .iter()
                .map(|t| SurveillanceLog {
                    time: clock(minute_of_day + t.offset_minutes),
                    camera: t.camera.clone(),
                    observation: t.observation.clone(),
                })
                .collect(),
        ),
    }
}

fn map_point(n: u8, x: f32, y: f32, label: &str, kind: MapPointKind, description: &str) -> MapPoint {
    MapPoint {
        id: format!("mp{}", n),
        x,
        y,
        label: label.to_string(),
        kind,
        description: description.to_string(),
    }
}

/// `HH:MM` for a minute offset, wrapping around midnight.
fn clock(minute_of_day: i64) -> String {
    let m = minute_of_day.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// `HH:MM:SS` for a second offset, wrapping around midnight.
fn clock_seconds(second_of_day: i64) -> String {
    let s = second_of_day.rem_euclid(SECONDS_PER_DAY);
    format!("{:02}:{:02}:{:02}", s / 3600, (s / 60) % 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::english;
    use crate::random::seeded;

    struct Zeroes;

    impl RandomSource for Zeroes {
        fn next_index(&mut self, _bound: usize) -> usize {
            0
        }
    }

    #[test]
    fn clock_wraps_midnight() {
        assert_eq!(clock(-5), "23:55");
        assert_eq!(clock(0), "00:00");
        assert_eq!(clock(MINUTES_PER_DAY + 61), "01:01");
        assert_eq!(clock_seconds(-408), "23:53:12");
        assert_eq!(clock_seconds(3723), "01:02:03");
    }

    #[test]
    fn all_zero_source_puts_culprit_first() {
        let s = assemble(Lexicon::builtin().unwrap(), Category::Homicide, Language::En, &mut Zeroes).unwrap();
        assert!(s.suspects[0].guilty);
        assert_eq!(s.crime_scene.time, "00:00");
        assert_eq!(s.victim.age, MIN_VICTIM_AGE);
        // Draws walk the shuffled combination list in order.
        assert_eq!(s.victim.name, "James Smith");
        assert_eq!(s.suspects[0].name, "James Johnson");
        // Every suspect is a "James", so the initial link is skipped.
        let evidence = s.evidence_point().unwrap();
        assert!(evidence.description.contains("'Johnson'"), "{}", evidence.description);
    }

    #[test]
    fn timelines_anchor_on_crime_time() {
        let s = assemble(Lexicon::builtin().unwrap(), Category::Cyber, Language::En, &mut Zeroes).unwrap();
        let logs = s.server_logs().unwrap();
        assert_eq!(logs[0].timestamp, "23:50:00");
        assert_eq!(logs.last().unwrap().timestamp, "00:00:00");

        let t = assemble(Lexicon::builtin().unwrap(), Category::Theft, Language::En, &mut Zeroes).unwrap();
        let cams = t.surveillance().unwrap();
        assert_eq!(cams[0].time, "23:44");
        assert_eq!(cams[1].time, t.crime_scene.time);
    }

    #[test]
    fn shared_family_name_link_is_skipped() {
        let suspect = |id: u8, name: &str, guilty: bool| Suspect {
            id,
            name: name.into(),
            relation: String::new(),
            motive: String::new(),
            alibi: String::new(),
            guilty,
        };
        let suspects = vec![
            suspect(1, "Thomas White", true),
            suspect(2, "Robert White", false),
        ];
        let links = vec![
            "It reads '{family}'.".to_string(),
            "Prescribed to '{suspect}'.".to_string(),
        ];
        for seed in 0..10 {
            let text = decisive_evidence(&links, &suspects, 0, &mut seeded(seed)).unwrap();
            assert_eq!(text, "Prescribed to 'Thomas White'.");
        }
        let only_family = &links[..1];
        let err = decisive_evidence(only_family, &suspects, 0, &mut Zeroes).unwrap_err();
        assert!(err.is_pool_exhaustion());
    }

    #[test]
    fn names_never_contain_each_other() {
        let mut pack = english::pack();
        pack.given_names_male = vec!["Al".into(), "Hal".into()];
        pack.given_names_female = vec!["Sal".into()];
        pack.family_names = vec!["Lee".into(), "Leeds".into()];
        let lex = Lexicon::new([(Language::En, pack)]).unwrap();
        // Only Al/Hal/Sal x Lee/Leeds = 6 combos, and "Al Lee" is inside "Hal Lee"/"Sal Lee".
        for seed in 0..20 {
            match assemble(&lex, Category::Theft, Language::En, &mut seeded(seed)) {
                Ok(s) => {
                    let mut all: Vec<String> = s.suspects.iter().map(|x| x.name.to_lowercase()).collect();
                    all.push(s.victim.name.to_lowercase());
                    for (i, a) in all.iter().enumerate() {
                        for (j, b) in all.iter().enumerate() {
                            if i != j {
                                assert!(!a.contains(b.as_str()), "{} contains {}", a, b);
                            }
                        }
                    }
                }
                Err(e) => assert!(e.is_pool_exhaustion(), "unexpected {:?}", e),
            }
        }
    }

    #[test]
    fn too_few_names_is_pool_exhaustion() {
        let mut pack = english::pack();
        pack.given_names_male = vec!["Ann".into()];
        pack.given_names_female = vec!["Bea".into()];
        pack.family_names = vec!["Cole".into(), "Dunn".into()];
        let lex = Lexicon::new([(Language::En, pack)]).unwrap();
        let err = assemble(&lex, Category::Homicide, Language::En, &mut seeded(3)).unwrap_err();
        assert_eq!(
            err,
            CaseError::PoolExhausted {
                pool: "person names".into(),
                requested: 5,
                available: 4
            }
        );
    }
}
