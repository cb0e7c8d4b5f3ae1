//! Built-in English pools.

use super::{owned, AutopsyText, CategoryPack, LanguagePack, ServerLogTemplate, SurveillanceTemplate};
use crate::model::LogStatus;

const CITIES: &[&str] = &[
    "London", "New York", "Tokyo", "Berlin", "Paris", "Istanbul", "Chicago", "Los Angeles",
    "Seattle", "Rome",
];

const GIVEN_MALE: &[&str] = &[
    "James", "Arthur", "William", "Henry", "Leo", "Jack", "Thomas", "Alexander", "David",
    "Michael", "Robert", "Richard", "Charles",
];

const GIVEN_FEMALE: &[&str] = &[
    "Olivia", "Emma", "Charlotte", "Amelia", "Sophia", "Isabella", "Mia", "Harper", "Evelyn",
    "Alice", "Eleanor", "Clara",
];

const FAMILY: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Black", "White", "Holmes", "Moriarty", "Sterling",
];

const JOBS: &[&str] = &[
    "Senior Software Engineer",
    "Neurosurgeon",
    "Famous Architect",
    "Retired Intelligence Officer",
    "Art Historian",
    "Stock Speculator",
    "Investigative Journalist",
    "Underworld Figure",
    "Crypto Millionaire",
    "Biochemistry Professor",
    "Ex-Military Contractor",
];

const PERSONALITIES: &[&str] = &[
    "Obsessively meticulous and controlling",
    "Paranoid and secretive about past",
    "Extroverted, charming but highly manipulative",
    "Cold-blooded, calculating and distant",
    "Emotionally unstable with violent outbursts",
    "Ambitious, ruthless and power-hungry",
];

const RELATIONS: &[&str] = &[
    "Former Business Partner",
    "Sibling",
    "Rival Company Exec",
    "Private Assistant",
    "Childhood Friend",
    "Lawyer",
    "Ex-Spouse",
    "Major Creditor",
];

const MOTIVES: &[&str] = &[
    "They had founded a company together with {victim}, but the victim defrauded them with forged documents, seizing all shares and driving them to bankruptcy.",
    "In the victim's safe, there were secret video recordings and blackmail files that could ruin the suspect's entire career and reputation.",
    "They were having a forbidden affair. When {victim} threatened to reveal this relationship to their spouse and the press, things spiraled out of control.",
    "They had a bitter lawsuit with {victim} over inheritance distribution for years. The loser would lose everything.",
    "The victim was about to report the suspect's illegal gambling debts and connections with loan sharks to the police.",
    "An allegation of theft over an academic study turned their friendship with {victim} into hatred. The suspect claimed their idea was stolen.",
];

const CORROBORATED_ALIBIS: &[&str] = &[
    "I was out of town at the time, I have a plane ticket.",
    "I was watching a movie at home with my spouse, neighbors saw us.",
    "I was working overtime at the office, there are CCTV recordings.",
    "I was at the hospital, on duty in the ER.",
    "I was watching the game at a bar with friends, the waiter is my witness.",
    "I was sleeping at home, but my phone's GPS history shows I was there.",
];

const SUSPICIOUS_ALIBIS: &[&str] = &[
    "I was reading a book alone at home all night. No one saw me, but I swear I didn't leave.",
    "I went to bed early and turned off my phone. I know nothing.",
    "I was taking a walk alone on the beach at that hour, needed to clear my head.",
    "I was driving around the city, didn't stop to talk to anyone.",
    "I last saw the victim last week, I didn't even go near them on the day of the incident.",
];

const EVIDENCE_LINKS: &[&str] = &[
    "A silver key ring found in the mud. It is engraved with the letter '{initial}'.",
    "A visitor card dropped under the table. It reads '{family}'.",
    "A pill bottle for anxiety medication, prescribed to '{suspect}'.",
    "A parking receipt stamped 02:00 AM, belonging to a car registered to {suspect}.",
    "A monogrammed handkerchief, the corner stitched with '{initial}. {family}'.",
];

const HOMICIDE_LOCATIONS: &[&str] = &[
    "Abandoned Harbor Warehouse at the Docks",
    "Luxury Penthouse Suite overlooking Central Park",
    "Dark Corner of the City Arboretum",
    "Dusty Archives of the Old Public Library",
    "Industrial Cold Storage Facility",
    "Subway Maintenance Room Sector 7",
    "Foggy Docks near the old Pier",
    "Gothic Cathedral Bell Tower",
    "Underground VIP Casino",
];

const CYBER_LOCATIONS: &[&str] = &[
    "Central Bank Data Center",
    "Crypto Exchange Servers",
    "Military Research Lab Network",
    "Global Corp Mainframe",
    "Satellite Uplink Station",
];

const THEFT_LOCATIONS: &[&str] = &[
    "Royal Museum Vault",
    "High-End Auction House",
    "Private Collector's Mansion",
    "Armored Transport Truck",
    "National Gallery",
    "Diamond District Safe",
];

const HOMICIDE_INTROS: &[&str] = &[
    "As the clock tower bells struck midnight echoing through the dark streets of {city}, a scream tore through the silence near {location}. Arriving units found the lifeless body of {victim}, a prominent local figure. The air smelled of gunpowder and rain. The evidence surrounding the victim screamed that this was no simple robbery, but a cold-blooded, calculated execution.",
    "The dense fog settling over {city} had turned {location} into a ghost town. When the patrol guards' flashlights illuminated {victim}'s bloodied body, it was 03:00 AM. The victim must have looked their killer in the eye while taking their last breath. The chaos at the scene suggested a struggle, but the killer was professional enough to leave very few traces behind.",
    "On a stormy night in {city}, {location} was buried in a deadly silence. When lightning tore through the sky, {victim}'s body lying on the ground was illuminated for a brief second. As the police tape was drawn, detectives immediately realized this was no ordinary murder. The frozen expression on the victim's face and strange symbols at the scene pointed to a dark secret behind this case.",
];

const CYBER_INTROS: &[&str] = &[
    "Chaos reigns in the {city} Financial Center. A massive cyber attack on {location} systems not only stole sensitive data but destroyed all security protocols. The target, {victim}, was a key figure in the digital world. The attackers seized control of the system, leaving behind an encrypted message signed 'Ghost Protocol'.",
    "Just before world markets opened, an anomaly detected in the {location} networks of {city} turned into a disaster within seconds. A malware codenamed 'Phantom', never seen before, encrypted the top-secret database managed by {victim}. The source of the attack is unclear, but the probability of an insider threat is extremely high.",
];

const THEFT_INTROS: &[&str] = &[
    "Known as the most secure fortress in {city}, {location} woke up this morning to the biggest and quietest heist in its history. Laser sensors, pressure detectors, and retina scanners... None of them triggered an alarm. A priceless artifact from the {victim} collection was gone without a trace.",
    "The night shift at {location} in {city} ended like any other, until the morning inventory came up one piece short. The most valuable item entrusted to {victim} had been replaced with a flawless replica. Whoever did this knew the building, the guards and the schedule.",
];

const HOMICIDE_CLUES: &[&str] = &[
    "A torn shirt button tightly clutched in the victim's palm.",
    "A size 43 shoe print in the muddy ground, with a distinctively worn left heel.",
    "A smashed cell phone with its battery removed.",
    "An expensive wristwatch with shattered glass, stopped exactly at the time of impact.",
    "A silver lighter engraved with initials.",
    "A crumpled, blood-stained note found in the victim's pocket.",
    "Latex gloves discarded in a trash bin near the crime scene.",
];

const CYBER_CLUES: &[&str] = &[
    "A high-security encrypted USB drive dropped on the server room floor.",
    "Unauthorized access attempts in firewall logs recorded at midnight.",
    "Shattered hard drive fragments found in the waste bin.",
    "Foreign fingerprint detected on the system administrator's keyboard.",
    "A mocking text file hidden within the attacker's code.",
];

const THEFT_CLUES: &[&str] = &[
    "A piece of black fabric snagged on the ventilation grate.",
    "Black spray paint covering the security camera lens.",
    "A cloned fingerprint mold dropped near the safe.",
    "A fake ID card used at the staff entrance.",
    "A diamond-tipped tool used to cut the display glass.",
];

const CAUSES_OF_DEATH: &[&str] = &[
    "Cyanide Poisoning",
    "Gunshot (9mm)",
    "Blunt Trauma",
    "Stabbing to the heart",
];

const ATTACK_VECTORS: &[&str] = &[
    "Ransomware Encryption (AES-256)",
    "Compromised Administrator Credentials",
    "Backdoored Firmware Update",
];

const STOLEN_ITEMS: &[&str] = &[
    "The Star of the East Diamond",
    "A Fabergé Imperial Egg",
    "The Lost Rembrandt Sketchbook",
];

pub fn pack() -> LanguagePack {
    LanguagePack {
        cities: owned(CITIES),
        given_names_male: owned(GIVEN_MALE),
        given_names_female: owned(GIVEN_FEMALE),
        family_names: owned(FAMILY),
        jobs: owned(JOBS),
        personalities: owned(PERSONALITIES),
        relations: owned(RELATIONS),
        motives: owned(MOTIVES),
        corroborated_alibis: owned(CORROBORATED_ALIBIS),
        suspicious_alibis: owned(SUSPICIOUS_ALIBIS),
        evidence_links: owned(EVIDENCE_LINKS),
        evidence_label: "Hidden Clue".into(),
        entry_label: "Entrance".into(),
        entry_marker: "No signs of forced entry. Whoever did this had a key or the code.".into(),
        autopsy: AutopsyText {
            margin: "±45 min".into(),
            toxicology: "Clean, except for high cortisol levels indicating stress.".into(),
            wounds: "Defensive wounds on forearms. Fatal blow was sudden.".into(),
            notes: "Killer was likely right-handed based on wound angle.".into(),
        },
        server_log: vec![
            ServerLogTemplate {
                offset_seconds: -600,
                ip: "INTERNAL_NET".into(),
                action: "Door Unlock".into(),
                status: LogStatus::Success,
            },
            ServerLogTemplate {
                offset_seconds: -408,
                ip: "192.168.1.X".into(),
                action: "Admin Login".into(),
                status: LogStatus::Success,
            },
            ServerLogTemplate {
                offset_seconds: -120,
                ip: "192.168.1.X".into(),
                action: "Audit Log Purge".into(),
                status: LogStatus::Failed,
            },
            ServerLogTemplate {
                offset_seconds: 0,
                ip: "Unknown_Proxy".into(),
                action: "Data Exfiltration".into(),
                status: LogStatus::Warning,
            },
        ],
        surveillance: vec![
            SurveillanceTemplate {
                offset_minutes: -16,
                camera: "C-14 Hallway".into(),
                observation: "Looping footage detected".into(),
            },
            SurveillanceTemplate {
                offset_minutes: 0,
                camera: "Vault Interior".into(),
                observation: "Blackout for 3 minutes".into(),
            },
        ],
        homicide: CategoryPack {
            locations: owned(HOMICIDE_LOCATIONS),
            intros: owned(HOMICIDE_INTROS),
            clues: owned(HOMICIDE_CLUES),
            causes: owned(CAUSES_OF_DEATH),
            scene_descriptions: owned(&[
                "Victim found in a contorted position. Rigor mortis suggests death occurred hours ago.",
            ]),
            scene_label: "Victim Body".into(),
            scene_marker: "The victim was found here. Signs of struggle evident.".into(),
            trace_label: "Blood Spatter".into(),
            trace_marker: "High velocity blood spatter on the wall indicating impact direction."
                .into(),
        },
        cyber: CategoryPack {
            locations: owned(CYBER_LOCATIONS),
            intros: owned(CYBER_INTROS),
            clues: owned(CYBER_CLUES),
            causes: owned(ATTACK_VECTORS),
            scene_descriptions: owned(&[
                "Server room temperature elevated. Emergency cooling active. Physical breach confirmed.",
            ]),
            scene_label: "Main Server".into(),
            scene_marker: "The compromised rack. Status lights blinking red, drive bays still warm."
                .into(),
            trace_label: "Tampered Cable".into(),
            trace_marker: "A patch cable re-routed to an unmonitored port.".into(),
        },
        theft: CategoryPack {
            locations: owned(THEFT_LOCATIONS),
            intros: owned(THEFT_INTROS),
            clues: owned(THEFT_CLUES),
            causes: owned(STOLEN_ITEMS),
            scene_descriptions: owned(&[
                "Vault titanium bars cut with thermal lance. Professional job.",
            ]),
            scene_label: "Empty Display".into(),
            scene_marker: "The case that held the item. The glass was cut in a perfect circle."
                .into(),
            trace_label: "Metal Shavings".into(),
            trace_marker: "Fine metal shavings on the floor, still warm from the lance.".into(),
        },
    }
}
