//! Star Trek universe tables.

use crate::attributes::UniverseAttribute;
use crate::entities::{CanonicalCharacter, RegistryPattern};

use super::Universe;

pub const NAME: &str = "startrek";

const FIRST_NAMES_MALE: &[&str] = &[
    "James", "Jean-Luc", "Benjamin", "Jonathan", "William", "Leonard", "Montgomery",
    "Hikaru", "Pavel", "Geordi", "Worf", "Julian", "Miles", "Tom", "Harry",
    "Chakotay", "Travis", "Malcolm", "Charles", "Christopher", "Wesley", "Reginald",
    "Elim", "Odo", "Quark", "Rom", "Nog", "Jake", "Brad", "Jack",
];

const FIRST_NAMES_FEMALE: &[&str] = &[
    "Kathryn", "Nyota", "Beverly", "Deanna", "Kira", "Jadzia", "Ezri", "B'Elanna",
    "Tasha", "Hoshi", "Christine", "Janice", "Keiko", "Kasidy", "Michael",
    "Sylvia", "Philippa", "Una", "Erica", "Beckett",
];

const LAST_NAMES_MALE: &[&str] = &[
    "Kirk", "Picard", "Sisko", "Archer", "Riker", "McCoy", "Scott", "Sulu",
    "Chekov", "La Forge", "Bashir", "O'Brien", "Paris", "Kim", "Mayweather",
    "Reed", "Tucker", "Pike", "Crusher", "Barclay", "Garak", "Boimler",
    "Rutherford", "Tendi", "Lorca", "Saru", "Tuvok", "Neelix", "Kor", "Martok",
];

const LAST_NAMES_FEMALE: &[&str] = &[
    "Janeway", "Uhura", "Troi", "Nerys", "Dax", "Torres", "Yar", "Sato",
    "Chapel", "Rand", "Burnham", "Georgiou", "Tilly", "Mariner", "Chin-Riley",
    "Yates", "Guinan", "Shelby", "Ro",
];

const RANKS: &[&str] = &[
    "Fleet Admiral", "Admiral", "Vice Admiral", "Rear Admiral", "Commodore",
    "Captain", "Commander", "Lieutenant Commander", "Lieutenant",
    "Lieutenant Junior Grade", "Ensign", "Cadet", "Chief Petty Officer",
    "Petty Officer", "Crewman", "Master Chief Petty Officer", "Chief Warrant Officer",
];

const STARSHIPS: &[&str] = &[
    "USS Enterprise", "USS Voyager", "USS Defiant", "USS Excelsior", "USS Reliant",
    "USS Discovery", "USS Cerritos", "USS Titan", "USS Stargazer", "USS Grissom",
    "USS Yorktown", "USS Intrepid", "USS Lexington", "USS Hood", "USS Saratoga",
    "USS Prometheus", "USS Equinox", "USS Shenzhou", "USS Farragut", "USS Constellation",
    "USS Pasteur", "USS Bozeman",
];

const STARSHIP_CLASSES: &[&str] = &[
    "Constitution-class", "Galaxy-class", "Sovereign-class", "Intrepid-class",
    "Defiant-class", "Excelsior-class", "Miranda-class", "Ambassador-class",
    "Nebula-class", "Akira-class", "Oberth-class", "Nova-class", "Prometheus-class",
    "California-class", "Crossfield-class", "Walker-class", "Luna-class",
    "Steamrunner-class",
];

const BASE_LOCATIONS: &[&str] = &[
    "Starfleet Academy", "Starfleet Headquarters", "Deep Space Nine", "Starbase 74",
    "Utopia Planitia Fleet Yards", "Jupiter Station", "Memory Alpha", "Earth Spacedock",
    "Quark's Bar", "Ten Forward", "Vulcan Science Academy", "Risa Resort",
    "Starbase 11", "Empok Nor",
];

const LOCATION_DETAILS: &[&str] = &[
    "Main Bridge", "Engineering", "Sickbay", "Holodeck", "Transporter Room",
    "Observation Lounge", "Cargo Bay", "Shuttle Bay", "Jefferies Tube",
    "Ready Room", "Crew Quarters", "Mess Hall", "Recreation Deck", "Back Room",
    "Security Office", "Astrometrics Lab",
];

const LANGUAGES: &[&str] = &[
    "Federation Standard", "Klingon", "Vulcan", "Romulan", "Bajoran", "Cardassian",
    "Ferengi", "Andorian", "Tamarian", "Borg Binary", "Betazoid", "Trill",
];

const QUOTES: &[&str] = &[
    "Make it so.",
    "Engage!",
    "Beam me up.",
    "Live long and prosper.",
    "Resistance is futile.",
    "Today is a good day to die.",
    "There's coffee in that nebula.",
    "I'm a doctor, not a bricklayer.",
    "Fascinating.",
    "The needs of the many outweigh the needs of the few.",
    "Darmok and Jalad at Tanagra.",
    "It's a faaaake!",
    "Rule of Acquisition number one: once you have their money, you never give it back.",
    "Things are only impossible until they're not.",
    "Set a course for home.",
];

const STARSHIP_REGISTRIES: &[(&str, f64)] = &[
    ("NCC-####", 70.0),
    ("NCC-#####", 20.0),
    ("NX-#####", 8.0),
    ("NAR-#####", 2.0),
];

fn canonical_characters() -> Vec<CanonicalCharacter> {
    vec![
        CanonicalCharacter::new("James", "Kirk")
            .with_rank("Captain")
            .with_starship("USS Enterprise", "NCC-1701")
            .with_starship_class("Constitution-class")
            .with_language("Federation Standard")
            .with_quotes(["Beam me up.", "Risk is our business."]),
        CanonicalCharacter::new("Jean-Luc", "Picard")
            .with_rank("Captain")
            .with_starship("USS Enterprise", "NCC-1701-D")
            .with_starship_class("Galaxy-class")
            .with_language("Federation Standard")
            .with_quotes(["Make it so.", "Engage!", "Tea. Earl Grey. Hot."]),
        CanonicalCharacter::new("Benjamin", "Sisko")
            .with_rank("Captain")
            .with_starship("USS Defiant", "NX-74205")
            .with_starship_class("Defiant-class")
            .with_language("Federation Standard")
            .with_quotes(["It's a faaaake!"]),
        CanonicalCharacter::new("Kathryn", "Janeway")
            .with_rank("Captain")
            .with_starship("USS Voyager", "NCC-74656")
            .with_starship_class("Intrepid-class")
            .with_language("Federation Standard")
            .with_quotes(["There's coffee in that nebula.", "Set a course for home."]),
        CanonicalCharacter::new("Jonathan", "Archer")
            .with_rank("Captain")
            .with_starship("Enterprise", "NX-01")
            .with_starship_class("NX-class")
            .with_language("Federation Standard"),
        CanonicalCharacter::new("William", "Riker")
            .with_rank("Commander")
            .with_starship("USS Enterprise", "NCC-1701-D")
            .with_starship_class("Galaxy-class")
            .with_language("Federation Standard"),
        CanonicalCharacter::new("Leonard", "McCoy")
            .with_rank("Lieutenant Commander")
            .with_starship("USS Enterprise", "NCC-1701")
            .with_starship_class("Constitution-class")
            .with_quotes(["I'm a doctor, not a bricklayer.", "He's dead, Jim."]),
        CanonicalCharacter::new("Montgomery", "Scott")
            .with_rank("Lieutenant Commander")
            .with_starship("USS Enterprise", "NCC-1701")
            .with_starship_class("Constitution-class"),
        CanonicalCharacter::new("Nyota", "Uhura")
            .with_rank("Lieutenant")
            .with_starship("USS Enterprise", "NCC-1701")
            .with_language("Federation Standard"),
        CanonicalCharacter::new("Hikaru", "Sulu")
            .with_rank("Lieutenant")
            .with_starship("USS Enterprise", "NCC-1701"),
        CanonicalCharacter::new("Geordi", "La Forge")
            .with_rank("Lieutenant Commander")
            .with_starship("USS Enterprise", "NCC-1701-D")
            .with_starship_class("Galaxy-class"),
        CanonicalCharacter::new("Beverly", "Crusher")
            .with_rank("Commander")
            .with_starship("USS Enterprise", "NCC-1701-D"),
        CanonicalCharacter::new("Deanna", "Troi")
            .with_rank("Lieutenant Commander")
            .with_starship("USS Enterprise", "NCC-1701-D")
            .with_language("Betazoid"),
        CanonicalCharacter::new("Worf", "Rozhenko")
            .with_rank("Lieutenant")
            .with_starship("USS Enterprise", "NCC-1701-D")
            .with_language("Klingon")
            .with_quotes(["Today is a good day to die."]),
        CanonicalCharacter::new("Kira", "Nerys")
            .with_rank("Major")
            .with_language("Bajoran"),
        CanonicalCharacter::new("Jadzia", "Dax")
            .with_rank("Lieutenant Commander")
            .with_starship("USS Defiant", "NX-74205")
            .with_language("Trill"),
        CanonicalCharacter::new("Julian", "Bashir")
            .with_rank("Lieutenant")
            .with_language("Federation Standard"),
        CanonicalCharacter::new("B'Elanna", "Torres")
            .with_rank("Lieutenant")
            .with_starship("USS Voyager", "NCC-74656")
            .with_starship_class("Intrepid-class")
            .with_language("Klingon"),
        CanonicalCharacter::new("Tom", "Paris")
            .with_rank("Lieutenant")
            .with_starship("USS Voyager", "NCC-74656"),
        CanonicalCharacter::new("Michael", "Burnham")
            .with_rank("Captain")
            .with_starship("USS Discovery", "NCC-1031")
            .with_starship_class("Crossfield-class"),
        CanonicalCharacter::new("Beckett", "Mariner")
            .with_rank("Ensign")
            .with_starship("USS Cerritos", "NCC-75567")
            .with_starship_class("California-class"),
    ]
}

/// Build the Star Trek universe.
pub fn universe() -> Universe {
    Universe::new(NAME)
        .with_text(UniverseAttribute::FirstNamesMale, FIRST_NAMES_MALE.iter().copied())
        .with_text(UniverseAttribute::FirstNamesFemale, FIRST_NAMES_FEMALE.iter().copied())
        .with_text(UniverseAttribute::LastNamesMale, LAST_NAMES_MALE.iter().copied())
        .with_text(UniverseAttribute::LastNamesFemale, LAST_NAMES_FEMALE.iter().copied())
        .with_text(UniverseAttribute::Ranks, RANKS.iter().copied())
        .with_text(UniverseAttribute::Starships, STARSHIPS.iter().copied())
        .with_text(UniverseAttribute::StarshipClasses, STARSHIP_CLASSES.iter().copied())
        .with_text(UniverseAttribute::BaseLocations, BASE_LOCATIONS.iter().copied())
        .with_text(UniverseAttribute::LocationDetails, LOCATION_DETAILS.iter().copied())
        .with_text(UniverseAttribute::Languages, LANGUAGES.iter().copied())
        .with_text(UniverseAttribute::Quotes, QUOTES.iter().copied())
        .with_registries(
            STARSHIP_REGISTRIES
                .iter()
                .map(|&(pattern, weight)| RegistryPattern::new(pattern, weight)),
        )
        .with_characters(canonical_characters())
}
