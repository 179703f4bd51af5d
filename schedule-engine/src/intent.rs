//! Intent parsing for transcribed voice queries.
//!
//! Turns an utterance such as "from union station to oriole" or
//! "联合站到金莺站" into a typed [`Intent`]. Station names are passed through
//! as text; resolving them to stops is left to the station resolver, which
//! already copes with aliases and mis-transcriptions.
//!
//! Checks run in a fixed order: whole-phrase mis-recognitions, Chinese
//! schedule patterns, English schedule patterns, Chinese departure patterns,
//! English departure patterns, then a station-info keyword test.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Language an utterance was understood in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

/// What the speaker asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Trips from one station to another.
    Schedule {
        from: String,
        to: String,
        language: Language,
    },
    /// Next departures from one station.
    Departures { station: String, language: Language },
    /// A question about a station that names no journey.
    StationInfo { query: String, language: Language },
    /// Nothing recognised.
    Unknown { query: String },
}

/// Error building the parser.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    #[error("invalid intent pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Garbled transcriptions of Chinese schedule requests, as produced by an
/// English speech recogniser, with the journey they stand for.
const MISRECOGNITIONS: &[(&str, &str, &str)] = &[
    ("what happened next round", "Union Station", "Oriole GO"),
    ("what happen next round", "Union Station", "Oriole GO"),
    ("what happened next town", "Union Station", "Oriole GO"),
    ("what happen next town", "Union Station", "Oriole GO"),
    ("what happened next ground", "Union Station", "Oriole GO"),
    ("what happen next ground", "Union Station", "Oriole GO"),
    ("leon hotel on washington", "Union Station", "Markham GO"),
    ("leonhotelonwashington", "Union Station", "Markham GO"),
    ("leon hotel on washington station", "Union Station", "Markham GO"),
    ("leonhotelonwashingtonstation", "Union Station", "Markham GO"),
    ("leon hotel washington", "Union Station", "Markham GO"),
    ("leonhotelwashington", "Union Station", "Markham GO"),
    ("leon hotel to washington", "Union Station", "Markham GO"),
    ("leonhoteltowashington", "Union Station", "Markham GO"),
    ("leon hotel dow washington", "Union Station", "Markham GO"),
    ("leonhoteldowwashington", "Union Station", "Markham GO"),
    ("leon hotel dao washington", "Union Station", "Markham GO"),
    ("leonhoteldaowashington", "Union Station", "Markham GO"),
    ("lian he zhan dao wan jin zhan", "Union Station", "Markham GO"),
    ("lianhezhandaowanjinzhan", "Union Station", "Markham GO"),
    ("union station dao markham station", "Union Station", "Markham GO"),
    ("unionstationdaomarkhamstation", "Union Station", "Markham GO"),
    ("lian he dao wan jin", "Union Station", "Markham GO"),
    ("lianhedaowanjin", "Union Station", "Markham GO"),
    ("leon her john dow gin ying john", "Union Station", "Oriole GO"),
    ("leon hope john to gin yang john", "Union Station", "Oriole GO"),
    ("lean heart zone to jean young zone", "Union Station", "Oriole GO"),
    ("line hub station to gene ying station", "Union Station", "Oriole GO"),
    ("lynn home john dow gym yang john", "Union Station", "Oriole GO"),
    ("lian he zhan dao jin ying zhan", "Union Station", "Oriole GO"),
    ("union dao oriole", "Union Station", "Oriole GO"),
    ("lian he dao jin ying", "Union Station", "Oriole GO"),
    ("union station dao oriole station", "Union Station", "Oriole GO"),
    ("lian he station dao jin ying station", "Union Station", "Oriole GO"),
    ("young hope john", "Union Station", "Oriole GO"),
    ("come young john", "Union Station", "Oriole GO"),
    ("leon her john", "Union Station", "Oriole GO"),
    ("gin ying john", "Union Station", "Oriole GO"),
];

/// Chinese station names with their English display names.
const CHINESE_STATIONS: &[(&str, &str)] = &[
    ("联合站", "Union Station"),
    ("金莺站", "Oriole GO"),
    ("金鹰站", "Oriole GO"),
    ("士嘉堡站", "Scarborough GO"),
    ("士嘉堡GO站", "Scarborough GO"),
    ("万锦站", "Markham GO"),
    ("列治文山站", "Richmond Hill GO"),
    ("奥罗拉站", "Aurora GO"),
    ("纽马克特站", "Newmarket GO"),
    ("巴里站", "Barrie South GO"),
    ("布拉德福德站", "Bradford GO"),
    ("汉密尔顿站", "Hamilton GO Centre"),
    ("伯灵顿站", "Burlington GO"),
    ("奥克维尔站", "Oakville GO"),
    ("密西沙加站", "Mississauga GO"),
    ("密西沙加", "Mississauga GO"),
    ("马尔顿站", "Malton GO"),
    ("布兰普顿站", "Brampton GO"),
    ("乔治敦站", "Georgetown GO"),
    ("阿克顿站", "Acton GO"),
    ("圭尔夫站", "Guelph Central GO"),
    ("基奇纳站", "Kitchener GO"),
    ("皮尔逊机场站", "Pearson Airport"),
    ("多伦多站", "Toronto Union"),
    ("北约克站", "North York GO"),
    ("怡陶碧谷站", "Etobicoke GO"),
];

/// Optional trailing "station" and punctuation after a captured name.
const TAIL: &str = r"(?:\s+station)?[\s\p{P}]*$";

const CHINESE_SCHEDULE: &[&str] = &[
    r"从\s*(.+?站)\s*到\s*(.+?站)",
    r"(.+?站)\s*到\s*(.+?站)",
    r"从\s*(.+?)\s*到\s*(\S+)",
    r"(.+?)\s*到\s*(\S+)",
];

const CHINESE_DEPARTURES: &[&str] = &[
    r"(.+?站?)\s*的?\s*下\s*一?\s*班\s*(?:车|列车|火车)",
    r"(.+?站?)\s*什么时候\s*有\s*(?:车|列车|火车)",
    r"(.+?站?)\s*的?\s*(?:发车|出发)\s*时间",
];

/// Compiled utterance patterns.
#[derive(Debug, Clone)]
pub struct IntentParser {
    chinese_schedule: Vec<Regex>,
    english_schedule: Vec<Regex>,
    chinese_departures: Vec<Regex>,
    english_departures: Vec<Regex>,
}

impl IntentParser {
    /// Compile all patterns.
    pub fn new() -> Result<Self, IntentError> {
        let english_schedule = [
            r"(?:please\s+)?(?:give me|tell me|show me|find|get)\s+(?:the\s+)?(?:next\s+)?(?:trains?|schedule)\s+(?:from\s+)?(.+?)\s+(?:station\s+)?(?:to|going to|bound for)\s+(.+?)",
            r"(?:from|leaving)\s+(.+?)\s+(?:station\s+)?(?:to|going to|bound for)\s+(.+?)",
            r"^(?:(?:next\s+)?(?:trains?|schedule)\s+)?(?:from\s+)?(.+?)\s+(?:station\s+)?(?:to|going to)\s+(.+?)",
        ]
        .map(|head| format!("{head}{TAIL}"));

        let english_departures = [
            r"(?:next|upcoming)\s+(?:trains?|departures?)\s+(?:from\s+)?(.+?)",
            r"(?:when|what time)\s+(?:is|are)\s+(?:the\s+)?(?:next\s+)?(?:trains?|departures?)\s+(?:from\s+)?(.+?)",
            r"departures?\s+(?:from\s+)?(.+?)",
        ]
        .map(|head| format!("{head}{TAIL}"));

        Ok(Self {
            chinese_schedule: compile(CHINESE_SCHEDULE)?,
            english_schedule: compile(&english_schedule)?,
            chinese_departures: compile(CHINESE_DEPARTURES)?,
            english_departures: compile(&english_departures)?,
        })
    }

    /// Classify an utterance.
    pub fn parse(&self, utterance: &str) -> Intent {
        let original = utterance.trim();
        let lower = original.to_lowercase();

        let intent = self
            .misrecognition(&lower)
            .or_else(|| self.chinese_schedule(original))
            .or_else(|| self.english_schedule(&lower))
            .or_else(|| self.chinese_departures(original))
            .or_else(|| self.english_departures(&lower))
            .unwrap_or_else(|| station_info_or_unknown(original, &lower));

        debug!(utterance = original, ?intent, "Parsed intent");
        intent
    }

    fn misrecognition(&self, lower: &str) -> Option<Intent> {
        MISRECOGNITIONS
            .iter()
            .find(|(phrase, _, _)| *phrase == lower)
            .map(|(_, from, to)| Intent::Schedule {
                from: from.to_string(),
                to: to.to_string(),
                language: Language::Zh,
            })
    }

    fn chinese_schedule(&self, original: &str) -> Option<Intent> {
        let (from, to) = first_pair(&self.chinese_schedule, original)?;
        Some(Intent::Schedule {
            from: chinese_to_english(from),
            to: chinese_to_english(to),
            language: Language::Zh,
        })
    }

    fn english_schedule(&self, lower: &str) -> Option<Intent> {
        let (from, to) = first_pair(&self.english_schedule, lower)?;
        Some(Intent::Schedule {
            from: from.to_string(),
            to: to.to_string(),
            language: Language::En,
        })
    }

    fn chinese_departures(&self, original: &str) -> Option<Intent> {
        let station = first_single(&self.chinese_departures, original)?;
        Some(Intent::Departures {
            station: chinese_to_english(station),
            language: Language::Zh,
        })
    }

    fn english_departures(&self, lower: &str) -> Option<Intent> {
        let station = first_single(&self.english_departures, lower)?;
        Some(Intent::Departures {
            station: station.to_string(),
            language: Language::En,
        })
    }
}

fn compile(patterns: &[impl AsRef<str>]) -> Result<Vec<Regex>, regex::Error> {
    patterns.iter().map(|p| Regex::new(p.as_ref())).collect()
}

/// Two trimmed, non-empty captures from the first matching pattern.
fn first_pair<'u>(patterns: &[Regex], text: &'u str) -> Option<(&'u str, &'u str)> {
    patterns.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let from = caps.get(1)?.as_str().trim();
        let to = caps.get(2)?.as_str().trim();
        (!from.is_empty() && !to.is_empty()).then_some((from, to))
    })
}

/// One trimmed, non-empty capture from the first matching pattern.
fn first_single<'u>(patterns: &[Regex], text: &'u str) -> Option<&'u str> {
    patterns.iter().find_map(|re| {
        let station = re.captures(text)?.get(1)?.as_str().trim();
        (!station.is_empty()).then_some(station)
    })
}

fn chinese_to_english(name: &str) -> String {
    CHINESE_STATIONS
        .iter()
        .find(|(zh, _)| *zh == name)
        .map_or(name, |(_, en)| en)
        .to_string()
}

fn station_info_or_unknown(original: &str, lower: &str) -> Intent {
    let mentions_zh = original.contains('站');
    if mentions_zh || lower.contains("station") || lower.contains("stop") {
        Intent::StationInfo {
            query: original.to_string(),
            language: if mentions_zh { Language::Zh } else { Language::En },
        }
    } else {
        Intent::Unknown {
            query: original.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(utterance: &str) -> Intent {
        IntentParser::new().unwrap().parse(utterance)
    }

    fn schedule(from: &str, to: &str, language: Language) -> Intent {
        Intent::Schedule {
            from: from.into(),
            to: to.into(),
            language,
        }
    }

    fn departures(station: &str, language: Language) -> Intent {
        Intent::Departures {
            station: station.into(),
            language,
        }
    }

    #[test]
    fn english_schedule() {
        assert_eq!(parse("from union station to oriole"), schedule("union", "oriole", Language::En));
        assert_eq!(
            parse("Train from Union to Richmond Hill GO."),
            schedule("union", "richmond hill go", Language::En)
        );
        assert_eq!(
            parse("please give me the next train from oriole to union station"),
            schedule("oriole", "union", Language::En)
        );
        assert_eq!(parse("kennedy to markham"), schedule("kennedy", "markham", Language::En));
        assert_eq!(
            parse("leaving bloor going to old cummer"),
            schedule("bloor", "old cummer", Language::En)
        );
    }

    #[test]
    fn chinese_schedule() {
        assert_eq!(
            parse("联合站到金莺站"),
            schedule("Union Station", "Oriole GO", Language::Zh)
        );
        assert_eq!(
            parse("从联合站到万锦站"),
            schedule("Union Station", "Markham GO", Language::Zh)
        );
        assert_eq!(parse("从联合到金莺"), schedule("联合", "金莺", Language::Zh));
        assert_eq!(parse("联合到 士嘉堡站"), schedule("联合", "Scarborough GO", Language::Zh));
    }

    #[test]
    fn misrecognitions_take_priority() {
        assert_eq!(
            parse("What Happened Next Round"),
            schedule("Union Station", "Oriole GO", Language::Zh)
        );
        assert_eq!(
            parse("leon hotel to washington"),
            schedule("Union Station", "Markham GO", Language::Zh)
        );
    }

    #[test]
    fn english_departures() {
        assert_eq!(parse("next trains from union"), departures("union", Language::En));
        assert_eq!(
            parse("When is the next train from Richmond Hill?"),
            departures("richmond hill", Language::En)
        );
        assert_eq!(
            parse("departures from oriole station"),
            departures("oriole", Language::En)
        );
    }

    #[test]
    fn chinese_departures() {
        assert_eq!(parse("联合站的下一班车"), departures("Union Station", Language::Zh));
        assert_eq!(parse("金莺站什么时候有车"), departures("Oriole GO", Language::Zh));
        assert_eq!(parse("万锦站的发车时间"), departures("Markham GO", Language::Zh));
    }

    #[test]
    fn station_info() {
        assert_eq!(
            parse("tell me about oriole station"),
            Intent::StationInfo {
                query: "tell me about oriole station".into(),
                language: Language::En,
            }
        );
        assert_eq!(
            parse("金莺站在哪里"),
            Intent::StationInfo {
                query: "金莺站在哪里".into(),
                language: Language::Zh,
            }
        );
    }

    #[test]
    fn unknown() {
        assert_eq!(
            parse("hello there"),
            Intent::Unknown {
                query: "hello there".into()
            }
        );
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(parse("联合站到金莺站")).unwrap();
        assert_eq!(json["type"], "schedule");
        assert_eq!(json["from"], "Union Station");
        assert_eq!(json["language"], "zh");
    }

    #[test]
    fn misrecognitions_are_lowercase() {
        for (phrase, _, _) in MISRECOGNITIONS {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }
}
