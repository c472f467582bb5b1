//! Topic and locality extraction from a single user message.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, Locality};
use crate::normalize::{contains_word, normalize};

/// A recognized canned exchange; the lowest-priority topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallTalk {
    Hello,
    HowAreYou,
    Thanks,
    Goodbye,
    Help,
}

impl SmallTalk {
    const KEYWORDS: &'static [(SmallTalk, &'static [&'static str])] = &[
        (SmallTalk::Hello, &["hola", "buenos dias", "buenas"]),
        (SmallTalk::HowAreYou, &["como estas"]),
        (SmallTalk::Thanks, &["gracias"]),
        (SmallTalk::Goodbye, &["adios"]),
        (SmallTalk::Help, &["ayuda"]),
    ];

    fn detect(normalized: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(_, keys)| keys.iter().any(|k| normalized.contains(k)))
            .map(|(talk, _)| *talk)
    }
}

/// What the user is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Restaurant,
    Tourism,
    Mall,
    Weather,
    Safety,
    Greeting(SmallTalk),
}

enum Keyword {
    /// Substring of the normalized text
    Stem(&'static str),
    /// Whole word; for stems that prefix unrelated words ("comer" / "comercial")
    Word(&'static str),
}

impl Keyword {
    fn matches(&self, normalized: &str) -> bool {
        match self {
            Keyword::Stem(stem) => normalized.contains(stem),
            Keyword::Word(word) => contains_word(normalized, word),
        }
    }
}

use Keyword::{Stem, Word};

/// Checked in order; the first topic with a matching keyword wins.
const TOPIC_KEYWORDS: &[(Topic, &[Keyword])] = &[
    (Topic::Restaurant, &[Stem("restaurante"), Word("comer"), Stem("comida")]),
    (Topic::Tourism, &[Stem("turismo"), Stem("turistico"), Stem("visitar"), Stem("conocer")]),
    (Topic::Mall, &[Stem("comercial"), Stem("compras")]),
    (Topic::Weather, &[Stem("clima"), Stem("tiempo"), Stem("temperatura"), Stem("lluvia")]),
    (Topic::Safety, &[Stem("seguridad"), Stem("seguro"), Stem("peligro"), Stem("robo")]),
];

impl Topic {
    /// Stable key stored in message metadata when a clarification is pending
    pub fn as_key(&self) -> &'static str {
        match self {
            Topic::Restaurant => "restaurantes",
            Topic::Tourism => "turismo",
            Topic::Mall => "centro comercial",
            Topic::Weather => "clima",
            Topic::Safety => "seguridad",
            Topic::Greeting(_) => "saludo",
        }
    }

    /// Whether the topic cannot be answered without a locality
    pub fn needs_locality(&self) -> bool {
        matches!(
            self,
            Topic::Restaurant | Topic::Tourism | Topic::Mall | Topic::Safety
        )
    }

    fn detect(normalized: &str) -> Option<Self> {
        TOPIC_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| k.matches(normalized)))
            .map(|(topic, _)| *topic)
            .or_else(|| SmallTalk::detect(normalized).map(Topic::Greeting))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTopic(pub String);

impl fmt::Display for UnknownTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown topic key: {}", self.0)
    }
}

impl std::error::Error for UnknownTopic {}

/// Parses the keys of topics that can be awaited; greetings never are.
impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurantes" => Ok(Topic::Restaurant),
            "turismo" => Ok(Topic::Tourism),
            "centro comercial" => Ok(Topic::Mall),
            "clima" => Ok(Topic::Weather),
            "seguridad" => Ok(Topic::Safety),
            other => Err(UnknownTopic(other.to_string())),
        }
    }
}

/// Result of scanning one message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intent {
    pub topic: Option<Topic>,
    pub locality: Option<&'static Locality>,
}

impl Intent {
    pub fn is_empty(&self) -> bool {
        self.topic.is_none() && self.locality.is_none()
    }
}

/// Extract topic and locality from raw user text.
pub fn extract(text: &str) -> Intent {
    let normalized = normalize(text);
    Intent {
        topic: Topic::detect(&normalized),
        locality: catalog::find_in(&normalized),
    }
}
