//! Static command table: the recognized keywords, their argument class and
//! help lines, plus the canned answers used when somebody mentions the bot.

use rand::seq::SliceRandom;

/// Marker character every command token starts with.
pub const MARKER: char = '!';

/// Argument class of a keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// No argument at all.
    None,
    /// A remote peer, addressed by domain or by an email-shaped address.
    DomainOrEmail,
    /// A numeric document identifier.
    Numeric,
}

/// Closed set of recognized commands.
///
/// Keyword identity is an enum rather than loose strings so that every
/// dispatch site matches exhaustively; adding a command without wiring its
/// formatter or query does not compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Help,
    Version,
    Uptime,
    Contact,
    Xep,
}

impl Keyword {
    pub const ALL: [Keyword; 5] = [
        Keyword::Help,
        Keyword::Version,
        Keyword::Uptime,
        Keyword::Contact,
        Keyword::Xep,
    ];

    /// Parse a single token. Only exact matches count; "!versions" is not a
    /// command.
    pub fn parse(token: &str) -> Option<Keyword> {
        match token {
            "!help" => Some(Keyword::Help),
            "!version" => Some(Keyword::Version),
            "!uptime" => Some(Keyword::Uptime),
            "!contact" => Some(Keyword::Contact),
            "!xep" => Some(Keyword::Xep),
            _ => None,
        }
    }

    /// The command token, marker included.
    pub fn name(self) -> &'static str {
        match self {
            Keyword::Help => "!help",
            Keyword::Version => "!version",
            Keyword::Uptime => "!uptime",
            Keyword::Contact => "!contact",
            Keyword::Xep => "!xep",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Keyword::Help => Arity::None,
            Keyword::Version | Keyword::Uptime | Keyword::Contact => Arity::DomainOrEmail,
            Keyword::Xep => Arity::Numeric,
        }
    }

    pub fn help_line(self) -> &'static str {
        match self {
            Keyword::Help => "!help -- display this text",
            Keyword::Version => "!version domain.tld -- receive the server software version",
            Keyword::Uptime => "!uptime domain.tld -- receive the server uptime",
            Keyword::Contact => "!contact domain.tld -- receive the server contact addresses",
            Keyword::Xep => "!xep number -- receive information about the specified XEP",
        }
    }
}

/// Full help text, one usage line per keyword.
pub fn help_text() -> String {
    Keyword::ALL
        .iter()
        .map(|k| k.help_line())
        .collect::<Vec<_>>()
        .join("\n")
}

const MENTION_ANSWERS: [&str; 3] = [
    "I heard that, {nick}.",
    "I am sorry for that {nick}.",
    "{nick} did you try turning it off and on again?",
];

/// Canned reply for a message that names the bot without any command.
pub fn mention_answer(nick: &str) -> String {
    let template = MENTION_ANSWERS
        .choose(&mut rand::thread_rng())
        .unwrap_or(&MENTION_ANSWERS[0]);
    template.replace("{nick}", nick)
}
