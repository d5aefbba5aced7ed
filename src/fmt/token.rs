/// Closed set of record parts a format list may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatToken {
    /// `[INFO]`
    Level,
    /// Timestamp with microseconds.
    LongTime,
    /// Timestamp with seconds.
    Time,
    /// `file:line:function:`
    Location,
    /// The rendered message body.
    Msg,
}

/// Severity, long timestamp, location, message.
pub const DEFAULT_FORMAT: &[FormatToken] = &[
    FormatToken::Level,
    FormatToken::LongTime,
    FormatToken::Location,
    FormatToken::Msg,
];

impl FormatToken {
    pub const ALL: &'static [Self] = &[
        Self::Level,
        Self::LongTime,
        Self::Time,
        Self::Location,
        Self::Msg,
    ];

    /// Name used in config files and `set_log_format`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::LongTime => "ltime",
            Self::Time => "time",
            Self::Location => "location",
            Self::Msg => "msg",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }
}

/// Keeps the recognized names in order and drops the rest.
#[must_use]
pub fn parse_tokens<S: AsRef<str>>(names: &[S]) -> Vec<FormatToken> {
    names
        .iter()
        .filter_map(|n| FormatToken::from_name(n.as_ref()))
        .collect()
}
