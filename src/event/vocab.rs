use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Fixed action vocabulary. `Display`/`FromStr` use the names as they appear
/// in log lines and event tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Action {
    Goal,
    #[strum(serialize = "Shot On Target")]
    ShotOnTarget,
    Shot,
    #[strum(serialize = "Blocked Shot")]
    BlockedShot,
    Assist,
    #[strum(serialize = "Key Pass")]
    KeyPass,
    Cross,
    Pass,
    Breakthrough,
    Dribble,
    Gain,
    Miss,
    Tackle,
    Intercept,
    Acquisition,
    Clear,
    Cutout,
    Block,
    Catching,
    Punching,
    Duel,
    Foul,
    #[strum(serialize = "Be Fouled")]
    BeFouled,
    Offside,
    Touch,
}

impl Action {
    /// Goal, Shot On Target, Shot, Blocked Shot.
    pub fn is_shot(self) -> bool {
        matches!(
            self,
            Self::Goal | Self::ShotOnTarget | Self::Shot | Self::BlockedShot
        )
    }

    /// Goal or Shot On Target.
    pub fn is_on_target(self) -> bool {
        matches!(self, Self::Goal | Self::ShotOnTarget)
    }

    /// Pass or Cross.
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass | Self::Cross)
    }

    /// Actions that are captured with a start and an end click.
    pub fn is_two_point(self) -> bool {
        matches!(
            self,
            Self::Pass | Self::Cross | Self::Breakthrough | Self::Dribble
        )
    }
}

impl From<Action> for String {
    fn from(a: Action) -> Self {
        a.to_string()
    }
}

impl TryFrom<String> for Action {
    type Error = strum::ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.trim().parse()
    }
}

/// Event tags. Unknown tag text survives as `Other` so externally supplied
/// logs round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum Tag {
    Success,
    Fail,
    Key,
    Assist,
    #[strum(serialize = "Key Pass")]
    KeyPass,
    Header,
    Aerial,
    Suffered,
    #[strum(serialize = "In-box")]
    InBox,
    #[strum(serialize = "Out-box")]
    OutBox,
    Progressive,
    #[strum(serialize = "Counter Attack")]
    CounterAttack,
    Switch,
    #[strum(serialize = "Weak Foot")]
    WeakFoot,
    #[strum(serialize = "First Time")]
    FirstTime,
    #[strum(default)]
    Other(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "Success",
            Self::Fail => "Fail",
            Self::Key => "Key",
            Self::Assist => "Assist",
            Self::KeyPass => "Key Pass",
            Self::Header => "Header",
            Self::Aerial => "Aerial",
            Self::Suffered => "Suffered",
            Self::InBox => "In-box",
            Self::OutBox => "Out-box",
            Self::Progressive => "Progressive",
            Self::CounterAttack => "Counter Attack",
            Self::Switch => "Switch",
            Self::WeakFoot => "Weak Foot",
            Self::FirstTime => "First Time",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Tags order alphabetically by their text, which is the order log lines print them in.
impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Half {
    #[default]
    #[strum(serialize = "1st")]
    First,
    #[strum(serialize = "2nd")]
    Second,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum Side {
    #[default]
    Home,
    Away,
}

/// Attack direction of the acting team for the half.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    Left,
    #[default]
    Right,
}

macro_rules! string_conversions {
    ($($ty:ty),*) => {$(
        impl From<$ty> for String {
            fn from(v: $ty) -> Self {
                v.to_string()
            }
        }

        impl TryFrom<String> for $ty {
            type Error = strum::ParseError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.trim().parse()
            }
        }
    )*};
}

string_conversions!(Half, Side, Direction);
