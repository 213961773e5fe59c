//! Member records and the closed House/Title enumerations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A great house of Westeros
///
/// Variants are declared in alphabetical order, so the derived `Ord` sorts
/// houses alphabetically as well as by declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum House {
    Arryn,
    Baratheon,
    Bolton,
    Frey,
    Greyjoy,
    Lannister,
    Martell,
    Snow,
    Stark,
    Targaryen,
    Tully,
    Tyrell,
}

impl House {
    /// Every house, in sort order
    pub const ALL: [House; 12] = [
        House::Arryn,
        House::Baratheon,
        House::Bolton,
        House::Frey,
        House::Greyjoy,
        House::Lannister,
        House::Martell,
        House::Snow,
        House::Stark,
        House::Targaryen,
        House::Tully,
        House::Tyrell,
    ];

    /// Upper-case name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            House::Arryn => "ARRYN",
            House::Baratheon => "BARATHEON",
            House::Bolton => "BOLTON",
            House::Frey => "FREY",
            House::Greyjoy => "GREYJOY",
            House::Lannister => "LANNISTER",
            House::Martell => "MARTELL",
            House::Snow => "SNOW",
            House::Stark => "STARK",
            House::Targaryen => "TARGARYEN",
            House::Tully => "TULLY",
            House::Tyrell => "TYRELL",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member's rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Title {
    Sir,
    Lord,
    Lady,
    King,
    Queen,
}

impl Title {
    /// Kings and queens are royalty; every other title is not
    pub fn is_royal(&self) -> bool {
        matches!(self, Title::King | Title::Queen)
    }
}

/// A character record
///
/// Members are created by the data provider (see [`crate::config::RosterConfig`])
/// and handed to the query layer as a read-only snapshot.
///
/// Natural order (ascending id) is the explicit comparator
/// [`Member::natural_cmp`]; there is no `Ord` impl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub house: House,
    pub title: Title,
    pub salary: f64,
    pub dob: NaiveDate,
}

impl Member {
    pub fn new(
        id: u64,
        title: Title,
        name: impl Into<String>,
        dob: NaiveDate,
        salary: f64,
        house: House,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            house,
            title,
            salary,
            dob,
        }
    }

    /// Natural ordering of members: ascending by id
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }

    /// Whether this member holds a royal title
    pub fn is_royal(&self) -> bool {
        self.title.is_royal()
    }
}
