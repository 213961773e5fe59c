//! Roster loading and management
//!
//! A [`RosterConfig`] is the data provider for the query layer. It is either
//! the built-in roster or a YAML/JSON document of the form:
//!
//! ```yaml
//! members:
//!   - id: 1
//!     name: Eddard
//!     house: STARK
//!     title: LORD
//!     salary: 100000.0
//!     dob: 1959-04-17
//! ```

use crate::core::error::{ConfigError, MemberResult};
use crate::core::member::{House, Member, Title};
use crate::storage::InMemoryMemberDao;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A complete roster of members
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Members in source order
    #[serde(default)]
    pub members: Vec<Member>,
}

impl RosterConfig {
    /// Load a roster from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> MemberResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, e))?;
        let roster = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), count = roster.members.len(), "roster loaded");
        Ok(roster)
    }

    /// Load a roster from a YAML string
    pub fn from_yaml_str(yaml: &str) -> MemberResult<Self> {
        let roster: Self = serde_yaml::from_str(yaml).map_err(ConfigError::from)?;
        Ok(roster)
    }

    /// Load a roster from a JSON string
    pub fn from_json_str(json: &str) -> MemberResult<Self> {
        let roster: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        Ok(roster)
    }

    /// Merge several rosters into one
    ///
    /// Members keep the order in which they first appear. When two rosters
    /// carry the same id, the later member replaces the earlier one in place.
    pub fn merge(configs: Vec<RosterConfig>) -> Self {
        let mut members: Vec<Member> = Vec::new();
        let mut positions: HashMap<u64, usize> = HashMap::new();

        for member in configs.into_iter().flat_map(|c| c.members) {
            match positions.get(&member.id) {
                Some(&idx) => {
                    tracing::warn!(id = member.id, name = %member.name, "duplicate member id, later entry wins");
                    members[idx] = member;
                }
                None => {
                    positions.insert(member.id, members.len());
                    members.push(member);
                }
            }
        }

        Self { members }
    }

    /// Build a query layer over a snapshot of this roster
    pub fn into_dao(self) -> InMemoryMemberDao {
        InMemoryMemberDao::new(self.members)
    }

    /// The built-in roster
    pub fn default_roster() -> Self {
        let members = DEFAULT_MEMBERS
            .iter()
            .map(|&(id, title, name, (y, m, d), salary, house)| {
                let dob = NaiveDate::from_ymd_opt(y, m, d).expect("built-in roster dates are valid");
                Member::new(id, title, name, dob, salary, house)
            })
            .collect();
        Self { members }
    }
}

type MemberRow = (u64, Title, &'static str, (i32, u32, u32), f64, House);

const DEFAULT_MEMBERS: &[MemberRow] = &[
    (1, Title::Lord, "Eddard", (1959, 4, 17), 100000.0, House::Stark),
    (2, Title::Lady, "Catelyn", (1964, 1, 17), 80000.0, House::Stark),
    (3, Title::Lady, "Arya", (1997, 4, 15), 50000.0, House::Stark),
    (4, Title::Lady, "Sansa", (1996, 2, 21), 60000.0, House::Stark),
    (5, Title::Sir, "Bran", (1999, 4, 9), 10000.0, House::Stark),
    (6, Title::King, "Robb", (1986, 6, 18), 100000.0, House::Stark),
    (7, Title::King, "Jon", (1986, 12, 26), 90000.0, House::Snow),
    (8, Title::Sir, "Jaime", (1970, 7, 27), 120000.0, House::Lannister),
    (9, Title::Lord, "Tyrion", (1969, 6, 11), 70000.0, House::Lannister),
    (10, Title::Lord, "Tywin", (1946, 10, 10), 200000.0, House::Lannister),
    (11, Title::Lady, "Cersei", (1973, 10, 3), 120000.0, House::Lannister),
    (12, Title::Queen, "Daenerys", (1987, 5, 1), 130000.0, House::Targaryen),
    (13, Title::Lord, "Viserys", (1983, 11, 17), 100000.0, House::Targaryen),
    (14, Title::King, "Robert", (1964, 1, 14), 180000.0, House::Baratheon),
    (15, Title::King, "Joffrey", (1992, 5, 20), 100000.0, House::Baratheon),
    (16, Title::King, "Tommen", (1997, 9, 7), 60000.0, House::Baratheon),
    (17, Title::King, "Stannis", (1957, 3, 27), 123456.0, House::Baratheon),
    (18, Title::Queen, "Margaery", (1982, 2, 11), 80000.0, House::Tyrell),
    (19, Title::Sir, "Loras", (1988, 3, 24), 70000.0, House::Tyrell),
    (20, Title::Lady, "Olenna", (1938, 7, 20), 130000.0, House::Tyrell),
    (21, Title::Lord, "Roose", (1963, 9, 12), 100000.0, House::Bolton),
    (22, Title::Lord, "Ramsay", (1985, 5, 13), 140000.0, House::Bolton),
];
