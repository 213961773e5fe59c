//! In-memory implementation of MemberQueries

use crate::config::RosterConfig;
use crate::core::error::{MemberError, MemberResult};
use crate::core::member::{House, Member, Title};
use crate::core::ordering;
use crate::core::service::MemberQueries;
use crate::core::stats::SalaryStats;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Query layer over an immutable snapshot of members
///
/// The snapshot is injected at construction and shared between clones, so
/// no locking is needed.
#[derive(Debug, Clone)]
pub struct InMemoryMemberDao {
    members: Arc<[Member]>,
}

impl InMemoryMemberDao {
    /// Create a query layer over the given members
    pub fn new(members: impl Into<Arc<[Member]>>) -> Self {
        let members = members.into();
        tracing::debug!(count = members.len(), "member snapshot loaded");
        Self { members }
    }

    /// Snapshot the members of a roster
    pub fn from_roster(roster: &RosterConfig) -> Self {
        Self::new(roster.members.clone())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn in_house(&self, house: House) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(move |m| m.house == house)
    }

    fn require_members(&self, operation: &str) -> MemberResult<()> {
        if self.members.is_empty() {
            tracing::warn!(operation, "aggregate requested over an empty member collection");
            return Err(MemberError::empty(operation));
        }
        Ok(())
    }
}

impl Default for InMemoryMemberDao {
    fn default() -> Self {
        Self::from_roster(&RosterConfig::default_roster())
    }
}

impl MemberQueries for InMemoryMemberDao {
    fn find_by_id(&self, id: u64) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    fn find_by_name(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    fn find_all_by_house(&self, house: House) -> Vec<&Member> {
        self.in_house(house).collect()
    }

    fn get_all(&self) -> &[Member] {
        &self.members
    }

    fn starts_with_s_sorted_by_natural(&self) -> Vec<&Member> {
        let mut found: Vec<&Member> = self
            .members
            .iter()
            .filter(|m| m.name.starts_with('S'))
            .collect();
        found.sort_by(|a, b| ordering::natural(a, b));
        found
    }

    fn lannisters_by_name_ascending(&self) -> Vec<&Member> {
        let mut found: Vec<&Member> = self.in_house(House::Lannister).collect();
        found.sort_by(|a, b| ordering::by_name(a, b));
        found
    }

    fn salary_less_than_sorted_by_house(&self, max: f64) -> Vec<&Member> {
        let mut found: Vec<&Member> = self.members.iter().filter(|m| m.salary < max).collect();
        found.sort_by(|a, b| ordering::by_house(a, b));
        found
    }

    fn sort_by_house_then_name_descending(&self) -> Vec<&Member> {
        let mut all: Vec<&Member> = self.members.iter().collect();
        all.sort_by(|a, b| ordering::by_house_then_name_desc(a, b));
        all
    }

    fn house_by_birthdate(&self, house: House) -> Vec<&Member> {
        let mut found: Vec<&Member> = self.in_house(house).collect();
        found.sort_by(|a, b| ordering::by_dob(a, b));
        found
    }

    fn kings_by_name_descending(&self) -> Vec<&Member> {
        let mut found: Vec<&Member> = self
            .members
            .iter()
            .filter(|m| m.title == Title::King)
            .collect();
        found.sort_by(|a, b| ordering::by_name(b, a));
        found
    }

    fn average_salary(&self) -> MemberResult<f64> {
        self.require_members("average salary")?;
        let stats: SalaryStats = self.members.iter().map(|m| m.salary).collect();
        Ok(stats.average())
    }

    fn names_sorted_by_house(&self, house: House) -> Vec<String> {
        let mut names: Vec<String> = self.in_house(house).map(|m| m.name.clone()).collect();
        names.sort();
        names
    }

    fn any_salary_greater_than(&self, max: f64) -> bool {
        self.members.iter().any(|m| m.salary > max)
    }

    fn any_in_house(&self, house: House) -> bool {
        self.in_house(house).next().is_some()
    }

    fn count_in_house(&self, house: House) -> usize {
        self.in_house(house).count()
    }

    fn names_joined_by_house(&self, house: House) -> String {
        self.names_sorted_by_house(house).join(", ")
    }

    fn highest_salary(&self) -> MemberResult<&Member> {
        self.require_members("highest salary")?;
        // Iterator::max_by keeps the last maximum; keep the first instead
        self.members
            .iter()
            .reduce(|best, m| {
                if ordering::by_salary(m, best).is_gt() {
                    m
                } else {
                    best
                }
            })
            .ok_or_else(|| MemberError::empty("highest salary"))
    }

    fn royalty_partition(&self) -> BTreeMap<bool, Vec<&Member>> {
        let (royals, others): (Vec<&Member>, Vec<&Member>) =
            self.members.iter().partition(|m| m.is_royal());
        BTreeMap::from([(true, royals), (false, others)])
    }

    fn members_by_house(&self) -> BTreeMap<House, Vec<&Member>> {
        let mut groups: BTreeMap<House, Vec<&Member>> = BTreeMap::new();
        for member in self.members.iter() {
            groups.entry(member.house).or_default().push(member);
        }
        groups
    }

    fn count_by_house(&self) -> BTreeMap<House, usize> {
        let mut counts = BTreeMap::new();
        for member in self.members.iter() {
            *counts.entry(member.house).or_insert(0) += 1;
        }
        counts
    }

    fn house_salary_stats(&self) -> BTreeMap<House, SalaryStats> {
        let mut stats: BTreeMap<House, SalaryStats> = BTreeMap::new();
        for member in self.members.iter() {
            stats.entry(member.house).or_default().accept(member.salary);
        }
        stats
    }
}
