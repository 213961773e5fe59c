//! Query contract over a member collection

use crate::core::error::MemberResult;
use crate::core::member::{House, Member};
use crate::core::stats::SalaryStats;
use std::collections::BTreeMap;

/// Read-only queries over a fixed collection of members
///
/// Implementations never mutate the underlying collection, so every method
/// is idempotent. Sorted results use stable sorts: members with equal keys
/// keep their source order.
pub trait MemberQueries: Send + Sync {
    /// First member with the given id
    fn find_by_id(&self, id: u64) -> Option<&Member>;

    /// First member whose name matches exactly
    fn find_by_name(&self, name: &str) -> Option<&Member>;

    /// All members of a house, in source order
    fn find_all_by_house(&self, house: House) -> Vec<&Member>;

    /// The whole collection
    fn get_all(&self) -> &[Member];

    /// Members whose name starts with an upper-case `S`, in natural (id) order
    fn starts_with_s_sorted_by_natural(&self) -> Vec<&Member>;

    /// Lannisters sorted by name
    fn lannisters_by_name_ascending(&self) -> Vec<&Member>;

    /// Members paid strictly less than `max`, sorted by house
    fn salary_less_than_sorted_by_house(&self, max: f64) -> Vec<&Member>;

    /// Everyone sorted by house ascending, then by name descending
    fn sort_by_house_then_name_descending(&self) -> Vec<&Member>;

    /// Members of a house, oldest first
    fn house_by_birthdate(&self, house: House) -> Vec<&Member>;

    /// Kings sorted by name, descending
    fn kings_by_name_descending(&self) -> Vec<&Member>;

    /// Mean salary over all members
    ///
    /// Fails with [`crate::core::MemberError::EmptyCollection`] when there are no members.
    fn average_salary(&self) -> MemberResult<f64>;

    /// Names of a house's members, sorted
    fn names_sorted_by_house(&self, house: House) -> Vec<String>;

    /// Whether any salary is strictly greater than `max`
    fn any_salary_greater_than(&self, max: f64) -> bool;

    /// Whether the house has at least one member
    fn any_in_house(&self, house: House) -> bool;

    /// Number of members in a house
    fn count_in_house(&self, house: House) -> usize;

    /// Sorted names of a house's members joined with `", "`
    fn names_joined_by_house(&self, house: House) -> String;

    /// Best-paid member; the first one in source order on ties
    ///
    /// Salaries compare with `f64::total_cmp`, so a NaN salary ranks highest,
    /// matching the `max` of [`SalaryStats`].
    ///
    /// Fails with [`crate::core::MemberError::EmptyCollection`] when there are no members.
    fn highest_salary(&self) -> MemberResult<&Member>;

    /// Royals (kings and queens) under `true`, everyone else under `false`
    ///
    /// Both keys are always present.
    fn royalty_partition(&self) -> BTreeMap<bool, Vec<&Member>>;

    /// Members grouped by house; houses without members are absent
    fn members_by_house(&self) -> BTreeMap<House, Vec<&Member>>;

    /// Member count per house; houses without members are absent
    fn count_by_house(&self) -> BTreeMap<House, usize>;

    /// Salary statistics per house; houses without members are absent
    fn house_salary_stats(&self) -> BTreeMap<House, SalaryStats>;
}
