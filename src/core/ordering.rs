//! Comparators over members
//!
//! Every sort key used by the query layer lives here as a plain function so
//! it can be passed straight to `slice::sort_by`.

use crate::core::member::Member;
use std::cmp::Ordering;

/// Natural order: ascending id
pub fn natural(a: &Member, b: &Member) -> Ordering {
    a.natural_cmp(b)
}

/// Ascending lexicographic order of names
pub fn by_name(a: &Member, b: &Member) -> Ordering {
    a.name.cmp(&b.name)
}

/// Ascending house order (alphabetical, see [`crate::core::House`])
pub fn by_house(a: &Member, b: &Member) -> Ordering {
    a.house.cmp(&b.house)
}

/// Oldest first
pub fn by_dob(a: &Member, b: &Member) -> Ordering {
    a.dob.cmp(&b.dob)
}

/// Ascending salary, total over all floats
pub fn by_salary(a: &Member, b: &Member) -> Ordering {
    a.salary.total_cmp(&b.salary)
}

/// House ascending, then name descending within each house
///
/// Only the name key is reversed. Reversing the combined comparator would
/// also flip the house order.
pub fn by_house_then_name_desc(a: &Member, b: &Member) -> Ordering {
    by_house(a, b).then_with(|| by_name(a, b).reverse())
}
