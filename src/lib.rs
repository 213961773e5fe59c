//! # got-members
//!
//! An in-memory query layer over a preloaded roster of house members.
//!
//! ## Features
//!
//! - **Injected Snapshot**: The query layer receives its members at construction, never from global state
//! - **Filters & Lookups**: Find by id, name or house
//! - **Multi-Key Sorting**: Explicit, composable comparators (natural order is by id)
//! - **Aggregates**: Average and highest salary, per-house salary statistics
//! - **Grouping**: Royalty partition, members and counts per house
//! - **Roster Loading**: Built-in roster or YAML/JSON documents
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use got::prelude::*;
//!
//! let dao = RosterConfig::default_roster().into_dao();
//!
//! let lannisters = dao.lannisters_by_name_ascending();
//! let average = dao.average_salary()?;
//! let by_house = dao.count_by_house();
//! ```

pub mod config;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConfigError, MemberError, MemberResult},
        member::{House, Member, Title},
        ordering,
        service::MemberQueries,
        stats::SalaryStats,
    };

    // === Storage ===
    pub use crate::storage::InMemoryMemberDao;

    // === Config ===
    pub use crate::config::RosterConfig;

    // === External dependencies ===
    pub use chrono::NaiveDate;
}
