//! Core module containing the member data model and the query contract

pub mod error;
pub mod member;
pub mod ordering;
pub mod service;
pub mod stats;

pub use error::{ConfigError, MemberError, MemberResult};
pub use member::{House, Member, Title};
pub use service::MemberQueries;
pub use stats::SalaryStats;
