//! Roster Report Example
//!
//! Loads a roster (the built-in one, or a YAML file given as the first
//! argument) and prints every query the layer offers.
//!
//! ```text
//! cargo run --example roster_report
//! RUST_LOG=debug cargo run --example roster_report -- roster.yaml
//! ```

use anyhow::{Context, Result};
use got::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let roster = match std::env::args().nth(1) {
        Some(path) => RosterConfig::from_yaml_file(&path)
            .with_context(|| format!("loading roster from {path}"))?,
        None => RosterConfig::default_roster(),
    };
    let dao = roster.into_dao();

    println!("Roster Report ({} members)", dao.len());
    println!("============================\n");

    println!("Starting with S:        {}", list(dao.starts_with_s_sorted_by_natural()));
    println!("Lannisters:             {}", list(dao.lannisters_by_name_ascending()));
    println!("Kings (desc):           {}", list(dao.kings_by_name_descending()));
    println!("Paid under 80k:         {}", list(dao.salary_less_than_sorted_by_house(80000.0)));
    println!("By house, name desc:    {}", list(dao.sort_by_house_then_name_descending()));

    println!("\nAverage salary: {:.2}", dao.average_salary()?);
    let top = dao.highest_salary()?;
    println!("Highest salary: {} ({:.2})", top.name, top.salary);
    println!("Any above 150k: {}", dao.any_salary_greater_than(150000.0));

    let partition = dao.royalty_partition();
    println!("\nRoyals:     {}", list(partition.get(&true).cloned().unwrap_or_default()));
    println!("Non-royals: {}", list(partition.get(&false).cloned().unwrap_or_default()));

    println!("\n{:<10} {:>5} {:>12} {:>12} {:>12}", "HOUSE", "COUNT", "MIN", "MAX", "AVERAGE");
    for (house, stats) in dao.house_salary_stats() {
        println!(
            "{:<10} {:>5} {:>12.2} {:>12.2} {:>12.2}",
            house.to_string(),
            stats.count,
            stats.min,
            stats.max,
            stats.average()
        );
        println!("           {}", dao.names_joined_by_house(house));
    }

    for house in House::ALL {
        if !dao.any_in_house(house) {
            println!("\nNo members of house {house}");
        }
    }

    Ok(())
}

fn list(members: Vec<&Member>) -> String {
    members
        .iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
