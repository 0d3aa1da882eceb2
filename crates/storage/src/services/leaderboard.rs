//! Branch standings and individual achiever rankings.
//!
//! Rows whose foreign keys do not resolve (a result pointing at an unknown
//! event or chest number, an entry pointing at an unknown branch) are skipped
//! rather than rejected. Results are keyed in live during the meet, so the
//! tables are routinely inconsistent for short periods and the boards must
//! still render from whatever does resolve.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Branch, Entry, EntryType, Event, EventResult, EventType, Gender, TeamMember};

/// Branch name used when an entry's branch does not resolve.
pub const UNKNOWN_BRANCH: &str = "Unknown";

/// The five tables the leaderboards are computed from. `None` means the
/// table could not be provided at all, which is distinct from an empty table.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardSources {
    pub branches: Option<Vec<Branch>>,
    pub events: Option<Vec<Event>>,
    pub entries: Option<Vec<Entry>>,
    pub results: Option<Vec<EventResult>>,
    pub team_members: Option<Vec<TeamMember>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchRanking {
    pub branch_id: Uuid,
    pub branch_name: String,
    /// Points from championship events only.
    pub official_points: Decimal,
    pub total_points: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndividualRanking {
    pub chest_no: i32,
    pub name: String,
    pub branch_name: String,
    pub gender: Option<Gender>,
    pub individual_points: Decimal,
    pub group_points: Decimal,
    pub total_points: Decimal,
    /// Distinct events the individual earned points in, directly or through
    /// a group. Zero-point results do not count.
    pub category_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Leaderboards {
    pub branches: Vec<BranchRanking>,
    /// Male individual achievers.
    pub kalaprathibha: Vec<IndividualRanking>,
    /// Female individual achievers.
    pub kalathilakam: Vec<IndividualRanking>,
}

struct Tables<'a> {
    branches: &'a [Branch],
    events: &'a [Event],
    entries: &'a [Entry],
    results: &'a [EventResult],
    team_members: &'a [TeamMember],
}

impl LeaderboardSources {
    fn tables(&self) -> Result<Tables<'_>> {
        match (
            &self.branches,
            &self.events,
            &self.entries,
            &self.results,
            &self.team_members,
        ) {
            (Some(branches), Some(events), Some(entries), Some(results), Some(team_members)) => {
                Ok(Tables {
                    branches,
                    events,
                    entries,
                    results,
                    team_members,
                })
            }
            _ => Err(StorageError::DataUnavailable(format!(
                "missing {}",
                self.missing_tables().join(", ")
            ))),
        }
    }

    fn missing_tables(&self) -> Vec<&'static str> {
        [
            ("branches", self.branches.is_none()),
            ("events", self.events.is_none()),
            ("entries", self.entries.is_none()),
            ("results", self.results.is_none()),
            ("team_members", self.team_members.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect()
    }
}

/// Computes branch standings and both individual rankings in one pass over
/// the results. Ties keep the order of the input tables.
pub fn compute_leaderboards(sources: &LeaderboardSources) -> Result<Leaderboards> {
    let tables = sources.tables()?;

    let events: HashMap<Uuid, &Event> = tables.events.iter().map(|e| (e.event_id, e)).collect();
    let entries: HashMap<i32, &Entry> = tables.entries.iter().map(|e| (e.chest_no, e)).collect();
    let branches: HashMap<Uuid, &Branch> =
        tables.branches.iter().map(|b| (b.branch_id, b)).collect();

    let branch_rankings = rank_branches(&tables, &events, &entries);
    let individuals = rank_individuals(&tables, &events, &branches);

    let (kalaprathibha, kalathilakam) = partition_by_gender(individuals);

    Ok(Leaderboards {
        branches: branch_rankings,
        kalaprathibha,
        kalathilakam,
    })
}

fn rank_branches(
    tables: &Tables<'_>,
    events: &HashMap<Uuid, &Event>,
    entries: &HashMap<i32, &Entry>,
) -> Vec<BranchRanking> {
    let mut rankings: IndexMap<Uuid, BranchRanking> = tables
        .branches
        .iter()
        .map(|branch| {
            let ranking = BranchRanking {
                branch_id: branch.branch_id,
                branch_name: branch.name.clone(),
                official_points: Decimal::ZERO,
                total_points: Decimal::ZERO,
            };
            (branch.branch_id, ranking)
        })
        .collect();

    for result in tables.results {
        let (Some(event), Some(entry)) = (events.get(&result.event_id), entries.get(&result.chest_no))
        else {
            tracing::debug!(
                result_id = %result.result_id,
                event_id = %result.event_id,
                chest_no = result.chest_no,
                "Skipping result with unresolved event or entry"
            );
            continue;
        };
        let Some(ranking) = rankings.get_mut(&entry.branch_id) else {
            tracing::debug!(
                chest_no = entry.chest_no,
                branch_id = %entry.branch_id,
                "Skipping result for entry with unknown branch"
            );
            continue;
        };

        ranking.total_points += result.points_awarded;
        if event.is_championship_event {
            ranking.official_points += result.points_awarded;
        }
    }

    rankings.sort_by(|_, a, _, b| b.official_points.cmp(&a.official_points));
    rankings.into_values().collect()
}

#[derive(Default)]
struct Tally {
    individual_points: Decimal,
    group_points: Decimal,
    scored_events: HashSet<Uuid>,
}

impl Tally {
    fn credit(&mut self, event: &Event, points: Decimal) {
        match event.event_type {
            EventType::Individual => self.individual_points += points,
            EventType::Group => self.group_points += points,
        }
        // Zero-point results are participation, not scoring.
        if !points.is_zero() {
            self.scored_events.insert(event.event_id);
        }
    }
}

fn rank_individuals(
    tables: &Tables<'_>,
    events: &HashMap<Uuid, &Event>,
    branches: &HashMap<Uuid, &Branch>,
) -> Vec<IndividualRanking> {
    let mut tallies: IndexMap<i32, (&Entry, Tally)> = tables
        .entries
        .iter()
        .filter(|entry| entry.entry_type == EntryType::Individual)
        .map(|entry| (entry.chest_no, (entry, Tally::default())))
        .collect();

    let mut members_by_group: HashMap<i32, Vec<i32>> = HashMap::new();
    for member in tables.team_members {
        members_by_group
            .entry(member.group_chest_no)
            .or_default()
            .push(member.member_chest_no);
    }

    for result in tables.results {
        let Some(event) = events.get(&result.event_id) else {
            tracing::debug!(
                result_id = %result.result_id,
                event_id = %result.event_id,
                "Skipping result for unknown event"
            );
            continue;
        };

        match event.event_type {
            EventType::Individual => {
                // Group entries have no individual ranking and fall through here.
                if let Some((_, tally)) = tallies.get_mut(&result.chest_no) {
                    tally.credit(event, result.points_awarded);
                }
            }
            EventType::Group => {
                let members = members_by_group
                    .get(&result.chest_no)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                for member in members {
                    if let Some((_, tally)) = tallies.get_mut(member) {
                        tally.credit(event, result.points_awarded);
                    }
                }
            }
        }
    }

    tallies
        .into_values()
        .map(|(entry, tally)| IndividualRanking {
            chest_no: entry.chest_no,
            name: entry.name.clone(),
            branch_name: branches
                .get(&entry.branch_id)
                .map(|b| b.name.clone())
                .unwrap_or_else(|| UNKNOWN_BRANCH.to_string()),
            gender: entry.gender,
            individual_points: tally.individual_points,
            group_points: tally.group_points,
            total_points: tally.individual_points + tally.group_points,
            category_count: tally.scored_events.len(),
        })
        .collect()
}

fn partition_by_gender(
    individuals: Vec<IndividualRanking>,
) -> (Vec<IndividualRanking>, Vec<IndividualRanking>) {
    let mut male = Vec::new();
    let mut female = Vec::new();

    for ranking in individuals {
        match ranking.gender {
            Some(Gender::Male) => male.push(ranking),
            Some(Gender::Female) => female.push(ranking),
            None => {}
        }
    }

    male.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    female.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    (male, female)
}
