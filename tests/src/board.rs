//! Dispatch Board Ordering Tests
//!
//! The board lists active emergencies most severe first; within a tier the
//! report waiting longest comes first, and unclassified reports sink to the
//! bottom with the fallback marker.

use std::cmp::Reverse;

use triage_core::TriageColor;

/// One row as the dashboard consumes it
#[derive(Debug, Clone, PartialEq)]
pub struct TestBoardRow {
    pub name: String,
    pub triage_color: Option<TriageColor>,
    pub status: String,
    pub created_at: i64,
}

/// Drop rows whose record has already been resolved. The active anchor can
/// briefly keep a link to a resolved report (the link delete commits after
/// the resolving update, and may not have propagated), so the snapshot
/// trusts the record status over the index.
pub fn active_only(rows: Vec<TestBoardRow>) -> Vec<TestBoardRow> {
    rows.into_iter().filter(|r| r.status == "active").collect()
}

fn board_rank(color: Option<TriageColor>) -> i16 {
    match color {
        Some(color) => color.severity_rank() as i16,
        None => -1,
    }
}

/// Order rows the way the dispatch board does
pub fn sort_for_dispatch(mut rows: Vec<TestBoardRow>) -> Vec<TestBoardRow> {
    rows.sort_by_key(|row| (Reverse(board_rank(row.triage_color)), row.created_at));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::marker_color;

    fn row(name: &str, color: Option<TriageColor>, created_at: i64) -> TestBoardRow {
        TestBoardRow {
            name: name.to_string(),
            triage_color: color,
            status: "active".to_string(),
            created_at,
        }
    }

    fn resolved_row(name: &str, color: Option<TriageColor>, created_at: i64) -> TestBoardRow {
        TestBoardRow {
            status: "resolved".to_string(),
            ..row(name, color, created_at)
        }
    }

    #[test]
    fn test_most_severe_tier_first() {
        let rows = vec![
            row("green", Some(TriageColor::Green), 10),
            row("red", Some(TriageColor::Red), 40),
            row("yellow", Some(TriageColor::Yellow), 20),
            row("orange", Some(TriageColor::Orange), 30),
        ];
        let sorted = sort_for_dispatch(rows);
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["red", "orange", "yellow", "green"]);
    }

    #[test]
    fn test_oldest_first_within_a_tier() {
        let rows = vec![
            row("late", Some(TriageColor::Red), 50),
            row("early", Some(TriageColor::Red), 10),
            row("middle", Some(TriageColor::Red), 30),
        ];
        let sorted = sort_for_dispatch(rows);
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_unclassified_reports_sink_below_green() {
        let rows = vec![
            row("unclassified", None, 5),
            row("green", Some(TriageColor::Green), 90),
        ];
        let sorted = sort_for_dispatch(rows);
        assert_eq!(sorted[0].name, "green");
        assert_eq!(sorted[1].name, "unclassified");
    }

    #[test]
    fn test_rows_carry_the_marker_colors() {
        let rows = sort_for_dispatch(vec![
            row("a", Some(TriageColor::Yellow), 1),
            row("b", None, 2),
        ]);
        let markers: Vec<&str> = rows
            .iter()
            .map(|r| marker_color(r.triage_color))
            .collect();
        assert_eq!(markers, vec!["#FFD700", "blue"]);
    }

    #[test]
    fn test_resolved_record_with_stale_active_link_is_dropped() {
        // The resolved report still hangs off the active anchor, and its
        // tier would put it at the top of the board if the index were
        // trusted blindly.
        let rows = vec![
            resolved_row("handed_off", Some(TriageColor::Red), 10),
            row("waiting", Some(TriageColor::Orange), 20),
            row("stable", Some(TriageColor::Green), 30),
        ];

        let sorted = sort_for_dispatch(active_only(rows));
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["waiting", "stable"]);
    }

    #[test]
    fn test_severity_rank_is_strictly_ordered() {
        assert!(TriageColor::Red.severity_rank() > TriageColor::Orange.severity_rank());
        assert!(TriageColor::Orange.severity_rank() > TriageColor::Yellow.severity_rank());
        assert!(TriageColor::Yellow.severity_rank() > TriageColor::Green.severity_rank());
    }
}
