//! Triage rule evaluation.
//!
//! `classify` maps an assessment to one of four severity tiers by ordered
//! rule evaluation: tiers are checked from highest to lowest severity and
//! the first tier with a satisfied predicate wins, so a life-threatening
//! finding always dominates however many lower-severity findings co-occur.
//! Unassessed fields satisfy no predicate, which makes a completely empty
//! assessment classify green. That is an "unknown defaults to lowest
//! displayed urgency" policy, not a safety claim: green on an incomplete
//! assessment must not be read as "confirmed stable".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assessment::{
    Breathing, Burn, Dislocation, FindingId, Fracture, Haemorrhage, MedicalAssessment, PainScale,
    Seizure,
};

/// Severity tier, ordered red > orange > yellow > green.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TriageColor {
    Red,
    Orange,
    Yellow,
    Green,
}

impl TriageColor {
    /// The lowercase tier literal used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            TriageColor::Red => "red",
            TriageColor::Orange => "orange",
            TriageColor::Yellow => "yellow",
            TriageColor::Green => "green",
        }
    }

    /// Numeric urgency, higher is more urgent. Used to order the dashboard
    /// board and the pending-finding question queue.
    pub fn severity_rank(self) -> u8 {
        match self {
            TriageColor::Red => 3,
            TriageColor::Orange => 2,
            TriageColor::Yellow => 1,
            TriageColor::Green => 0,
        }
    }
}

impl fmt::Display for TriageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker color shown for red-tier records.
pub const MARKER_RED: &str = "red";
/// Marker color shown for orange-tier records.
pub const MARKER_ORANGE: &str = "orange";
/// Yellow-tier records display as amber.
pub const MARKER_AMBER: &str = "#FFD700";
/// Marker color shown for green-tier records.
pub const MARKER_GREEN: &str = "green";
/// Fallback for records carrying no classifiable tier (malformed or legacy
/// data). Never produced by `classify`, but the display path must cope.
pub const MARKER_UNCLASSIFIED: &str = "blue";

/// Display color for a record's map marker.
pub fn marker_color(tier: Option<TriageColor>) -> &'static str {
    match tier {
        Some(TriageColor::Red) => MARKER_RED,
        Some(TriageColor::Orange) => MARKER_ORANGE,
        Some(TriageColor::Yellow) => MARKER_AMBER,
        Some(TriageColor::Green) => MARKER_GREEN,
        None => MARKER_UNCLASSIFIED,
    }
}

/// Immediately life-threatening findings.
fn matches_red(a: &MedicalAssessment) -> bool {
    matches!(a.breathing, Some(Breathing::Absent))
        || matches!(a.seizure, Some(Seizure::Current))
        || matches!(a.burn, Some(Burn::Face))
        || a.cardiac_arrest == Some(true)
}

/// Very urgent findings.
fn matches_orange(a: &MedicalAssessment) -> bool {
    matches!(a.breathing, Some(Breathing::Acute))
        || matches!(a.seizure, Some(Seizure::Post))
        || matches!(a.burn, Some(Burn::Electrical) | Some(Burn::Chemical))
        || a.fever == Some(true)
        || matches!(a.dislocation, Some(Dislocation::LargeJoint))
        || matches!(a.fracture, Some(Fracture::Compound))
        || matches!(a.haemorrhage, Some(Haemorrhage::Uncontrolled))
        || a.vomiting_blood == Some(true)
        || a.coughing_blood == Some(true)
        || a.some_unconsciousness == Some(true)
        || a.chest_pain == Some(true)
        || a.stabbed_neck == Some(true)
        || a.facial_dropping == Some(true)
        || a.aggression == Some(true)
        || a.eye_injury == Some(true)
        || a.poisoning_overdose == Some(true)
        || a.limb_cyanosis == Some(true)
        || a.pregnant == Some(true)
        || matches!(a.scale_pain, Some(PainScale::Severe))
}

/// Urgent-but-stable findings.
fn matches_yellow(a: &MedicalAssessment) -> bool {
    matches!(a.burn, Some(Burn::Other))
        || matches!(a.dislocation, Some(Dislocation::FingerToe))
        || matches!(a.fracture, Some(Fracture::Closed))
        || matches!(a.haemorrhage, Some(Haemorrhage::Controlled))
        || a.vomiting_persistent == Some(true)
        || matches!(a.scale_pain, Some(PainScale::Moderate))
}

/// Compute the severity tier for an assessment. Total and deterministic:
/// every well-typed assessment maps to exactly one tier, and a domain value
/// no rule names (a circumferential burn, an explicit negative answer)
/// simply falls through toward green.
pub fn classify(assessment: &MedicalAssessment) -> TriageColor {
    if matches_red(assessment) {
        TriageColor::Red
    } else if matches_orange(assessment) {
        TriageColor::Orange
    } else if matches_yellow(assessment) {
        TriageColor::Yellow
    } else {
        TriageColor::Green
    }
}

impl FindingId {
    /// The most urgent tier a value of this finding can produce on its own.
    /// Drives the intake question order: ask about findings that could
    /// escalate the tier furthest first.
    pub fn highest_tier(self) -> TriageColor {
        match self {
            FindingId::Breathing
            | FindingId::Seizure
            | FindingId::Burn
            | FindingId::CardiacArrest => TriageColor::Red,
            FindingId::Fever
            | FindingId::Dislocation
            | FindingId::Fracture
            | FindingId::Haemorrhage
            | FindingId::VomitingBlood
            | FindingId::CoughingBlood
            | FindingId::SomeUnconsciousness
            | FindingId::ChestPain
            | FindingId::StabbedNeck
            | FindingId::FacialDropping
            | FindingId::Aggression
            | FindingId::EyeInjury
            | FindingId::PoisoningOverdose
            | FindingId::LimbCyanosis
            | FindingId::Pregnant
            | FindingId::ScalePain => TriageColor::Orange,
            FindingId::VomitingPersistent => TriageColor::Yellow,
        }
    }
}

/// A classification together with the findings still unanswered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TriageEvaluation {
    pub color: TriageColor,
    /// Unassessed findings, most escalation-capable first. Within a tier the
    /// assessment-form order is kept (the sort is stable).
    pub pending: Vec<FindingId>,
}

/// Classify and report what is still unknown in one pass.
pub fn evaluate(assessment: &MedicalAssessment) -> TriageEvaluation {
    let mut pending = assessment.pending();
    pending.sort_by_key(|f| std::cmp::Reverse(f.highest_tier().severity_rank()));
    TriageEvaluation {
        color: classify(assessment),
        pending,
    }
}
