//! Triage Core - Emergency Severity Classification Library
//!
//! Pure Rust implementation of the triage rules that color-code emergency
//! records for dispatch. No Holochain or I/O dependencies: the same crate
//! backs the zomes (wasm32) and native tooling, tests, and benchmarks.
//!
//! # Features
//!
//! - Nullable 21-field medical assessment model with fixed wire tokens
//! - Ordered first-match-wins tier classification (red/orange/yellow/green)
//! - Pending-finding reporting to drive the intake question order
//! - Map marker color mapping with a fallback for unclassifiable records
//!
//! # Example
//!
//! ```rust
//! use triage_core::{classify, marker_color, MedicalAssessment, TriageColor};
//!
//! let mut assessment = MedicalAssessment::default();
//! assert_eq!(classify(&assessment), TriageColor::Green);
//!
//! assessment.cardiac_arrest = Some(true);
//! assert_eq!(classify(&assessment), TriageColor::Red);
//! assert_eq!(marker_color(Some(TriageColor::Red)), "red");
//! ```

pub mod assessment;
pub mod rules;

// Re-export commonly used types for convenience
pub use assessment::{
    Breathing, Burn, Dislocation, FindingId, Fracture, Haemorrhage, MedicalAssessment, PainScale,
    Seizure,
};
pub use rules::{
    classify, evaluate, marker_color, TriageColor, TriageEvaluation, MARKER_AMBER, MARKER_GREEN,
    MARKER_ORANGE, MARKER_RED, MARKER_UNCLASSIFIED,
};
