//! # Eisenhower Core Library
//!
//! This library classifies short free-text tasks into one of four priority
//! quadrants (do / schedule / delegate / eliminate). All decision logic lives
//! here; the CLI (and any other front end) is a thin layer that builds a
//! [`TaskInput`], calls the engine and renders or stores the result.
//!
//! ## Architecture
//!
//! - **Scoring**: pure urgency/importance scorers driven by due dates, text
//!   cues, tags, estimates and user nudges
//! - **Quadrant**: fixed-threshold decision table over the two scores
//! - **Badges**: human-readable signal tags and a bounded reasoning string
//! - **Borderline**: gate that flags low-confidence score combinations
//! - **Sanitize**: PII redaction applied before text leaves the process
//! - **Refine**: optional, time-bounded secondary classification through a
//!   local text-generation service, always resolving to a usable answer
//!
//! ## Key Components
//!
//! - [`Classifier`]: Runs the full pipeline for one or many tasks
//! - [`RefineClient`]: Best-effort refinement with silent fallback
//! - [`Config`]: Application configuration management

pub mod badges;
pub mod borderline;
pub mod classify;
pub mod error;
pub mod quadrant;
pub mod refine;
pub mod sanitize;
pub mod scoring;
pub mod storage;
pub mod task;

pub use badges::{append_refinement, build_reasoning, compute_badges, compute_badges_at};
pub use borderline::is_borderline;
pub use classify::{classify_heuristic, Classification, Classifier};
pub use error::{ConfigError, CoreError, RefineError};
pub use quadrant::decide_quadrant;
pub use refine::{
    HttpTransport, RefineClient, RefineConfig, RefineOutcome, RefineTransport, RefinementResult,
};
pub use sanitize::sanitize_for_model;
pub use scoring::{score, score_importance, score_urgency, score_urgency_at};
pub use storage::Config;
pub use task::{Quadrant, ScoreResult, TaskInput};
