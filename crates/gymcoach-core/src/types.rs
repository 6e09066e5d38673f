//! Core persisted types.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use ulid::{Generator, Ulid};

use crate::api::AnalysisResponse;

/// The logged-in user. Presence of this record is the auth flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

static RECORD_IDS: OnceLock<Mutex<Generator>> = OnceLock::new();

/// Next history id. Ids from one process strictly increase, even within
/// the same millisecond, so key order is creation order.
fn next_record_id() -> Ulid {
    let mut ids = RECORD_IDS.get_or_init(|| Mutex::new(Generator::new())).lock();
    ids.generate().unwrap_or_else(|e| {
        // Random bits exhausted within one millisecond.
        tracing::warn!("Monotonic id overflow: {}", e);
        Ulid::new()
    })
}

/// Summary of one completed analysis, kept for the history page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Ulid,
    pub exercise_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub frame_count: usize,
    pub mean_error_score: Option<f64>,
    /// Frame id with the highest error score
    pub worst_frame: Option<u32>,
    pub feedback_summary: String,
}

impl AnalysisRecord {
    pub fn new(
        exercise_name: impl Into<String>,
        email: impl Into<String>,
        frame_count: usize,
        mean_error_score: Option<f64>,
        worst_frame: Option<u32>,
        feedback_summary: impl Into<String>,
    ) -> Self {
        Self {
            id: next_record_id(),
            exercise_name: exercise_name.into(),
            email: email.into(),
            created_at: Utc::now(),
            frame_count,
            mean_error_score,
            worst_frame,
            feedback_summary: feedback_summary.into(),
        }
    }

    pub fn from_response(exercise_name: &str, email: &str, response: &AnalysisResponse) -> Self {
        Self::new(
            exercise_name,
            email,
            response.analysis.len(),
            response.mean_error_score(),
            response.worst_frame().map(|f| f.frame_id),
            response.feedback_summary.clone(),
        )
    }

    /// Mean score rounded for display, or a dash when no frames came back.
    pub fn mean_score_label(&self) -> String {
        self.mean_error_score
            .map(|s| format!("{:.0}", s))
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AnalysisFrame;

    #[test]
    fn test_record_from_response() {
        let frame = |id, score| AnalysisFrame {
            frame_id: id,
            error_score: score,
            feedback: String::new(),
            technical_observation: String::new(),
            user_image: String::new(),
            trainer_image: String::new(),
        };
        let response = AnalysisResponse {
            analysis: vec![frame(4, 10.0), frame(9, 36.0)],
            feedback_summary: "Good tempo".into(),
            technical_details: Vec::new(),
        };

        let record = AnalysisRecord::from_response("Squat", "a@b.c", &response);
        assert_eq!(record.frame_count, 2);
        assert_eq!(record.worst_frame, Some(9));
        assert_eq!(record.mean_score_label(), "23");
        assert_eq!(record.feedback_summary, "Good tempo");
    }

    #[test]
    fn test_record_ids_increase_within_a_millisecond() {
        let ids: Vec<Ulid> = (0..200)
            .map(|_| AnalysisRecord::new("Squat", "", 0, None, None, "").id)
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_record_label() {
        let record = AnalysisRecord::new("Squat", "", 0, None, None, "");
        assert_eq!(record.mean_score_label(), "-");
    }
}
