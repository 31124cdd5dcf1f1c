use serde::{Deserialize, Serialize};

pub const APPROVE_THRESHOLD: i32 = 70;
pub const REVIEW_THRESHOLD: i32 = 50;

/// Three-way lending recommendation derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Approve,
    Review,
    Decline,
}

impl Recommendation {
    pub const fn from_score(score: i32) -> Self {
        if score >= APPROVE_THRESHOLD {
            Self::Approve
        } else if score >= REVIEW_THRESHOLD {
            Self::Review
        } else {
            Self::Decline
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Review => "Review",
            Self::Decline => "Decline",
        }
    }

    pub fn summary(self, score: i32) -> String {
        match self {
            Self::Approve => format!("approve (score {score} >= {APPROVE_THRESHOLD})"),
            Self::Review => format!(
                "manual review (score {score} between {REVIEW_THRESHOLD} and {})",
                APPROVE_THRESHOLD - 1
            ),
            Self::Decline => format!("decline (score {score} < {REVIEW_THRESHOLD})"),
        }
    }
}
