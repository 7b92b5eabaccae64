use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Pacing strategy governing when requests are launched during a run.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttackKind {
    /// One launch per `1/rate` tick.
    Steady,
    /// Back-to-back launches with uniformly random inter-arrival gaps.
    Random,
    /// Waves of simultaneous launches, `1/rate` between wave starts.
    Burst,
    /// Back-to-back launches with a pause after every step.
    Rampup,
    /// Steady pacing with random multi-second lulls.
    Spike,
    /// Steady pacing until a wall-clock deadline instead of a count.
    Sustained,
}

impl AttackKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AttackKind::Steady => "steady",
            AttackKind::Random => "random",
            AttackKind::Burst => "burst",
            AttackKind::Rampup => "rampup",
            AttackKind::Spike => "spike",
            AttackKind::Sustained => "sustained",
        }
    }
}

impl std::fmt::Display for AttackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AttackKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "steady" => Ok(AttackKind::Steady),
            "random" => Ok(AttackKind::Random),
            "burst" => Ok(AttackKind::Burst),
            "rampup" => Ok(AttackKind::Rampup),
            "spike" => Ok(AttackKind::Spike),
            "sustained" => Ok(AttackKind::Sustained),
            _ => Err(AppError::Message(format!("Unknown attack type '{}'.", s))),
        }
    }
}
