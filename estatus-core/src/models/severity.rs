//! Check severity codes and the lattice used to roll them up.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four severity codes a check can report.
///
/// Serialises as its integer code so rendered rollups keep the numeric
/// `status` field backends and dashboards already expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Ok,
        Severity::Warning,
        Severity::Critical,
        Severity::Unknown,
    ];

    /// Integer code as reported by checks.
    pub const fn code(self) -> i64 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    /// Exact mapping; `None` for any code outside `0..=3`.
    pub const fn from_code(code: i64) -> Option<Severity> {
        match code {
            0 => Some(Severity::Ok),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Critical),
            3 => Some(Severity::Unknown),
            _ => None,
        }
    }

    /// Bucket a raw code for counting. Unrecognised codes count as `Ok`.
    ///
    /// Note this differs from [`display_token`], which shows the same codes
    /// as `UNKN`.
    pub const fn bucket(code: i64) -> Severity {
        match Severity::from_code(code) {
            Some(severity) => severity,
            None => Severity::Ok,
        }
    }

    /// Lattice merge: CRITICAL dominates, then WARNING, then UNKNOWN.
    /// `Ok` is the identity.
    ///
    /// ```text
    ///   |      | Crit | Warn | Unkn |  OK  |
    ///   |------|------|------|------|------|
    ///   | Crit | Crit | Crit | Crit | Crit |
    ///   | Warn | Crit | Warn | Warn | Warn |
    ///   | Unkn | Crit | Warn | Unkn | Unkn |
    ///   |  OK  | Crit | Warn | Unkn |  OK  |
    /// ```
    pub const fn merge(self, other: Severity) -> Severity {
        match (self, other) {
            (Severity::Critical, _) | (_, Severity::Critical) => Severity::Critical,
            (Severity::Warning, _) | (_, Severity::Warning) => Severity::Warning,
            (Severity::Unknown, _) | (_, Severity::Unknown) => Severity::Unknown,
            _ => Severity::Ok,
        }
    }

    /// Short display token.
    pub const fn token(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARN",
            Severity::Critical => "CRIT",
            Severity::Unknown => "UNKN",
        }
    }
}

/// Display token for a raw code. Anything outside `0..=3` is `UNKN`.
pub const fn display_token(code: i64) -> &'static str {
    match Severity::from_code(code) {
        Some(severity) => severity.token(),
        None => "UNKN",
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<Severity> for i64 {
    fn from(severity: Severity) -> i64 {
        severity.code()
    }
}

impl TryFrom<i64> for Severity {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Severity::from_code(code).ok_or_else(|| format!("unrecognised severity code {code}"))
    }
}
