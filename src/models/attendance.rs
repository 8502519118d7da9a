use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    #[default]
    Present,
    Absent,
    Other,
}

impl Attendance {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Attendance::Present => "present",
            Attendance::Absent => "absent",
            Attendance::Other => "other",
        }
    }

    /// Convert DB string → enum.
    /// Also accepts the Japanese labels 出席, 欠席 and その他.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim() {
            "present" | "出席" => Some(Attendance::Present),
            "absent" | "欠席" => Some(Attendance::Absent),
            "other" | "その他" => Some(Attendance::Other),
            _ => None,
        }
    }

    /// Short marker shown in the grid view
    pub fn marker(&self) -> &'static str {
        match self {
            Attendance::Present => "○",
            Attendance::Absent => "×",
            Attendance::Other => "△",
        }
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

impl FromStr for Attendance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attendance::from_db_str(&s.to_lowercase())
            .ok_or_else(|| AppError::InvalidAttendance(s.to_string()))
    }
}
