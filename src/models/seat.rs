use crate::models::attendance::Attendance;
use crate::models::color::SeatColor;
use crate::models::position::Position;
use serde::{Deserialize, Serialize};

/// The part of a seat that travels with a person when seats are swapped
/// or shuffled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SeatContent {
    pub name: String,
    pub memo: String,
    pub color: SeatColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub position: Position,
    #[serde(flatten)]
    pub content: SeatContent,
    pub attendance: Attendance,
}

impl Seat {
    pub fn from_record(position: Position, record: SeatRecord) -> Self {
        Self {
            position,
            content: SeatContent {
                name: record.name,
                memo: record.memo,
                color: record.color,
            },
            attendance: record.attendance,
        }
    }

    pub fn to_record(&self) -> SeatRecord {
        SeatRecord {
            name: self.content.name.clone(),
            memo: self.content.memo.clone(),
            color: self.content.color.clone(),
            attendance: self.attendance,
        }
    }
}

/// Scalar fields persisted per seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatField {
    Name,
    Memo,
    Color,
    Attendance,
}

impl SeatField {
    pub const ALL: [SeatField; 4] = [
        SeatField::Name,
        SeatField::Memo,
        SeatField::Color,
        SeatField::Attendance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatField::Name => "name",
            SeatField::Memo => "memo",
            SeatField::Color => "color",
            SeatField::Attendance => "attendance",
        }
    }
}

/// All scalar fields of one seat, written to storage as a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatRecord {
    pub name: String,
    pub memo: String,
    pub color: SeatColor,
    pub attendance: Attendance,
}

/// Wire form of [`SeatRecord`]. Every field is optional so that a record
/// written by an older build, or edited by hand, still loads.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    memo: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    attendance: Option<String>,
}

impl SeatRecord {
    pub fn field(&self, field: SeatField) -> String {
        match field {
            SeatField::Name => self.name.clone(),
            SeatField::Memo => self.memo.clone(),
            SeatField::Color => self.color.to_string(),
            SeatField::Attendance => self.attendance.to_db_str().to_string(),
        }
    }

    /// Assign a raw stored value. Values that do not parse fall back to the
    /// field default.
    pub fn set_field(&mut self, field: SeatField, value: &str) {
        match field {
            SeatField::Name => self.name = value.to_string(),
            SeatField::Memo => self.memo = value.to_string(),
            SeatField::Color => self.color = SeatColor::parse(value).unwrap_or_default(),
            SeatField::Attendance => {
                self.attendance = Attendance::from_db_str(value).unwrap_or_default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&StoredRecord {
            name: Some(self.name.clone()),
            memo: Some(self.memo.clone()),
            color: Some(self.color.to_string()),
            attendance: Some(self.attendance.to_db_str().to_string()),
        })
    }

    /// Lenient decode: `None` when the value is not a JSON object at all.
    pub fn from_json(raw: &str) -> Option<Self> {
        let stored: StoredRecord = serde_json::from_str(raw).ok()?;
        let mut record = SeatRecord::default();
        if let Some(v) = stored.name {
            record.set_field(SeatField::Name, &v);
        }
        if let Some(v) = stored.memo {
            record.set_field(SeatField::Memo, &v);
        }
        if let Some(v) = stored.color {
            record.set_field(SeatField::Color, &v);
        }
        if let Some(v) = stored.attendance {
            record.set_field(SeatField::Attendance, &v);
        }
        Some(record)
    }
}
