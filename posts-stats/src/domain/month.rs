use chrono::Datelike;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Calendar month, ordered January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Month {
    #[display("JAN")]
    #[serde(rename = "JAN")]
    Jan,
    #[display("FEB")]
    #[serde(rename = "FEB")]
    Feb,
    #[display("MAR")]
    #[serde(rename = "MAR")]
    Mar,
    #[display("APR")]
    #[serde(rename = "APR")]
    Apr,
    #[display("MAY")]
    #[serde(rename = "MAY")]
    May,
    #[display("JUN")]
    #[serde(rename = "JUN")]
    Jun,
    #[display("JUL")]
    #[serde(rename = "JUL")]
    Jul,
    #[display("AUG")]
    #[serde(rename = "AUG")]
    Aug,
    #[display("SEP")]
    #[serde(rename = "SEP")]
    Sep,
    #[display("OCT")]
    #[serde(rename = "OCT")]
    Oct,
    #[display("NOV")]
    #[serde(rename = "NOV")]
    Nov,
    #[display("DEC")]
    #[serde(rename = "DEC")]
    Dec,
}

const ALL: [Month; 12] = [
    Month::Jan,
    Month::Feb,
    Month::Mar,
    Month::Apr,
    Month::May,
    Month::Jun,
    Month::Jul,
    Month::Aug,
    Month::Sep,
    Month::Oct,
    Month::Nov,
    Month::Dec,
];

impl Month {
    /// Zero-based index, January = 0.
    pub fn from_index(index: u32) -> Option<Self> {
        ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn of<D: Datelike>(date: &D) -> Self {
        // month0() is always in 0..12
        ALL[date.month0() as usize]
    }
}
