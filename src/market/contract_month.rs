//! Commodity contract months and option expiry rules

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::{Black76Error, Black76Result};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Underlying commodity futures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Commodity {
    /// Brent crude
    #[serde(rename = "BRN", alias = "brn", alias = "Brn")]
    Brn,
    /// Henry Hub natural gas
    #[serde(rename = "HH", alias = "hh", alias = "Hh")]
    Hh,
}

impl Commodity {
    pub fn code(&self) -> &'static str {
        match self {
            Commodity::Brn => "BRN",
            Commodity::Hh => "HH",
        }
    }

    /// Months between option expiry and the futures contract month
    pub fn expiry_offset_months(&self) -> u32 {
        match self {
            Commodity::Brn => 2,
            Commodity::Hh => 1,
        }
    }

    /// Default pricing unit
    pub fn unit_of_measure(&self) -> &'static str {
        match self {
            Commodity::Brn => "USD/BBL",
            Commodity::Hh => "USD/MMBTu",
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Commodity {
    type Err = Black76Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRN" => Ok(Commodity::Brn),
            "HH" => Ok(Commodity::Hh),
            _ => Err(Black76Error::market(
                "Unknown Commodity. Accepted commodities are: BRN or HH",
            )),
        }
    }
}

/// Futures delivery month, written like "Mar24"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContractMonth {
    year: i32,
    month: u32,
}

impl ContractMonth {
    pub fn new(year: i32, month: u32) -> Black76Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Black76Error::market(format!("Invalid month {}", month)));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month, 1 to 12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Step back `months` calendar months
    pub fn minus_months(&self, months: u32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 - months as i32;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
    }

    /// Last Monday-to-Friday day of the month
    pub fn last_weekday(&self) -> Option<NaiveDate> {
        let mut day = self.last_day()?;
        while matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            day = day.pred_opt()?;
        }
        Some(day)
    }
}

impl fmt::Display for ContractMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:02}",
            MONTHS[(self.month - 1) as usize],
            self.year.rem_euclid(100)
        )
    }
}

impl FromStr for ContractMonth {
    type Err = Black76Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let invalid = || {
            Black76Error::market(format!(
                "Invalid contract month {:?}, expected e.g. \"Mar24\"",
                s
            ))
        };

        if code.len() != 5 || !code.is_ascii() {
            return Err(invalid());
        }
        let (month_str, year_str) = code.split_at(3);

        let month = MONTHS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(month_str))
            .ok_or_else(invalid)? as u32
            + 1;

        if !year_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = year_str.parse().map_err(|_| invalid())?;

        Self::new(2000 + year, month)
    }
}

/// Option expiry for a commodity's contract month.
///
/// The last weekday of the month `expiry_offset_months` before delivery.
pub fn last_trading_day(commodity: Commodity, month: ContractMonth) -> Black76Result<NaiveDate> {
    month
        .minus_months(commodity.expiry_offset_months())
        .last_weekday()
        .ok_or_else(|| Black76Error::market(format!("No calendar date for {}", month)))
}
