//! Active hunting licenses per Nordic country.
//!
//! Latest published figures per country. The table is a compile-time constant;
//! the Nordic aggregate is summed once at compile time and never rounded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Region selector. `Nordic` aggregates every country in [`HUNTING_LICENSES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "NORDEN")]
    Nordic,
    #[serde(rename = "SE")]
    Sweden,
    #[serde(rename = "NO")]
    Norway,
    #[serde(rename = "DK")]
    Denmark,
    #[serde(rename = "FI")]
    Finland,
}

/// One row of the license table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LicenseCount {
    pub region: Region,
    /// Display name as shown on the page.
    pub name: &'static str,
    /// Hunting year the figure was published for.
    pub year: &'static str,
    pub count: u64,
}

const LICENSES: [LicenseCount; 4] = [
    LicenseCount {
        region: Region::Sweden,
        name: "SVERIGE",
        year: "2023/24",
        count: 277_042,
    },
    LicenseCount {
        region: Region::Norway,
        name: "NORGE",
        year: "2024/25",
        count: 171_740,
    },
    LicenseCount {
        region: Region::Denmark,
        name: "DANMARK",
        year: "2024/25",
        count: 166_891,
    },
    LicenseCount {
        region: Region::Finland,
        name: "FINLAND",
        year: "2024",
        count: 301_963,
    },
];

/// Country rows in page order.
pub static HUNTING_LICENSES: [LicenseCount; 4] = LICENSES;

/// Sum of every country in [`HUNTING_LICENSES`].
pub const NORDIC_TOTAL: u64 = nordic_total();

const fn nordic_total() -> u64 {
    let mut total = 0;
    let mut i = 0;
    while i < LICENSES.len() {
        total += LICENSES[i].count;
        i += 1;
    }
    total
}

impl Region {
    /// Button order on the page: aggregate first, then countries.
    pub const ALL: [Region; 5] = [
        Region::Nordic,
        Region::Sweden,
        Region::Norway,
        Region::Denmark,
        Region::Finland,
    ];

    /// Short key used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Region::Nordic => "NORDEN",
            Region::Sweden => "SE",
            Region::Norway => "NO",
            Region::Denmark => "DK",
            Region::Finland => "FI",
        }
    }

    /// Button caption, e.g. `"SVERIGE"` or `"HELA NORDEN"`.
    pub fn display_name(&self) -> &'static str {
        match self.entry() {
            Some(entry) => entry.name,
            None => "HELA NORDEN",
        }
    }

    /// Table row for a single country; `None` for the aggregate.
    pub fn entry(&self) -> Option<&'static LicenseCount> {
        HUNTING_LICENSES.iter().find(|e| e.region == *self)
    }

    /// Addressable population: active licenses in the selected region.
    pub fn base_count(&self) -> u64 {
        match self.entry() {
            Some(entry) => entry.count,
            None => NORDIC_TOTAL,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Region {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::UnknownRegion(s.to_string()))
    }
}
