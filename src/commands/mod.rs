// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{DateRange, FilterCriteria, TxType};
use crate::utils::parse_date;
use anyhow::Result;

pub mod categories;
pub mod exporter;
pub mod reports;
pub mod transactions;

/// Shared `--from/--to/--category/--type` flags.
pub fn criteria_from(sub: &clap::ArgMatches) -> Result<FilterCriteria> {
    let date_range = match (sub.get_one::<String>("from"), sub.get_one::<String>("to")) {
        (Some(start), Some(end)) => Some(DateRange {
            start: parse_date(start)?,
            end: parse_date(end)?,
        }),
        _ => None,
    };
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let r#type = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TxType>())
        .transpose()?;
    Ok(FilterCriteria {
        date_range,
        category,
        r#type,
    })
}
