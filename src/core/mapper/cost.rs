use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use crate::core::aws::{parse_items, CostGroup, CostResultByTime, GetCostAndUsageResponse};
use crate::core::error::MapperError;
use crate::core::models::cost::{CloudCost, CloudCostItem, CostPeriod, DailyCost};

pub const DEFAULT_METRIC: &str = "UnblendedCost";

/// Dimensions the cost query is grouped by: region, then service.
const GROUP_KEY_ARITY: usize = 2;

/// Parse a Cost Explorer amount string as an exact decimal.
///
/// Accepts plain (`"10.50"`) and scientific (`"1.2E-7"`) notation.
pub fn parse_amount(raw: &str) -> Result<Decimal, MapperError> {
    let trimmed = raw.trim();
    let parsed = if trimmed.contains(|c: char| c == 'e' || c == 'E') {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };
    parsed.map_err(|source| MapperError::InvalidAmount {
        value: raw.to_string(),
        source,
    })
}

fn accumulate(acc: &mut Decimal, amount: Decimal) -> Result<(), MapperError> {
    *acc = acc
        .checked_add(amount)
        .ok_or(MapperError::AmountOverflow { amount })?;
    Ok(())
}

fn group_key(group: &CostGroup) -> Result<(&str, &str), MapperError> {
    let keys = group.keys.as_deref().ok_or(MapperError::missing("Keys"))?;
    match keys {
        [region, service] => Ok((region.as_str(), service.as_str())),
        _ => Err(MapperError::UnexpectedKeyArity {
            expected: GROUP_KEY_ARITY,
            keys: keys.to_vec(),
        }),
    }
}

fn group_amount<'a>(
    group: &'a CostGroup,
    metric: &str,
) -> Result<(Decimal, Option<&'a str>), MapperError> {
    let metrics = group
        .metrics
        .as_ref()
        .ok_or(MapperError::missing("Metrics"))?;
    let value = metrics.get(metric).ok_or_else(|| MapperError::MissingMetric {
        metric: metric.to_string(),
    })?;
    let amount = value.amount.as_deref().ok_or(MapperError::missing("Amount"))?;
    Ok((parse_amount(amount)?, value.unit.as_deref()))
}

/// Aggregate Cost Explorer results into one total and a per-(region, service)
/// breakdown.
///
/// Any malformed group fails the whole aggregation. Identical keys accumulate
/// into one item regardless of which record they came from, including repeats
/// inside the same record.
pub fn aggregate_cost(records: &[CostResultByTime], metric: &str) -> Result<CloudCost, MapperError> {
    let mut total = Decimal::ZERO;
    let mut by_key: HashMap<(&str, &str), Decimal> = HashMap::new();
    let mut by_day: HashMap<NaiveDate, (Decimal, bool)> = HashMap::new();
    let mut period: Option<CostPeriod> = None;
    let mut unit: Option<&str> = None;
    let mut group_count = 0usize;

    for record in records {
        let mut record_total = Decimal::ZERO;
        for group in &record.groups {
            let key = group_key(group)?;
            let (amount, group_unit) = group_amount(group, metric)?;
            unit = unit.or(group_unit);
            accumulate(&mut total, amount)?;
            accumulate(&mut record_total, amount)?;
            accumulate(by_key.entry(key).or_insert(Decimal::ZERO), amount)?;
            group_count += 1;
        }

        if let Some(time_period) = &record.time_period {
            let day = by_day
                .entry(time_period.start)
                .or_insert((Decimal::ZERO, false));
            accumulate(&mut day.0, record_total)?;
            day.1 |= record.estimated;

            period = Some(match period {
                Some(p) => CostPeriod {
                    start: p.start.min(time_period.start),
                    end: p.end.max(time_period.end),
                },
                None => CostPeriod {
                    start: time_period.start,
                    end: time_period.end,
                },
            });
        }
    }

    let mut details: Vec<CloudCostItem> = by_key
        .into_iter()
        .map(|((region, service), cost_amount)| CloudCostItem {
            region: region.to_string(),
            service: service.to_string(),
            cost_amount,
        })
        .collect();
    details.sort_by(|a, b| {
        b.cost_amount
            .cmp(&a.cost_amount)
            .then_with(|| a.region.cmp(&b.region))
            .then_with(|| a.service.cmp(&b.service))
    });

    let mut daily: Vec<DailyCost> = by_day
        .into_iter()
        .map(|(date, (amount, estimated))| DailyCost {
            date,
            amount,
            estimated,
        })
        .collect();
    daily.sort_by(|a, b| b.date.cmp(&a.date));

    tracing::debug!(
        records = records.len(),
        groups = group_count,
        items = details.len(),
        total = %total,
        metric,
        "Aggregated cost explorer results"
    );

    Ok(CloudCost {
        metric: metric.to_string(),
        total_cost_amount: total,
        unit: unit.map(str::to_string),
        details,
        period,
        daily,
    })
}

/// Parse a `GetCostAndUsage` response body (or a bare `ResultsByTime` array)
/// and aggregate it.
pub fn map_cost_response(json: &str, metric: &str) -> Result<CloudCost, MapperError> {
    let records = parse_items::<GetCostAndUsageResponse>(json)?;
    aggregate_cost(&records, metric)
}
