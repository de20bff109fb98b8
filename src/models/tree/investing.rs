//! Dollar cost averaging: by period, by starting year, and against a lump sum.

use crate::config::market::{DCA_CLASS_YEARS, DCA_PERIODS, Period, RETURNS};
use crate::config::palette::Hue;
use crate::models::MetricId;
use crate::models::patterns::ValuePattern;

pub struct DcaPeriod {
    pub period: &'static Period,
    pub stack: ValuePattern,
    pub avg_price: MetricId,
    pub returns: MetricId,
    pub cagr: Option<MetricId>,
    pub lump_sum_stack: ValuePattern,
    pub lump_sum_returns: MetricId,
}

/// Daily buys started on January 1st of `year`.
pub struct DcaClass {
    pub year: u16,
    pub color: Hue,
    pub stack: ValuePattern,
    pub avg_price: MetricId,
    pub returns: MetricId,
}

pub struct Dca {
    pub periods: Vec<DcaPeriod>,
    pub classes: Vec<DcaClass>,
}

fn annualized(id: &str) -> bool {
    RETURNS
        .iter()
        .any(|(period, annualized)| *annualized && period.id == id)
}

impl Dca {
    pub fn new() -> Self {
        let (first, last) = DCA_CLASS_YEARS;
        Self {
            periods: DCA_PERIODS
                .iter()
                .map(|period| {
                    let stem = |name: &str| MetricId::new(format!("{}_{}", period.id, name));
                    DcaPeriod {
                        period,
                        stack: ValuePattern::new(&stem("dca_stack")),
                        avg_price: stem("dca_avg_price"),
                        returns: stem("dca_returns"),
                        cagr: annualized(period.id).then(|| stem("dca_cagr")),
                        lump_sum_stack: ValuePattern::new(&stem("lump_sum_stack")),
                        lump_sum_returns: stem("lump_sum_returns"),
                    }
                })
                .collect(),
            classes: (first..=last)
                .enumerate()
                .map(|(index, year)| {
                    let stem = |name: &str| MetricId::new(format!("dca_class_{}_{}", year, name));
                    DcaClass {
                        year,
                        color: Hue::Rotating(index),
                        stack: ValuePattern::new(&stem("stack")),
                        avg_price: stem("avg_price"),
                        returns: stem("returns"),
                    }
                })
                .collect(),
        }
    }
}
