//! Market and investing period tables.
//!
//! Every period-driven list (averages, returns, DCA...) reads from here, so a new
//! period only needs one new row.

use crate::config::palette::Color;

/// A lookback window as named by the backend (`1w`, `200d`...) and by the menu.
pub struct Period {
    pub id: &'static str,
    pub name: &'static str,
    pub color: Color,
}

/// Ratio percentile band (`<price>_ratio_<id>`)
pub struct BandDef {
    pub id: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Z-score window (`<price>_ratio_<id>_zscore`, empty id for the full history)
pub struct WindowDef {
    pub id: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const RATIO_BANDS: &[BandDef] = &[
    BandDef { id: "pct99", label: "99th Percentile", color: Color::Red },
    BandDef { id: "pct98", label: "98th Percentile", color: Color::Orange },
    BandDef { id: "pct95", label: "95th Percentile", color: Color::Amber },
    BandDef { id: "pct5", label: "5th Percentile", color: Color::Cyan },
    BandDef { id: "pct2", label: "2nd Percentile", color: Color::Blue },
    BandDef { id: "pct1", label: "1st Percentile", color: Color::Indigo },
];

pub const ZSCORE_WINDOWS: &[WindowDef] = &[
    WindowDef { id: "", label: "All Time", color: Color::Default },
    WindowDef { id: "4y", label: "4 Year", color: Color::Orange },
    WindowDef { id: "1y", label: "1 Year", color: Color::Cyan },
];

/// Standard deviation levels drawn as guides on z-score charts
pub const ZSCORE_LEVELS: &[f64] = &[3.0, 2.0, 1.0, -1.0, -2.0, -3.0];

pub const AVERAGES: &[Period] = &[
    Period { id: "1w", name: "1 Week", color: Color::Red },
    Period { id: "8d", name: "8 Days", color: Color::Orange },
    Period { id: "13d", name: "13 Days", color: Color::Amber },
    Period { id: "21d", name: "21 Days", color: Color::Yellow },
    Period { id: "1m", name: "1 Month", color: Color::Lime },
    Period { id: "34d", name: "34 Days", color: Color::Green },
    Period { id: "55d", name: "55 Days", color: Color::Emerald },
    Period { id: "89d", name: "89 Days", color: Color::Teal },
    Period { id: "144d", name: "144 Days", color: Color::Cyan },
    Period { id: "200d", name: "200 Days", color: Color::Sky },
    Period { id: "1y", name: "1 Year", color: Color::Blue },
    Period { id: "2y", name: "2 Years", color: Color::Indigo },
    Period { id: "200w", name: "200 Weeks", color: Color::Violet },
    Period { id: "4y", name: "4 Years", color: Color::Purple },
];

/// Periods whose returns are also annualized (CAGR); shorter ones are not.
pub const RETURNS: &[(Period, bool)] = &[
    (Period { id: "1d", name: "1 Day", color: Color::Red }, false),
    (Period { id: "1w", name: "1 Week", color: Color::Orange }, false),
    (Period { id: "1m", name: "1 Month", color: Color::Amber }, false),
    (Period { id: "3m", name: "3 Months", color: Color::Yellow }, false),
    (Period { id: "6m", name: "6 Months", color: Color::Lime }, false),
    (Period { id: "1y", name: "1 Year", color: Color::Green }, false),
    (Period { id: "2y", name: "2 Years", color: Color::Teal }, true),
    (Period { id: "3y", name: "3 Years", color: Color::Cyan }, true),
    (Period { id: "4y", name: "4 Years", color: Color::Sky }, true),
    (Period { id: "5y", name: "5 Years", color: Color::Blue }, true),
    (Period { id: "6y", name: "6 Years", color: Color::Indigo }, true),
    (Period { id: "8y", name: "8 Years", color: Color::Violet }, true),
    (Period { id: "10y", name: "10 Years", color: Color::Purple }, true),
];

pub const VOLATILITY: &[Period] = &[
    Period { id: "1w", name: "1 Week", color: Color::Red },
    Period { id: "1m", name: "1 Month", color: Color::Orange },
    Period { id: "1y", name: "1 Year", color: Color::Lime },
];

pub const RANGES: &[Period] = &[
    Period { id: "1w", name: "1 Week", color: Color::Orange },
    Period { id: "2w", name: "2 Weeks", color: Color::Yellow },
    Period { id: "1m", name: "1 Month", color: Color::Green },
    Period { id: "1y", name: "1 Year", color: Color::Cyan },
];

pub const DCA_PERIODS: &[Period] = &[
    Period { id: "1w", name: "1 Week", color: Color::Red },
    Period { id: "1m", name: "1 Month", color: Color::Orange },
    Period { id: "3m", name: "3 Months", color: Color::Yellow },
    Period { id: "6m", name: "6 Months", color: Color::Lime },
    Period { id: "1y", name: "1 Year", color: Color::Green },
    Period { id: "2y", name: "2 Years", color: Color::Teal },
    Period { id: "3y", name: "3 Years", color: Color::Cyan },
    Period { id: "4y", name: "4 Years", color: Color::Sky },
    Period { id: "5y", name: "5 Years", color: Color::Blue },
    Period { id: "6y", name: "6 Years", color: Color::Indigo },
    Period { id: "8y", name: "8 Years", color: Color::Violet },
    Period { id: "10y", name: "10 Years", color: Color::Purple },
];

/// First and last year a DCA class (stack started on Jan 1st of that year) exists for
pub const DCA_CLASS_YEARS: (u16, u16) = (2015, 2025);

/// Pi Cycle: 111 day SMA against twice the 350 day SMA
pub const PI_CYCLE_SHORT: &str = "111d";
pub const PI_CYCLE_LONG: &str = "350d";

/// Mayer Multiple is the price over its 200 day SMA
pub const MAYER_PERIOD: &str = "200d";

/// Oscillator guide levels
pub const RSI_BOUNDS: (f64, f64) = (30.0, 70.0);
pub const STOCH_RSI_BOUNDS: (f64, f64) = (20.0, 80.0);
