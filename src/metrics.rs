use crate::data::ResultRow;
use std::fmt;

/// Measurements plotted against the number of computing nodes. The
/// `Display` implementation yields the CSV column the values come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Metric {
    TimingCost,
    BandwidthUsageMsg,
    BandwidthUsageByte,
    ComplTimeDiff,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::TimingCost => write!(f, "TimingCost"),
            Metric::BandwidthUsageMsg => write!(f, "BandwidthUsage_Msg"),
            Metric::BandwidthUsageByte => write!(f, "BandwidthUsage_Byte"),
            Metric::ComplTimeDiff => write!(f, "ComplTimeDiff"),
        }
    }
}

impl Metric {
    /// Charts are rendered in this order.
    pub fn iter_variants() -> std::slice::Iter<'static, Metric> {
        static VARIANTS: [Metric; 4] = [
            Metric::TimingCost,
            Metric::BandwidthUsageMsg,
            Metric::BandwidthUsageByte,
            Metric::ComplTimeDiff,
        ];
        VARIANTS.iter()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::TimingCost => "Timing Cost",
            Metric::BandwidthUsageMsg => "Bandwidth Usage (Message Based)",
            Metric::BandwidthUsageByte => "Bandwidth Usage",
            Metric::ComplTimeDiff => "Completion Time Variation",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::TimingCost => "Timing Cost (Ticks)",
            Metric::BandwidthUsageMsg => "Bandwidth Usage (Messages)",
            Metric::BandwidthUsageByte => "Bandwidth Usage (Bytes)",
            Metric::ComplTimeDiff => "Max. Completion Time Difference (Ticks)",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{self}.png")
    }

    pub fn value(&self, row: &ResultRow) -> f64 {
        match self {
            Metric::TimingCost => row.timing_cost,
            Metric::BandwidthUsageMsg => row.bandwidth_usage_msg,
            Metric::BandwidthUsageByte => row.bandwidth_usage_byte,
            Metric::ComplTimeDiff => row.compl_time_diff,
        }
    }
}
