// File: crates/leads-dashboard/src/data.rs
// Summary: Fixed weekly lead counts shown by the dashboard.

/// One weekday/count pair, drawn as a single chart point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeadCountSample {
    /// Weekday label as shown on the category axis.
    pub day: &'static str,
    pub lead_count: u32,
}

const fn sample(day: &'static str, lead_count: u32) -> LeadCountSample {
    LeadCountSample { day, lead_count }
}

/// Monday through Sunday, in calendar order.
pub const WEEKLY_LEADS: [LeadCountSample; 7] = [
    sample("Пн", 12),
    sample("Вт", 18),
    sample("Ср", 9),
    sample("Чт", 24),
    sample("Пт", 14),
    sample("Сб", 7),
    sample("Вс", 19),
];
