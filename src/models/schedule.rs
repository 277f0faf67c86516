use super::shift::Shift;

/// Planned schedule: number of days and hours per day for each shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub days_a: u32,
    pub hours_a: u32,
    pub days_b: u32,
    pub hours_b: u32,
}

/// One editable field of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleDimension {
    DaysA,
    HoursA,
    DaysB,
    HoursB,
}

impl ScheduleDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleDimension::DaysA => "days-a",
            ScheduleDimension::HoursA => "hours-a",
            ScheduleDimension::DaysB => "days-b",
            ScheduleDimension::HoursB => "hours-b",
        }
    }
}

impl ScheduleConfig {
    pub fn new(days_a: u32, hours_a: u32, days_b: u32, hours_b: u32) -> Self {
        Self {
            days_a,
            hours_a,
            days_b,
            hours_b,
        }
    }

    /// `daysA*hoursA + daysB*hoursB`, the denominator of every pace projection.
    pub fn total_planned_hours(&self) -> u64 {
        self.days_a as u64 * self.hours_a as u64 + self.days_b as u64 * self.hours_b as u64
    }

    pub fn days_for(&self, shift: Shift) -> u32 {
        match shift {
            Shift::First => self.days_a,
            Shift::Second => self.days_b,
        }
    }

    pub fn hours_for(&self, shift: Shift) -> u32 {
        match shift {
            Shift::First => self.hours_a,
            Shift::Second => self.hours_b,
        }
    }

    /// Replace a single dimension, leaving the others untouched.
    pub fn set(&mut self, dim: ScheduleDimension, value: u32) {
        match dim {
            ScheduleDimension::DaysA => self.days_a = value,
            ScheduleDimension::HoursA => self.hours_a = value,
            ScheduleDimension::DaysB => self.days_b = value,
            ScheduleDimension::HoursB => self.hours_b = value,
        }
    }
}
