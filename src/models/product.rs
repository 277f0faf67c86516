use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A tracked product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDefinition {
    pub id: String,
    pub name: String,
    pub planned_target_per_hour: f64,

    /// Replaces the schedule-derived total demand when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_total_demand: Option<f64>,

    /// Output credited outside the hourly log. Counts toward `completed`,
    /// never toward pace or trend averages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_production: Option<f64>,
}

impl ProductDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, planned_target_per_hour: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            planned_target_per_hour,
            manual_total_demand: None,
            extra_production: None,
        }
    }

    pub fn with_manual_demand(mut self, demand: f64) -> Self {
        self.manual_total_demand = Some(demand);
        self
    }

    pub fn with_extra_production(mut self, extra: f64) -> Self {
        self.extra_production = Some(extra);
        self
    }

    pub fn is_manual_demand(&self) -> bool {
        self.manual_total_demand.is_some()
    }

    pub fn extra(&self) -> f64 {
        self.extra_production.unwrap_or(0.0)
    }

    /// Manual override if present, otherwise `total_planned_hours * target`.
    pub fn total_demand(&self, total_planned_hours: u64) -> f64 {
        match self.manual_total_demand {
            Some(d) => d,
            None => total_planned_hours as f64 * self.planned_target_per_hour,
        }
    }

    /// Parse a `NAME:TARGET` definition coming from the setup form.
    /// The id is assigned by the caller.
    pub fn parse_spec(id: String, spec: &str) -> AppResult<Self> {
        let (name, target) = spec
            .rsplit_once(':')
            .ok_or_else(|| AppError::InvalidProductSpec(format!("'{spec}' (expected NAME:TARGET)")))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidProductSpec(format!("'{spec}' has an empty name")));
        }

        let target = parse_non_negative(target)
            .ok_or_else(|| AppError::InvalidProductSpec(format!("'{spec}' has an invalid target")))?;

        Ok(Self::new(id, name, target))
    }
}

/// Non-negative finite number, as accepted by the setup and adjustment forms.
pub fn parse_non_negative(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| is_valid_amount(*v))
}

pub fn is_valid_amount(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
