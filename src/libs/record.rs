//! Battery-charging record model.
//!
//! A [`ChargingRecord`] holds the raw text of every form field, exactly as
//! the operator typed it. The flat serde shape is the payload sent to the
//! record-creation endpoint, so field names follow the service's camelCase
//! keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every field of the charging log form, in schema-declaration order.
///
/// The derived `Ord` follows declaration order, which is also the order in
/// which a blocked submit looks for the field to focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    BatteryId,
    Date,
    ChargingCycle,
    ChargeCurrent,
    BattVoltInitial,
    BattVoltFinal,
    ChargeTimeInitial,
    ChargeTimeFinal,
    Duration,
    Capacity,
    Temperature,
    Deformation,
    Others,
    Uin,
    Name,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::BatteryId,
        Field::Date,
        Field::ChargingCycle,
        Field::ChargeCurrent,
        Field::BattVoltInitial,
        Field::BattVoltFinal,
        Field::ChargeTimeInitial,
        Field::ChargeTimeFinal,
        Field::Duration,
        Field::Capacity,
        Field::Temperature,
        Field::Deformation,
        Field::Others,
        Field::Uin,
        Field::Name,
    ];

    /// Key used in the JSON payload and in configuration.
    pub fn key(&self) -> &'static str {
        match self {
            Field::BatteryId => "id",
            Field::Date => "date",
            Field::ChargingCycle => "chargingCycle",
            Field::ChargeCurrent => "chargeCurrent",
            Field::BattVoltInitial => "battVoltInitial",
            Field::BattVoltFinal => "battVoltFinal",
            Field::ChargeTimeInitial => "chargeTimeInitial",
            Field::ChargeTimeFinal => "chargeTimeFinal",
            Field::Duration => "duration",
            Field::Capacity => "capacity",
            Field::Temperature => "temp",
            Field::Deformation => "deformation",
            Field::Others => "others",
            Field::Uin => "uin",
            Field::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::BatteryId => "Battery ID",
            Field::Date => "Date (YYYY-MM-DD)",
            Field::ChargingCycle => "Charging Cycle",
            Field::ChargeCurrent => "Charge Current (A)",
            Field::BattVoltInitial => "Battery Voltage Initial (V)",
            Field::BattVoltFinal => "Battery Voltage Final (V)",
            Field::ChargeTimeInitial => "Charging Time Initial (hh:mm)",
            Field::ChargeTimeFinal => "Charging Time Final (hh:mm)",
            Field::Duration => "Duration",
            Field::Capacity => "Capacity (mAh)",
            Field::Temperature => "Temperature",
            Field::Deformation => "Deformation",
            Field::Others => "Others (if any)",
            Field::Uin => "UIN of UAS",
            Field::Name => "Responsible Person (Name)",
        }
    }

    /// Fields that may be left blank.
    pub fn is_optional(&self) -> bool {
        matches!(self, Field::Others)
    }

    /// Fields computed from other fields and never typed by the user.
    pub fn is_derived(&self) -> bool {
        matches!(self, Field::Duration)
    }

    /// Allowed values for enumerated fields.
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            Field::Temperature => Some(TEMPERATURE_CHOICES),
            Field::Deformation => Some(DEFORMATION_CHOICES),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .find(|field| field.key() == s)
            .copied()
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

/// Allowed temperature status values.
pub const TEMPERATURE_CHOICES: &[&str] = &["Normal", "Overheat"];

/// Allowed deformation status values.
pub const DEFORMATION_CHOICES: &[&str] = &["Yes", "No"];

/// One battery-charging log entry in its editable, textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChargingRecord {
    #[serde(rename = "id")]
    pub battery_id: String,
    pub date: String,
    pub charging_cycle: String,
    pub charge_current: String,
    pub batt_volt_initial: String,
    pub batt_volt_final: String,
    pub charge_time_initial: String,
    pub charge_time_final: String,
    pub duration: String,
    pub capacity: String,
    #[serde(rename = "temp")]
    pub temperature: String,
    pub deformation: String,
    pub others: String,
    pub uin: String,
    pub name: String,
}

impl ChargingRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::BatteryId => &self.battery_id,
            Field::Date => &self.date,
            Field::ChargingCycle => &self.charging_cycle,
            Field::ChargeCurrent => &self.charge_current,
            Field::BattVoltInitial => &self.batt_volt_initial,
            Field::BattVoltFinal => &self.batt_volt_final,
            Field::ChargeTimeInitial => &self.charge_time_initial,
            Field::ChargeTimeFinal => &self.charge_time_final,
            Field::Duration => &self.duration,
            Field::Capacity => &self.capacity,
            Field::Temperature => &self.temperature,
            Field::Deformation => &self.deformation,
            Field::Others => &self.others,
            Field::Uin => &self.uin,
            Field::Name => &self.name,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::BatteryId => &mut self.battery_id,
            Field::Date => &mut self.date,
            Field::ChargingCycle => &mut self.charging_cycle,
            Field::ChargeCurrent => &mut self.charge_current,
            Field::BattVoltInitial => &mut self.batt_volt_initial,
            Field::BattVoltFinal => &mut self.batt_volt_final,
            Field::ChargeTimeInitial => &mut self.charge_time_initial,
            Field::ChargeTimeFinal => &mut self.charge_time_final,
            Field::Duration => &mut self.duration,
            Field::Capacity => &mut self.capacity,
            Field::Temperature => &mut self.temperature,
            Field::Deformation => &mut self.deformation,
            Field::Others => &mut self.others,
            Field::Uin => &mut self.uin,
            Field::Name => &mut self.name,
        };
        *slot = value.into();
    }

    /// True when no field holds any text.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
