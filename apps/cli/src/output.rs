//! Rendering of evaluation results.

use bytesize::bigdecimal::BigDecimal;
use bytesize::{BinaryUnit, Size, Unit, decimal};

use crate::calc::Value;

/// Units listed under the byte count when no unit was requested.
const LISTED_UNITS: [BinaryUnit; 6] = [
    BinaryUnit::KiB,
    BinaryUnit::MiB,
    BinaryUnit::GiB,
    BinaryUnit::TiB,
    BinaryUnit::PiB,
    BinaryUnit::EiB,
];

/// Text printed for `value`, one line per element.
pub fn render(value: &Value, unit: Option<Unit>, places: u32) -> Vec<String> {
    match (value, unit) {
        (Value::Size(size), Some(unit)) => vec![in_unit(size, unit, places)],
        (Value::Size(size), None) => listing(size, places),
        (number, _) => vec![number.to_string()],
    }
}

fn converted(size: &Size, unit: Unit) -> BigDecimal {
    decimal::div(
        &decimal::from_bigint(size.as_bigint()),
        &decimal::from_bigint(&unit.multiplier()),
    )
}

fn in_unit(size: &Size, unit: Unit, places: u32) -> String {
    let value = converted(size, unit);
    if value.is_integer() {
        format!("{} {}", decimal::trunc(&value), unit.name())
    } else {
        format!("{} {}", decimal::to_fixed_string(&value, places, "."), unit.name())
    }
}

/// Byte count followed by every binary unit, right-aligned on the point.
fn listing(size: &Size, places: u32) -> Vec<String> {
    let in_bytes = format!("{} B", size.bytes_str());
    let width = in_bytes.len().saturating_sub(places as usize);
    let mut lines = vec![in_bytes];

    for unit in LISTED_UNITS.map(Unit::Binary) {
        let fixed = decimal::to_fixed_string(&converted(size, unit), places, ".");
        if fixed.trim_start_matches('-').bytes().all(|b| b == b'0' || b == b'.') {
            continue;
        }
        lines.push(format!("{fixed:>width$} {}", unit.name()));
    }
    lines
}
