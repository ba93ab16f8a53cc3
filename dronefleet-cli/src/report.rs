//! Plain-text assignment report printed after scheduling.

use std::io::{self, Write};

use dronefleet_core::{AssignmentOutcome, RecordId, Vehicle};

/// Write one block per busy vehicle, then any dropped orders.
pub(crate) fn write_text_report(
    writer: &mut dyn Write,
    vehicles: &[Vehicle],
    outcome: &AssignmentOutcome,
) -> io::Result<()> {
    for vehicle in vehicles.iter().filter(|v| !v.orders().is_empty()) {
        writeln!(writer, "Drone {} Delivery Order:", vehicle.id())?;
        for (position, order_id) in (1_usize..).zip(vehicle.orders()) {
            writeln!(writer, "  {position}. Order {order_id}")?;
        }
        writeln!(
            writer,
            "TOTAL DISTANCE: {}, TRAVEL TIME: {:.1} min",
            vehicle.total_distance(),
            vehicle.travel_time()
        )?;
        writeln!(writer)?;
    }

    if !outcome.is_complete() {
        writeln!(
            writer,
            "Unassigned orders: {}",
            join_ids(&outcome.unassigned)
        )?;
    }
    Ok(())
}

fn join_ids(ids: &[RecordId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
