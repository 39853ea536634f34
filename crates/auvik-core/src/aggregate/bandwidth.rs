// Bandwidth reductions: per-device throughput averages and the busiest
// interface behind each device.

use auvik_api::types::InterfaceStatEntity;

use crate::aggregate::series::{capped_column_mean, column_mean};

/// Utilization samples at or above this are meter glitches, not traffic.
pub const UTILIZATION_CAP: f64 = 200.0;

const BYTES_PER_MEGABYTE: f64 = 1_000_000.0;

/// Mean throughput for one device over the window, in MB.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandwidthAverages {
    pub tx: f64,
    pub rx: f64,
    pub total: f64,
}

/// Averages the transmit, receive, and total columns of a bandwidth
/// series and scales bytes to megabytes. An empty series averages to
/// zero across the board.
#[must_use]
pub fn bandwidth_average(rows: &[Vec<f64>]) -> BandwidthAverages {
    BandwidthAverages {
        tx: column_mean(rows, 1).unwrap_or(0.0) / BYTES_PER_MEGABYTE,
        rx: column_mean(rows, 2).unwrap_or(0.0) / BYTES_PER_MEGABYTE,
        total: column_mean(rows, 3).unwrap_or(0.0) / BYTES_PER_MEGABYTE,
    }
}

/// Picks the interface with the highest capped utilization mean. Ties
/// keep the earlier interface; no usable series at all yields
/// `("NA", 0.0)`.
#[must_use]
pub fn best_interface(interfaces: &[InterfaceStatEntity]) -> (String, f64) {
    let mut name = "NA".to_owned();
    let mut best = 0.0_f64;
    for interface in interfaces {
        let Some(average) = capped_column_mean(interface.samples(), 1, UTILIZATION_CAP) else {
            continue;
        };
        if average > best {
            name = interface.interface().interface_name.clone();
            best = average;
        }
    }
    (name, best)
}
