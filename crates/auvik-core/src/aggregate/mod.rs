// ── Aggregation passes ──
//
// Pure reductions from fetched wire views to report rows. Nothing in here
// performs I/O; `Reporter` fetches and feeds these.

mod alerts;
mod bandwidth;
mod broadcast;
mod health;
mod inventory;
mod series;
mod uptime;

pub use alerts::alert_counts;
pub use bandwidth::{bandwidth_average, best_interface, BandwidthAverages, UTILIZATION_CAP};
pub use broadcast::{broadcast_average, Candidate, TopSelection, BROADCAST_CAP, TOP_CAPACITY};
pub use health::{health_score, stats_per_device, unhealthy_devices, UNHEALTHY_THRESHOLD};
pub use inventory::{inventory_summary, network_rows, offline_rows};
pub use series::{capped_column_mean, column_mean};
pub use uptime::uptime_by_type;

/// Rounds to a fixed number of decimal places for display.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// First character uppercased, the rest lowercased.
pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Display label for a raw `deviceType` value. One camelCase type needs a
/// two-word rewrite; everything else just gets capitalized.
#[must_use]
pub fn display_label(device_type: &str) -> String {
    let label = capitalize(device_type);
    if label == "Accesspoint" {
        "Access Point".to_owned()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_two_and_three_places() {
        assert_eq!(round_to(15.2349, 2), 15.23);
        assert_eq!(round_to(15.2351, 2), 15.24);
        assert_eq!(round_to(99.87654, 3), 99.877);
    }

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("firewall"), "Firewall");
        assert_eq!(capitalize("accessPoint"), "Accesspoint");
        assert_eq!(capitalize("CRITICAL"), "Critical");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn display_label_rewrites_access_points() {
        assert_eq!(display_label("accessPoint"), "Access Point");
        assert_eq!(display_label("router"), "Router");
        assert_eq!(display_label("l3Switch"), "L3switch");
    }
}
