// Alert rollup: open alerts bucketed by severity.

use auvik_api::types::AlertEntity;
use indexmap::IndexMap;

use crate::aggregate::capitalize;

/// Severity buckets in report order. Every bucket always appears, zero or
/// not, so tables line up across tenants.
const SEVERITY_ORDER: [&str; 6] = [
    "Emergency",
    "Critical",
    "Warning",
    "Info",
    "Paused",
    "Unknown",
];

/// Counts alerts per severity. A severity the wire invents lands in
/// `Unknown`; paused alerts additionally bump the `Paused` bucket on top
/// of their severity. No alerts at all collapses to the `"No Devices"`
/// placeholder the templates expect.
#[must_use]
pub fn alert_counts(alerts: &[AlertEntity]) -> IndexMap<String, u32> {
    if alerts.is_empty() {
        let mut counts = IndexMap::new();
        counts.insert("No Devices".to_owned(), 0);
        return counts;
    }

    let mut counts: IndexMap<String, u32> = SEVERITY_ORDER
        .iter()
        .map(|severity| ((*severity).to_owned(), 0))
        .collect();
    for alert in alerts {
        let severity = capitalize(&alert.attributes.severity);
        let bucket = if counts.contains_key(severity.as_str()) {
            severity.as_str()
        } else {
            "Unknown"
        };
        if let Some(count) = counts.get_mut(bucket) {
            *count += 1;
        }
        if alert.attributes.status.eq_ignore_ascii_case("paused") {
            if let Some(paused) = counts.get_mut("Paused") {
                *paused += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use auvik_api::types::{AlertAttributes, AlertEntity};
    use pretty_assertions::assert_eq;

    fn alert(severity: &str, status: &str) -> AlertEntity {
        AlertEntity {
            id: "a1".into(),
            attributes: AlertAttributes {
                severity: severity.to_owned(),
                status: status.to_owned(),
            },
        }
    }

    #[test]
    fn counts_by_severity_and_paused_status() {
        let alerts = vec![
            alert("critical", "active"),
            alert("critical", "paused"),
            alert("warning", "paused"),
        ];
        let counts = alert_counts(&alerts);
        assert_eq!(counts["Critical"], 2);
        assert_eq!(counts["Warning"], 1);
        // Paused counts on top of the severity buckets.
        assert_eq!(counts["Paused"], 2);
        assert_eq!(counts["Emergency"], 0);
    }

    #[test]
    fn empty_input_collapses_to_placeholder() {
        let counts = alert_counts(&[]);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["No Devices"], 0);
    }

    #[test]
    fn unexpected_severity_lands_in_unknown() {
        let alerts = vec![alert("catastrophic", "active")];
        let counts = alert_counts(&alerts);
        assert_eq!(counts["Unknown"], 1);
    }

    #[test]
    fn buckets_keep_report_order() {
        let counts = alert_counts(&[alert("info", "active")]);
        assert_eq!(
            counts.keys().collect::<Vec<_>>(),
            vec!["Emergency", "Critical", "Warning", "Info", "Paused", "Unknown"]
        );
    }
}
