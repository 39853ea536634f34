// Broadcast ranking: a fixed-capacity selection of the noisiest
// interfaces across a tenant's L2 gear.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::aggregate::series::capped_column_mean;

/// Broadcast-rate samples at or above this are storms or meter glitches.
pub const BROADCAST_CAP: f64 = 1000.0;

/// How many interfaces the top list holds.
pub const TOP_CAPACITY: usize = 10;

/// Mean broadcast packet rate for one interface series, glitch-capped,
/// divided over the full sample count. `None` when the series is empty.
#[must_use]
pub fn broadcast_average(rows: &[Vec<f64>]) -> Option<f64> {
    capped_column_mean(rows, 2, BROADCAST_CAP)
}

/// An interface competing for the top list, with enough identity to
/// resolve names afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub interface_id: String,
    pub interface_name: String,
    /// Id of the owning device, resolved to a name and network later.
    pub parent_device: String,
    pub average: f64,
}

// Heap ordering is by average alone. `total_cmp` gives the total order
// `BinaryHeap` requires even though averages are floats.
#[derive(Debug)]
struct ByAverage(Candidate);

impl PartialEq for ByAverage {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByAverage {}

impl PartialOrd for ByAverage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByAverage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.average.total_cmp(&other.0.average)
    }
}

/// Bounded top-N tracker. Keeps the `capacity` highest averages seen so
/// far in a min-heap, so each offer is O(log capacity) no matter how many
/// interfaces a tenant has.
#[derive(Debug)]
pub struct TopSelection {
    capacity: usize,
    heap: BinaryHeap<Reverse<ByAverage>>,
}

impl TopSelection {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Offers a candidate. Below capacity it is always admitted; at
    /// capacity it evicts the current minimum only when strictly greater,
    /// so earlier candidates win ties.
    pub fn offer(&mut self, candidate: Candidate) {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(ByAverage(candidate)));
            return;
        }
        let beats_minimum = self
            .heap
            .peek()
            .is_some_and(|Reverse(minimum)| candidate.average > minimum.0.average);
        if beats_minimum {
            self.heap.pop();
            self.heap.push(Reverse(ByAverage(candidate)));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consumes the selection, highest average first.
    #[must_use]
    pub fn into_ranked(self) -> Vec<Candidate> {
        let mut ranked: Vec<Candidate> = self
            .heap
            .into_iter()
            .map(|Reverse(item)| item.0)
            .collect();
        ranked.sort_by(|a, b| b.average.total_cmp(&a.average));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidate(id: &str, average: f64) -> Candidate {
        Candidate {
            interface_id: id.to_owned(),
            interface_name: format!("if-{id}"),
            parent_device: "dev1".to_owned(),
            average,
        }
    }

    #[test]
    fn ranks_descending_and_keeps_only_capacity() {
        let mut selection = TopSelection::new(TOP_CAPACITY);
        for n in 0..15 {
            selection.offer(candidate(&n.to_string(), f64::from(n)));
        }
        let ranked = selection.into_ranked();
        assert_eq!(ranked.len(), 10);
        let averages: Vec<f64> = ranked.iter().map(|c| c.average).collect();
        assert_eq!(
            averages,
            vec![14.0, 13.0, 12.0, 11.0, 10.0, 9.0, 8.0, 7.0, 6.0, 5.0]
        );
    }

    #[test]
    fn ties_with_the_minimum_keep_the_incumbent() {
        let mut selection = TopSelection::new(2);
        selection.offer(candidate("a", 5.0));
        selection.offer(candidate("b", 3.0));
        selection.offer(candidate("c", 3.0));
        let ranked = selection.into_ranked();
        assert_eq!(ranked[1].interface_id, "b");
    }

    #[test]
    fn below_capacity_everything_is_admitted() {
        let mut selection = TopSelection::new(10);
        selection.offer(candidate("a", 0.0));
        selection.offer(candidate("b", 0.0));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn broadcast_average_caps_storm_samples() {
        // Column 2 carries the broadcast rate; 1000 is dropped from the
        // sum but stays in the divisor.
        let rows = vec![
            vec![1.0, 0.0, 400.0],
            vec![2.0, 0.0, 1000.0],
            vec![3.0, 0.0, 200.0],
        ];
        assert_eq!(broadcast_average(&rows), Some(200.0));
        assert_eq!(broadcast_average(&[]), None);
    }
}
