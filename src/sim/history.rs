use std::collections::VecDeque;
use crate::sim::snapshot::VitalSample;
/// The metrics the dashboard charts. Blood pressure and temperature are
/// shown as current values only and keep no history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackedMetric {
    HeartRate,
    SpO2,
    MeanArterialPressure,
}
impl TrackedMetric {
    pub fn label(self) -> &'static str {
        match self {
            TrackedMetric::HeartRate => "heart_rate",
            TrackedMetric::SpO2 => "spo2",
            TrackedMetric::MeanArterialPressure => "map",
        }
    }
}
/// Rolling buffer holding the most recent samples of one metric.
/// Invariant: `len <= capacity`, restored right after every push.
#[derive(Clone, Debug)]
pub struct HistoryBuffer {
    samples: VecDeque<VitalSample>,
    capacity: usize,
}
impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    pub fn push(&mut self, sample: VitalSample) {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }
    /// Read-only copy of the buffer in insertion order.
    pub fn snapshot(&self) -> Vec<VitalSample> {
        self.samples.iter().copied().collect()
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
/// One buffer per tracked metric, all sharing the same capacity.
#[derive(Clone, Debug)]
pub struct HistoryStore {
    heart_rate: HistoryBuffer,
    spo2: HistoryBuffer,
    mean_arterial: HistoryBuffer,
}
impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            heart_rate: HistoryBuffer::new(capacity),
            spo2: HistoryBuffer::new(capacity),
            mean_arterial: HistoryBuffer::new(capacity),
        }
    }
    pub fn append(&mut self, metric: TrackedMetric, sample: VitalSample) {
        self.buffer_mut(metric).push(sample);
    }
    pub fn snapshot(&self, metric: TrackedMetric) -> Vec<VitalSample> {
        self.buffer(metric).snapshot()
    }
    pub fn buffer(&self, metric: TrackedMetric) -> &HistoryBuffer {
        match metric {
            TrackedMetric::HeartRate => &self.heart_rate,
            TrackedMetric::SpO2 => &self.spo2,
            TrackedMetric::MeanArterialPressure => &self.mean_arterial,
        }
    }
    fn buffer_mut(&mut self, metric: TrackedMetric) -> &mut HistoryBuffer {
        match metric {
            TrackedMetric::HeartRate => &mut self.heart_rate,
            TrackedMetric::SpO2 => &mut self.spo2,
            TrackedMetric::MeanArterialPressure => &mut self.mean_arterial,
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn sample(i: usize) -> VitalSample {
        VitalSample {
            time: i as f64,
            value: i as f64 * 10.0,
        }
    }
    #[test]
    fn never_exceeds_capacity() {
        let mut buffer = HistoryBuffer::new(20);
        for i in 0..100 {
            buffer.push(sample(i));
            assert!(buffer.len() <= 20);
        }
        assert_eq!(buffer.len(), 20);
    }
    #[test]
    fn evicts_strictly_oldest_first() {
        let mut buffer = HistoryBuffer::new(20);
        for i in 0..25 {
            buffer.push(sample(i));
        }
        let kept = buffer.snapshot();
        assert_eq!(kept.len(), 20);
        // entries 0..5 are gone, 5..25 survive in original order
        for (slot, entry) in kept.iter().enumerate() {
            assert_eq!(entry.time, (slot + 5) as f64);
        }
    }
    #[test]
    fn snapshot_does_not_drain_the_buffer() {
        let mut buffer = HistoryBuffer::new(4);
        buffer.push(sample(1));
        let first = buffer.snapshot();
        let second = buffer.snapshot();
        assert_eq!(first, second);
        assert_eq!(buffer.len(), 1);
    }
    #[test]
    fn store_keeps_metrics_independent() {
        let mut store = HistoryStore::new(20);
        store.append(TrackedMetric::HeartRate, sample(1));
        store.append(TrackedMetric::HeartRate, sample(2));
        store.append(TrackedMetric::SpO2, sample(3));
        assert_eq!(store.buffer(TrackedMetric::HeartRate).len(), 2);
        assert_eq!(store.buffer(TrackedMetric::SpO2).len(), 1);
        assert!(store.buffer(TrackedMetric::MeanArterialPressure).is_empty());
    }
}
