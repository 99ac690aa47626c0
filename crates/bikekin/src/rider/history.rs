/// One point of the knee/hip time series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSample {
    pub crank_deg: f64,
    pub knee_deg: f64,
    pub hip_deg: f64,
}

/// Append-only `(crank, knee, hip)` series for one rider.
#[derive(Clone, Debug, Default)]
pub struct AngleHistory {
    samples: Vec<AngleSample>,
}

impl AngleHistory {
    /// Primary crank revolution kept for plotting.
    pub const RANGE_DEG: std::ops::RangeInclusive<f64> = 0.0..=360.0;

    /// Record `sample` if its crank angle lies in `RANGE_DEG`; returns whether it was kept.
    pub fn record(&mut self, sample: AngleSample) -> bool {
        if Self::RANGE_DEG.contains(&sample.crank_deg) {
            self.samples.push(sample);
            true
        } else {
            false
        }
    }

    pub fn samples(&self) -> &[AngleSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// `(min, max)` knee angle, `None` when empty.
    pub fn knee_range(&self) -> Option<(f64, f64)> {
        min_max(self.samples.iter().map(|s| s.knee_deg))
    }

    pub fn hip_range(&self) -> Option<(f64, f64)> {
        min_max(self.samples.iter().map(|s| s.hip_deg))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
