/// Returns `count` evenly spaced samples over `[start, stop]`.
///
/// Both endpoints are included: the first sample is exactly `start` and, when
/// `count > 1`, the last is exactly `stop`. A single sample is `start`.
#[must_use]
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut samples: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            samples[0] = start;
            samples[count - 1] = stop;
            samples
        }
    }
}
