use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};
use std::time::Duration;

use rodio::Source;

/// Samples per RMS window.
const WINDOW: usize = 1024;
/// Exponential smoothing weight for the previous level.
const SMOOTHING: f32 = 0.8;

/// Passes the inner source through untouched while publishing a smoothed
/// RMS level into an atomic, so the spectrum view can read it without
/// touching the audio thread.
pub struct AnalyzedSource<T> {
    inner: T,
    sum_squares: f32,
    count: usize,
    amplitude: Arc<AtomicU32>,
}

impl<T> AnalyzedSource<T>
where
    T: Source<Item = f32> + Send + 'static,
{
    pub fn new(inner: T, amplitude: Arc<AtomicU32>) -> Self {
        Self {
            inner,
            sum_squares: 0.0,
            count: 0,
            amplitude,
        }
    }

    fn publish_window(&mut self) {
        let rms = (self.sum_squares / WINDOW as f32).sqrt();
        let previous = f32::from_bits(self.amplitude.load(Ordering::Relaxed));
        let level = previous * SMOOTHING + rms * (1.0 - SMOOTHING);
        self.amplitude.store(level.to_bits(), Ordering::Relaxed);

        self.sum_squares = 0.0;
        self.count = 0;
    }
}

impl<T> Iterator for AnalyzedSource<T>
where
    T: Source<Item = f32> + Send + 'static,
{
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let sample = self.inner.next()?;
        self.sum_squares += sample * sample;
        self.count += 1;
        if self.count >= WINDOW {
            self.publish_window();
        }
        Some(sample)
    }
}

impl<T> Source for AnalyzedSource<T>
where
    T: Source<Item = f32> + Send + 'static,
{
    fn current_span_len(&self) -> Option<usize> {
        self.inner.current_span_len()
    }

    fn channels(&self) -> u16 {
        self.inner.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.inner.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.inner.total_duration()
    }

    fn try_seek(&mut self, pos: Duration) -> Result<(), rodio::source::SeekError> {
        self.inner.try_seek(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rodio::buffer::SamplesBuffer;

    #[test]
    fn level_rises_on_a_loud_signal() {
        let amplitude = Arc::new(AtomicU32::new(0));
        let source = SamplesBuffer::new(1, 48000, vec![0.5f32; WINDOW * 4]);
        let analyzed = AnalyzedSource::new(source, Arc::clone(&amplitude));

        let passed: Vec<f32> = analyzed.collect();
        assert_eq!(passed.len(), WINDOW * 4);
        assert!(passed.iter().all(|&s| s == 0.5));

        let level = f32::from_bits(amplitude.load(Ordering::Relaxed));
        assert!(level > 0.1 && level <= 0.5);
    }

    #[test]
    fn silence_keeps_the_level_at_zero() {
        let amplitude = Arc::new(AtomicU32::new(0));
        let source = SamplesBuffer::new(1, 48000, vec![0.0f32; WINDOW * 2]);
        let analyzed = AnalyzedSource::new(source, Arc::clone(&amplitude));

        let _ = analyzed.count();
        assert_eq!(f32::from_bits(amplitude.load(Ordering::Relaxed)), 0.0);
    }
}
