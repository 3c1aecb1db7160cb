use std::{
    fs::File,
    io::BufReader,
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicU32, AtomicU64, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use rodio::{
    Decoder, Device, OutputStream, OutputStreamBuilder, Sink, Source,
    cpal::{
        BufferSize, SampleFormat, SampleRate, StreamConfig, default_host,
        traits::{DeviceTrait, HostTrait},
    },
};

use crate::audio::{analyzer::AnalyzedSource, error::AudioError};

/// Seam between the playback state machine and the audio device. Tests
/// swap in a mock that refuses to start.
#[async_trait]
pub trait AudioBackend: Send + Sync {
    fn load(&self, path: &Path) -> Result<(), AudioError>;
    async fn play(&self) -> Result<(), AudioError>;
    fn pause(&self);
    fn is_playing(&self) -> bool;
    fn is_finished(&self) -> bool;
    fn position(&self) -> Duration;
    fn seek(&self, position: Duration) -> Result<(), AudioError>;
    fn set_volume(&self, volume: f32);
    fn volume(&self) -> f32;
    fn amplitude(&self) -> f32;
    fn duration(&self) -> Option<Duration>;
}

pub struct RodioBackend {
    _stream: OutputStream,
    sink: Arc<Sink>,
    amplitude: Arc<AtomicU32>,
    duration_ms: AtomicU64,
}

impl RodioBackend {
    pub fn new() -> Result<Self, AudioError> {
        let (device, config, sample_format) = setup_device_config()?;
        let (stream, sink) = construct_sink(device, &config, sample_format)?;

        Ok(Self {
            _stream: stream,
            sink: Arc::new(sink),
            amplitude: Arc::new(AtomicU32::new(0)),
            duration_ms: AtomicU64::new(0),
        })
    }
}

#[async_trait]
impl AudioBackend for RodioBackend {
    /// Replaces whatever is queued with the song at `path`, paused.
    fn load(&self, path: &Path) -> Result<(), AudioError> {
        let file = File::open(path)
            .map_err(|e| AudioError::SongNotFound(format!("{}: {e}", path.display())))?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| AudioError::DecodingError(e.to_string()))?;

        let total = decoder.total_duration();
        self.duration_ms
            .store(total.map_or(0, |d| d.as_millis() as u64), Ordering::Relaxed);

        let source = AnalyzedSource::new(decoder, Arc::clone(&self.amplitude));

        self.sink.stop();
        self.sink.append(source);
        self.sink.pause();
        Ok(())
    }

    async fn play(&self) -> Result<(), AudioError> {
        self.sink.play();
        Ok(())
    }

    fn pause(&self) {
        self.sink.pause();
    }

    fn is_playing(&self) -> bool {
        !self.sink.is_paused() && !self.sink.empty()
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn seek(&self, position: Duration) -> Result<(), AudioError> {
        self.sink
            .try_seek(position)
            .map_err(|e| AudioError::SeekError(e.to_string()))
    }

    fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume.clamp(0.0, 1.0));
    }

    fn volume(&self) -> f32 {
        self.sink.volume()
    }

    fn amplitude(&self) -> f32 {
        f32::from_bits(self.amplitude.load(Ordering::Relaxed))
    }

    fn duration(&self) -> Option<Duration> {
        match self.duration_ms.load(Ordering::Relaxed) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

fn setup_device_config() -> Result<(Device, StreamConfig, SampleFormat), AudioError> {
    let host = default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| AudioError::DeviceError("no default output device".to_string()))?;

    let (config, sample_format) = if let Ok(configs) = device.supported_output_configs() {
        let best = configs
            .max_by_key(|cfg| cfg.max_sample_rate().0)
            .ok_or_else(|| AudioError::DeviceError("no supported output config".to_string()))?;
        (
            StreamConfig {
                channels: best.channels(),
                sample_rate: best.max_sample_rate(),
                buffer_size: BufferSize::Fixed(4096),
            },
            best.sample_format(),
        )
    } else {
        (
            StreamConfig {
                channels: 2,
                sample_rate: SampleRate(48000),
                buffer_size: BufferSize::Fixed(4096),
            },
            SampleFormat::F32,
        )
    };

    Ok((device, config, sample_format))
}

fn construct_sink(
    device: Device,
    config: &StreamConfig,
    sample_format: SampleFormat,
) -> Result<(OutputStream, Sink), AudioError> {
    let stream = OutputStreamBuilder::default()
        .with_buffer_size(config.buffer_size)
        .with_sample_rate(config.sample_rate.0)
        .with_device(device)
        .with_sample_format(sample_format)
        .open_stream_or_fallback()
        .map_err(|e| AudioError::DeviceError(e.to_string()))?;
    let mixer = stream.mixer();
    let sink = Sink::connect_new(mixer);

    Ok((stream, sink))
}
