//! Spawn cue: a short synthesized "blip" encoded as 16-bit mono PCM WAV so the demo has a
//! sound without shipping an audio file.
use std::f32::consts::TAU;
use std::io::Cursor;

use bevy::prelude::*;

pub const CUE_SAMPLE_RATE: u32 = 22_050;
pub const CUE_SECS: f32 = 0.12;

/// Sine sweep from `freq_start` to `freq_end` Hz with an exponential decay envelope.
pub fn blip_samples(sample_rate: u32, secs: f32, freq_start: f32, freq_end: f32) -> Vec<i16> {
    let n = (sample_rate as f32 * secs).round() as usize;
    let mut phase = 0.0f32;
    (0..n)
        .map(|i| {
            let t = i as f32 / n.max(1) as f32;
            let freq = freq_start + (freq_end - freq_start) * t;
            phase = (phase + TAU * freq / sample_rate as f32) % TAU;
            let env = (-5.0 * t).exp() * (1.0 - t);
            (phase.sin() * env * i16::MAX as f32 * 0.8) as i16
        })
        .collect()
}

/// Write mono 16-bit samples out as an in-memory WAV file.
pub fn encode_wav(sample_rate: u32, samples: &[i16]) -> Result<Vec<u8>, hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
    for &s in samples {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    Ok(cursor.into_inner())
}

pub fn spawn_cue_source() -> Result<AudioSource, hound::Error> {
    let samples = blip_samples(CUE_SAMPLE_RATE, CUE_SECS, 880.0, 1320.0);
    Ok(AudioSource {
        bytes: encode_wav(CUE_SAMPLE_RATE, &samples)?.into(),
    })
}
