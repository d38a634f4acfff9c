use std::f64::consts::TAU;

use crate::foundation::error::{FolioError, FolioResult};

/// Parameters of one two-lobe "heartbeat" waveform.
///
/// Each lobe is a Gaussian-like bump `exp(-k * sin(2π f t - φ)^2)`; the two lobes share the
/// frequency and differ in sharpness and phase.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveformParams {
    /// Peak added height of each lobe.
    pub amplitude: f64,
    /// Beats per second. Period is `1 / freq_hz`.
    pub freq_hz: f64,
    /// Sharpness of the first lobe.
    pub sharpness_1: f64,
    /// Sharpness of the second lobe.
    pub sharpness_2: f64,
    /// Phase of the first lobe, in radians.
    pub phase_1: f64,
    /// Phase of the second lobe, in radians.
    pub phase_2: f64,
}

impl Default for WaveformParams {
    fn default() -> Self {
        Self {
            amplitude: 0.08,
            freq_hz: 1.2,
            sharpness_1: 20.0,
            sharpness_2: 30.0,
            phase_1: 0.0,
            phase_2: 0.6,
        }
    }
}

impl WaveformParams {
    /// Reject parameters that would break the `[1, 1 + 2A]` range or the period.
    pub fn validate(&self) -> FolioResult<()> {
        let all = [
            self.amplitude,
            self.freq_hz,
            self.sharpness_1,
            self.sharpness_2,
            self.phase_1,
            self.phase_2,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(FolioError::validation("waveform parameters must be finite"));
        }
        if self.amplitude < 0.0 {
            return Err(FolioError::validation("waveform amplitude must be >= 0"));
        }
        if self.freq_hz <= 0.0 {
            return Err(FolioError::validation("waveform freq_hz must be > 0"));
        }
        if self.sharpness_1 < 0.0 || self.sharpness_2 < 0.0 {
            return Err(FolioError::validation("waveform sharpness must be >= 0"));
        }
        Ok(())
    }

    /// Length of one beat in seconds.
    pub fn period_secs(&self) -> f64 {
        1.0 / self.freq_hz
    }
}

/// Heartbeat scale at `t` seconds: `1 + A * (bump1 + bump2)`.
pub fn heartbeat_scale(t: f64, params: &WaveformParams) -> f64 {
    let w = TAU * params.freq_hz * t;
    let s1 = (w - params.phase_1).sin();
    let s2 = (w - params.phase_2).sin();
    let bump1 = (-params.sharpness_1 * s1 * s1).exp();
    let bump2 = (-params.sharpness_2 * s2 * s2).exp();
    1.0 + params.amplitude * (bump1 + bump2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/waveform.rs"]
mod tests;
