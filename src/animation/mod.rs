pub(crate) mod circles;
pub(crate) mod curtain;
pub(crate) mod ease;
pub(crate) mod follower;
pub(crate) mod noise;
pub(crate) mod polygon;
pub(crate) mod tween;
pub(crate) mod waveform;
