/// Converts host timestamps into a frame-normalized `dt` (1.0 = one
/// reference frame), clamped so a stall never produces a huge step.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last_ms: Option<f64>,
    frame_ms: f64,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(frame_ms: f64, max_dt: f32) -> Self {
        Self {
            last_ms: None,
            frame_ms: frame_ms.max(1e-3),
            max_dt: max_dt.max(0.0),
        }
    }

    pub fn set_limits(&mut self, frame_ms: f64, max_dt: f32) {
        self.frame_ms = frame_ms.max(1e-3);
        self.max_dt = max_dt.max(0.0);
    }

    /// First tick yields 1.0; timestamps going backwards yield 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / self.frame_ms) as f32,
            None => 1.0,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, self.max_dt)
    }
}
