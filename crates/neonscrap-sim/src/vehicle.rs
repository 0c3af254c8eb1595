/// Progress tolerance so a whole number of fixed-size steps lands on 1.0.
const COMPLETE_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionDirection {
    Enter,
    Exit,
}

/// An in-flight transform between biped and vehicle forms. There is no
/// cancel path: once started it always runs to completion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleTransition {
    pub direction: TransitionDirection,
    pub progress: f32,
}

impl VehicleTransition {
    pub fn start(direction: TransitionDirection) -> Self {
        Self {
            direction,
            progress: 0.0,
        }
    }

    /// Advance by `rate * dt`; true once the transform has finished.
    pub fn advance(&mut self, dt: f32, rate: f32) -> bool {
        self.progress = (self.progress + rate * dt).min(1.0);
        self.progress + COMPLETE_EPSILON >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_unit_steps_complete() {
        let mut t = VehicleTransition::start(TransitionDirection::Enter);
        for i in 0..19 {
            assert!(!t.advance(1.0, 0.05), "finished early at {i}");
        }
        assert!(t.advance(1.0, 0.05));
    }

    #[test]
    fn large_steps_finish_sooner() {
        let mut t = VehicleTransition::start(TransitionDirection::Exit);
        for _ in 0..9 {
            assert!(!t.advance(2.0, 0.05));
        }
        assert!(t.advance(2.0, 0.05));
        assert_eq!(t.progress, 1.0);
    }
}
