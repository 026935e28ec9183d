//! Damped spring used for card resizing and strip movement.
//!
//! Parameterised the way UI toolkits usually expose springs: `response`
//! is the period of the undamped oscillation in seconds and
//! `damping_fraction` is the ratio to critical damping (1.0 means no
//! overshoot).

use crate::carousel::constants::Constants;
use std::f32::consts::TAU;

const MAX_STEP_SECS: f32 = 1.0 / 120.0;
const REST_DISTANCE: f32 = 0.5;
const REST_VELOCITY: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    pub fn new(value: f32, response: f32, damping_fraction: f32) -> Self {
        let omega = TAU / response.max(f32::EPSILON);
        Self {
            value,
            velocity: 0.0,
            target: value,
            stiffness: omega * omega,
            damping: 2.0 * damping_fraction * omega,
        }
    }

    /// The spring carousel transitions use.
    pub fn carousel(value: f32) -> Self {
        Self::new(
            value,
            Constants::SPRING_RESPONSE,
            Constants::SPRING_DAMPING_FRACTION,
        )
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` with no motion left.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Integrate `dt` seconds. Returns `true` while still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.is_settled() {
            return false;
        }
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let displacement = self.value - self.target;
            let accel = -self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if (self.value - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY {
            self.snap_to(self.target);
            return false;
        }
        true
    }
}
