use crate::error::ConfigError;

/// Arm lengths are divided by this before entering the equations of motion,
/// so on-screen size does not change how fast the pendulum swings.
pub const LENGTH_SCALE: f64 = 100.0;

/// Angles are measured from the downward vertical and are never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PendulumState {
    pub theta1: f64,
    pub omega1: f64,
    pub theta2: f64,
    pub omega2: f64,
}

impl PendulumState {
    pub fn at_rest(theta1: f64, theta2: f64) -> Self {
        Self {
            theta1,
            omega1: 0.0,
            theta2,
            omega2: 0.0,
        }
    }

    fn to_array(self) -> [f64; 4] {
        [self.theta1, self.omega1, self.theta2, self.omega2]
    }

    fn from_array([theta1, omega1, theta2, omega2]: [f64; 4]) -> Self {
        Self {
            theta1,
            omega1,
            theta2,
            omega2,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    gravity: f64,
    length1: f64,
    length2: f64,
    mass1: f64,
    mass2: f64,
    dt: f64,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            length1: 140.0,
            length2: 110.0,
            mass1: 10.0,
            mass2: 8.0,
            dt: 0.018,
        }
    }
}

impl PhysicalParameters {
    pub fn new(
        gravity: f64,
        length1: f64,
        length2: f64,
        mass1: f64,
        mass2: f64,
        dt: f64,
    ) -> Result<Self, ConfigError> {
        if !gravity.is_finite() {
            return Err(ConfigError::NonFiniteGravity(gravity));
        }
        check_length(1, length1)?;
        check_length(2, length2)?;
        for (bob, value) in [(1, mass1), (2, mass2)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveMass { bob, value });
            }
        }
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ConfigError::NonPositiveTimestep(dt));
        }

        Ok(Self {
            gravity,
            length1,
            length2,
            mass1,
            mass2,
            dt,
        })
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn lengths(&self) -> (f64, f64) {
        (self.length1, self.length2)
    }

    pub fn masses(&self) -> (f64, f64) {
        (self.mass1, self.mass2)
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Replaces the arm lengths, keeping everything else.
    pub fn with_lengths(self, length1: f64, length2: f64) -> Result<Self, ConfigError> {
        check_length(1, length1)?;
        check_length(2, length2)?;
        Ok(Self {
            length1,
            length2,
            ..self
        })
    }

    /// Equations of motion for `[θ1, ω1, θ2, ω2]`, returning the time derivative.
    pub fn derivatives(&self, [th1, w1, th2, w2]: [f64; 4]) -> [f64; 4] {
        let (g, m1, m2) = (self.gravity, self.mass1, self.mass2);
        let l1 = self.length1 / LENGTH_SCALE;
        let l2 = self.length2 / LENGTH_SCALE;

        let delta = th2 - th1;
        let (sin_d, cos_d) = delta.sin_cos();
        let denom1 = (m1 + m2) * l1 - m2 * l1 * cos_d * cos_d;
        let denom2 = (l2 / l1) * denom1;

        let dw1 = (m2 * l1 * w1 * w1 * sin_d * cos_d
            + m2 * g * th2.sin() * cos_d
            + m2 * l2 * w2 * w2 * sin_d
            - (m1 + m2) * g * th1.sin())
            / denom1;

        let dw2 = (-m2 * l2 * w2 * w2 * sin_d * cos_d
            + (m1 + m2) * g * th1.sin() * cos_d
            - (m1 + m2) * l1 * w1 * w1 * sin_d
            - (m1 + m2) * g * th2.sin())
            / denom2;

        [w1, dw1, w2, dw2]
    }

    /// One classical fourth order Runge-Kutta step of length `dt`.
    pub fn rk4_step(&self, state: PendulumState) -> PendulumState {
        let dt = self.dt;
        let y = state.to_array();

        let k1 = self.derivatives(y);
        let k2 = self.derivatives(axpy(y, k1, dt / 2.0));
        let k3 = self.derivatives(axpy(y, k2, dt / 2.0));
        let k4 = self.derivatives(axpy(y, k3, dt));

        let mut next = y;
        for (i, v) in next.iter_mut().enumerate() {
            *v += (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]) * dt / 6.0;
        }
        PendulumState::from_array(next)
    }

    /// Total mechanical energy with the pivot at zero height, in scaled units.
    pub fn energy(&self, state: &PendulumState) -> f64 {
        let (g, m1, m2) = (self.gravity, self.mass1, self.mass2);
        let l1 = self.length1 / LENGTH_SCALE;
        let l2 = self.length2 / LENGTH_SCALE;
        let PendulumState {
            theta1,
            omega1,
            theta2,
            omega2,
        } = *state;

        let kinetic = 0.5 * (m1 + m2) * l1 * l1 * omega1 * omega1
            + 0.5 * m2 * l2 * l2 * omega2 * omega2
            + m2 * l1 * l2 * omega1 * omega2 * (theta1 - theta2).cos();
        let potential = -(m1 + m2) * g * l1 * theta1.cos() - m2 * g * l2 * theta2.cos();
        kinetic + potential
    }
}

fn check_length(arm: u8, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveLength { arm, value })
    }
}

fn axpy(y: [f64; 4], k: [f64; 4], s: f64) -> [f64; 4] {
    [
        y[0] + k[0] * s,
        y[1] + k[1] * s,
        y[2] + k[2] * s,
        y[3] + k[3] * s,
    ]
}
