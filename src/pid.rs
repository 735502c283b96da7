//! Discrete-time PID control.
//!
//! The controller implements the textbook parallel form with the derivative
//! taken on the measurement rather than on the error. Differentiating the
//! measurement avoids the output spike a setpoint step would otherwise
//! produce, at the cost of flipping the sign of the term: a rising
//! measurement pushes the output down.

use num_traits::float::FloatCore;

/// A single-loop PID controller sampled at a fixed period.
///
/// One instance is owned by one control loop and updated once per sampling
/// period via [`compute`](Self::compute). The gains and the period are fixed
/// at construction; only the integrator and the derivative history mutate
/// between calls.
#[derive(Debug, Clone)]
pub struct PidController<T> {
    k_p: T,
    k_i: T,
    k_d: T,
    dt: T,
    integral: T,
    prev_process_value: T,
    // Updated every call but never read back.
    #[allow(dead_code)]
    prev_error: T,
}

impl<T: FloatCore> PidController<T> {
    /// Creates a controller with the given gains and sampling period.
    ///
    /// The parameters are stored verbatim; no validation is performed. Zero
    /// and negative gains are valid tuning choices. A zero `dt` is accepted
    /// here but makes the derivative term in [`compute`](Self::compute)
    /// divide by zero.
    pub fn new(k_p: T, k_i: T, k_d: T, dt: T) -> Self {
        Self {
            k_p,
            k_i,
            k_d,
            dt,
            integral: T::zero(),
            prev_process_value: T::zero(),
            prev_error: T::zero(),
        }
    }

    /// Performs one control update and returns the raw controller output.
    ///
    /// The output is the sum of the proportional term `k_p * error`, the
    /// accumulated integral term, and the (subtracted) measurement
    /// derivative term `k_d * (process_value - previous) / dt`. No clamping
    /// or filtering is applied; interpreting and limiting the output is the
    /// caller's job.
    ///
    /// Must be called once per `dt` of real time for the integral and
    /// derivative terms to be meaningful. The controller does not check
    /// elapsed time itself.
    pub fn compute(&mut self, setpoint: T, process_value: T) -> T {
        let error = setpoint - process_value;

        let p_term = self.k_p * error;

        self.integral = self.integral + self.k_i * error * self.dt;
        let i_term = self.integral;

        let d_term = self.k_d * (process_value - self.prev_process_value) / self.dt;

        let output = p_term + i_term - d_term;

        self.prev_error = error;
        self.prev_process_value = process_value;

        output
    }

    /// Clears the integrator and the derivative history, keeping the gains.
    ///
    /// Use when resuming control after a pause or a mode switch, so stale
    /// accumulated state does not bleed into the new trajectory.
    pub fn reset(&mut self) {
        self.integral = T::zero();
        self.prev_process_value = T::zero();
        self.prev_error = T::zero();
    }
}
