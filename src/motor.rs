//! Second-order state-space model of a brushed DC motor.
//!
//! The electrical dynamics of the winding are coupled to the mechanical
//! dynamics of the rotor. The state vector is `[angular velocity (rad/s),
//! winding current (A)]` and the input is the terminal voltage.

use num_traits::float::FloatCore;

use crate::ode;

/// Physical parameters of a brushed DC motor.
#[derive(Debug, Clone)]
pub struct DcMotor<T> {
    /// Rotor inertia (kg m^2).
    pub inertia: T,
    /// Viscous damping coefficient (N m s).
    pub damping: T,
    /// Torque constant (N m / A).
    pub torque_constant: T,
    /// Back-EMF constant (V s / rad).
    pub back_emf_constant: T,
    /// Winding resistance (ohm).
    pub resistance: T,
    /// Winding inductance (H).
    pub inductance: T,
}

impl<T: FloatCore> DcMotor<T> {
    /// State derivatives at `state` for a given terminal voltage.
    ///
    /// `d omega/dt = (Kt i - b omega) / J` and
    /// `di/dt = (u - R i - Ke omega) / L`.
    pub fn derivatives(&self, state: &[T; 2], voltage: T) -> [T; 2] {
        let [velocity, current] = *state;

        let velocity_dot =
            (self.torque_constant * current - self.damping * velocity) / self.inertia;
        let current_dot = (voltage - self.resistance * current
            - self.back_emf_constant * velocity)
            / self.inductance;

        [velocity_dot, current_dot]
    }

    /// Advances the model by one step of `dt`, holding the terminal voltage
    /// constant over the step.
    pub fn step(&self, state: [T; 2], voltage: T, dt: T) -> [T; 2] {
        ode::rk4_step(|s, _t| self.derivatives(s, voltage), state, T::zero(), dt)
    }
}
