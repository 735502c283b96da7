#![no_std]
#![forbid(unsafe_code)]

//! Building blocks for discrete-time feedback control loops.
//!
//! The core of the crate is [`pid::PidController`], a single-loop PID
//! controller updated once per fixed sampling period. The [`ode`] and
//! [`motor`] modules provide fixed-step integrators and a DC motor model
//! for simulating a plant under control, as the `step_response` demo does.

pub mod motor;
pub mod ode;
pub mod pid;

pub use pid::PidController;
