use std::{collections::BTreeMap, fs::File, io::BufWriter, sync::Arc};

use pid_loop::{motor::DcMotor, PidController};
use serde::Serialize;

#[derive(Serialize)]
struct Sample {
    time_ns: u64,
    setpoint_rad_per_sec: f64,
    velocity_rad_per_sec: f64,
    current_amps: f64,
    voltage: f64,
}

fn main() -> Result<(), anyhow::Error> {
    let mut writer = mcap::Writer::new(BufWriter::new(File::create("out.mcap")?))?;
    let my_channel = mcap::Channel {
        topic: String::from("step_response"),
        schema: Some(Arc::new(mcap::Schema {
            name: "".to_owned(),
            encoding: "".to_owned(),
            data: std::borrow::Cow::default(),
        })),
        message_encoding: "cbor".to_owned(),
        metadata: BTreeMap::default(),
    };
    let channel_id = writer.add_channel(&my_channel)?;

    let dt = 0.001;
    let dt_ns = 1_000_000;
    let mut time_ns = 0;

    let motor = DcMotor {
        inertia: 0.01,
        damping: 0.1,
        torque_constant: 0.1,
        back_emf_constant: 0.1,
        resistance: 1.0,
        inductance: 0.1,
    };
    let mut controller = PidController::new(6.0, 4.0, 0.05, dt);
    // [angular velocity, winding current]
    let mut state = [0.0; 2];

    while time_ns <= 5_000_000_000 {
        // Speed setpoint steps up halfway through the run.
        let setpoint = if time_ns < 2_500_000_000 { 1.0 } else { 2.0 };

        let voltage = controller.compute(setpoint, state[0]);
        state = motor.step(state, voltage, dt);

        // Write to file
        let mut buffer = Vec::with_capacity(64);
        ciborium::into_writer(
            &Sample {
                time_ns,
                setpoint_rad_per_sec: setpoint,
                velocity_rad_per_sec: state[0],
                current_amps: state[1],
                voltage,
            },
            &mut buffer,
        )
        .unwrap();
        writer
            .write_to_known_channel(
                &mcap::records::MessageHeader {
                    channel_id,
                    sequence: 0,
                    log_time: time_ns,
                    publish_time: time_ns,
                },
                &buffer,
            )
            .unwrap();

        time_ns += dt_ns;
    }

    writer.finish().unwrap();

    Ok(())
}
