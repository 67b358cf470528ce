//! Discrete output and sensor traits

/// Trait for the machine's discrete outputs
///
/// Each output drives one actuator line; the controller decides when they
/// are asserted, implementations only flip pins.
pub trait OutputPort {
    /// Drive the drink dispense valve
    fn set_drink(&mut self, on: bool);

    /// Drive the change hopper motor
    fn set_change(&mut self, on: bool);

    /// Drive the tilt alarm sounder
    fn set_alarm(&mut self, on: bool);
}

/// Trait for the tilt sensor
///
/// Readings are a voltage-like scalar in the sensor's native units; larger
/// magnitude means more tilt. Calibration is the implementation's problem.
pub trait TiltSensor {
    /// Take one reading
    fn read(&mut self) -> i16;
}
