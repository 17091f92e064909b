// pend-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Angle as UomAngle, AngularVelocity as UomAngularVelocity,
    Length as UomLength,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Angle = UomAngle;
pub type AngVel = UomAngularVelocity;
pub type Length = UomLength;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn radps(v: f64) -> AngVel {
    use uom::si::angular_velocity::radian_per_second;
    AngVel::new::<radian_per_second>(v)
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    /// Standard gravity, for runs that want an Earth-bound pendulum.
    #[inline]
    pub fn standard_gravity() -> Accel {
        mps2(G0_MPS2)
    }
}
