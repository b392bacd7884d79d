//! Liskov Substitution Principle
//!
//! A `legacy::Bicycle` is a [`legacy::Vehicle`] that cannot honor
//! `engine_start`. After the split, only vehicles that have an engine
//! implement [`EnginePowered`], and a bicycle simply cannot be passed where
//! one is required.

use std::io::{self, Write};

pub trait Movable {
    fn speed_up(&self, out: &mut dyn Write) -> io::Result<()>;
    fn speed_down(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub trait EnginePowered {
    fn engine_start(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct Car;

impl Movable for Car {
    fn speed_up(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Car Speed Up")
    }

    fn speed_down(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Car Speed Down")
    }
}

impl EnginePowered for Car {
    fn engine_start(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Car Engine Started")
    }
}

pub struct Bicycle;

impl Movable for Bicycle {
    fn speed_up(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Bicycle Speed Up")
    }

    fn speed_down(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Bicycle Speed Down")
    }
}

pub fn ride<M: Movable + ?Sized>(vehicle: &M, out: &mut dyn Write) -> io::Result<()> {
    vehicle.speed_up(out)?;
    vehicle.speed_down(out)
}

pub fn start_and_ride<V: Movable + EnginePowered>(
    vehicle: &V,
    out: &mut dyn Write,
) -> io::Result<()> {
    vehicle.engine_start(out)?;
    ride(vehicle, out)
}

/// The single fat trait where one implementor breaks the contract at runtime.
pub mod legacy {
    use std::io::Write;

    use crate::error::{DesignError, Result};

    pub trait Vehicle {
        fn speed_up(&self, out: &mut dyn Write) -> Result<()>;
        fn speed_down(&self, out: &mut dyn Write) -> Result<()>;
        fn engine_start(&self, out: &mut dyn Write) -> Result<()>;
    }

    pub struct Car;

    impl Vehicle for Car {
        fn speed_up(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Car Speed Up")?;
            Ok(())
        }

        fn speed_down(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Car Speed Down")?;
            Ok(())
        }

        fn engine_start(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Car Engine Started")?;
            Ok(())
        }
    }

    pub struct Bicycle;

    impl Vehicle for Bicycle {
        fn speed_up(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Bicycle Speed Up")?;
            Ok(())
        }

        fn speed_down(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Bicycle Speed Down")?;
            Ok(())
        }

        fn engine_start(&self, _out: &mut dyn Write) -> Result<()> {
            Err(DesignError::engine_missing("Bicycle"))
        }
    }

    /// Callers written against `Vehicle` trust every method to work.
    pub fn start_all(vehicles: &[&dyn Vehicle], out: &mut dyn Write) -> Result<()> {
        for vehicle in vehicles {
            vehicle.engine_start(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesignError;

    #[test]
    fn both_vehicles_ride() {
        let mut out = Vec::new();
        ride(&Car, &mut out).unwrap();
        ride(&Bicycle, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Car Speed Up\nCar Speed Down\nBicycle Speed Up\nBicycle Speed Down\n"
        );
    }

    #[test]
    fn car_starts_before_riding() {
        let mut out = Vec::new();
        start_and_ride(&Car, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Car Engine Started\n"));
    }

    #[test]
    fn movables_mix_in_one_collection() {
        let fleet: Vec<Box<dyn Movable>> = vec![Box::new(Car), Box::new(Bicycle)];
        let mut out = Vec::new();
        for vehicle in &fleet {
            ride(vehicle.as_ref(), &mut out).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
    }

    #[test]
    fn legacy_bicycle_breaks_substitution() {
        let fleet: [&dyn legacy::Vehicle; 2] = [&legacy::Car, &legacy::Bicycle];
        let mut out = Vec::new();
        let err = legacy::start_all(&fleet, &mut out).unwrap_err();

        assert!(matches!(err, DesignError::EngineMissing { ref vehicle } if vehicle == "Bicycle"));
        assert_eq!(String::from_utf8(out).unwrap(), "Car Engine Started\n");
    }
}
