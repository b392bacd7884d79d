//! Observer Pattern
//! Weather station broadcasting temperature to registered displays.
//!
//! Observers are removed by the [`ObserverId`] handed out when they were
//! added. Two displays of the same kind are still two distinct observers.

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::error::Result;

pub trait Observer {
    fn name(&self) -> &'static str;

    fn update(&self, out: &mut dyn Write, temperature: f64) -> io::Result<()> {
        writeln!(out, "{} Display Temperature : {:.1}", self.name(), temperature)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MobileDisplay;

impl Observer for MobileDisplay {
    fn name(&self) -> &'static str {
        "Mobile"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LedDisplay;

impl Observer for LedDisplay {
    fn name(&self) -> &'static str {
        "LED"
    }
}

/// Identity of one registration on a [`WeatherStation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}", self.0)
    }
}

pub struct WeatherStation {
    temperature: f64,
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: u64,
}

impl WeatherStation {
    pub fn new(temperature: f64) -> Self {
        WeatherStation {
            temperature,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    pub fn add_observer(&mut self, observer: impl Observer + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        debug!(%id, name = observer.name(), "observer added");
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes the registration behind `id`, handing the observer back.
    ///
    /// Unknown or already removed ids leave the station untouched.
    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn Observer>> {
        let index = self.observers.iter().position(|(existing, _)| *existing == id)?;
        let (_, observer) = self.observers.remove(index);
        debug!(%id, name = observer.name(), "observer removed");
        Some(observer)
    }

    pub fn observer_ids(&self) -> Vec<ObserverId> {
        self.observers.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Sends the current temperature to every observer in insertion order.
    ///
    /// Returns how many observers were updated. A failing observer ends the
    /// broadcast; the ones after it are not called.
    pub fn notify_observers(&self, out: &mut dyn Write) -> Result<usize> {
        debug!(temperature = self.temperature, observers = self.observers.len(), "broadcasting");
        for (id, observer) in &self.observers {
            trace!(%id, "updating observer");
            observer.update(out, self.temperature)?;
        }
        Ok(self.observers.len())
    }
}

/// Before: the station knows every display and prints them itself.
pub struct HardwiredStation {
    pub temperature: f64,
}

impl HardwiredStation {
    pub fn update_display(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Mobile Display : {:.1}", self.temperature)?;
        writeln!(out, "LED Display : {:.1}", self.temperature)?;
        Ok(())
    }
}
