//! Interface Segregation Principle
//!
//! One capability per trait. A worker implements only what it can do, so
//! asking a robot to eat does not compile.

use std::io::{self, Write};

pub trait Workable {
    fn work(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub trait Eatable {
    fn eat(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub trait Codable {
    fn code(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub trait Designable {
    fn design(&self, out: &mut dyn Write) -> io::Result<()>;
}

// Implements the listed traits for a worker with a fixed display name.
macro_rules! worker {
    ($name:ident, $label:literal: $($cap:ident => $method:ident, $verb:literal);+ $(;)?) => {
        pub struct $name;

        $(
            impl $cap for $name {
                fn $method(&self, out: &mut dyn Write) -> io::Result<()> {
                    writeln!(out, concat!($label, " ", $verb))
                }
            }
        )+
    };
}

worker!(Developer, "Developer":
    Workable => work, "working";
    Eatable => eat, "eating";
    Codable => code, "coding";
);

worker!(Designer, "Designer":
    Workable => work, "working";
    Eatable => eat, "eating";
    Designable => design, "designing";
);

worker!(Robot, "Robot":
    Workable => work, "working";
    Codable => code, "coding";
    Designable => design, "designing";
);

/// Lunch break for everyone that eats.
pub fn lunch(eaters: &[&dyn Eatable], out: &mut dyn Write) -> io::Result<()> {
    for eater in eaters {
        eater.eat(out)?;
    }
    Ok(())
}

pub fn ship_feature<T: Workable + Codable>(worker: &T, out: &mut dyn Write) -> io::Result<()> {
    worker.work(out)?;
    worker.code(out)
}

pub fn mock_up<T: Workable + Designable>(worker: &T, out: &mut dyn Write) -> io::Result<()> {
    worker.work(out)?;
    worker.design(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn coders_ship_features() {
        assert_eq!(
            run(|out| ship_feature(&Developer, out)),
            "Developer working\nDeveloper coding\n"
        );
        assert_eq!(run(|out| ship_feature(&Robot, out)), "Robot working\nRobot coding\n");
    }

    #[test]
    fn designers_mock_up() {
        assert_eq!(
            run(|out| mock_up(&Designer, out)),
            "Designer working\nDesigner designing\n"
        );
        assert_eq!(run(|out| mock_up(&Robot, out)), "Robot working\nRobot designing\n");
    }

    #[test]
    fn only_humans_go_to_lunch() {
        let eaters: [&dyn Eatable; 2] = [&Developer, &Designer];
        assert_eq!(
            run(|out| lunch(&eaters, out)),
            "Developer eating\nDesigner eating\n"
        );
    }
}
