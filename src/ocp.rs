//! Open/Closed Principle
//!
//! New payment methods, shapes and export formats are new types. Nothing that
//! consumes [`Discount`], [`Shape`] or [`Exporter`] changes when one is added.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::{DesignError, Result};

pub trait Discount {
    /// Percentage taken off the price.
    fn discount(&self) -> u32 {
        FlatDiscount::DEFAULT
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Debit;

impl Discount for Debit {
    fn discount(&self) -> u32 {
        10
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Credit;

impl Discount for Credit {
    fn discount(&self) -> u32 {
        20
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayTm;

impl Discount for PayTm {
    fn discount(&self) -> u32 {
        30
    }
}

/// Payment with no dedicated rate; uses the trait's default.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatDiscount;

impl FlatDiscount {
    pub const DEFAULT: u32 = 5;
}

impl Discount for FlatDiscount {}

pub fn apply_discount(discount: &dyn Discount) -> u32 {
    discount.discount()
}

/// Parsed once from user input, then dispatched by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Debit,
    Credit,
    PayTm,
    Cash,
}

impl PaymentMethod {
    pub fn discount(self) -> Box<dyn Discount> {
        match self {
            PaymentMethod::Debit => Box::new(Debit),
            PaymentMethod::Credit => Box::new(Credit),
            PaymentMethod::PayTm => Box::new(PayTm),
            PaymentMethod::Cash => Box::new(FlatDiscount),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" => Ok(PaymentMethod::Debit),
            "credit" => Ok(PaymentMethod::Credit),
            "paytm" => Ok(PaymentMethod::PayTm),
            "cash" => Ok(PaymentMethod::Cash),
            _ => Err(DesignError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Debit => "Debit",
            PaymentMethod::Credit => "Credit",
            PaymentMethod::PayTm => "PayTM",
            PaymentMethod::Cash => "Cash",
        };
        f.write_str(name)
    }
}

// Shapes and exporters: one responsibility per trait.

pub trait Shape {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Draw a Circle")
    }
}

pub struct Rectangle;

impl Shape for Rectangle {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Draw a Rectangle")
    }
}

pub trait Exporter {
    fn export(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct Jpg;

impl Exporter for Jpg {
    fn export(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Export image as JPG")
    }
}

pub struct Svg;

impl Exporter for Svg {
    fn export(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Export image as SVG")
    }
}

pub fn draw_and_export(
    out: &mut dyn Write,
    shape: &dyn Shape,
    exporter: &dyn Exporter,
) -> Result<()> {
    shape.draw(out)?;
    exporter.export(out)?;
    Ok(())
}

/// Before: every new payment method, shape or format edits these branches.
pub mod legacy {
    use std::io::Write;

    use crate::error::Result;

    /// Unrecognised text silently gets the fallback rate.
    pub fn discount_for(payment: &str) -> u32 {
        if payment == "Debit" {
            return 10;
        }
        if payment == "Credit" {
            return 20;
        }
        if payment == "PayTM" {
            return 30;
        }
        5
    }

    pub fn draw_and_export(out: &mut dyn Write, shape: &str, exporter: &str) -> Result<()> {
        if shape == "circle" {
            writeln!(out, "Draw a Circle")?;
        } else if shape == "rectangle" {
            writeln!(out, "Draw a Rectangle")?;
        }

        if exporter == "jpg" {
            writeln!(out, "JPG image create")?;
        } else if exporter == "svg" {
            writeln!(out, "SVG image create")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_rates_match_the_trait_rates() {
        assert_eq!(legacy::discount_for("Debit"), apply_discount(&Debit));
        assert_eq!(legacy::discount_for("Credit"), apply_discount(&Credit));
        assert_eq!(legacy::discount_for("PayTM"), apply_discount(&PayTm));
    }

    #[test]
    fn unknown_text_is_silent_in_legacy_but_rejected_by_parse() {
        assert_eq!(legacy::discount_for("barter"), 5);
        assert_eq!(legacy::discount_for("credit"), 5);

        let err = "barter".parse::<PaymentMethod>().unwrap_err();
        assert!(matches!(err, DesignError::UnknownPaymentMethod(_)));
    }

    #[test]
    fn legacy_branches_skip_unknown_names() {
        let mut out = Vec::new();
        legacy::draw_and_export(&mut out, "circle", "jpg").unwrap();
        legacy::draw_and_export(&mut out, "triangle", "svg").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Draw a Circle\nJPG image create\nSVG image create\n"
        );
    }

    #[test]
    fn each_method_has_its_rate() {
        assert_eq!(apply_discount(&Debit), 10);
        assert_eq!(apply_discount(&Credit), 20);
        assert_eq!(apply_discount(&PayTm), 30);
        assert_eq!(apply_discount(&FlatDiscount), 5);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Credit".parse::<PaymentMethod>().unwrap(), PaymentMethod::Credit);
        assert_eq!(" PAYTM ".parse::<PaymentMethod>().unwrap(), PaymentMethod::PayTm);
        assert_eq!(PaymentMethod::Credit.discount().discount(), 20);
        assert_eq!(PaymentMethod::Cash.discount().discount(), 5);
    }

    #[test]
    fn unknown_method_is_an_error() {
        let err = "barter".parse::<PaymentMethod>().unwrap_err();
        assert!(matches!(err, DesignError::UnknownPaymentMethod(ref s) if s == "barter"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for method in [
            PaymentMethod::Debit,
            PaymentMethod::Credit,
            PaymentMethod::PayTm,
            PaymentMethod::Cash,
        ] {
            assert_eq!(method.to_string().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn draw_then_export() {
        let mut out = Vec::new();
        draw_and_export(&mut out, &Circle, &Jpg).unwrap();
        draw_and_export(&mut out, &Rectangle, &Svg).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Draw a Circle\nExport image as JPG\nDraw a Rectangle\nExport image as SVG\n"
        );
    }
}
