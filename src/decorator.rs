//! Decorator Pattern
//! Coffee priced through a chain of toppings.
//!
//! Every topping owns the beverage it wraps and implements [`Coffee`] itself,
//! so toppings stack in any order without a class per combination.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DesignError, Result};

/// Separator between the base description and each topping suffix.
pub const SEPARATOR: &str = ", ";

pub trait Coffee {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

impl<C: Coffee + ?Sized> Coffee for Box<C> {
    fn cost(&self) -> u32 {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimpleCoffee;

impl SimpleCoffee {
    pub const COST: u32 = 10;
}

impl Coffee for SimpleCoffee {
    fn cost(&self) -> u32 {
        Self::COST
    }

    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }
}

// Each topping: one owned inner beverage, a fixed surcharge and a suffix.
macro_rules! topping {
    ($(#[$meta:meta])* $name:ident, $surcharge:expr, $suffix:expr) => {
        $(#[$meta])*
        pub struct $name {
            inner: Box<dyn Coffee>,
        }

        impl $name {
            pub const SURCHARGE: u32 = $surcharge;
            pub const SUFFIX: &'static str = $suffix;

            pub fn new(inner: impl Coffee + 'static) -> Self {
                Self {
                    inner: Box::new(inner),
                }
            }

            /// Wraps an optional beverage, rejecting `None`.
            pub fn try_new(inner: Option<Box<dyn Coffee>>) -> Result<Self> {
                inner.map(|inner| Self { inner }).ok_or_else(|| {
                    DesignError::invalid_argument(
                        "inner",
                        concat!(stringify!($name), " needs a beverage to wrap"),
                    )
                })
            }

            pub fn inner(&self) -> &dyn Coffee {
                self.inner.as_ref()
            }
        }

        impl Coffee for $name {
            fn cost(&self) -> u32 {
                self.inner.cost() + Self::SURCHARGE
            }

            fn description(&self) -> String {
                format!("{}{}{}", self.inner.description(), SEPARATOR, Self::SUFFIX)
            }
        }
    };
}

topping!(
    /// Adds steamed milk.
    Milk, 10, "milk"
);
topping!(Sugar, 5, "sugar");
topping!(Vanilla, 10, "vanilla");
topping!(WhippedCream, 9, "whipped cream");

/// Selects a topping by variant, never by comparing names at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topping {
    Milk,
    Sugar,
    Vanilla,
    WhippedCream,
}

impl Topping {
    pub const ALL: [Topping; 4] = [
        Topping::Milk,
        Topping::Sugar,
        Topping::Vanilla,
        Topping::WhippedCream,
    ];

    pub fn surcharge(self) -> u32 {
        match self {
            Topping::Milk => Milk::SURCHARGE,
            Topping::Sugar => Sugar::SURCHARGE,
            Topping::Vanilla => Vanilla::SURCHARGE,
            Topping::WhippedCream => WhippedCream::SURCHARGE,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Topping::Milk => Milk::SUFFIX,
            Topping::Sugar => Sugar::SUFFIX,
            Topping::Vanilla => Vanilla::SUFFIX,
            Topping::WhippedCream => WhippedCream::SUFFIX,
        }
    }

    pub fn wrap(self, inner: Box<dyn Coffee>) -> Box<dyn Coffee> {
        match self {
            Topping::Milk => Box::new(Milk { inner }),
            Topping::Sugar => Box::new(Sugar { inner }),
            Topping::Vanilla => Box::new(Vanilla { inner }),
            Topping::WhippedCream => Box::new(WhippedCream { inner }),
        }
    }

    pub fn try_wrap(self, inner: Option<Box<dyn Coffee>>) -> Result<Box<dyn Coffee>> {
        let inner = inner.ok_or_else(|| {
            DesignError::invalid_argument("inner", format!("{self:?} needs a beverage to wrap"))
        })?;
        Ok(self.wrap(inner))
    }
}

/// Base beverages an order can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Base {
    Simple,
}

impl Base {
    pub fn brew(self) -> Box<dyn Coffee> {
        match self {
            Base::Simple => Box::new(SimpleCoffee),
        }
    }
}

/// A fully assembled beverage plus the toppings that went into it.
pub struct CoffeeOrder {
    base: Base,
    toppings: Vec<Topping>,
    beverage: Box<dyn Coffee>,
}

impl CoffeeOrder {
    pub fn builder() -> CoffeeOrderBuilder {
        CoffeeOrderBuilder::default()
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn into_beverage(self) -> Box<dyn Coffee> {
        self.beverage
    }
}

impl Coffee for CoffeeOrder {
    fn cost(&self) -> u32 {
        self.beverage.cost()
    }

    fn description(&self) -> String {
        self.beverage.description()
    }
}

#[derive(Debug, Default, Clone)]
pub struct CoffeeOrderBuilder {
    base: Option<Base>,
    toppings: Vec<Topping>,
}

impl CoffeeOrderBuilder {
    pub fn base(mut self, base: Base) -> Self {
        self.base = Some(base);
        self
    }

    /// Toppings wrap in call order: the first one added sits closest to the base.
    pub fn topping(mut self, topping: Topping) -> Self {
        self.toppings.push(topping);
        self
    }

    pub fn toppings(mut self, toppings: impl IntoIterator<Item = Topping>) -> Self {
        self.toppings.extend(toppings);
        self
    }

    pub fn build(self) -> Result<CoffeeOrder> {
        let base = self.base.ok_or_else(|| {
            DesignError::invalid_argument("base", "an order needs a base beverage")
        })?;

        let beverage = self
            .toppings
            .iter()
            .fold(base.brew(), |inner, topping| topping.wrap(inner));
        debug!(
            ?base,
            toppings = ?self.toppings,
            cost = beverage.cost(),
            "assembled coffee order"
        );

        Ok(CoffeeOrder {
            base,
            toppings: self.toppings,
            beverage,
        })
    }
}

/// Before: one type per combination, each with its own hard-coded price.
///
/// Sugar without milk, or a new topping, means another type here.
pub mod legacy {
    use super::Coffee;

    pub struct MilkCoffee;

    impl Coffee for MilkCoffee {
        fn cost(&self) -> u32 {
            20
        }

        fn description(&self) -> String {
            "Coffee with milk".to_string()
        }
    }

    pub struct MilkAndSugarCoffee;

    impl Coffee for MilkAndSugarCoffee {
        fn cost(&self) -> u32 {
            30
        }

        fn description(&self) -> String {
            "Coffee with milk and sugar".to_string()
        }
    }

    pub struct MilkSugarVanillaCoffee;

    impl Coffee for MilkSugarVanillaCoffee {
        fn cost(&self) -> u32 {
            40
        }

        fn description(&self) -> String {
            "Coffee with milk, sugar and vanilla".to_string()
        }
    }
}
