//! Declarative object graphs.
//!
//! A coffee order or a logger profile can be described as TOML or JSON and
//! turned into the same values the builders produce. Names map onto enum
//! variants during deserialization; an unknown name is a parse error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decorator::{Base, CoffeeOrder, Topping};
use crate::dip::{Application, LoggerProfile};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderSpec {
    pub name: String,
    pub base: Option<Base>,
    #[serde(default)]
    pub toppings: Vec<Topping>,
}

impl OrderSpec {
    /// Fails with `InvalidArgument` when no base is given.
    pub fn to_order(&self) -> Result<CoffeeOrder> {
        let mut builder = CoffeeOrder::builder().toppings(self.toppings.iter().copied());
        if let Some(base) = self.base {
            builder = builder.base(base);
        }
        builder.build()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default = "default_profile")]
    pub profile: LoggerProfile,
    #[serde(default)]
    pub orders: Vec<OrderSpec>,
}

fn default_profile() -> LoggerProfile {
    LoggerProfile::Production
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        debug!(profile = ?config.profile, orders = config.orders.len(), "parsed TOML demo config");
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: DemoConfig = serde_json::from_str(content)?;
        debug!(profile = ?config.profile, orders = config.orders.len(), "parsed JSON demo config");
        Ok(config)
    }

    pub fn application(&self) -> Application {
        Application::from_profile(self.profile)
    }

    /// Builds every order, stopping at the first invalid one.
    pub fn orders(&self) -> Result<Vec<(String, CoffeeOrder)>> {
        self.orders
            .iter()
            .map(|spec| Ok((spec.name.clone(), spec.to_order()?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::Coffee;
    use crate::error::DesignError;

    const MENU: &str = r#"
profile = "development"

[[orders]]
name = "plain"
base = "simple"

[[orders]]
name = "fancy"
base = "simple"
toppings = ["milk", "sugar", "vanilla", "whipped-cream"]
"#;

    #[test]
    fn toml_menu_builds_priced_orders() {
        let config = DemoConfig::from_toml(MENU).unwrap();
        assert_eq!(config.profile, LoggerProfile::Development);

        let orders = config.orders().unwrap();
        let summary: Vec<(&str, u32)> = orders
            .iter()
            .map(|(name, order)| (name.as_str(), order.cost()))
            .collect();
        assert_eq!(summary, vec![("plain", 10), ("fancy", 44)]);
        assert_eq!(config.application().sinks(), vec!["Console", "File"]);
    }

    #[test]
    fn json_menu_matches_toml() {
        let json = r#"{
            "profile": "development",
            "orders": [
                { "name": "plain", "base": "simple" },
                { "name": "fancy", "base": "simple",
                  "toppings": ["milk", "sugar", "vanilla", "whipped-cream"] }
            ]
        }"#;
        assert_eq!(
            DemoConfig::from_json(json).unwrap(),
            DemoConfig::from_toml(MENU).unwrap()
        );
    }

    #[test]
    fn profile_defaults_to_production() {
        let config = DemoConfig::from_toml("").unwrap();
        assert_eq!(config.profile, LoggerProfile::Production);
        assert!(config.orders.is_empty());
    }

    #[test]
    fn unknown_topping_is_a_parse_error() {
        let err = DemoConfig::from_toml(
            r#"
[[orders]]
name = "odd"
base = "simple"
toppings = ["ketchup"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, DesignError::Toml(_)));
    }

    #[test]
    fn order_without_base_is_invalid() {
        let config = DemoConfig::from_toml(
            r#"
[[orders]]
name = "cup of milk"
toppings = ["milk"]
"#,
        )
        .unwrap();
        let err = config.orders().err().unwrap();
        assert!(matches!(
            err,
            DesignError::InvalidArgument { ref argument, .. } if argument == "base"
        ));
    }
}
