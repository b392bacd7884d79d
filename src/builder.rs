//! Builder Pattern
//!
//! Mandatory fields go through `new`, optional ones through chained setters.
//! `build` checks the mandatory ones are not blank.

use std::fmt;

use crate::error::{DesignError, Result};

fn require(argument: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(DesignError::invalid_argument(argument, "must not be blank"));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    first_name: String,
    last_name: String,
    age: Option<u32>,
    phone: Option<String>,
    address: Option<String>,
}

impl User {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)?;
        if let Some(age) = self.age {
            write!(f, ", age {age}")?;
        }
        if let Some(address) = &self.address {
            write!(f, ", lives in {address}")?;
        }
        if let Some(phone) = &self.phone {
            write!(f, ", phone {phone}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until build() is called"]
pub struct UserBuilder {
    first_name: String,
    last_name: String,
    age: Option<u32>,
    phone: Option<String>,
    address: Option<String>,
}

impl UserBuilder {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        UserBuilder {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: None,
            phone: None,
            address: None,
        }
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn build(self) -> Result<User> {
        Ok(User {
            first_name: require("first_name", self.first_name)?,
            last_name: require("last_name", self.last_name)?,
            age: self.age,
            phone: self.phone,
            address: self.address,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
    phone: String,
    city: Option<String>,
    country: Option<String>,
}

impl Person {
    pub fn builder(name: impl Into<String>, phone: impl Into<String>) -> PersonBuilder {
        PersonBuilder::new(name, phone)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until build() is called"]
pub struct PersonBuilder {
    name: String,
    phone: String,
    city: Option<String>,
    country: Option<String>,
}

impl PersonBuilder {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        PersonBuilder {
            name: name.into(),
            phone: phone.into(),
            city: None,
            country: None,
        }
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn build(self) -> Result<Person> {
        Ok(Person {
            name: require("name", self.name)?,
            phone: require("phone", self.phone)?,
            city: self.city,
            country: self.country,
        })
    }
}
