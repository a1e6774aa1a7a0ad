//! Closed enumerations of the scored archetypes.
//!
//! Every catalog lookup goes through one of these enums, so an unknown
//! archetype name is rejected once at the parsing boundary rather than
//! surfacing as a missing table entry deep inside scoring.
//!
//! # Examples
//! ```
//! use sitewise_core::BusinessKind;
//!
//! assert_eq!(BusinessKind::Cafe.as_str(), "Café");
//! assert_eq!("coworking space".parse::<BusinessKind>(), Ok(BusinessKind::CoworkingSpace));
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string names no known archetype.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {family} '{input}'")]
pub struct ParseArchetypeError {
    family: &'static str,
    input: String,
}

impl ParseArchetypeError {
    fn new(family: &'static str, input: &str) -> Self {
        Self {
            family,
            input: input.to_owned(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Fold a name to lowercase ASCII letters and digits.
///
/// `"Café"`, `"cafe"` and `"CAFE!"` all fold to `"cafe"`.
fn fold(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'é' | 'É' | 'è' | 'ê' => 'e',
            other => other,
        })
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Standard business archetypes scored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BusinessKind {
    /// Coffee shop.
    #[cfg_attr(feature = "serde", serde(rename = "Café", alias = "Cafe"))]
    Cafe,
    /// Sit-down restaurant.
    Restaurant,
    /// General retail outlet.
    #[cfg_attr(feature = "serde", serde(rename = "Retail Store"))]
    RetailStore,
    /// Fitness centre.
    Gym,
    /// Shared office space.
    #[cfg_attr(feature = "serde", serde(rename = "Coworking Space"))]
    CoworkingSpace,
}

impl BusinessKind {
    /// Every kind, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Cafe,
        Self::Restaurant,
        Self::RetailStore,
        Self::Gym,
        Self::CoworkingSpace,
    ];

    /// Display name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cafe => "Café",
            Self::Restaurant => "Restaurant",
            Self::RetailStore => "Retail Store",
            Self::Gym => "Gym",
            Self::CoworkingSpace => "Coworking Space",
        }
    }
}

impl fmt::Display for BusinessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessKind {
    type Err = ParseArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "cafe" => Ok(Self::Cafe),
            "restaurant" => Ok(Self::Restaurant),
            "retail" | "retailstore" => Ok(Self::RetailStore),
            "gym" => Ok(Self::Gym),
            "coworking" | "coworkingspace" => Ok(Self::CoworkingSpace),
            _ => Err(ParseArchetypeError::new("business kind", s)),
        }
    }
}

/// Franchise sector used for grouping brands in presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FranchiseCategory {
    /// Food and beverage outlets.
    #[cfg_attr(feature = "serde", serde(rename = "Food & Beverage"))]
    FoodAndBeverage,
    /// Retail outlets.
    Retail,
    /// Health, beauty and fitness services.
    #[cfg_attr(feature = "serde", serde(rename = "Health & Wellness"))]
    HealthAndWellness,
}

impl FranchiseCategory {
    /// Display name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FoodAndBeverage => "Food & Beverage",
            Self::Retail => "Retail",
            Self::HealthAndWellness => "Health & Wellness",
        }
    }
}

impl fmt::Display for FranchiseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Franchise brands scored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FranchiseBrand {
    /// Pizza delivery chain.
    #[cfg_attr(feature = "serde", serde(rename = "Domino's Pizza"))]
    Dominos,
    /// Sandwich chain.
    Subway,
    /// Kitchen appliance retailer.
    #[cfg_attr(feature = "serde", serde(rename = "Prestige Smart Kitchen"))]
    PrestigeSmartKitchen,
    /// Beauty and wellness clinics.
    #[cfg_attr(feature = "serde", serde(rename = "VLCC"))]
    Vlcc,
    /// Tea café chain.
    #[cfg_attr(feature = "serde", serde(rename = "Chai Point"))]
    ChaiPoint,
}

impl FranchiseBrand {
    /// Every brand, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Dominos,
        Self::Subway,
        Self::PrestigeSmartKitchen,
        Self::Vlcc,
        Self::ChaiPoint,
    ];

    /// Display name of the brand.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dominos => "Domino's Pizza",
            Self::Subway => "Subway",
            Self::PrestigeSmartKitchen => "Prestige Smart Kitchen",
            Self::Vlcc => "VLCC",
            Self::ChaiPoint => "Chai Point",
        }
    }
}

impl fmt::Display for FranchiseBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FranchiseBrand {
    type Err = ParseArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "dominos" | "dominospizza" => Ok(Self::Dominos),
            "subway" => Ok(Self::Subway),
            "prestige" | "prestigesmartkitchen" => Ok(Self::PrestigeSmartKitchen),
            "vlcc" => Ok(Self::Vlcc),
            "chaipoint" => Ok(Self::ChaiPoint),
            _ => Err(ParseArchetypeError::new("franchise brand", s)),
        }
    }
}
