//! Static economics of every scored archetype.
//!
//! The tables are compile-time constants; nothing at runtime can alter a
//! weight or a baseline. Look a profile up through the archetype enums:
//!
//! ```
//! use sitewise_core::{BusinessKind, FranchiseBrand};
//!
//! let cafe = BusinessKind::Cafe.profile();
//! assert_eq!(cafe.base_investment, 1_500_000.0);
//! assert_eq!(FranchiseBrand::Subway.profile().brand_strength, 85.0);
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::archetype::{BusinessKind, FranchiseBrand, FranchiseCategory};

/// Location-sensitivity coefficients of a business archetype.
///
/// Each weight pairs with one normaliser output. Competition carries no
/// archetype weight and applies uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeWeights {
    /// Sensitivity to population.
    pub population: f64,
    /// Sensitivity to average income.
    pub income: f64,
    /// Sensitivity to education level.
    pub education: f64,
    /// Sensitivity to foot traffic, proxied by business density.
    pub traffic: f64,
}

/// Baseline economics of a standard business archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessProfile {
    /// Archetype the profile belongs to.
    pub kind: BusinessKind,
    /// Baseline capital requirement.
    pub base_investment: f64,
    /// Baseline annual revenue.
    pub base_revenue: f64,
    /// Profit as a fraction of revenue.
    pub profit_margin: f64,
    /// Location-sensitivity coefficients.
    pub weights: ArchetypeWeights,
}

/// Franchisor contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FranchiseContact {
    /// Franchise enquiry phone line.
    pub phone: &'static str,
    /// Franchise enquiry email address.
    pub email: &'static str,
    /// Franchise information page.
    pub website: &'static str,
    /// Head office address.
    pub address: &'static str,
}

/// Baseline economics and qualitative metadata of a franchise brand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FranchiseProfile {
    /// Brand the profile belongs to.
    pub brand: FranchiseBrand,
    /// Sector the brand operates in.
    pub category: FranchiseCategory,
    /// Baseline capital requirement.
    pub base_investment: f64,
    /// Brand recognition on a 0-100 scale.
    pub brand_strength: f64,
    /// Franchisor support quality on a 0-100 scale.
    pub support_rating: f64,
    /// Entry requirements imposed by the franchisor.
    pub requirements: &'static [&'static str],
    /// Franchisor contact details, when published.
    pub contact: Option<FranchiseContact>,
    /// Selling points advertised by the franchisor.
    pub advantages: &'static [&'static str],
}

const CAFE: BusinessProfile = BusinessProfile {
    kind: BusinessKind::Cafe,
    base_investment: 1_500_000.0,
    base_revenue: 3_000_000.0,
    profit_margin: 0.25,
    weights: ArchetypeWeights {
        population: 0.8,
        income: 0.7,
        education: 0.6,
        traffic: 0.9,
    },
};

const RESTAURANT: BusinessProfile = BusinessProfile {
    kind: BusinessKind::Restaurant,
    base_investment: 3_500_000.0,
    base_revenue: 7_000_000.0,
    profit_margin: 0.3,
    weights: ArchetypeWeights {
        population: 0.9,
        income: 0.8,
        education: 0.5,
        traffic: 0.8,
    },
};

const RETAIL_STORE: BusinessProfile = BusinessProfile {
    kind: BusinessKind::RetailStore,
    base_investment: 2_500_000.0,
    base_revenue: 5_000_000.0,
    profit_margin: 0.35,
    weights: ArchetypeWeights {
        population: 0.7,
        income: 0.9,
        education: 0.4,
        traffic: 0.7,
    },
};

const GYM: BusinessProfile = BusinessProfile {
    kind: BusinessKind::Gym,
    base_investment: 4_000_000.0,
    base_revenue: 8_000_000.0,
    profit_margin: 0.4,
    weights: ArchetypeWeights {
        population: 0.8,
        income: 0.7,
        education: 0.8,
        traffic: 0.5,
    },
};

const COWORKING_SPACE: BusinessProfile = BusinessProfile {
    kind: BusinessKind::CoworkingSpace,
    base_investment: 5_000_000.0,
    base_revenue: 10_000_000.0,
    profit_margin: 0.45,
    weights: ArchetypeWeights {
        population: 0.6,
        income: 0.9,
        education: 0.9,
        traffic: 0.4,
    },
};

/// Standard business profiles in catalog order.
pub const BUSINESS_CATALOG: [BusinessProfile; 5] =
    [CAFE, RESTAURANT, RETAIL_STORE, GYM, COWORKING_SPACE];

const DOMINOS: FranchiseProfile = FranchiseProfile {
    brand: FranchiseBrand::Dominos,
    category: FranchiseCategory::FoodAndBeverage,
    base_investment: 30_000_000.0,
    brand_strength: 90.0,
    support_rating: 85.0,
    requirements: &[
        "2000+ sq ft space",
        "High street location",
        "3+ years business experience",
        "Liquid capital of ₹1 Cr",
    ],
    contact: Some(FranchiseContact {
        phone: "+91-1800-123-4567",
        email: "franchise@dominos.in",
        website: "https://www.dominos.co.in/franchise",
        address: "Domino's Pizza India, DLF Phase-3, Gurugram",
    }),
    advantages: &[
        "Global brand recognition",
        "Proven business model",
        "Comprehensive training program",
        "Supply chain support",
        "Marketing assistance",
    ],
};

const SUBWAY: FranchiseProfile = FranchiseProfile {
    brand: FranchiseBrand::Subway,
    category: FranchiseCategory::FoodAndBeverage,
    base_investment: 20_000_000.0,
    brand_strength: 85.0,
    support_rating: 80.0,
    requirements: &[
        "300-1000 sq ft space",
        "High visibility location",
        "Basic business experience",
        "Liquid capital of ₹50 Lakhs",
    ],
    contact: Some(FranchiseContact {
        phone: "+91-1800-987-6543",
        email: "franchise@subway.in",
        website: "https://www.subway.com/en-IN/OwnAFranchise",
        address: "Subway India, Cyber City, Gurugram",
    }),
    advantages: &[
        "Low initial investment",
        "Flexible location options",
        "Strong brand value",
        "Operational support",
        "Regular menu innovation",
    ],
};

const PRESTIGE_SMART_KITCHEN: FranchiseProfile = FranchiseProfile {
    brand: FranchiseBrand::PrestigeSmartKitchen,
    category: FranchiseCategory::Retail,
    base_investment: 15_000_000.0,
    brand_strength: 75.0,
    support_rating: 70.0,
    requirements: &[
        "800-1200 sq ft space",
        "Prime location",
        "Retail experience preferred",
        "Investment capacity of ₹1.5 Cr",
    ],
    contact: Some(FranchiseContact {
        phone: "+91-1800-456-7890",
        email: "franchise@prestigekitchen.in",
        website: "https://www.prestigekitchen.in/franchise",
        address: "Prestige Group, Bangalore",
    }),
    advantages: &[
        "Established brand name",
        "Quality product range",
        "Marketing support",
        "Technical training",
        "Territory protection",
    ],
};

const VLCC: FranchiseProfile = FranchiseProfile {
    brand: FranchiseBrand::Vlcc,
    category: FranchiseCategory::HealthAndWellness,
    base_investment: 25_000_000.0,
    brand_strength: 80.0,
    support_rating: 75.0,
    requirements: &[
        "1500+ sq ft space",
        "Commercial location",
        "Healthcare background preferred",
        "Investment capacity of ₹2.5 Cr",
    ],
    contact: Some(FranchiseContact {
        phone: "+91-1800-234-5678",
        email: "franchise@vlcc.in",
        website: "https://www.vlcc.in/franchise",
        address: "VLCC India, Noida",
    }),
    advantages: &[
        "Premium brand positioning",
        "Comprehensive training",
        "Marketing support",
        "Product supply chain",
        "Technical expertise",
    ],
};

const CHAI_POINT: FranchiseProfile = FranchiseProfile {
    brand: FranchiseBrand::ChaiPoint,
    category: FranchiseCategory::FoodAndBeverage,
    base_investment: 10_000_000.0,
    brand_strength: 70.0,
    support_rating: 80.0,
    requirements: &[
        "150-400 sq ft space",
        "High footfall area",
        "F&B experience preferred",
        "Investment capacity of ₹1 Cr",
    ],
    contact: Some(FranchiseContact {
        phone: "+91-1800-345-6789",
        email: "franchise@chaipoint.com",
        website: "https://www.chaipoint.com/franchise",
        address: "Chai Point, Bangalore",
    }),
    advantages: &[
        "Low investment requirement",
        "Quick ROI",
        "Strong supply chain",
        "Technology support",
        "Brand recognition",
    ],
};

/// Franchise profiles in catalog order.
pub const FRANCHISE_CATALOG: [FranchiseProfile; 5] =
    [DOMINOS, SUBWAY, PRESTIGE_SMART_KITCHEN, VLCC, CHAI_POINT];

impl BusinessKind {
    /// Static economics of this kind.
    #[must_use]
    pub const fn profile(self) -> &'static BusinessProfile {
        match self {
            Self::Cafe => &CAFE,
            Self::Restaurant => &RESTAURANT,
            Self::RetailStore => &RETAIL_STORE,
            Self::Gym => &GYM,
            Self::CoworkingSpace => &COWORKING_SPACE,
        }
    }
}

impl FranchiseBrand {
    /// Static economics and metadata of this brand.
    #[must_use]
    pub const fn profile(self) -> &'static FranchiseProfile {
        match self {
            Self::Dominos => &DOMINOS,
            Self::Subway => &SUBWAY,
            Self::PrestigeSmartKitchen => &PRESTIGE_SMART_KITCHEN,
            Self::Vlcc => &VLCC,
            Self::ChaiPoint => &CHAI_POINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn catalog_order_matches_enumeration() {
        let kinds: Vec<_> = BUSINESS_CATALOG.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, BusinessKind::ALL);
        let brands: Vec<_> = FRANCHISE_CATALOG.iter().map(|p| p.brand).collect();
        assert_eq!(brands, FranchiseBrand::ALL);
    }

    #[rstest]
    fn lookup_returns_matching_profile() {
        for kind in BusinessKind::ALL {
            assert_eq!(kind.profile().kind, kind);
        }
        for brand in FranchiseBrand::ALL {
            assert_eq!(brand.profile().brand, brand);
        }
    }

    #[rstest]
    fn coefficients_lie_in_unit_interval() {
        for profile in BUSINESS_CATALOG {
            let w = profile.weights;
            for value in [w.population, w.income, w.education, w.traffic, profile.profit_margin] {
                assert!((0.0..=1.0).contains(&value), "{:?}: {value}", profile.kind);
            }
            assert!(profile.base_investment > 0.0);
            assert!(profile.base_revenue > 0.0);
        }
    }

    #[rstest]
    fn franchises_carry_metadata() {
        for profile in FRANCHISE_CATALOG {
            assert_eq!(profile.requirements.len(), 4);
            assert_eq!(profile.advantages.len(), 5);
            assert!(profile.contact.is_some());
            assert!((0.0..=100.0).contains(&profile.brand_strength));
        }
    }
}
