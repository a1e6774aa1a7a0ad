//! Static planning data behind the business-idea analysis.

use sitewise_core::BusinessKind;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Category of a resource a venture needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ResourceKind {
    /// Capital and credit.
    Financial,
    /// Staff and skills.
    Human,
    /// Premises, equipment and stock.
    Physical,
    /// Know-how and brand assets.
    Intellectual,
    /// Software and connectivity.
    Digital,
}

/// Resource requirement before location adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceTemplate {
    /// Resource name.
    pub name: &'static str,
    /// Resource category.
    pub kind: ResourceKind,
    /// Availability out of 100 in a neutral location.
    pub base_availability: f64,
    /// Cost in INR in a neutral location.
    pub base_cost: f64,
    /// Importance out of 100.
    pub importance: u8,
}

/// Operational risk before location adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskTemplate {
    /// Risk name.
    pub name: &'static str,
    /// Probability out of 100 in a neutral location.
    pub base_probability: f64,
    /// Impact out of 100 in a neutral location.
    pub base_impact: f64,
    /// Suggested mitigation.
    pub mitigation: &'static str,
}

/// Direction a market trend is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TrendDirection {
    /// Growing.
    Up,
    /// Shrinking.
    Down,
    /// Flat.
    Stable,
}

/// Effect a trend has on the venture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TrendImpact {
    /// Helps the venture.
    Positive,
    /// Hurts the venture.
    Negative,
    /// Neither.
    Neutral,
}

/// Market trend relevant to a business kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MarketTrend {
    /// Trend name.
    pub name: &'static str,
    /// Direction of travel.
    pub direction: TrendDirection,
    /// Effect on the venture.
    pub impact: TrendImpact,
    /// One-line summary.
    pub description: &'static str,
    /// Horizon, e.g. `2-4 years`.
    pub timeframe: &'static str,
}

/// Planning data for one business kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdeaProfile {
    /// Kind the data describes.
    pub kind: BusinessKind,
    /// Success probability in a neutral location.
    pub base_success_probability: f64,
    /// Annual ROI percentage in a neutral location.
    pub base_roi: f64,
    /// Break-even period in months in a neutral location.
    pub break_even_months: f64,
    /// Weight of the population factor.
    pub population_weight: f64,
    /// Weight of the income factor.
    pub income_weight: f64,
    /// Weight of the education factor.
    pub education_weight: f64,
    /// How strongly competitors erode success.
    pub competitor_impact: f64,
    /// Resources required.
    pub resources: &'static [ResourceTemplate],
    /// Operational risks.
    pub risks: &'static [RiskTemplate],
    /// Relevant market trends.
    pub trends: &'static [MarketTrend],
    /// Possible differentiators.
    pub advantages: &'static [&'static str],
}

/// Kind of organisation running a support programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ProgramKind {
    /// Central or state government scheme.
    Government,
    /// Private accelerator or investor network.
    Private,
    /// Industry body or non-profit.
    #[cfg_attr(feature = "serde", serde(rename = "NGO"))]
    Ngo,
    /// University or research institute.
    Academic,
}

/// How to reach a support programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProgramContact {
    /// Programme website.
    pub website: &'static str,
    /// Contact email.
    pub email: &'static str,
    /// Contact phone number.
    pub phone: &'static str,
}

/// Funding or mentoring programme available to founders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SupportProgram {
    /// Programme name.
    pub name: &'static str,
    /// Organisation running it.
    pub provider: &'static str,
    /// Organisation type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ProgramKind,
    /// What participants receive.
    pub benefit: &'static str,
    /// Who may apply.
    pub eligibility: &'static str,
    /// How to apply.
    pub application_process: &'static str,
    /// Contact details.
    #[cfg_attr(feature = "serde", serde(rename = "contactInfo"))]
    pub contact: ProgramContact,
}

const fn resource(
    name: &'static str,
    kind: ResourceKind,
    base_availability: f64,
    base_cost: f64,
    importance: u8,
) -> ResourceTemplate {
    ResourceTemplate {
        name,
        kind,
        base_availability,
        base_cost,
        importance,
    }
}

const fn risk(
    name: &'static str,
    base_probability: f64,
    base_impact: f64,
    mitigation: &'static str,
) -> RiskTemplate {
    RiskTemplate {
        name,
        base_probability,
        base_impact,
        mitigation,
    }
}

const fn rising(
    name: &'static str,
    impact: TrendImpact,
    description: &'static str,
    timeframe: &'static str,
) -> MarketTrend {
    MarketTrend {
        name,
        direction: TrendDirection::Up,
        impact,
        description,
        timeframe,
    }
}

use ResourceKind::{Digital, Human, Physical};
use TrendImpact::{Neutral, Positive};

const CAFE: IdeaProfile = IdeaProfile {
    kind: BusinessKind::Cafe,
    base_success_probability: 65.0,
    base_roi: 35.0,
    break_even_months: 18.0,
    population_weight: 0.8,
    income_weight: 0.7,
    education_weight: 0.6,
    competitor_impact: 0.9,
    resources: &[
        resource("Coffee Equipment", Physical, 75.0, 500_000.0, 90),
        resource("Trained Baristas", Human, 60.0, 300_000.0, 85),
        resource("Coffee Beans Supply", Physical, 80.0, 200_000.0, 95),
        resource("Interior Design", Physical, 70.0, 400_000.0, 75),
        resource("POS System", Digital, 90.0, 100_000.0, 70),
    ],
    risks: &[
        risk(
            "High Rent",
            70.0,
            80.0,
            "Negotiate long-term lease with caps on increases",
        ),
        risk(
            "Staff Turnover",
            60.0,
            50.0,
            "Competitive wages and career development opportunities",
        ),
        risk(
            "Supply Chain Disruption",
            40.0,
            70.0,
            "Multiple suppliers and local sourcing where possible",
        ),
        risk(
            "Changing Consumer Preferences",
            50.0,
            60.0,
            "Regular menu updates and customer feedback loops",
        ),
    ],
    trends: &[
        rising(
            "Specialty Coffee Demand",
            Positive,
            "Growing interest in artisanal and specialty coffee",
            "3-5 years",
        ),
        rising(
            "Remote Work Culture",
            Positive,
            "Increased demand for \"third places\" to work from",
            "2-4 years",
        ),
        rising(
            "Health Consciousness",
            Neutral,
            "Growing demand for healthier food and drink options",
            "1-3 years",
        ),
        rising(
            "Sustainability Focus",
            Positive,
            "Increased consumer preference for eco-friendly businesses",
            "3-7 years",
        ),
    ],
    advantages: &[
        "Unique specialty coffee blends not available elsewhere",
        "Comfortable workspace environment with reliable high-speed internet",
        "Extended operating hours compared to competitors",
        "Loyalty program with personalized recommendations",
        "Partnership with local bakeries for fresh pastries",
    ],
};

const RESTAURANT: IdeaProfile = IdeaProfile {
    kind: BusinessKind::Restaurant,
    base_success_probability: 55.0,
    base_roi: 40.0,
    break_even_months: 24.0,
    population_weight: 0.9,
    income_weight: 0.8,
    education_weight: 0.5,
    competitor_impact: 0.8,
    resources: &[
        resource("Kitchen Equipment", Physical, 80.0, 1_500_000.0, 95),
        resource("Skilled Chefs", Human, 50.0, 800_000.0, 90),
        resource("Fresh Ingredients Supply", Physical, 70.0, 500_000.0, 95),
        resource("Restaurant Space", Physical, 60.0, 2_000_000.0, 85),
        resource("Reservation System", Digital, 90.0, 150_000.0, 70),
    ],
    risks: &[
        risk(
            "Food Cost Inflation",
            75.0,
            80.0,
            "Dynamic menu pricing and seasonal ingredients",
        ),
        risk(
            "Chef Turnover",
            65.0,
            85.0,
            "Competitive compensation and creative freedom",
        ),
        risk(
            "Regulatory Compliance",
            50.0,
            70.0,
            "Regular training and compliance audits",
        ),
        risk(
            "Changing Dining Trends",
            60.0,
            75.0,
            "Menu innovation and customer feedback analysis",
        ),
    ],
    trends: &[
        rising(
            "Food Delivery Demand",
            Positive,
            "Continued growth in delivery and takeout options",
            "2-4 years",
        ),
        rising(
            "Plant-Based Options",
            Positive,
            "Increasing demand for vegetarian and vegan menu items",
            "3-5 years",
        ),
        rising(
            "Experience Dining",
            Positive,
            "Growing preference for unique dining experiences",
            "2-5 years",
        ),
        rising(
            "Local Sourcing",
            Positive,
            "Increased consumer interest in locally sourced ingredients",
            "3-6 years",
        ),
    ],
    advantages: &[
        "Signature dishes unique to your restaurant",
        "Farm-to-table concept with local ingredient sourcing",
        "Open kitchen concept for transparency and entertainment",
        "Chefs tasting menu with seasonal rotations",
        "Specialized cuisine underrepresented in the area",
    ],
};

const RETAIL_STORE: IdeaProfile = IdeaProfile {
    kind: BusinessKind::RetailStore,
    base_success_probability: 60.0,
    base_roi: 30.0,
    break_even_months: 30.0,
    population_weight: 0.7,
    income_weight: 0.9,
    education_weight: 0.4,
    competitor_impact: 0.7,
    resources: &[
        resource("Retail Space", Physical, 70.0, 1_200_000.0, 90),
        resource("Inventory", Physical, 85.0, 1_500_000.0, 95),
        resource("Sales Staff", Human, 80.0, 500_000.0, 75),
        resource("Store Fixtures", Physical, 90.0, 400_000.0, 70),
        resource("Inventory Management System", Digital, 85.0, 200_000.0, 80),
    ],
    risks: &[
        risk(
            "E-commerce Competition",
            85.0,
            90.0,
            "Omnichannel strategy with unique in-store experiences",
        ),
        risk(
            "Inventory Management",
            70.0,
            75.0,
            "Just-in-time inventory and data-driven purchasing",
        ),
        risk(
            "Seasonal Fluctuations",
            80.0,
            60.0,
            "Diversified product mix and seasonal promotions",
        ),
        risk(
            "Theft and Shrinkage",
            60.0,
            50.0,
            "Security systems and inventory control procedures",
        ),
    ],
    trends: &[
        rising(
            "Experiential Retail",
            Positive,
            "Growing demand for unique in-store experiences",
            "2-5 years",
        ),
        rising(
            "Omnichannel Shopping",
            Neutral,
            "Consumers expect seamless online and offline integration",
            "1-3 years",
        ),
        rising(
            "Sustainable Products",
            Positive,
            "Increasing preference for eco-friendly and sustainable goods",
            "3-7 years",
        ),
        rising(
            "Personalization",
            Positive,
            "Growing demand for personalized products and services",
            "2-4 years",
        ),
    ],
    advantages: &[
        "Curated product selection not available at mass retailers",
        "In-store events and workshops to build community",
        "Personalized shopping assistance and styling services",
        "Flexible return policy compared to competitors",
        "Exclusive product lines or local artisan partnerships",
    ],
};

const GYM: IdeaProfile = IdeaProfile {
    kind: BusinessKind::Gym,
    base_success_probability: 70.0,
    base_roi: 45.0,
    break_even_months: 20.0,
    population_weight: 0.8,
    income_weight: 0.7,
    education_weight: 0.8,
    competitor_impact: 0.6,
    resources: &[
        resource("Fitness Equipment", Physical, 85.0, 2_500_000.0, 95),
        resource("Qualified Trainers", Human, 70.0, 800_000.0, 90),
        resource("Gym Space", Physical, 65.0, 1_800_000.0, 85),
        resource("Membership Management System", Digital, 90.0, 300_000.0, 75),
        resource("Locker Room Facilities", Physical, 80.0, 600_000.0, 70),
    ],
    risks: &[
        risk(
            "Seasonal Membership Fluctuations",
            80.0,
            60.0,
            "Annual membership incentives and seasonal promotions",
        ),
        risk(
            "Equipment Maintenance",
            70.0,
            65.0,
            "Regular maintenance schedule and equipment warranties",
        ),
        risk(
            "Trainer Turnover",
            60.0,
            70.0,
            "Competitive compensation and professional development",
        ),
        risk(
            "Fitness Trend Changes",
            75.0,
            80.0,
            "Diverse class offerings and regular program updates",
        ),
    ],
    trends: &[
        rising(
            "Functional Fitness",
            Positive,
            "Growing interest in functional training and HIIT workouts",
            "2-5 years",
        ),
        rising(
            "Digital Fitness Integration",
            Neutral,
            "Increasing demand for hybrid in-person and digital offerings",
            "1-4 years",
        ),
        rising(
            "Wellness Focus",
            Positive,
            "Shift from pure fitness to overall wellness and recovery",
            "3-6 years",
        ),
        rising(
            "Community-Based Fitness",
            Positive,
            "Growing preference for community and group fitness experiences",
            "2-5 years",
        ),
    ],
    advantages: &[
        "Specialized equipment or training methodology not available at other gyms",
        "Extended hours compared to competitors",
        "Comprehensive wellness services beyond just fitness",
        "Community events and challenges to increase engagement",
        "Personalized fitness tracking and progress monitoring",
    ],
};

const COWORKING_SPACE: IdeaProfile = IdeaProfile {
    kind: BusinessKind::CoworkingSpace,
    base_success_probability: 75.0,
    base_roi: 35.0,
    break_even_months: 36.0,
    population_weight: 0.6,
    income_weight: 0.9,
    education_weight: 0.9,
    competitor_impact: 0.7,
    resources: &[
        resource("Office Space", Physical, 75.0, 3_000_000.0, 95),
        resource("High-Speed Internet", Digital, 90.0, 500_000.0, 95),
        resource("Office Furniture", Physical, 95.0, 1_000_000.0, 85),
        resource("Booking System", Digital, 90.0, 200_000.0, 80),
        resource("Support Staff", Human, 85.0, 600_000.0, 75),
    ],
    risks: &[
        risk(
            "Remote Work Policies",
            70.0,
            85.0,
            "Target freelancers and small businesses, not just corporate remote workers",
        ),
        risk(
            "Long-Term Lease Commitments",
            75.0,
            90.0,
            "Flexible lease terms and subletting options",
        ),
        risk(
            "Technology Failures",
            50.0,
            80.0,
            "Redundant systems and backup internet connections",
        ),
        risk(
            "Occupancy Fluctuations",
            65.0,
            70.0,
            "Diverse membership options and event space rentals",
        ),
    ],
    trends: &[
        rising(
            "Hybrid Work Models",
            Positive,
            "Growing adoption of hybrid remote/office work arrangements",
            "2-5 years",
        ),
        rising(
            "Suburban Coworking",
            Positive,
            "Increasing demand for coworking spaces outside city centers",
            "3-6 years",
        ),
        rising(
            "Enterprise Coworking",
            Positive,
            "More corporations using flexible workspaces for distributed teams",
            "2-4 years",
        ),
        rising(
            "Specialized Workspaces",
            Positive,
            "Growing demand for industry-specific coworking environments",
            "3-7 years",
        ),
    ],
    advantages: &[
        "Industry-specific amenities and resources",
        "Premium technology infrastructure beyond basic internet",
        "Flexible 24/7 access compared to limited hours elsewhere",
        "Community programming and networking opportunities",
        "Partnerships with local businesses for member benefits",
    ],
};

/// Planning data for every business kind, in [`BusinessKind::ALL`] order.
pub const IDEA_CATALOG: [IdeaProfile; 5] = [CAFE, RESTAURANT, RETAIL_STORE, GYM, COWORKING_SPACE];

/// Planning data for `kind`.
#[must_use]
pub const fn idea_profile(kind: BusinessKind) -> &'static IdeaProfile {
    match kind {
        BusinessKind::Cafe => &CAFE,
        BusinessKind::Restaurant => &RESTAURANT,
        BusinessKind::RetailStore => &RETAIL_STORE,
        BusinessKind::Gym => &GYM,
        BusinessKind::CoworkingSpace => &COWORKING_SPACE,
    }
}

const fn program(
    name: &'static str,
    provider: &'static str,
    kind: ProgramKind,
    benefit: &'static str,
    eligibility: &'static str,
    application_process: &'static str,
    contact: [&'static str; 3],
) -> SupportProgram {
    let [website, email, phone] = contact;
    SupportProgram {
        name,
        provider,
        kind,
        benefit,
        eligibility,
        application_process,
        contact: ProgramContact {
            website,
            email,
            phone,
        },
    }
}

/// Support programmes a founder can be pointed at.
pub const SUPPORT_PROGRAMS: [SupportProgram; 10] = [
    program(
        "MSME Business Loan Scheme",
        "Ministry of Micro, Small & Medium Enterprises",
        ProgramKind::Government,
        "Low-interest loans up to ₹2 Cr with minimal collateral requirements",
        "Registered MSMEs with 2+ years of operation",
        "Online application through MSME portal with business plan submission",
        ["https://msme.gov.in", "info@msme.gov.in", "1800-111-555"],
    ),
    program(
        "Startup India Seed Fund",
        "Department for Promotion of Industry and Internal Trade",
        ProgramKind::Government,
        "Seed funding up to ₹50 lakhs for early-stage startups",
        "DPIIT-recognized startups less than 2 years old",
        "Application through Startup India portal with pitch deck",
        [
            "https://startupindia.gov.in",
            "dipp-startups@gov.in",
            "1800-115-565",
        ],
    ),
    program(
        "SIDBI Assistance to Micro Enterprises",
        "Small Industries Development Bank of India",
        ProgramKind::Government,
        "Term loans and working capital up to ₹50 lakhs",
        "Micro enterprises with viable business plans",
        "Apply through SIDBI portal or nearest branch",
        ["https://sidbi.in", "info@sidbi.in", "1800-226-753"],
    ),
    program(
        "Entrepreneurship Development Program",
        "National Institute for Entrepreneurship and Small Business Development",
        ProgramKind::Government,
        "Training, mentorship, and networking opportunities",
        "Aspiring and existing entrepreneurs",
        "Register for programs through NIESBUD website",
        ["https://niesbud.nic.in", "info@niesbud.nic.in", "0120-2403051"],
    ),
    program(
        "Business Accelerator Program",
        "TiE (The Indus Entrepreneurs)",
        ProgramKind::Private,
        "Mentorship, networking, and potential investor connections",
        "Early-stage businesses with growth potential",
        "Apply during cohort intake periods through TiE website",
        ["https://tie.org", "info@tie.org", "080-4147-2222"],
    ),
    program(
        "Women Entrepreneurship Platform",
        "NITI Aayog",
        ProgramKind::Government,
        "Incubation, funding access, and mentorship for women entrepreneurs",
        "Women-owned or women-led businesses",
        "Register on the WEP portal",
        ["https://wep.gov.in", "wep@gov.in", "011-2309-6574"],
    ),
    program(
        "Angel Investment Network",
        "Indian Angel Network",
        ProgramKind::Private,
        "Access to angel investors and funding opportunities",
        "Startups with innovative business models and growth potential",
        "Submit business plan through IAN website",
        [
            "https://indianangelnetwork.com",
            "info@indianangelnetwork.com",
            "011-4232-6025",
        ],
    ),
    program(
        "Incubation Program",
        "T-Hub",
        ProgramKind::Private,
        "Workspace, mentorship, and investor connections",
        "Tech startups with innovative solutions",
        "Apply during cohort intake through T-Hub website",
        ["https://t-hub.co", "info@t-hub.co", "040-4567-8300"],
    ),
    program(
        "Business Development Services",
        "Federation of Indian Chambers of Commerce & Industry",
        ProgramKind::Ngo,
        "Business advisory, market linkages, and policy advocacy",
        "FICCI members and SMEs",
        "Register through FICCI website",
        ["https://ficci.in", "ficci@ficci.com", "011-2373-8760"],
    ),
    program(
        "Entrepreneurship Research Program",
        "Indian Institute of Management",
        ProgramKind::Academic,
        "Research support, business model validation, and academic resources",
        "Innovative business concepts with research components",
        "Submit research proposal to relevant IIM",
        ["https://iim.ac.in", "research@iim.ac.in", "080-2699-3000"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn catalog_follows_kind_order() {
        let kinds: Vec<_> = IDEA_CATALOG.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, BusinessKind::ALL);
        for kind in BusinessKind::ALL {
            assert_eq!(idea_profile(kind).kind, kind);
        }
    }

    #[rstest]
    fn every_kind_is_fully_described() {
        for profile in &IDEA_CATALOG {
            assert_eq!(profile.resources.len(), 5, "{}", profile.kind);
            assert_eq!(profile.risks.len(), 4, "{}", profile.kind);
            assert_eq!(profile.trends.len(), 4, "{}", profile.kind);
            assert_eq!(profile.advantages.len(), 5, "{}", profile.kind);
            assert!(profile.trends.iter().all(|t| t.timeframe.ends_with("years")));
        }
    }

    #[rstest]
    fn programme_names_are_unique() {
        let mut names: Vec<_> = SUPPORT_PROGRAMS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SUPPORT_PROGRAMS.len());
    }
}
