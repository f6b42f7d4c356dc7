//! Static narrative for the four presentation pages.
//!
//! All text is hardcoded. The views lay it out; nothing here is computed.

use serde::Serialize;

// ── Pages ─────────────────────────────────────────────────────────────────────

/// The presentation's top-level tabs, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Analysis,
    Solutions,
    Data,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Analysis, Page::Solutions, Page::Data];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Analysis => "Analysis",
            Page::Solutions => "Solutions",
            Page::Data => "Data",
        }
    }

    /// Position in `Page::ALL`.
    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::Analysis => 1,
            Page::Solutions => 2,
            Page::Data => 3,
        }
    }

    /// The next tab, wrapping around.
    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    /// The previous tab, wrapping around.
    pub fn prev(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

pub const SITE_TITLE: &str = "Rural Healthcare Workforce Analysis";

// ── Home ──────────────────────────────────────────────────────────────────────

pub const HOME_HEADING: &str = "Rural Healthcare Workforce Shortage in India";

pub const HOME_INTRO: [&str; 2] = [
    "Rural India faces a persistent shortage of trained healthcare workers despite various \
     government incentives and programs. This shortage affects approximately 70% of India's \
     population but has access to less than 30% of the country's doctors.",
    "The WHO recommends a doctor-to-population ratio of 1:1,000, but rural India's ratio hovers \
     around 1:10,000 in many states. This analysis applies systems thinking to understand why \
     this problem persists and identify effective interventions.",
];

pub const KEY_FINDINGS: [&str; 4] = [
    "Powerful reinforcing feedback loops maintain workforce shortages",
    "Current interventions often target symptoms, not structural causes",
    "Medical education, professional isolation, and living conditions are key drivers",
    "Long-term structural changes offer the highest leverage for improvement",
];

pub const DENSITY_CHART_TITLE: &str = "Physician Density in India (per 1,000 people)";
pub const DIAGRAM_TITLE: &str = "System Dynamics Diagram";
pub const DIAGRAM_CAPTION: &str = "The Causal Loop Diagram illustrates key variables and \
     relationships perpetuating rural healthcare workforce shortages.";

// ── Analysis ──────────────────────────────────────────────────────────────────

pub const CORE_VARIABLES: [&str; 7] = [
    "Rural Healthcare Workforce",
    "Working Conditions",
    "Workload per HCW",
    "Urban Migration",
    "Quality of Healthcare",
    "Professional Isolation",
    "Government Incentives",
];

/// A signed causal relationship between two variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub from: &'static str,
    pub to: &'static str,
    /// `'+'` when both move together, `'-'` when they move in opposition.
    pub polarity: char,
    pub explanation: &'static str,
}

pub const KEY_RELATIONSHIPS: [Relationship; 5] = [
    Relationship {
        from: "Rural Healthcare Workforce",
        to: "Quality of Rural Healthcare",
        polarity: '+',
        explanation: "More workers improve care quality",
    },
    Relationship {
        from: "Urban Migration",
        to: "Rural Healthcare Workforce",
        polarity: '-',
        explanation: "Migration reduces available workforce",
    },
    Relationship {
        from: "Rural Healthcare Workforce",
        to: "Workload per HCW",
        polarity: '-',
        explanation: "Fewer workers means higher workload",
    },
    Relationship {
        from: "Working Conditions",
        to: "Urban Migration",
        polarity: '+',
        explanation: "Poor conditions drive migration",
    },
    Relationship {
        from: "Professional Isolation",
        to: "Urban Migration",
        polarity: '+',
        explanation: "Isolation pushes workers to urban areas",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoopKind {
    Reinforcing,
    Balancing,
}

impl LoopKind {
    pub fn label(self) -> &'static str {
        match self {
            LoopKind::Reinforcing => "Reinforcing",
            LoopKind::Balancing => "Balancing",
        }
    }
}

/// A named feedback loop and the chain of effects it runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackLoop {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: LoopKind,
    pub chain: &'static [&'static str],
}

pub const FEEDBACK_LOOPS: [FeedbackLoop; 3] = [
    FeedbackLoop {
        id: "R1",
        name: "Workforce Decline Loop",
        kind: LoopKind::Reinforcing,
        chain: &[
            "Fewer workers",
            "Higher workload",
            "Worse working conditions",
            "Increased migration",
            "Even fewer workers",
        ],
    },
    FeedbackLoop {
        id: "R2",
        name: "Healthcare Quality Loop",
        kind: LoopKind::Reinforcing,
        chain: &[
            "Lower workforce",
            "Lower quality",
            "Poorer outcomes",
            "Lower living standards",
            "More migration",
            "Lower workforce",
        ],
    },
    FeedbackLoop {
        id: "B1",
        name: "Government Intervention",
        kind: LoopKind::Balancing,
        chain: &[
            "Lower workforce",
            "More government incentives",
            "(Attempts to increase) workforce",
        ],
    },
];

/// A headed list of bullet points inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BulletGroup {
    /// `None` for a flat list with no sub-heading.
    pub heading: Option<&'static str>,
    pub items: &'static [&'static str],
}

pub const EVENTS: [BulletGroup; 1] = [BulletGroup {
    heading: None,
    items: &[
        "Vacant doctor positions in Primary Health Centers",
        "High absenteeism among posted rural healthcare workers",
        "Doctors abandoning rural postings before completing terms",
        "Higher mortality rates for treatable conditions in rural areas",
    ],
}];

pub const PATTERNS: [BulletGroup; 1] = [BulletGroup {
    heading: None,
    items: &[
        "Cyclical migrations from rural to urban areas",
        "Consistent failure of incentive programs",
        "Growing disparity in healthcare access",
        "Medical graduates consistently preferring urban specialties",
    ],
}];

pub const STRUCTURES: [BulletGroup; 4] = [
    BulletGroup {
        heading: Some("Education System Structure"),
        items: &[
            "Urban-centric medical education",
            "High costs driving need for high-return careers",
            "Curriculum focused on specialized care rather than primary healthcare",
        ],
    },
    BulletGroup {
        heading: Some("Career & Professional Structure"),
        items: &[
            "Limited professional development in rural settings",
            "Professional isolation from peers and mentors",
            "Higher economic returns in urban practice",
        ],
    },
    BulletGroup {
        heading: Some("Infrastructure & Resource Structure"),
        items: &[
            "Poor housing and amenities for healthcare workers",
            "Inadequate clinical infrastructure and supplies",
            "Limited technology and diagnostic equipment",
        ],
    },
    BulletGroup {
        heading: Some("Social & Cultural Structure"),
        items: &[
            "Cultural preference for urban lifestyles",
            "Social prestige of urban specialties",
            "Family resistance to rural postings",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub name: &'static str,
    pub description: &'static str,
}

pub const ARCHETYPES: [Archetype; 3] = [
    Archetype {
        name: "Success to the Successful",
        description: "Urban areas attract more healthcare workers, improving urban healthcare, \
                      which attracts even more workers, creating a widening gap.",
    },
    Archetype {
        name: "Fixes that Fail",
        description: "Short-term incentives temporarily attract workers but fail to address \
                      structural issues, ultimately leading to turnover and continued shortages.",
    },
    Archetype {
        name: "Shifting the Burden",
        description: "Relying on temporary staffing or mandatory service rather than addressing \
                      fundamental structural issues.",
    },
];

// ── Solutions ─────────────────────────────────────────────────────────────────

/// The Event-Pattern-Structure level an intervention acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Event,
    Pattern,
    Structure,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Event => "Event",
            Level::Pattern => "Pattern",
            Level::Structure => "Structure",
        }
    }
}

/// One row of the existing-solutions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Intervention {
    pub name: &'static str,
    pub level: Level,
    pub effectiveness: &'static str,
    pub limitations: &'static str,
}

pub const EXISTING_INTERVENTIONS: [Intervention; 5] = [
    Intervention {
        name: "Salary bonuses",
        level: Level::Event,
        effectiveness: "Low-Medium",
        limitations: "Temporary fix that doesn't address professional isolation",
    },
    Intervention {
        name: "Mandatory rural service",
        level: Level::Event,
        effectiveness: "Medium",
        limitations: "Creates resentment, high turnover after completion",
    },
    Intervention {
        name: "Telemedicine",
        level: Level::Pattern,
        effectiveness: "Medium",
        limitations: "Helps with consultation but not procedures or emergencies",
    },
    Intervention {
        name: "Rural medical colleges",
        level: Level::Structure,
        effectiveness: "High",
        limitations: "Long implementation timeframe, significant investment",
    },
    Intervention {
        name: "Community health worker programs",
        level: Level::Structure,
        effectiveness: "Medium-High",
        limitations: "Limited scope of practice, supervision challenges",
    },
];

pub const INTERVENTIONS_NOTE: &str = "Most current interventions operate at the event or \
     pattern level rather than addressing underlying structures, explaining their limited success.";

/// A tier of leverage points, e.g. high-impact structural interventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeverageTier {
    pub title: &'static str,
    pub groups: &'static [BulletGroup],
}

pub const LEVERAGE_POINTS: [LeverageTier; 2] = [
    LeverageTier {
        title: "High-Impact Structural Interventions",
        groups: &[
            BulletGroup {
                heading: Some("Medical Education Reform"),
                items: &[
                    "Establish rural medical colleges with local admission priority",
                    "Redesign curriculum to emphasize rural healthcare challenges",
                    "Create rural residency tracks with specialized training",
                ],
            },
            BulletGroup {
                heading: Some("Rural Professional Ecosystem Development"),
                items: &[
                    "Create \"Rural Health Career Pathways\" with clear progression",
                    "Establish \"Rural Centers of Excellence\" combining service, research, and education",
                    "Develop digital communities of practice for peer support",
                ],
            },
            BulletGroup {
                heading: Some("Family-Centered Support Systems"),
                items: &[
                    "Build quality housing and educational facilities for families",
                    "Create employment opportunities for spouses",
                    "Develop community integration programs",
                ],
            },
        ],
    },
    LeverageTier {
        title: "Medium-Impact Pattern Interventions",
        groups: &[
            BulletGroup {
                heading: Some("Technology-Enabled Rural Practice"),
                items: &[
                    "Implement telemedicine infrastructure connecting to specialists",
                    "Deploy point-of-care diagnostic technologies",
                    "Create digital decision support systems",
                ],
            },
            BulletGroup {
                heading: Some("Professional Development Networks"),
                items: &[
                    "Create regional hubs for continuing education",
                    "Establish mentorship programs with experienced specialists",
                    "Develop rural healthcare research networks",
                ],
            },
        ],
    },
];

pub const IMPLEMENTATION_PRIORITIES: [BulletGroup; 3] = [
    BulletGroup {
        heading: Some("Short-term Actions (1-2 years)"),
        items: &[
            "Enhance financial incentives for existing practitioners",
            "Deploy telemedicine infrastructure to reduce isolation",
            "Improve basic housing and security",
            "Create digital communities of practice",
        ],
    },
    BulletGroup {
        heading: Some("Medium-term Development (3-5 years)"),
        items: &[
            "Launch rural-focused tracks in existing institutions",
            "Implement revised curricula with rural components",
            "Establish regional excellence centers",
            "Create formal mentorship programs",
        ],
    },
    BulletGroup {
        heading: Some("Long-term Transformation (5-10 years)"),
        items: &[
            "Complete network of rural medical education institutions",
            "Fully implement rural career progression pathways",
            "Reform healthcare financing to strengthen rural practice",
        ],
    },
];

// ── Data ──────────────────────────────────────────────────────────────────────

pub const DATA_HEADING: &str = "Healthcare Workforce Data";
pub const RATIO_CHART_TITLE: &str = "Doctor-to-Population Ratio by State";
pub const RATIO_CHART_SUBTITLE: &str = "Population per doctor (lower is better)";
pub const VACANCY_CHART_TITLE: &str = "Vacancy Rates (%)";
pub const SHORTAGE_CHART_TITLE: &str = "Workforce Shortages (thousands)";
pub const LOADING_MESSAGE: &str = "Loading healthcare data...";

pub const DATA_SOURCES: [&str; 3] = [
    "Physician density data from World Bank API \
     (https://api.worldbank.org/v2/country/IN/indicator/SH.MED.PHYS.ZS?format=json)",
    "Vacancy rates from Rural Health Statistics 2021-22, Government of India",
    "Workforce shortage estimates from WHO and National Health Profile",
];
