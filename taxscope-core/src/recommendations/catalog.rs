//! Static recommendation data.
//!
//! Jurisdiction entries are matched by exact jurisdiction name; several
//! jurisdictions may share one entry.

use crate::models::{Difficulty, Impact, Recommendation, Timeframe};

/// Recommendations shared by several jurisdictions.
pub struct CatalogEntry {
    pub jurisdictions: &'static [&'static str],
    pub recommendations: &'static [Recommendation],
}

/// Recommendations that apply only to some regions of a jurisdiction.
pub struct RegionalEntry {
    pub jurisdiction: &'static str,
    pub regions: &'static [&'static str],
    pub recommendations: &'static [Recommendation],
}

/// Advice that applies everywhere; always listed first.
pub const BASELINE: &[Recommendation] = &[
    Recommendation {
        title: "Retirement Account Contributions",
        description: "Maximize contributions to tax-advantaged retirement accounts to reduce taxable income.",
        impact: Impact::High,
        timeframe: Timeframe::Immediate,
        difficulty: Difficulty::Easy,
    },
    Recommendation {
        title: "Tax-Loss Harvesting",
        description: "Consider selling investments at a loss to offset capital gains.",
        impact: Impact::Medium,
        timeframe: Timeframe::Immediate,
        difficulty: Difficulty::Complex,
    },
    Recommendation {
        title: "Charitable Donations",
        description: "Make charitable contributions to eligible organizations for tax deductions.",
        impact: Impact::Medium,
        timeframe: Timeframe::Immediate,
        difficulty: Difficulty::Easy,
    },
];

pub const JURISDICTIONS: &[CatalogEntry] = &[
    CatalogEntry {
        jurisdictions: &["United States"],
        recommendations: &[
            Recommendation {
                title: "401(k) Contributions",
                description: "Contribute to your 401(k) to reduce taxable income (2024 limit: $23,000).",
                impact: Impact::High,
                timeframe: Timeframe::Immediate,
                difficulty: Difficulty::Easy,
            },
            Recommendation {
                title: "IRA Contributions",
                description: "Consider traditional IRA contributions for additional tax deductions.",
                impact: Impact::Medium,
                timeframe: Timeframe::Immediate,
                difficulty: Difficulty::Easy,
            },
        ],
    },
    CatalogEntry {
        jurisdictions: &["United Kingdom"],
        recommendations: &[
            Recommendation {
                title: "ISA Utilization",
                description: "Maximize your ISA allowance (£20,000 for 2024/25) for tax-free savings and investments.",
                impact: Impact::High,
                timeframe: Timeframe::Immediate,
                difficulty: Difficulty::Easy,
            },
            Recommendation {
                title: "Pension Contributions",
                description: "Increase pension contributions to reduce taxable income.",
                impact: Impact::High,
                timeframe: Timeframe::LongTerm,
                difficulty: Difficulty::Medium,
            },
        ],
    },
    CatalogEntry {
        jurisdictions: &["India"],
        recommendations: &[
            Recommendation {
                title: "80C Deductions",
                description: "Maximize Section 80C deductions through ELSS, PPF, or life insurance premiums.",
                impact: Impact::High,
                timeframe: Timeframe::Immediate,
                difficulty: Difficulty::Easy,
            },
            Recommendation {
                title: "NPS Investment",
                description: "Consider National Pension System (NPS) for additional tax benefits under Section 80CCD(1B).",
                impact: Impact::Medium,
                timeframe: Timeframe::LongTerm,
                difficulty: Difficulty::Medium,
            },
        ],
    },
    CatalogEntry {
        jurisdictions: &["Canada"],
        recommendations: &[
            Recommendation {
                title: "RRSP Contributions",
                description: "Contribute to your Registered Retirement Savings Plan (RRSP) to reduce taxable income.",
                impact: Impact::High,
                timeframe: Timeframe::Immediate,
                difficulty: Difficulty::Easy,
            },
            Recommendation {
                title: "TFSA Utilization",
                description: "Use your Tax-Free Savings Account (TFSA) for tax-free growth on investments.",
                impact: Impact::Medium,
                timeframe: Timeframe::LongTerm,
                difficulty: Difficulty::Easy,
            },
        ],
    },
    CatalogEntry {
        jurisdictions: &["Australia"],
        recommendations: &[
            Recommendation {
                title: "Superannuation Contributions",
                description: "Boost super contributions to benefit from tax concessions.",
                impact: Impact::High,
                timeframe: Timeframe::Immediate,
                difficulty: Difficulty::Medium,
            },
            Recommendation {
                title: "Franking Credits",
                description: "Use franking credits from dividends to reduce tax liability.",
                impact: Impact::Medium,
                timeframe: Timeframe::LongTerm,
                difficulty: Difficulty::Complex,
            },
        ],
    },
    CatalogEntry {
        jurisdictions: &["Germany"],
        recommendations: &[Recommendation {
            title: "Riester Pension Plan",
            description: "Invest in Riester pension plans for tax advantages and government subsidies.",
            impact: Impact::Medium,
            timeframe: Timeframe::LongTerm,
            difficulty: Difficulty::Medium,
        }],
    },
    CatalogEntry {
        jurisdictions: &["France"],
        recommendations: &[Recommendation {
            title: "PEA Account",
            description: "Invest through a Plan d'Épargne en Actions (PEA) for tax-free capital gains after 5 years.",
            impact: Impact::Medium,
            timeframe: Timeframe::LongTerm,
            difficulty: Difficulty::Medium,
        }],
    },
    CatalogEntry {
        jurisdictions: &["Italy"],
        recommendations: &[Recommendation {
            title: "PIR Investment Plan",
            description: "Utilize Piani Individuali di Risparmio (PIR) for tax-free capital gains after 5 years.",
            impact: Impact::Medium,
            timeframe: Timeframe::LongTerm,
            difficulty: Difficulty::Medium,
        }],
    },
    CatalogEntry {
        jurisdictions: &["Japan"],
        recommendations: &[Recommendation {
            title: "NISA Accounts",
            description: "Invest via Nippon Individual Savings Accounts (NISA) for tax-free gains up to set limits.",
            impact: Impact::Medium,
            timeframe: Timeframe::LongTerm,
            difficulty: Difficulty::Easy,
        }],
    },
    CatalogEntry {
        jurisdictions: &["South Korea"],
        recommendations: &[Recommendation {
            title: "ISA Account Usage",
            description: "Use Individual Savings Accounts (ISA) for tax exemption on capital gains.",
            impact: Impact::Medium,
            timeframe: Timeframe::LongTerm,
            difficulty: Difficulty::Medium,
        }],
    },
    CatalogEntry {
        jurisdictions: &["Mexico"],
        recommendations: &[Recommendation {
            title: "Afore Retirement Fund",
            description: "Contribute to your Afore account for retirement savings with tax benefits.",
            impact: Impact::High,
            timeframe: Timeframe::LongTerm,
            difficulty: Difficulty::Easy,
        }],
    },
    CatalogEntry {
        jurisdictions: &[
            "Saudi Arabia",
            "United Arab Emirates",
            "Bahamas",
            "Andorra",
            "Bahrain",
        ],
        recommendations: &[Recommendation {
            title: "No Personal Income Tax",
            description: "These countries do not levy personal income taxes, allowing tax-free salary income.",
            impact: Impact::High,
            timeframe: Timeframe::Immediate,
            difficulty: Difficulty::None,
        }],
    },
    CatalogEntry {
        jurisdictions: &["South Africa"],
        recommendations: &[Recommendation {
            title: "Retirement Annuity Contributions",
            description: "Contribute to retirement annuities to reduce your taxable income.",
            impact: Impact::High,
            timeframe: Timeframe::Immediate,
            difficulty: Difficulty::Easy,
        }],
    },
    CatalogEntry {
        jurisdictions: &["Brazil"],
        recommendations: &[Recommendation {
            title: "Previdência Privada (PGBL)",
            description: "Contribute to private pension plans (PGBL) for deductible contributions up to 12% of income.",
            impact: Impact::Medium,
            timeframe: Timeframe::LongTerm,
            difficulty: Difficulty::Medium,
        }],
    },
    CatalogEntry {
        jurisdictions: &["China"],
        recommendations: &[Recommendation {
            title: "Tax-Free Allowances",
            description: "Utilize special tax deductions (e.g., housing, education, medical) available to residents.",
            impact: Impact::Medium,
            timeframe: Timeframe::Immediate,
            difficulty: Difficulty::Medium,
        }],
    },
    CatalogEntry {
        jurisdictions: &["Türkiye"],
        recommendations: &[Recommendation {
            title: "BES Contributions",
            description: "Contribute to the government-supported Private Pension System (BES) for state incentives.",
            impact: Impact::Medium,
            timeframe: Timeframe::LongTerm,
            difficulty: Difficulty::Medium,
        }],
    },
    // Placeholder advice until these jurisdictions are researched.
    CatalogEntry {
        jurisdictions: &[
            "Afghanistan",
            "Antigua and Barbuda",
            "Albania",
            "Armenia",
            "Angola",
            "Azerbaijan",
            "Algeria",
        ],
        recommendations: &[Recommendation {
            title: "Basic Tax Compliance",
            description: "Ensure income is reported correctly and utilize any available local deductions.",
            impact: Impact::Low,
            timeframe: Timeframe::Immediate,
            difficulty: Difficulty::Easy,
        }],
    },
];

pub const REGIONAL: &[RegionalEntry] = &[RegionalEntry {
    jurisdiction: "United States",
    regions: &["CA", "NY"],
    recommendations: &[Recommendation {
        title: "State Tax Considerations",
        description: "Consider municipal bonds from your state for tax-free income at both federal and state levels.",
        impact: Impact::Medium,
        timeframe: Timeframe::LongTerm,
        difficulty: Difficulty::Complex,
    }],
}];
