//! Topic-focused catalog, organised around each sector's operational risks

use crate::catalog::RawTemplate;

pub(crate) const TEMPLATES: &[RawTemplate] = &[
    RawTemplate {
        sector: "Technology",
        objectives: &[
            "Evaluate cybersecurity measures and data protection protocols",
            "Assess software development lifecycle and quality control",
            "Review IT infrastructure and system reliability",
            "Examine intellectual property management",
        ],
        scope: &[
            "Information security systems",
            "Software development processes",
            "IT infrastructure",
            "Data management and privacy",
            "Intellectual property controls",
        ],
        high: &[
            "Data breaches and cybersecurity vulnerabilities",
            "Intellectual property theft",
            "System downtime and reliability issues",
        ],
        medium: &[
            "Software quality control deficiencies",
            "Regulatory compliance gaps",
            "Third-party vendor management",
        ],
        low: &[
            "Documentation inconsistencies",
            "Minor process inefficiencies",
            "Training program gaps",
        ],
    },
    RawTemplate {
        sector: "Financial Services",
        objectives: &[
            "Verify compliance with financial regulations",
            "Assess risk management practices",
            "Evaluate internal controls",
            "Review financial reporting accuracy",
        ],
        scope: &[
            "Regulatory compliance",
            "Risk management systems",
            "Internal control framework",
            "Financial reporting processes",
            "Anti-fraud measures",
        ],
        high: &[
            "Regulatory non-compliance",
            "Fraud risk",
            "Financial misstatement",
        ],
        medium: &[
            "Operational inefficiencies",
            "System access controls",
            "Data quality issues",
        ],
        low: &[
            "Documentation gaps",
            "Minor policy deviations",
            "Training needs",
        ],
    },
    RawTemplate {
        sector: "Manufacturing",
        objectives: &[
            "Evaluate production efficiency and quality control",
            "Assess supply chain management",
            "Review safety and compliance measures",
            "Examine inventory management",
        ],
        scope: &[
            "Production processes",
            "Quality control systems",
            "Supply chain operations",
            "Inventory management",
            "Safety compliance",
        ],
        high: &[
            "Quality control failures",
            "Safety violations",
            "Supply chain disruptions",
        ],
        medium: &[
            "Inventory management issues",
            "Production inefficiencies",
            "Equipment maintenance",
        ],
        low: &[
            "Documentation gaps",
            "Minor process deviations",
            "Training program updates",
        ],
    },
];
