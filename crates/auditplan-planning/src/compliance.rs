//! Financial reporting and compliance catalog
//!
//! Every sector shares the same reporting and internal-control backbone; the
//! third and fourth objectives and the scope items vary by industry.

use crate::catalog::RawTemplate;

pub(crate) const TEMPLATES: &[RawTemplate] = &[
    RawTemplate {
        sector: "Technology",
        objectives: &[
            "Evaluate financial reporting accuracy and completeness",
            "Assess internal controls over financial reporting",
            "Review revenue recognition policies and practices",
            "Analyze expense management and cost controls",
        ],
        scope: &[
            "Financial statements and disclosures",
            "Revenue recognition and billing systems",
            "Expense management and cost controls",
            "Internal controls over financial reporting",
            "Tax compliance and reporting",
        ],
        high: &[
            "Revenue recognition",
            "Financial reporting accuracy",
            "Internal control weaknesses",
        ],
        medium: &[
            "Expense management",
            "Tax compliance",
            "Financial disclosures",
        ],
        low: &[
            "Documentation",
            "Administrative processes",
            "IT systems",
        ],
    },
    RawTemplate {
        sector: "Financial Services",
        objectives: &[
            "Evaluate financial reporting accuracy and completeness",
            "Assess internal controls over financial reporting",
            "Review compliance with financial regulations",
            "Analyze risk management frameworks",
        ],
        scope: &[
            "Financial statements and disclosures",
            "Regulatory compliance",
            "Risk management systems",
            "Internal controls over financial reporting",
            "Transaction monitoring",
        ],
        high: &[
            "Financial reporting accuracy",
            "Regulatory compliance",
            "Internal control weaknesses",
        ],
        medium: &[
            "Risk management",
            "Transaction monitoring",
            "Financial disclosures",
        ],
        low: &[
            "Documentation",
            "Administrative processes",
            "IT systems",
        ],
    },
    RawTemplate {
        sector: "Manufacturing",
        objectives: &[
            "Evaluate financial reporting accuracy and completeness",
            "Assess internal controls over financial reporting",
            "Review inventory valuation and management",
            "Analyze cost accounting systems",
        ],
        scope: &[
            "Financial statements and disclosures",
            "Inventory management and valuation",
            "Cost accounting systems",
            "Internal controls over financial reporting",
            "Tax compliance and reporting",
        ],
        high: &[
            "Inventory valuation",
            "Financial reporting accuracy",
            "Internal control weaknesses",
        ],
        medium: &[
            "Cost accounting",
            "Tax compliance",
            "Financial disclosures",
        ],
        low: &[
            "Documentation",
            "Administrative processes",
            "IT systems",
        ],
    },
    RawTemplate {
        sector: "Healthcare",
        objectives: &[
            "Evaluate financial reporting accuracy and completeness",
            "Assess internal controls over financial reporting",
            "Review revenue cycle management",
            "Analyze expense management and cost controls",
        ],
        scope: &[
            "Financial statements and disclosures",
            "Revenue cycle management",
            "Expense management and cost controls",
            "Internal controls over financial reporting",
            "Tax compliance and reporting",
        ],
        high: &[
            "Revenue recognition",
            "Financial reporting accuracy",
            "Internal control weaknesses",
        ],
        medium: &[
            "Expense management",
            "Tax compliance",
            "Financial disclosures",
        ],
        low: &[
            "Documentation",
            "Administrative processes",
            "IT systems",
        ],
    },
    RawTemplate {
        sector: "Retail",
        objectives: &[
            "Evaluate financial reporting accuracy and completeness",
            "Assess internal controls over financial reporting",
            "Review inventory valuation and management",
            "Analyze revenue recognition and sales reporting",
        ],
        scope: &[
            "Financial statements and disclosures",
            "Inventory management and valuation",
            "Revenue recognition and sales reporting",
            "Internal controls over financial reporting",
            "Tax compliance and reporting",
        ],
        high: &[
            "Inventory valuation",
            "Financial reporting accuracy",
            "Internal control weaknesses",
        ],
        medium: &[
            "Revenue recognition",
            "Tax compliance",
            "Financial disclosures",
        ],
        low: &[
            "Documentation",
            "Administrative processes",
            "IT systems",
        ],
    },
    RawTemplate {
        sector: "Energy",
        objectives: &[
            "Evaluate financial reporting accuracy and completeness",
            "Assess internal controls over financial reporting",
            "Review revenue recognition and pricing",
            "Analyze cost accounting and expense management",
        ],
        scope: &[
            "Financial statements and disclosures",
            "Revenue recognition and pricing",
            "Cost accounting and expense management",
            "Internal controls over financial reporting",
            "Tax compliance and reporting",
        ],
        high: &[
            "Revenue recognition",
            "Financial reporting accuracy",
            "Internal control weaknesses",
        ],
        medium: &[
            "Cost accounting",
            "Tax compliance",
            "Financial disclosures",
        ],
        low: &[
            "Documentation",
            "Administrative processes",
            "IT systems",
        ],
    },
    RawTemplate {
        sector: "Telecommunications",
        objectives: &[
            "Evaluate financial reporting accuracy and completeness",
            "Assess internal controls over financial reporting",
            "Review revenue recognition and billing systems",
            "Analyze expense management and cost controls",
        ],
        scope: &[
            "Financial statements and disclosures",
            "Revenue recognition and billing systems",
            "Expense management and cost controls",
            "Internal controls over financial reporting",
            "Tax compliance and reporting",
        ],
        high: &[
            "Revenue recognition",
            "Financial reporting accuracy",
            "Internal control weaknesses",
        ],
        medium: &[
            "Expense management",
            "Tax compliance",
            "Financial disclosures",
        ],
        low: &[
            "Documentation",
            "Administrative processes",
            "IT systems",
        ],
    },
    RawTemplate {
        sector: "Real Estate",
        objectives: &[
            "Evaluate financial reporting accuracy and completeness",
            "Assess internal controls over financial reporting",
            "Review property valuation and management",
            "Analyze revenue recognition and expense management",
        ],
        scope: &[
            "Financial statements and disclosures",
            "Property valuation and management",
            "Revenue recognition and expense management",
            "Internal controls over financial reporting",
            "Tax compliance and reporting",
        ],
        high: &[
            "Property valuation",
            "Financial reporting accuracy",
            "Internal control weaknesses",
        ],
        medium: &[
            "Revenue recognition",
            "Tax compliance",
            "Financial disclosures",
        ],
        low: &[
            "Documentation",
            "Administrative processes",
            "IT systems",
        ],
    },
    RawTemplate {
        sector: "Education",
        objectives: &[
            "Evaluate financial reporting accuracy and completeness",
            "Assess internal controls over financial reporting",
            "Review revenue recognition and tuition management",
            "Analyze expense management and cost controls",
        ],
        scope: &[
            "Financial statements and disclosures",
            "Revenue recognition and tuition management",
            "Expense management and cost controls",
            "Internal controls over financial reporting",
            "Tax compliance and reporting",
        ],
        high: &[
            "Revenue recognition",
            "Financial reporting accuracy",
            "Internal control weaknesses",
        ],
        medium: &[
            "Expense management",
            "Tax compliance",
            "Financial disclosures",
        ],
        low: &[
            "Documentation",
            "Administrative processes",
            "IT systems",
        ],
    },
];
