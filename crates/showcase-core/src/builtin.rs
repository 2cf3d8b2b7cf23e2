//! # Builtin Reference Data
//!
//! The capability catalog and case-study list shipped with the site.
//! Both are validated when built; a broken entry is a build-time bug and
//! surfaces as an error, not a panic.

use crate::case_study::{CaseStudy, validate_case_studies};
use crate::{CapabilityRecord, Catalog, Industry, ShowcaseError};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn capability(
    id: &str,
    name: &str,
    vendors: &[&str],
    categories: &[&str],
    industries: &[&str],
    description: &str,
    implementation_time: &str,
    roi_range: &str,
) -> CapabilityRecord {
    CapabilityRecord {
        id: id.to_string(),
        name: name.to_string(),
        vendors: strings(vendors),
        categories: strings(categories),
        industries: industries.iter().map(|label| Industry::parse(label)).collect(),
        description: description.to_string(),
        implementation_time: implementation_time.to_string(),
        roi_range: roi_range.to_string(),
        path: format!("/solutions/capabilities/{id}"),
    }
}

/// The capability hub catalog.
pub fn builtin_catalog() -> Result<Catalog, ShowcaseError> {
    Catalog::new(vec![
        capability(
            "sap-s4hana-transformation",
            "SAP S/4HANA Transformation",
            &["SAP"],
            &["ERP", "Data & Analytics"],
            &["Manufacturing", "Retail", "Energy & Utilities"],
            "Greenfield and brownfield migrations to SAP S/4HANA with finance, supply chain and embedded analytics.",
            "9-18 months",
            "180-320%",
        ),
        capability(
            "oracle-cloud-erp",
            "Oracle Cloud ERP Modernization",
            &["Oracle"],
            &["ERP"],
            &["Financial Services", "Healthcare", "Public Sector"],
            "Move on-premise E-Business Suite estates to Oracle Fusion Cloud ERP with automated close and procurement.",
            "6-12 months",
            "150-260%",
        ),
        capability(
            "aws-cloud-migration",
            "Cloud Migration Factory",
            &["AWS", "Microsoft Azure", "Google Cloud"],
            &["Cloud Computing", "Infrastructure"],
            &["All Industries"],
            "Wave-based rehost and replatform programs with landing zones, FinOps guardrails and cutover runbooks.",
            "3-9 months",
            "120-240%",
        ),
        capability(
            "azure-data-platform",
            "Modern Data Platform",
            &["Microsoft Azure", "Databricks", "Snowflake"],
            &["Data & Analytics", "Cloud Computing"],
            &["Financial Services", "Retail", "Healthcare"],
            "Lakehouse architecture, governed data products and self-service BI on Azure, Databricks or Snowflake.",
            "4-8 months",
            "200-400%",
        ),
        capability(
            "salesforce-customer-360",
            "Salesforce Customer 360",
            &["Salesforce"],
            &["CRM", "Customer Experience"],
            &["Retail", "Financial Services", "Telecommunications"],
            "Sales, service and marketing clouds unified around a single customer profile with Data Cloud.",
            "4-10 months",
            "140-280%",
        ),
        capability(
            "servicenow-itsm",
            "ServiceNow IT Service Management",
            &["ServiceNow"],
            &["IT Operations", "Automation"],
            &["All Industries"],
            "ITIL-aligned incident, change and request management with CMDB health and virtual agent deflection.",
            "3-6 months",
            "110-200%",
        ),
        capability(
            "workday-hcm",
            "Workday HCM Deployment",
            &["Workday"],
            &["Human Capital Management"],
            &["Healthcare", "Higher Education", "Public Sector"],
            "Core HR, payroll and talent on Workday with data conversion from legacy HRIS and change management.",
            "6-9 months",
            "130-210%",
        ),
        capability(
            "dynamics-365-supply-chain",
            "Dynamics 365 Supply Chain",
            &["Microsoft"],
            &["ERP", "Supply Chain"],
            &["Manufacturing", "Distribution"],
            "Planning optimization, warehouse management and IoT-driven asset maintenance on Dynamics 365.",
            "5-10 months",
            "160-290%",
        ),
        capability(
            "google-cloud-ai",
            "Applied AI & Machine Learning",
            &["Google Cloud", "AWS"],
            &["Artificial Intelligence", "Data & Analytics"],
            &["All Industries"],
            "Demand forecasting, document understanding and generative AI assistants built on Vertex AI or SageMaker.",
            "2-6 months",
            "250-500%",
        ),
        capability(
            "sap-ariba-procurement",
            "SAP Ariba Source-to-Pay",
            &["SAP"],
            &["Procurement", "Supply Chain"],
            &["Manufacturing", "Energy & Utilities", "Public Sector"],
            "Guided buying, supplier risk and invoice automation integrated with SAP and non-SAP back ends.",
            "4-8 months",
            "140-230%",
        ),
        capability(
            "crowdstrike-zero-trust",
            "Zero Trust Security",
            &["CrowdStrike", "Palo Alto Networks", "Okta"],
            &["Cybersecurity"],
            &["All Industries"],
            "Identity-first access, endpoint detection and response, and micro-segmentation for hybrid estates.",
            "3-7 months",
            "120-190%",
        ),
        capability(
            "uipath-intelligent-automation",
            "Intelligent Process Automation",
            &["UiPath", "Microsoft"],
            &["Automation", "Artificial Intelligence"],
            &["Financial Services", "Insurance", "Healthcare"],
            "Process mining, attended and unattended bots, and document AI for claims, onboarding and reconciliation.",
            "2-5 months",
            "200-350%",
        ),
    ])
}

fn case_study(
    id: &str,
    title: &str,
    industry: &str,
    solution: &str,
    challenge: &str,
    results: &[&str],
) -> CaseStudy {
    CaseStudy {
        id: id.to_string(),
        title: title.to_string(),
        industry: Industry::parse(industry),
        solution: solution.to_string(),
        challenge: challenge.to_string(),
        results: strings(results),
        path: format!("/case-studies/{id}"),
    }
}

/// The proven case studies list.
pub fn builtin_case_studies() -> Result<Vec<CaseStudy>, ShowcaseError> {
    let studies = vec![
        case_study(
            "global-auto-parts-s4hana",
            "Global Auto Parts Supplier Moves to S/4HANA",
            "Manufacturing",
            "SAP S/4HANA",
            "Fourteen ECC instances with inconsistent master data slowed the monthly close to twelve days.",
            &["Close reduced to 4 days", "Inventory carrying cost down 18%"],
        ),
        case_study(
            "regional-health-system-workday",
            "Regional Health System Unifies HR on Workday",
            "Healthcare",
            "Workday HCM",
            "Clinician scheduling and payroll ran on three disconnected systems after a merger.",
            &["Payroll errors down 92%", "Time-to-hire cut by 11 days"],
        ),
        case_study(
            "retail-bank-data-platform",
            "Retail Bank Builds a Governed Lakehouse",
            "Financial Services",
            "Modern Data Platform",
            "Regulatory reports were assembled by hand from forty siloed data marts.",
            &["Regulatory reporting automated end to end", "Analyst hours down 60%"],
        ),
        case_study(
            "grocery-chain-customer-360",
            "Grocery Chain Personalizes Loyalty with Salesforce",
            "Retail",
            "Salesforce Customer 360",
            "Loyalty offers were generic and redemption had stalled below 3%.",
            &["Offer redemption up to 11%", "Basket size up 7%"],
        ),
        case_study(
            "utility-field-service-ai",
            "Utility Predicts Transformer Failures",
            "Energy & Utilities",
            "Applied AI & Machine Learning",
            "Unplanned transformer outages drove overtime costs and regulatory penalties.",
            &["Outages down 35%", "Maintenance overtime down 28%"],
        ),
        case_study(
            "state-agency-itsm",
            "State Agency Consolidates IT Service Desks",
            "Public Sector",
            "ServiceNow IT Service Management",
            "Nine agency help desks used separate ticketing tools with no shared knowledge base.",
            &["First-contact resolution up 40%", "Ticket backlog cleared in 8 weeks"],
        ),
    ];
    validate_case_studies(&studies)?;
    Ok(studies)
}

// =============================================================================
// TESTS
// =============================================================================
