//! Prompt construction for the reasoning oracle
//!
//! Prompts carry only the data the stage needs, pre-filtered by the domain
//! layer: the coverage prompt sees the applicable coverage items, the
//! exclusion prompt sees the keyword-shortlisted exclusions. Each prompt
//! pins the exact JSON shape the stage parser expects.

use serde::Serialize;

use domain_claims::Claim;
use domain_policy::{CoverageItem, Exclusion};

use crate::coverage::CoverageAnalysis;
use crate::exclusion::ExclusionAnalysis;
use crate::fraud::FraudAnalysis;
use crate::payout::PayoutCalculation;
use crate::retriever::ContextFragment;

/// Serializes prompt data, degrading to an empty object on failure
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

fn clauses_section(fragments: &[ContextFragment]) -> String {
    if fragments.is_empty() {
        return "(no relevant clauses retrieved)".to_string();
    }
    fragments
        .iter()
        .map(|f| format!("- {}", f.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the coverage analysis prompt
pub fn coverage_prompt(
    claim: &Claim,
    coverage_items: &[&CoverageItem],
    fragments: &[ContextFragment],
) -> String {
    format!(
        "Analyze if this claim is covered under the policy.\n\
         \n\
         CLAIM:\n\
         - Type: {claim_type}\n\
         - Description: {description}\n\
         - Amount: {amount}\n\
         - Incident Date: {incident_date}\n\
         \n\
         POLICY COVERAGE ITEMS:\n\
         {coverage_items}\n\
         \n\
         RELEVANT POLICY CLAUSES:\n\
         {clauses}\n\
         \n\
         Analyze:\n\
         1. Does any coverage item apply to this claim type?\n\
         2. Is the claim within the coverage limits?\n\
         3. Is the incident date within the policy period?\n\
         4. Are there any conditions that must be met?\n\
         \n\
         Return JSON:\n\
         {{\n\
           \"coverage_applies\": true/false,\n\
           \"matched_coverage_type\": \"coverage type that applies or null\",\n\
           \"coverage_limit\": 0,\n\
           \"deductible\": 0,\n\
           \"copay_percentage\": 0,\n\
           \"conditions_met\": true/false,\n\
           \"confidence\": 0.0-1.0\n\
         }}",
        claim_type = claim.claim_type,
        description = claim.incident_description,
        amount = claim.claimed_amount,
        incident_date = claim.incident_date,
        coverage_items = to_pretty_json(coverage_items),
        clauses = clauses_section(fragments),
    )
}

/// Builds the exclusion analysis prompt
pub fn exclusion_prompt(claim: &Claim, exclusions: &[&Exclusion]) -> String {
    format!(
        "Check if any exclusions apply to this claim.\n\
         \n\
         CLAIM:\n\
         - Type: {claim_type}\n\
         - Description: {description}\n\
         - Incident Date: {incident_date}\n\
         \n\
         POLICY EXCLUSIONS:\n\
         {exclusions}\n\
         \n\
         For each exclusion, determine:\n\
         1. Does this exclusion apply to the claim?\n\
         2. Are there any exceptions that override the exclusion?\n\
         \n\
         Return JSON:\n\
         {{\n\
           \"exclusions_triggered\": [\n\
             {{\n\
               \"exclusion_id\": \"id\",\n\
               \"category\": \"category\",\n\
               \"reason\": \"why it applies\",\n\
               \"exception_applies\": true/false,\n\
               \"exception_reason\": \"reason if exception applies\"\n\
             }}\n\
           ],\n\
           \"claim_excluded\": true/false,\n\
           \"confidence\": 0.0-1.0\n\
         }}",
        claim_type = claim.claim_type,
        description = claim.incident_description,
        incident_date = claim.incident_date,
        exclusions = to_pretty_json(exclusions),
    )
}

/// Builds the final recommendation prompt
pub fn recommendation_prompt(
    claim: &Claim,
    coverage: &CoverageAnalysis,
    exclusions: &ExclusionAnalysis,
    fraud: &FraudAnalysis,
    payout: &PayoutCalculation,
) -> String {
    format!(
        "Based on the validation analysis, provide a final recommendation.\n\
         \n\
         CLAIM:\n\
         - Type: {claim_type}\n\
         - Amount: {amount}\n\
         \n\
         COVERAGE ANALYSIS:\n\
         {coverage}\n\
         \n\
         EXCLUSION ANALYSIS:\n\
         {exclusions}\n\
         \n\
         FRAUD ANALYSIS:\n\
         {fraud}\n\
         \n\
         PAYOUT CALCULATION:\n\
         {payout}\n\
         \n\
         Provide a recommendation:\n\
         - \"approve\": Claim is valid and should be paid\n\
         - \"deny\": Claim is not covered or excluded\n\
         - \"review\": Needs manual review\n\
         - \"investigate\": Fraud indicators present\n\
         \n\
         Return JSON:\n\
         {{\n\
           \"recommendation\": \"approve/deny/review/investigate\",\n\
           \"confidence\": 0.0-1.0,\n\
           \"reasoning_summary\": \"Brief summary of decision\"\n\
         }}",
        claim_type = claim.claim_type,
        amount = claim.claimed_amount,
        coverage = to_pretty_json(coverage),
        exclusions = to_pretty_json(exclusions),
        fraud = to_pretty_json(fraud),
        payout = to_pretty_json(payout),
    )
}
