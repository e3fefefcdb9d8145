//! Best-effort normalization of drafts into final results.
//!
//! Nothing here fails: an unknown product simply resolves to
//! [`FALLBACK_URL`].

use tracing::{debug, warn};

use super::parse::{DraftAlternativeTool, DraftDiagnosis, DraftRecommendedTool};
use super::types::{AlternativeTool, DiagnosisResult, RecommendedTool};
use crate::catalog::{Catalog, FALLBACK_URL};

/// Apply every repair step and produce the final result.
pub fn repair(mut draft: DraftDiagnosis, catalog: &Catalog) -> DiagnosisResult {
    ensure_explorer(&mut draft, catalog);

    let recommended_tool = finalize_recommended(draft.recommended_tool, catalog);
    let alternative_tools = draft
        .alternative_tools
        .into_iter()
        .map(|alt| finalize_alternative(alt, catalog))
        .collect();

    DiagnosisResult {
        recommended_tool,
        alternative_tools,
    }
}

/// Prepend the explorer entry when the draft omits it.
///
/// Returns whether the alternatives list the explorer afterwards; `false`
/// only when the catalog has no explorer entry.
pub fn ensure_explorer(draft: &mut DraftDiagnosis, catalog: &Catalog) -> bool {
    let Some(explorer) = catalog.explorer() else {
        warn!(
            alternatives = draft.alternative_tools.len(),
            "Catalog has no explorer entry, alternatives left without it"
        );
        return false;
    };

    if draft
        .alternative_tools
        .iter()
        .any(|alt| alt.name == explorer.name)
    {
        return true;
    }

    debug!(explorer = %explorer.name, "Injecting explorer into alternatives");
    draft.alternative_tools.insert(
        0,
        DraftAlternativeTool {
            name: explorer.name.clone(),
            description: explorer.blurb().to_string(),
            url: explorer.landing_url().map(str::to_string),
        },
    );
    true
}

/// URL for a primary tool: named plan, then general URL, then `#`.
pub fn recommended_url(name: &str, plan: &str, catalog: &Catalog) -> String {
    catalog
        .get(name)
        .and_then(|entry| {
            entry
                .plan(plan)
                .map(|p| p.url.as_str())
                .filter(|u| !u.is_empty())
                .or(entry.general_url.as_deref().filter(|u| !u.is_empty()))
        })
        .unwrap_or(FALLBACK_URL)
        .to_string()
}

/// URL for an alternative: general URL or bare URL, then `#`.
pub fn alternative_url(name: &str, catalog: &Catalog) -> String {
    catalog
        .get(name)
        .and_then(|entry| entry.landing_url())
        .unwrap_or(FALLBACK_URL)
        .to_string()
}

fn present(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}

fn finalize_recommended(tool: DraftRecommendedTool, catalog: &Catalog) -> RecommendedTool {
    let url = present(tool.url).unwrap_or_else(|| {
        let url = recommended_url(&tool.name, &tool.plan, catalog);
        debug!(tool = %tool.name, plan = %tool.plan, url = %url, "Backfilled recommended URL");
        url
    });

    RecommendedTool {
        name: tool.name,
        plan: tool.plan,
        url,
        reasoning: tool.reasoning,
        level: tool.level,
    }
}

fn finalize_alternative(tool: DraftAlternativeTool, catalog: &Catalog) -> AlternativeTool {
    let url = present(tool.url).unwrap_or_else(|| alternative_url(&tool.name, catalog));

    AlternativeTool {
        name: tool.name,
        description: tool.description,
        url,
    }
}
