use async_trait::async_trait;
use tracing::debug;

use super::parse::{DraftAlternativeTool, DraftDiagnosis, DraftRecommendedTool};
use super::repair::repair;
use super::{DiagnosisResult, RecommendationLevel, Recommender};
use crate::catalog::{Catalog, CatalogEntry, Plan, PlanTier};
use crate::config::RecommenderKind;
use crate::error::{RecommendationError, RecommendationResult};
use crate::quiz::{AnswerSet, BUDGET_QUESTION_ID, FREE_BUDGET_VALUE};

/// Deterministic strategy: a fixed baseline plus one free-tier rule.
///
/// Baseline: first principal product's premium plan, the explorer, then the
/// remaining principal products. When the budget answer is the free-tier
/// token the second principal product's free plan becomes primary and the
/// first product's free plan is appended as an alternative.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedRecommender;

impl RuleBasedRecommender {
    pub fn new() -> Self {
        Self
    }

    /// Pure, synchronous evaluation of the rule set.
    pub fn diagnose(
        &self,
        answers: &AnswerSet,
        catalog: &Catalog,
    ) -> RecommendationResult<DiagnosisResult> {
        let principals: Vec<&CatalogEntry> = catalog.principals().collect();
        let first = principal(&principals, 0)?;
        let explorer = catalog
            .explorer()
            .ok_or_else(|| RecommendationError::catalog_incomplete("explorer entry"))?;

        let mut draft = baseline(first, &principals[1..], explorer)?;

        if answers.value_of(BUDGET_QUESTION_ID) == Some(FREE_BUDGET_VALUE) {
            let second = principal(&principals, 1)?;
            apply_free_tier(&mut draft, first, second)?;
        }

        Ok(repair(draft, catalog))
    }
}

#[async_trait]
impl Recommender for RuleBasedRecommender {
    fn kind(&self) -> RecommenderKind {
        RecommenderKind::RuleBased
    }

    async fn recommend(
        &self,
        answers: &AnswerSet,
        catalog: &Catalog,
    ) -> RecommendationResult<DiagnosisResult> {
        self.diagnose(answers, catalog)
    }
}

fn principal<'a>(principals: &[&'a CatalogEntry], index: usize) -> RecommendationResult<&'a CatalogEntry> {
    principals.get(index).copied().ok_or_else(|| {
        RecommendationError::catalog_incomplete(format!("principal product #{}", index + 1))
    })
}

fn plan_of(entry: &CatalogEntry, tier: PlanTier) -> RecommendationResult<&Plan> {
    entry.plan_by_tier(tier).ok_or_else(|| {
        RecommendationError::catalog_incomplete(format!("{:?} plan of {}", tier, entry.name))
    })
}

fn listing(entry: &CatalogEntry) -> DraftAlternativeTool {
    DraftAlternativeTool {
        name: entry.name.clone(),
        description: entry.blurb().to_string(),
        url: entry.landing_url().map(str::to_string),
    }
}

fn baseline(
    first: &CatalogEntry,
    others: &[&CatalogEntry],
    explorer: &CatalogEntry,
) -> RecommendationResult<DraftDiagnosis> {
    let premium = plan_of(first, PlanTier::Premium)?;

    let mut alternative_tools = vec![listing(explorer)];
    alternative_tools.extend(others.iter().map(|e| listing(e)));

    Ok(DraftDiagnosis {
        recommended_tool: DraftRecommendedTool {
            name: first.name.clone(),
            plan: premium.name.clone(),
            url: Some(premium.url.clone()),
            reasoning: format!(
                "{}の{}プランは、文章作成・プログラミング支援・情報収集・画像生成まで幅広い用途にバランスよく対応できる万能な選択肢です。{}",
                first.name, premium.name, premium.features
            ),
            level: RecommendationLevel::StronglyRecommended,
        },
        alternative_tools,
    })
}

fn apply_free_tier(
    draft: &mut DraftDiagnosis,
    first: &CatalogEntry,
    second: &CatalogEntry,
) -> RecommendationResult<()> {
    let free_pick = plan_of(second, PlanTier::Free)?;
    let first_free = plan_of(first, PlanTier::Free)?;

    debug!(tool = %second.name, plan = %free_pick.name, "Applying free-tier rule");

    draft.recommended_tool = DraftRecommendedTool {
        name: second.name.clone(),
        plan: free_pick.name.clone(),
        url: Some(free_pick.url.clone()),
        reasoning: format!(
            "費用をかけずに始めたいというご希望から、{}の{}プラン（{}）をおすすめします。{} {}",
            second.name, free_pick.name, free_pick.price, free_pick.features, second.description
        ),
        level: draft.recommended_tool.level,
    };

    draft.alternative_tools.retain(|alt| alt.name != second.name);
    draft.alternative_tools.push(DraftAlternativeTool {
        name: first.name.clone(),
        description: format!(
            "{}の{}プラン（{}）も無料で利用できます。{}",
            first.name, first_free.name, first_free.price, first_free.features
        ),
        url: Some(first_free.url.clone()),
    });

    Ok(())
}
