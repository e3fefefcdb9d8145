//! Reference catalog shipped with the quiz.

use super::{Catalog, CatalogEntry, Plan, PlanTier};

/// Name of the explorer entry in the reference catalog.
pub const EXPLORER_NAME: &str = "Genpark";

/// Blurb attached to the explorer whenever it is listed as an alternative.
pub const EXPLORER_TAGLINE: &str = "ChatGPTやClaudeなどとにかくいろいろ試したい人向け";

impl Catalog {
    /// The reference catalog: three principal products followed by the explorer.
    pub fn builtin() -> Self {
        Catalog::new(vec![chatgpt(), gemini(), claude(), genpark()])
    }
}

fn chatgpt() -> CatalogEntry {
    CatalogEntry::principal(
        "ChatGPT",
        "OpenAIによって開発された汎用性の高い対話型AI。無料版から高機能な有料版まで提供。",
    )
    .with_tagline("文章作成からデータ分析、画像生成まで幅広くこなせる汎用性の高い選択肢です。")
    .with_plan(Plan::new(
        "Free",
        "無料",
        "基本的な対話、GPT-3.5ベース",
        "https://chat.openai.com/",
        PlanTier::Free,
    ))
    .with_plan(Plan::new(
        "Plus",
        "月額$20",
        "GPT-4o、DALL·E、高度なデータ分析、プラグイン",
        "https://chat.openai.com/plus",
        PlanTier::Premium,
    ))
    .with_plan(Plan::new(
        "Team",
        "月額$25/ユーザー (年間契約時)",
        "Plusの全機能、チーム向け管理機能、高セキュリティ",
        "https://openai.com/chatgpt/team",
        PlanTier::Team,
    ))
    .with_general_url("https://chat.openai.com/")
}

fn gemini() -> CatalogEntry {
    CatalogEntry::principal(
        "Gemini",
        "Googleによって開発されたマルチモーダルAI。Googleサービスとの連携が強力。",
    )
    .with_tagline("Googleサービスと組み合わせて使いたい人に向いています。")
    .with_plan(Plan::new(
        "Free (旧Bard)",
        "無料",
        "Gemini Proモデル、Googleアプリとの連携",
        "https://gemini.google.com/",
        PlanTier::Free,
    ))
    .with_plan(Plan::new(
        "Advanced (Google One AI Premium)",
        "月額 約3,000円 (プランにより変動)",
        "最先端のGemini 1.5 Proモデル、2TBストレージ、Googleアプリでの高度なGemini機能",
        "https://one.google.com/ai-premium",
        PlanTier::Premium,
    ))
    .with_general_url("https://gemini.google.com/")
}

fn claude() -> CatalogEntry {
    CatalogEntry::principal(
        "Claude",
        "Anthropicによって開発されたAI。特に長文読解・生成、倫理的な応答に強み。",
    )
    .with_tagline("長文の読解や要約、自然な文章生成を重視する人に向いています。")
    .with_plan(Plan::new(
        "Free",
        "無料",
        "Claude 3 Sonnet (制限あり)、優れた長文処理能力",
        "https://claude.ai/",
        PlanTier::Free,
    ))
    .with_plan(Plan::new(
        "Pro",
        "月額$20",
        "Claude 3 Opusへのアクセス (制限あり)、Sonnet/Haikuはより多くの利用が可能、優先アクセス",
        "https://claude.ai/claude-pro",
        PlanTier::Premium,
    ))
    .with_plan(Plan::new(
        "Team",
        "月額$30/ユーザー",
        "Proの全機能、チームでの利用に最適化、より高い利用上限",
        "https://www.anthropic.com/claude#claude-for-business",
        PlanTier::Team,
    ))
    .with_general_url("https://claude.ai/")
}

fn genpark() -> CatalogEntry {
    CatalogEntry::explorer(
        EXPLORER_NAME,
        "ChatGPTやClaudeなど、複数の主要な生成AIモデルを1つのプラットフォームで試せるサービス。様々なAIを手軽に比較検討したい人向け。",
    )
    .with_tagline(EXPLORER_TAGLINE)
    .with_url("https://www.genpark.ai/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryRole;

    #[test]
    fn test_builtin_order_and_roles() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["ChatGPT", "Gemini", "Claude", "Genpark"]);

        let principals: Vec<&str> = catalog.principals().map(|e| e.name.as_str()).collect();
        assert_eq!(principals, vec!["ChatGPT", "Gemini", "Claude"]);
        assert_eq!(catalog.explorer().unwrap().role, EntryRole::Explorer);
    }

    #[test]
    fn test_every_principal_has_free_and_premium_plans() {
        let catalog = Catalog::builtin();
        for entry in catalog.principals() {
            assert!(entry.plan_by_tier(PlanTier::Free).is_some(), "{}", entry.name);
            assert!(entry.plan_by_tier(PlanTier::Premium).is_some(), "{}", entry.name);
            assert!(entry.general_url.is_some(), "{}", entry.name);
        }
    }

    #[test]
    fn test_explorer_has_only_bare_url() {
        let catalog = Catalog::builtin();
        let explorer = catalog.explorer().unwrap();
        assert!(explorer.plans.is_empty());
        assert!(explorer.general_url.is_none());
        assert_eq!(explorer.landing_url(), Some("https://www.genpark.ai/"));
        assert_eq!(explorer.blurb(), EXPLORER_TAGLINE);
    }
}
