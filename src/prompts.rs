//! Prompt rendering for the generative recommender.
//!
//! The prompt lists the user's answers, the full catalog, and the exact JSON
//! shape expected back.

use std::fmt::Write;

use crate::catalog::Catalog;
use crate::quiz::AnswerSet;
use crate::recommend::RecommendationLevel;

/// Opening instruction to the advisor.
pub const ADVISOR_PREAMBLE: &str = "あなたは経験豊富なAIツールアドバイザーです。";

/// Render every catalog entry, plans first, in catalog order.
pub fn format_catalog_for_prompt(catalog: &Catalog) -> String {
    let mut out = String::from("利用可能なAIツールとその特徴:\n");

    for entry in catalog.entries() {
        if entry.plans.is_empty() {
            let _ = write!(
                out,
                "- {}:\n  説明: {}\n  公式サイト: {}\n\n",
                entry.name,
                entry.description,
                entry.landing_url().unwrap_or("N/A")
            );
            continue;
        }

        let _ = writeln!(out, "- {}:", entry.name);
        for plan in &entry.plans {
            let _ = write!(
                out,
                "  - プラン: {} ({})\n    特徴: {}\n",
                plan.name, plan.price, plan.features
            );
        }
        let _ = write!(
            out,
            "  一般的な強み: {}\n  公式サイト: {}\n\n",
            entry.description,
            entry.landing_url().unwrap_or("N/A")
        );
    }

    out
}

/// One line per answer: question text, chosen label and raw value.
pub fn format_answers_for_prompt(answers: &AnswerSet) -> String {
    answers
        .iter()
        .map(|a| format!("- {}: 「{}」 (値: {})", a.question_text, a.label, a.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the full diagnosis prompt.
pub fn build_diagnosis_prompt(answers: &AnswerSet, catalog: &Catalog) -> String {
    let principals: Vec<&str> = catalog.principals().map(|e| e.name.as_str()).collect();
    let principal_list = principals.join("、");
    let principal_list_ascii = principals.join(", ");

    let levels: Vec<String> = RecommendationLevel::all()
        .iter()
        .map(|l| format!("「{}」", l.label()))
        .collect();

    let (explorer_name, explorer_blurb, explorer_url) = match catalog.explorer() {
        Some(e) => (
            e.name.as_str(),
            e.blurb(),
            e.landing_url().unwrap_or("#"),
        ),
        None => ("", "", "#"),
    };

    let mut prompt = String::new();
    let _ = write!(
        prompt,
        "{preamble}以下のユーザーのクイズ回答に基づいて、最も適したAIツール（{principals}の中から）とその具体的なプランを推薦してください。\n\n",
        preamble = ADVISOR_PREAMBLE,
        principals = principal_list,
    );

    let _ = write!(
        prompt,
        "ユーザーの回答:\n{}\n\n{}\n",
        format_answers_for_prompt(answers),
        format_catalog_for_prompt(catalog)
    );

    let _ = write!(
        prompt,
        "以下のJSON形式で回答を生成してください。理由はユーザーの回答とツールの強みに直接関連付け、簡潔に記述してください。推薦レベルは{levels}のいずれかを使用してください。\n",
        levels = levels.join(""),
    );

    if !explorer_name.is_empty() {
        let _ = write!(
            prompt,
            "「alternativeTools」には、{name}（説明：「{blurb}」）を必ず含め、",
            name = explorer_name,
            blurb = explorer_blurb,
        );
    } else {
        prompt.push_str("「alternativeTools」には、");
    }

    let _ = write!(
        prompt,
        "さらに主要なAIツール（{principals}）の中から、主要推薦でなかったもので、ユーザーのニーズに合いそうなものをもう1つ提案してください。すべてのテキスト（特にreasoning、description、name、plan、level）は日本語で記述してください。\n\n",
        principals = principal_list,
    );

    let _ = write!(
        prompt,
        r#"JSON出力形式:
{{
  "recommendedTool": {{
    "name": "ツール名 (例: {first})",
    "plan": "プラン名 (例: Plus)",
    "url": "ツール/プランページへの直接リンク",
    "reasoning": "ユーザーの回答に基づいた推薦理由（簡潔に）",
    "level": "推薦レベル (例: {strong})"
  }},
  "alternativeTools": [
    {{
      "name": "{explorer_name}",
      "description": "{explorer_blurb}",
      "url": "{explorer_url}"
    }},
    {{
      "name": "代替ツール名2 ({principals}のいずれか)",
      "description": "この代替ツールが適しているかもしれない簡潔な理由",
      "url": "代替ツール2の公式サイトリンク"
    }}
  ]
}}
"#,
        first = principals.first().copied().unwrap_or("ChatGPT"),
        strong = RecommendationLevel::StronglyRecommended.label(),
        explorer_name = explorer_name,
        explorer_blurb = explorer_blurb,
        explorer_url = explorer_url,
        principals = principal_list_ascii,
    );

    prompt
}
