//! Reference question set.

use super::types::{Question, QuizOption};

/// Question whose answer drives the free-tier rule.
pub const BUDGET_QUESTION_ID: &str = "q6";

/// Budget token meaning "free plan preferred".
pub const FREE_BUDGET_VALUE: &str = "予算無料";

/// The ten reference questions, in order.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "q1",
            "AIツールを主にどのような目的で利用したいですか？",
            vec![
                QuizOption::new("文章作成・校正", "文章作成・校正"),
                QuizOption::new("プログラミング支援", "プログラミング支援"),
                QuizOption::new("アイデア出し・ブレインストーミング", "アイデア出し"),
                QuizOption::new("情報収集・調査", "情報収集"),
            ],
        ),
        Question::new(
            "q2",
            "生成される文章の創造性や多様性をどの程度重視しますか？",
            vec![
                QuizOption::new("非常に重視する", "創造性非常に重視"),
                QuizOption::new("ある程度重視する", "創造性ある程度重視"),
                QuizOption::new("あまり重視しない（正確さ優先）", "創造性あまり重視しない"),
            ],
        ),
        Question::new(
            "q3",
            "日本語の自然さや精度はどの程度重要ですか？",
            vec![
                QuizOption::new("非常に重要（ネイティブレベルを求める）", "日本語の自然さ非常に重要"),
                QuizOption::new("重要（コミュニケーションに支障がない程度）", "日本語の自然さ重要"),
                QuizOption::new("普通（多少不自然でも意味が通じればOK）", "日本語の自然さ普通"),
            ],
        ),
        Question::new(
            "q4",
            "最新情報や専門知識へのアクセスはどの程度重要ですか？",
            vec![
                QuizOption::new("非常に重要（常に最新の情報を参照したい）", "最新情報非常に重要"),
                QuizOption::new(
                    "ある程度重要（必要に応じて新しい情報も欲しい）",
                    "最新情報ある程度重要",
                ),
                QuizOption::new("あまり重要でない（普遍的な知識で十分）", "最新情報あまり重要でない"),
            ],
        ),
        Question::new(
            "q5",
            "API連携や外部ツールとの連携、カスタマイズ性は必要ですか？",
            vec![
                QuizOption::new("はい、必須です", "API連携必須"),
                QuizOption::new("あると嬉しいが、必須ではない", "API連携あると嬉しい"),
                QuizOption::new("いいえ、不要です", "API連携不要"),
            ],
        ),
        Question::new(
            BUDGET_QUESTION_ID,
            "月々の予算はどのくらいを考えていますか？",
            vec![
                QuizOption::new("無料プランが第一希望", FREE_BUDGET_VALUE),
                QuizOption::new("月2,000円以内", "予算2000円以内"),
                QuizOption::new("月5,000円以内", "予算5000円以内"),
                QuizOption::new("特に上限なし（費用対効果重視）", "予算上限なし"),
            ],
        ),
        Question::new(
            "q7",
            "画像の生成機能は必要ですか？",
            vec![
                QuizOption::new("はい、頻繁に使いたいです", "画像生成頻繁"),
                QuizOption::new("あると便利だが、必須ではない", "画像生成あると便利"),
                QuizOption::new("いいえ、全く不要です", "画像生成不要"),
            ],
        ),
        Question::new(
            "q8",
            "長文の読解、要約、または大量のドキュメント処理機能はどの程度重要ですか？",
            vec![
                QuizOption::new("非常に重要（日常的に長文を扱う）", "長文処理非常に重要"),
                QuizOption::new("時々必要になる", "長文処理時々必要"),
                QuizOption::new("ほとんど使わない", "長文処理不要"),
            ],
        ),
        Question::new(
            "q9",
            "主に個人利用ですか、それともチームやビジネスでの利用ですか？",
            vec![
                QuizOption::new("個人利用", "個人利用"),
                QuizOption::new("チーム・ビジネス利用（コラボレーション機能重視）", "チーム利用"),
            ],
        ),
        Question::new(
            "q10",
            "AIツールの設定や機能のカスタマイズ性を重視しますか？",
            vec![
                QuizOption::new("はい、細かく設定を調整したい", "カスタマイズ性重視"),
                QuizOption::new("いいえ、シンプルで使いやすい方が良い", "シンプルさ重視"),
                QuizOption::new("どちらでもない", "カスタマイズ性どちらでもない"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ten_questions_with_unique_ids() {
        let questions = builtin_questions();
        assert_eq!(questions.len(), 10);
        let ids: HashSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_option_values_unique_within_question() {
        for question in builtin_questions() {
            let values: HashSet<&str> = question.options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values.len(), question.options.len(), "{}", question.id);
        }
    }

    #[test]
    fn test_budget_question_offers_free_token() {
        let questions = builtin_questions();
        let budget = questions
            .iter()
            .find(|q| q.id == BUDGET_QUESTION_ID)
            .unwrap();
        assert!(budget.option(FREE_BUDGET_VALUE).is_some());
    }
}
