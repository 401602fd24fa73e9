use crate::models::ArticleConfig;
use crate::style::StyleSample;

/// System prompt for the generative collaborator (non-negotiable role).
pub const SYSTEM_PROMPT: &str = "あなたは優秀なライターです。noteに掲載する記事を作成します。\
文体や口調は提示された文体サンプルに合わせ、話しているような雰囲気を残してください。\
出力は記事本文のみとし、前置きや説明を付けないでください。";

/// Build the instruction document handed to the generative collaborator.
///
/// Purely string assembly: embeds a bounded excerpt of the style sample,
/// enumerates the literal formatting constraints, and appends the
/// transcript. Whatever the collaborator returns is not validated here.
pub fn build_article_prompt(
    style: &StyleSample,
    transcript: &str,
    config: &ArticleConfig,
) -> String {
    let mut prompt = String::new();

    prompt.push_str("# 目的\n");
    prompt.push_str(
        "添付する文字起こしデータ（日本語の音声配信）を、個人のnote記事として読める文章に整えてください。\n\n",
    );

    prompt.push_str("【文体サンプル】\n");
    prompt.push_str(style.excerpt(config.style_excerpt_chars));
    prompt.push_str("\n\n");

    prompt.push_str("# 要求仕様\n");
    prompt.push_str(&format!(
        "全体を通して{}文字程度に収めるように構成してください。以下の三部構成に従ってください。\n\n",
        config.prompt_total_chars()
    ));
    prompt.push_str(&format!(
        "1. 導入部（約{}文字）: 配信の主題とその重要性を簡潔に紹介します。\n",
        config.intro_chars
    ));
    prompt.push_str(&format!(
        "2. 主要内容（約{}文字）: 主要な議論やポイントを明確かつ簡潔にまとめます。\n",
        config.body_chars
    ));
    prompt.push_str(&format!(
        "3. 結論（約{}文字）: 配信から得られる主要な知見を締めくくります。\n\n",
        config.conclusion_chars
    ));

    prompt.push_str("# その他の制約\n");
    prompt.push_str("・冒頭は「マナミです。」で始め、すぐ本文へ続けてください\n");
    prompt.push_str("・「ですます調」にしてください\n");
    prompt.push_str("・内容から段落わけ、改行を適切に行ってください\n");
    prompt.push_str("・強調するところは「」で区切ってください\n");
    prompt.push_str("・子供は「子ども」と表記してください\n");
    prompt.push_str("・見出しをつけないでください\n");
    prompt.push_str("・「えー」「あの」などのフィラーは除去してください\n\n");

    prompt.push_str("# 文字起こしテキスト\n");
    prompt.push_str(transcript);

    prompt
}
