//! Prompt templates sent to the definition provider.
//!
//! Every template contains a single [`WORD_PLACEHOLDER`] that [`render`] replaces with the
//! looked-up word.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Placeholder substituted by [`render`].
pub const WORD_PLACEHOLDER: &str = "{word}";

/// Chinese word, standard level of detail.
pub const CHINESE_STANDARD: &str = "請解釋中文詞彙「{word}」，內容包括：
1. 英文翻譯
2. 詞性
3. 詳細定義
4. 使用例句（中英對照）

請用清楚易讀的格式回答。";

/// English word, standard level of detail.
pub const ENGLISH_STANDARD: &str = "Explain the English word \"{word}\". Include:
1. Traditional Chinese translation
2. Part of speech
3. Detailed definition
4. Example sentences (with Chinese translation)

Use a clear, easy-to-read format.";

/// Chinese word, structured answer with grammar details.
pub const CHINESE_DETAILED: &str = "你是中英詞彙助教，請依照以下規則處理中文詞彙「{word}」：
• 把詞彙翻譯成英文。
• 標出英文翻譯的詞性，例如 [noun]、[verb]、[adjective]、[adverb]。
• 用初學者看得懂的簡單英文寫出英文解釋。
• 如果英文翻譯是動詞，列出時態變化：原形、過去式、過去分詞、現在分詞、第三人稱單數。
• 列出 3 到 5 個詞性相同的常見英文同義詞。
• 提供三個使用該英文翻譯的簡單例句，並附上中文翻譯。
-
輸出格式：
【單詞】：{word}
【英文翻譯】：[English Translation]
【詞性】：[Part of Speech]
【英文解釋】：[Simple English Definition]
【時態變化】：[base form], [past tense], [past participle], [present participle], [third person singular]（僅限動詞）
【同義詞】：[Synonyms]
【例句】：[Example Sentences] [Chinese Translation]";

/// English word, structured answer with grammar details.
pub const ENGLISH_DETAILED: &str = "You are an English to Traditional Chinese vocabulary tutor. For the English word \"{word}\":
• Translate the word into Traditional Chinese.
• Give its part of speech, e.g. [noun], [verb], [adjective], [adverb].
• Write an English definition using only simple words a beginner can understand.
• If the word is a verb, list its tense forms: base form, past tense, past participle, present participle and third person singular.
• List 3 to 5 common synonyms with the same part of speech.
• Give three simple example sentences using the word, each with a Chinese translation.
-
Output format:
【Word】: {word}
【詞性】: [Part of Speech]
【中文翻譯】: [Traditional Chinese Translation]
【英文解釋】: [Simple English Definition]
【時態變化】: [base form], [past tense], [past participle], [present participle], [third person singular] (verbs only)
【同義詞】: [Synonyms]
【例句】: [Example Sentence] [Chinese Translation]";

/// How much structure the provider is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStyle {
    #[default]
    Standard,
    Detailed,
}

/// Returned by [`PromptStyle::from_str`] for tags other than `standard` / `detailed`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown prompt style: {0}")]
pub struct UnknownPromptStyle(pub String);

impl PromptStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Detailed => "detailed",
        }
    }
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptStyle {
    type Err = UnknownPromptStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "detailed" => Ok(Self::Detailed),
            other => Err(UnknownPromptStyle(other.to_owned())),
        }
    }
}

/// Template for a known language/style pair.
pub fn template(language: Language, style: PromptStyle) -> &'static str {
    match (language, style) {
        (Language::Chinese, PromptStyle::Standard) => CHINESE_STANDARD,
        (Language::Chinese, PromptStyle::Detailed) => CHINESE_DETAILED,
        (Language::English, PromptStyle::Standard) => ENGLISH_STANDARD,
        (Language::English, PromptStyle::Detailed) => ENGLISH_DETAILED,
    }
}

/// Template lookup by raw tags.
///
/// Total: if either tag is unrecognised the Chinese standard template is returned, even when
/// the other tag is valid (`("english", "bogus")` yields [`CHINESE_STANDARD`]). Callers and
/// tests depend on this exact fallback.
pub fn get_prompt(language: &str, style: &str) -> &'static str {
    match (language.parse::<Language>(), style.parse::<PromptStyle>()) {
        (Ok(language), Ok(style)) => template(language, style),
        _ => CHINESE_STANDARD,
    }
}

/// Substitute `word` into `template`.
pub fn render(template: &str, word: &str) -> String {
    template.replace(WORD_PLACEHOLDER, word)
}
