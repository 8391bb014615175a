use std::sync::Arc;

use wordbook_domain::id::UserId;
use wordbook_domain::language::Language;
use wordbook_domain::prompt::{PromptStyle, render, template};

use crate::domain::repository::{DefinitionProvider, WordRecordRepository};
use crate::domain::types::DefinitionOutcome;
use crate::error::DictionaryError;
use crate::usecase::word_record::SaveWordRecordUseCase;

pub struct LookupInput {
    pub word: String,
    pub user_id: Option<UserId>,
}

#[derive(Debug)]
pub struct LookupOutput {
    pub word: String,
    pub language: Language,
    /// Provider text, or the prefixed failure message.
    pub definition: String,
}

pub struct LookupWordUseCase<R: WordRecordRepository> {
    pub records: R,
    pub provider: Arc<dyn DefinitionProvider>,
    pub style: PromptStyle,
}

impl<R: WordRecordRepository> LookupWordUseCase<R> {
    /// Classify, ask the provider, and persist successful answers under
    /// (word, language, user_id). Failed answers are returned but never stored.
    pub async fn execute(&self, input: LookupInput) -> Result<LookupOutput, DictionaryError> {
        let word = input.word.trim();
        if word.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }

        let language = Language::detect(word);
        let prompt = render(template(language, self.style), word);
        tracing::info!(chars = word.chars().count(), %language, "looking up word");

        let outcome = match self.provider.fetch_definition(&prompt).await {
            Ok(text) => DefinitionOutcome::Found(text),
            Err(e) => {
                tracing::warn!(error = %e, %language, "definition provider failed");
                DefinitionOutcome::Failed(e.to_string())
            }
        };

        if let DefinitionOutcome::Found(ref definition) = outcome {
            let save = SaveWordRecordUseCase {
                repo: &self.records,
            };
            save.execute(word, language, definition, input.user_id).await;
        }

        Ok(LookupOutput {
            word: word.to_owned(),
            language,
            definition: outcome.into_text(),
        })
    }
}
