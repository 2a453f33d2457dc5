use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::application::ports::{ChatMessage, CompletionRequest, LlmClient};
use crate::domain::{AssessmentRequest, DEFAULT_MAX_QUESTIONS, LanguageCatalog};

pub const DEFAULT_GENERATION_MODEL: &str = "llama-3.2-3b-preview";

/// Leading numbering forms, tried in order. Only the first match is removed.
static NUMBERING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^\d+[.)]\s*",
        r"(?i)^Q\d+[:.]\s*",
        r"(?i)^\[\d+\]\s*",
        r"(?i)^Question\s*\d+[:.]\s*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub max_questions: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_GENERATION_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            top_p: 1.0,
            max_questions: DEFAULT_MAX_QUESTIONS,
        }
    }
}

pub struct QuestionGenerator {
    llm_client: Arc<dyn LlmClient>,
    catalog: Arc<LanguageCatalog>,
    options: GenerationOptions,
}

impl QuestionGenerator {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        catalog: Arc<LanguageCatalog>,
        options: GenerationOptions,
    ) -> Self {
        Self {
            llm_client,
            catalog,
            options,
        }
    }

    pub fn max_questions(&self) -> usize {
        self.options.max_questions
    }

    /// Produces `number_of_questions` questions (capped at `max_questions`),
    /// falling back to the static list for the language when the remote call
    /// fails or yields nothing.
    pub async fn generate(&self, request: &AssessmentRequest) -> Vec<String> {
        let count = self.capped(request.number_of_questions);
        let label = self.catalog.prompt_label(&request.language);

        let completion = CompletionRequest {
            model: self.options.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt(&request.language)),
                ChatMessage::user(build_prompt(request, label)),
            ],
            temperature: self.options.temperature,
            max_tokens: Some(self.options.max_tokens),
            top_p: Some(self.options.top_p),
            stream: false,
        };

        let content = match self.llm_client.complete(completion).await {
            Ok(content) => content,
            Err(e) => {
                tracing::error!(error = %e, "Error generating questions");
                return self.fallback_questions(count, &request.language);
            }
        };

        let parsed = parse_questions(&content);
        if parsed.is_empty() {
            tracing::warn!("No questions extracted, using fallback questions");
            return self.fallback_questions(count, &request.language);
        }

        tracing::info!(
            parsed = parsed.len(),
            requested = count,
            language = %request.language,
            "Questions generated"
        );

        fit_to_count(
            parsed,
            count,
            self.catalog.fallback_question(&request.language),
        )
    }

    /// First `count` entries of the static list, padded with the single
    /// fallback question when `count` exceeds the list length.
    pub fn fallback_questions(&self, count: usize, language: &str) -> Vec<String> {
        let count = self.capped(count);
        let listed = self
            .catalog
            .fallback_questions(language)
            .iter()
            .take(count)
            .cloned()
            .collect();
        fit_to_count(listed, count, self.catalog.fallback_question(language))
    }

    fn capped(&self, count: usize) -> usize {
        if count > self.options.max_questions {
            tracing::warn!(
                requested = count,
                max = self.options.max_questions,
                "Question count capped"
            );
        }
        count.min(self.options.max_questions)
    }
}

pub fn system_prompt(language: &str) -> String {
    format!(
        "You are an expert {language} language assessment creator.\n\
         Generate questions that are clear, engaging, and appropriate for the specified level.\n\
         All questions must be in {language}.\n\
         Each question should be on a new line and numbered.\n\
         Do not include any additional text or formatting."
    )
}

pub fn build_prompt(request: &AssessmentRequest, label: &str) -> String {
    format!(
        "Generate exactly {count} {label} speaking assessment questions based on these criteria:\n\
         - Type: {kind}\n\
         - Topic: {topic}\n\
         - Difficulty: {difficulty}\n\
         - Language: {label}\n\
         \n\
         Requirements:\n\
         - Questions should be in {label}\n\
         - Each question should be on a new line\n\
         - Questions should be open-ended\n\
         - Encourage detailed responses\n\
         - Match the specified difficulty level\n\
         - Focus on the given topic\n\
         - Include a mix of personal experience and analytical thinking\n\
         \n\
         Format your response as follows:\n\
         1. [First question in {label}]\n\
         \n\
         2. [Second question in {label}]\n\
         \n\
         3. [Third question in {label}]\n\
         \n\
         Only include the numbered questions, one per line. No additional text or formatting.",
        count = request.number_of_questions,
        kind = request.question_type,
        topic = request.topic,
        difficulty = request.difficulty,
    )
}

/// Splits raw model output into question lines with fences, blank lines and
/// numbering removed.
pub fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("```"))
        .map(|line| line.replace("```", ""))
        .filter_map(|line| {
            let question = strip_numbering(line.trim()).trim();
            (!question.is_empty()).then(|| question.to_string())
        })
        .collect()
}

pub fn strip_numbering(line: &str) -> &str {
    NUMBERING_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(line).map(|m| &line[m.end()..]))
        .unwrap_or(line)
}

pub fn fit_to_count(mut questions: Vec<String>, count: usize, filler: &str) -> Vec<String> {
    questions.truncate(count);
    questions.resize(count, filler.to_string());
    questions
}

/// Full parse pipeline: parse, truncate to `count`, pad with `filler`.
pub fn extract_questions(text: &str, count: usize, filler: &str) -> Vec<String> {
    fit_to_count(parse_questions(text), count, filler)
}
