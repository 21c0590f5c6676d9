// Composition tests: verifying that the stages chain together correctly.
//
// These tests exercise the data flow between modules:
//   Key elements -> Basic summary -> Enhanced summary
// through the orchestrator, for the statistical model, encoder models and
// broken loaders, without sleeping through simulated latency.

use anyhow::Result as AnyResult;
use async_trait::async_trait;

use precis::config::Config;
use precis::error::SummarizeError;
use precis::models::registry::{EncoderKind, ModelRegistry, LOCAL_MODEL_ID};
use precis::models::session::ModelSession;
use precis::models::traits::{Encoder, EncoderLoader};
use precis::output::truncate_chars;
use precis::pipeline::summary::SummaryGenerator;
use precis::topics::extractor::KeyElementsExtractor;

const ARTICLE: &str = "Machine learning systems learn patterns from data. \
    Engineers collect large datasets before training any model. \
    Training adjusts model weights to reduce prediction errors. \
    Evaluation on held-out data checks whether the model generalizes. \
    Deployment brings the trained model to real users. \
    Monitoring catches drift when user data changes over time.";

fn generator_for(model: &str, session: ModelSession) -> SummaryGenerator {
    SummaryGenerator::new(
        ModelRegistry::get(model),
        session,
        Box::new(KeyElementsExtractor::default()),
        42,
    )
}

struct BrokenLoader;

#[async_trait]
impl EncoderLoader for BrokenLoader {
    fn supports(&self, _kind: EncoderKind) -> bool {
        true
    }

    async fn load(&self, _kind: EncoderKind) -> AnyResult<Box<dyn Encoder>> {
        anyhow::bail!("weights missing")
    }
}

struct NothingLoader;

#[async_trait]
impl EncoderLoader for NothingLoader {
    fn supports(&self, _kind: EncoderKind) -> bool {
        false
    }

    async fn load(&self, _kind: EncoderKind) -> AnyResult<Box<dyn Encoder>> {
        anyhow::bail!("never called")
    }
}

// ============================================================
// Chain: statistical model
// ============================================================

#[tokio::test]
async fn local_model_produces_all_three_views() {
    let mut generator = generator_for(LOCAL_MODEL_ID, ModelSession::simulated(false));
    let result = generator.summarize(ARTICLE, 3).await.unwrap();

    assert!(!result.key_elements.is_empty());
    assert!(!result.basic_summary.is_empty());
    assert!(!result.enhanced_summary.is_empty());
    assert_eq!(result.model, LOCAL_MODEL_ID);
}

#[tokio::test]
async fn local_extractive_summary_is_source_sentences_in_order() {
    let mut generator =
        generator_for(LOCAL_MODEL_ID, ModelSession::simulated(false)).with_rewrite_basic(false);
    let result = generator.summarize(ARTICLE, 2).await.unwrap();

    let picked: Vec<&str> = result.basic_summary.split_inclusive('.').map(str::trim).collect();
    assert_eq!(picked.len(), 2);
    let first = ARTICLE.find(picked[0]).unwrap();
    let second = ARTICLE.find(picked[1]).unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn sentence_count_is_clamped() {
    let mut generator =
        generator_for(LOCAL_MODEL_ID, ModelSession::simulated(false)).with_rewrite_basic(false);
    let result = generator.summarize(ARTICLE, 0).await.unwrap();
    assert_eq!(result.basic_summary.matches('.').count(), 1);
}

// ============================================================
// Chain: encoder models
// ============================================================

#[tokio::test]
async fn encoder_model_ranks_by_embeddings() {
    let mut generator = generator_for("mobilebert", ModelSession::simulated(false));
    let result = generator.summarize(ARTICLE, 3).await.unwrap();

    assert_eq!(result.basic_summary.matches('.').count(), 3);
    assert_eq!(
        generator.session().loaded_kind(),
        Some(EncoderKind::MobileBert)
    );
}

#[tokio::test]
async fn switching_encoders_evicts_the_previous_one() {
    let mut generator = generator_for("bert", ModelSession::simulated(false));
    generator.summarize(ARTICLE, 2).await.unwrap();
    generator.set_model("tinybert");
    generator.summarize(ARTICLE, 2).await.unwrap();
    assert_eq!(generator.session().loaded_kind(), Some(EncoderKind::TinyBert));
}

#[tokio::test]
async fn abstractive_model_rewrites_enhanced_summary() {
    let mut generator = generator_for("bart", ModelSession::simulated(false));
    let result = generator.summarize(ARTICLE, 3).await.unwrap();
    assert!(!result.enhanced_summary.is_empty());
    assert!(!result.enhanced_summary.contains("__ENTITY_"));
}

// ============================================================
// Failures
// ============================================================

#[tokio::test]
async fn load_failure_aborts_with_model_name() {
    let session = ModelSession::new(Box::new(BrokenLoader), false);
    let mut generator = generator_for("use", session);
    let err = generator.summarize(ARTICLE, 2).await.unwrap_err();

    match err {
        SummarizeError::ModelLoadFailure { model, reason } => {
            assert_eq!(model, ModelRegistry::get("use").name);
            assert!(reason.contains("weights missing"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unsupported_encoder_is_reported() {
    let session = ModelSession::new(Box::new(NothingLoader), false);
    let mut generator = generator_for("t5", session);
    let err = generator.summarize(ARTICLE, 2).await.unwrap_err();
    assert!(matches!(err, SummarizeError::UnsupportedModel(_)));
}

#[tokio::test]
async fn short_text_skips_the_encoder() {
    let session = ModelSession::new(Box::new(BrokenLoader), false);
    let mut generator = generator_for("use", session);
    let text = "Only one sentence that is long enough.";
    let result = generator.summarize(text, 3).await.unwrap();
    assert_eq!(result.basic_summary, text);
}

#[tokio::test]
async fn empty_input_is_rejected_before_extraction() {
    let err = precis::pipeline::summarize("\n\t ", 3).await.unwrap_err();
    assert!(matches!(err, SummarizeError::InvalidInput(_)));
}

// ============================================================
// Config -> generator -> JSON
// ============================================================

#[tokio::test]
async fn config_builds_a_working_generator() {
    let config = Config {
        model: "no-such-model".into(),
        rewrite_basic: false,
        ..Config::default()
    };
    let mut generator = SummaryGenerator::from_config(&config).unwrap();
    assert_eq!(generator.model().id, LOCAL_MODEL_ID);

    let result = generator.summarize(ARTICLE, 2).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["model"], LOCAL_MODEL_ID);
    assert!(json["key_elements"]["themes"].is_array());
    assert_eq!(json["basic_summary"], result.basic_summary.as_str());
}

#[test]
fn previews_truncate_on_char_boundaries() {
    let preview = truncate_chars("résumé résumé résumé", 6);
    assert_eq!(preview, "résumé...");
}
