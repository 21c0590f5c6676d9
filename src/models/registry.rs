// Static model registry.
//
// Every selectable model is listed here with its display metadata and the
// simulated costs of loading it and running it. Unknown identifiers resolve
// to the local statistical processor.

use std::fmt;

use serde::Serialize;

/// Identifier of the statistical processor, also the fallback for unknown ids.
pub const LOCAL_MODEL_ID: &str = "local";
/// Identifier of the "nothing selected yet" entry.
pub const PLACEHOLDER_MODEL_ID: &str = "placeholder";

/// Pricing/capability tier shown next to a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Standard,
    Premium,
    Professional,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Premium => write!(f, "premium"),
            Self::Professional => write!(f, "professional"),
        }
    }
}

/// Sentence encoders the session can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EncoderKind {
    Use,
    MobileBert,
    TinyBert,
    Bert,
    T5,
    Bart,
    Gpt2,
}

impl EncoderKind {
    /// Generative models whose enhanced summary is rewritten rather than
    /// re-extracted.
    pub fn is_abstractive(self) -> bool {
        matches!(self, Self::Gpt2 | Self::Bart | Self::T5)
    }
}

/// How a model produces its basic summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "encoder", rename_all = "lowercase")]
pub enum ModelKind {
    /// TextRank over lexical overlap, no model needed
    Statistical,
    /// TextRank over cosine similarity of encoder vectors
    Encoder(EncoderKind),
}

impl ModelKind {
    pub fn uses_ml(self) -> bool {
        matches!(self, Self::Encoder(_))
    }

    pub fn is_abstractive(self) -> bool {
        match self {
            Self::Encoder(kind) => kind.is_abstractive(),
            Self::Statistical => false,
        }
    }
}

/// Display metadata and simulated costs for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Download size as shown to users
    pub size: &'static str,
    /// Coarse size bucket (xs..xxl)
    pub size_class: &'static str,
    pub speed: &'static str,
    pub quality: &'static str,
    pub memory: &'static str,
    pub description: &'static str,
    pub tier: Tier,
    pub warning: Option<&'static str>,
    pub kind: ModelKind,
    /// The "nothing selected" entry; summarizing with it is an error
    pub is_placeholder: bool,
    /// Extra simulated load time in milliseconds
    pub load_delay_ms: u64,
    /// Extra simulated per-request inference time in milliseconds
    pub inference_delay_ms: u64,
}

const LOCAL: ModelInfo = ModelInfo {
    id: LOCAL_MODEL_ID,
    name: "Statistical Processor",
    size: "0MB",
    size_class: "xs",
    speed: "Very Fast",
    quality: "Basic",
    memory: "<50MB",
    description: "No ML model, only statistical analysis of the text. Nothing to download. \
                  Very fast, simpler summaries based on word overlap and position.",
    tier: Tier::Standard,
    warning: None,
    kind: ModelKind::Statistical,
    is_placeholder: false,
    load_delay_ms: 0,
    inference_delay_ms: 0,
};

static MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "gpt2",
        name: "GPT-2 Small",
        size: "548MB",
        size_class: "xxl",
        speed: "Very Slow",
        quality: "Excellent",
        memory: "1.5GB+",
        description: "Generative model capable of abstractive summaries that rephrase and \
                      restructure content rather than only extracting it.",
        tier: Tier::Professional,
        warning: Some(
            "This model requires significant memory and processing power. \
             It may be slow on less powerful machines.",
        ),
        kind: ModelKind::Encoder(EncoderKind::Gpt2),
        is_placeholder: false,
        load_delay_ms: 3000,
        inference_delay_ms: 2000,
    },
    ModelInfo {
        id: "bart",
        name: "BART Large",
        size: "432MB",
        size_class: "xl",
        speed: "Slow",
        quality: "Excellent",
        memory: "1GB+",
        description: "Bidirectional and auto-regressive transformer trained for summarization. \
                      Good semantic coherence and factual correctness.",
        tier: Tier::Professional,
        warning: None,
        kind: ModelKind::Encoder(EncoderKind::Bart),
        is_placeholder: false,
        load_delay_ms: 2500,
        inference_delay_ms: 1000,
    },
    ModelInfo {
        id: "t5",
        name: "T5 Base",
        size: "242MB",
        size_class: "xl",
        speed: "Medium-Slow",
        quality: "Very High",
        memory: "800MB+",
        description: "Text-to-text transformer trained on many NLP tasks including \
                      summarization. Well-structured summaries with good content selection.",
        tier: Tier::Premium,
        warning: None,
        kind: ModelKind::Encoder(EncoderKind::T5),
        is_placeholder: false,
        load_delay_ms: 2000,
        inference_delay_ms: 1000,
    },
    ModelInfo {
        id: "bert",
        name: "BERT Base",
        size: "109MB",
        size_class: "lg",
        speed: "Medium",
        quality: "High",
        memory: "500MB+",
        description: "Full BERT model with strong language understanding for extractive \
                      summarization.",
        tier: Tier::Premium,
        warning: None,
        kind: ModelKind::Encoder(EncoderKind::Bert),
        is_placeholder: false,
        load_delay_ms: 0,
        inference_delay_ms: 0,
    },
    ModelInfo {
        id: "use",
        name: "Universal Sentence Encoder",
        size: "33MB",
        size_class: "lg",
        speed: "Medium",
        quality: "High",
        memory: "400MB+",
        description: "Semantic sentence embeddings that capture the key concepts of a document \
                      and how they relate.",
        tier: Tier::Standard,
        warning: None,
        kind: ModelKind::Encoder(EncoderKind::Use),
        is_placeholder: false,
        load_delay_ms: 0,
        inference_delay_ms: 0,
    },
    ModelInfo {
        id: "mobilebert",
        name: "MobileBERT",
        size: "21MB",
        size_class: "md",
        speed: "Medium-Fast",
        quality: "Good",
        memory: "250MB+",
        description: "Compressed BERT tuned for constrained environments. Good context \
                      understanding with less memory than full BERT.",
        tier: Tier::Standard,
        warning: None,
        kind: ModelKind::Encoder(EncoderKind::MobileBert),
        is_placeholder: false,
        load_delay_ms: 0,
        inference_delay_ms: 0,
    },
    ModelInfo {
        id: "tinybert",
        name: "TinyBERT",
        size: "12MB",
        size_class: "sm",
        speed: "Fast",
        quality: "Good",
        memory: "150MB+",
        description: "Highly compressed BERT. A balance between quality and resource usage \
                      for quick processing.",
        tier: Tier::Standard,
        warning: None,
        kind: ModelKind::Encoder(EncoderKind::TinyBert),
        is_placeholder: false,
        load_delay_ms: 0,
        inference_delay_ms: 0,
    },
    LOCAL,
    ModelInfo {
        id: PLACEHOLDER_MODEL_ID,
        name: "Select a model",
        size: "-",
        size_class: "xs",
        speed: "-",
        quality: "-",
        memory: "-",
        description: "Select a summarization model to begin.",
        tier: Tier::Standard,
        warning: None,
        kind: ModelKind::Statistical,
        is_placeholder: true,
        load_delay_ms: 0,
        inference_delay_ms: 0,
    },
];

/// Lookup over the static model table.
pub struct ModelRegistry;

impl ModelRegistry {
    /// The model registered under `id`, or the local processor.
    pub fn get(id: &str) -> &'static ModelInfo {
        Self::find(id).unwrap_or_else(Self::local)
    }

    /// Exact lookup without the local fallback.
    pub fn find(id: &str) -> Option<&'static ModelInfo> {
        MODELS.iter().find(|m| m.id == id)
    }

    pub fn local() -> &'static ModelInfo {
        &LOCAL
    }

    /// Every registered model, placeholder included, in display order.
    pub fn all() -> &'static [ModelInfo] {
        MODELS
    }

    /// Selectable models (placeholder excluded).
    pub fn selectable() -> impl Iterator<Item = &'static ModelInfo> {
        MODELS.iter().filter(|m| !m.is_placeholder)
    }
}
