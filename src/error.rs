use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("shader {shader:?} exposes no properties; refusing to generate an empty controller")]
    EmptyProperties { shader: String },

    #[error("failed reading template {}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template line {index} is out of range (template has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    #[error("cannot pick a target shader, candidates: [{}]", candidates.join(", "))]
    AmbiguousTarget { candidates: Vec<String> },

    #[error("shaderlab line {line}: {message}")]
    ShaderLab { line: usize, message: String },

    #[error("missing required setting `{0}`")]
    MissingSetting(&'static str),
}
