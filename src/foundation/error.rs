pub type RectflowResult<T> = Result<T, RectflowError>;

#[derive(thiserror::Error, Debug)]
pub enum RectflowError {
    #[error("invalid length: \"{0}\"")]
    InvalidLength(String),

    #[error("unsupported node type: \"{0}\"")]
    UnsupportedNodeType(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RectflowError {
    pub fn invalid_length(spec: impl Into<String>) -> Self {
        Self::InvalidLength(spec.into())
    }

    pub fn unsupported_node_type(kind: impl Into<String>) -> Self {
        Self::UnsupportedNodeType(kind.into())
    }

    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RectflowError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
