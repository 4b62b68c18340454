// Uniform response wrapper shared by every route

use serde::{Deserialize, Serialize};

/// Response envelope: exactly one of `data`/`error` is non-null and
/// `success` always agrees with which one. `count` is only present on
/// list responses. Construct through the helpers below so a partially
/// filled envelope cannot be built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<usize>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            count: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            count: None,
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Success envelope for a list response; `count` mirrors the list length.
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            success: true,
            data: Some(items),
            error: None,
            count: Some(count),
        }
    }
}
