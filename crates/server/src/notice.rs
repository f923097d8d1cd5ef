use crate::encode::percent_encode;
use axum::response::Redirect;
use serde::Deserialize;

/// Severity of a transient notice banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Success,
    Danger,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// A one-shot user-visible notice, carried across a redirect as query
/// parameters on `/catalog` (no session or cookie state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub category: Category,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: Category::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            category: Category::Danger,
            message: message.into(),
        }
    }

    /// 303 redirect to the catalog page carrying this notice
    pub fn redirect_to_catalog(&self) -> Redirect {
        Redirect::to(&format!(
            "/catalog?notice={}&category={}",
            percent_encode(&self.message),
            self.category.as_str()
        ))
    }
}

/// Query parameters the catalog page accepts after a notice redirect
#[derive(Debug, Default, Deserialize)]
pub struct NoticeParams {
    pub notice: Option<String>,
    pub category: Option<String>,
}

impl NoticeParams {
    /// Reassembles the notice, if any. An unknown or absent category is
    /// treated as `danger`.
    pub fn notice(&self) -> Option<Notice> {
        self.notice.as_ref().map(|message| Notice {
            category: match self.category.as_deref() {
                Some("success") => Category::Success,
                _ => Category::Danger,
            },
            message: message.clone(),
        })
    }
}
