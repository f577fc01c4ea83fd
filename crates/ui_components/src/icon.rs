//! Centralized icon abstraction for the component set.
//!
//! Provides semantic icon identifiers and a single SVG renderer so the
//! widgets do not embed raw icon strings or ad-hoc SVG snippets. The catalog
//! uses a subset of Fluent UI System Icons (regular 24px) mapped to the
//! affordances the widgets need: sort direction, clear, password reveal, and
//! loading.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by the widgets.
pub enum IconName {
    /// Ascending sort indicator.
    ChevronUp,
    /// Descending sort indicator.
    ChevronDown,
    /// Dismiss/clear icon.
    Dismiss,
    /// Reveal-password icon.
    Eye,
    /// Hide-password icon.
    EyeOff,
    /// Indeterminate-progress arc; hosts animate it via the `data-ui-icon`
    /// hook.
    Spinner,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChevronUp => "chevron-up",
            Self::ChevronDown => "chevron-down",
            Self::Dismiss => "dismiss",
            Self::Eye => "eye",
            Self::EyeOff => "eye-off",
            Self::Spinner => "spinner",
        }
    }

    /// Raw SVG body markup for the icon.
    fn svg_body(self) -> &'static str {
        match self {
            Self::ChevronUp => {
                r#"<path d="M4.22 15.53c.3.3.77.3 1.06 0L12 8.81l6.72 6.72a.75.75 0 1 0 1.06-1.06l-7.25-7.25a.75.75 0 0 0-1.06 0l-7.25 7.25a.75.75 0 0 0 0 1.06Z"/>"#
            }
            Self::ChevronDown => {
                r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Eye => {
                r#"<path d="M12 9.005a3.5 3.5 0 1 1 0 7 3.5 3.5 0 0 1 0-7Zm0 1.5a2 2 0 1 0 0 4 2 2 0 0 0 0-4ZM12 5.5c4.613 0 8.596 3.15 9.701 7.564a.75.75 0 1 1-1.455.365 8.503 8.503 0 0 0-16.493.004.75.75 0 0 1-1.456-.363A10.003 10.003 0 0 1 12 5.5Z"/>"#
            }
            Self::EyeOff => {
                r#"<path d="m2.22 2.22 19.5 19.5a.75.75 0 0 1-.976 1.134l-.084-.073-3.355-3.355a10.01 10.01 0 0 1-14.808-5.862.75.75 0 0 1 1.455-.363 8.51 8.51 0 0 0 12.243 5.116l-2.532-2.532a3.5 3.5 0 0 1-4.808-4.808L3.28 4.341l-.073-.084a.75.75 0 0 1 .976-1.134l.037.036Zm7.984 10.105a2 2 0 0 0 2.47 2.47l-2.47-2.47ZM12 5.5c4.613 0 8.596 3.15 9.701 7.564a.75.75 0 1 1-1.455.365 8.503 8.503 0 0 0-12.06-5.534L7.06 6.77A9.96 9.96 0 0 1 12 5.5Zm.195 3.51 3.801 3.8a3.5 3.5 0 0 0-3.8-3.8Z"/>"#
            }
            Self::Spinner => {
                r#"<path d="M12 4.5A7.5 7.5 0 1 0 19.5 12a.75.75 0 0 1 1.5 0A9 9 0 1 1 12 3a.75.75 0 0 1 0 1.5Z"/>"#
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px compact icon (sort chevrons).
    Xs,
    /// 16px standard icon (field adornments).
    Sm,
    /// 20px prominent icon (empty/loading panels).
    Md,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Sm
    }
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[component]
/// Renders an SVG icon from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
