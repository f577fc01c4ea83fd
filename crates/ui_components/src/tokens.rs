//! Shared presentation tokens and class helpers for the component set.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Color scheme token emitted on every component root.
pub enum Theme {
    /// Light surfaces, dark text.
    Light,
    /// Dark surfaces, light text.
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Input-field visual variants.
pub enum FieldVariant {
    /// Bordered input on the page surface.
    Outlined,
    /// Solid background, borderless until focused.
    Filled,
    /// Transparent background and border.
    Ghost,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Outlined
    }
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Outlined => "outlined",
            Self::Filled => "filled",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Input-field sizing tokens.
pub enum FieldSize {
    /// Dense input.
    Sm,
    /// Default input.
    Md,
    /// Spacious input.
    Lg,
}

impl Default for FieldSize {
    fn default() -> Self {
        Self::Md
    }
}

impl FieldSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Supported input-field content kinds, mapped to the DOM `type` attribute.
pub enum InputKind {
    /// Free text.
    Text,
    /// Masked password entry with a reveal affordance.
    Password,
    /// Email address.
    Email,
    /// Numeric entry.
    Number,
}

impl Default for InputKind {
    fn default() -> Self {
        Self::Text
    }
}

impl InputKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
