//! Presentation of sensor action links.
//!
//! Well-known action keys render as an icon with a title and no text; every
//! other key renders its own name as the link text.

/// Icon class and title for a well-known action key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionStyle {
    pub icon: &'static str,
    pub title: &'static str,
}

const KNOWN_ACTIONS: &[(&str, ActionStyle)] = &[
    (
        "json",
        ActionStyle {
            icon: "icon-file",
            title: "JSON direct link",
        },
    ),
    (
        "open",
        ActionStyle {
            icon: "icon-home",
            title: "Open URL",
        },
    ),
];

/// How a single action link is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionLabel<'a> {
    /// A well-known action: icon + title, empty link text.
    Icon(ActionStyle),
    /// Any other action: the key itself is the link text.
    Text(&'a str),
}

impl<'a> ActionLabel<'a> {
    /// Look up the label for an action key.
    #[must_use]
    pub fn for_key(key: &'a str) -> Self {
        KNOWN_ACTIONS
            .iter()
            .find(|(known, _)| *known == key)
            .map_or(Self::Text(key), |(_, style)| Self::Icon(*style))
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Icon(style) => style.icon,
            Self::Text(_) => "",
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Icon(style) => style.title,
            Self::Text(_) => "",
        }
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        match self {
            Self::Icon(_) => "",
            Self::Text(text) => *text,
        }
    }
}
