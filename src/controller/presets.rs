use crate::config::{Config, PageVariant};

const CARDS_PRESETS: &[&str] = &[
    "Find suppliers for industrial components",
    "Search for manufacturing partners",
    "Locate raw material suppliers",
    "Find quality certified vendors",
    "Search for international suppliers",
];

const COMPACT_PRESETS: &[&str] = &[
    "Electronic component distributors",
    "CNC machining shops",
    "Packaging material suppliers",
];

/// Canned queries offered while no results are shown.
///
/// Choosing one behaves exactly like typing it and submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetShortcuts {
    queries: Vec<String>,
}

impl PresetShortcuts {
    pub fn new<I, S>(queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queries: queries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn for_variant(variant: PageVariant) -> Self {
        match variant {
            PageVariant::Cards => Self::new(CARDS_PRESETS.iter().copied()),
            PageVariant::Compact => Self::new(COMPACT_PRESETS.iter().copied()),
        }
    }

    /// The configured override if any, otherwise the variant's set
    pub fn from_config(config: &Config) -> Self {
        match &config.presets {
            Some(queries) => Self::new(queries.iter().cloned()),
            None => Self::for_variant(config.page_variant),
        }
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.queries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

impl Default for PresetShortcuts {
    fn default() -> Self {
        Self::for_variant(PageVariant::default())
    }
}
