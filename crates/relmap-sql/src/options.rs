/// Controls how parameters are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Rendered for every parameter in positional form
    pub placeholder: String,

    /// Render parameters as `:column` instead of the placeholder
    pub named: bool,

    /// Leave null-valued columns out of an update's SET clause
    pub omit_empty: bool,

    /// Number placeholders while binding, e.g. `$1, $2`
    pub ordered: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            placeholder: "?".to_string(),
            named: false,
            omit_empty: false,
            ordered: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unnumbered `?` placeholders.
    pub fn mysql() -> Self {
        Self::default()
    }

    /// `?1, ?2, ...` once bound.
    pub fn sqlite() -> Self {
        Self::default().ordered(true)
    }

    /// `$1, $2, ...` once bound.
    pub fn postgresql() -> Self {
        Self::default().placeholder("$").ordered(true)
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn named(mut self, named: bool) -> Self {
        self.named = named;
        self
    }

    pub fn omit_empty(mut self, omit_empty: bool) -> Self {
        self.omit_empty = omit_empty;
        self
    }

    pub fn ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }
}
