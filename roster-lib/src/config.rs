//! View configuration

/// Configuration for table views.
///
/// # Example
///
/// ```
/// use roster_lib::ViewConfig;
///
/// let config = ViewConfig::default()
///     .with_default_page_size(20)
///     .with_page_size_options(vec![20, 50, 100]);
/// assert_eq!(config.default_page_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Page size a new view starts with.
    ///
    /// Default: 10
    pub default_page_size: usize,

    /// Page sizes offered by the page-size selector.
    ///
    /// Default: 10, 20, 30, 40, 50
    pub page_size_options: Vec<usize>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![10, 20, 30, 40, 50],
        }
    }
}

impl ViewConfig {
    /// Creates a new view config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting page size. Zero is raised to one.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size.max(1);
        self
    }

    /// Sets the offered page sizes.
    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Returns `true` if `size` is one of the offered page sizes.
    pub fn offers(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }
}
