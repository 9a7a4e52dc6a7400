//! Listing Config

use clap::Args;

use storefront::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageSize, PageSizeError};

/// Product listing settings.
#[derive(Debug, Clone, Copy, Args)]
pub struct ListingConfig {
    /// Page size used when a request does not name one
    #[arg(long, env = "DEFAULT_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub default_page_size: u32,

    /// Largest page size a request may ask for
    #[arg(long, env = "MAX_PAGE_SIZE", default_value_t = MAX_PAGE_SIZE)]
    pub max_page_size: u32,
}

impl ListingConfig {
    /// Check the default page size against the configured maximum.
    ///
    /// # Errors
    ///
    /// Returns [`PageSizeError`] when the default is zero or exceeds the
    /// maximum; a maximum of zero therefore always fails.
    pub fn validate(&self) -> Result<PageSize, PageSizeError> {
        PageSize::new(self.default_page_size, self.max_page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(default_page_size: u32, max_page_size: u32) -> ListingConfig {
        ListingConfig {
            default_page_size,
            max_page_size,
        }
    }

    #[test]
    fn documented_defaults_are_valid() {
        assert_eq!(
            listing(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE).validate().map(PageSize::get),
            Ok(10)
        );
    }

    #[test]
    fn zero_maximum_is_rejected() {
        assert_eq!(
            listing(10, 0).validate(),
            Err(PageSizeError::AboveMaximum {
                requested: 10,
                maximum: 0
            })
        );
    }

    #[test]
    fn zero_default_is_rejected() {
        assert_eq!(listing(0, 50).validate(), Err(PageSizeError::Zero));
    }
}
