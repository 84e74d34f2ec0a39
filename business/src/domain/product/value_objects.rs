use strum_macros::{AsRefStr, EnumString};

use super::errors::ProductError;

/// Page size used by the product listing endpoint.
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Columns a product search may be ordered by.
///
/// The `AsRefStr` form is the canonical name handed to the search function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ProductSortField {
    #[default]
    ProductId,
    Name,
    Price,
    Provider,
}

impl ProductSortField {
    pub fn parse(value: &str) -> Result<Self, ProductError> {
        value
            .trim()
            .parse::<Self>()
            .map_err(|_| ProductError::InvalidSortField)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Result<Self, ProductError> {
        value
            .trim()
            .parse::<Self>()
            .map_err(|_| ProductError::InvalidSortOrder)
    }
}

/// A 1-based page of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: i32,
    size: i32,
}

impl PageRequest {
    pub fn new(number: i32, size: i32) -> Result<Self, ProductError> {
        if number < 1 || size < 1 {
            return Err(ProductError::InvalidPage);
        }
        Ok(Self { number, size })
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of rows that precede this page.
    pub fn offset(&self) -> i64 {
        (i64::from(self.number) - 1) * i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductSearch {
    pub sort_field: ProductSortField,
    pub sort_order: SortOrder,
    pub name_filter: String,
    pub page: PageRequest,
}
