//! Paging and sorting parameters and the page type returned by stores

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raw paging query parameters
///
/// This structure is extracted from the URL query string. Missing values are
/// resolved against the paging configuration by [`PageParams::resolve`].
///
/// # Example
/// ```text
/// GET /api/events?page=1&size=10&sort=name,DESC
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageParams {
    /// Page index (starts at 0)
    pub page: Option<usize>,

    /// Number of items per page
    pub size: Option<usize>,

    /// Sort property and direction
    ///
    /// # Format
    /// - `field` or `field,ASC` (ascending)
    /// - `field,DESC` (descending)
    pub sort: Option<String>,
}

impl PageParams {
    /// Resolve defaults and parse the sort expression
    ///
    /// `size` falls back to `default_size` and is clamped to `1..=max_size`.
    pub fn resolve(
        &self,
        default_size: usize,
        max_size: usize,
    ) -> Result<PageRequest, SortParseError> {
        let sort = match self.sort.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(raw.parse::<Sort>()?),
            _ => None,
        };

        Ok(PageRequest {
            page: self.page.unwrap_or(0),
            size: self
                .size
                .unwrap_or(default_size)
                .clamp(1, max_size.max(1)),
            sort,
        })
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

/// A single sort order on one property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

/// Error returned for a malformed `sort` expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort expression '{expression}': {reason}")]
pub struct SortParseError {
    pub expression: String,
    pub reason: String,
}

impl std::str::FromStr for Sort {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| SortParseError {
            expression: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split(',').map(str::trim);
        let property = parts.next().unwrap_or_default();
        if property.is_empty() {
            return Err(fail("missing property"));
        }

        let direction = match parts.next() {
            None => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
            Some(_) => return Err(fail("direction must be ASC or DESC")),
        };

        if parts.next().is_some() {
            return Err(fail("expected 'property,direction'"));
        }

        Ok(Sort {
            property: property.to_string(),
            direction,
        })
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.property, self.direction)
    }
}

/// Resolved paging request handed to a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Page index (starts at 0)
    pub page: usize,
    /// Page size (at least 1)
    pub size: usize,
    pub sort: Option<Sort>,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: None,
        }
    }

    pub fn with_sort(mut self, property: &str, direction: Direction) -> Self {
        self.sort = Some(Sort {
            property: property.to_string(),
            direction,
        });
        self
    }

    /// Index of the first element of this page
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Same request pointing at another page
    pub fn at_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// One page of a larger ordered result set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page
    pub content: Vec<T>,
    /// Page index (starts at 0)
    pub number: usize,
    /// Requested page size
    pub size: usize,
    /// Total number of items across all pages
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: usize) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size.max(1),
            total_elements,
        }
    }

    /// Total number of pages
    pub fn total_pages(&self) -> usize {
        self.total_elements.div_ceil(self.size.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    /// Transform the items while keeping the paging metadata, stopping at the first error
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            content: self.content.into_iter().map(f).collect::<Result<_, _>>()?,
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_defaults() {
        let request = PageParams::default().resolve(20, 2000).unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 20);
        assert!(request.sort.is_none());
    }

    #[test]
    fn test_page_params_clamps_size() {
        let params = PageParams {
            size: Some(10_000),
            ..Default::default()
        };
        assert_eq!(params.resolve(20, 2000).unwrap().size, 2000);

        let params = PageParams {
            size: Some(0),
            ..Default::default()
        };
        assert_eq!(params.resolve(20, 2000).unwrap().size, 1);
    }

    #[test]
    fn test_sort_parsing() {
        let sort: Sort = "name,DESC".parse().unwrap();
        assert_eq!(sort.property, "name");
        assert_eq!(sort.direction, Direction::Desc);

        let sort: Sort = "basePrice".parse().unwrap();
        assert_eq!(sort.direction, Direction::Asc);

        let sort: Sort = "name,asc".parse().unwrap();
        assert_eq!(sort.direction, Direction::Asc);
    }

    #[test]
    fn test_sort_parsing_rejects_bad_direction() {
        let err = "name,sideways".parse::<Sort>().unwrap_err();
        assert_eq!(err.expression, "name,sideways");
        assert!(",DESC".parse::<Sort>().is_err());
        assert!("name,DESC,extra".parse::<Sort>().is_err());
    }

    #[test]
    fn test_sort_display_round_trips_through_query() {
        let sort: Sort = "name,DESC".parse().unwrap();
        assert_eq!(sort.to_string(), "name,desc");
    }

    #[test]
    fn test_page_metadata() {
        let request = PageRequest::new(1, 10);
        let page = Page::new(vec![0; 10], &request, 30);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = Page::new(vec![0; 10], &request.at_page(2), 30);
        assert!(!last.has_next());
    }

    #[test]
    fn test_try_map_stops_at_first_error() {
        let page = Page::new(vec![1, 2, 3], &PageRequest::new(0, 10), 3);
        let doubled = page.clone().try_map(|n| Ok::<_, String>(n * 2)).unwrap();
        assert_eq!(doubled.content, vec![2, 4, 6]);
        assert_eq!(doubled.total_elements, 3);

        let failed = page.try_map(|n| if n == 2 { Err("two") } else { Ok(n) });
        assert_eq!(failed.unwrap_err(), "two");
    }

    #[test]
    fn test_last_representable_page_has_no_next() {
        let page: Page<u8> = Page::new(vec![], &PageRequest::new(usize::MAX, 10), 30);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_empty_page_has_no_pages() {
        let page: Page<u8> = Page::new(vec![], &PageRequest::new(0, 20), 0);
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }
}
