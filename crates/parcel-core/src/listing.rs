//! # Listing Parameters
//!
//! Pure parsing of the `sort`, `page`, and `size` query parameters shared by
//! every listing endpoint.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      sort=<field>,<direction>                       │
//! │                                                                     │
//! │   "created_at,desc" ──► field: created_at   direction: DESC         │
//! │   "name,asc"        ──► field: name         direction: ASC          │
//! │   "name"            ──► field: name         direction: DESC         │
//! │   "bogus,asc"       ──► field: <default>    direction: ASC          │
//! │                                                                     │
//! │   Unknown fields fall back SILENTLY to the default - a bad sort     │
//! │   never fails a request. Directions other than "desc" mean ASC.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pagination is 1-based and bounded: out-of-range values are clamped, not
//! rejected, in the same spirit as the silent sort fallback.
//!
//! Fields come out as `&'static str` drawn from a whitelist, so the database
//! layer can interpolate them into `ORDER BY` without any injection risk.

// =============================================================================
// Sort Whitelists & Page Bounds
// =============================================================================

/// Sortable fields for customer listings.
pub const CUSTOMER_SORT_FIELDS: &[&str] = &["created_at", "name", "id"];

/// Sortable fields for parcel listings.
pub const PARCEL_SORT_FIELDS: &[&str] = &["created_at", "status", "tracking_code", "id"];

/// Sortable fields for scan listings.
pub const SCAN_SORT_FIELDS: &[&str] = &["ts", "id"];

/// Default page size for customer and parcel listings.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size for customer and parcel listings.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default page size for scan listings (timelines are longer).
pub const SCAN_DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size for scan listings.
pub const SCAN_MAX_PAGE_SIZE: u32 = 200;

// =============================================================================
// Sort Specification
// =============================================================================

/// Sort direction of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The SQL keyword for this direction.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A parsed, whitelisted sort specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Column to sort by. Always one of the whitelist entries.
    pub field: &'static str,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parses a raw `field,direction` parameter against a whitelist.
    ///
    /// ## Rules
    /// - Unknown or empty fields fall back silently to `default_field`
    /// - The direction token is `desc` (any case) or it means ascending
    /// - A missing direction token means descending (newest first)
    pub fn parse(raw: &str, allowed: &'static [&'static str], default_field: &'static str) -> Self {
        let mut parts = raw.splitn(2, ',');
        let field_token = parts.next().unwrap_or("").trim();
        let dir_token = parts.next().unwrap_or("desc").trim();

        let field = allowed
            .iter()
            .copied()
            .find(|candidate| *candidate == field_token)
            .unwrap_or(default_field);

        let direction = if dir_token.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };

        SortSpec { field, direction }
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// A 1-based, bounded page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Page number, >= 1.
    pub number: u32,
    /// Page size, within `1..=max` for the endpoint.
    pub size: u32,
}

impl Page {
    /// Builds a page from raw query values, clamping into the valid range.
    ///
    /// `page=0` becomes page 1, `size=0` becomes size 1, oversized pages
    /// are capped at `max_size`, missing values take the defaults.
    pub fn clamp(
        number: Option<u32>,
        size: Option<u32>,
        default_size: u32,
        max_size: u32,
    ) -> Self {
        Page {
            number: number.unwrap_or(1).max(1),
            size: size.unwrap_or(default_size).clamp(1, max_size),
        }
    }

    /// Row offset for `LIMIT ... OFFSET ...`.
    pub const fn offset(&self) -> i64 {
        ((self.number - 1) as i64) * (self.size as i64)
    }

    /// Row limit for `LIMIT ... OFFSET ...`.
    pub const fn limit(&self) -> i64 {
        self.size as i64
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_and_direction() {
        let spec = SortSpec::parse("name,asc", CUSTOMER_SORT_FIELDS, "created_at");
        assert_eq!(spec.field, "name");
        assert_eq!(spec.direction, SortDirection::Asc);

        let spec = SortSpec::parse("id,desc", CUSTOMER_SORT_FIELDS, "created_at");
        assert_eq!(spec.field, "id");
        assert_eq!(spec.direction, SortDirection::Desc);
    }

    #[test]
    fn test_parse_unknown_field_falls_back_silently() {
        let spec = SortSpec::parse("password,asc", CUSTOMER_SORT_FIELDS, "created_at");
        assert_eq!(spec.field, "created_at");
        // Direction still honored even when the field fell back
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn test_parse_missing_direction_means_desc() {
        let spec = SortSpec::parse("name", CUSTOMER_SORT_FIELDS, "created_at");
        assert_eq!(spec.field, "name");
        assert_eq!(spec.direction, SortDirection::Desc);
    }

    #[test]
    fn test_parse_garbage_direction_means_asc() {
        let spec = SortSpec::parse("name,sideways", CUSTOMER_SORT_FIELDS, "created_at");
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn test_parse_direction_is_case_insensitive() {
        let spec = SortSpec::parse("ts,DESC", SCAN_SORT_FIELDS, "ts");
        assert_eq!(spec.direction, SortDirection::Desc);
    }

    #[test]
    fn test_parse_empty_string_gives_default_desc() {
        let spec = SortSpec::parse("", PARCEL_SORT_FIELDS, "created_at");
        assert_eq!(spec.field, "created_at");
        assert_eq!(spec.direction, SortDirection::Desc);
    }

    #[test]
    fn test_page_clamp_defaults() {
        let page = Page::clamp(None, None, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.size, 20);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn test_page_clamp_bounds() {
        let page = Page::clamp(Some(0), Some(0), DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.size, 1);

        let page = Page::clamp(Some(3), Some(9999), DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        assert_eq!(page.number, 3);
        assert_eq!(page.size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_offset_math() {
        let page = Page::clamp(Some(3), Some(50), SCAN_DEFAULT_PAGE_SIZE, SCAN_MAX_PAGE_SIZE);
        assert_eq!(page.offset(), 100);
        assert_eq!(page.limit(), 50);
    }
}
