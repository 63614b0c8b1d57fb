use crate::query::PageQuery;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageLinks {
    pub current: String,
    pub last: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl PageLinks {
    pub fn new(path: &str, query: PageQuery, total_count: u64) -> Self {
        let href = |page: u64| format!("{}?page={}&limit={}", path, page, query.limit);
        let last_page = total_count.div_ceil(query.limit).max(1);

        Self {
            current: href(query.page),
            last: href(last_page),
            prev: (query.page > 1).then(|| href(query.page - 1)),
            next: (query.offset().saturating_add(query.limit) < total_count).then(|| href(query.page + 1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub links: PageLinks,
    pub total_count: u64,
}

impl<T> Paginated<T> {
    pub fn new(path: &str, data: Vec<T>, query: PageQuery, total_count: u64) -> Self {
        Self {
            data,
            links: PageLinks::new(path, query, total_count),
            total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(page: u64, limit: u64, total_count: u64) -> PageLinks {
        PageLinks::new("/songs", PageQuery { page, limit }, total_count)
    }

    #[test]
    fn first_page_has_no_prev() {
        let links = links(1, 10, 25);

        assert_eq!(links.prev, None);
        assert_eq!(links.next.as_deref(), Some("/songs?page=2&limit=10"));
        assert_eq!(links.last, "/songs?page=3&limit=10");
    }

    #[test]
    fn last_page_has_no_next() {
        let links = links(3, 10, 25);

        assert_eq!(links.prev.as_deref(), Some("/songs?page=2&limit=10"));
        assert_eq!(links.next, None);
    }

    #[test]
    fn exact_multiple_ends_on_full_page() {
        let links = links(2, 5, 10);

        assert_eq!(links.next, None);
        assert_eq!(links.last, "/songs?page=2&limit=5");
    }

    #[test]
    fn empty_collection_has_single_page() {
        let links = links(1, 10, 0);

        assert_eq!(links.prev, None);
        assert_eq!(links.next, None);
        assert_eq!(links.current, links.last);
    }

    #[test]
    fn unset_links_are_omitted_from_json() {
        let json = serde_json::to_value(links(1, 10, 3)).unwrap();

        assert!(json.get("prev").is_none());
        assert!(json.get("next").is_none());
    }
}
