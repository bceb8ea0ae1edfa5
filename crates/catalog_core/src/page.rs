//! Explicit page sequence for incremental search results.

use crate::Product;

/// One fetched page. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    pub page: u32,
    pub page_size: u32,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    first_page: u32,
    page_size: u32,
    last_loaded: Option<u32>,
    has_more: bool,
}

impl PageCursor {
    pub fn new(first_page: u32, page_size: u32) -> Self {
        Self {
            first_page,
            page_size,
            last_loaded: None,
            has_more: true,
        }
    }

    /// Page to request next: the first page until one has loaded, then
    /// `last_loaded + 1`.
    pub fn next_page(&self) -> u32 {
        self.last_loaded
            .map_or(self.first_page, |page| page.saturating_add(1))
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn last_loaded(&self) -> Option<u32> {
        self.last_loaded
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    fn advance(&mut self, page: u32, item_count: usize) {
        self.last_loaded = Some(page);
        // A short page (including an empty one) is the last page.
        if item_count == 0 || item_count < self.page_size as usize {
            self.has_more = false;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSequence {
    cursor: PageCursor,
    pages: Vec<ResultPage>,
}

impl PageSequence {
    pub fn new(first_page: u32, page_size: u32) -> Self {
        Self {
            cursor: PageCursor::new(first_page, page_size),
            pages: Vec::new(),
        }
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn next_page(&self) -> u32 {
        self.cursor.next_page()
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more()
    }

    pub fn has_loaded_any(&self) -> bool {
        self.cursor.last_loaded().is_some()
    }

    pub fn pages(&self) -> &[ResultPage] {
        &self.pages
    }

    pub fn items(&self) -> impl Iterator<Item = &Product> {
        self.pages.iter().flat_map(|page| page.products.iter())
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|page| page.products.len()).sum()
    }

    /// Appends the products fetched for `page`.
    ///
    /// Returns `false` without changing anything when `page` is not the
    /// cursor's next page or no more pages are expected. Empty pages advance
    /// the cursor but are not stored.
    pub fn append(&mut self, page: u32, products: Vec<Product>) -> bool {
        if !self.cursor.has_more() || page != self.cursor.next_page() {
            return false;
        }
        self.cursor.advance(page, products.len());
        if !products.is_empty() {
            self.pages.push(ResultPage {
                page,
                page_size: self.cursor.page_size(),
                products,
            });
        }
        true
    }
}
