use crate::core::errors::Result;
use crate::core::models::page::Page;

/// Pull-based iterator over a cursor-paginated collection.
///
/// A page is fetched only once the previous one has been drained, so
/// dropping the iterator early (e.g. after `find`) never requests the
/// remaining pages. The sequence is not restartable. After the first
/// error it yields nothing more.
pub struct Paginated<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>>,
{
    fetch: F,
    buffer: std::vec::IntoIter<T>,
    next_token: Option<String>,
    exhausted: bool,
    pages: usize,
}

impl<T, F> Paginated<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>>,
{
    /// Wrap a page-fetching function. `fetch` receives `None` for the
    /// first page and the previous page's cursor afterwards.
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            buffer: Vec::new().into_iter(),
            next_token: None,
            exhausted: false,
            pages: 0,
        }
    }

    /// Number of pages requested so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }
}

impl<T, F> Iterator for Paginated<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            if self.exhausted {
                return None;
            }

            let token = self.next_token.take();
            match (self.fetch)(token.as_deref()) {
                Ok(page) => {
                    self.pages += 1;
                    // An empty cursor is treated the same as a missing one.
                    self.next_token = page.next_token.filter(|t| !t.is_empty());
                    self.exhausted = self.next_token.is_none();
                    self.buffer = page.items.into_iter();
                }
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
