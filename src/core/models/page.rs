/// One page of a cursor-paginated collaborator response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Cursor for the next page. `None` means the collection is exhausted.
    pub next_token: Option<String>,
}
