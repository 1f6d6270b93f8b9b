use model::pagination::window::PageWindow;

/// One select round trip: the rendered query expression, the page window, and
/// an optional field projection. The condition string never changes once the
/// request's cursor is built; only the window moves between fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub q: String,
    pub window: PageWindow,
    pub fields: Vec<String>,
}

impl QueryRequest {
    pub fn builder(q: &str) -> QueryRequestBuilder {
        QueryRequestBuilder::new(q)
    }

    /// Query-string parameters for the select handler.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", self.q.clone()),
            ("start", self.window.start.to_string()),
            ("rows", self.window.rows.to_string()),
            ("wt", "json".to_string()),
        ];
        if !self.fields.is_empty() {
            params.push(("fl", self.fields.join(",")));
        }
        params
    }
}

pub struct QueryRequestBuilder {
    q: String,
    window: PageWindow,
    fields: Vec<String>,
}

impl QueryRequestBuilder {
    pub fn new(q: &str) -> Self {
        QueryRequestBuilder {
            q: q.to_string(),
            window: PageWindow::first(10),
            fields: Vec::new(),
        }
    }

    pub fn window(mut self, window: PageWindow) -> Self {
        self.window = window;
        self
    }

    pub fn fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn build(self) -> QueryRequest {
        QueryRequest {
            q: self.q,
            window: self.window,
            fields: self.fields,
        }
    }
}
