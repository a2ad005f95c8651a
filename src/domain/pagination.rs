/// A window into a listing, resolved the forgiving way: a page number that
/// is not a number falls back to the first page, one that is out of range
/// falls back to the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Pagination {
    pub number: i64,
    pub num_pages: i64,
    pub per_page: i64,
    pub total: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Pagination {
    pub fn locate(requested: Option<&str>, total: i64, per_page: i64) -> Self {
        let per_page = per_page.max(1);
        let total = total.max(0);
        // An empty listing still has one (empty) page.
        let num_pages = ((total + per_page - 1) / per_page).max(1);

        let number = match requested.map(str::trim).filter(|p| !p.is_empty()) {
            None => 1,
            Some(p) => match p.parse::<i64>() {
                Ok(n) if (1..=num_pages).contains(&n) => n,
                Ok(_) => num_pages,
                Err(_) => 1,
            },
        };

        Self {
            number,
            num_pages,
            per_page,
            total,
            has_previous: number > 1,
            has_next: number < num_pages,
        }
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}
