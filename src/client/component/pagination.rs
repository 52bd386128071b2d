use dioxus::prelude::*;

const PAGE_SIZES: [u64; 4] = [10, 25, 50, 100];

#[derive(Clone, PartialEq)]
pub struct PaginationData {
    /// Zero-indexed
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationData {
    /// 1-indexed bounds of the rows on the current page.
    pub fn range(&self) -> (u64, u64) {
        if self.total == 0 {
            return (0, 0);
        }
        let first = self.page * self.per_page + 1;
        let last = ((self.page + 1) * self.per_page).min(self.total);
        (first, last)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

/// Page controls writing straight into the `page` and `per_page` signals.
#[component]
pub fn Pagination(page: Signal<u64>, per_page: Signal<u64>, data: PaginationData) -> Element {
    let (first, last) = data.range();
    let has_previous = data.has_previous();
    let has_next = data.has_next();

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            per_page.set(value);
                            page.set(0);
                        }
                    },
                    for size in PAGE_SIZES {
                        option { value: "{size}", selected: per_page() == size, "{size}" }
                    }
                }
                span { "entries" }
            }
            div {
                class: "flex items-center gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "Showing {first} to {last} of {data.total}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-sm",
                        disabled: !has_previous,
                        onclick: move |_| {
                            if has_previous {
                                page.set(page() - 1);
                            }
                        },
                        "«"
                    }
                    button {
                        class: "join-item btn btn-sm pointer-events-none",
                        "Page {data.page + 1} of {data.total_pages}"
                    }
                    button {
                        class: "join-item btn btn-sm",
                        disabled: !has_next,
                        onclick: move |_| {
                            if has_next {
                                page.set(page() + 1);
                            }
                        },
                        "»"
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::PaginationData;

    fn data(page: u64, total: u64) -> PaginationData {
        PaginationData {
            page,
            per_page: 10,
            total,
            total_pages: total.div_ceil(10),
        }
    }

    #[test]
    fn reports_row_range() {
        assert_eq!(data(0, 25).range(), (1, 10));
        assert_eq!(data(2, 25).range(), (21, 25));
        assert_eq!(data(0, 0).range(), (0, 0));
    }

    #[test]
    fn knows_page_boundaries() {
        assert!(!data(0, 25).has_previous());
        assert!(data(0, 25).has_next());
        assert!(data(2, 25).has_previous());
        assert!(!data(2, 25).has_next());
    }
}
