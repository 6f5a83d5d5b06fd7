//! Previous/next pager with a windowed page list.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::net::types::PageInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// First, last and the neighbours of the current page; a single gap marker
/// stands in for each skipped run. Work is constant in the page count.
#[must_use]
pub fn page_items(info: &PageInfo) -> Vec<PageItem> {
    let last = info.last_page.max(1);
    let current = info.current_page.clamp(1, last);
    let mut pages = vec![1, current.saturating_sub(1), current, current.saturating_add(1), last];
    pages.retain(|page| (1..=last).contains(page));
    pages.sort_unstable();
    pages.dedup();

    let mut items = Vec::with_capacity(pages.len() * 2);
    let mut previous = 0;
    for page in pages {
        if page > previous + 1 {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(page));
        previous = page;
    }
    items
}

#[component]
pub fn Pagination(
    #[prop(into)] info: Signal<PageInfo>,
    on_page: Callback<u32>,
    #[prop(optional)] numbered: bool,
) -> impl IntoView {
    let range = move || {
        let (from, to) = info.get().showing_range();
        format!("Showing {from} to {to} of {} results", info.get().total)
    };
    let current = move || info.get().current_page;

    view! {
        <Show when=move || { info.get().last_page > 1 }>
            <div class="pagination">
                <span class="pagination__range">{range}</span>
                <div class="pagination__controls">
                    <button
                        class="pagination__button"
                        disabled=move || !info.get().has_previous()
                        on:click=move |_| on_page.run(current().saturating_sub(1))
                    >
                        "Previous"
                    </button>
                    <Show when=move || numbered>
                        {move || {
                            page_items(&info.get())
                                .into_iter()
                                .map(|item| match item {
                                    PageItem::Page(page) => {
                                        view! {
                                            <button
                                                class="pagination__page"
                                                class:pagination__page--current=move || current() == page
                                                on:click=move |_| on_page.run(page)
                                            >
                                                {page}
                                            </button>
                                        }
                                            .into_any()
                                    }
                                    PageItem::Gap => view! { <span class="pagination__gap">"..."</span> }.into_any(),
                                })
                                .collect_view()
                        }}
                    </Show>
                    <button
                        class="pagination__button"
                        disabled=move || !info.get().has_next()
                        on:click=move |_| on_page.run(current() + 1)
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </Show>
    }
}
