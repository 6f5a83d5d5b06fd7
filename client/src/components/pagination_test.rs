use super::*;

fn info(current_page: u32, last_page: u32) -> PageInfo {
    PageInfo { current_page, last_page, total: u64::from(last_page) * 10 }
}

#[test]
fn short_listing_shows_every_page() {
    assert_eq!(
        page_items(&info(2, 3)),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );
}

#[test]
fn long_listing_collapses_both_sides() {
    assert_eq!(
        page_items(&info(5, 9)),
        vec![
            PageItem::Page(1),
            PageItem::Gap,
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Gap,
            PageItem::Page(9),
        ]
    );
}

#[test]
fn first_page_collapses_tail_only() {
    assert_eq!(
        page_items(&info(1, 6)),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Gap, PageItem::Page(6)]
    );
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(page_items(&info(40, 2)), vec![PageItem::Page(1), PageItem::Page(2)]);
    assert_eq!(page_items(&PageInfo { current_page: 0, last_page: 0, total: 0 }), vec![PageItem::Page(1)]);
}

#[test]
fn huge_last_page_builds_only_the_window() {
    let items = page_items(&info(u32::MAX / 2, u32::MAX));
    assert_eq!(
        items,
        vec![
            PageItem::Page(1),
            PageItem::Gap,
            PageItem::Page(u32::MAX / 2 - 1),
            PageItem::Page(u32::MAX / 2),
            PageItem::Page(u32::MAX / 2 + 1),
            PageItem::Gap,
            PageItem::Page(u32::MAX),
        ]
    );
    assert_eq!(
        page_items(&info(u32::MAX, u32::MAX)),
        vec![PageItem::Page(1), PageItem::Gap, PageItem::Page(u32::MAX - 1), PageItem::Page(u32::MAX)]
    );
}
