//! Page windows and navigation controls.

/// Number of websites per marketplace page.
pub const PAGE_SIZE: usize = 50;

/// Pages on either side of the current page in the navigation window.
const WINDOW_RADIUS: u32 = 2;

/// A page of records plus the total page count.
#[derive(Debug, PartialEq)]
pub struct PageWindow<'a, T> {
    pub items: &'a [T],
    pub page_count: u32,
}

/// Number of pages needed for `total` records.
pub fn page_count(total: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size) as u32
}

/// Slices `[(page-1)*page_size, page*page_size)` out of `records`.
///
/// Out-of-range pages yield an empty window; the end is clamped to the
/// record count.
pub fn paginate<T>(records: &[T], page: u32, page_size: usize) -> PageWindow<'_, T> {
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(records.len());
    let items = if start < end { &records[start..end] } else { &[] };

    PageWindow {
        items,
        page_count: page_count(records.len(), page_size),
    }
}

/// One navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: u32, disabled: bool },
    Page { number: u32, active: bool },
    Ellipsis,
    Next { target: u32, disabled: bool },
}

/// Builds the navigation for `current` out of `total` pages.
///
/// Nothing is shown for a single page. Otherwise the controls are Previous,
/// a window of `current ± 2`, the first and last pages when the window does
/// not reach them (with an ellipsis for skipped pages), and Next.
pub fn page_controls(current: u32, total: u32) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }

    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = current.saturating_add(WINDOW_RADIUS).min(total);
    let mut controls = vec![PageControl::Previous {
        target: current.saturating_sub(1),
        disabled: current <= 1,
    }];

    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls.extend((start..=end).map(|number| PageControl::Page {
        number,
        active: number == current,
    }));

    if end < total {
        if end < total - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: total,
            active: false,
        });
    }

    controls.push(PageControl::Next {
        target: current + 1,
        disabled: current >= total,
    });

    controls
}
