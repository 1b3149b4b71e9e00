//! 分页链接生成
//!
//! 一次查询的全部页面在第一页返回时就确定下来，之后翻页只回放这里生成的 URI。
//!
//! 每一页都保留原查询的 `where` 和 `network_code`，`offset` 按页递增，
//! `limit` 按页递减：
//!
//! ```text
//! limit=100 offset=0 total=250
//!
//!   page 1  limit=100 offset=0
//!   page 2  limit=75  offset=25
//!   page 3  limit=50  offset=50
//!   page 4  limit=25  offset=75
//! ```

use dfp_playground_api::QueryParams;

/// Rows per page.
pub const PAGE_SIZE: u32 = 25;

/// Build the request URI of every page for a query issued with `params`
/// against `route`.
///
/// `total` is the server's `totalResultSetSize`. `Some(0)` yields no pages;
/// a known total smaller than the limit caps the limit; `None` leaves the
/// limit as requested.
pub fn continuation_links(route: &str, params: &QueryParams, total: Option<u64>) -> Vec<String> {
    let mut limit = u64::from(params.limit);
    match total {
        Some(0) => return Vec::new(),
        Some(t) if t < limit => limit = t,
        _ => {}
    }

    let offset = u64::from(params.offset);
    let page_size = u64::from(PAGE_SIZE);
    let Some(span) = limit.checked_sub(offset).filter(|s| *s > 0) else {
        return Vec::new();
    };
    let page_count = span.div_ceil(page_size);

    (0..page_count)
        .map_while(|i| {
            let step = i * page_size;
            let page_limit = u32::try_from(limit - step).ok()?;
            let page_offset = u32::try_from(offset + step).ok()?;
            Some(
                QueryParams {
                    limit: page_limit,
                    offset: page_offset,
                    ..params.clone()
                }
                .uri(route),
            )
        })
        .collect()
}
