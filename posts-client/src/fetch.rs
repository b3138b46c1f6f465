use futures_util::future::join_all;
use posts_stats::PostRecord;
use tracing::{info, instrument, warn};

use crate::error::PostsClientError;
use crate::{PostsApi, SessionToken};

/// Fetches pages `1..=pages` concurrently and concatenates them in page order.
///
/// Every request runs to completion before this returns. If any page failed,
/// the error of the lowest failing page is returned and no posts are handed
/// back at all.
#[instrument(skip(api, token))]
pub async fn fetch_all_pages<A>(
    api: &A,
    token: &SessionToken,
    pages: u32,
) -> Result<Vec<PostRecord>, PostsClientError>
where
    A: PostsApi + ?Sized,
{
    if pages == 0 {
        return Err(PostsClientError::InvalidRequest(
            "page count must be at least 1".to_string(),
        ));
    }

    let results = join_all((1..=pages).map(|page| async move {
        (page, api.fetch_page(token, page).await)
    }))
    .await;

    let mut posts = Vec::new();
    let mut first_failure = None;
    for (page, result) in results {
        match result {
            Ok(mut page_posts) => posts.append(&mut page_posts),
            Err(e) => {
                warn!(page, error = %e, "page fetch failed");
                if first_failure.is_none() {
                    first_failure = Some(PostsClientError::PageFailed {
                        page,
                        source: Box::new(e),
                    });
                }
            }
        }
    }

    if let Some(e) = first_failure {
        return Err(e);
    }

    info!(posts = posts.len(), "all pages fetched");
    Ok(posts)
}
