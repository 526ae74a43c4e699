use crate::models::comparison::{PageComparison, Variant};
use crate::services::site_audit_service::lighthouse::Measure;
use crate::utils::{display_name, page_url};
use futures::future::join_all;
use futures::stream::{self, Stream, StreamExt};
use log::debug;
use std::num::NonZeroUsize;

/// Measures every page on both deployments, `concurrency` pages at a time.
///
/// Pages are taken in groups of `concurrency`. Within a group every page
/// starts its before and after calls together, and the next group does not
/// start until the whole group has settled, so at most `2 * concurrency`
/// calls are ever in flight. Comparisons are yielded group by group; order
/// within a group follows the input.
///
/// Nothing is measured until the stream is polled.
pub fn process_pages_in_batches<'a, M: Measure>(
    slugs: &'a [String],
    old_base_url: &'a str,
    new_base_url: &'a str,
    client: &'a M,
    concurrency: NonZeroUsize,
) -> impl Stream<Item = PageComparison> + 'a {
    stream::iter(slugs.chunks(concurrency.get()).enumerate())
        .then(move |(index, batch)| async move {
            debug!("Starting batch {} ({} pages)", index + 1, batch.len());
            let comparisons = join_all(
                batch
                    .iter()
                    .map(|slug| compare_page(slug, old_base_url, new_base_url, client)),
            )
            .await;
            debug!("Finished batch {}", index + 1);
            comparisons
        })
        .flat_map(stream::iter)
}

async fn compare_page<M: Measure>(
    slug: &str,
    old_base_url: &str,
    new_base_url: &str,
    client: &M,
) -> PageComparison {
    let before_url = page_url(old_base_url, slug);
    let after_url = page_url(new_base_url, slug);

    // run old and new in parallel for the same page
    let (before, after) = futures::join!(
        client.measure(&before_url, Variant::Before),
        client.measure(&after_url, Variant::After)
    );

    PageComparison {
        page_id: slug.to_string(),
        display_name: display_name(slug),
        before,
        after,
    }
}
