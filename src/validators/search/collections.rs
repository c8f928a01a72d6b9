use serde_json::{Value, json};

use super::{Param, SearchContext, expect_results, features_of};
use crate::report::ValidationReport;
use crate::validators::fetch_collections;

pub async fn validate_search_collections(
    ctx: &SearchContext<'_>,
    report: &mut ValidationReport,
) {
    let Some(collection_ids) = fetch_collection_ids(ctx, report).await else {
        return;
    };
    if collection_ids.is_empty() {
        report.warn(format!(
            "Collections ({}): returned no collections to search",
            ctx.collections_url
        ));
        return;
    }

    validate_collections(ctx, report, &collection_ids).await;

    for id in &collection_ids {
        validate_collections(ctx, report, std::slice::from_ref(id)).await;
    }

    // With three or fewer collections this is the same set as the first query
    if collection_ids.len() > 3 {
        validate_collections(ctx, report, &collection_ids[..3]).await;
    }
}

async fn fetch_collection_ids(
    ctx: &SearchContext<'_>,
    report: &mut ValidationReport,
) -> Option<Vec<String>> {
    let collections = fetch_collections(ctx.client, &ctx.collections_url, report).await?;
    Some(
        collections
            .iter()
            .filter_map(|c| c.get("id").and_then(Value::as_str).map(str::to_string))
            .collect(),
    )
}

async fn validate_collections(
    ctx: &SearchContext<'_>,
    report: &mut ValidationReport,
    collection_ids: &[String],
) {
    let param = Param::new("collections", collection_ids.join(","), json!(collection_ids));

    for &transport in ctx.transports() {
        let Some(body) = expect_results(ctx, report, transport, &param).await else {
            continue;
        };

        let desc = param.describe(transport);
        let Some(features) = features_of(&body) else {
            report.error(format!(
                "{} Search with {} did not return a 'features' array",
                transport, desc
            ));
            continue;
        };

        let foreign = features.iter().any(|feature| {
            let collection = feature.get("collection").and_then(Value::as_str);
            !collection.is_some_and(|c| collection_ids.iter().any(|wanted| wanted == c))
        });
        report.check(
            !foreign,
            format!(
                "{} Search with {} returned items from collections other than those specified",
                transport, desc
            ),
        );
    }
}
