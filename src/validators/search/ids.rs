use serde_json::json;

use super::{Param, SearchContext, expect_results, features_of};
use crate::report::ValidationReport;

pub async fn validate_search_ids(ctx: &SearchContext<'_>, report: &mut ValidationReport) {
    let Ok(page) = ctx.sample().await else {
        return;
    };

    let ids = page.ids();
    if ids.is_empty() {
        report.warn("GET Search with no parameters returned zero results");
        return;
    }

    let mut samples: Vec<&[String]> = vec![&ids[..1]];
    if ids.len() >= 2 {
        samples.push(&ids[..2]);
    }
    samples.push(&ids[..]);
    samples.dedup();

    for sample in samples {
        validate_ids(ctx, report, sample).await;
    }
}

async fn validate_ids(ctx: &SearchContext<'_>, report: &mut ValidationReport, ids: &[String]) {
    let param = Param::new("ids", ids.join(","), json!(ids));

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
            let id = feature.get("id").and_then(|v| v.as_str());
            !id.is_some_and(|id| ids.iter().any(|wanted| wanted == id))
        });
        report.check(
            !foreign,
            format!(
                "{} Search with {} returned items with ids other than specified one",
                transport, desc
            ),
        );
    }
}
