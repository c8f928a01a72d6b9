use serde_json::json;

use super::{Param, SearchContext, expect_rejected, expect_results, features_of};
use crate::fixtures::{INVALID_LIMITS, VALID_LIMITS};
use crate::report::ValidationReport;

pub async fn validate_search_limit(ctx: &SearchContext<'_>, report: &mut ValidationReport) {
    let has_data = matches!(ctx.sample().await, Ok(page) if !page.items.is_empty());

    for &limit in VALID_LIMITS {
        let param = Param::new("limit", limit.to_string(), json!(limit));
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

            report.check(
                (features.len() as i64) <= limit,
                format!(
                    "{} Search with {} returned {} results, more than the limit",
                    transport,
                    desc,
                    features.len()
                ),
            );
            report.check(
                !has_data || !features.is_empty(),
                format!("{} Search with {} returned fewer than 1 result", transport, desc),
            );
        }
    }

    for &limit in INVALID_LIMITS {
        let param = Param::new("limit", limit.to_string(), json!(limit));
        for &transport in ctx.transports() {
            expect_rejected(ctx, report, transport, &param, "").await;
        }
    }
}
