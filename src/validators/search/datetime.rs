use serde_json::json;

use super::{Param, SearchContext, expect_rejected, expect_results, features_of};
use crate::fixtures::{INVALID_DATETIMES, VALID_DATETIMES};
use crate::report::ValidationReport;

fn datetime_param(literal: &str) -> Param {
    Param::new("datetime", literal, json!(literal))
}

pub async fn validate_search_datetime(ctx: &SearchContext<'_>, report: &mut ValidationReport) {
    validate_item_datetime(ctx, report).await;

    for literal in VALID_DATETIMES {
        let param = datetime_param(literal);
        for &transport in ctx.transports() {
            expect_results(ctx, report, transport, &param).await;
        }
    }

    for literal in INVALID_DATETIMES {
        let param = datetime_param(literal);
        for &transport in ctx.transports() {
            expect_rejected(ctx, report, transport, &param, "").await;
        }
    }
}

/// A server must find its own items by their own datetime
async fn validate_item_datetime(ctx: &SearchContext<'_>, report: &mut ValidationReport) {
    // A failed sample fetch is reported once by the dispatcher
    let Ok(page) = ctx.sample().await else {
        return;
    };
    let datetime = page.items.first().and_then(|item| item.datetime.clone());

    let Some(datetime) = datetime else {
        report.warn("GET Search with no parameters returned no Item with a datetime");
        return;
    };

    let param = datetime_param(&datetime);
    for &transport in ctx.transports() {
        let Some(body) = expect_results(ctx, report, transport, &param).await else {
            continue;
        };
        report.check(
            features_of(&body).is_some_and(|features| !features.is_empty()),
            format!(
                "{} Search with datetime={} extracted from an Item returned no results.",
                transport, datetime
            ),
        );
    }
}
