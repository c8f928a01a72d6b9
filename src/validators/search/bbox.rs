use serde_json::json;

use super::{Param, SearchContext, expect_rejected, expect_results};
use crate::client::Transport;
use crate::fixtures::{
    BRACKETED_GET_BBOX, BboxCase, DELIMITED_POST_BBOX, INVERTED_BBOX, VALID_BBOXES,
    WRONG_LENGTH_BBOXES,
};
use crate::report::ValidationReport;

fn bbox_param(case: &BboxCase) -> Param {
    Param::new("bbox", case.as_query(), case.as_json())
}

pub async fn validate_search_bbox(ctx: &SearchContext<'_>, report: &mut ValidationReport) {
    for case in VALID_BBOXES {
        let param = bbox_param(case);
        for &transport in ctx.transports() {
            expect_results(ctx, report, transport, &param).await;
        }
    }

    // Each transport has exactly one accepted encoding
    let bracketed = Param::new("bbox", BRACKETED_GET_BBOX, json!(BRACKETED_GET_BBOX));
    expect_rejected(ctx, report, Transport::Get, &bracketed, "").await;
    if ctx.post {
        let delimited = Param::new("bbox", DELIMITED_POST_BBOX, json!(DELIMITED_POST_BBOX));
        expect_rejected(ctx, report, Transport::Post, &delimited, "").await;
    }

    let inverted = bbox_param(&INVERTED_BBOX);
    for &transport in ctx.transports() {
        expect_rejected(ctx, report, transport, &inverted, " (lat 1 > lat 2)").await;
    }

    for case in WRONG_LENGTH_BBOXES {
        let param = bbox_param(case);
        for &transport in ctx.transports() {
            expect_rejected(ctx, report, transport, &param, "").await;
        }
    }
}
