use super::{Param, SearchContext, expect_results};
use crate::fixtures::geometries;
use crate::report::ValidationReport;

pub async fn validate_search_intersects(ctx: &SearchContext<'_>, report: &mut ValidationReport) {
    for (name, geometry) in geometries() {
        tracing::debug!(geometry = name, "intersects");
        let param = Param::new("intersects", geometry.to_string(), geometry);
        for &transport in ctx.transports() {
            expect_results(ctx, report, transport, &param).await;
        }
    }
}
