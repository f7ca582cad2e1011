//! Chart resolution: prefer an external ephemeris, fall back to synthesis

use crate::chart::{ChartSynthesizer, SyntheticChart};
use async_trait::async_trait;
use jyotish_core::UserContext;
use serde::Serialize;

const SYNTHESIZED_NOTICE: &str =
    "Using calculated data. Connect an ephemeris provider for detailed charts.";

/// External source of computed birth charts
#[async_trait]
pub trait ChartSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self, user: &UserContext) -> anyhow::Result<serde_json::Value>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ResolvedChart {
    External {
        provider: String,
        chart: serde_json::Value,
    },
    Synthesized {
        chart: SyntheticChart,
        notice: String,
    },
}

impl ResolvedChart {
    pub fn is_synthesized(&self) -> bool {
        matches!(self, ResolvedChart::Synthesized { .. })
    }
}

/// Never fails: any source error degrades to the synthesized chart
pub async fn resolve_chart(
    source: Option<&dyn ChartSource>,
    synth: &ChartSynthesizer,
    user: &UserContext,
) -> ResolvedChart {
    if let Some(source) = source {
        match source.fetch(user).await {
            Ok(chart) => {
                return ResolvedChart::External {
                    provider: source.name().to_string(),
                    chart,
                };
            }
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "chart source failed");
            }
        }
    }

    ResolvedChart::Synthesized {
        chart: synth.generate(user),
        notice: SYNTHESIZED_NOTICE.to_string(),
    }
}
