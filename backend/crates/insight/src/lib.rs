//! Insight normalization for the case dashboard.
//!
//! Backend aggregate responses arrive as [`RawPayload`] and only leave this
//! crate after passing through one of the adapters (`adapt_*`), which never
//! fail. Request builders are the opposite: they reject a missing
//! discriminator up front.

pub mod client;
pub mod coerce;
pub mod kpi;
pub mod requests;
pub mod series;
pub mod status;
pub mod stuck;
pub mod transport;

/// An untrusted response body exactly as the backend sent it.
pub type RawPayload = serde_json::Value;

pub use client::{InsightClient, InsightClientError, InsightOverview, OverviewParams};
pub use kpi::{adapt_kpi_summary, KpiSummary};
pub use requests::{build_distribution_request, build_stuck_query, build_trend_request};
pub use series::{adapt_distribution, adapt_trend, DistributionPoint, TrendPoint};
pub use stuck::{adapt_stuck_cases, StuckCase};
pub use transport::{HttpTransport, HttpTransportConfig, InsightTransport, TransportError};
