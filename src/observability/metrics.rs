use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry};

pub const REDEEMED: &str = "redeemed";
pub const NOT_FOUND: &str = "not_found";

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token lifecycle
    pub tokens_issued: IntCounter,
    pub token_redemptions: IntCounterVec,
    pub token_redeem_duration: HistogramVec,
    pub outstanding_tokens: IntGauge,

    // Runtime
    pub up: IntGauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("idempotence".into()), None)?;

        let metrics = Self {
            tokens_issued: IntCounter::new("tokens_issued_total", "Total issued tokens")?,
            token_redemptions: IntCounterVec::new(Opts::new("token_redemptions_total", "Redemption attempts by result"), &["result"])?,
            token_redeem_duration: HistogramVec::new(HistogramOpts::new("token_redeem_duration_seconds", "Redemption duration seconds").buckets(vec![0.000_01, 0.000_05, 0.0001, 0.0005, 0.001, 0.005, 0.01]), &["result"])?,
            outstanding_tokens: IntGauge::new("outstanding_tokens", "Issued and not yet redeemed tokens")?,
            up: IntGauge::new("up", "1 if service is healthy")?,

            registry,
        };

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.tokens_issued.clone()))?;
        reg.register(Box::new(metrics.token_redemptions.clone()))?;
        reg.register(Box::new(metrics.token_redeem_duration.clone()))?;
        reg.register(Box::new(metrics.outstanding_tokens.clone()))?;
        reg.register(Box::new(metrics.up.clone()))?;

        Ok(metrics)
    }
}
