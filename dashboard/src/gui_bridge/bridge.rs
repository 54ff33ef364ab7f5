use crate::workflow::runner::Runner;
use anyhow::Context;
use launchcore::telemetry::{LogManager, MetricsRecorder};
use launchcore::{PayloadRange, SiteSelection};
use serde::Deserialize;
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tokio::runtime::Builder;
use tokio::signal;
use warp::{
    http::StatusCode,
    reply::{Json, WithStatus},
    Filter, Rejection, Reply,
};

#[derive(Debug, Default, Deserialize)]
pub struct PieParams {
    site: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScatterParams {
    site: Option<String>,
    low: Option<String>,
    high: Option<String>,
}

fn parse_bound(raw: Option<&str>, name: &str) -> Result<Option<f64>, String> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| format!("`{}` must be a number, got `{}`", name, value)),
    }
}

fn bad_request(message: String, metrics: &MetricsRecorder) -> WithStatus<Json> {
    metrics.record_rejected();
    LogManager::new().record(&format!("rejected request: {}", message));
    warp::reply::with_status(
        warp::reply::json(&json!({"status": "error", "message": message})),
        StatusCode::BAD_REQUEST,
    )
}

fn pie_reply(
    params: PieParams,
    runner: Arc<Runner>,
    metrics: Arc<MetricsRecorder>,
) -> WithStatus<Json> {
    let selection = params
        .site
        .as_deref()
        .map(SiteSelection::parse)
        .unwrap_or_default();
    let chart = runner.pie(&selection);
    metrics.record_query();
    warp::reply::with_status(warp::reply::json(&chart), StatusCode::OK)
}

fn scatter_reply(
    params: ScatterParams,
    runner: Arc<Runner>,
    metrics: Arc<MetricsRecorder>,
) -> WithStatus<Json> {
    let bounds = parse_bound(params.low.as_deref(), "low")
        .and_then(|low| parse_bound(params.high.as_deref(), "high").map(|high| (low, high)));
    let (low, high) = match bounds {
        Ok(bounds) => bounds,
        Err(message) => return bad_request(message, &metrics),
    };

    let controls = runner.controls_from(params.site.as_deref(), low, high);
    let PayloadRange { low, high } = controls.payload;
    if low > high {
        return bad_request(
            format!("payload range is inverted: low {} > high {}", low, high),
            &metrics,
        );
    }

    let chart = runner.scatter(&controls.site, &controls.payload);
    metrics.record_query();
    warp::reply::with_status(warp::reply::json(&chart), StatusCode::OK)
}

/// HTTP surface: control layout, the two chart tables, and counters.
pub fn routes(
    runner: Arc<Runner>,
    metrics: Arc<MetricsRecorder>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let runner_filter = warp::any().map(move || runner.clone());
    let metrics_filter = warp::any().map(move || metrics.clone());

    let controls_route = warp::path("controls")
        .and(warp::path::end())
        .and(warp::get())
        .and(runner_filter.clone())
        .map(|runner: Arc<Runner>| warp::reply::json(runner.layout()));

    let pie_route = warp::path("pie")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<PieParams>())
        .and(runner_filter.clone())
        .and(metrics_filter.clone())
        .map(pie_reply);

    let scatter_route = warp::path("scatter")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<ScatterParams>())
        .and(runner_filter.clone())
        .and(metrics_filter.clone())
        .map(scatter_reply);

    let health_route = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(runner_filter)
        .and(metrics_filter)
        .map(|runner: Arc<Runner>, metrics: Arc<MetricsRecorder>| {
            warp::reply::json(&json!({
                "status": "ok",
                "records": runner.dataset().len(),
                "metrics": metrics.snapshot(),
            }))
        });

    controls_route
        .or(pie_route)
        .or(scatter_route)
        .or(health_route)
}

/// Serves the dashboard API until Ctrl+C.
pub fn serve(runner: Runner, bind: SocketAddr) -> anyhow::Result<()> {
    let metrics = Arc::new(MetricsRecorder::new());
    let routes = routes(Arc::new(runner), metrics.clone());

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("creating runtime for dashboard bridge")?;

    runtime.block_on(async move {
        let (addr, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(bind, async {
                if let Err(err) = signal::ctrl_c().await {
                    log::warn!("ctrl-c handler failed: {}", err);
                }
            })
            .with_context(|| format!("binding dashboard bridge to {}", bind))?;
        LogManager::new().record(&format!(
            "dashboard bridge listening on http://{} (Ctrl+C to stop)",
            addr
        ));
        server.await;
        Ok::<(), anyhow::Error>(())
    })?;

    let snapshot = metrics.snapshot();
    LogManager::new().record(&format!(
        "dashboard bridge stopped after {} queries ({} rejected)",
        snapshot.queries, snapshot.rejected
    ));
    Ok(())
}
