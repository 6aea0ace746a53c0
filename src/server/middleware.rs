//! Tower middleware for the log server: request logging and HTTP metrics.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::extract::Request;
use axum::response::Response;
use tower::{Layer, Service};

use super::metrics::{HttpLabels, HttpLabelsWithStatus, HttpMethod, Metrics};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Layer that emits one tracing event per handled request.
#[derive(Clone, Default)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService { inner }
    }
}

#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S> Service<Request> for TracingService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<Result<S::Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), S::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let start = Instant::now();

        let future = self.inner.call(req);
        Box::pin(async move {
            let response = future.await?;
            tracing::debug!(
                method = %method,
                path = %path,
                status = response.status().as_u16(),
                latency_ms = start.elapsed().as_millis() as u64,
                "handled request"
            );
            Ok(response)
        })
    }
}

/// Layer that records HTTP request count, latency, and in-flight gauge.
#[derive(Clone)]
pub struct MetricsLayer {
    metrics: Arc<Metrics>,
}

impl MetricsLayer {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }
}

impl<S> Layer<S> for MetricsLayer {
    type Service = MetricsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MetricsService {
            inner,
            metrics: self.metrics.clone(),
        }
    }
}

#[derive(Clone)]
pub struct MetricsService<S> {
    inner: S,
    metrics: Arc<Metrics>,
}

impl<S> Service<Request> for MetricsService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<Result<S::Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), S::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let metrics = self.metrics.clone();
        let method = HttpMethod::from(req.method());
        let endpoint = req.uri().path().to_string();
        let start = Instant::now();

        metrics.http_requests_in_flight.inc();

        let future = self.inner.call(req);
        Box::pin(async move {
            let response = future.await;
            metrics.http_requests_in_flight.dec();

            if let Ok(response) = &response {
                metrics
                    .http_request_duration_seconds
                    .get_or_create(&HttpLabels {
                        method: method.clone(),
                        endpoint: endpoint.clone(),
                    })
                    .observe(start.elapsed().as_secs_f64());
                metrics
                    .http_requests_total
                    .get_or_create(&HttpLabelsWithStatus {
                        method,
                        endpoint,
                        status: response.status().as_u16(),
                    })
                    .inc();
            }

            response
        })
    }
}
