use super::config::GrpcServerConfig;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;
use tracing::info;

/// Startup logging and health reporting shared by gRPC binaries.
pub struct GrpcServer;

impl GrpcServer {
    pub fn log_startup(config: &GrpcServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            request_timeout_secs = config.request_timeout_secs,
            "gRPC server starting"
        );

        if config.enable_compression {
            info!("Zstd compression enabled");
        }

        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Marks `service_name` and the empty service name as serving.
    ///
    /// The empty name is what generic probes (grpc_health_probe, k8s) ask for.
    pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_status(health_reporter, service_name, ServingStatus::Serving).await;
        info!(service = service_name, "Service marked as serving");
    }

    /// Flips both statuses to NOT_SERVING, e.g. while draining on shutdown.
    pub async fn mark_not_serving(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_status(health_reporter, service_name, ServingStatus::NotServing).await;
        info!(service = service_name, "Service marked as not serving");
    }

    async fn set_status(
        health_reporter: &HealthReporter,
        service_name: &str,
        status: ServingStatus,
    ) {
        health_reporter
            .set_service_status(service_name, status)
            .await;
        health_reporter.set_service_status("", status).await;
    }
}

pub use tonic_health::server::health_reporter as create_health_service;
