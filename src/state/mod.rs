// src/state/mod.rs
use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use log::{info, warn};

use crate::api::{AnalysisClient, AnalysisReport, ApiError, HealthResponse, ImplementResponse};
use crate::settings::Settings;

pub mod dashboard_state;

pub use dashboard_state::DashboardState;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Home,
    Dashboard,
}

/// Outcome of the startup health probe, shown on the dashboard form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackendStatus {
    Checking,
    Online,
    Offline,
}

/// Completion events sent from worker threads back to the UI thread.
/// Drained once per frame in `AppState::drain_events`.
#[derive(Debug)]
pub enum WorkerEvent {
    AnalysisFinished(Result<AnalysisReport, ApiError>),
    HealthChecked(Result<HealthResponse, ApiError>),
    ImplementFinished {
        instance_id: String,
        result: Result<ImplementResponse, ApiError>,
    },
}

// Core application state
pub struct AppState {
    pub settings: Settings,
    pub client: AnalysisClient,

    pub current_screen: Screen,
    pub error_message: Option<String>,
    pub backend_status: BackendStatus,

    pub dashboard: DashboardState,

    events_tx: Sender<WorkerEvent>,
    events_rx: Receiver<WorkerEvent>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let client = AnalysisClient::new(settings.api_base_url.clone(), settings.request_timeout());
        let (events_tx, events_rx) = unbounded();

        Self {
            dashboard: DashboardState::new(settings.default_region.clone()),
            settings,
            client,
            current_screen: Screen::Home,
            error_message: None,
            backend_status: BackendStatus::Checking,
            events_tx,
            events_rx,
        }
    }

    /// Submit the credentials form to the analysis endpoint. Without both
    /// keys no request is made and the blocking alert shows instead.
    pub fn start_analysis(&mut self, ctx: &egui::Context) {
        if self.dashboard.analyzing {
            return;
        }
        if let Err(message) = self.dashboard.form.validate() {
            self.error_message = Some(message.to_string());
            return;
        }

        self.dashboard.analyzing = true;
        let request = self.dashboard.form.to_request();
        info!("submitting account analysis for region {}", request.aws_region);

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = client.analyze(&request);
            let _ = tx.send(WorkerEvent::AnalysisFinished(result));
            ctx.request_repaint();
        });
    }

    /// One-shot probe of the endpoint's health route, run at startup.
    pub fn start_health_probe(&mut self, ctx: &egui::Context) {
        self.backend_status = BackendStatus::Checking;

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = client.health();
            let _ = tx.send(WorkerEvent::HealthChecked(result));
            ctx.request_repaint();
        });
    }

    /// Ask the endpoint to implement one EC2 recommendation. The instance id
    /// doubles as the recommendation id; at most one such request in flight.
    pub fn start_implement(&mut self, instance_id: String, ctx: &egui::Context) {
        if self.dashboard.implementing.is_some() {
            return;
        }
        let Some(report) = &self.dashboard.report else {
            return;
        };

        self.dashboard.implementing = Some(instance_id.clone());
        info!("implementing recommendation for {}", instance_id);

        let analysis_id = report.analysis_id.clone();
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = client.implement_recommendation(&analysis_id, &instance_id);
            let _ = tx.send(WorkerEvent::ImplementFinished {
                instance_id,
                result,
            });
            ctx.request_repaint();
        });
    }

    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    pub fn apply_event(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::AnalysisFinished(Ok(report)) => {
                info!(
                    "analysis {} finished with {} recommendations",
                    report.analysis_id,
                    report.recommendation_count()
                );
                self.dashboard.analyzing = false;
                self.dashboard.report = Some(report);
            }
            WorkerEvent::AnalysisFinished(Err(error)) => {
                warn!("analysis failed: {}", error);
                self.dashboard.analyzing = false;
                self.error_message = Some(error.alert_message());
            }
            WorkerEvent::HealthChecked(Ok(health)) => {
                self.backend_status = if health.status == "ok" {
                    BackendStatus::Online
                } else {
                    BackendStatus::Offline
                };
            }
            WorkerEvent::HealthChecked(Err(error)) => {
                warn!("health probe failed: {}", error);
                self.backend_status = BackendStatus::Offline;
            }
            WorkerEvent::ImplementFinished {
                instance_id,
                result: Ok(response),
            } => {
                info!("recommendation {} implemented: {}", instance_id, response.message);
                self.dashboard.implementing = None;
                self.dashboard.implemented.insert(instance_id);
            }
            WorkerEvent::ImplementFinished {
                result: Err(error), ..
            } => {
                warn!("implement request failed: {}", error);
                self.dashboard.implementing = None;
                self.error_message = Some(error.alert_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Settings::default())
    }

    fn sample_report() -> AnalysisReport {
        serde_json::from_str(
            r#"{
                "analysis_id": "analysis_7",
                "timestamp": "2024-03-01T09:15:21",
                "total_potential_savings": 2045.03,
                "ec2_recommendations": [{
                    "instance_id": "i-0abc123def456",
                    "instance_type": "m5.xlarge",
                    "avg_cpu_7d": 3.4,
                    "monthly_cost": 140.16,
                    "annual_cost": 1681.92,
                    "recommendation": "Terminate instance",
                    "potential_savings": 1681.92
                }],
                "storage_recommendations": [],
                "cost_summary": {
                    "total_30day_cost": 2847.31,
                    "costs_by_service": {}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_missing_credentials_block_request_and_alert() {
        let mut state = state();
        let ctx = egui::Context::default();

        state.start_analysis(&ctx);

        assert!(!state.dashboard.analyzing);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Please enter AWS credentials")
        );
    }

    #[test]
    fn test_successful_analysis_switches_to_results() {
        let mut state = state();
        state.dashboard.analyzing = true;

        state.apply_event(WorkerEvent::AnalysisFinished(Ok(sample_report())));

        assert!(!state.dashboard.analyzing);
        assert!(state.dashboard.has_results());
    }

    #[test]
    fn test_failed_analysis_surfaces_server_detail() {
        let mut state = state();
        state.dashboard.analyzing = true;

        state.apply_event(WorkerEvent::AnalysisFinished(Err(ApiError::Endpoint {
            status: 400,
            detail: Some("Failed to get instances: AuthFailure".to_string()),
        })));

        assert!(!state.dashboard.analyzing);
        assert!(!state.dashboard.has_results());
        assert_eq!(
            state.error_message.as_deref(),
            Some("Failed to get instances: AuthFailure")
        );
    }

    #[test]
    fn test_health_probe_resolves_status() {
        let mut state = state();
        assert_eq!(state.backend_status, BackendStatus::Checking);

        state.apply_event(WorkerEvent::HealthChecked(Ok(HealthResponse {
            status: "ok".to_string(),
            timestamp: None,
        })));
        assert_eq!(state.backend_status, BackendStatus::Online);

        state.apply_event(WorkerEvent::HealthChecked(Err(ApiError::Network(
            "connection refused".to_string(),
        ))));
        assert_eq!(state.backend_status, BackendStatus::Offline);
    }

    #[test]
    fn test_implement_success_marks_record() {
        let mut state = state();
        state.dashboard.report = Some(sample_report());
        state.dashboard.implementing = Some("i-0abc123def456".to_string());

        state.apply_event(WorkerEvent::ImplementFinished {
            instance_id: "i-0abc123def456".to_string(),
            result: Ok(ImplementResponse {
                status: "success".to_string(),
                message: "Recommendation implemented".to_string(),
                savings: Some("$1681.92/year".to_string()),
            }),
        });

        assert!(state.dashboard.implementing.is_none());
        assert!(state.dashboard.is_implemented("i-0abc123def456"));
    }

    #[test]
    fn test_implement_failure_alerts_without_marking() {
        let mut state = state();
        state.dashboard.report = Some(sample_report());
        state.dashboard.implementing = Some("i-0abc123def456".to_string());

        state.apply_event(WorkerEvent::ImplementFinished {
            instance_id: "i-0abc123def456".to_string(),
            result: Err(ApiError::Endpoint {
                status: 404,
                detail: Some("Analysis not found".to_string()),
            }),
        });

        assert!(state.dashboard.implementing.is_none());
        assert!(!state.dashboard.is_implemented("i-0abc123def456"));
        assert_eq!(state.error_message.as_deref(), Some("Analysis not found"));
    }

    #[test]
    fn test_only_one_implement_request_in_flight() {
        let mut state = state();
        state.dashboard.report = Some(sample_report());
        state.dashboard.implementing = Some("i-busy".to_string());

        let ctx = egui::Context::default();
        state.start_implement("i-0abc123def456".to_string(), &ctx);

        assert_eq!(state.dashboard.implementing.as_deref(), Some("i-busy"));
    }
}
