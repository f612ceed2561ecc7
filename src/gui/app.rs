//! IPL Insights Main Application
//! Main window with control panel and result viewer.

use crate::data::{DataLoader, DataSources, Dataset};
use crate::gui::{ControlPanel, ControlPanelAction, ResultViewer};
use crate::stats::AnalysisReport;
use egui::SidePanel;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use tracing::{error, info};

/// Dataset loading result from background thread
enum LoadResult {
    Complete(Dataset),
    Error(String),
}

/// Main application window.
pub struct InsightsApp {
    /// Loaded once at startup, shared read-only afterwards.
    dataset: Option<Arc<Dataset>>,
    control_panel: ControlPanel,
    result_viewer: ResultViewer,

    // Async dataset loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl InsightsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, sources: DataSources) -> Self {
        let mut app = Self {
            dataset: None,
            control_panel: ControlPanel::new(),
            result_viewer: ResultViewer::new(),
            load_rx: None,
            is_loading: false,
        };
        app.start_loading(sources);
        app
    }

    /// Load both tables in a background thread. Runs once per process.
    fn start_loading(&mut self, sources: DataSources) {
        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        self.is_loading = true;
        self.control_panel.set_progress(10.0, "Loading match data...");

        thread::spawn(move || {
            let result = match DataLoader::load(&sources) {
                Ok(dataset) => LoadResult::Complete(dataset),
                Err(e) => {
                    error!(error = %e, "Data unavailable");
                    LoadResult::Error(e.to_string())
                }
            };
            let _ = tx.send(result);
        });
    }

    /// Check for dataset loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete(dataset)) => {
                let teams = dataset.teams().into_iter().map(str::to_string).collect();
                self.control_panel.update_teams(teams);
                self.control_panel.set_progress(
                    100.0,
                    &format!(
                        "Loaded {} matches, {} deliveries",
                        dataset.matches().len(),
                        dataset.deliveries().len()
                    ),
                );
                self.dataset = Some(Arc::new(dataset));
                self.is_loading = false;
                self.run_selected_analysis();
            }
            Ok(LoadResult::Error(error)) => {
                self.control_panel
                    .set_progress(0.0, &format!("Error: {}", error));
                self.is_loading = false;
            }
            Err(TryRecvError::Empty) => {
                // Still loading
                self.load_rx = Some(rx);
            }
            Err(TryRecvError::Disconnected) => {
                self.control_panel
                    .set_progress(0.0, "Error: loader thread exited without a result");
                self.is_loading = false;
            }
        }
    }

    /// Compute the selected analysis over the cached dataset.
    fn run_selected_analysis(&mut self) {
        let Some(dataset) = self.dataset.as_ref() else {
            self.result_viewer.clear();
            return;
        };

        let analysis = self.control_panel.analysis;
        let output = analysis.run(dataset, &self.control_panel.params);
        info!(analysis = analysis.label(), empty = output.is_empty(), "Analysis computed");
        self.result_viewer.set_output(analysis, output);
    }

    /// Handle report export - compute every metric and write JSON
    fn handle_export_report(&mut self) {
        let Some(dataset) = self.dataset.clone() else {
            self.control_panel.set_progress(0.0, "No data loaded");
            return;
        };

        // Ask user for output location
        let output_path = match rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("ipl_insights_report.json")
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        self.control_panel.set_progress(40.0, "Computing report...");
        let report = AnalysisReport::build(&dataset);

        match report.write_json(&output_path) {
            Ok(()) => {
                self.control_panel.set_progress(
                    100.0,
                    &format!("Complete! Report exported to {}", output_path.display()),
                );
            }
            Err(e) => {
                error!(error = %e, "Report export failed");
                self.control_panel
                    .set_progress(0.0, &format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for InsightsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::AnalysisChanged | ControlPanelAction::TeamsChanged => {
                            self.run_selected_analysis()
                        }
                        ControlPanelAction::ExportReport => self.handle_export_report(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Result Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.result_viewer.show(ui);
        });
    }
}
