//! Control Panel Widget
//! Left side panel with the analysis selector, team pickers and export controls.

use crate::stats::{Analysis, AnalysisParams};
use egui::{Color32, ComboBox, RichText};

/// Left side control panel.
pub struct ControlPanel {
    pub analysis: Analysis,
    pub params: AnalysisParams,
    pub teams: Vec<String>,
    pub progress: f32,
    pub status: String,
    pub data_ready: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            analysis: Analysis::default(),
            params: AnalysisParams::default(),
            teams: Vec::new(),
            progress: 0.0,
            status: "Ready".to_string(),
            data_ready: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the team pickers after the dataset is loaded.
    pub fn update_teams(&mut self, teams: Vec<String>) {
        if self.params.team_a.is_empty() {
            self.params.team_a = teams.first().cloned().unwrap_or_default();
        }
        if self.params.team_b.is_empty() {
            self.params.team_b = teams.get(1).or(teams.first()).cloned().unwrap_or_default();
        }
        self.teams = teams;
        self.data_ready = true;
    }

    fn team_picker(
        ui: &mut egui::Ui,
        id: &str,
        label: &str,
        teams: &[String],
        selected: &mut String,
    ) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.add_sized([90.0, 20.0], egui::Label::new(label));
            ComboBox::from_id_salt(id)
                .width(190.0)
                .selected_text(selected.as_str())
                .show_ui(ui, |ui| {
                    for team in teams {
                        if ui.selectable_label(*selected == *team, team).clicked() {
                            *selected = team.clone();
                            changed = true;
                        }
                    }
                });
        });
        changed
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏏 IPL Insights")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Match & Delivery Analysis")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Analysis Section =====
        ui.label(RichText::new("📊 Select Analysis Section").size(14.0).strong());
        ui.add_space(5.0);

        ui.add_enabled_ui(self.data_ready, |ui| {
            ComboBox::from_id_salt("analysis")
                .width(280.0)
                .selected_text(self.analysis.label())
                .show_ui(ui, |ui| {
                    for analysis in Analysis::ALL {
                        if ui
                            .selectable_label(self.analysis == analysis, analysis.label())
                            .clicked()
                            && self.analysis != analysis
                        {
                            self.analysis = analysis;
                            action = ControlPanelAction::AnalysisChanged;
                        }
                    }
                });
        });

        // ===== Head-to-Head Teams =====
        if self.analysis.needs_teams() {
            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);
            ui.label(RichText::new("🤝 Teams").size(14.0).strong());
            ui.add_space(8.0);

            let team_a_changed = Self::team_picker(
                ui,
                "team1_select",
                "Select team 1",
                &self.teams,
                &mut self.params.team_a,
            );
            ui.add_space(5.0);
            let team_b_changed = Self::team_picker(
                ui,
                "team2_select",
                "Select team 2",
                &self.teams,
                &mut self.params.team_b,
            );
            if team_a_changed || team_b_changed {
                action = ControlPanelAction::TeamsChanged;
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.data_ready, |ui| {
                let button = egui::Button::new(RichText::new("📄 Export Full Report").size(14.0))
                    .min_size(egui::vec2(200.0, 32.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportReport;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.label(RichText::new("⏳ Status").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.progress > 0.0 && self.progress < 100.0),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Complete") || self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    AnalysisChanged,
    TeamsChanged,
    ExportReport,
}
