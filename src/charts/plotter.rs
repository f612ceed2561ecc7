//! Chart Plotter Module
//! Bar charts and result tables drawn with egui / egui_plot.

use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Plot};

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

pub const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

/// Draws the dashboard's charts and tables.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn get_bar_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Short axis label for a team: initials of each word ("Mumbai Indians" -> "MI").
    pub fn team_abbreviation(team: &str) -> String {
        team.split_whitespace()
            .filter_map(|word| word.chars().next())
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_uppercase()
    }

    /// Vertical bar chart of a ranked (team, value) series.
    /// X-axis: teams in ranking order, Y-axis: values
    pub fn draw_bar_chart(ui: &mut egui::Ui, id: &str, series: &[(String, f64)], y_label: &str) {
        let x_labels: Vec<String> = series
            .iter()
            .map(|(team, _)| Self::team_abbreviation(team))
            .collect();

        let bars: Vec<Bar> = series
            .iter()
            .enumerate()
            .map(|(i, (team, value))| {
                Bar::new(i as f64, *value)
                    .name(team)
                    .width(0.7)
                    .fill(Self::get_bar_color(i))
            })
            .collect();

        Plot::new(format!("bar_{}", id))
            .height(280.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Team")
            .y_axis_label(y_label)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (idx - mark.value).abs() < 1e-6 {
                    x_labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Striped table with a header row. Every row must have `headers.len()` cells.
    pub fn draw_table(ui: &mut egui::Ui, id: &str, headers: &[&str], rows: &[Vec<String>]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(format!("table_{}", id)))
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for header in headers {
                            ui.label(RichText::new(*header).strong().size(12.0));
                        }
                        ui.end_row();

                        for row in rows {
                            for cell in row {
                                ui.label(RichText::new(cell).size(12.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    /// Single highlighted figure, e.g. an overall percentage.
    pub fn draw_metric(ui: &mut egui::Ui, label: &str, value: &str) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, HIGHLIGHT_COLOR))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).size(13.0).color(Color32::GRAY));
                    ui.label(
                        RichText::new(value)
                            .size(24.0)
                            .strong()
                            .color(HIGHLIGHT_COLOR),
                    );
                });
            });
    }
}
