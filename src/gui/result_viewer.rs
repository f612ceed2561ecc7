//! Result Viewer Widget
//! Central scrollable panel showing the output of the selected analysis.

use crate::charts::ChartPlotter;
use crate::stats::{Analysis, AnalysisOutput};
use egui::{RichText, ScrollArea};

/// Displays one analysis result: heading, callouts, optional bar chart and a table.
#[derive(Default)]
pub struct ResultViewer {
    current: Option<(Analysis, AnalysisOutput)>,
}

impl ResultViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_output(&mut self, analysis: Analysis, output: AnalysisOutput) {
        self.current = Some((analysis, output));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some((analysis, output)) = &self.current else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(RichText::new(analysis.heading()).size(22.0).strong());
                ui.add_space(10.0);

                if output.is_empty() && !matches!(output, AnalysisOutput::HeadToHead(_)) {
                    ui.label(RichText::new("No matching records").size(14.0));
                    return;
                }

                Self::draw_callouts(ui, output);

                if let Some(series) = output.team_series() {
                    ChartPlotter::draw_bar_chart(
                        ui,
                        analysis.label(),
                        &series,
                        Self::value_label(output),
                    );
                    ui.add_space(10.0);
                }

                let (headers, rows) = Self::table(output);
                if !rows.is_empty() {
                    ChartPlotter::draw_table(ui, analysis.label(), &headers, &rows);
                }
            });
    }

    fn draw_callouts(ui: &mut egui::Ui, output: &AnalysisOutput) {
        match output {
            AnalysisOutput::TossWin { overall_rate, .. } => {
                ChartPlotter::draw_metric(ui, "Overall Toss→Win %", &format!("{overall_rate}%"));
                ui.add_space(10.0);
            }
            AnalysisOutput::DominantWins(summary) => {
                if let Some(team) = &summary.most_dominant {
                    ChartPlotter::draw_metric(ui, "Most dominant team", team);
                    ui.label(
                        RichText::new("Wicket margins are weighted ×10 to sit on the runs scale.")
                            .size(11.0)
                            .italics(),
                    );
                    ui.add_space(10.0);
                }
            }
            AnalysisOutput::HeadToHead(record) => {
                ui.horizontal(|ui| {
                    ChartPlotter::draw_metric(ui, &record.team_a, &record.wins_a.to_string());
                    ui.add_space(10.0);
                    ChartPlotter::draw_metric(ui, &record.team_b, &record.wins_b.to_string());
                });
                ui.add_space(6.0);
                ui.label(format!(
                    "{}: {} | {}: {}  ({} meetings)",
                    record.team_a, record.wins_a, record.team_b, record.wins_b, record.matches
                ));
            }
            _ => {}
        }
    }

    fn value_label(output: &AnalysisOutput) -> &'static str {
        match output {
            AnalysisOutput::DominantWins(_) => "Mean adjusted margin",
            _ => "Percent",
        }
    }

    /// Table headers and formatted cells for an output.
    pub fn table(output: &AnalysisOutput) -> (Vec<&'static str>, Vec<Vec<String>>) {
        match output {
            AnalysisOutput::TossWin { teams, .. } => (
                vec!["Team", "Toss Wins", "Converted", "Toss-to-Win %"],
                teams
                    .iter()
                    .map(|r| {
                        vec![
                            r.team.clone(),
                            r.toss_wins.to_string(),
                            r.toss_and_match_wins.to_string(),
                            format!("{:.2}", r.rate),
                        ]
                    })
                    .collect(),
            ),
            AnalysisOutput::WinPercentage(rows) => (
                vec!["Team", "Played", "Wins", "Win %"],
                rows.iter()
                    .map(|r| {
                        vec![
                            r.team.clone(),
                            r.played.to_string(),
                            r.wins.to_string(),
                            format!("{:.2}", r.win_pct),
                        ]
                    })
                    .collect(),
            ),
            AnalysisOutput::DominantWins(summary) => (
                vec!["Team", "Wins Counted", "Mean Adjusted Margin"],
                summary
                    .teams
                    .iter()
                    .map(|t| {
                        vec![
                            t.team.clone(),
                            t.wins_counted.to_string(),
                            format!("{:.3}", t.mean_adjusted_margin),
                        ]
                    })
                    .collect(),
            ),
            AnalysisOutput::TopMotm(rows) => (
                vec!["Season", "Player", "Awards"],
                rows.iter()
                    .map(|r| vec![r.season.clone(), r.player.clone(), r.count.to_string()])
                    .collect(),
            ),
            AnalysisOutput::TopBatsmen(rows) => (
                vec!["Season", "Batter", "Runs", "Balls Faced", "Strike Rate"],
                rows.iter()
                    .map(|r| {
                        vec![
                            r.season.clone(),
                            r.batter.clone(),
                            r.runs.to_string(),
                            r.balls_faced.to_string(),
                            format!("{:.2}", r.strike_rate),
                        ]
                    })
                    .collect(),
            ),
            AnalysisOutput::TopWicketTakers(rows) => (
                vec!["Season", "Bowler", "Wickets"],
                rows.iter()
                    .map(|r| vec![r.season.clone(), r.bowler.clone(), r.wickets.to_string()])
                    .collect(),
            ),
            AnalysisOutput::TopCatchTakers(rows) => (
                vec!["Season", "Fielder", "Catches"],
                rows.iter()
                    .map(|r| vec![r.season.clone(), r.fielder.clone(), r.catches.to_string()])
                    .collect(),
            ),
            AnalysisOutput::HeadToHead(_) => (Vec::new(), Vec::new()),
        }
    }
}
