// src/ui/dashboard.rs
use eframe::egui;

use crate::api::AnalysisReport;
use crate::state::{AppState, BackendStatus};
use crate::theme;
use crate::utils;

const REGIONS: [(&str, &str); 3] = [
    ("us-east-1", "US East (N. Virginia)"),
    ("us-west-2", "US West (Oregon)"),
    ("eu-west-1", "EU (Ireland)"),
];

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("CloudOptimizer");
    ui.label(egui::RichText::new("Analyze and reduce your AWS costs").color(theme::MUTED));
    ui.add_space(12.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        if state.dashboard.has_results() {
            show_results(ui, state);
        } else {
            show_credentials_form(ui, state);
        }
    });
}

fn show_credentials_form(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.heading("Connect Your AWS Account");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("AWS Access Key ID:");
            ui.add_sized(
                [ui.available_width(), 20.0],
                egui::TextEdit::singleline(&mut state.dashboard.form.access_key)
                    .password(true)
                    .hint_text("AKIA..."),
            );
        });

        ui.horizontal(|ui| {
            ui.label("AWS Secret Access Key:");
            ui.add_sized(
                [ui.available_width(), 20.0],
                egui::TextEdit::singleline(&mut state.dashboard.form.secret_key)
                    .password(true)
                    .hint_text("wJalrXUtnFEM..."),
            );
        });

        ui.horizontal(|ui| {
            ui.label("AWS Region:");
            let selected_label = REGIONS
                .iter()
                .find(|(value, _)| *value == state.dashboard.form.region)
                .map(|(_, label)| (*label).to_string())
                .unwrap_or_else(|| state.dashboard.form.region.clone());
            egui::ComboBox::from_id_source("aws_region")
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    for (value, label) in REGIONS {
                        ui.selectable_value(
                            &mut state.dashboard.form.region,
                            value.to_string(),
                            label,
                        );
                    }
                });
        });

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let label = if state.dashboard.analyzing {
                "Analyzing..."
            } else {
                "Analyze My Account"
            };
            let clicked = ui
                .add_enabled(!state.dashboard.analyzing, egui::Button::new(label))
                .clicked();
            if state.dashboard.analyzing {
                ui.spinner();
            }
            if clicked {
                let ctx = ui.ctx().clone();
                state.start_analysis(&ctx);
            }
        });
    });

    ui.add_space(8.0);
    ui.colored_label(
        theme::NOTE_BLUE,
        "Note: Your credentials are never stored. Analysis happens in real-time \
         and credentials are discarded after use.",
    );

    ui.add_space(8.0);
    match state.backend_status {
        BackendStatus::Checking => {
            ui.colored_label(theme::MUTED, "Backend: checking...");
        }
        BackendStatus::Online => {
            ui.colored_label(theme::SAVINGS_GREEN, "Backend: online");
        }
        BackendStatus::Offline => {
            ui.colored_label(theme::ALERT_RED, "Backend: offline");
        }
    }
}

fn show_results(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(report) = state.dashboard.report.clone() else {
        return;
    };

    show_summary_cards(ui, &report);
    ui.add_space(16.0);

    if !report.ec2_recommendations.is_empty() {
        show_ec2_recommendations(ui, state, &report);
        ui.add_space(16.0);
    }

    if !report.storage_recommendations.is_empty() {
        show_storage_recommendations(ui, &report);
        ui.add_space(16.0);
    }

    show_spend_by_service(ui, &report);
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        if ui.button("Analyze Another Account").clicked() {
            state.dashboard.reset_results();
        }
        ui.colored_label(
            theme::MUTED,
            format!("Analyzed {}", utils::friendly_timestamp(&report.timestamp)),
        );
    });
}

fn show_summary_cards(ui: &mut egui::Ui, report: &AnalysisReport) {
    ui.horizontal(|ui| {
        let card_width = ui.available_width() / 3.0 - 12.0;

        summary_card(
            ui,
            card_width,
            "Total Potential Savings",
            &utils::dollars_in_thousands(report.total_potential_savings),
            "/year",
            theme::SAVINGS_GREEN,
        );
        summary_card(
            ui,
            card_width,
            "Monthly Spend",
            &utils::whole_dollars(report.cost_summary.total_30day_cost),
            "Last 30 days",
            theme::ACCENT,
        );
        summary_card(
            ui,
            card_width,
            "Recommendations",
            &report.recommendation_count().to_string(),
            "Actions to take",
            theme::ACTION_ORANGE,
        );
    });
}

fn summary_card(
    ui: &mut egui::Ui,
    width: f32,
    title: &str,
    value: &str,
    subtitle: &str,
    color: egui::Color32,
) {
    ui.group(|ui| {
        ui.set_min_width(width);
        ui.set_max_width(width);
        ui.vertical(|ui| {
            ui.colored_label(theme::MUTED, title);
            ui.label(egui::RichText::new(value).size(28.0).strong().color(color));
            ui.colored_label(theme::MUTED, subtitle);
        });
    });
}

fn show_ec2_recommendations(ui: &mut egui::Ui, state: &mut AppState, report: &AnalysisReport) {
    ui.group(|ui| {
        ui.heading("EC2 Recommendations");
        ui.add_space(8.0);

        for item in &report.ec2_recommendations {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.strong(&item.instance_id);
                        ui.horizontal(|ui| {
                            ui.colored_label(theme::MUTED, format!("Type: {} |", item.instance_type));
                            ui.colored_label(
                                theme::cpu_color(item.avg_cpu_7d),
                                format!("CPU: {}", utils::cpu_percent(item.avg_cpu_7d)),
                            );
                        });
                        ui.label(&item.recommendation);
                        ui.colored_label(
                            theme::MUTED,
                            format!(
                                "Cost: {}/month ({}/year)",
                                utils::dollars_cents(item.monthly_cost),
                                utils::dollars_cents(item.annual_cost)
                            ),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "Save {}/yr",
                                    utils::dollars_in_thousands(item.potential_savings)
                                ))
                                .strong()
                                .color(theme::SAVINGS_GREEN),
                            );

                            if state.dashboard.is_implemented(&item.instance_id) {
                                ui.colored_label(theme::SAVINGS_GREEN, "✓ Implemented");
                            } else {
                                let busy = state.dashboard.implementing.is_some();
                                let clicked = ui
                                    .add_enabled(!busy, egui::Button::new("Implement"))
                                    .clicked();
                                if state.dashboard.implementing.as_deref()
                                    == Some(item.instance_id.as_str())
                                {
                                    ui.spinner();
                                }
                                if clicked {
                                    let ctx = ui.ctx().clone();
                                    state.start_implement(item.instance_id.clone(), &ctx);
                                }
                            }
                        });
                    });
                });
            });
        }
    });
}

fn show_storage_recommendations(ui: &mut egui::Ui, report: &AnalysisReport) {
    ui.group(|ui| {
        ui.heading("Storage Recommendations");
        ui.add_space(8.0);

        for item in &report.storage_recommendations {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.strong(&item.bucket);
                    ui.colored_label(theme::MUTED, &item.issue);
                    ui.label(&item.recommendation);
                    ui.colored_label(
                        theme::MUTED,
                        format!("Cost: {}/month", utils::dollars_cents(item.monthly_cost)),
                    );
                });
            });
        }
    });
}

fn show_spend_by_service(ui: &mut egui::Ui, report: &AnalysisReport) {
    ui.group(|ui| {
        ui.heading("Spend by Service");
        ui.add_space(8.0);

        let plot = egui_plot::Plot::new("spend_by_service")
            .height(220.0)
            .allow_zoom(false)
            .allow_drag(false)
            .show_background(false)
            .show_axes([false, true])
            .include_y(0.0);

        plot.show(ui, |plot_ui| {
            let bars: Vec<egui_plot::Bar> = report
                .cost_summary
                .costs_by_service
                .iter()
                .enumerate()
                .map(|(i, (service, cost))| {
                    egui_plot::Bar::new(i as f64, *cost)
                        .name(service)
                        .width(0.6)
                        .fill(theme::ACCENT)
                })
                .collect();

            plot_ui.bar_chart(egui_plot::BarChart::new(bars));
        });

        // Per-service amounts below the chart; bar labels are hover-only.
        ui.add_space(4.0);
        for (service, cost) in &report.cost_summary.costs_by_service {
            ui.horizontal(|ui| {
                ui.label(service);
                ui.colored_label(theme::MUTED, utils::dollars_cents(*cost));
            });
        }
    });
}
