// src/ui/home.rs
use eframe::egui;

use crate::state::{AppState, Screen};
use crate::theme;

struct PricingPlan {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
}

const PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        price: "$29",
        features: &["Up to 10 AWS accounts", "Basic recommendations", "Email reports"],
    },
    PricingPlan {
        name: "Pro",
        price: "$99",
        features: &[
            "Unlimited accounts",
            "Advanced AI recommendations",
            "Slack integration",
            "API access",
        ],
    },
    PricingPlan {
        name: "Enterprise",
        price: "Custom",
        features: &[
            "Everything in Pro",
            "Dedicated support",
            "Custom integrations",
            "SLA",
        ],
    },
];

pub fn show_home_view(ui: &mut egui::Ui, state: &mut AppState) {
    // Hero
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("CloudOptimizer")
                .size(36.0)
                .strong()
                .color(theme::ACCENT),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(
                "Reduce your AWS costs by 30% on average with AI-powered optimization",
            )
            .size(18.0)
            .color(theme::MUTED),
        );
    });

    ui.add_space(32.0);

    // Pricing tiers
    ui.horizontal_top(|ui| {
        let card_width = ui.available_width() / PLANS.len() as f32 - 12.0;
        for plan in &PLANS {
            ui.group(|ui| {
                ui.set_min_width(card_width);
                ui.set_max_width(card_width);
                ui.vertical(|ui| {
                    ui.heading(plan.name);
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(plan.price)
                                .size(26.0)
                                .strong()
                                .color(theme::ACCENT),
                        );
                        if plan.price != "Custom" {
                            ui.label(egui::RichText::new("/month").color(theme::MUTED));
                        }
                    });

                    ui.add_space(12.0);
                    for feature in plan.features {
                        ui.horizontal(|ui| {
                            ui.colored_label(theme::SAVINGS_GREEN, "✓");
                            ui.label(*feature);
                        });
                    }

                    ui.add_space(12.0);
                    if ui.button("Get Started").clicked() {
                        state.current_screen = Screen::Dashboard;
                    }
                });
            });
        }
    });
}
