//! egui front-end: applicant form, risk verdict and model details.

use eframe::egui::{self, Frame, Margin, ProgressBar, RichText, Ui};

use crate::features::{self, ApplicantProfile, Category, ForeignWorker, NumericField, Telephone};
use crate::scoring::{self, Artifacts, Assessment};

use super::style;
use super::view_model;

/// Smallest window that keeps the sidebar and both columns readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// Renders the form and scores applicants against app-lifetime artifacts.
pub struct CreditGuardApp {
    artifacts: &'static Artifacts,
    profile: ApplicantProfile,
    assessment: Option<Assessment>,
    top_features: usize,
    visuals_set: bool,
}

impl CreditGuardApp {
    pub fn new(artifacts: &'static Artifacts, top_features: usize) -> Self {
        Self {
            artifacts,
            profile: ApplicantProfile::default(),
            assessment: None,
            top_features,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn run_assessment(&mut self) {
        let profile = ApplicantProfile {
            numeric: self.profile.numeric.clamped(),
            ..self.profile
        };
        let record = features::encode(&profile, &self.artifacts.schema);
        let assessment = scoring::assess(
            &self.artifacts.model,
            &self.artifacts.schema,
            &record,
            self.top_features,
        );
        tracing::info!(
            "Risk assessment: {} ({:.1}% confidence)",
            assessment.headline(),
            assessment.confidence()
        );
        self.assessment = Some(assessment);
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("applicant_profile")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Applicant Profile");
                    ui.add_space(6.0);
                    let numeric = &mut self.profile.numeric;
                    for &field in NumericField::ALL {
                        ui.label(field.label());
                        let value = numeric.get_mut(field);
                        if field == NumericField::Amount {
                            ui.add(egui::DragValue::new(value).range(field.range()).speed(50));
                        } else {
                            ui.add(egui::Slider::new(value, field.range()));
                        }
                    }

                    ui.add_space(10.0);
                    ui.separator();
                    ui.heading("Financial History");
                    ui.add_space(6.0);
                    let profile = &mut self.profile;
                    category_combo(ui, &mut profile.checking_account);
                    category_combo(ui, &mut profile.credit_history);
                    category_combo(ui, &mut profile.savings);
                    category_combo(ui, &mut profile.employment);
                    category_combo(ui, &mut profile.personal_status);
                    category_combo(ui, &mut profile.other_debtors);
                    category_combo(ui, &mut profile.property);
                    category_combo(ui, &mut profile.other_installment_plans);
                    category_combo(ui, &mut profile.housing);
                    category_combo(ui, &mut profile.job);
                    category_combo(ui, &mut profile.purpose);

                    ui.label("Telephone");
                    for &option in Telephone::ALL {
                        ui.radio_value(&mut profile.telephone, option, option.label());
                    }
                    ui.label("Foreign Worker");
                    ui.horizontal(|ui| {
                        for &option in ForeignWorker::ALL {
                            ui.radio_value(&mut profile.foreign_worker, option, option.label());
                        }
                    });
                });
            });
    }

    fn render_model_info(&self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::SidePanel::right("model_info")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Model Info");
                ui.add_space(6.0);
                for row in view_model::model_info(self.artifacts) {
                    ui.label(RichText::new(row.label).color(palette.text_muted));
                    ui.label(RichText::new(row.value).strong());
                    ui.add_space(4.0);
                }
            });
    }

    fn render_main(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Credit Risk Assessment");
            ui.label(
                "Enter the applicant's details in the sidebar and run the assessment \
                 to predict whether the applicant is a good or bad credit risk.",
            );
            ui.add_space(12.0);
            if ui.button("Run Risk Assessment").clicked() {
                self.run_assessment();
            }
            ui.add_space(12.0);
            if let Some(assessment) = &self.assessment {
                render_verdict(ui, assessment);
            }
        });
    }
}

impl eframe::App for CreditGuardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_sidebar(ctx);
        self.render_model_info(ctx);
        self.render_main(ctx);
    }
}

fn category_combo<C: Category>(ui: &mut Ui, value: &mut C) {
    ui.label(C::DOMAIN.title());
    egui::ComboBox::from_id_salt(C::DOMAIN)
        .selected_text(value.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for &option in C::ALL {
                ui.selectable_value(value, option, option.label());
            }
        });
    ui.add_space(4.0);
}

fn render_verdict(ui: &mut Ui, assessment: &Assessment) {
    let (text_color, fill) = style::verdict_colors(assessment.verdict);
    Frame::new()
        .fill(fill)
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(assessment.headline())
                    .color(text_color)
                    .size(20.0)
                    .strong(),
            );
            ui.label(assessment.detail());
            if !assessment.probability_estimated {
                ui.label(
                    RichText::new("This model provides no probability estimate.")
                        .color(style::palette().text_muted),
                );
            }
            ui.add_space(6.0);
            ui.add(
                ProgressBar::new(assessment.prob_good)
                    .text(format!("P(Good) {:.1}%", assessment.prob_good * 100.0)),
            );
        });

    let factors = view_model::factor_lines(assessment);
    if factors.is_empty() {
        return;
    }
    ui.add_space(12.0);
    ui.heading("Key Factors Influencing Prediction");
    ui.label(
        RichText::new("Global feature importances of the model, strongest first.")
            .color(style::palette().text_muted),
    );
    for (feature, importance) in factors {
        ui.horizontal(|ui| {
            ui.label(RichText::new(feature).strong());
            ui.label(importance);
        });
    }
}
