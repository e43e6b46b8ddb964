// Main application layout
// Header, input panel, and the research report grid

use crate::state::{AppState, MainView};
use crate::ui::components::*;
use eframe::egui;
use product_scout_backend::research::{RequestState, ResearchResult};

const IDEA_INPUT_ID: &str = "idea_input";

const GREEN: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
const RED: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);
const YELLOW: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);
const PURPLE: egui::Color32 = egui::Color32::from_rgb(192, 132, 252);

/// Render the main application layout
/// Returns true when the user asked to submit the current idea
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState, request: &RequestState) -> bool {
    render_menu_bar(ctx, state);

    let mut submitted = false;
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                render_header(ui);
                ui.add_space(16.0);
                submitted = render_input_panel(ui, state, request);
                ui.add_space(24.0);
                render_main_content(ui, request);
            });
    });
    submitted
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.checkbox(&mut state.ui_state.dark_mode, "Dark Mode").changed() {
                    let visuals = if state.ui_state.dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    };
                    ctx.set_visuals(visuals);
                }
            });
        });
    });
}

fn render_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Product").size(36.0).strong());
            ui.label(egui::RichText::new("Scout AI").size(36.0).strong().color(ACCENT));
        });
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(
                "Leverage AI to get instant, comprehensive market research for your next big idea.",
            )
            .size(15.0)
            .weak(),
        );
    });
}

/// Render the idea input and Research button
/// Enter submits; Shift+Enter inserts a newline
fn render_input_panel(ui: &mut egui::Ui, state: &mut AppState, request: &RequestState) -> bool {
    let input_id = egui::Id::new(IDEA_INPUT_ID);
    let loading = request.is_loading();

    // Consume Enter before the text edit sees it so it does not insert a newline
    let has_focus = ui.memory(|m| m.has_focus(input_id));
    let enter_pressed = has_focus
        && !loading
        && ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));

    let mut clicked = false;
    ui.group(|ui| {
        ui.horizontal(|ui| {
            let button_width = 140.0;
            ui.add_enabled(
                state.input_enabled(request),
                egui::TextEdit::multiline(&mut state.idea)
                    .id(input_id)
                    .hint_text(
                        "Describe your product idea... e.g., 'A smart water bottle that tracks hydration and glows to remind you to drink.'",
                    )
                    .desired_rows(3)
                    .desired_width(ui.available_width() - button_width),
            );
            clicked = research_button(ui, state.can_submit(request), loading).clicked();
        });
    });

    clicked || enter_pressed
}

/// Render the area below the input panel
fn render_main_content(ui: &mut egui::Ui, request: &RequestState) {
    if let Some(message) = request.error_message() {
        error_banner(ui, message);
        ui.add_space(16.0);
    }

    match MainView::for_state(request) {
        MainView::Welcome => render_welcome_view(ui),
        MainView::Skeleton => render_card_grid(ui, |_, ui| skeleton_card(ui)),
        MainView::Report => {
            if let Some(result) = request.result() {
                render_card_grid(ui, |index, ui| render_report_card(ui, index, result));
            }
        }
        MainView::Error => {}
    }
}

/// Render welcome view when nothing has been submitted
fn render_welcome_view(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(egui::RichText::new("💡").size(48.0).color(ACCENT));
        ui.add_space(12.0);
        ui.heading(egui::RichText::new("Your Research Report Awaits").size(24.0));
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Enter your idea above to get started.").weak());
    });
}

/// Lay out six cards in a three-column grid
fn render_card_grid(ui: &mut egui::Ui, mut card: impl FnMut(usize, &mut egui::Ui)) {
    for row in 0..2 {
        ui.columns(3, |columns| {
            for (col, column) in columns.iter_mut().enumerate() {
                card(row * 3 + col, column);
            }
        });
        ui.add_space(16.0);
    }
}

fn render_report_card(ui: &mut egui::Ui, index: usize, result: &ResearchResult) {
    match index {
        0 => research_card(ui, "📈", "Market Analysis", |ui| {
            let market = &result.market_analysis;
            let strong = ui.visuals().strong_text_color();
            labeled_text(ui, "Target Audience", strong, &market.target_audience);
            labeled_text(ui, "Market Size", strong, &market.market_size);
            labeled_text(ui, "Key Trends", strong, &market.key_trends);
        }),
        1 => research_card(ui, "👥", "Competitive Landscape", |ui| {
            let strong = ui.visuals().strong_text_color();
            for competitor in &result.competitive_landscape {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(&competitor.name).strong().color(ACCENT));
                    labeled_text(ui, "Strengths", strong, &competitor.strengths);
                    labeled_text(ui, "Weaknesses", strong, &competitor.weaknesses);
                });
                ui.add_space(8.0);
            }
        }),
        2 => research_card(ui, "⚖", "SWOT Analysis", |ui| {
            let swot = &result.swot_analysis;
            labeled_text(ui, "Strengths", GREEN, &swot.strengths);
            labeled_text(ui, "Weaknesses", RED, &swot.weaknesses);
            labeled_text(ui, "Opportunities", YELLOW, &swot.opportunities);
            labeled_text(ui, "Threats", PURPLE, &swot.threats);
        }),
        3 => research_card(ui, "🛠", "Feature Suggestions", |ui| {
            bullet_list(ui, &result.feature_suggestions);
        }),
        4 => research_card(ui, "📣", "Marketing Strategy", |ui| {
            bullet_list(ui, &result.marketing_strategy);
        }),
        _ => research_card(ui, "⚠", "Potential Risks", |ui| {
            bullet_list(ui, &result.potential_risks);
        }),
    }
}
