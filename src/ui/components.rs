// Reusable UI components
// Cards, skeletons, banners and the research button

use eframe::egui;

/// Accent color used for headings and icons
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(56, 189, 248); // Sky

const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);
const SKELETON_FILL: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);
const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(69, 26, 26);
const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(252, 165, 165);

/// Render a titled research card with an icon
pub fn research_card(
    ui: &mut egui::Ui,
    icon: &str,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::none()
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).size(20.0).color(ACCENT));
                ui.add_space(8.0);
                ui.label(egui::RichText::new(title).heading().strong());
            });
            ui.add_space(12.0);
            add_contents(ui);
        });
}

/// Render a "Label: value" line with a colored label
pub fn labeled_text(ui: &mut egui::Ui, label: &str, color: egui::Color32, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(format!("{}:", label)).strong().color(color));
        ui.label(value);
    });
    ui.add_space(4.0);
}

/// Render a bulleted list of strings
pub fn bullet_list(ui: &mut egui::Ui, items: &[String]) {
    if items.is_empty() {
        ui.label(egui::RichText::new("None provided").italics().weak());
        return;
    }
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("•").color(ACCENT));
            ui.label(item);
        });
        ui.add_space(2.0);
    }
}

/// Render a placeholder card shown while loading
pub fn skeleton_card(ui: &mut egui::Ui) {
    egui::Frame::none()
        .fill(CARD_FILL)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            let width = ui.available_width();
            ui.set_width(width);
            for (w, h) in [(32.0, 32.0), (width * 0.75, 20.0), (width, 14.0), (width * 0.85, 14.0)] {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, egui::Rounding::same(4.0), SKELETON_FILL);
                ui.add_space(8.0);
            }
        });
}

/// Render the error banner
pub fn error_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::none()
        .fill(ERROR_FILL)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(message).color(ERROR_TEXT));
            });
        });
}

/// Render the Research button
/// Shows a spinner and "Analyzing..." while a request is in flight
pub fn research_button(ui: &mut egui::Ui, enabled: bool, loading: bool) -> egui::Response {
    if loading {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.add_enabled(false, egui::Button::new("Analyzing..."))
        })
        .inner
    } else {
        ui.add_enabled(
            enabled,
            egui::Button::new(egui::RichText::new("Research").strong()).fill(egui::Color32::from_rgb(2, 132, 199)),
        )
    }
}
