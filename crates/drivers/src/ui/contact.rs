use eframe::egui::{self, RichText};
use fcc_gallery_domain::{ContactField, ContactForm, SiteSection, CONTACT_CATEGORIES};

use super::{sections, theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    Edit(ContactField, String),
    Submit,
}

pub fn show_form(
    ui: &mut egui::Ui,
    form: &ContactForm,
    target: &mut Option<SiteSection>,
) -> Vec<ContactAction> {
    sections::heading(ui, SiteSection::Contact, "Contact Us", target);
    let mut actions = Vec::new();

    if form.is_submitted() {
        theme::note_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("✔ Thank you! We'll get back to you soon.").strong());
        });
        return actions;
    }

    theme::card_frame().show(ui, |ui| {
        egui::Grid::new("contact_form")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                for field in ContactField::ALL {
                    ui.label(field.label());
                    let mut value = form.value(field).to_string();
                    let changed = match field {
                        ContactField::Category => category_picker(ui, &mut value),
                        ContactField::Message => ui
                            .add(egui::TextEdit::multiline(&mut value).desired_rows(4))
                            .changed(),
                        _ => ui.text_edit_singleline(&mut value).changed(),
                    };
                    if changed {
                        actions.push(ContactAction::Edit(field, value));
                    }
                    ui.end_row();
                }
            });

        if ui.button(RichText::new("Send Message").strong()).clicked() {
            actions.push(ContactAction::Submit);
        }
    });

    actions
}

fn category_picker(ui: &mut egui::Ui, value: &mut String) -> bool {
    let before = value.clone();
    let selected_text = if value.is_empty() {
        "Select a category"
    } else {
        value.as_str()
    }
    .to_string();

    egui::ComboBox::from_id_salt("contact_category")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for category in CONTACT_CATEGORIES {
                ui.selectable_value(value, category.to_string(), category);
            }
        });

    *value != before
}
