use eframe::egui::{self, Align, Color32, CornerRadius, CursorIcon, Key, Layout, RichText, Sense};
use fcc_gallery_application::{
    ApplicationError, ApplicationService, CloseEventCommand, NextEventCommand, OpenEventCommand,
    PreviousEventCommand,
};
use fcc_gallery_domain::{DetailView, EventCatalog, Transition};

use super::theme;

const TILE_WIDTH: f32 = 260.0;
const TILE_IMAGE_HEIGHT: f32 = 190.0;
const MODAL_MAX_WIDTH: f32 = 960.0;
const TWO_COLUMN_MIN_WIDTH: f32 = 700.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    Open(usize),
    Previous,
    Next,
    Close,
}

pub fn apply(
    service: &mut ApplicationService,
    action: GalleryAction,
) -> Result<Transition, ApplicationError> {
    match action {
        GalleryAction::Open(index) => service.open_event(OpenEventCommand { index }),
        GalleryAction::Previous => Ok(service.previous_event(PreviousEventCommand)),
        GalleryAction::Next => Ok(service.next_event(NextEventCommand)),
        GalleryAction::Close => Ok(service.close_event(CloseEventCommand)),
    }
}

/// Arrow keys only move where the matching button would be shown.
pub fn keyboard_action(
    view: &DetailView<'_>,
    left_pressed: bool,
    right_pressed: bool,
) -> Option<GalleryAction> {
    if left_pressed && view.can_go_previous {
        return Some(GalleryAction::Previous);
    }
    if right_pressed && view.can_go_next {
        return Some(GalleryAction::Next);
    }
    None
}

pub fn show_tiles(ui: &mut egui::Ui, catalog: &EventCatalog) -> Option<GalleryAction> {
    let mut selected = None;

    ui.horizontal_wrapped(|ui| {
        for (index, event) in catalog.iter().enumerate() {
            let tile = theme::card_frame().show(ui, |ui| {
                ui.set_width(TILE_WIDTH);
                ui.add(
                    egui::Image::new(event.image.as_str())
                        .fit_to_exact_size(egui::vec2(TILE_WIDTH, TILE_IMAGE_HEIGHT))
                        .corner_radius(CornerRadius::same(6)),
                );
                ui.label(
                    RichText::new(format!("Event {}", index + 1))
                        .small()
                        .color(theme::COL_GOLD),
                );
                ui.label(RichText::new(&event.title).strong().size(17.0));
                ui.label(RichText::new("Tap for details ›").color(theme::COL_TEXT_DIM));
            });

            let response = tile
                .response
                .interact(Sense::click())
                .on_hover_cursor(CursorIcon::PointingHand);
            if response.clicked() {
                selected = Some(GalleryAction::Open(index));
            }
        }
    });

    selected
}

/// `true` for the transitions that put a different event on screen.
pub fn shows_new_event(transition: Transition) -> bool {
    matches!(transition, Transition::Opened(_) | Transition::Moved { .. })
}

/// Scroll state is shared by every event; `reset` rewinds it to the top.
fn detail_scroll_area(max_height: f32, reset: bool) -> egui::ScrollArea {
    let area = egui::ScrollArea::vertical()
        .id_salt("event_detail")
        .max_height(max_height);
    if reset {
        area.vertical_scroll_offset(0.0)
    } else {
        area
    }
}

pub fn show_modal(
    ctx: &egui::Context,
    view: &DetailView<'_>,
    reset_scroll: bool,
) -> Option<GalleryAction> {
    let (left_pressed, right_pressed) = ctx.input(|input| {
        (
            input.key_pressed(Key::ArrowLeft),
            input.key_pressed(Key::ArrowRight),
        )
    });
    let keyboard = keyboard_action(view, left_pressed, right_pressed);

    let screen = ctx.screen_rect();
    let width = (screen.width() - 80.0).clamp(320.0, MODAL_MAX_WIDTH);
    let max_height = screen.height() * 0.85;

    let response = egui::Modal::new(egui::Id::new("event_detail_modal"))
        .backdrop_color(Color32::from_black_alpha(242))
        .frame(theme::modal_frame())
        .show(ctx, |ui| {
            ui.set_width(width);
            let mut clicked = None;

            ui.horizontal(|ui| {
                if view.can_go_previous
                    && ui
                        .button(RichText::new("‹ Previous").color(theme::COL_GOLD))
                        .on_hover_text("Previous event")
                        .clicked()
                {
                    clicked = Some(GalleryAction::Previous);
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("✕").on_hover_text("Close").clicked() {
                        clicked = Some(GalleryAction::Close);
                    }
                    if view.can_go_next
                        && ui
                            .button(RichText::new("Next ›").color(theme::COL_GOLD))
                            .on_hover_text("Next event")
                            .clicked()
                    {
                        clicked = Some(GalleryAction::Next);
                    }
                });
            });

            detail_scroll_area(max_height, reset_scroll)
                .show(ui, |ui| detail_body(ui, view, width));

            clicked
        });

    if response.should_close() {
        return Some(GalleryAction::Close);
    }
    response.inner.or(keyboard)
}

fn detail_body(ui: &mut egui::Ui, view: &DetailView<'_>, width: f32) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(view.counter_label())
                .small()
                .color(theme::COL_MUTED),
        );
        ui.label(
            RichText::new(&view.record.title)
                .heading()
                .strong()
                .color(theme::COL_GOLD),
        );
    });
    ui.add_space(8.0);

    if width >= TWO_COLUMN_MIN_WIDTH {
        ui.columns(2, |columns| {
            event_image(&mut columns[0], view);
            event_details(&mut columns[1], view);
        });
    } else {
        event_image(ui, view);
        event_details(ui, view);
    }

    if view.record.note.is_empty() {
        return;
    }
    ui.add_space(8.0);
    theme::note_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(&view.record.note)
                .italics()
                .color(theme::COL_TEXT_DIM),
        );
    });
}

fn event_image(ui: &mut egui::Ui, view: &DetailView<'_>) {
    ui.add(
        egui::Image::new(view.record.image.as_str())
            .max_height(400.0)
            .max_width(ui.available_width())
            .maintain_aspect_ratio(true),
    );
}

fn event_details(ui: &mut egui::Ui, view: &DetailView<'_>) {
    for detail in &view.record.details {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&detail.label).strong().color(theme::COL_GOLD));
            ui.label(&detail.value);
        });
    }
}
