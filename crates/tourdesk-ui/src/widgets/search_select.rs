//! Product search box with live-filtered candidate popup
//!
//! Presentation binding for the search controller: a text field whose every
//! keystroke recomputes the candidate set, with a popup list underneath.
//! The first candidate carries the active auto-selection; hovering moves the
//! highlight, click or Enter commits an explicit selection, Escape closes.
//!
//! The popup hide is deferred by a short fixed delay after the field loses
//! focus so a simultaneous click on a candidate row is not swallowed. This
//! only affects popup visibility, never the underlying search state.

use egui::{Color32, Key, RichText, ScrollArea, TextEdit, Ui};

use crate::state::CustomerListState;

/// Seconds to keep the popup visible after the field loses focus.
const POPUP_HIDE_DELAY: f64 = 0.15;

const FIELD_WIDTH: f32 = 220.0;
const POPUP_MAX_HEIGHT: f32 = 180.0;

/// Render the search box and its candidate popup.
pub fn product_search_box(ui: &mut Ui, state: &mut CustomerListState) {
    let field_id = ui.make_persistent_id("product_search_box");

    let response = ui.add(
        TextEdit::singleline(&mut state.search_box.buffer)
            .id(field_id)
            .hint_text("Type to search products...")
            .desired_width(FIELD_WIDTH),
    );

    if response.changed() {
        let query = state.search_box.buffer.clone();
        state.set_query(query);
        state.search_box.popup_open = true;
        state.search_box.hide_after = None;
        state.search_box.highlighted = 0;
    }

    if response.gained_focus() {
        state.search_box.popup_open = true;
        state.search_box.hide_after = None;
    }

    let now = ui.input(|i| i.time);
    if response.lost_focus() {
        // Deferred close: let a click land on the popup first.
        state.search_box.hide_after = Some(now + POPUP_HIDE_DELAY);
    }
    if let Some(deadline) = state.search_box.hide_after {
        if now >= deadline {
            state.search_box.popup_open = false;
            state.search_box.hide_after = None;
        }
        // Come back to re-check once the delay elapses.
        ui.ctx().request_repaint();
    }

    if !state.search_box.popup_open {
        return;
    }

    let candidates = state.candidates().to_vec();
    let mut committed: Option<String> = None;

    // Keyboard navigation
    let (up, down, enter, escape) = ui.input(|i| {
        (
            i.key_pressed(Key::ArrowUp),
            i.key_pressed(Key::ArrowDown),
            i.key_pressed(Key::Enter),
            i.key_pressed(Key::Escape),
        )
    });

    if escape {
        state.search_box.popup_open = false;
        state.search_box.hide_after = None;
        return;
    }
    if up {
        state.search_box.highlighted = state.search_box.highlighted.saturating_sub(1);
    }
    if down && !candidates.is_empty() {
        state.search_box.highlighted =
            (state.search_box.highlighted + 1).min(candidates.len() - 1);
    }
    if response.lost_focus() && enter {
        committed = candidates.get(state.search_box.highlighted).cloned();
    }

    // Candidate popup below the field
    egui::Area::new(field_id.with("popup"))
        .order(egui::Order::Foreground)
        .fixed_pos(response.rect.left_bottom() + egui::vec2(0.0, 4.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(response.rect.width());

                if candidates.is_empty() {
                    ui.label(
                        RichText::new("No matching products")
                            .color(Color32::from_rgb(251, 191, 36)),
                    );
                    return;
                }

                ScrollArea::vertical()
                    .max_height(POPUP_MAX_HEIGHT)
                    .show(ui, |ui| {
                        for (idx, name) in candidates.iter().enumerate() {
                            let is_highlighted = state.search_box.highlighted == idx;

                            let row = egui::Frame::none()
                                .fill(if is_highlighted {
                                    Color32::from_rgb(60, 60, 80)
                                } else {
                                    Color32::TRANSPARENT
                                })
                                .rounding(4.0)
                                .inner_margin(6.0)
                                .show(ui, |ui| {
                                    ui.set_min_width(FIELD_WIDTH - 12.0);
                                    ui.label(name);
                                })
                                .response;

                            if row.interact(egui::Sense::click()).clicked() {
                                committed = Some(name.clone());
                            }
                            if row.hovered() && !is_highlighted {
                                state.search_box.highlighted = idx;
                            }
                        }
                    });
            });
        });

    if let Some(name) = committed {
        state.select_product(&name);
        state.search_box.buffer = name;
        state.search_box.popup_open = false;
        state.search_box.hide_after = None;
        state.search_box.highlighted = 0;
    }
}
