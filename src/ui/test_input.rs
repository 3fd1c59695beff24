// Headless frame helpers for widget tests
// Feed pointer events through `Context::run` and find widgets by their painted text

use eframe::egui;

/// Screen used by every test frame
pub fn screen() -> egui::Rect {
    egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1200.0, 800.0))
}

/// Run one frame with `events`, returning the full output
pub fn run_frame(
    ctx: &egui::Context,
    events: Vec<egui::Event>,
    run_ui: impl FnOnce(&egui::Context),
) -> egui::FullOutput {
    let input = egui::RawInput {
        screen_rect: Some(screen()),
        events,
        ..Default::default()
    };
    ctx.run(input, run_ui)
}

pub fn pointer_moved(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![egui::Event::PointerMoved(pos)]
}

pub fn pointer_button(pos: egui::Pos2, pressed: bool) -> Vec<egui::Event> {
    vec![egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }]
}

/// The three input frames of a primary click at `pos`: move, press, release
pub fn click_at(pos: egui::Pos2) -> [Vec<egui::Event>; 3] {
    [pointer_moved(pos), pointer_button(pos, true), pointer_button(pos, false)]
}

/// Rectangle of the painted text exactly equal to `text`
pub fn text_rect(output: &egui::FullOutput, text: &str) -> Option<egui::Rect> {
    output
        .shapes
        .iter()
        .find_map(|clipped| find_text(&clipped.shape, text))
}

fn find_text(shape: &egui::Shape, text: &str) -> Option<egui::Rect> {
    match shape {
        egui::Shape::Text(t) if t.galley.text() == text => {
            Some(egui::Rect::from_min_size(t.pos, t.galley.size()))
        }
        egui::Shape::Vec(shapes) => shapes.iter().find_map(|s| find_text(s, text)),
        _ => None,
    }
}
