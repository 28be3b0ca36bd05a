use std::path::Path;

use console::Style;
use regionseek_core::progress::{ProgressPhase, ProgressSnapshot};
use regionseek_core::selection::{CropRect, ImageSurface};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    empty: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            empty: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_selection_summary(image: &Path, surface: &ImageSurface, crop: &CropRect) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Region Selection"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.path.apply_to(image.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!(
            "{}x{}",
            surface.natural_width, surface.natural_height
        ))
    );

    if crop.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Crop"),
            s.empty.apply_to(format!("{crop} (empty)"))
        );
    } else {
        println!("  {:<14}{}", s.label.apply_to("Crop"), s.value.apply_to(crop));
        println!(
            "  {:<14}{}",
            s.label.apply_to("Area"),
            s.value.apply_to(format!("{} px", crop.area()))
        );
    }
    println!();
}

/// One line per replayed step: time, value, status, visibility and phase.
pub fn print_progress_step(elapsed_ms: u64, snapshot: &ProgressSnapshot, phase: ProgressPhase) {
    let s = Styles::new();
    let visible = if snapshot.visible {
        s.value.apply_to("visible")
    } else {
        s.empty.apply_to("hidden")
    };
    let status = if snapshot.status.is_empty() {
        "-"
    } else {
        snapshot.status.as_str()
    };

    println!(
        "  {:>7}  {:>4}%  {:<12}{:<9}{}",
        s.label.apply_to(format!("{elapsed_ms}ms")),
        snapshot.value,
        status,
        visible,
        s.title.apply_to(phase)
    );
}
