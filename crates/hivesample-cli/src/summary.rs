use std::path::PathBuf;

use console::Style;
use hivesample_core::photo::Photo;
use hivesample_core::source::PhotoKind;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    kind: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            kind: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_photo_summary(photo: &Photo) {
    let s = Styles::new();
    let image = &photo.image;

    println!();
    println!("  {}", s.title.apply_to(image.filename()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(photo.path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value
            .apply_to(format!("{}x{}", image.width(), image.height()))
    );
    let kind = match image.kind() {
        PhotoKind::Color => "color",
        PhotoKind::Raw => "raw (color derived)",
    };
    println!("  {:<14}{}", s.label.apply_to("Kind"), s.kind.apply_to(kind));

    for (key, value) in image.blob().iter() {
        println!(
            "    {:<12}{}",
            s.label.apply_to(key),
            s.value.apply_to(value.describe())
        );
    }
}

pub fn print_sample_summary(photo: &Photo, written: &[PathBuf]) {
    let s = Styles::new();

    println!();
    println!(
        "  {} {}",
        s.title.apply_to("Samples from"),
        s.title.apply_to(photo.image.filename())
    );
    if let (Some(start), Some(end)) = (photo.sampler.start(), photo.sampler.end()) {
        println!(
            "  {:<14}{} -> {}",
            s.label.apply_to("Line"),
            s.value.apply_to(start),
            s.value.apply_to(end)
        );
    }
    for path in written {
        println!("    {}", s.path.apply_to(path.display()));
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Written"),
        s.value.apply_to(written.len())
    );
}
