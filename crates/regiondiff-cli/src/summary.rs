use std::path::Path;

use console::Style;
use regiondiff_core::diff::DiffReport;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    mode: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            mode: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_compare_summary(left: &Path, right: &Path, report: &DiffReport, output: &Path) {
    let s = Styles::new();
    let (w, h) = report.image.dimensions();

    println!();
    println!("  {}", s.title.apply_to("Region Diff"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(11)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Left"), s.path.apply_to(left.display()));
    println!("  {:<14}{}", s.label.apply_to("Right"), s.path.apply_to(right.display()));
    println!("  {:<14}{}", s.label.apply_to("Mode"), s.mode.apply_to(report.mode.label()));
    println!("  {:<14}{}", s.label.apply_to("Size"), s.value.apply_to(format!("{}x{}", w, h)));

    if report.mode.is_passthrough() {
        println!("  {:<14}{}", s.label.apply_to("Changed"), s.label.apply_to("n/a"));
    } else {
        let pct = if report.total_pixels > 0 {
            report.changed_pixels as f64 * 100.0 / report.total_pixels as f64
        } else {
            0.0
        };
        println!(
            "  {:<14}{}",
            s.label.apply_to("Changed"),
            s.value.apply_to(format!(
                "{} of {} pixels ({:.1}%)",
                report.changed_pixels, report.total_pixels, pct
            ))
        );
    }

    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!();
}
