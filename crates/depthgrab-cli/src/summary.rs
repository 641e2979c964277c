use console::Style;
use depthgrab_core::snapshot::SnapshotOutcome;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    failed: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            failed: Style::new().red().bold(),
        }
    }
}

pub fn print_snapshot_summary(outcome: &SnapshotOutcome, unreliable_total: u64, total_pixels: u64) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Snapshot"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    let percentage = unreliable_total as f64 / total_pixels as f64 * 100.0;
    println!(
        "  {:<14}{} / {} ({:.2}%)",
        s.label.apply_to("Unreliable"),
        s.value.apply_to(unreliable_total),
        s.value.apply_to(total_pixels),
        percentage
    );

    print_artifact(&s, "CSV", outcome.data_written, &outcome.paths.csv);
    print_artifact(&s, "Summary", outcome.data_written, &outcome.paths.summary);
    print_artifact(&s, "Image", outcome.image_written, &outcome.paths.image);
    println!();
}

fn print_artifact(s: &Styles, label: &str, written: bool, path: &std::path::Path) {
    if written {
        println!(
            "  {:<14}{}",
            s.label.apply_to(label),
            s.path.apply_to(path.display())
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to(label),
            s.failed.apply_to("not written")
        );
    }
}
