use anyhow::Result;
use console::Style;
use regiondiff_core::diff::DiffMode;

/// Print every comparison mode with its label and threshold.
pub fn run() -> Result<()> {
    let header = Style::new().cyan().bold();
    let dim = Style::new().dim();

    println!(
        "  {:<12}{:<24}{}",
        header.apply_to("Mode"),
        header.apply_to("Label"),
        header.apply_to("Threshold")
    );
    for mode in DiffMode::ALL {
        let threshold = match mode.threshold() {
            Some(t) => format!("{}", t),
            None => dim.apply_to("pass-through").to_string(),
        };
        println!("  {:<12}{:<24}{}", format!("{:?}", mode), mode.label(), threshold);
    }
    Ok(())
}
