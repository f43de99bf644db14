use metartrans::{RunResult, StepOutcome, Translations};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, s: &str, code: &str) -> String {
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s.as_ref(), color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), DIM)
        }
    }
}

/// One line per translation: raw text, then its meaning.
pub fn print_translations(translations: &Translations, color: bool) {
    let palette = ansi::Palette::new(color);
    let width = translations.keys().map(|k| k.chars().count()).max().unwrap_or(0);

    for (raw, text) in translations.iter() {
        println!("{}  {}", palette.paint(format!("{raw:<width$}"), ansi::YELLOW), text);
    }
}

/// Full report: steps in order, translations, leftover text and timing.
pub fn print_run(input: &str, run: &RunResult, color: bool) {
    let palette = ansi::Palette::new(color);
    let metrics = &run.metrics;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Translating: \"{input}\""), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Steps ━━━", ansi::GRAY));
    if metrics.steps.is_empty() {
        println!("{}", palette.dim("  No handler applied"));
    }
    for (idx, step) in metrics.steps.iter().enumerate() {
        let (marker, detail) = match &step.outcome {
            StepOutcome::Translated { raw, .. } => (palette.paint("✓", ansi::GREEN), palette.paint(raw, ansi::YELLOW)),
            StepOutcome::Failed { message } => (palette.paint("✗", ansi::RED), palette.paint(message, ansi::RED)),
        };
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            marker,
            palette.paint(&step.handler, ansi::BLUE),
            palette.dim("│"),
            detail,
        );
        println!("      {}", palette.dim(format!("{:?}", step.duration)));
    }

    println!("\n{}", palette.paint("━━━ Translations ━━━", ansi::GRAY));
    if run.translations.is_empty() {
        println!("{}", palette.dim("  Nothing translated"));
    }
    for (raw, text) in run.translations.iter() {
        println!("  {} {} {}", palette.paint(raw, ansi::YELLOW), palette.dim("→"), palette.bold(text));
    }

    if !metrics.leftover.is_empty() {
        println!("\n{}", palette.paint("━━━ Unrecognised ━━━", ansi::GRAY));
        println!("  {}", palette.dim(&metrics.leftover));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Steps: {}  │  Failures: {}",
        palette.paint(format!("{:?}", metrics.total), ansi::GREEN),
        palette.paint(metrics.steps.len().to_string(), ansi::CYAN),
        palette.dim(metrics.failures().to_string()),
    );
    println!();
}
