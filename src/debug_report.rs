use aquabot::{FilterSummary, MapPoint, ResponseVerbose, WaterSource};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
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

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_reply(res: &ResponseVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("💧 Message: \"{}\"", res.text.trim_end()), ansi::CYAN)));
    println!("  {} {}", palette.dim("folded:"), palette.paint(format!("\"{}\"", res.details.folded.trim_end()), ansi::GRAY));

    println!("\n{}", palette.paint("━━━ Candidates ━━━", ansi::GRAY));
    if res.details.candidates.is_empty() {
        println!("{}", palette.dim("  No trigger matched; using fallback reply"));
    } else {
        let winner = res.rule.as_deref();
        let mut winner_marked = false;
        for (idx, cand) in res.details.candidates.iter().enumerate() {
            let is_winner = !winner_marked && Some(cand.rule.as_str()) == winner;
            winner_marked |= is_winner;
            println!(
                "  {} {} {} {}  {}",
                palette.paint(format!("[{}]", idx), ansi::GRAY),
                palette.paint(&cand.rule, ansi::BLUE),
                palette.dim("│ trigger:"),
                palette.paint(format!("\"{}\"", cand.trigger), ansi::YELLOW),
                if is_winner { palette.paint("✓ wins", ansi::GREEN) } else { palette.dim("shadowed") },
            );
        }
        let intents: Vec<String> = res.details.intents.iter_names().map(|(name, _)| name.to_lowercase()).collect();
        println!("  {} {}", palette.dim("intents:"), palette.paint(intents.join(", "), ansi::BLUE));
    }

    println!("\n{}", palette.paint("━━━ Reply ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("intent:"), palette.paint(res.intent.label(), ansi::BLUE));
    println!("  {}", palette.bold(&res.reply));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Scan: {}",
        palette.paint(format!("{:?}", res.details.total), ansi::GREEN),
        palette.paint(format!("{:?}", res.details.scan), ansi::CYAN),
    );
    println!();
}

pub fn print_sources(sources: &[&WaterSource], summary: FilterSummary, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint(format!("━━━ {} water sources ━━━", summary), ansi::GRAY));

    if sources.is_empty() {
        println!("{}", palette.dim("  No sources match the current search and filter"));
    }

    for (idx, source) in sources.iter().enumerate() {
        let status_color = match source.availability {
            aquabot::Availability::Available => ansi::GREEN,
            aquabot::Availability::Limited => ansi::YELLOW,
            aquabot::Availability::Unavailable => ansi::RED,
        };
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(&source.name),
            palette.dim("│"),
            palette.paint(source.availability.label(), status_color),
        );
        println!(
            "      {} {}  {} {}  {} {}",
            palette.dim("kind:"),
            palette.paint(source.kind.label(), ansi::BLUE),
            palette.dim("│ price:"),
            palette.paint(&source.price, ansi::CYAN),
            palette.dim("│ distance:"),
            palette.paint(format!("{} km", source.distance_km), ansi::YELLOW),
        );
        println!("      {} {}  {} {}", palette.dim("address:"), source.address, palette.dim("│ contact:"), source.contact);
        if let Some(hours) = &source.hours {
            println!("      {} {}", palette.dim("hours:"), hours);
        }
        if let Some(capacity) = &source.capacity {
            println!("      {} {}", palette.dim("capacity:"), capacity);
        }
    }
    println!();
}

pub fn print_map_points(points: &[&MapPoint], summary: FilterSummary, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint(format!("━━━ {} map points ━━━", summary), ansi::GRAY));

    if points.is_empty() {
        println!("{}", palette.dim("  No points match the current search and filter"));
    }

    for (idx, point) in points.iter().enumerate() {
        let distance = point.distance_km.map_or_else(|| "-".to_string(), |d| format!("{d} km"));
        println!(
            "  {} {} {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(&point.name),
            palette.dim("│"),
            palette.paint(point.category.label(), ansi::BLUE),
            palette.dim("│"),
            palette.paint(distance, ansi::YELLOW),
        );
        println!("      {} {}", palette.dim("address:"), point.address);
    }
    println!();
}
