use console::{style, Key, Term};
use tui_banner::{Align, Banner, ColorMode, Fill, Gradient, GradientDirection, Palette};

/// Color palette — cool slate/teal gradient.
const BRAND: u8 = 73; // cadet blue
const DIM: u8 = 240; // dim text

const TAGLINE: &str = "Local inventory tracking for a single user";

/// Show the splash banner, wait for Enter, then clear and print a short
/// post-splash header.
pub fn show_splash() {
    let term = Term::stdout();
    let _ = term.clear_screen();

    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");

    let (_, term_cols) = term.size();
    let term_w = term_cols as usize;

    let center = |text_w: usize| -> String {
        if term_w > text_w + 4 {
            " ".repeat((term_w - text_w) / 2)
        } else {
            "  ".to_string()
        }
    };

    let palette = Palette::from_hex(&[
        "#AFD7D7", // pale cyan (glow)
        "#5FAFAF", // teal (brand core)
        "#5F87AF", // steel blue (mid)
        "#5F5F87", // slate (deep)
    ]);
    let gradient = Gradient::new(palette.colors().to_vec(), GradientDirection::Diagonal);

    let banner_text = match Banner::new("STOCKROOM") {
        Ok(b) => b
            .gradient(gradient)
            .fill(Fill::Keep)
            .align(Align::Center)
            .trim_vertical(true)
            .color_mode(ColorMode::TrueColor)
            .width(term_w)
            .render(),
        Err(_) => {
            // Fallback if FIGlet font fails
            let p = center(9);
            format!("{}{}\n", p, style("STOCKROOM").color256(BRAND).bold())
        }
    };

    println!();
    print!("{}", banner_text);

    {
        let version_str = format!("v{} ({})", version, git_hash);
        let p = center(version_str.len());
        println!("{}{}", p, style(version_str).color256(DIM));
    }

    {
        let p = center(TAGLINE.len());
        println!("{}{}", p, style(TAGLINE).white().bold());
    }
    println!();

    let guide: &[(&str, &str)] = &[
        ("/login", "Log in to an existing account"),
        ("/register", "Create a new account"),
        ("/help", "List all commands"),
    ];
    {
        let p = center(48);
        println!("{}  {}", p, style("Quick Start:").white().bold());
        println!();
        for (cmd, desc) in guide {
            println!(
                "{}    {:<12} {}",
                p,
                style(cmd).color256(BRAND),
                style(desc).dim(),
            );
        }
    }
    println!();

    {
        let p = center(24);
        println!("{}  Press {} to continue", p, style("Enter").white().bold());
    }

    loop {
        match term.read_key() {
            Ok(Key::Enter) => break,
            Ok(Key::Escape) => break,
            Err(_) => break,
            _ => {}
        }
    }

    let _ = term.clear_screen();
    println!(
        "  {} {}  {}",
        style("Stockroom").color256(BRAND).bold(),
        style(format!("v{}", version)).dim(),
        style("✔ ready").green().dim(),
    );
    println!("  {} {}", style("Type").dim(), style("/help").white().bold());
    println!();
}
