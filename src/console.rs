//! Pretty terminal output with colors and badges.

use colored::Colorize;

// === Startup ===

pub fn print_banner() {
    println!();
    println!("{}", "╔═══════════════════════════════════════════════════════════╗".cyan());
    println!("{}", "║                                                           ║".cyan());
    println!("║     {}      ║", "🔑 Gatepass v0.1.0".bold().white());
    println!("║     {}     ║", "Bearer-token identity service".dimmed());
    println!("{}", "║                                                           ║".cyan());
    println!("{}", "╚═══════════════════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(addr: &str) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}  {}", "POST".yellow(), "/api/auth/register".white(), "Create account".dimmed());
    println!("  {} {}     {}", "POST".yellow(), "/api/auth/login".white(), "Issue bearer token".dimmed());
    println!("  {} {}        {}", "GET ".green(), "/api/auth/me".white(), "Current user (protected)".dimmed());
    println!("  {} {}            {}", "GET ".green(), "/metrics".white(), "Telemetry".dimmed());
    println!("  {} {}             {}", "GET ".green(), "/health".white(), "Health check".dimmed());
    println!();
}

// === Badges ===

fn badge(text: &str, fg: colored::Color, bg: colored::Color) -> colored::ColoredString {
    format!(" {} ", text).color(fg).on_color(bg).bold()
}

// === Core Events ===

pub fn log_register(username: &str) {
    println!(
        "{} {} {}",
        badge("REGISTER", colored::Color::Black, colored::Color::Cyan),
        "user:".dimmed(),
        username.white()
    );
}

pub fn log_login(username: &str) {
    println!(
        "{} {} {} {}",
        badge("LOGIN", colored::Color::Black, colored::Color::Green),
        "user:".dimmed(),
        username.white(),
        "✓".green().bold()
    );
}

pub fn log_login_failure(email: &str) {
    println!(
        "{} {}",
        badge("DENY", colored::Color::White, colored::Color::Red),
        email.red()
    );
}
