//! Configuration system demonstration

use hovertips_config::{ConfigParser, TooltipConfig};
use hovertips_shared::Hook;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    println!("Hovertips Configuration Demo\n");

    let defaults = TooltipConfig::default();
    println!("Defaults:");
    println!("  Fixed: {}", defaults.fixed);
    println!("  Hook: {} -> {}", defaults.hook.target, defaults.hook.tip);
    println!("  Show delay: {}ms", defaults.show_delay_ms);
    println!("  Fade: {} ({}ms)", defaults.fade, defaults.fade_duration_ms);

    // Options the way a page would pass them
    let config = ConfigParser::parse_json(
        r#"{
            "fixed": false,
            "offset": { "x": 12, "y": 12 },
            "hook": { "target": "bottom-right", "tip": "top-left" },
            "fadeSpeed": 150
        }"#,
    )?;
    println!("\nFollow-mouse options:");
    println!("  Hook: {} -> {}", config.hook.target, config.hook.tip);
    println!("  Offset: ({}, {})", config.offset.x, config.offset.y);

    // Builder for Rust callers
    let config = TooltipConfig::builder()
        .hook(Hook::Right, Hook::Left)
        .offset(8.0, 0.0)
        .show_delay_ms(50)
        .build()?;
    println!("\nBuilder:");
    println!("  Hook: {} -> {}", config.hook.target, config.hook.tip);
    println!("  Show delay: {}ms", config.show_delay_ms);

    // Invalid options are reported with the offending field
    match ConfigParser::parse_json(r#"{ "hook": { "tip": "centre" } }"#) {
        Ok(_) => println!("\nUnexpectedly accepted an unknown hook"),
        Err(e) => println!("\nRejected: {}", e),
    }

    Ok(())
}
