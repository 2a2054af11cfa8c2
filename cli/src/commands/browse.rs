use anyhow::Result;
use colored::*;
use serde_json::json;
use voyage_app::Navigation;

use super::TabContext;

/// Navigate to `path` and show the page that renders
pub fn visit(ctx: &TabContext, path: &str, format: String) -> Result<()> {
    let shell = ctx.shell()?;
    let navigation = shell.navigate(path)?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&navigation)?),
        _ => print_navigation_text(&navigation),
    }

    Ok(())
}

fn print_navigation_text(navigation: &Navigation) {
    for hop in &navigation.redirects {
        println!("{} {}", "Redirected to".yellow(), hop);
    }
    println!("{} {}", "Page:".bold(), navigation.page);
    println!("{} {}", "Path:".bold(), navigation.path);
}

/// Show the navigation bar
pub fn nav(ctx: &TabContext, format: String) -> Result<()> {
    let shell = ctx.shell()?;
    let bar = shell.navigation();

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&bar)?),
        _ => {
            if let Some(greeting) = &bar.greeting {
                println!("{}", greeting.cyan().bold());
            }
            for affordance in &bar.affordances {
                println!("  {:<18} {}", affordance.label(), affordance.target());
            }
            println!("Logo: {}", bar.logo_target);
        }
    }

    Ok(())
}

/// List the route table
pub fn routes(ctx: &TabContext, format: String) -> Result<()> {
    let shell = ctx.shell()?;
    let routes = shell.routes().routes();

    match format.as_str() {
        "json" => {
            let value = json!({ "total": routes.len(), "routes": routes });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => {
            println!("{}", "=== Voyage Routes ===".bold());
            println!("{}", "─".repeat(50));
            for route in routes {
                println!("{:<26} {:<12} {}", route.path, route.access.as_str(), route.page);
            }
            println!("{}", "─".repeat(50));
            println!("Total routes: {}", routes.len());
        }
    }

    Ok(())
}
