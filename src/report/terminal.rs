use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::models::{DirectoryView, UnionRecord};

/// Render the directory to the terminal.
///
/// The "data unavailable" state (fetch failed) and the "empty directory" state
/// (zero records, no error) are rendered distinctly.
pub fn render(view: &DirectoryView, endpoint: &str, verbose: bool, quiet: bool) -> Result<()> {
    let total = view.unions.len();
    let institution_count: usize = view.unions.iter().map(|u| u.institutions.len()).sum();
    let linked_count = view.unions.iter().filter(|u| u.has_links()).count();

    if quiet {
        match &view.error {
            Some(message) => println!("Error: {}", message),
            None => println!(
                "Unions: {}  Institutions: {}  With links: {}",
                total, institution_count, linked_count
            ),
        }
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "cu-directory".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Endpoint: {}\n", endpoint);

    if let Some(message) = &view.error {
        println!(" {} Data unavailable", "[ERROR]".red().bold());
        println!(" {}\n", message);
        return Ok(());
    }

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Total unions       : {}", total));
    println!(
        " │  {:<48} │",
        format!("Institutions       : {}", institution_count)
    );
    println!(
        " │  {:<48} │",
        format!("Unions with links  : {}", linked_count)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if view.unions.is_empty() {
        println!(" {} No unions found", "[EMPTY]".yellow().bold());
        println!(" Try again later or check the API response.\n");
        return Ok(());
    }

    render_table(&view.unions);
    println!();

    if verbose {
        for union in &view.unions {
            render_detail(union);
        }
    }

    Ok(())
}

fn render_table(unions: &[UnionRecord]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("University").add_attribute(Attribute::Bold),
            Cell::new("Region").add_attribute(Attribute::Bold),
            Cell::new("Website").add_attribute(Attribute::Bold),
        ]);

    for union in unions {
        table.add_row(vec![
            Cell::new(&union.name),
            Cell::new(union.university.as_deref().unwrap_or("—")),
            Cell::new(union.region.as_deref().unwrap_or("—")),
            Cell::new(union.website.as_deref().unwrap_or("—")),
        ]);
    }

    println!("{}", table);
}

fn render_detail(union: &UnionRecord) {
    println!(" {}", union.name.bold());
    if let Some(region) = &union.region {
        println!("   Region: {}", region);
    }
    if let Some(full_name) = &union.full_name {
        match &union.abbreviation {
            Some(abbr) => println!("   {} ({})", full_name, abbr),
            None => println!("   {}", full_name),
        }
    }
    if let Some(campus) = &union.campus {
        println!("   Campus: {}", campus);
    }
    if let Some(description) = &union.description {
        println!("   {}", description);
    }
    for (label, link) in [
        ("Website", &union.website),
        ("Facebook", &union.facebook),
        ("Twitter", &union.twitter),
        ("Instagram", &union.instagram),
    ] {
        if let Some(url) = link {
            println!("   {:<9}: {}", label, url.cyan());
        }
    }
    for inst in &union.institutions {
        println!("   {} {}", "•".cyan(), inst.display_name);
        let postcode = inst.postcode.as_deref().unwrap_or("Postcode unavailable");
        match &inst.region {
            Some(region) => println!("     {} · {}", postcode, region),
            None => println!("     {}", postcode),
        }
        if let Some(map_link) = &inst.map_link {
            println!("     {}", map_link.cyan());
        }
    }
    println!();
}
