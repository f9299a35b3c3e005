use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use morent::api::RentalApi;
use morent::commands::{CmdMessage, CmdResult, ConfigAction, MessageLevel};
use morent::config::MorentConfig;
use morent::error::{MorentError, Result};
use morent::model::Car;
use morent::source::FileSource;
use morent::store::fs::FileBackend;
use morent::wishlist::WishlistEntry;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RentalApi<FileSource, FileBackend>,
    verbose: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            car_type,
            capacity,
            max_price,
            fuel,
            search,
            tag,
        }) => handle_list(&mut ctx, car_type, capacity, max_price, fuel, search, tag),
        Some(Commands::Show { key }) => handle_show(&mut ctx, &key),
        Some(Commands::Wishlist) => handle_wishlist(&ctx),
        Some(Commands::Toggle { key }) => handle_toggle(&mut ctx, &key),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, None, None, None, None, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    // MORENT_HOME keeps tests and scripted use away from the real data dir
    if let Ok(home) = std::env::var("MORENT_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "morent", "morent")
        .ok_or_else(|| MorentError::Storage("could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir()?;
    let config = MorentConfig::load(&dir).unwrap_or_default();
    let catalog = cli.catalog.clone().or(config.catalog_file);

    let source = FileSource::new(catalog);
    let backend = FileBackend::new(&dir);
    let api = RentalApi::new(source, backend, dir);

    Ok(AppContext {
        api,
        verbose: cli.verbose,
    })
}

#[allow(clippy::too_many_arguments)]
fn handle_list(
    ctx: &mut AppContext,
    car_type: Option<String>,
    capacity: Option<String>,
    max_price: Option<f64>,
    fuel: Option<f64>,
    search: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    let fetch = ctx.api.fetch_catalog()?;
    print_skipped(ctx, &fetch);

    ctx.api
        .select_type(car_type.as_deref().map(str::parse).transpose()?);
    ctx.api
        .select_capacity(capacity.as_deref().map(str::parse).transpose()?);
    if let Some(price) = max_price {
        ctx.api.select_price_ceiling(price)?;
    }
    ctx.api.select_fuel_capacity(fuel);
    ctx.api.select_search(search);
    ctx.api
        .select_tag(tag.as_deref().map(str::parse).transpose()?);

    let result = ctx.api.listing()?;
    print_cars(&result.listed_cars);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, key: &str) -> Result<()> {
    let fetch = ctx.api.fetch_catalog()?;
    print_skipped(ctx, &fetch);

    let result = ctx.api.show(key)?;
    if let Some(car) = &result.car {
        print_detail(car);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_wishlist(ctx: &AppContext) -> Result<()> {
    // The wishlist renders from its local snapshot; no catalog fetch needed.
    let result = ctx.api.wishlist()?;
    print_wishlist(&result.wishlist);
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, key: &str) -> Result<()> {
    let fetch = ctx.api.fetch_catalog()?;
    print_skipped(ctx, &fetch);

    let result = ctx.api.toggle_wishlist(key)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("catalog"), None) => ConfigAction::ShowKey("catalog".to_string()),
        (Some("catalog"), Some(path)) => ConfigAction::SetCatalog(PathBuf::from(path)),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        match &config.catalog_file {
            Some(path) => println!("catalog = {}", path.display()),
            None => println!("catalog = (not set)"),
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_skipped(ctx: &AppContext, fetch: &CmdResult) {
    if ctx.verbose {
        for reason in &fetch.skipped {
            eprintln!("{}", format!("skipped: {}", reason).dimmed());
        }
    }
    print_messages(&fetch.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const PRICE_WIDTH: usize = 12;
const HEART_MARKER: &str = "♥";

fn print_cars(cars: &[Car]) {
    for (i, car) in cars.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);

        let left_prefix = if car.favorite == Some(true) {
            format!("  {} ", HEART_MARKER)
        } else {
            "    ".to_string()
        };

        let specs = format!(
            "{:<10} {:>2} seats  {:>4}L  {:<9}",
            car.car_type.label(),
            car.seating_capacity,
            format_liters(car.fuel_capacity),
            car.transmission.to_string()
        );

        let price = format!("{}/day", format_price(car.price_per_day));

        let fixed_width = left_prefix.width() + idx_str.width() + specs.width() + PRICE_WIDTH + 4;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let name_display = truncate_to_width(&car.name, available);
        let padding = available.saturating_sub(name_display.width());

        print!(
            "{}{}{}{}  {}  {:>width$}",
            left_prefix,
            idx_str,
            name_display.bold(),
            " ".repeat(padding),
            specs.dimmed(),
            price,
            width = PRICE_WIDTH
        );
        if let Some(original) = car.original_price {
            print!("  {}", format_price(original).dimmed().strikethrough());
        }
        println!();
    }
}

fn print_detail(car: &Car) {
    let marker = if car.favorite == Some(true) {
        format!(" {}", HEART_MARKER.red())
    } else {
        String::new()
    };
    println!("{}{}", car.name.bold(), marker);
    if !car.brand.is_empty() {
        println!("{}", car.brand.dimmed());
    }
    println!("--------------------------------");
    println!("Type:          {}", car.car_type.label());
    println!("Seats:         {}", car.seating_capacity);
    println!("Fuel:          {}L", format_liters(car.fuel_capacity));
    println!("Transmission:  {}", car.transmission);
    print!("Price:         {}/day", format_price(car.price_per_day));
    if let Some(original) = car.original_price {
        print!("  {}", format_price(original).dimmed().strikethrough());
    }
    println!();
    if !car.tags.is_empty() {
        let tags: Vec<String> = car.tags.iter().map(|t| t.to_string()).collect();
        println!("Tags:          {}", tags.join(", "));
    }
    if !car.image_url.is_empty() {
        println!("Image:         {}", car.image_url.dimmed());
    }
}

const TIME_WIDTH: usize = 14;

fn print_wishlist(entries: &[WishlistEntry]) {
    for entry in entries {
        let time_ago = format_time_ago(entry.added_at);

        let price = format!("{}/day", format_price(entry.car.price_per_day));
        let fixed_width = 4 + PRICE_WIDTH + TIME_WIDTH + 4;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let name_display = truncate_to_width(&entry.car.name, available);
        let padding = available.saturating_sub(name_display.width());

        println!(
            "  {} {}{}{:>price_width$}  {}",
            HEART_MARKER.red(),
            name_display,
            " ".repeat(padding),
            price,
            time_ago.dimmed(),
            price_width = PRICE_WIDTH
        );
    }
}

fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("${:.0}", value)
    } else {
        format!("${:.2}", value)
    }
}

fn format_liters(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
